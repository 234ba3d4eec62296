use clap::Parser;
use std::path::PathBuf;

use relation_trim::application::dto::OutputFormat;
use relation_trim::config::ConfigFile;
use relation_trim::relation_trimming::policies::{RowPriority, SortOrder};
use relation_trim::shared::Result;

/// Trim a product relationship table down to its non-redundant edges
#[derive(Parser, Debug)]
#[command(name = "relation-trim")]
#[command(version)]
#[command(
    about = "Trim a product relationship table down to its non-redundant edges",
    long_about = None
)]
pub struct Args {
    /// Relation table to trim (.json, or .jsonl/.ndjson for JSON Lines)
    pub input: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Evaluate rows ordered by this extra column before trimming
    #[arg(short, long = "sort-by", value_name = "COLUMN")]
    pub sort_by: Option<String>,

    /// Order used with --sort-by: asc or desc [default: desc]
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Path to a config file (defaults to ./relation-trim.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options after merging the command line over the config file
#[derive(Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub priority: Option<RowPriority>,
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges these arguments over an optional config file. CLI values win.
    pub fn resolve(self, config: Option<&ConfigFile>) -> Result<Settings> {
        let format = self
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();

        let sort_by = self
            .sort_by
            .or_else(|| config.and_then(|c| c.sort_by.clone()));
        let order = self
            .order
            .or_else(|| config.and_then(ConfigFile::sort_order))
            .unwrap_or_default();

        if sort_by.is_none() && self.order.is_some() && !self.quiet {
            eprintln!("⚠️  Warning: --order has no effect without --sort-by.");
        }

        let priority = sort_by
            .map(|key| RowPriority::new(key, order))
            .transpose()?;

        Ok(Settings {
            input: self.input,
            format,
            output: self.output,
            priority,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("relation-trim").chain(args.iter().copied()))
            .unwrap()
    }

    fn config(format: Option<&str>, sort_by: Option<&str>, order: Option<&str>) -> ConfigFile {
        ConfigFile {
            format: format.map(String::from),
            sort_by: sort_by.map(String::from),
            order: order.map(String::from),
            ..ConfigFile::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&["relations.json"]).resolve(None).unwrap();
        assert_eq!(settings.input, PathBuf::from("relations.json"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.output.is_none());
        assert!(settings.priority.is_none());
        assert!(!settings.quiet);
    }

    #[test]
    fn test_all_flags() {
        let settings = parse(&[
            "relations.jsonl",
            "-f",
            "md",
            "-o",
            "out.md",
            "-s",
            "confidence",
            "--order",
            "asc",
            "-q",
        ])
        .resolve(None)
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.output, Some(PathBuf::from("out.md")));
        let priority = settings.priority.unwrap();
        assert_eq!(priority.key(), "confidence");
        assert_eq!(priority.order(), SortOrder::Ascending);
        assert!(settings.quiet);
    }

    #[test]
    fn test_config_fills_missing_values() {
        let cfg = config(Some("markdown"), Some("weight"), Some("asc"));
        let settings = parse(&["relations.json"]).resolve(Some(&cfg)).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        let priority = settings.priority.unwrap();
        assert_eq!(priority.key(), "weight");
        assert_eq!(priority.order(), SortOrder::Ascending);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = config(Some("markdown"), Some("weight"), Some("asc"));
        let settings = parse(&["relations.json", "-f", "json", "-s", "score", "--order", "desc"])
            .resolve(Some(&cfg))
            .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        let priority = settings.priority.unwrap();
        assert_eq!(priority.key(), "score");
        assert_eq!(priority.order(), SortOrder::Descending);
    }

    #[test]
    fn test_order_without_sort_by_is_ignored() {
        let settings = parse(&["relations.json", "--order", "asc", "-q"])
            .resolve(None)
            .unwrap();
        assert!(settings.priority.is_none());
    }

    #[test]
    fn test_empty_sort_by_rejected() {
        let result = parse(&["relations.json", "-s", ""]).resolve(None);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_is_parse_error() {
        let result = Args::try_parse_from(["relation-trim", "relations.json", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_input_is_parse_error() {
        assert!(Args::try_parse_from(["relation-trim"]).is_err());
    }
}
