mod cli;

use cli::Args;
use relation_trim::adapters::outbound::console::StderrProgressReporter;
use relation_trim::adapters::outbound::filesystem::FileSystemReader;
use relation_trim::application::dto::TrimRequest;
use relation_trim::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use relation_trim::application::use_cases::TrimRelationsUseCase;
use relation_trim::config::{discover_config, load_config_from_path};
use relation_trim::shared::error::{ExitCode, TrimError};
use relation_trim::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Typed errors pick their own code; anything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<TrimError>()
        .map(TrimError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad arguments)
    let args = Args::parse_args();

    // Load config: explicit path, else auto-discovery in the working directory
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let settings = args.resolve(config.as_ref())?;

    // Create adapters (Dependency Injection)
    let relation_reader = FileSystemReader::new();
    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = TrimRelationsUseCase::new(relation_reader, progress_reporter);

    let request = TrimRequest::new(settings.input, settings.priority);
    let response = use_case.execute(request)?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}
