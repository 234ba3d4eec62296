use super::relation_row::RelationRow;
use crate::ports::outbound::RelationTableReader;
use crate::relation_trimming::domain::RelationRecord;
use crate::shared::error::TrimError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Layout of a relation table file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableLayout {
    /// A JSON array of rows, or an object holding one under `relations`
    Json,
    /// One JSON row object per line
    JsonLines,
}

impl TableLayout {
    fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("jsonl") | Some("ndjson") => TableLayout::JsonLines,
            _ => TableLayout::Json,
        }
    }
}

/// FileSystemReader adapter for reading relation tables from disk
///
/// Implements the RelationTableReader port for JSON and JSON Lines files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "relation table")?;

        fs::read_to_string(path).map_err(|e| {
            TrimError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_json(content: &str) -> std::result::Result<Vec<Value>, String> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

        match document {
            Value::Array(rows) => Ok(rows),
            Value::Object(mut object) => match object.remove("relations") {
                Some(Value::Array(rows)) => Ok(rows),
                _ => Err("expected a JSON array of rows or an object with a 'relations' array"
                    .to_string()),
            },
            _ => Err("expected a JSON array of rows".to_string()),
        }
    }

    fn parse_json_lines(content: &str) -> std::result::Result<Vec<Value>, String> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| format!("line {}: invalid JSON: {}", idx + 1, e))
            })
            .collect()
    }

    fn parse_rows(path: &Path, content: &str) -> Result<Vec<RelationRecord>> {
        let parse_error = |details: String| TrimError::RelationTableParseError {
            path: path.to_path_buf(),
            details,
        };

        let values = match TableLayout::for_path(path) {
            TableLayout::Json => Self::parse_json(content),
            TableLayout::JsonLines => Self::parse_json_lines(content),
        }
        .map_err(parse_error)?;

        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                serde_json::from_value::<RelationRow>(value)
                    .map_err(anyhow::Error::from)
                    .and_then(RelationRow::into_record)
                    .map_err(|e| anyhow::Error::from(parse_error(format!("row {}: {:#}", idx, e))))
            })
            .collect()
    }
}

impl RelationTableReader for FileSystemReader {
    fn read_relations(&self, path: &Path) -> Result<Vec<RelationRecord>> {
        if !path.exists() {
            return Err(TrimError::RelationTableNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the input path; relative paths resolve against the current directory."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        Self::parse_rows(path, &content)
    }
}
