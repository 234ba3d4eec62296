use crate::adapters::outbound::filesystem::RelationRow;
use crate::application::dto::TrimResponse;
use crate::ports::outbound::RelationFormatter;
use crate::shared::Result;

/// JsonFormatter adapter writing the trimmed table as a JSON array
///
/// Rows use the same columns the reader accepts, so the output of one run
/// can be fed straight back in.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationFormatter for JsonFormatter {
    fn format(&self, response: &TrimResponse) -> Result<String> {
        let rows: Vec<RelationRow> = response.relations.iter().map(RelationRow::from).collect();
        let mut json = serde_json::to_string_pretty(&rows)
            .map_err(|e| anyhow::anyhow!("Failed to serialize trimmed relations: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
