use crate::application::dto::TrimResponse;
use crate::shared::Result;

/// RelationFormatter port for rendering a trimming result
///
/// This port abstracts the output format (JSON table, Markdown report, etc.).
pub trait RelationFormatter {
    /// Formats the trimmed relations and their summary
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &TrimResponse) -> Result<String>;
}
