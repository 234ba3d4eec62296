use crate::relation_trimming::domain::RelationRecord;
use crate::shared::Result;
use std::path::Path;

/// RelationTableReader port for loading relation rows from storage
///
/// The storage format and column conventions belong to the adapter. The
/// core only sees validated `RelationRecord`s, in table order.
pub trait RelationTableReader {
    /// Reads every row of the relation table at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The table does not exist or cannot be read
    /// - A row is malformed (missing column, empty product code, etc.)
    fn read_relations(&self, path: &Path) -> Result<Vec<RelationRecord>>;
}
