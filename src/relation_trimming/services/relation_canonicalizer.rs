use crate::relation_trimming::domain::{CanonicalRecord, Direction, RelationRecord};
use crate::shared::error::TrimError;
use crate::shared::Result;

/// RelationCanonicalizer service for folding both directions into one
///
/// Reverse rows are rewritten as forward rows by swapping the endpoints
/// together with their ancestor lists, so the conflict rule only has to be
/// evaluated once per logical relationship.
pub struct RelationCanonicalizer;

impl RelationCanonicalizer {
    /// Rewrites every row into the forward orientation, preserving order
    ///
    /// # Errors
    /// Fails with `TrimError::InvalidDirection` on the first row whose
    /// direction is neither 1 nor -1. No partial output is returned.
    pub fn canonicalize(rows: Vec<RelationRecord>) -> Result<Vec<CanonicalRecord>> {
        rows.into_iter()
            .enumerate()
            .map(|(row, record)| Self::canonicalize_row(row, record))
            .collect()
    }

    fn canonicalize_row(row: usize, record: RelationRecord) -> Result<CanonicalRecord> {
        let direction = Direction::try_from(record.direction)
            .map_err(|value| TrimError::InvalidDirection { row, value })?;

        let RelationRecord {
            primary,
            related,
            primary_ancestors,
            related_ancestors,
            extras,
            ..
        } = record;

        Ok(match direction {
            Direction::Forward => CanonicalRecord {
                primary,
                related,
                primary_ancestors,
                related_ancestors,
                extras,
            },
            Direction::Reverse => CanonicalRecord {
                primary: related,
                related: primary,
                primary_ancestors: related_ancestors,
                related_ancestors: primary_ancestors,
                extras,
            },
        })
    }
}
