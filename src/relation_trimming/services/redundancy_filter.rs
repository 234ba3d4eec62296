use crate::relation_trimming::domain::{AugmentedRecord, KeptIndex};

/// RedundancyFilter service - keeps a minimal generating set of relations
///
/// Rows are scanned in input order. A row is dropped when some ancestor of
/// its primary already has an accepted relation to some ancestor of its
/// related endpoint; otherwise it is accepted and its direct pair recorded.
///
/// The result depends on input order: earlier rows win the right to
/// represent a lineage pair. Callers that care which row survives must sort
/// beforehand (see `RowPriority`). The scan is inherently sequential and is
/// never split across threads.
pub struct RedundancyFilter;

impl RedundancyFilter {
    /// Returns the accepted subsequence of `rows`, in original order
    ///
    /// The `KeptIndex` is owned by this pass; nothing outside it can observe
    /// or mutate it while rows are being evaluated, and it is dropped on return.
    pub fn filter(rows: Vec<AugmentedRecord>) -> Vec<AugmentedRecord> {
        let mut kept = KeptIndex::default();
        let mut accepted = Vec::with_capacity(rows.len());

        for row in rows {
            if kept.conflicts_with(&row) {
                continue;
            }
            kept.keep(row.primary(), row.related());
            accepted.push(row);
        }

        accepted
    }
}
