use super::{AugmentedRecord, ProductCode};
use std::collections::{HashMap, HashSet};

/// Accepted forward pairs, keyed by primary
///
/// Holds only the direct `primary -> related` pairs of accepted records,
/// never their closures. One index lives for exactly one filtering pass.
#[derive(Debug, Default)]
pub struct KeptIndex {
    kept: HashMap<ProductCode, HashSet<ProductCode>>,
}

impl KeptIndex {
    /// True when some ancestor of the record's primary already has an
    /// accepted relation to some ancestor of its related endpoint
    pub fn conflicts_with(&self, record: &AugmentedRecord) -> bool {
        let related_closure = record.related_closure();
        record.primary_closure().iter().any(|ancestor| {
            self.kept
                .get(ancestor)
                .is_some_and(|targets| !targets.is_disjoint(related_closure))
        })
    }

    /// Records the direct pair of an accepted record
    pub fn keep(&mut self, primary: &ProductCode, related: &ProductCode) {
        self.kept
            .entry(primary.clone())
            .or_default()
            .insert(related.clone());
    }
}
