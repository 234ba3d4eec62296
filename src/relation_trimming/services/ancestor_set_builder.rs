use crate::relation_trimming::domain::{
    AncestorClosure, AugmentedRecord, CanonicalRecord, ProductCode,
};

/// AncestorSetBuilder service for computing per-row ancestor closures
///
/// Pure and row-local: each closure depends only on the row it belongs to.
pub struct AncestorSetBuilder;

impl AncestorSetBuilder {
    /// Attaches `{primary} ∪ primary_ancestors` and `{related} ∪ related_ancestors`
    /// to every row, preserving order
    pub fn augment(rows: Vec<CanonicalRecord>) -> Vec<AugmentedRecord> {
        rows.into_iter().map(Self::augment_row).collect()
    }

    fn augment_row(record: CanonicalRecord) -> AugmentedRecord {
        let primary_closure = Self::closure(&record.primary, &record.primary_ancestors);
        let related_closure = Self::closure(&record.related, &record.related_ancestors);
        AugmentedRecord::new(record, primary_closure, related_closure)
    }

    /// Duplicates collapse, and listing the node as its own ancestor is a no-op
    pub fn closure(node: &ProductCode, ancestors: &[ProductCode]) -> AncestorClosure {
        std::iter::once(node)
            .chain(ancestors.iter())
            .cloned()
            .collect()
    }
}
