use super::{CanonicalRecord, ProductCode};
use std::collections::HashSet;

/// Self-inclusive set of an endpoint and its declared ancestors
pub type AncestorClosure = HashSet<ProductCode>;

/// A canonical record together with the ancestor closures of both endpoints
///
/// Closures belong to this edge instance. The same product can appear in
/// other rows with a different ancestry, so they are never cached per node.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedRecord {
    record: CanonicalRecord,
    primary_closure: AncestorClosure,
    related_closure: AncestorClosure,
}

impl AugmentedRecord {
    pub fn new(
        record: CanonicalRecord,
        primary_closure: AncestorClosure,
        related_closure: AncestorClosure,
    ) -> Self {
        Self {
            record,
            primary_closure,
            related_closure,
        }
    }

    pub fn record(&self) -> &CanonicalRecord {
        &self.record
    }

    pub fn primary(&self) -> &ProductCode {
        &self.record.primary
    }

    pub fn related(&self) -> &ProductCode {
        &self.record.related
    }

    pub fn primary_closure(&self) -> &AncestorClosure {
        &self.primary_closure
    }

    pub fn related_closure(&self) -> &AncestorClosure {
        &self.related_closure
    }

    pub fn into_record(self) -> CanonicalRecord {
        self.record
    }
}
