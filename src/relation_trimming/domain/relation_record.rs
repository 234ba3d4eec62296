use super::ProductCode;
use serde_json::Value;
use std::collections::BTreeMap;

/// Passthrough columns carried unchanged from input rows to output rows
///
/// Keys are kept in sorted order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras(BTreeMap<String, Value>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for Extras {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// One row of the input relation table
///
/// `direction` holds the raw value as read. It is validated when the batch
/// is canonicalized, so a record can exist with an invalid direction until
/// then. Ancestor lists may be empty, repeat codes, or even list the
/// endpoint itself; set semantics absorb all of that later.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationRecord {
    pub primary: ProductCode,
    pub related: ProductCode,
    pub direction: i64,
    pub primary_ancestors: Vec<ProductCode>,
    pub related_ancestors: Vec<ProductCode>,
    pub extras: Extras,
}

impl RelationRecord {
    pub fn new(
        primary: ProductCode,
        related: ProductCode,
        direction: i64,
        primary_ancestors: Vec<ProductCode>,
        related_ancestors: Vec<ProductCode>,
    ) -> Self {
        Self {
            primary,
            related,
            direction,
            primary_ancestors,
            related_ancestors,
            extras: Extras::default(),
        }
    }

    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }
}
