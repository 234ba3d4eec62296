use super::{Direction, Extras, ProductCode};

/// A relation rewritten into the forward orientation
///
/// There is no direction field: every canonical record points from
/// `primary` to `related`. The reverse reading is only reconstructed when
/// accepted records are expanded for output.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    pub primary: ProductCode,
    pub related: ProductCode,
    pub primary_ancestors: Vec<ProductCode>,
    pub related_ancestors: Vec<ProductCode>,
    pub extras: Extras,
}

impl CanonicalRecord {
    pub fn direction(&self) -> Direction {
        Direction::Forward
    }
}
