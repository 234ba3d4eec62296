use super::{Direction, Extras, ProductCode};

/// One row of the trimmed relation table
///
/// Same shape as the input row, with a validated direction and ancestor
/// lists that never contain the endpoint they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub primary: ProductCode,
    pub related: ProductCode,
    pub direction: Direction,
    pub primary_ancestors: Vec<ProductCode>,
    pub related_ancestors: Vec<ProductCode>,
    pub extras: Extras,
}
