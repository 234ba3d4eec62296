/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the application core reads relation
/// tables, formats results and reports progress through them.
pub mod outbound;
