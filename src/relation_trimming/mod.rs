/// Relation trimming domain - pure business logic
///
/// Contains the value objects, the four trimming stages and the row
/// priority policy. Nothing here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
