//! relation-trim - trims product relationship tables
//!
//! Takes a table of directed product-to-product relations, each carrying the
//! ancestor lineage of both endpoints, and keeps only the edges that are not
//! already implied by an accepted edge between the same lineages. Every kept
//! edge is emitted in both directions.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`relation_trimming`): Pure trimming logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use relation_trim::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let rows = vec![
//!     RelationRecord::new(
//!         ProductCode::new("A")?,
//!         ProductCode::new("B")?,
//!         1,
//!         vec![ProductCode::new("PA")?],
//!         vec![],
//!     ),
//!     // Implied by A -> B because A is an ancestor of A1
//!     RelationRecord::new(
//!         ProductCode::new("A1")?,
//!         ProductCode::new("B")?,
//!         1,
//!         vec![ProductCode::new("A")?],
//!         vec![],
//!     ),
//! ];
//!
//! let trimmed = trim(rows)?;
//! assert_eq!(trimmed.len(), 2);
//! assert_eq!(trimmed[0].direction, Direction::Forward);
//! assert_eq!(trimmed[1].direction, Direction::Reverse);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod relation_trimming;
pub mod shared;

pub use relation_trimming::services::trim;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, TrimRequest, TrimResponse};
    pub use crate::application::use_cases::TrimRelationsUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, RelationFormatter, RelationTableReader,
    };
    pub use crate::relation_trimming::domain::{
        Direction, Extras, OutputRecord, ProductCode, RelationRecord, TrimSummary,
    };
    pub use crate::relation_trimming::policies::{RowPriority, SortOrder};
    pub use crate::relation_trimming::services::{trim, RelationTrimmer};
    pub use crate::shared::Result;
}
