use crate::relation_trimming::policies::RowPriority;
use std::path::PathBuf;

/// TrimRequest - Internal request DTO for the trimming use case
#[derive(Debug, Clone)]
pub struct TrimRequest {
    /// Path to the relation table
    pub input_path: PathBuf,
    /// Optional priority sort applied before filtering
    pub priority: Option<RowPriority>,
}

impl TrimRequest {
    pub fn new(input_path: PathBuf, priority: Option<RowPriority>) -> Self {
        Self {
            input_path,
            priority,
        }
    }
}
