use crate::relation_trimming::domain::{OutputRecord, TrimMetadata, TrimSummary};

/// TrimResponse - Internal response DTO from the trimming use case
///
/// Formatters turn this into the requested output format.
#[derive(Debug, Clone)]
pub struct TrimResponse {
    /// Trimmed relations, forward/reverse pairs in acceptance order
    pub relations: Vec<OutputRecord>,
    /// Row counts for the run
    pub summary: TrimSummary,
    /// Run metadata (timestamp, tool info, run id)
    pub metadata: TrimMetadata,
}

impl TrimResponse {
    pub fn new(relations: Vec<OutputRecord>, summary: TrimSummary, metadata: TrimMetadata) -> Self {
        Self {
            relations,
            summary,
            metadata,
        }
    }
}
