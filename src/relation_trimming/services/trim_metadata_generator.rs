use crate::relation_trimming::domain::TrimMetadata;
use chrono::Utc;
use uuid::Uuid;

/// TrimMetadataGenerator service for stamping a trimming run
pub struct TrimMetadataGenerator;

impl TrimMetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> TrimMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        TrimMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Uses the compile-time package version from Cargo.toml
    pub fn generate_default_metadata() -> TrimMetadata {
        Self::generate_metadata("relation-trim", env!("CARGO_PKG_VERSION"))
    }
}
