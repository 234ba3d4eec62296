use crate::application::dto::{TrimRequest, TrimResponse};
use crate::ports::outbound::{ProgressReporter, RelationTableReader};
use crate::relation_trimming::services::{RelationTrimmer, TrimMetadataGenerator, TrimStage};
use crate::shared::Result;

/// TrimRelationsUseCase - Core use case for trimming a relation table
///
/// Reads the table through the reader port and runs the trimming pipeline,
/// reporting progress after each stage. The optional row priority is applied
/// by the pipeline once directions have been validated.
///
/// # Type Parameters
/// * `RR` - RelationTableReader implementation
/// * `PR` - ProgressReporter implementation
pub struct TrimRelationsUseCase<RR, PR> {
    relation_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> TrimRelationsUseCase<RR, PR>
where
    RR: RelationTableReader,
    PR: ProgressReporter,
{
    /// Creates a new TrimRelationsUseCase with injected dependencies
    pub fn new(relation_reader: RR, progress_reporter: PR) -> Self {
        Self {
            relation_reader,
            progress_reporter,
        }
    }

    /// Executes the trimming use case
    ///
    /// # Errors
    /// Fails if the table cannot be read or a row has an invalid direction.
    /// Nothing is trimmed when an error is returned.
    pub fn execute(&self, request: TrimRequest) -> Result<TrimResponse> {
        // Step 1: Read relation table
        self.progress_reporter.report(&format!(
            "📖 Loading relation table from: {}",
            request.input_path.display()
        ));

        let rows = self.relation_reader.read_relations(&request.input_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} relation row(s)", rows.len()));

        // Step 2: Trim, ordering canonical rows by priority when requested
        if let Some(priority) = &request.priority {
            self.progress_reporter.report(&format!(
                "🔀 Ordering rows by '{}' ({})",
                priority.key(),
                priority.order()
            ));
        }

        let outcome =
            RelationTrimmer::trim_with_stages(rows, request.priority.as_ref(), |stage| {
                self.progress_reporter.report_progress(
                    stage.position(),
                    TrimStage::COUNT,
                    Some(stage.label()),
                )
            })
            .map_err(|e| {
                self.progress_reporter
                    .report_error("❌ Canonicalization failed, no rows were trimmed");
                e
            })?;

        let summary = outcome.summary;
        self.progress_reporter.report_completion(&format!(
            "✂️  Trim complete: kept {} of {} relation(s), dropped {} redundant, {} reversed on input",
            summary.accepted_rows(),
            summary.input_rows(),
            summary.dropped_rows(),
            summary.reversed_rows()
        ));

        // Step 3: Metadata and response
        let metadata = TrimMetadataGenerator::generate_default_metadata();

        Ok(TrimResponse::new(outcome.relations, summary, metadata))
    }
}
