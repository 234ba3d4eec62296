/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_relation_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_relation_reader::MockRelationReader;
