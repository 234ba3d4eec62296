pub mod augmented_record;
pub mod canonical_record;
pub mod direction;
pub mod kept_index;
pub mod output_record;
pub mod product_code;
pub mod relation_record;
pub mod trim_metadata;
pub mod trim_summary;

pub use augmented_record::{AncestorClosure, AugmentedRecord};
pub use canonical_record::CanonicalRecord;
pub use direction::Direction;
pub use kept_index::KeptIndex;
pub use output_record::OutputRecord;
pub use product_code::ProductCode;
pub use relation_record::{Extras, RelationRecord};
pub use trim_metadata::TrimMetadata;
pub use trim_summary::TrimSummary;
