mod ancestor_set_builder;
mod redundancy_filter;
mod relation_canonicalizer;
mod relation_expander;
mod relation_trimmer;
mod trim_metadata_generator;

pub use ancestor_set_builder::AncestorSetBuilder;
pub use redundancy_filter::RedundancyFilter;
pub use relation_canonicalizer::RelationCanonicalizer;
pub use relation_expander::RelationExpander;
pub use relation_trimmer::{trim, RelationTrimmer, TrimOutcome, TrimStage};
pub use trim_metadata_generator::TrimMetadataGenerator;
