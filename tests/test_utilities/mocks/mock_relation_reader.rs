use relation_trim::prelude::*;
use std::path::Path;

/// Mock RelationTableReader serving rows from memory
pub struct MockRelationReader {
    rows: Vec<RelationRecord>,
    should_fail: bool,
}

impl MockRelationReader {
    pub fn new(rows: Vec<RelationRecord>) -> Self {
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: vec![],
            should_fail: true,
        }
    }
}

impl RelationTableReader for MockRelationReader {
    fn read_relations(&self, _path: &Path) -> Result<Vec<RelationRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock relation reader failure");
        }
        Ok(self.rows.clone())
    }
}
