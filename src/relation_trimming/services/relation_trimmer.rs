use super::{AncestorSetBuilder, RedundancyFilter, RelationCanonicalizer, RelationExpander};
use crate::relation_trimming::domain::{OutputRecord, RelationRecord, TrimSummary};
use crate::relation_trimming::policies::RowPriority;
use crate::shared::Result;

/// Trimmed rows together with the counts collected along the way
#[derive(Debug, Clone)]
pub struct TrimOutcome {
    pub relations: Vec<OutputRecord>,
    pub summary: TrimSummary,
}

/// A completed stage of the trimming pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStage {
    Canonicalized,
    ClosuresBuilt,
    Filtered,
    Expanded,
}

impl TrimStage {
    /// Number of stages in one pass
    pub const COUNT: usize = 4;

    /// One-based position of the stage in the pipeline
    pub fn position(self) -> usize {
        match self {
            TrimStage::Canonicalized => 1,
            TrimStage::ClosuresBuilt => 2,
            TrimStage::Filtered => 3,
            TrimStage::Expanded => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrimStage::Canonicalized => "canonicalized",
            TrimStage::ClosuresBuilt => "ancestor closures built",
            TrimStage::Filtered => "redundant relations filtered",
            TrimStage::Expanded => "expanded",
        }
    }
}

/// RelationTrimmer service composing the four trimming stages
///
/// raw rows → canonical → (prioritized) → augmented → filtered → expanded.
/// Validation happens entirely in the first stage, before any filtering
/// state exists and before rows are reordered.
pub struct RelationTrimmer;

impl RelationTrimmer {
    pub fn trim(rows: Vec<RelationRecord>) -> Result<Vec<OutputRecord>> {
        Ok(Self::trim_with_summary(rows)?.relations)
    }

    pub fn trim_with_summary(rows: Vec<RelationRecord>) -> Result<TrimOutcome> {
        Self::trim_with_stages(rows, None, |_| {})
    }

    /// Runs the full pipeline, calling `on_stage` after each completed stage
    ///
    /// When `priority` is given, canonical rows are reordered by it before
    /// ancestor closures are built.
    pub fn trim_with_stages<F>(
        rows: Vec<RelationRecord>,
        priority: Option<&RowPriority>,
        mut on_stage: F,
    ) -> Result<TrimOutcome>
    where
        F: FnMut(TrimStage),
    {
        let input_rows = rows.len();
        let reversed_rows = Self::count_reversed(&rows);

        let mut canonical = RelationCanonicalizer::canonicalize(rows)?;
        if let Some(priority) = priority {
            priority.apply(&mut canonical);
        }
        on_stage(TrimStage::Canonicalized);

        let augmented = AncestorSetBuilder::augment(canonical);
        on_stage(TrimStage::ClosuresBuilt);

        let accepted = RedundancyFilter::filter(augmented);
        let accepted_rows = accepted.len();
        on_stage(TrimStage::Filtered);

        let relations = RelationExpander::expand(accepted);
        on_stage(TrimStage::Expanded);

        Ok(TrimOutcome {
            relations,
            summary: TrimSummary::new(input_rows, reversed_rows, accepted_rows),
        })
    }

    /// Rows that arrive in the reverse direction
    pub fn count_reversed(rows: &[RelationRecord]) -> usize {
        rows.iter().filter(|r| r.direction == -1).count()
    }
}

/// Trims a relation table down to its non-redundant relations
///
/// Shorthand for [`RelationTrimmer::trim`].
pub fn trim(rows: Vec<RelationRecord>) -> Result<Vec<OutputRecord>> {
    RelationTrimmer::trim(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation_trimming::domain::{Direction, Extras, ProductCode};
    use crate::relation_trimming::policies::SortOrder;
    use crate::shared::error::TrimError;

    fn code(s: &str) -> ProductCode {
        ProductCode::new(s).unwrap()
    }

    fn rec(p: &str, r: &str, d: i64, pa: &[&str], ra: &[&str]) -> RelationRecord {
        RelationRecord::new(
            code(p),
            code(r),
            d,
            pa.iter().map(|c| code(c)).collect(),
            ra.iter().map(|c| code(c)).collect(),
        )
    }

    #[test]
    fn test_mirrored_duplicate_collapses_to_one_pair() {
        let output = trim(vec![
            rec("A", "B", 1, &[], &[]),
            rec("B", "A", -1, &[], &[]),
        ])
        .unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(
            (output[0].primary.as_str(), output[0].related.as_str(), output[0].direction),
            ("A", "B", Direction::Forward)
        );
        assert_eq!(
            (output[1].primary.as_str(), output[1].related.as_str(), output[1].direction),
            ("B", "A", Direction::Reverse)
        );
    }

    #[test]
    fn test_summary_counts() {
        let outcome = RelationTrimmer::trim_with_summary(vec![
            rec("A", "B", 1, &[], &[]),
            rec("B", "A", -1, &[], &[]),
            rec("C", "D", 1, &["A"], &[]),
        ])
        .unwrap();

        assert_eq!(outcome.summary.input_rows(), 3);
        assert_eq!(outcome.summary.reversed_rows(), 1);
        assert_eq!(outcome.summary.accepted_rows(), 2);
        assert_eq!(outcome.summary.dropped_rows(), 1);
        assert_eq!(outcome.relations.len(), outcome.summary.output_rows());
    }

    #[test]
    fn test_invalid_direction_aborts() {
        let result = trim(vec![rec("A", "B", 1, &[], &[]), rec("C", "D", 3, &[], &[])]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrimError>(),
            Some(TrimError::InvalidDirection { row: 1, value: 3 })
        ));
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let outcome = RelationTrimmer::trim_with_summary(vec![]).unwrap();
        assert!(outcome.relations.is_empty());
        assert_eq!(outcome.summary, TrimSummary::default());
    }

    #[test]
    fn test_stages_are_reported_in_order() {
        let mut stages = Vec::new();
        RelationTrimmer::trim_with_stages(vec![rec("A", "B", 1, &[], &[])], None, |stage| {
            stages.push(stage)
        })
        .unwrap();

        assert_eq!(
            stages,
            vec![
                TrimStage::Canonicalized,
                TrimStage::ClosuresBuilt,
                TrimStage::Filtered,
                TrimStage::Expanded,
            ]
        );
        assert_eq!(stages.len(), TrimStage::COUNT);
        assert_eq!(TrimStage::Expanded.position(), TrimStage::COUNT);
    }

    #[test]
    fn test_no_stage_completes_on_invalid_direction() {
        let mut stages = Vec::new();
        let result = RelationTrimmer::trim_with_stages(
            vec![rec("A", "B", 0, &[], &[])],
            None,
            |stage| stages.push(stage),
        );

        assert!(result.is_err());
        assert!(stages.is_empty());
    }

    #[test]
    fn test_invalid_direction_names_input_row_after_priority_sort() {
        let rows = vec![
            rec("A", "B", 1, &[], &[]).with_extras(Extras::new().with("c", 0.1)),
            rec("C", "D", 7, &[], &[]).with_extras(Extras::new().with("c", 0.9)),
        ];
        let priority = RowPriority::new("c", SortOrder::Descending).unwrap();

        let err = RelationTrimmer::trim_with_stages(rows, Some(&priority), |_| {}).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TrimError>(),
            Some(TrimError::InvalidDirection { row: 1, value: 7 })
        ));
    }

    #[test]
    fn test_priority_sorts_canonical_rows() {
        // The reverse row canonicalizes to (A, B) and, sorted first, represents the pair
        let rows = vec![
            rec("A2", "B", 1, &["A"], &[]).with_extras(Extras::new().with("c", 0.2)),
            rec("B", "A", -1, &[], &[]).with_extras(Extras::new().with("c", 0.8)),
        ];
        let priority = RowPriority::new("c", SortOrder::Descending).unwrap();

        let outcome = RelationTrimmer::trim_with_stages(rows, Some(&priority), |_| {}).unwrap();

        assert_eq!(outcome.summary.accepted_rows(), 1);
        assert_eq!(outcome.summary.reversed_rows(), 1);
        assert_eq!(outcome.relations[0].primary, code("A"));
        assert_eq!(outcome.relations[0].extras.get("c"), Some(&serde_json::json!(0.8)));
    }

    #[test]
    fn test_without_priority_matches_trim_with_summary() {
        let rows = vec![
            rec("A", "B", 1, &[], &[]),
            rec("B", "A", -1, &[], &[]),
            rec("C", "D", 1, &["A"], &[]),
        ];

        let staged = RelationTrimmer::trim_with_stages(rows.clone(), None, |_| {}).unwrap();
        let plain = RelationTrimmer::trim_with_summary(rows).unwrap();

        assert_eq!(staged.relations, plain.relations);
        assert_eq!(staged.summary, plain.summary);
    }
}
