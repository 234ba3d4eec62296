use crate::relation_trimming::domain::{
    AncestorClosure, AugmentedRecord, Direction, OutputRecord, ProductCode,
};
use std::collections::HashSet;

/// RelationExpander service for turning accepted rows back into table rows
///
/// Every accepted row becomes a forward row followed by its mirrored reverse
/// row, with the synthetic self-membership removed from the ancestor lists.
pub struct RelationExpander;

impl RelationExpander {
    pub fn expand(rows: Vec<AugmentedRecord>) -> Vec<OutputRecord> {
        let mut output = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            let [forward, reverse] = Self::expand_row(row);
            output.push(forward);
            output.push(reverse);
        }
        output
    }

    fn expand_row(row: AugmentedRecord) -> [OutputRecord; 2] {
        let primary_ancestors = Self::strip_self(
            row.primary(),
            &row.record().primary_ancestors,
            row.primary_closure(),
        );
        let related_ancestors = Self::strip_self(
            row.related(),
            &row.record().related_ancestors,
            row.related_closure(),
        );
        let record = row.into_record();

        let reverse = OutputRecord {
            primary: record.related.clone(),
            related: record.primary.clone(),
            direction: Direction::Reverse,
            primary_ancestors: related_ancestors.clone(),
            related_ancestors: primary_ancestors.clone(),
            extras: record.extras.clone(),
        };
        let forward = OutputRecord {
            primary: record.primary,
            related: record.related,
            direction: Direction::Forward,
            primary_ancestors,
            related_ancestors,
            extras: record.extras,
        };

        [forward, reverse]
    }

    /// `closure \ {node}` as a list, in first-declared order
    fn strip_self(
        node: &ProductCode,
        declared: &[ProductCode],
        closure: &AncestorClosure,
    ) -> Vec<ProductCode> {
        let mut seen = HashSet::new();
        declared
            .iter()
            .filter(|code| *code != node && closure.contains(*code))
            .filter(|code| seen.insert(*code))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation_trimming::domain::{CanonicalRecord, Extras};
    use crate::relation_trimming::services::AncestorSetBuilder;

    fn code(s: &str) -> ProductCode {
        ProductCode::new(s).unwrap()
    }

    fn codes(list: &[&str]) -> Vec<ProductCode> {
        list.iter().map(|c| code(c)).collect()
    }

    fn augmented(p: &str, r: &str, pa: &[&str], ra: &[&str]) -> AugmentedRecord {
        AncestorSetBuilder::augment(vec![CanonicalRecord {
            primary: code(p),
            related: code(r),
            primary_ancestors: codes(pa),
            related_ancestors: codes(ra),
            extras: Extras::new().with("weight", 3),
        }])
        .remove(0)
    }

    #[test]
    fn test_emits_forward_then_reverse_pair() {
        let output = RelationExpander::expand(vec![augmented("A", "B", &["PA"], &["PB"])]);

        assert_eq!(output.len(), 2);
        assert_eq!(output[0].primary, code("A"));
        assert_eq!(output[0].related, code("B"));
        assert_eq!(output[0].direction, Direction::Forward);
        assert_eq!(output[0].primary_ancestors, codes(&["PA"]));
        assert_eq!(output[0].related_ancestors, codes(&["PB"]));

        assert_eq!(output[1].primary, code("B"));
        assert_eq!(output[1].related, code("A"));
        assert_eq!(output[1].direction, Direction::Reverse);
        assert_eq!(output[1].primary_ancestors, codes(&["PB"]));
        assert_eq!(output[1].related_ancestors, codes(&["PA"]));
    }

    #[test]
    fn test_strips_self_and_duplicates_keeping_declared_order() {
        let output =
            RelationExpander::expand(vec![augmented("A", "B", &["Z", "A", "M", "Z"], &["B"])]);

        assert_eq!(output[0].primary_ancestors, codes(&["Z", "M"]));
        assert!(output[0].related_ancestors.is_empty());
        assert!(output[1].primary_ancestors.is_empty());
        assert_eq!(output[1].related_ancestors, codes(&["Z", "M"]));
    }

    #[test]
    fn test_extras_copied_onto_both_rows() {
        let output = RelationExpander::expand(vec![augmented("A", "B", &[], &[])]);
        let expected = Extras::new().with("weight", 3);
        assert_eq!(output[0].extras, expected);
        assert_eq!(output[1].extras, expected);
    }

    #[test]
    fn test_self_loop_emits_both_directions() {
        let output = RelationExpander::expand(vec![augmented("A", "A", &[], &[])]);
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].direction, Direction::Forward);
        assert_eq!(output[1].direction, Direction::Reverse);
        assert_eq!(output[1].primary, code("A"));
    }

    #[test]
    fn test_output_is_twice_the_input() {
        let output = RelationExpander::expand(vec![
            augmented("A", "B", &[], &[]),
            augmented("C", "D", &[], &[]),
            augmented("E", "F", &[], &[]),
        ]);
        assert_eq!(output.len(), 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(RelationExpander::expand(vec![]).is_empty());
    }
}
