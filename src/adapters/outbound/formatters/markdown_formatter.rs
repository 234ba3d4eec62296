use crate::application::dto::TrimResponse;
use crate::ports::outbound::RelationFormatter;
use crate::relation_trimming::domain::{OutputRecord, ProductCode, TrimMetadata, TrimSummary};
use crate::shared::Result;

/// Markdown table header for relation rows
const TABLE_HEADER: &str =
    "| Primary | Related | Direction | Primary ancestors | Related ancestors |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|---------|---------|-----------|-------------------|-------------------|\n";

/// MarkdownFormatter adapter generating a human-readable trimming report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn join_codes(codes: &[ProductCode]) -> String {
        if codes.is_empty() {
            return "-".to_string();
        }
        let joined = codes
            .iter()
            .map(ProductCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self::escape_markdown_table_cell(&joined)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &TrimMetadata) {
        output.push_str("# Product Relation Trim Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}  \nRun: `{}`\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp(),
            metadata.run_id()
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &TrimSummary) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Rows |\n");
        output.push_str("|--------|------|\n");
        for (label, value) in [
            ("Input", summary.input_rows()),
            ("Reversed on input", summary.reversed_rows()),
            ("Accepted", summary.accepted_rows()),
            ("Dropped as redundant", summary.dropped_rows()),
            ("Output (forward + reverse)", summary.output_rows()),
        ] {
            output.push_str(&format!("| {} | {} |\n", label, value));
        }
        output.push('\n');
    }

    fn render_relations(&self, output: &mut String, relations: &[OutputRecord]) {
        output.push_str("## Retained Relations\n\n");

        if relations.is_empty() {
            output.push_str("*No relations retained*\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for relation in relations {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(relation.primary.as_str()),
                Self::escape_markdown_table_cell(relation.related.as_str()),
                relation.direction,
                Self::join_codes(&relation.primary_ancestors),
                Self::join_codes(&relation.related_ancestors)
            ));
        }
    }
}

impl RelationFormatter for MarkdownFormatter {
    fn format(&self, response: &TrimResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, &response.metadata);
        self.render_summary(&mut output, &response.summary);
        self.render_relations(&mut output, &response.relations);
        Ok(output)
    }
}
