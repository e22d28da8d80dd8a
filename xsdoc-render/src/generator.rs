//! Per-layout documentation generator.

use crate::config::RenderConfig;
use crate::html::{CompleteHtml, SummaryHtml};
use crate::text::{CompleteText, SummaryText, structure_tree};
use tracing::{debug, info};
use xsdoc_model::{CrossRefResolver, Layout};

/// Renders the views of one layout.
pub struct Generator<'a> {
    layout: &'a Layout,
    config: &'a RenderConfig,
    resolver: CrossRefResolver,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for a built layout.
    #[must_use]
    pub fn new(layout: &'a Layout, config: &'a RenderConfig) -> Self {
        Self {
            layout,
            config,
            resolver: config.resolver(),
        }
    }

    /// Generates the HTML fragment: summary table, then complete table.
    #[must_use]
    pub fn generate_html(&self) -> String {
        let mut output = String::new();

        if self.config.includes_summary() {
            debug!(code = self.layout.code(), "rendering summary html");
            output.push_str(&SummaryHtml::new(self.layout, &self.resolver).generate());
        }

        if self.config.includes_complete() {
            debug!(code = self.layout.code(), "rendering complete html");
            output.push_str(&CompleteHtml::new(self.layout, &self.resolver).generate());
        }

        info!(code = self.layout.code(), bytes = output.len(), "html generated");
        output
    }

    /// Generates the plain-text rendering of the enabled views.
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut output = String::new();

        if self.config.includes_summary() {
            output.push_str(&SummaryText::new(self.layout, &self.resolver).generate());
        }

        if self.config.includes_complete() {
            output.push_str(&CompleteText::new(self.layout, &self.resolver).generate());
        }

        info!(code = self.layout.code(), bytes = output.len(), "text generated");
        output
    }

    /// Generates the indented structure tree.
    #[must_use]
    pub fn structure_tree(&self) -> String {
        structure_tree(self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::process_layout;

    #[test]
    fn test_generate_html_both_views() {
        let layout = process_layout();
        let config = RenderConfig::new();
        let html = Generator::new(&layout, &config).generate_html();

        let summary = html.find("resumo").expect("summary table");
        let complete = html.find("completo").expect("complete table");
        assert!(summary < complete);
        assert_eq!(html.matches("</table>").count(), 2);
    }

    #[test]
    fn test_generate_html_single_view() {
        let layout = process_layout();
        let config = RenderConfig::new().summary(false);
        let html = Generator::new(&layout, &config).generate_html();

        assert!(!html.contains("resumo"));
        assert!(html.contains("completo"));
    }

    #[test]
    fn test_numbering_resets_per_pass() {
        let layout = process_layout();
        let config = RenderConfig::new();
        let generator = Generator::new(&layout, &config);

        let first = generator.generate_html();
        let second = generator.generate_html();
        assert_eq!(first, second);
        assert!(first.contains("id=\"1070_eSocial\">1</td>"));
    }

    #[test]
    fn test_tables_document_is_applied() {
        const WITH_TABLE: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="eSocial">
        <xs:annotation><xs:documentation>S-1005 - Tabela de Estabelecimentos</xs:documentation></xs:annotation>
        <xs:complexType><xs:sequence>
            <xs:element name="evtTabEstab"><xs:complexType><xs:sequence>
                <xs:element name="cnaePrep">
                    <xs:annotation><xs:documentation>Conforme Tabela 01.</xs:documentation></xs:annotation>
                    <xs:simpleType>
                        <xs:restriction base="xs:integer"><xs:totalDigits value="7"/></xs:restriction>
                    </xs:simpleType>
                </xs:element>
            </xs:sequence></xs:complexType></xs:element>
        </xs:sequence></xs:complexType>
    </xs:element>
</xs:schema>"#;
        let document = xsdoc_schema::parse_document(WITH_TABLE).expect("Failed to parse layout");
        let layout = Layout::build(&document, &xsdoc_schema::TypeTable::new())
            .expect("Failed to build layout");
        let config = RenderConfig::new().summary(false).tables_document("tab.html");
        let html = Generator::new(&layout, &config).generate_html();

        assert!(html.contains("<td>Conforme <a href=\"tab.html#01\">Tabela 01</a>.</td>"));
        assert!(html.contains("<td>1-7</td>"));
    }

    #[test]
    fn test_generate_text() {
        let layout = process_layout();
        let config = RenderConfig::new();
        let text = Generator::new(&layout, &config).generate_text();

        assert_eq!(text.matches("S-1070 - evtTabProcesso\n").count(), 2);
        assert!(text.contains("Nível: 1\nNome: eSocial\n"));
        assert!(text.contains("Elem.: A\n"));
    }

    #[test]
    fn test_structure_tree() {
        let layout = process_layout();
        let config = RenderConfig::new();
        let tree = Generator::new(&layout, &config).structure_tree();
        assert!(tree.starts_with("S-1070 - Tabela de Processos Administrativos/Judiciais\neSocial\n"));
    }
}
