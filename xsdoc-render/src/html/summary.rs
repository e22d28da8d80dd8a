//! Summary view: one row per group.

use super::{TABLE_FOOTER, reference_cell};
use tracing::trace;
use xsdoc_model::{CrossRefResolver, ItemDisplay, ItemId, Layout, Markup};

/// Generator for the summary table of a layout.
pub struct SummaryHtml<'a> {
    layout: &'a Layout,
    resolver: &'a CrossRefResolver,
}

impl<'a> SummaryHtml<'a> {
    /// Creates a new summary generator.
    #[must_use]
    pub fn new(layout: &'a Layout, resolver: &'a CrossRefResolver) -> Self {
        Self { layout, resolver }
    }

    /// Generates the summary table.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_header();
        self.generate_rows(self.layout.root(), &mut output);
        output.push_str(TABLE_FOOTER);
        output
    }

    fn generate_header(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n<h3 id=\"{}\" class=\"title has-text-centered quebra-anterior\">{} - {}</h3>\n",
            self.layout.name(),
            self.layout.code(),
            self.layout.description()
        ));
        output.push_str("<table class=\"table is-fullwidth is-bordered resumo\">\n");
        output.push_str("<tbody>\n");
        output.push_str("<tr>\n");
        output.push_str("<th colspan=\"7\">Tabela de Resumo dos Registros</th>\n");
        output.push_str("</tr>\n");
        output.push_str("<tr class=\"grupo\">\n");
        for column in [
            "Grupo",
            "Grupo Pai",
            "Nível",
            "Descrição",
            "Ocor.",
            "Chave",
            "Condição",
        ] {
            output.push_str(&format!("<td><strong>{column}</strong></td>\n"));
        }
        output.push_str("</tr>\n");
        output
    }

    /// Emits the row of `id`, then its groups.
    ///
    /// A duplicate emits a single `Ver:` row in place of its groups.
    fn generate_rows(&self, id: ItemId, output: &mut String) {
        let display = ItemDisplay::new(self.layout, id, self.resolver, Markup::Html);
        let item = display.item();
        trace!(path = %item.path, "summary row");

        output.push_str("<tr>\n");
        output.push_str(&format!(
            "<td id=\"r_{path}\"><a href=\"#{path}\">{name}</a></td>\n",
            path = item.path,
            name = item.name
        ));
        output.push_str(&format!("<td>{}</td>\n", display.parent_anchor()));
        output.push_str(&format!("<td>{}</td>\n", item.level));
        output.push_str(&format!("<td>{}</td>\n", display.summary_description()));
        output.push_str(&format!("<td>{}</td>\n", display.occurrence()));
        output.push_str(&format!("<td>{}</td>\n", display.group_keys()));
        output.push_str(&format!("<td>{}</td>\n", display.usage_conditions()));
        output.push_str("</tr>\n");

        for child in self.layout.children(id).filter(|c| c.is_aggregating()) {
            if item.is_duplicate() {
                output.push_str("<tr>\n<td>...</td>\n<td></td>\n<td></td>\n");
                output.push_str(&reference_cell(self.layout, item, "r_"));
                output.push_str("<td></td>\n<td></td>\n<td></td>\n</tr>\n");
                break;
            }
            self.generate_rows(child.id, output);
        }
    }
}
