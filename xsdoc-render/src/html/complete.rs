//! Complete view: one row per item.

use super::{TABLE_FOOTER, reference_cell};
use tracing::trace;
use xsdoc_model::{Category, CrossRefResolver, ItemDisplay, ItemId, Layout, Markup, link};

/// Generator for the complete table of a layout.
pub struct CompleteHtml<'a> {
    layout: &'a Layout,
    resolver: &'a CrossRefResolver,
}

impl<'a> CompleteHtml<'a> {
    /// Creates a new complete-view generator.
    #[must_use]
    pub fn new(layout: &'a Layout, resolver: &'a CrossRefResolver) -> Self {
        Self { layout, resolver }
    }

    /// Generates the complete table.
    ///
    /// Rows are numbered from 1 on every call.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_header();
        let mut next_index = 1;
        self.generate_rows(self.layout.root(), &mut next_index, &mut output);
        output.push_str(TABLE_FOOTER);
        output
    }

    fn generate_header(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n<h4 class=\"subtitle has-text-centered\">Registros do evento {} - {}</h4>\n",
            self.layout.code(),
            self.layout.description()
        ));
        output.push_str("<table class=\"table is-fullwidth is-bordered completo\">\n");
        output.push_str("<tbody>\n");
        output.push_str("<tr>\n");
        for column in [
            "#",
            "Grupo/Campo",
            "Grupo Pai",
            "Elem.",
            "Tipo",
            "Ocor.",
            "Tamanho",
            "Dec.",
            "Descrição",
        ] {
            output.push_str(&format!("<th>{column}</th>\n"));
        }
        output.push_str("</tr>\n");
        output
    }

    /// Emits the row of `id`, then its subtree.
    ///
    /// A duplicate emits a `Ver:` row in place of its subtree.
    fn generate_rows(&self, id: ItemId, next_index: &mut u32, output: &mut String) {
        let display = ItemDisplay::new(self.layout, id, self.resolver, Markup::Html);
        let item = display.item();
        trace!(path = %item.path, index = *next_index, "complete row");

        let (marker, name) = match item.category {
            Category::Group => (" class=\"grupo\"", link(&format!("r_{}", item.path), &item.name)),
            Category::Choice => (
                " class=\"grupo-choice\"",
                link(&format!("r_{}", item.path), &item.name),
            ),
            Category::Element | Category::Attribute => ("", item.name.clone()),
        };

        output.push_str(&format!("<tr{marker}>\n"));
        output.push_str(&format!(
            "<td onclick=\"copiarCaminho.call(this)\" title=\"{path}\" id=\"{path}\">{index}</td>\n",
            path = item.path,
            index = *next_index
        ));
        *next_index += 1;
        output.push_str(&format!("<td>{name}</td>\n"));
        output.push_str(&format!("<td>{}</td>\n", display.parent_anchor()));
        output.push_str(&format!("<td>{}</td>\n", item.category.code()));
        output.push_str(&format!("<td>{}</td>\n", item.type_label.code()));
        output.push_str(&format!("<td>{}</td>\n", display.occurrence()));
        output.push_str(&format!("<td>{}</td>\n", display.size()));
        output.push_str(&format!("<td>{}</td>\n", display.decimals()));
        output.push_str(&format!("<td>{}</td>\n", display.description()));
        output.push_str("</tr>\n");

        if item.is_duplicate() {
            output.push_str("<tr>\n<td>...</td>\n");
            output.push_str(&"<td></td>\n".repeat(7));
            output.push_str(&reference_cell(self.layout, item, ""));
            output.push_str("</tr>\n");
            return;
        }

        for child in &item.children {
            self.generate_rows(*child, next_index, output);
        }
    }
}
