//! Summary view as plain text.

use super::{layout_header, reference_line};
use xsdoc_model::{CrossRefResolver, ItemDisplay, ItemId, Layout, Markup};

/// Generator for the summary blocks of a layout.
pub struct SummaryText<'a> {
    layout: &'a Layout,
    resolver: &'a CrossRefResolver,
}

impl<'a> SummaryText<'a> {
    /// Creates a new summary text generator.
    #[must_use]
    pub fn new(layout: &'a Layout, resolver: &'a CrossRefResolver) -> Self {
        Self { layout, resolver }
    }

    /// Generates the summary blocks, one per group.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = layout_header(self.layout);
        self.generate_blocks(self.layout.root(), &mut output);
        output
    }

    fn generate_blocks(&self, id: ItemId, output: &mut String) {
        let display = ItemDisplay::new(self.layout, id, self.resolver, Markup::Text);
        let item = display.item();

        output.push_str(&format!("Nível: {}\n", item.level));
        output.push_str(&format!("Nome: {}\n", item.name));
        output.push_str(&format!("Pai: {}\n", display.parent_anchor()));
        output.push_str(&format!("Descrição: {}\n", display.summary_description()));
        output.push_str(&format!("Ocorrência: {}\n", display.occurrence()));
        output.push_str(&format!("Chave: {}\n", display.group_keys()));
        output.push_str(&format!("Condição: {}\n\n", display.usage_conditions()));

        if item.is_duplicate() {
            if item.children.iter().any(|c| self.layout[*c].is_aggregating()) {
                output.push_str(&reference_line(self.layout, item));
            }
            return;
        }

        for child in self.layout.children(id).filter(|c| c.is_aggregating()) {
            self.generate_blocks(child.id, output);
        }
    }
}
