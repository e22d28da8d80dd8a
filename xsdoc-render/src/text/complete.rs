//! Complete view as plain text.

use super::{layout_header, reference_line};
use xsdoc_model::{CrossRefResolver, ItemDisplay, ItemId, Layout, Markup};

/// Generator for the complete blocks of a layout.
pub struct CompleteText<'a> {
    layout: &'a Layout,
    resolver: &'a CrossRefResolver,
}

impl<'a> CompleteText<'a> {
    /// Creates a new complete text generator.
    #[must_use]
    pub fn new(layout: &'a Layout, resolver: &'a CrossRefResolver) -> Self {
        Self { layout, resolver }
    }

    /// Generates one block per item.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = layout_header(self.layout);
        self.generate_blocks(self.layout.root(), &mut output);
        output
    }

    fn generate_blocks(&self, id: ItemId, output: &mut String) {
        let display = ItemDisplay::new(self.layout, id, self.resolver, Markup::Text);
        let item = display.item();

        output.push_str(&format!("Nome: {}\n", item.name));
        output.push_str(&format!("Pai: {}\n", display.parent_anchor()));
        output.push_str(&format!("Elem.: {}\n", item.category.code()));
        output.push_str(&format!("Tipo: {}\n", item.type_label.code()));
        output.push_str(&format!("Ocorrência: {}\n", display.occurrence()));
        output.push_str(&format!("Tamanho: {}\n", display.size()));
        output.push_str(&format!("Dec.: {}\n", display.decimals()));
        output.push_str(&format!("Descrição: {}\n\n", display.description()));

        if item.is_duplicate() {
            output.push_str(&reference_line(self.layout, item));
            return;
        }

        for child in &item.children {
            self.generate_blocks(*child, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::process_layout;

    fn generate() -> String {
        let layout = process_layout();
        let resolver = CrossRefResolver::new();
        CompleteText::new(&layout, &resolver).generate()
    }

    #[test]
    fn test_leaf_blocks() {
        let output = generate();
        assert!(output.contains(concat!(
            "Nome: Id\n",
            "Pai: evtTabProcesso\n",
            "Elem.: A\n",
            "Tipo: C\n",
            "Ocorrência: 1\n",
            "Tamanho: 36\n",
            "Dec.: -\n",
            "Descrição: \n\n",
        )));
        assert!(output.contains(concat!(
            "Nome: nrProc\n",
            "Pai: ideProcesso\n",
            "Elem.: E\n",
            "Tipo: C\n",
            "Ocorrência: 1\n",
            "Tamanho: 1-21\n",
            "Dec.: -\n",
            "Descrição: Número do processo.\nValidação: Deve ser compatível com dtIni.\n\n",
        )));
        assert!(output.contains("Nome: dtIni\nPai: dadosProc\nElem.: E\nTipo: D\n"));
    }

    #[test]
    fn test_group_blocks() {
        let output = generate();
        assert!(output.contains(concat!(
            "Nome: infoProcesso\n",
            "Pai: evtTabProcesso\n",
            "Elem.: CG\n",
            "Tipo: -\n",
            "Ocorrência: 1\n",
            "Tamanho: -\n",
            "Dec.: -\n",
        )));
        assert!(output.contains("Nome: eSocial\nPai: -\nElem.: G\n"));
    }

    #[test]
    fn test_duplicate_has_no_subtree() {
        let output = generate();
        assert_eq!(output.matches("Nome: nrProc\n").count(), 1);
        assert!(output.contains("Nome: ideProcesso\nPai: exclusao\n"));
        assert!(output.ends_with("Ver: inclusao > ideProcesso\n\n"));
    }
}
