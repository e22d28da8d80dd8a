//! Indented structure tree of a layout.

use xsdoc_model::{ItemId, Layout};

/// Renders the item hierarchy with box-drawing connectors.
///
/// Duplicates are printed with their full subtree.
#[must_use]
pub fn structure_tree(layout: &Layout) -> String {
    let mut output = format!(
        "{} - {}\n{}\n",
        layout.code(),
        layout.description(),
        layout.root_item().name
    );
    write_children(layout, layout.root(), "", &mut output);
    output
}

fn write_children(layout: &Layout, id: ItemId, prefix: &str, output: &mut String) {
    let children = &layout[id].children;
    for (position, child) in children.iter().enumerate() {
        let last = position + 1 == children.len();
        let connector = if last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", layout[*child].name));

        let continuation = if last { "    " } else { "|   " };
        write_children(layout, *child, &format!("{prefix}{continuation}"), output);
    }
}
