//! Plain-text views.

pub mod complete;
pub mod summary;
pub mod tree;

pub use complete::CompleteText;
pub use summary::SummaryText;
pub use tree::structure_tree;

use xsdoc_model::{Layout, SchemaItem};

/// `code - name` heading followed by the layout description.
pub(crate) fn layout_header(layout: &Layout) -> String {
    format!(
        "{} - {}\n{}\n\n",
        layout.code(),
        layout.name(),
        layout.description()
    )
}

/// `Ver:` line pointing at the reference target of a duplicate item.
pub(crate) fn reference_line(layout: &Layout, item: &SchemaItem) -> String {
    let Some(target) = layout.reference(item.id) else {
        return String::new();
    };
    let parent = layout.parent(target.id).map_or("-", |p| p.name.as_str());
    format!("Ver: {parent} > {}\n\n", target.name)
}
