//! HTML views.

pub mod complete;
pub mod index;
pub mod summary;

pub use complete::CompleteHtml;
pub use index::index_entries;
pub use summary::SummaryHtml;

use xsdoc_model::{Layout, SchemaItem, link};

/// Closing tags of a view table.
pub const TABLE_FOOTER: &str = "</tbody>\n</table>\n";

/// `Ver:` cell pointing at the reference target of a duplicate item.
///
/// `anchor_prefix` selects the view the links point into (`r_` for the
/// summary rows, empty for the complete rows).
pub(crate) fn reference_cell(layout: &Layout, item: &SchemaItem, anchor_prefix: &str) -> String {
    let Some(target) = layout.reference(item.id) else {
        return String::new();
    };
    let parent = layout
        .parent(target.id)
        .map(|p| link(&format!("{anchor_prefix}{}", p.path), &p.name))
        .unwrap_or_default();
    format!(
        "<td><strong>Ver:</strong> {parent} &gt; {}</td>\n",
        link(&format!("{anchor_prefix}{}", target.path), &target.name)
    )
}
