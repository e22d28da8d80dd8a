//! Prelude module for convenient imports.
//!
//! ```ignore
//! use xsdoc::prelude::*;
//! ```

// Schema types
pub use xsdoc_schema::{
    NodeKind, ParseError, SchemaNode, TypeTable, parse_document, parse_file, parse_type_table,
};

// Model types
pub use xsdoc_model::{
    Category, Conventions, CrossRefResolver, ItemDisplay, ItemId, Layout, Markup, MaxOccurs,
    ModelError, Occurrence, RefContext, RuleReference, SchemaItem, Size, TypeLabel,
};

// Rendering
pub use xsdoc_render::{
    CompleteHtml, CompleteText, Generator, RenderConfig, RenderError, RenderedLayout,
    SummaryHtml, SummaryText, index_entries, render_from_files, structure_tree,
};
