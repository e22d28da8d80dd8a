//! # xsdoc
//!
//! Documentation generator for eSocial XSD layouts.
//!
//! Each layout schema describes one event as a tree of groups, choice groups,
//! elements and attributes. xsdoc builds that tree, infers field types, sizes
//! and valid values from the XSD restrictions, reads the structured
//! annotations, and renders two views of every layout: a summary of the
//! groups and a complete table of every field.
//!
//! ## Features
//!
//! - **Repeated types rendered once** - later uses of a `T_` type point back
//!   to the first expansion
//! - **Size inference** - from length facets, digit counts and patterns
//! - **Cross-references** - `{label}(address)` tokens and `Tabela NN`
//!   citations become hyperlinks
//! - **HTML and plain text** - both views in both markups
//!
//! ## Quick Start
//!
//! ```ignore
//! use xsdoc::prelude::*;
//!
//! let document = parse_file(Path::new("evtInfoEmpregador.xsd"))?;
//! let types = parse_type_table(&std::fs::read_to_string("tipos.xsd")?)?;
//! let layout = Layout::build(&document, &types)?;
//!
//! let config = RenderConfig::default();
//! let html = Generator::new(&layout, &config).generate_html();
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XSD parsing into a generic node tree
//! - [`model`] - Layout item tree, restrictions, annotations, cross-references
//! - [`render`] - HTML and plain-text views

pub mod prelude;

/// XSD parsing into a generic node tree.
pub mod schema {
    pub use xsdoc_schema::*;
}

/// Layout model.
pub mod model {
    pub use xsdoc_model::*;
}

/// HTML and plain-text views.
pub mod render {
    pub use xsdoc_render::*;
}

// Re-export commonly used items at the crate root
pub use xsdoc_model::{Layout, ModelError, SchemaItem};
pub use xsdoc_render::{
    Generator, RenderConfig, RenderError, RenderedLayout, render_from_files, render_html_from_xml,
    render_index, render_text_from_xml,
};
pub use xsdoc_schema::{ParseError, parse_document, parse_file, parse_type_table};
