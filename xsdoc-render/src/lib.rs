//! # xsdoc Render
//!
//! Documentation views for eSocial XSD layouts.
//!
//! This crate provides:
//! - Summary and complete views rendered as HTML tables
//! - Plain-text renderings of both views
//! - The layout index and the indented structure tree
//! - Convenience entry points from XSD text or files

pub mod config;
pub mod error;
pub mod generator;
pub mod html;
pub mod text;

#[cfg(test)]
mod test_fixtures;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use generator::Generator;
pub use html::{CompleteHtml, SummaryHtml, index_entries};
pub use text::{CompleteText, SummaryText, structure_tree};

use std::path::Path;
use xsdoc_model::Layout;

/// Every rendering of one layout file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLayout {
    /// Layout code, e.g. `S-1000`.
    pub code: String,
    /// Event group name.
    pub name: String,
    /// Layout description.
    pub description: String,
    /// HTML fragment with both views.
    pub html: String,
    /// Plain-text rendering of both views.
    pub text: String,
}

/// Builds a layout from XSD text and a global types schema.
///
/// # Errors
/// Returns `RenderError` if either document fails to parse or the layout
/// cannot be built.
pub fn build_layout(layout_xml: &str, types_xml: &str) -> Result<Layout> {
    let document = xsdoc_schema::parse_document(layout_xml)?;
    let global_types = xsdoc_schema::parse_type_table(types_xml)?;
    Ok(Layout::build(&document, &global_types)?)
}

/// Renders both HTML views of a layout given as XSD text.
///
/// # Arguments
/// * `layout_xml` - Layout XSD content
/// * `types_xml` - Global types XSD content
///
/// # Errors
/// Returns `RenderError` if parsing or layout construction fails.
pub fn render_html_from_xml(layout_xml: &str, types_xml: &str) -> Result<String> {
    let layout = build_layout(layout_xml, types_xml)?;
    let config = RenderConfig::default();
    Ok(Generator::new(&layout, &config).generate_html())
}

/// Renders both plain-text views of a layout given as XSD text.
///
/// # Errors
/// Returns `RenderError` if parsing or layout construction fails.
pub fn render_text_from_xml(layout_xml: &str, types_xml: &str) -> Result<String> {
    let layout = build_layout(layout_xml, types_xml)?;
    let config = RenderConfig::default();
    Ok(Generator::new(&layout, &config).generate_text())
}

/// Renders a layout file against a global types file.
///
/// # Arguments
/// * `layout` - Path to the layout XSD
/// * `types` - Path to the global types XSD
///
/// # Errors
/// Returns `RenderError` if reading, parsing, or layout construction fails.
pub fn render_from_files(layout: &Path, types: &Path) -> Result<RenderedLayout> {
    let layout_xml = std::fs::read_to_string(layout)?;
    let types_xml = std::fs::read_to_string(types)?;
    let layout = build_layout(&layout_xml, &types_xml)?;

    let config = RenderConfig::default();
    let generator = Generator::new(&layout, &config);
    Ok(RenderedLayout {
        code: layout.code().to_string(),
        name: layout.name().to_string(),
        description: layout.description().to_string(),
        html: generator.generate_html(),
        text: generator.generate_text(),
    })
}

/// Renders the `<li>` index of several layouts.
#[must_use]
pub fn render_index(layouts: &[Layout]) -> String {
    index_entries(layouts)
}
