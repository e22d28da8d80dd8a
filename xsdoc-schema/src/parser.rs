//! XSD document parser.
//!
//! This module reads XSD files into the generic [`SchemaNode`] tree. Namespace
//! prefixes are dropped from tag names, attribute values and text content are
//! entity-unescaped, and text is trimmed once its element closes.

use crate::error::ParseError;
use crate::types::{SchemaNode, TypeTable};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses an XSD document from a string.
///
/// # Arguments
/// * `xml` - XSD document content
///
/// # Returns
/// The document's root node (usually `schema`).
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or has no root element.
pub fn parse_document(xml: &str) -> Result<SchemaNode, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<SchemaNode> = Vec::new();
    let mut root: Option<SchemaNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(start_node(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = start_node(e)?;
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::End(ref e)) => {
                let mut node = stack.pop().ok_or_else(|| {
                    ParseError::unbalanced(String::from_utf8_lossy(e.local_name().as_ref()))
                })?;
                let trimmed = node.text.trim();
                if trimmed.len() != node.text.len() {
                    node.text = trimmed.to_string();
                }
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Text(ref t)) => {
                if let Some(top) = stack.last_mut() {
                    let raw = std::str::from_utf8(t.as_ref())?;
                    top.text.push_str(&unescape(raw)?);
                }
            }
            Ok(Event::GeneralRef(ref r)) => {
                if let Some(top) = stack.last_mut() {
                    let name = std::str::from_utf8(r.as_ref())?;
                    top.text.push_str(&unescape(&format!("&{name};"))?);
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(std::str::from_utf8(c.as_ref())?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::unbalanced(open.tag.clone()));
    }

    root.ok_or_else(|| ParseError::invalid_structure("no root element found"))
}

/// Parses an XSD document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_file(path: &Path) -> Result<SchemaNode, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_document(&xml)
}

/// Parses a document of reusable types into a lookup table.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed.
pub fn parse_type_table(xml: &str) -> Result<TypeTable, ParseError> {
    let root = parse_document(xml)?;
    Ok(TypeTable::from_document(&root))
}

/// Builds a node from a start (or empty) tag.
fn start_node(e: &BytesStart<'_>) -> Result<SchemaNode, ParseError> {
    let tag = std::str::from_utf8(e.local_name().as_ref())?.to_string();
    let mut node = SchemaNode::new(tag);

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        node.set_attr(key, unescape(value)?.into_owned());
    }

    Ok(node)
}

/// Appends a finished node to its parent, or makes it the document root.
fn attach(stack: &mut [SchemaNode], root: &mut Option<SchemaNode>, node: SchemaNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}
