//! # xsdoc Schema
//!
//! XSD document reader.
//!
//! This crate provides:
//! - XML parsing of XSD files into a generic node tree
//! - Node kinds for the schema constructs the layout model understands
//! - Type tables of reusable named definitions

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ParseError, Result};
pub use parser::{parse_document, parse_file, parse_type_table};
pub use types::{NodeKind, SchemaNode, TypeTable};
