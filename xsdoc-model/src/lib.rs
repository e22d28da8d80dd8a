//! # xsdoc Model
//!
//! Layout model for eSocial XSD documentation.
//!
//! This crate provides:
//! - Construction of the item tree of a layout from its parsed XSD
//! - Restriction analysis (occurrence, data type, size, valid values)
//! - Annotation analysis (descriptions, validations, keys, conditions, rules)
//! - Cross-reference resolution and display strings for the rendered views

pub mod annotation;
pub mod builder;
pub mod conventions;
pub mod crossref;
pub mod display;
pub mod error;
pub mod item;
pub mod layout;
pub mod resolver;
pub mod restriction;

pub use annotation::apply_annotation;
pub use builder::BuildContext;
pub use conventions::Conventions;
pub use crossref::{CrossRefResolver, RefContext, encode_superscript, escape_markup};
pub use display::{ItemDisplay, Markup, link};
pub use error::{ModelError, Result};
pub use item::{Category, ItemId, MaxOccurs, Occurrence, SchemaItem, Size, TypeLabel};
pub use layout::{Layout, Preorder, RuleReference};
pub use resolver::resolve_terminal_restriction;
pub use restriction::{analyze_restrictions, pattern_size};
