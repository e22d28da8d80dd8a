//! Schema node tree and type tables.
//!
//! This module contains the generic representation of a parsed XSD document:
//! a tree of [`SchemaNode`]s tagged with a [`NodeKind`], plus [`TypeTable`]
//! lookups of reusable named type definitions.

use std::collections::HashMap;

/// Kind of a schema node, derived from the element's local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `xs:schema` document root.
    Schema,
    /// `xs:element` declaration.
    Element,
    /// `xs:attribute` declaration.
    Attribute,
    /// `xs:complexType` definition.
    ComplexType,
    /// `xs:simpleType` definition.
    SimpleType,
    /// `xs:sequence` compositor.
    Sequence,
    /// `xs:choice` compositor.
    Choice,
    /// `xs:annotation` block.
    Annotation,
    /// `xs:documentation` fragment.
    Documentation,
    /// `xs:restriction` clause.
    Restriction,
    /// `xs:enumeration` facet.
    Enumeration,
    /// `xs:length` facet.
    Length,
    /// `xs:minLength` facet.
    MinLength,
    /// `xs:maxLength` facet.
    MaxLength,
    /// `xs:pattern` facet.
    Pattern,
    /// `xs:totalDigits` facet.
    TotalDigits,
    /// `xs:fractionDigits` facet.
    FractionDigits,
    /// Any other element.
    Other(String),
}

impl NodeKind {
    /// Maps an element local name (without namespace prefix) to a node kind.
    #[must_use]
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "schema" => Self::Schema,
            "element" => Self::Element,
            "attribute" => Self::Attribute,
            "complexType" => Self::ComplexType,
            "simpleType" => Self::SimpleType,
            "sequence" => Self::Sequence,
            "choice" => Self::Choice,
            "annotation" => Self::Annotation,
            "documentation" => Self::Documentation,
            "restriction" => Self::Restriction,
            "enumeration" => Self::Enumeration,
            "length" => Self::Length,
            "minLength" => Self::MinLength,
            "maxLength" => Self::MaxLength,
            "pattern" => Self::Pattern,
            "totalDigits" => Self::TotalDigits,
            "fractionDigits" => Self::FractionDigits,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One element of a parsed schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    /// Node kind.
    pub kind: NodeKind,
    /// Local tag name.
    pub tag: String,
    /// Trimmed, unescaped text content.
    pub text: String,
    /// Child nodes in document order.
    pub children: Vec<SchemaNode>,
    attributes: Vec<(String, String)>,
}

impl SchemaNode {
    /// Creates an empty node for the given local tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            kind: NodeKind::from_local_name(&tag),
            tag,
            text: String::new(),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute, replacing any previous value for the same key.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets an attribute value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the attribute is declared.
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    /// The `name` attribute.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// First direct child of the given kind.
    #[must_use]
    pub fn child(&self, kind: &NodeKind) -> Option<&SchemaNode> {
        self.children.iter().find(|c| &c.kind == kind)
    }

    /// All direct children of the given kind.
    pub fn children_of<'a>(
        &'a self,
        kind: &NodeKind,
    ) -> impl Iterator<Item = &'a SchemaNode> + use<'a> {
        let kind = kind.clone();
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// The `value` attribute of the first facet child of the given kind.
    #[must_use]
    pub fn facet_value(&self, kind: &NodeKind) -> Option<&str> {
        self.child(kind).and_then(|f| f.attr("value"))
    }

    /// Texts of the `documentation` children of this node's annotation.
    ///
    /// Empty when the node carries no annotation.
    #[must_use]
    pub fn documentation(&self) -> Vec<&str> {
        self.child(&NodeKind::Annotation)
            .map(|a| {
                a.children_of(&NodeKind::Documentation)
                    .map(|d| d.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Lookup table of reusable named type definitions.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: HashMap<String, SchemaNode>,
}

impl TypeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every named top-level definition of a schema document.
    #[must_use]
    pub fn from_document(root: &SchemaNode) -> Self {
        let mut table = Self::new();
        for child in &root.children {
            if let Some(name) = child.name() {
                table.insert(name.to_string(), child.clone());
            }
        }
        table
    }

    /// Indexes the top-level `complexType` definitions of a schema document.
    #[must_use]
    pub fn local_complex_types(root: &SchemaNode) -> Self {
        let mut table = Self::new();
        for child in root.children_of(&NodeKind::ComplexType) {
            if let Some(name) = child.name() {
                table.insert(name.to_string(), child.clone());
            }
        }
        table
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, name: String, definition: SchemaNode) {
        self.types.insert(name, definition);
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.types.get(name)
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
