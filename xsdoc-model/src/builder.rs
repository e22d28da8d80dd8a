//! Recursive construction of the item tree.
//!
//! [`BuildContext`] carries the state shared by one layout construction:
//! the item arena, the numbering counter, the first item declared with each
//! expanded type, and the type tables.

use crate::annotation::apply_annotation;
use crate::conventions::Conventions;
use crate::error::{ModelError, Result};
use crate::item::{Category, ItemId, SchemaItem};
use crate::restriction::analyze_restrictions;
use std::collections::HashMap;
use tracing::{debug, trace};
use xsdoc_schema::{NodeKind, SchemaNode, TypeTable};

/// State of one layout construction.
#[derive(Debug)]
pub struct BuildContext<'a> {
    short_code: String,
    items: Vec<SchemaItem>,
    next_number: u32,
    first_occurrence_by_type: HashMap<String, ItemId>,
    local_types: &'a TypeTable,
    global_types: &'a TypeTable,
    conventions: &'a Conventions,
}

impl<'a> BuildContext<'a> {
    /// Creates a context for the layout identified by `code` (e.g. `S-1000`).
    #[must_use]
    pub fn new(
        code: &str,
        local_types: &'a TypeTable,
        global_types: &'a TypeTable,
        conventions: &'a Conventions,
    ) -> Self {
        Self {
            short_code: code.chars().skip(2).collect(),
            items: Vec::new(),
            next_number: 1,
            first_occurrence_by_type: HashMap::new(),
            local_types,
            global_types,
            conventions,
        }
    }

    /// Builds the item declared by `node` and, recursively, its descendants.
    ///
    /// # Errors
    /// Returns the first error met anywhere in the subtree.
    pub fn build_item(
        &mut self,
        node: &'a SchemaNode,
        level: u32,
        parent: Option<ItemId>,
    ) -> Result<ItemId> {
        let name = node.name().ok_or_else(|| {
            let context = parent.map(|p| self.items[p.0].path.clone()).unwrap_or_default();
            ModelError::integrity(context, format!("{} declaration without a name", node.tag))
        })?;
        let id = self.allocate(name, level, parent);
        let scalar_category = if node.kind == NodeKind::Attribute {
            Category::Attribute
        } else {
            Category::Element
        };

        let definition = match node.attr("type") {
            Some(type_name) => self.apply_declared_type(id, type_name, scalar_category, level)?,
            None => {
                let inline = node.child(&NodeKind::SimpleType);
                if inline.is_some() {
                    self.items[id.0].category = Category::Element;
                }
                inline
            }
        };

        let parent_category = parent.map(|p| self.items[p.0].category);
        analyze_restrictions(
            &mut self.items[id.0],
            parent_category,
            node,
            definition,
            self.global_types,
            self.conventions,
        )?;

        for child in &node.children {
            match child.kind {
                NodeKind::SimpleType => {
                    let item = &mut self.items[id.0];
                    item.category = scalar_category;
                    apply_annotation(item, child);
                }
                NodeKind::Annotation => apply_annotation(&mut self.items[id.0], node),
                NodeKind::ComplexType => self.expand(id, child, level)?,
                _ => {}
            }
        }

        Ok(id)
    }

    /// Resolves a declared type, expanding composite types in place.
    ///
    /// Returns the type's definition when it was looked up.
    fn apply_declared_type(
        &mut self,
        id: ItemId,
        type_name: &str,
        scalar_category: Category,
        level: u32,
    ) -> Result<Option<&'a SchemaNode>> {
        self.items[id.0].type_name = Some(type_name.to_string());

        let definition = if self.conventions.requires_lookup(type_name) {
            Some(self.lookup_type(type_name, id)?)
        } else {
            None
        };

        if self.conventions.is_expanded(type_name) {
            match self.first_occurrence_by_type.get(type_name) {
                Some(&first) => {
                    debug!(
                        path = %self.items[id.0].path,
                        type_name,
                        "repeated type, referencing first occurrence"
                    );
                    self.items[id.0].reference = Some(first);
                }
                None => {
                    self.first_occurrence_by_type
                        .insert(type_name.to_string(), id);
                }
            }
            if let Some(definition) = definition {
                self.expand(id, definition, level)?;
            }
        } else if self.conventions.is_scalar(type_name) {
            self.items[id.0].category = scalar_category;
        }

        if let Some(definition) = definition {
            apply_annotation(&mut self.items[id.0], definition);
        }
        Ok(definition)
    }

    /// Expands a complex type or compositor into children of `id`.
    fn expand(&mut self, id: ItemId, node: &'a SchemaNode, level: u32) -> Result<()> {
        match node.kind {
            NodeKind::ComplexType => {
                if let Some(attribute) = node.child(&NodeKind::Attribute) {
                    let child = self.build_item(attribute, level + 1, Some(id))?;
                    self.items[id.0].children.push(child);
                }
                for child in &node.children {
                    match child.kind {
                        NodeKind::Annotation => apply_annotation(&mut self.items[id.0], node),
                        NodeKind::Sequence | NodeKind::Choice => self.expand(id, child, level)?,
                        _ => {}
                    }
                }
            }
            NodeKind::Sequence | NodeKind::Choice => {
                if node.kind == NodeKind::Choice {
                    self.items[id.0].category = Category::Choice;
                }
                for child in &node.children {
                    if child.has_attr("ref") {
                        continue;
                    }
                    match child.kind {
                        NodeKind::Choice => self.expand(id, child, level)?,
                        NodeKind::Element => {
                            let built = self.build_item(child, level + 1, Some(id))?;
                            self.items[id.0].children.push(built);
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Looks a type up in the local table, then in the global one.
    fn lookup_type(&self, type_name: &str, id: ItemId) -> Result<&'a SchemaNode> {
        let local: &'a TypeTable = self.local_types;
        let global: &'a TypeTable = self.global_types;
        local
            .get(type_name)
            .or_else(|| global.get(type_name))
            .ok_or_else(|| ModelError::type_not_found(type_name, &self.items[id.0].path))
    }

    /// Appends a new item, assigning its number and path.
    fn allocate(&mut self, name: &str, level: u32, parent: Option<ItemId>) -> ItemId {
        let id = ItemId(self.items.len());
        let mut item = SchemaItem::new(id, name, level, self.next_number);
        self.next_number += 1;

        item.parent = parent;
        item.path = match (level, parent) {
            (1, _) | (_, None) => format!("{}_{name}", self.short_code),
            (2, _) => self.short_code.clone(),
            (_, Some(p)) => format!("{}_{name}", self.items[p.0].path),
        };
        if level == 1 {
            item.description_lines = vec![name.to_string()];
            item.description_seeded = true;
        }

        trace!(path = %item.path, numbering = item.numbering, "item allocated");
        self.items.push(item);
        id
    }

    /// Consumes the context, returning the arena and the first-occurrence map.
    #[must_use]
    pub fn finish(self) -> (Vec<SchemaItem>, HashMap<String, ItemId>) {
        (self.items, self.first_occurrence_by_type)
    }
}
