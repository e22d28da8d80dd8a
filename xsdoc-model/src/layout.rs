//! Layout construction and navigation.

use crate::builder::BuildContext;
use crate::conventions::Conventions;
use crate::error::{ModelError, Result};
use crate::item::{ItemId, SchemaItem};
use std::collections::{BTreeMap, HashMap};
use std::ops::Index;
use tracing::{debug, info};
use xsdoc_schema::{NodeKind, SchemaNode, TypeTable};

/// A fully built layout: one event schema and its item tree.
#[derive(Debug, Clone)]
pub struct Layout {
    code: String,
    name: String,
    description: String,
    items: Vec<SchemaItem>,
    root: ItemId,
    first_occurrence_by_type: HashMap<String, ItemId>,
}

/// Place where a validation rule is cited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReference {
    /// Path of the citing item.
    pub anchor: String,
    /// Names from the event group down to the citing item, joined by ` > `.
    pub trail: String,
}

impl Layout {
    /// Builds a layout from a parsed layout document and the global type table.
    ///
    /// # Errors
    /// Returns `ModelError` if the document has no annotated root element, if
    /// a referenced type is missing, or if a leaf item's size cannot be
    /// determined.
    pub fn build(document: &SchemaNode, global_types: &TypeTable) -> Result<Self> {
        Self::build_with(document, global_types, &Conventions::default())
    }

    /// Builds a layout using custom naming conventions.
    ///
    /// # Errors
    /// See [`Layout::build`].
    pub fn build_with(
        document: &SchemaNode,
        global_types: &TypeTable,
        conventions: &Conventions,
    ) -> Result<Self> {
        let root_node = document
            .child(&NodeKind::Element)
            .ok_or_else(|| ModelError::integrity("document", "no top-level element"))?;
        let heading = root_node
            .documentation()
            .first()
            .copied()
            .ok_or_else(|| ModelError::integrity("document", "root element is not annotated"))?;
        let (code, description) = heading
            .split_once(" - ")
            .filter(|(code, _)| conventions.is_layout_code(code))
            .ok_or_else(|| {
                ModelError::integrity(
                    "document",
                    format!("root annotation '{heading}' does not start with a layout code"),
                )
            })?;

        let local_types = TypeTable::local_complex_types(document);
        debug!(code, local_types = local_types.len(), "building layout");

        let mut ctx = BuildContext::new(code, &local_types, global_types, conventions);
        let root = ctx.build_item(root_node, 1, None)?;
        let (items, first_occurrence_by_type) = ctx.finish();

        let name = items[root.0]
            .children
            .first()
            .map(|child| items[child.0].name.clone())
            .ok_or_else(|| ModelError::integrity(&items[root.0].path, "root has no event group"))?;

        info!(code, name = %name, items = items.len(), "layout built");
        Ok(Self {
            code: code.to_string(),
            name,
            description: description.to_string(),
            items,
            root,
            first_occurrence_by_type,
        })
    }

    /// Layout code, e.g. `S-1000`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Layout code without its two-character prefix, e.g. `1000`.
    #[must_use]
    pub fn short_code(&self) -> &str {
        self.code.get(2..).unwrap_or_default()
    }

    /// Name of the event group, e.g. `evtInfoEmpregador`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout description taken from the root annotation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Id of the document root item.
    #[must_use]
    pub const fn root(&self) -> ItemId {
        self.root
    }

    /// The document root item.
    #[must_use]
    pub fn root_item(&self) -> &SchemaItem {
        &self.items[self.root.0]
    }

    /// Looks an item up by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&SchemaItem> {
        self.items.get(id.0)
    }

    /// All items in construction (pre-order) order.
    #[must_use]
    pub fn items(&self) -> &[SchemaItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the layout has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enclosing item of `id`.
    #[must_use]
    pub fn parent(&self, id: ItemId) -> Option<&SchemaItem> {
        self.item(id)?.parent.and_then(|p| self.item(p))
    }

    /// Child items of `id`, in declaration order.
    pub fn children(&self, id: ItemId) -> impl Iterator<Item = &SchemaItem> {
        self.item(id)
            .into_iter()
            .flat_map(|item| item.children.iter())
            .filter_map(|child| self.item(*child))
    }

    /// Item first declared with the same composite type, for duplicates.
    #[must_use]
    pub fn reference(&self, id: ItemId) -> Option<&SchemaItem> {
        self.item(id)?.reference.and_then(|r| self.item(r))
    }

    /// First item declared with the given composite type.
    #[must_use]
    pub fn first_occurrence(&self, type_name: &str) -> Option<ItemId> {
        self.first_occurrence_by_type.get(type_name).copied()
    }

    /// Finds an item by path.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&SchemaItem> {
        self.items.iter().find(|item| item.path == path)
    }

    /// Depth-first pre-order traversal starting at the root.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            layout: self,
            stack: vec![self.root],
        }
    }

    /// Validation rules cited by the items of the layout.
    ///
    /// Subtrees of duplicate items are skipped, since they are documented
    /// at their first occurrence.
    #[must_use]
    pub fn rule_references(&self) -> BTreeMap<String, Vec<RuleReference>> {
        let mut rules: BTreeMap<String, Vec<RuleReference>> = BTreeMap::new();
        let mut stack = vec![(self.root, Vec::<String>::new())];

        while let Some((id, mut trail)) = stack.pop() {
            let item = &self.items[id.0];
            if item.level > 1 {
                trail.push(item.name.clone());
            }
            for rule in &item.validation_rules {
                rules.entry(rule.clone()).or_default().push(RuleReference {
                    anchor: item.path.clone(),
                    trail: trail.join(" > "),
                });
            }
            if !item.is_duplicate() {
                for child in item.children.iter().rev() {
                    stack.push((*child, trail.clone()));
                }
            }
        }
        rules
    }
}

impl Index<ItemId> for Layout {
    type Output = SchemaItem;

    fn index(&self, id: ItemId) -> &SchemaItem {
        &self.items[id.0]
    }
}

/// Pre-order iterator over the items of a layout.
#[derive(Debug)]
pub struct Preorder<'a> {
    layout: &'a Layout,
    stack: Vec<ItemId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SchemaItem;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let item = self.layout.item(id)?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}
