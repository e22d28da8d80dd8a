//! Layout items.
//!
//! A [`SchemaItem`] is one group, element or attribute of a layout. Items
//! live in the layout's arena and refer to each other through [`ItemId`]s.

use indexmap::IndexMap;
use std::fmt;

/// Index of an item inside its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    /// Position of the item in the layout arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Structural category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Attribute declaration (`A`).
    Attribute,
    /// Group of child items (`G`).
    Group,
    /// Leaf element (`E`).
    Element,
    /// Group whose children are mutually exclusive (`CG`).
    Choice,
}

impl Category {
    /// Display code of the category.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Attribute => "A",
            Self::Group => "G",
            Self::Element => "E",
            Self::Choice => "CG",
        }
    }

    /// Returns true for categories holding child items.
    #[must_use]
    pub const fn is_aggregating(self) -> bool {
        matches!(self, Self::Group | Self::Choice)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse data type of a leaf item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeLabel {
    /// Calendar date (`D`).
    Date,
    /// Character string (`C`).
    Character,
    /// Numeric value (`N`).
    Numeric,
    /// No data type, used by groups (`-`).
    None,
}

impl TypeLabel {
    /// Display code of the type label.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Date => "D",
            Self::Character => "C",
            Self::Numeric => "N",
            Self::None => "-",
        }
    }

    /// Classifies an XSD base type such as `xs:string` or `xs:date`.
    #[must_use]
    pub fn from_base(base: Option<&str>) -> Self {
        let local = base.map(|b| b.rsplit(':').next().unwrap_or(b));
        match local {
            Some("date") => Self::Date,
            Some("string" | "ID") => Self::Character,
            _ => Self::Numeric,
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Upper bound of an occurrence range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxOccurs {
    /// Finite upper bound.
    Bounded(u32),
    /// `unbounded`, displayed as `N`.
    Unbounded,
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("N"),
        }
    }
}

/// Minimum and maximum number of occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Minimum occurrences.
    pub min: u32,
    /// Maximum occurrences.
    pub max: MaxOccurs,
}

impl Default for Occurrence {
    fn default() -> Self {
        Self {
            min: 1,
            max: MaxOccurs::Bounded(1),
        }
    }
}

impl fmt::Display for Occurrence {
    /// `N` when both bounds are equal, `min-max` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == MaxOccurs::Bounded(self.min) {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Documented size of a leaf item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Size {
    /// Exact length.
    Fixed(u32),
    /// Inclusive length range.
    Range(u32, u32),
    /// Set of admissible lengths.
    List(Vec<u32>),
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min}-{max}"),
            Self::List(sizes) => match sizes.split_last() {
                None => f.write_str("-"),
                Some((last, [])) => write!(f, "{last}"),
                Some((last, init)) => {
                    let head: Vec<String> = init.iter().map(u32::to_string).collect();
                    write!(f, "{} ou {last}", head.join(", "))
                }
            },
        }
    }
}

/// One group, element or attribute of a layout.
///
/// Documentation fields hold the raw annotation text; cross-reference tokens
/// are resolved when the item is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaItem {
    /// Position in the layout arena.
    pub id: ItemId,
    /// Structural category.
    pub category: Category,
    /// Depth in the tree, starting at 1 for the document root.
    pub level: u32,
    /// Unique anchor of the item, derived from its ancestry.
    pub path: String,
    /// Declared name.
    pub name: String,
    /// Enclosing item, `None` for the root.
    pub parent: Option<ItemId>,
    /// Child items in declaration order.
    pub children: Vec<ItemId>,
    /// Pre-order construction number, starting at 1.
    pub numbering: u32,
    /// Occurrence bounds.
    pub occurrence: Occurrence,
    /// Declared type name, if any.
    pub type_name: Option<String>,
    /// Coarse data type.
    pub type_label: TypeLabel,
    /// Documented size, `None` for groups.
    pub size: Option<Size>,
    /// Number of decimal places, `None` when not applicable.
    pub decimal_places: Option<String>,
    /// Enumerated values and their descriptions.
    ///
    /// A `Some("")` description marks a heading line rather than a value.
    pub valid_values: IndexMap<String, Option<String>>,
    /// Short description lines.
    pub description_lines: Vec<String>,
    /// Extended description lines, replacing the short ones in detailed views.
    pub full_description_lines: Vec<String>,
    /// Validation notes.
    pub validation_notes: Vec<String>,
    /// Origin notes.
    pub origin_notes: Vec<String>,
    /// Source event notes.
    pub source_event_notes: Vec<String>,
    /// Names of the child fields forming the group key.
    pub group_keys: Vec<String>,
    /// Usage conditions by tag, each with an optional qualifying text.
    pub usage_conditions: IndexMap<String, Option<String>>,
    /// Validation rule identifiers.
    pub validation_rules: Vec<String>,
    /// First item declared with the same composite type, when this is not it.
    pub reference: Option<ItemId>,
    pub(crate) description_seeded: bool,
}

impl SchemaItem {
    /// Creates a group item with default occurrence and usage condition.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, level: u32, numbering: u32) -> Self {
        let mut usage_conditions = IndexMap::new();
        usage_conditions.insert("O".to_string(), None);
        Self {
            id,
            category: Category::Group,
            level,
            path: String::new(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            numbering,
            occurrence: Occurrence::default(),
            type_name: None,
            type_label: TypeLabel::None,
            size: None,
            decimal_places: None,
            valid_values: IndexMap::new(),
            description_lines: Vec::new(),
            full_description_lines: Vec::new(),
            validation_notes: Vec::new(),
            origin_notes: Vec::new(),
            source_event_notes: Vec::new(),
            group_keys: Vec::new(),
            usage_conditions,
            validation_rules: Vec::new(),
            reference: None,
            description_seeded: false,
        }
    }

    /// Returns true for groups and choice groups.
    #[must_use]
    pub const fn is_aggregating(&self) -> bool {
        self.category.is_aggregating()
    }

    /// Returns true when the item repeats an earlier expansion of its type.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.reference.is_some_and(|r| r != self.id)
    }

    /// First description line, or an empty string.
    #[must_use]
    pub fn summary_description(&self) -> &str {
        self.description_lines
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Extended description if present, short description otherwise.
    #[must_use]
    pub fn detailed_description(&self) -> &[String] {
        if self.full_description_lines.is_empty() {
            &self.description_lines
        } else {
            &self.full_description_lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::Attribute.code(), "A");
        assert_eq!(Category::Group.code(), "G");
        assert_eq!(Category::Element.code(), "E");
        assert_eq!(Category::Choice.to_string(), "CG");
        assert!(Category::Group.is_aggregating());
        assert!(Category::Choice.is_aggregating());
        assert!(!Category::Element.is_aggregating());
        assert!(!Category::Attribute.is_aggregating());
    }

    #[test]
    fn test_type_label_from_base() {
        assert_eq!(TypeLabel::from_base(Some("xs:date")), TypeLabel::Date);
        assert_eq!(TypeLabel::from_base(Some("xs:string")), TypeLabel::Character);
        assert_eq!(TypeLabel::from_base(Some("xs:ID")), TypeLabel::Character);
        assert_eq!(TypeLabel::from_base(Some("xs:byte")), TypeLabel::Numeric);
        assert_eq!(TypeLabel::from_base(Some("decimal")), TypeLabel::Numeric);
        assert_eq!(TypeLabel::from_base(None), TypeLabel::Numeric);
        assert_eq!(TypeLabel::None.code(), "-");
    }

    #[test]
    fn test_occurrence_display() {
        assert_eq!(Occurrence::default().to_string(), "1");
        let optional = Occurrence {
            min: 0,
            max: MaxOccurs::Bounded(1),
        };
        assert_eq!(optional.to_string(), "0-1");
        let repeated = Occurrence {
            min: 0,
            max: MaxOccurs::Unbounded,
        };
        assert_eq!(repeated.to_string(), "0-N");
        let exact = Occurrence {
            min: 3,
            max: MaxOccurs::Bounded(3),
        };
        assert_eq!(exact.to_string(), "3");
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Size::Fixed(14).to_string(), "14");
        assert_eq!(Size::Range(1, 20).to_string(), "1-20");
        assert_eq!(Size::List(vec![4, 7]).to_string(), "4 ou 7");
        assert_eq!(Size::List(vec![8, 11, 14]).to_string(), "8, 11 ou 14");
        assert_eq!(Size::List(vec![9]).to_string(), "9");
    }

    #[test]
    fn test_new_item_defaults() {
        let item = SchemaItem::new(ItemId(0), "ideEvento", 3, 4);
        assert_eq!(item.category, Category::Group);
        assert_eq!(item.occurrence, Occurrence::default());
        assert_eq!(item.usage_conditions.get("O"), Some(&None));
        assert!(!item.is_duplicate());
        assert_eq!(item.summary_description(), "");
    }

    #[test]
    fn test_duplicate_and_detailed_description() {
        let mut item = SchemaItem::new(ItemId(5), "idePeriodo", 5, 6);
        item.reference = Some(ItemId(5));
        assert!(!item.is_duplicate());
        item.reference = Some(ItemId(2));
        assert!(item.is_duplicate());

        item.description_lines = vec!["Curta.".to_string()];
        assert_eq!(item.detailed_description(), ["Curta.".to_string()]);
        item.full_description_lines = vec!["Completa.".to_string()];
        assert_eq!(item.detailed_description(), ["Completa.".to_string()]);
    }
}
