//! Restriction analysis.
//!
//! Derives an item's occurrence bounds, data type, size, decimal places and
//! valid values from its declaration and the facets of its terminal
//! restriction. Facets are inspected in a fixed order and each one that
//! applies overrides the size set by the previous ones.

use crate::conventions::Conventions;
use crate::error::{ModelError, Result};
use crate::item::{Category, MaxOccurs, Occurrence, SchemaItem, Size, TypeLabel};
use crate::resolver::resolve_terminal_restriction;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;
use xsdoc_schema::{NodeKind, SchemaNode, TypeTable};

/// Fixed-width digit groups such as `\d{14}`.
static DIGIT_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\d\{(\d+)\}").unwrap_or_else(|e| panic!("invalid digit group regex: {e}"))
});

/// Leading bounded quantifier such as `^\d{1,3}` or `^\w{2,60}`.
static BOUNDED_QUANTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\^?\\[dw]\{(\d+),(\d+)\}")
        .unwrap_or_else(|e| panic!("invalid quantifier regex: {e}"))
});

/// Size documented for calendar dates.
const DATE_SIZE: u32 = 10;

/// Analyzes the restrictions applying to an item.
///
/// # Arguments
/// * `item` - Item being built; its category must already be final
/// * `parent_category` - Category of the enclosing item, if any
/// * `declaration` - Element or attribute declaring the item
/// * `definition` - Resolved type definition (named or inline), if any
/// * `global_types` - Table of reusable types
/// * `conventions` - Type naming conventions
///
/// # Errors
/// Returns `SizeUndetermined` when a leaf item ends without a size,
/// `SchemaIntegrity` for unparsable numeric attributes or facets, and any
/// error raised while resolving the restriction's base types.
pub fn analyze_restrictions(
    item: &mut SchemaItem,
    parent_category: Option<Category>,
    declaration: &SchemaNode,
    definition: Option<&SchemaNode>,
    global_types: &TypeTable,
    conventions: &Conventions,
) -> Result<()> {
    item.occurrence = occurrence(declaration, parent_category, &item.path)?;
    item.valid_values.clear();
    item.size = None;
    item.decimal_places = None;

    if item.is_aggregating() {
        item.type_label = TypeLabel::None;
        return Ok(());
    }

    let restriction = definition.and_then(|d| d.child(&NodeKind::Restriction));
    let base = match restriction {
        Some(restriction) => {
            let terminal = resolve_terminal_restriction(restriction, global_types, conventions)
                .map_err(|e| e.at(&item.path))?;
            apply_facets(item, terminal, definition.and_then(SchemaNode::name), conventions)?;
            terminal.attr("base")
        }
        None => declaration.attr("type"),
    };

    item.type_label = TypeLabel::from_base(base);
    if item.type_label == TypeLabel::Date {
        item.size = Some(Size::Fixed(DATE_SIZE));
        item.decimal_places = None;
    }

    if item.size.is_none() {
        return Err(ModelError::size_undetermined(&item.name, &item.path));
    }
    trace!(path = %item.path, size = ?item.size, "restrictions analyzed");
    Ok(())
}

/// Reads `minOccurs`/`maxOccurs`, forcing the minimum to 0 under a choice.
fn occurrence(
    declaration: &SchemaNode,
    parent_category: Option<Category>,
    path: &str,
) -> Result<Occurrence> {
    let mut occurrence = Occurrence::default();
    if let Some(min) = declaration.attr("minOccurs") {
        occurrence.min = parse_number(min, "minOccurs", path)?;
    }
    if let Some(max) = declaration.attr("maxOccurs") {
        occurrence.max = match max {
            "unbounded" => MaxOccurs::Unbounded,
            bounded => MaxOccurs::Bounded(parse_number(bounded, "maxOccurs", path)?),
        };
    }
    if parent_category == Some(Category::Choice) {
        occurrence.min = 0;
    }
    Ok(occurrence)
}

fn apply_facets(
    item: &mut SchemaItem,
    terminal: &SchemaNode,
    definition_name: Option<&str>,
    conventions: &Conventions,
) -> Result<()> {
    apply_enumerations(item, terminal);

    if let Some(length) = terminal.facet_value(&NodeKind::Length) {
        item.size = Some(Size::Fixed(parse_number(length, "length", &item.path)?));
    }

    if let Some(max) = terminal.facet_value(&NodeKind::MaxLength) {
        let min = terminal
            .facet_value(&NodeKind::MinLength)
            .map(|min| parse_number(min, "minLength", &item.path))
            .transpose()?
            .unwrap_or(0);
        item.size = Some(Size::Range(min, parse_number(max, "maxLength", &item.path)?));
    }

    if !matches!(item.size, Some(Size::Fixed(_)))
        && let Some(pattern) = terminal.facet_value(&NodeKind::Pattern)
    {
        if let Some(size) = pattern_size(pattern) {
            item.size = Some(size);
        }
        if let Some(sizes) = definition_name.and_then(|name| conventions.period_sizes(name)) {
            item.size = Some(Size::List(sizes.to_vec()));
        }
    }

    if !matches!(item.size, Some(Size::Fixed(_)))
        && let Some(total) = terminal.facet_value(&NodeKind::TotalDigits)
    {
        item.size = Some(Size::Range(1, parse_number(total, "totalDigits", &item.path)?));
    }

    item.decimal_places = terminal
        .facet_value(&NodeKind::FractionDigits)
        .map(str::to_string);
    Ok(())
}

/// Collects enumerated values, sizing the item by the shortest and longest value.
fn apply_enumerations(item: &mut SchemaItem, terminal: &SchemaNode) {
    let mut widths: Option<(u32, u32)> = None;

    for enumeration in terminal.children_of(&NodeKind::Enumeration) {
        let value = enumeration.attr("value").unwrap_or_default();
        let description = match enumeration.documentation().as_slice() {
            [] => None,
            [only] => Some((*only).to_string()),
            [heading, text, ..] => {
                item.valid_values
                    .insert((*heading).to_string(), Some(String::new()));
                Some((*text).to_string())
            }
        };
        item.valid_values.insert(value.to_string(), description);

        let width = u32::try_from(value.chars().count()).unwrap_or(u32::MAX);
        widths = Some(match widths {
            None => (width, width),
            Some((shortest, longest)) => (shortest.min(width), longest.max(width)),
        });
    }

    item.size = match widths {
        Some((shortest, longest)) if shortest == longest => Some(Size::Fixed(longest)),
        Some((shortest, longest)) => Some(Size::Range(shortest, longest)),
        None => item.size.take(),
    };
}

/// Infers a size from a pattern facet.
///
/// A single `\d{N}` group gives a fixed size counting the literal characters
/// before the first `\d`; several groups give the sorted list of their widths.
/// Without digit groups, a leading `\d{a,b}` or `\w{a,b}` gives a range.
#[must_use]
pub fn pattern_size(pattern: &str) -> Option<Size> {
    let groups: Vec<u32> = DIGIT_GROUP
        .captures_iter(pattern)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();

    match groups.as_slice() {
        [] => BOUNDED_QUANTIFIER.captures(pattern).and_then(|caps| {
            let min = caps[1].parse().ok()?;
            let max = caps[2].parse().ok()?;
            Some(Size::Range(min, max))
        }),
        [width] => {
            let prefix = pattern
                .find(r"\d")
                .map_or(0, |at| pattern[..at].chars().count());
            let prefix = u32::try_from(prefix).unwrap_or(u32::MAX);
            Some(Size::Fixed(prefix.saturating_add(*width)))
        }
        _ => {
            let mut widths = groups;
            widths.sort_unstable();
            widths.dedup();
            Some(Size::List(widths))
        }
    }
}

fn parse_number(value: &str, attribute: &str, path: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| {
        ModelError::integrity(path, format!("invalid {attribute} value '{value}'"))
    })
}
