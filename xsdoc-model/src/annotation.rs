//! Annotation analysis.
//!
//! The first documentation fragment of an annotation is the item's short
//! description. Every later fragment is dispatched on its prefix; untagged
//! fragments continue whichever field the previous tagged fragment opened.

use crate::item::SchemaItem;
use xsdoc_schema::{NodeKind, SchemaNode};

/// Field receiving untagged continuation fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Description,
    FullDescription,
    Validation,
    Origin,
    SourceEvent,
}

type Handler = fn(&mut SchemaItem, &str, &mut Cursor);

/// Prefix handlers, in priority order.
const PREFIX_HANDLERS: &[(&str, Handler)] = &[
    ("Validação: ", handle_validation),
    ("Origem: ", handle_origin),
    ("Evento de origem: ", handle_source_event),
    ("CHAVE_GRUPO: ", handle_group_keys),
    ("REGRA:", handle_rule),
    ("CONDICAO_GRUPO: ", handle_conditions),
    ("DESCRICAO_COMPLETA:", handle_full_description),
];

/// Populates an item's documentation fields from `owner`'s annotation.
///
/// Does nothing when `owner` carries no annotation. Otherwise every
/// documentation field is reset before the fragments are applied, so the
/// last annotation applied to an item wins.
pub fn apply_annotation(item: &mut SchemaItem, owner: &SchemaNode) {
    if owner.child(&NodeKind::Annotation).is_none() {
        return;
    }
    let fragments = owner.documentation();

    if !item.description_seeded
        && let Some(first) = fragments.first()
    {
        item.description_lines = vec![(*first).to_string()];
    }
    item.full_description_lines.clear();
    item.validation_notes.clear();
    item.origin_notes.clear();
    item.source_event_notes.clear();
    item.group_keys.clear();
    item.validation_rules.clear();
    item.usage_conditions.clear();
    item.usage_conditions.insert("O".to_string(), None);

    let mut cursor = Cursor::Description;
    for fragment in fragments.iter().skip(1) {
        let tagged = PREFIX_HANDLERS.iter().find_map(|(prefix, handler)| {
            fragment.strip_prefix(prefix).map(|rest| (handler, rest))
        });
        match tagged {
            Some((handler, rest)) => handler(item, rest, &mut cursor),
            None => continue_field(item, fragment, cursor),
        }
    }
}

fn continue_field(item: &mut SchemaItem, fragment: &str, cursor: Cursor) {
    let field = match cursor {
        Cursor::Description => {
            if item.description_seeded {
                item.description_lines.clear();
                item.description_seeded = false;
            }
            &mut item.description_lines
        }
        Cursor::FullDescription => &mut item.full_description_lines,
        Cursor::Validation => &mut item.validation_notes,
        Cursor::Origin => &mut item.origin_notes,
        Cursor::SourceEvent => &mut item.source_event_notes,
    };
    field.push(fragment.to_string());
}

fn handle_validation(item: &mut SchemaItem, rest: &str, cursor: &mut Cursor) {
    item.validation_notes.push(rest.to_string());
    *cursor = Cursor::Validation;
}

fn handle_origin(item: &mut SchemaItem, rest: &str, cursor: &mut Cursor) {
    item.origin_notes.push(rest.to_string());
    *cursor = Cursor::Origin;
}

fn handle_source_event(item: &mut SchemaItem, rest: &str, cursor: &mut Cursor) {
    item.source_event_notes.push(rest.to_string());
    *cursor = Cursor::SourceEvent;
}

fn handle_group_keys(item: &mut SchemaItem, rest: &str, _cursor: &mut Cursor) {
    item.group_keys = rest
        .split(", ")
        .map(|key| key.trim().trim_matches(['"', '\'', '{', '}']).to_string())
        .filter(|key| !key.is_empty())
        .collect();
}

fn handle_rule(item: &mut SchemaItem, rest: &str, _cursor: &mut Cursor) {
    item.validation_rules.push(rest.trim().to_string());
}

fn handle_conditions(item: &mut SchemaItem, rest: &str, _cursor: &mut Cursor) {
    item.usage_conditions.clear();
    if rest.contains(';') {
        for clause in rest.split("; ") {
            match clause.split_once(' ') {
                Some((tag, text)) => {
                    item.usage_conditions
                        .insert(tag.to_string(), Some(text.to_string()));
                }
                None => {
                    item.usage_conditions.insert(clause.to_string(), None);
                }
            }
        }
    } else {
        item.usage_conditions.insert(rest.to_string(), None);
    }
}

fn handle_full_description(item: &mut SchemaItem, rest: &str, cursor: &mut Cursor) {
    item.full_description_lines.push(rest.to_string());
    *cursor = Cursor::FullDescription;
}
