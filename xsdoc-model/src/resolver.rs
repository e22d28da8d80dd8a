//! Restriction base-type resolution.

use crate::conventions::Conventions;
use crate::error::{ModelError, Result};
use std::collections::HashSet;
use tracing::trace;
use xsdoc_schema::{NodeKind, SchemaNode, TypeTable};

/// Follows a restriction's chain of reusable scalar base types.
///
/// While the restriction's `base` names a reusable scalar type, its definition
/// is looked up in `global_types` and its own restriction replaces the
/// current one. The chain stops at a built-in base, or at a definition
/// without a restriction.
///
/// # Errors
/// Returns `TypeNotFound` when a base type is missing from the table and
/// `SchemaIntegrity` when the chain loops. Both carry an empty location, to
/// be completed by the caller with [`ModelError::at`].
pub fn resolve_terminal_restriction<'a>(
    restriction: &'a SchemaNode,
    global_types: &'a TypeTable,
    conventions: &Conventions,
) -> Result<&'a SchemaNode> {
    let mut current = restriction;
    let mut visited: HashSet<&'a str> = HashSet::new();

    while let Some(base) = current
        .attr("base")
        .filter(|base| conventions.is_reusable_scalar(base))
    {
        if !visited.insert(base) {
            return Err(ModelError::integrity(
                "",
                format!("circular base type chain through '{base}'"),
            ));
        }
        let definition = global_types
            .get(base)
            .ok_or_else(|| ModelError::type_not_found(base, ""))?;
        trace!(base, "following restriction base");
        match definition.child(&NodeKind::Restriction) {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(current)
}
