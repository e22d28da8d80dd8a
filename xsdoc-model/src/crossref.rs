//! Cross-reference resolution in documentation text.
//!
//! Documentation fragments cite other items with `{label}(address)` tokens
//! and code tables with `Tabela NN`. Addresses are either relative to the
//! citing item (`../`, `./`), absolute within the layout (`/`), or literal
//! anchors.

use crate::item::ItemId;
use crate::layout::Layout;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::warn;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}\(([^()]+)\)")
        .unwrap_or_else(|e| panic!("invalid cross-reference regex: {e}"))
});

static TOKEN_OR_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}\(([^()]+)\)|Tabela (\d{2})")
        .unwrap_or_else(|e| panic!("invalid cross-reference regex: {e}"))
});

static SUPERSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\^\^(.*?)\^\^").unwrap_or_else(|e| panic!("invalid superscript regex: {e}"))
});

/// Layout and citing item used to resolve addresses.
#[derive(Debug, Clone, Copy)]
pub struct RefContext<'a> {
    /// Layout the text belongs to.
    pub layout: &'a Layout,
    /// Citing item; relative addresses stay unresolved without it.
    pub item: Option<ItemId>,
}

impl<'a> RefContext<'a> {
    /// Context for text documenting `item`.
    #[must_use]
    pub const fn item(layout: &'a Layout, item: ItemId) -> Self {
        Self {
            layout,
            item: Some(item),
        }
    }

    /// Context for text not attached to an item.
    #[must_use]
    pub const fn layout(layout: &'a Layout) -> Self {
        Self { layout, item: None }
    }
}

/// Rewrites cross-reference tokens into hyperlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRefResolver {
    tables_document: String,
}

impl Default for CrossRefResolver {
    fn default() -> Self {
        Self {
            tables_document: "tabelas.html".to_string(),
        }
    }
}

impl CrossRefResolver {
    /// Creates a resolver linking tables to `tabelas.html`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document holding the code tables.
    #[must_use]
    pub fn tables_document(mut self, href: impl Into<String>) -> Self {
        self.tables_document = href.into();
        self
    }

    /// Escapes markup characters and replaces tokens with hyperlinks.
    ///
    /// Tokens and table citations are rewritten in a single pass, so a
    /// citation used as a token label is not linked twice.
    #[must_use]
    pub fn resolve(&self, text: &str, context: Option<RefContext<'_>>) -> String {
        let escaped = escape_markup(text);
        TOKEN_OR_TABLE
            .replace_all(&escaped, |caps: &Captures<'_>| {
                if let Some(table) = caps.get(3) {
                    let code = table.as_str();
                    return format!(
                        r#"<a href="{}#{code}">Tabela {code}</a>"#,
                        self.tables_document
                    );
                }
                match resolve_address(&caps[2], context) {
                    Some(anchor) => format!(r##"<a href="#{anchor}">{}</a>"##, &caps[1]),
                    None => {
                        warn!(token = &caps[0], "unresolved cross-reference");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Replaces tokens with their bare labels, for plain-text output.
    #[must_use]
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        TOKEN.replace_all(text, "$1")
    }
}

/// Resolves one token address to an anchor.
fn resolve_address(address: &str, context: Option<RefContext<'_>>) -> Option<String> {
    if address.starts_with("../") {
        let context = context?;
        let layout = context.layout;
        let mut current = context.item?;
        if !layout.item(current)?.is_aggregating() {
            current = layout.item(current)?.parent?;
        }
        let mut rest = address;
        while let Some(stripped) = rest.strip_prefix("../") {
            current = layout.item(current)?.parent?;
            rest = stripped;
        }
        Some(format!("{}_{rest}", layout.item(current)?.path))
    } else if let Some(rest) = address.strip_prefix('/') {
        let layout = context?.layout;
        Some(format!("{}_{rest}", layout.short_code()))
    } else if let Some(rest) = address.strip_prefix("./") {
        let context = context?;
        let item = context.layout.item(context.item?)?;
        let base = if item.is_aggregating() {
            item
        } else {
            context.layout.item(item.parent?)?
        };
        Some(format!("{}_{rest}", base.path))
    } else {
        Some(address.to_string())
    }
}

/// Escapes `"`, `<` and `>`.
#[must_use]
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['"', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Rewrites `^^x^^` markers into `<sup>x</sup>`.
#[must_use]
pub fn encode_superscript(text: &str) -> Cow<'_, str> {
    SUPERSCRIPT.replace_all(text, "<sup>$1</sup>")
}
