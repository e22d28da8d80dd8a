//! Display strings for layout items.
//!
//! [`ItemDisplay`] formats the columns shown by the summary and complete
//! views, either as HTML fragments or as plain text.

use crate::crossref::{CrossRefResolver, RefContext, encode_superscript};
use crate::item::{ItemId, SchemaItem, TypeLabel};
use crate::layout::Layout;

/// Output markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Markup {
    /// HTML fragments with resolved hyperlinks.
    Html,
    /// Plain text.
    Text,
}

/// Formats an anchor link.
#[must_use]
pub fn link(anchor: &str, label: &str) -> String {
    format!(r##"<a href="#{anchor}">{label}</a>"##)
}

/// Display accessors for one item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDisplay<'a> {
    layout: &'a Layout,
    item: &'a SchemaItem,
    resolver: &'a CrossRefResolver,
    markup: Markup,
}

impl<'a> ItemDisplay<'a> {
    /// Creates the display of item `id` of `layout`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to `layout`.
    #[must_use]
    pub fn new(
        layout: &'a Layout,
        id: ItemId,
        resolver: &'a CrossRefResolver,
        markup: Markup,
    ) -> Self {
        Self {
            layout,
            item: &layout[id],
            resolver,
            markup,
        }
    }

    /// The displayed item.
    #[must_use]
    pub const fn item(&self) -> &'a SchemaItem {
        self.item
    }

    /// `N` when both bounds are equal, `min-max` otherwise.
    #[must_use]
    pub fn occurrence(&self) -> String {
        self.item.occurrence.to_string()
    }

    /// Documented size; `-` for groups and dates.
    #[must_use]
    pub fn size(&self) -> String {
        if self.item.is_aggregating() || self.item.type_label == TypeLabel::Date {
            return "-".to_string();
        }
        self.item
            .size
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string)
    }

    /// Decimal places, or `-`.
    #[must_use]
    pub fn decimals(&self) -> &'a str {
        if self.item.is_aggregating() {
            return "-";
        }
        self.item.decimal_places.as_deref().unwrap_or("-")
    }

    /// First description line without trailing periods.
    #[must_use]
    pub fn summary_description(&self) -> String {
        let line = self.item.summary_description().trim_end_matches('.');
        match self.markup {
            Markup::Html => self
                .resolver
                .resolve(line, Some(RefContext::layout(self.layout))),
            Markup::Text => self.resolver.strip(line).into_owned(),
        }
    }

    /// Group key fields, linked to their rows in HTML; `-` when none.
    ///
    /// Duplicates link to the keys of their reference target.
    #[must_use]
    pub fn group_keys(&self) -> String {
        if self.item.group_keys.is_empty() {
            return "-".to_string();
        }
        match self.markup {
            Markup::Html => {
                let base = self
                    .layout
                    .reference(self.item.id)
                    .map_or(self.item.path.as_str(), |r| r.path.as_str());
                self.item
                    .group_keys
                    .iter()
                    .map(|key| link(&format!("{base}_{key}"), key))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
            Markup::Text => self.item.group_keys.join(", "),
        }
    }

    /// Usage conditions, one per line.
    #[must_use]
    pub fn usage_conditions(&self) -> String {
        let (separator, context) = match self.markup {
            Markup::Html => (";<br />\n", Some(self.context())),
            Markup::Text => ("\n", None),
        };
        self.item
            .usage_conditions
            .iter()
            .map(|(tag, text)| match text {
                None => tag.clone(),
                Some(text) => format!("{tag} {}", self.render_line(text, context)),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Parent name, linked to its summary row in HTML.
    ///
    /// Empty in HTML and `-` in text for the root.
    #[must_use]
    pub fn parent_anchor(&self) -> String {
        match (self.layout.parent(self.item.id), self.markup) {
            (Some(parent), Markup::Html) => link(&format!("r_{}", parent.path), &parent.name),
            (Some(parent), Markup::Text) => parent.name.clone(),
            (None, Markup::Html) => String::new(),
            (None, Markup::Text) => "-".to_string(),
        }
    }

    /// Full description block.
    ///
    /// Description lines, then valid values, origin, source event, validation
    /// and rules, each section only when non-empty.
    #[must_use]
    pub fn description(&self) -> String {
        match self.markup {
            Markup::Html => self.description_html(),
            Markup::Text => self.description_text(),
        }
    }

    fn context(&self) -> RefContext<'a> {
        RefContext::item(self.layout, self.item.id)
    }

    /// Resolves tokens in HTML, strips them in text.
    fn render_line(&self, line: &str, context: Option<RefContext<'_>>) -> String {
        match self.markup {
            Markup::Html => self.resolver.resolve(line, context),
            Markup::Text => self.resolver.strip(line).into_owned(),
        }
    }

    fn resolved_lines(&self, lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| self.resolver.resolve(line, Some(self.context())))
            .collect::<Vec<_>>()
            .join("<br />\n")
    }

    fn description_html(&self) -> String {
        let item = self.item;
        let mut out = self.resolved_lines(item.detailed_description());

        if !item.valid_values.is_empty() {
            out.push_str("<br />\n<strong>Valores válidos:</strong>");
            let mut heading_break = "";
            for (value, description) in &item.valid_values {
                match description.as_deref() {
                    Some("") => {
                        out.push_str(heading_break);
                        out.push_str("<br />\n");
                        out.push_str(value);
                    }
                    Some(text) => {
                        let text = self.resolver.resolve(text, Some(self.context()));
                        out.push_str(&format!(
                            "<br />\n<strong>{value}</strong> - {}",
                            encode_superscript(&text)
                        ));
                        heading_break = "<br />\n";
                    }
                    None => out.push_str(&format!(" {value},")),
                }
            }
            truncate_trailing(&mut out, ',');
        }

        for (label, lines) in [
            ("Origem:", &item.origin_notes),
            ("Evento de origem:", &item.source_event_notes),
            ("Validação:", &item.validation_notes),
        ] {
            if !lines.is_empty() {
                out.push_str(&format!("<br />\n<strong>{label}</strong> "));
                out.push_str(&self.resolved_lines(lines));
            }
        }

        if !item.validation_rules.is_empty() {
            let plural = if item.validation_rules.len() > 1 { "s" } else { "" };
            out.push_str(&format!(
                "<br />\n<strong>Regra{plural} de validação:</strong>"
            ));
            for rule in &item.validation_rules {
                out.push_str("<br />\n");
                out.push_str(&link(rule, rule));
            }
        }

        out
    }

    fn description_text(&self) -> String {
        let item = self.item;
        let stripped = |lines: &[String]| {
            lines
                .iter()
                .map(|line| self.resolver.strip(line).into_owned())
                .collect::<Vec<_>>()
                .join("\n")
        };
        let mut out = stripped(item.detailed_description());

        if !item.valid_values.is_empty() {
            out.push_str("\nValores válidos:\n");
            for (value, description) in &item.valid_values {
                match description.as_deref() {
                    Some("") => {
                        out.push_str(value);
                        out.push('\n');
                    }
                    Some(text) => {
                        out.push_str(&format!("{value} - {}\n", self.resolver.strip(text)));
                    }
                    None => out.push_str(&format!(" {value},")),
                }
            }
            truncate_trailing(&mut out, ',');
            truncate_trailing(&mut out, '\n');
        }

        for (label, lines) in [
            ("Origem:", &item.origin_notes),
            ("Evento de origem:", &item.source_event_notes),
            ("Validação:", &item.validation_notes),
        ] {
            if !lines.is_empty() {
                out.push_str(&format!("\n{label} "));
                out.push_str(&stripped(lines.as_slice()));
            }
        }

        if !item.validation_rules.is_empty() {
            out.push_str("\nRegras de validação:\n");
            out.push_str(&item.validation_rules.join("\n"));
        }

        out
    }
}

/// Removes every trailing occurrence of `c`.
fn truncate_trailing(text: &mut String, c: char) {
    let len = text.trim_end_matches(c).len();
    text.truncate(len);
}
