//! Rendering configuration.

use xsdoc_model::CrossRefResolver;

/// Options controlling the generated views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    tables_document: String,
    summary: bool,
    complete: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables_document: "tabelas.html".to_string(),
            summary: true,
            complete: true,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration rendering both views.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document `Tabela NN` references link to.
    #[must_use]
    pub fn tables_document(mut self, href: impl Into<String>) -> Self {
        self.tables_document = href.into();
        self
    }

    /// Enables or disables the summary view.
    #[must_use]
    pub const fn summary(mut self, enabled: bool) -> Self {
        self.summary = enabled;
        self
    }

    /// Enables or disables the complete view.
    #[must_use]
    pub const fn complete(mut self, enabled: bool) -> Self {
        self.complete = enabled;
        self
    }

    /// Returns true if the summary view is rendered.
    #[must_use]
    pub const fn includes_summary(&self) -> bool {
        self.summary
    }

    /// Returns true if the complete view is rendered.
    #[must_use]
    pub const fn includes_complete(&self) -> bool {
        self.complete
    }

    /// Cross-reference resolver matching this configuration.
    #[must_use]
    pub fn resolver(&self) -> CrossRefResolver {
        CrossRefResolver::new().tables_document(self.tables_document.as_str())
    }
}
