//! Type naming conventions.
//!
//! The layouts identify the role of a declared type by its name prefix:
//! expanded composite types (`T_`), reusable scalar types (`TS_`) and
//! built-in types (`xs:`). The period type is special-cased with a fixed
//! list of sizes.

/// Name-prefix conventions used while building a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    expanded_prefix: String,
    scalar_prefix: String,
    builtin_prefixes: Vec<String>,
    code_prefix: String,
    period_type: String,
    period_sizes: Vec<u32>,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            expanded_prefix: "T_".to_string(),
            scalar_prefix: "TS_".to_string(),
            builtin_prefixes: vec!["xs:".to_string(), "xsd:".to_string()],
            code_prefix: "S-".to_string(),
            period_type: "TS_perApur".to_string(),
            period_sizes: vec![4, 7],
        }
    }
}

impl Conventions {
    /// Creates the default eSocial conventions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix of composite types expanded in place.
    #[must_use]
    pub fn expanded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.expanded_prefix = prefix.into();
        self
    }

    /// Sets the prefix of reusable scalar types.
    #[must_use]
    pub fn scalar_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scalar_prefix = prefix.into();
        self
    }

    /// Adds a namespace prefix recognized as a built-in type.
    #[must_use]
    pub fn builtin_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.builtin_prefixes.push(prefix.into());
        self
    }

    /// Sets the prefix every layout code must start with.
    #[must_use]
    pub fn code_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.code_prefix = prefix.into();
        self
    }

    /// Sets the period type and the sizes it is documented with.
    #[must_use]
    pub fn period_type(mut self, name: impl Into<String>, sizes: Vec<u32>) -> Self {
        self.period_type = name.into();
        self.period_sizes = sizes;
        self
    }

    /// Returns true for composite types expanded into child items.
    #[must_use]
    pub fn is_expanded(&self, type_name: &str) -> bool {
        type_name.starts_with(&self.expanded_prefix)
    }

    /// Returns true for reusable scalar types defined in the type tables.
    #[must_use]
    pub fn is_reusable_scalar(&self, type_name: &str) -> bool {
        type_name.starts_with(&self.scalar_prefix)
    }

    /// Returns true for built-in types such as `xs:string`.
    #[must_use]
    pub fn is_builtin(&self, type_name: &str) -> bool {
        self.builtin_prefixes
            .iter()
            .any(|prefix| type_name.starts_with(prefix.as_str()))
    }

    /// Returns true when a declaration of this type is a leaf item.
    #[must_use]
    pub fn is_scalar(&self, type_name: &str) -> bool {
        self.is_reusable_scalar(type_name) || self.is_builtin(type_name)
    }

    /// Returns true when the type definition must be looked up.
    #[must_use]
    pub fn requires_lookup(&self, type_name: &str) -> bool {
        self.is_expanded(type_name) || self.is_reusable_scalar(type_name)
    }

    /// Returns true if the documentation heading carries a layout code.
    #[must_use]
    pub fn is_layout_code(&self, code: &str) -> bool {
        code.starts_with(&self.code_prefix)
    }

    /// Sizes forced onto the period type, or `None` for any other type.
    #[must_use]
    pub fn period_sizes(&self, type_name: &str) -> Option<&[u32]> {
        (type_name == self.period_type).then_some(self.period_sizes.as_slice())
    }
}
