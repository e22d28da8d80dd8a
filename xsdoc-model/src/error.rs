//! Error types for layout modeling.

use thiserror::Error;

/// Error type for layout construction.
///
/// Every variant is fatal for the document being built: a layout is either
/// constructed completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Malformed document structure (root annotation, missing names, base-type cycles).
    #[error("schema integrity error at '{context}': {message}")]
    SchemaIntegrity {
        /// Path or name locating the faulty fragment.
        context: String,
        /// Error message.
        message: String,
    },

    /// Declared type absent from both the local and the global type tables.
    #[error("type '{type_name}' not found (referenced at '{path}')")]
    TypeNotFound {
        /// Type name.
        type_name: String,
        /// Path of the referencing item.
        path: String,
    },

    /// A leaf item finished restriction analysis without a size.
    #[error("size of item '{name}' at '{path}' could not be determined")]
    SizeUndetermined {
        /// Item name.
        name: String,
        /// Item path.
        path: String,
    },
}

impl ModelError {
    /// Creates a schema integrity error.
    pub fn integrity(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaIntegrity {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Creates a type not found error.
    pub fn type_not_found(type_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::TypeNotFound {
            type_name: type_name.into(),
            path: path.into(),
        }
    }

    /// Creates a size undetermined error.
    pub fn size_undetermined(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::SizeUndetermined {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Fills in the location of an error raised without one.
    #[must_use]
    pub fn at(self, location: &str) -> Self {
        match self {
            Self::SchemaIntegrity { context, message } if context.is_empty() => {
                Self::integrity(location, message)
            }
            Self::TypeNotFound { type_name, path } if path.is_empty() => {
                Self::type_not_found(type_name, location)
            }
            other => other,
        }
    }
}

/// Result type alias for layout modeling.
pub type Result<T> = std::result::Result<T, ModelError>;
