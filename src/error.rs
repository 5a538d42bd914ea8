//! Error types for the extension container.

use std::sync::Arc;

use thiserror::Error;

/// Boxed error returned by factories and deferred constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Extension container errors
///
/// Covers both registration-time failures (raised by
/// [`ContainerBuilder::add`](crate::ContainerBuilder::add)) and
/// resolution-time failures (raised by [`Container::get`](crate::Container::get)).
/// None of them is ever cached: a failed resolution may be retried.
///
/// # Examples
///
/// ```rust
/// use ferrous_faker::{ContainerBuilder, DiError};
///
/// let container = ContainerBuilder::new().build();
/// match container.get("missing") {
///     Err(DiError::UnknownIdentifier(id)) => assert_eq!(id, "missing"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum DiError {
    /// The supplied definition has none of the accepted shapes
    #[error("Invalid definition for \"{id}\": {reason}")]
    InvalidDefinition { id: String, reason: String },
    /// Nothing is registered under the identifier
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// A deferred reference names a type the type table cannot construct
    #[error("Cannot resolve \"{id}\": type \"{name}\" is not constructible")]
    UnresolvableReference { id: String, name: String },
    /// A factory or constructor failed while producing the instance
    #[error("Resolution of \"{id}\" failed: {source}")]
    ResolutionFailed {
        id: String,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
    /// The resolved instance is not of the requested type
    #[error("Type mismatch for \"{id}\": expected {expected}")]
    TypeMismatch { id: String, expected: &'static str },
    /// An identifier was requested again while it was still being resolved
    #[error("Circular resolution: {}", .0.join(" -> "))]
    Circular(Vec<String>),
    /// An assembly file or environment override could not be read
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiError {
    /// Wraps a factory failure with the identifier being resolved.
    pub(crate) fn resolution_failed(id: &str, source: BoxError) -> Self {
        DiError::ResolutionFailed {
            id: id.to_string(),
            source: Arc::from(source),
        }
    }

    /// Identifier the error refers to, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            DiError::InvalidDefinition { id, .. }
            | DiError::UnresolvableReference { id, .. }
            | DiError::ResolutionFailed { id, .. }
            | DiError::TypeMismatch { id, .. } => Some(id.as_str()),
            DiError::UnknownIdentifier(id) => Some(id.as_str()),
            DiError::Circular(path) => path.last().map(String::as_str),
            #[cfg(feature = "config")]
            DiError::Config(_) => None,
        }
    }
}

/// Result type for container operations
pub type DiResult<T> = Result<T, DiError>;
