//! Definition types: the registered recipe behind each identifier.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// Type-erased shared instance, as stored in the container cache.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Zero-argument factory producing a type-erased instance.
pub type FactoryFn = Arc<dyn Fn() -> Result<AnyArc, BoxError> + Send + Sync>;

/// How an identifier is turned into a live instance.
///
/// The kind is fixed when the definition is created, so the container never
/// has to guess whether a value is a ready instance, a callable, or a type
/// reference.
///
/// # Examples
///
/// ```rust
/// use ferrous_faker::{Definition, DefinitionKind};
///
/// assert_eq!(Definition::instance(42u32).kind(), DefinitionKind::Instance);
/// assert_eq!(Definition::factory(|| "fresh".to_string()).kind(), DefinitionKind::Factory);
/// assert_eq!(Definition::from("Color").kind(), DefinitionKind::Deferred);
/// ```
#[derive(Clone)]
pub enum Definition {
    /// Already constructed value, handed out as-is
    Instance(AnyArc),
    /// Callable invoked once on first resolution
    Factory(FactoryFn),
    /// Name of a type constructed through the container's type table
    Deferred(String),
}

/// Discriminant of a [`Definition`], for diagnostics and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Instance,
    Factory,
    Deferred,
}

impl Definition {
    /// Wraps a ready value.
    ///
    /// To register a capability trait object, pass the `Arc<dyn Trait>`
    /// itself; it is stored so that
    /// [`Container::get_trait`](crate::Container::get_trait) can narrow it back.
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Definition::Instance(Arc::new(value))
    }

    /// Wraps a shared value without re-boxing it, preserving its identity.
    pub fn shared(value: AnyArc) -> Self {
        Definition::Instance(value)
    }

    /// Wraps an infallible zero-argument factory.
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Definition::Factory(Arc::new(move || Ok(Arc::new(factory()) as AnyArc)))
    }

    /// Wraps a fallible zero-argument factory. An `Err` surfaces as
    /// [`DiError::ResolutionFailed`](crate::DiError::ResolutionFailed) and is not cached.
    pub fn try_factory<T, E, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Definition::Factory(Arc::new(move || {
            factory()
                .map(|value| Arc::new(value) as AnyArc)
                .map_err(Into::into)
        }))
    }

    /// References a type registered in the [`TypeTable`](crate::TypeTable) by name.
    pub fn deferred(name: impl Into<String>) -> Self {
        Definition::Deferred(name.into())
    }

    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Instance(_) => DefinitionKind::Instance,
            Definition::Factory(_) => DefinitionKind::Factory,
            Definition::Deferred(_) => DefinitionKind::Deferred,
        }
    }

    /// Type name for deferred references.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Definition::Deferred(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Instance(_) => f.write_str("Instance(..)"),
            Definition::Factory(_) => f.write_str("Factory(..)"),
            Definition::Deferred(name) => f.debug_tuple("Deferred").field(name).finish(),
        }
    }
}

impl From<&str> for Definition {
    fn from(name: &str) -> Self {
        Definition::Deferred(name.to_string())
    }
}

impl From<String> for Definition {
    fn from(name: String) -> Self {
        Definition::Deferred(name)
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DefinitionKind::Instance => "instance",
            DefinitionKind::Factory => "factory",
            DefinitionKind::Deferred => "deferred",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_become_deferred_references() {
        let def: Definition = "Barcode".into();
        assert_eq!(def.kind(), DefinitionKind::Deferred);
        assert_eq!(def.type_name(), Some("Barcode"));
    }

    #[test]
    fn any_string_is_a_deferred_reference() {
        for name in ["", "   ", "Date Time"] {
            let def = Definition::from(name);
            assert_eq!(def.kind(), DefinitionKind::Deferred);
            assert_eq!(def.type_name(), Some(name));
        }
    }

    #[test]
    fn try_factory_maps_errors() {
        let def = Definition::try_factory(|| -> Result<u8, String> { Err("nope".into()) });
        let Definition::Factory(f) = def else { panic!("expected factory") };
        assert_eq!(f().unwrap_err().to_string(), "nope");
    }
}
