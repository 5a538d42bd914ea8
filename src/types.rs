//! Name-to-constructor table backing deferred references.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::definition::AnyArc;
use crate::error::BoxError;

/// Shared zero-argument constructor stored in a [`TypeTable`].
pub type Constructor = Arc<dyn Fn() -> Result<AnyArc, BoxError> + Send + Sync>;

/// Explicit table of constructible types, keyed by type name.
///
/// A [`Definition::Deferred`](crate::Definition::Deferred) holds only a
/// name; the container looks that name up here on first resolution and runs
/// the constructor with no arguments. Names that are not in the table cannot
/// be resolved.
///
/// # Examples
///
/// ```rust
/// use ferrous_faker::{ContainerBuilder, TypeTable};
///
/// #[derive(Default)]
/// struct Seed(u64);
///
/// let mut types = TypeTable::empty();
/// types.register_default::<Seed>("Seed");
///
/// let mut builder = ContainerBuilder::with_types(types);
/// builder.add("seed", "Seed").unwrap();
///
/// let container = builder.build();
/// assert_eq!(container.get_as::<Seed>("seed").unwrap().0, 0);
/// ```
#[derive(Clone, Default)]
pub struct TypeTable {
    ctors: BTreeMap<String, Constructor>,
}

impl TypeTable {
    /// Creates a table with no registered types.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table holding every built-in generator.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        crate::generators::register_defaults(&mut table);
        table
    }

    /// Registers a raw constructor. A later registration for the same name replaces it.
    pub fn register<F>(&mut self, name: impl Into<String>, ctor: F) -> &mut Self
    where
        F: Fn() -> Result<AnyArc, BoxError> + Send + Sync + 'static,
    {
        self.ctors.insert(name.into(), Arc::new(ctor));
        self
    }

    /// Registers a concrete type built through its `Default` impl.
    pub fn register_default<T>(&mut self, name: impl Into<String>) -> &mut Self
    where
        T: Default + Any + Send + Sync,
    {
        self.register(name, || Ok(Arc::new(T::default()) as AnyArc))
    }

    /// Registers a constructor for a capability trait object.
    ///
    /// The resulting instance is stored as `Arc<C>` so it can be narrowed with
    /// [`Container::get_trait`](crate::Container::get_trait).
    pub fn register_as<C, F>(&mut self, name: impl Into<String>, ctor: F) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<C> + Send + Sync + 'static,
    {
        self.register(name, move || Ok(Arc::new(ctor()) as AnyArc))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Constructor registered for `name`.
    pub fn constructor(&self, name: &str) -> Option<&Constructor> {
        self.ctors.get(name)
    }

    /// Runs the constructor for `name`, or returns `None` if it is not registered.
    pub fn construct(&self, name: &str) -> Option<Result<AnyArc, BoxError>> {
        self.constructor(name).map(|ctor| ctor())
    }
}

impl fmt::Debug for TypeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTable")
            .field("names", &self.ctors.keys().collect::<Vec<_>>())
            .finish()
    }
}
