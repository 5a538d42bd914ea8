//! Resolution container.
//!
//! A [`Container`] is an immutable snapshot of a builder's definitions plus a
//! cache that fills up as identifiers are resolved. Each identifier owns its
//! own `OnceCell`, so first-time resolutions of different identifiers never
//! wait on each other while two threads racing on the same identifier run its
//! definition only once.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;

use crate::definition::{AnyArc, Definition, DefinitionKind};
use crate::descriptors::DefinitionDescriptor;
use crate::error::{DiError, DiResult};
use crate::extension::Capability;
use crate::internal::{catch_construction, ResolutionGuard};
use crate::observer::Observers;
use crate::types::TypeTable;

/// Lazy, memoizing resolver for registered extensions.
///
/// Cloning a container is cheap and yields a handle to the same cache.
///
/// # Examples
///
/// ```
/// use ferrous_faker::{ContainerBuilder, Definition};
/// use std::sync::Arc;
///
/// let mut builder = ContainerBuilder::new();
/// builder
///     .add("seedValue", Definition::instance(42u32)).unwrap()
///     .add("greeting", Definition::factory(|| "hello".to_string())).unwrap();
///
/// let container = builder.build();
/// let a = container.get_as::<String>("greeting").unwrap();
/// let b = container.get_as::<String>("greeting").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(*container.get_as::<u32>("seedValue").unwrap(), 42);
/// ```
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    entries: HashMap<String, Entry>,
    types: TypeTable,
    observers: Observers,
}

struct Entry {
    definition: Definition,
    cell: OnceCell<AnyArc>,
}

impl Container {
    pub(crate) fn new(
        definitions: HashMap<String, Definition>,
        types: TypeTable,
        observers: Observers,
    ) -> Self {
        let entries = definitions
            .into_iter()
            .map(|(id, definition)| {
                (id, Entry { definition, cell: OnceCell::new() })
            })
            .collect();

        Self {
            inner: Arc::new(ContainerInner { entries, types, observers }),
        }
    }

    /// Resolves `id` to its live instance.
    ///
    /// The first successful resolution is cached and every later call returns
    /// the same `Arc`. Failures are never cached, so a later call runs the
    /// definition again.
    ///
    /// # Errors
    ///
    /// - [`DiError::UnknownIdentifier`] if nothing is registered under `id`
    /// - [`DiError::UnresolvableReference`] if a deferred type name is not in the type table
    /// - [`DiError::ResolutionFailed`] if a factory or constructor returned an error or panicked
    /// - [`DiError::Circular`] if `id` is requested again while it is being resolved
    pub fn get(&self, id: &str) -> DiResult<AnyArc> {
        let entry = self
            .inner
            .entries
            .get(id)
            .ok_or_else(|| DiError::UnknownIdentifier(id.to_string()))?;

        if let Some(value) = entry.cell.get() {
            return Ok(value.clone());
        }

        self.resolve(id, entry)
    }

    /// Resolves `id` and downcasts it to a concrete type.
    pub fn get_as<T: Any + Send + Sync>(&self, id: &str) -> DiResult<Arc<T>> {
        self.get(id)?.downcast::<T>().map_err(|_| DiError::TypeMismatch {
            id: id.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// Resolves `id` and narrows it to a trait object registered as `Arc<C>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferrous_faker::{ContainerBuilder, Definition};
    /// use std::sync::Arc;
    ///
    /// trait Clock: Send + Sync {
    ///     fn now(&self) -> u64;
    /// }
    ///
    /// struct Frozen;
    /// impl Clock for Frozen {
    ///     fn now(&self) -> u64 { 1_700_000_000 }
    /// }
    ///
    /// let mut builder = ContainerBuilder::new();
    /// builder.add("clock", Definition::instance(Arc::new(Frozen) as Arc<dyn Clock>)).unwrap();
    ///
    /// let clock = builder.build().get_trait::<dyn Clock>("clock").unwrap();
    /// assert_eq!(clock.now(), 1_700_000_000);
    /// ```
    pub fn get_trait<C>(&self, id: &str) -> DiResult<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.get(id)?
            .downcast::<Arc<C>>()
            .map(|boxed| (*boxed).clone())
            .map_err(|_| DiError::TypeMismatch {
                id: id.to_string(),
                expected: type_name::<C>(),
            })
    }

    /// Resolves a capability under its canonical identifier.
    ///
    /// ```
    /// use ferrous_faker::{ContainerBuilder, BloodExtension};
    ///
    /// let container = ContainerBuilder::get_default();
    /// let blood = container.extension::<dyn BloodExtension>().unwrap();
    /// assert!(["A", "AB", "B", "O"].contains(&blood.blood_type()));
    /// ```
    pub fn extension<C>(&self) -> DiResult<Arc<C>>
    where
        C: ?Sized + Capability,
    {
        self.get_trait::<C>(C::ID)
    }

    /// Whether a definition is registered under `id`.
    pub fn has(&self, id: &str) -> bool {
        self.inner.entries.contains_key(id)
    }

    /// Whether `id` has already been resolved and cached.
    pub fn is_resolved(&self, id: &str) -> bool {
        self.inner
            .entries
            .get(id)
            .is_some_and(|entry| entry.cell.get().is_some())
    }

    /// Number of cached instances.
    pub fn resolved_count(&self) -> usize {
        self.inner
            .entries
            .values()
            .filter(|entry| entry.cell.get().is_some())
            .count()
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.inner.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Descriptors for every definition, sorted by identifier.
    pub fn descriptors(&self) -> Vec<DefinitionDescriptor> {
        let mut descriptors: Vec<_> = self
            .inner
            .entries
            .iter()
            .map(|(id, entry)| DefinitionDescriptor {
                id: id.clone(),
                kind: entry.definition.kind(),
                type_name: entry.definition.type_name().map(str::to_string),
                resolved: entry.cell.get().is_some(),
            })
            .collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    /// Slow path: runs the definition under the identifier's cell.
    fn resolve(&self, id: &str, entry: &Entry) -> DiResult<AnyArc> {
        let observers = &self.inner.observers;

        // Entered before the cell so a re-entrant request errors out instead of blocking on it.
        let _guard = match ResolutionGuard::enter(self.owner_token(), id) {
            Ok(guard) => guard,
            Err(error) => {
                observers.failed(id, &error);
                return Err(error);
            }
        };
        let mut elapsed: Option<Duration> = None;

        let result = entry.cell.get_or_try_init(|| {
            observers.resolving(id);
            let start = observers.has_observers().then(Instant::now);
            let value = self.construct(id, &entry.definition);
            elapsed = Some(start.map(|s| s.elapsed()).unwrap_or_default());
            value
        });

        match result {
            Ok(value) => {
                if let Some(elapsed) = elapsed {
                    observers.resolved(id, entry.definition.kind(), elapsed);
                }
                Ok(value.clone())
            }
            Err(error) => {
                observers.failed(id, &error);
                Err(error)
            }
        }
    }

    fn construct(&self, id: &str, definition: &Definition) -> DiResult<AnyArc> {
        match definition {
            Definition::Instance(value) => Ok(value.clone()),
            Definition::Factory(factory) => {
                catch_construction(|| factory()).map_err(|e| DiError::resolution_failed(id, e))
            }
            Definition::Deferred(name) => {
                let ctor = self.inner.types.constructor(name).ok_or_else(|| {
                    DiError::UnresolvableReference {
                        id: id.to_string(),
                        name: name.clone(),
                    }
                })?;
                catch_construction(|| ctor()).map_err(|e| DiError::resolution_failed(id, e))
            }
        }
    }

    fn owner_token(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("definitions", &self.len())
            .field("resolved", &self.resolved_count())
            .finish()
    }
}
