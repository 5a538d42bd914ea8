//! Registration side of the container.
//!
//! A [`ContainerBuilder`] collects definitions keyed by identifier and
//! produces [`Container`] snapshots. Typed definitions carry their shape in
//! [`Definition`]; loosely typed values are shape-checked by `add_value`.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::container::Container;
use crate::definition::Definition;
use crate::descriptors::DefinitionDescriptor;
use crate::error::{BoxError, DiError, DiResult};
use crate::extension::{
    BarcodeExtension, BloodExtension, Capability, ColorExtension, DateTimeExtension,
    FileExtension, IetfExtension, NumberExtension, UuidExtension, VersionExtension,
};
use crate::observer::{Observers, ResolutionObserver};
use crate::types::TypeTable;

/// Collects definitions and builds containers from them.
///
/// Registering an identifier twice keeps only the later definition.
/// `build` takes a snapshot, so the builder stays usable and every container
/// it produces has its own cache.
///
/// # Examples
///
/// ```rust
/// use ferrous_faker::{ContainerBuilder, IetfExtension};
///
/// let mut builder = ContainerBuilder::new();
/// builder
///     .add("locale", "Ietf")?
///     .add_instance("seedValue", 42i64)?;
///
/// let container = builder.build();
/// assert_eq!(*container.get_as::<i64>("seedValue")?, 42);
///
/// let locale = container.get_trait::<dyn IetfExtension>("locale")?;
/// assert!((2..=8).contains(&locale.language_tag(true).len()));
/// # Ok::<(), ferrous_faker::DiError>(())
/// ```
#[derive(Clone)]
pub struct ContainerBuilder {
    definitions: HashMap<String, Definition>,
    types: TypeTable,
    observers: Observers,
}

impl ContainerBuilder {
    /// Creates an empty builder that can resolve every built-in type name.
    pub fn new() -> Self {
        Self::with_types(TypeTable::with_defaults())
    }

    /// Creates an empty builder backed by a caller-supplied type table.
    pub fn with_types(types: TypeTable) -> Self {
        Self {
            definitions: HashMap::new(),
            types,
            observers: Observers::new(),
        }
    }

    /// Creates a builder preloaded with [`default_extensions`](Self::default_extensions).
    ///
    /// Any default can still be replaced before `build`:
    ///
    /// ```rust
    /// use ferrous_faker::{ContainerBuilder, Definition, Extension, IetfExtension};
    /// use std::sync::Arc;
    ///
    /// struct English;
    /// impl Extension for English {}
    /// impl IetfExtension for English {
    ///     fn language_tag(&self, _allow_subtag: bool) -> &'static str { "en" }
    /// }
    ///
    /// let mut builder = ContainerBuilder::with_defaults();
    /// builder
    ///     .add("IetfExtension", Definition::instance(Arc::new(English) as Arc<dyn IetfExtension>))
    ///     .unwrap();
    ///
    /// let ietf = builder.build().extension::<dyn IetfExtension>().unwrap();
    /// assert_eq!(ietf.language_tag(true), "en");
    /// ```
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        for (id, type_name) in Self::default_extensions() {
            builder
                .definitions
                .insert(id.to_string(), Definition::deferred(type_name));
        }
        builder
    }

    /// The default assembly: capability identifier to implementation type name.
    ///
    /// Returns a fresh map on every call.
    pub fn default_extensions() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            (<dyn BarcodeExtension as Capability>::ID, "Barcode"),
            (<dyn BloodExtension as Capability>::ID, "Blood"),
            (<dyn ColorExtension as Capability>::ID, "Color"),
            (<dyn DateTimeExtension as Capability>::ID, "DateTime"),
            (<dyn FileExtension as Capability>::ID, "File"),
            (<dyn IetfExtension as Capability>::ID, "Ietf"),
            (<dyn NumberExtension as Capability>::ID, "Number"),
            (<dyn UuidExtension as Capability>::ID, "Uuid"),
            (<dyn VersionExtension as Capability>::ID, "Version"),
        ])
    }

    /// Builds a fresh container holding the default assembly.
    ///
    /// Every call returns an independent container with an empty cache.
    pub fn get_default() -> Container {
        Self::with_defaults().build()
    }

    /// Registers `definition` under `id`, replacing any earlier definition.
    ///
    /// Anything convertible into a [`Definition`] is accepted; a bare string
    /// is a deferred type reference.
    ///
    /// Every identifier and every type name is accepted here. A name the
    /// type table does not know fails later, at `get`, with
    /// [`DiError::UnresolvableReference`]. The `Result` lets registrations
    /// chain with `?` alongside [`add_value`](Self::add_value), which can fail.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        definition: impl Into<Definition>,
    ) -> DiResult<&mut Self> {
        self.definitions.insert(id.into(), definition.into());
        Ok(self)
    }

    /// Registers a ready value.
    pub fn add_instance<T: Any + Send + Sync>(
        &mut self,
        id: impl Into<String>,
        value: T,
    ) -> DiResult<&mut Self> {
        self.add(id, Definition::instance(value))
    }

    /// Registers a factory run once, on first resolution.
    pub fn add_factory<T, F>(&mut self, id: impl Into<String>, factory: F) -> DiResult<&mut Self>
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.add(id, Definition::factory(factory))
    }

    /// Registers a fallible factory. Failures are reported on every attempt and never cached.
    pub fn add_try_factory<T, E, F>(
        &mut self,
        id: impl Into<String>,
        factory: F,
    ) -> DiResult<&mut Self>
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        self.add(id, Definition::try_factory(factory))
    }

    /// Registers a reference to a type in the builder's [`TypeTable`].
    pub fn add_deferred(
        &mut self,
        id: impl Into<String>,
        type_name: impl Into<String>,
    ) -> DiResult<&mut Self> {
        self.add(id, Definition::deferred(type_name))
    }

    /// Registers a loosely typed value, checking its shape at runtime.
    ///
    /// A string becomes a deferred type reference and an object is stored as
    /// an instance (`serde_json::Value`). Numbers, booleans, arrays and null
    /// are rejected.
    ///
    /// ```rust
    /// use ferrous_faker::{ContainerBuilder, DiError};
    /// use serde_json::json;
    ///
    /// let mut builder = ContainerBuilder::new();
    /// builder.add_value("ColorExtension", &json!("Color")).unwrap();
    /// builder.add_value("settings", &json!({ "locale": "en-GB" })).unwrap();
    ///
    /// let err = builder.add_value("seedValue", &json!(42)).unwrap_err();
    /// assert!(matches!(err, DiError::InvalidDefinition { .. }));
    /// assert!(!builder.contains("seedValue"));
    /// ```
    #[cfg(feature = "config")]
    pub fn add_value(
        &mut self,
        id: impl Into<String>,
        value: &serde_json::Value,
    ) -> DiResult<&mut Self> {
        use serde_json::Value;

        let id = id.into();
        let definition = match value {
            Value::String(name) => Definition::deferred(name.as_str()),
            Value::Object(_) => Definition::instance(value.clone()),
            other => {
                return Err(DiError::InvalidDefinition {
                    id,
                    reason: format!(
                        "expected a type name or an object, got {}",
                        json_kind(other)
                    ),
                })
            }
        };
        self.add(id, definition)
    }

    /// Builds a builder from a parsed assembly file.
    ///
    /// # Errors
    ///
    /// The first entry that fails [`add_value`](Self::add_value) aborts the
    /// whole assembly.
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::AssemblyConfig, types: TypeTable) -> DiResult<Self> {
        let mut builder = Self::with_types(types);
        for (id, value) in &config.definitions {
            builder.add_value(id.as_str(), value)?;
        }
        Ok(builder)
    }

    /// Attaches an observer to every container built afterwards.
    pub fn add_observer(&mut self, observer: Arc<dyn ResolutionObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    /// Type table used to resolve deferred references.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    /// Snapshots the current definitions into a new container.
    pub fn build(&self) -> Container {
        Container::new(
            self.definitions.clone(),
            self.types.clone(),
            self.observers.clone(),
        )
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Descriptors for every registered definition, sorted by identifier.
    pub fn descriptors(&self) -> Vec<DefinitionDescriptor> {
        let mut descriptors: Vec<_> = self
            .definitions
            .iter()
            .map(|(id, definition)| DefinitionDescriptor {
                id: id.clone(),
                kind: definition.kind(),
                type_name: definition.type_name().map(str::to_string),
                resolved: false,
            })
            .collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.definitions.keys().collect();
        ids.sort();
        f.debug_struct("ContainerBuilder")
            .field("definitions", &ids)
            .field("types", &self.types)
            .finish()
    }
}

#[cfg(feature = "config")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionKind;

    #[test]
    fn empty_type_name_fails_at_resolution() {
        let mut builder = ContainerBuilder::new();
        builder.add("k", "").unwrap().add("spaced", "Date Time").unwrap();

        let container = builder.build();
        for id in ["k", "spaced"] {
            match container.get(id) {
                Err(DiError::UnresolvableReference { id: failed, .. }) => assert_eq!(failed, id),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn any_identifier_is_accepted() {
        let mut builder = ContainerBuilder::new();
        builder.add("", "Color").unwrap().add("  ", "Blood").unwrap();
        assert_eq!(builder.len(), 2);
        assert!(builder.build().get("").is_ok());
    }

    #[test]
    fn last_write_wins() {
        let mut builder = ContainerBuilder::new();
        builder
            .add_instance("k", 1u8)
            .unwrap()
            .add_instance("k", 2u8)
            .unwrap();
        assert_eq!(builder.len(), 1);
        assert_eq!(*builder.build().get_as::<u8>("k").unwrap(), 2);
    }

    #[test]
    fn default_table_is_fresh_and_complete() {
        let mut first = ContainerBuilder::default_extensions();
        first.clear();
        let second = ContainerBuilder::default_extensions();
        assert_eq!(second.len(), 9);
        assert_eq!(second["UuidExtension"], "Uuid");
    }

    #[test]
    fn with_defaults_registers_deferred_references() {
        let builder = ContainerBuilder::with_defaults();
        assert!(builder
            .descriptors()
            .iter()
            .all(|d| d.kind == DefinitionKind::Deferred));
    }

    #[cfg(feature = "config")]
    #[test]
    fn add_value_rejects_non_object_values() {
        use serde_json::json;

        let mut builder = ContainerBuilder::new();
        for value in [json!(42), json!(true), json!(null), json!(["Color"])] {
            match builder.add_value("bad", &value) {
                Err(DiError::InvalidDefinition { id, .. }) => assert_eq!(id, "bad"),
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(builder.is_empty());
    }

    #[cfg(feature = "config")]
    #[test]
    fn rejected_value_keeps_previous_entry() {
        use serde_json::json;

        let mut builder = ContainerBuilder::new();
        builder.add_value("x", &json!("Color")).unwrap();
        assert!(builder.add_value("x", &json!(7)).is_err());
        assert_eq!(builder.descriptors()[0].type_name.as_deref(), Some("Color"));
    }
}
