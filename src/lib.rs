//! # ferrous-faker
//!
//! Pluggable fake-data generators wired together by a small, lazy,
//! memoizing extension container.
//!
//! ## Features
//!
//! - **Explicit definitions**: every identifier maps to a ready instance, a
//!   factory, or a deferred type reference, fixed at registration time
//! - **Lazy and memoized**: nothing is built until first requested, and then
//!   only once, even under concurrent first access
//! - **Reflection-free**: deferred references resolve through an explicit
//!   [`TypeTable`] of named constructors
//! - **Swappable capabilities**: the default assembly is plain data, so any
//!   generator can be replaced before the container is built
//! - **Observable**: opt-in [`ResolutionObserver`] hooks, with a ready-made
//!   `tracing` observer
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_faker::{ColorExtension, ContainerBuilder, IetfExtension};
//!
//! let container = ContainerBuilder::get_default();
//!
//! let ietf = container.extension::<dyn IetfExtension>().unwrap();
//! let tag = ietf.language_tag(true);
//! assert!((2..=8).contains(&tag.len()));
//!
//! let color = container.get_trait::<dyn ColorExtension>("ColorExtension").unwrap();
//! assert_eq!(color.hex_color().len(), 7);
//! ```
//!
//! ## Custom Assemblies
//!
//! ```rust
//! use ferrous_faker::{ContainerBuilder, DiError, IetfExtension};
//! use std::sync::Arc;
//!
//! let mut builder = ContainerBuilder::new();
//! builder
//!     .add("locale", "Ietf").unwrap()
//!     .add_instance("seedValue", 42u64).unwrap();
//!
//! let container = builder.build();
//!
//! let first = container.get("seedValue").unwrap();
//! let second = container.get("seedValue").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! let locale = container.get_trait::<dyn IetfExtension>("locale").unwrap();
//! assert!(!locale.language_tag(false).contains('-'));
//!
//! assert!(matches!(container.get("missing"), Err(DiError::UnknownIdentifier(_))));
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): [`AssemblyConfig`] loading from JSON or YAML, plus
//!   environment overrides and `ContainerBuilder::add_value`

pub mod builder;
pub mod container;
pub mod definition;
pub mod descriptors;
pub mod error;
pub mod extension;
pub mod generators;
pub mod helper;
pub mod observer;
pub mod types;

#[cfg(feature = "config")]
pub mod config;

mod internal;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use definition::{AnyArc, Definition, DefinitionKind, FactoryFn};
pub use descriptors::DefinitionDescriptor;
pub use error::{BoxError, DiError, DiResult};
pub use extension::{
    BarcodeExtension, BloodExtension, Capability, ColorExtension, DateTimeExtension, Extension,
    FileExtension, IetfExtension, NumberExtension, UuidExtension, VersionExtension,
};
pub use observer::{RecordingObserver, ResolutionEvent, ResolutionObserver, TracingObserver};
pub use types::{Constructor, TypeTable};

#[cfg(feature = "config")]
pub use config::AssemblyConfig;
