//! Resolution observers.
//!
//! The container itself never logs. Callers that want visibility into
//! resolution install observers on the builder; every container built
//! afterwards notifies them whenever it has to do real resolution work (a
//! cache miss). Cache hits are not reported.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::definition::DefinitionKind;
use crate::error::DiError;

/// Hooks invoked around resolution of an identifier.
///
/// Calls are synchronous and happen on the resolving thread, so keep
/// implementations cheap.
///
/// # Examples
///
/// ```
/// use ferrous_faker::{ContainerBuilder, DefinitionKind, DiError, ResolutionObserver};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// struct Printer;
///
/// impl ResolutionObserver for Printer {
///     fn resolving(&self, id: &str) {
///         println!("resolving {id}");
///     }
///
///     fn resolved(&self, id: &str, kind: DefinitionKind, elapsed: Duration) {
///         println!("resolved {id} ({kind}) in {elapsed:?}");
///     }
///
///     fn failed(&self, id: &str, error: &DiError) {
///         println!("failed {id}: {error}");
///     }
/// }
///
/// let mut builder = ContainerBuilder::new();
/// builder.add_observer(Arc::new(Printer));
/// let container = builder.build();
/// ```
pub trait ResolutionObserver: Send + Sync {
    /// Called before the definition is run.
    fn resolving(&self, id: &str);

    /// Called after the instance was produced and cached.
    fn resolved(&self, id: &str, kind: DefinitionKind, elapsed: Duration);

    /// Called when resolution fails. The error is also returned to the caller.
    fn failed(&self, id: &str, error: &DiError);
}

/// Observers attached to a builder or container.
#[derive(Clone, Default)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn ResolutionObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    pub(crate) fn resolving(&self, id: &str) {
        for observer in &self.observers {
            observer.resolving(id);
        }
    }

    pub(crate) fn resolved(&self, id: &str, kind: DefinitionKind, elapsed: Duration) {
        for observer in &self.observers {
            observer.resolved(id, kind, elapsed);
        }
    }

    pub(crate) fn failed(&self, id: &str, error: &DiError) {
        for observer in &self.observers {
            observer.failed(id, error);
        }
    }
}

/// Observer that emits `tracing` events.
///
/// Successful resolutions are logged at `DEBUG`, failures at `WARN`, both
/// under the `ferrous_faker` target with structured `id` and `kind` fields.
///
/// # Examples
///
/// ```
/// use ferrous_faker::{ContainerBuilder, TracingObserver};
/// use std::sync::Arc;
///
/// let mut builder = ContainerBuilder::new();
/// builder.add_observer(Arc::new(TracingObserver::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    container: Option<String>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self { container: None }
    }

    /// Tags every event with a container name, for processes running several.
    pub fn named(name: impl Into<String>) -> Self {
        Self { container: Some(name.into()) }
    }

    fn container(&self) -> &str {
        self.container.as_deref().unwrap_or("default")
    }
}

impl ResolutionObserver for TracingObserver {
    fn resolving(&self, id: &str) {
        tracing::trace!(target: "ferrous_faker", container = self.container(), id, "resolving");
    }

    fn resolved(&self, id: &str, kind: DefinitionKind, elapsed: Duration) {
        tracing::debug!(
            target: "ferrous_faker",
            container = self.container(),
            id,
            kind = %kind,
            elapsed_us = elapsed.as_micros() as u64,
            "resolved"
        );
    }

    fn failed(&self, id: &str, error: &DiError) {
        tracing::warn!(
            target: "ferrous_faker",
            container = self.container(),
            id,
            error = %error,
            "resolution failed"
        );
    }
}

/// A single recorded resolution event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    Resolving(String),
    Resolved(String, DefinitionKind),
    Failed(String, String),
}

/// Observer that keeps every event in memory.
///
/// Useful in tests to assert how often, and in which order, identifiers were
/// actually resolved.
///
/// # Examples
///
/// ```
/// use ferrous_faker::{
///     ContainerBuilder, Definition, DefinitionKind, RecordingObserver, ResolutionEvent,
/// };
/// use std::sync::Arc;
///
/// let recorder = Arc::new(RecordingObserver::new());
/// let mut builder = ContainerBuilder::new();
/// builder.add_observer(recorder.clone());
/// builder.add("answer", Definition::factory(|| 42u32)).unwrap();
///
/// let container = builder.build();
/// container.get("answer").unwrap();
/// container.get("answer").unwrap();
///
/// assert_eq!(recorder.events(), vec![
///     ResolutionEvent::Resolving("answer".into()),
///     ResolutionEvent::Resolved("answer".into(), DefinitionKind::Factory),
/// ]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.lock().clone()
    }

    /// Number of successful resolutions recorded for `id`.
    pub fn resolutions_of(&self, id: &str) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, ResolutionEvent::Resolved(i, _) if i == id))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl ResolutionObserver for RecordingObserver {
    fn resolving(&self, id: &str) {
        self.events.lock().push(ResolutionEvent::Resolving(id.to_string()));
    }

    fn resolved(&self, id: &str, kind: DefinitionKind, _elapsed: Duration) {
        self.events.lock().push(ResolutionEvent::Resolved(id.to_string(), kind));
    }

    fn failed(&self, id: &str, error: &DiError) {
        self.events
            .lock()
            .push(ResolutionEvent::Failed(id.to_string(), error.to_string()));
    }
}
