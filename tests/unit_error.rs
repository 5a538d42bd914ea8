/// Error reporting tests: every failure names the identifier involved and
/// none of them is cached.

use ferrous_faker::{AnyArc, BoxError, ContainerBuilder, DiError, DiResult, TypeTable};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_error_display_unknown_identifier() {
    let error = DiError::UnknownIdentifier("missing".into());
    assert_eq!(error.to_string(), "Unknown identifier: missing");
    assert_eq!(error.identifier(), Some("missing"));
}

#[test]
fn test_error_display_invalid_definition() {
    let error = DiError::InvalidDefinition {
        id: "seedValue".into(),
        reason: "expected a type name or an object, got a number".into(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid definition for \"seedValue\": expected a type name or an object, got a number"
    );
}

#[test]
fn test_error_display_unresolvable_reference() {
    let error = DiError::UnresolvableReference {
        id: "x".into(),
        name: "DoesNotExist".into(),
    };
    assert_eq!(
        error.to_string(),
        "Cannot resolve \"x\": type \"DoesNotExist\" is not constructible"
    );
}

#[test]
fn test_error_display_type_mismatch() {
    let error = DiError::TypeMismatch { id: "n".into(), expected: "alloc::string::String" };
    assert_eq!(error.to_string(), "Type mismatch for \"n\": expected alloc::string::String");
}

#[test]
fn test_error_is_clone_and_keeps_source() {
    let mut builder = ContainerBuilder::new();
    builder
        .add_try_factory("db", || -> Result<u8, std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "backend offline"))
        })
        .unwrap();

    let error = builder.build().get("db").unwrap_err();
    let copy = error.clone();

    assert_eq!(copy.to_string(), "Resolution of \"db\" failed: backend offline");
    assert_eq!(copy.source().unwrap().to_string(), "backend offline");
}

#[test]
fn test_empty_deferred_reference_fails_at_resolution() {
    let mut builder = ContainerBuilder::new();
    builder.add("k", "").unwrap();
    assert!(builder.contains("k"));

    match builder.build().get("k") {
        Err(DiError::UnresolvableReference { id, name }) => {
            assert_eq!(id, "k");
            assert_eq!(name, "");
        }
        other => panic!("expected UnresolvableReference, got {other:?}"),
    }
}

#[test]
fn test_failed_deferred_constructor_is_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let mut types = TypeTable::empty();
    types.register("Flaky", move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err("constructor not ready".into())
        } else {
            Ok(Arc::new(5u16) as AnyArc)
        }
    });

    let mut builder = ContainerBuilder::with_types(types);
    builder.add("flaky", "Flaky").unwrap();
    let container = builder.build();

    let error = container.get("flaky").unwrap_err();
    assert!(matches!(error, DiError::ResolutionFailed { .. }));
    assert!(error.to_string().contains("constructor not ready"));
    assert!(!container.is_resolved("flaky"));

    assert_eq!(*container.get_as::<u16>("flaky").unwrap(), 5);
    assert!(container.is_resolved("flaky"));
    container.get("flaky").unwrap();
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_panicking_deferred_constructor_is_not_cached() {
    let mut types = TypeTable::empty();
    types.register("Broken", || -> Result<AnyArc, BoxError> { panic!("bad constructor") });

    let mut builder = ContainerBuilder::with_types(types);
    builder.add("broken", "Broken").unwrap();
    let container = builder.build();

    for _ in 0..2 {
        let error = container.get("broken").unwrap_err();
        assert!(error.to_string().contains("bad constructor"));
    }
    assert!(!container.is_resolved("broken"));
}

#[test]
fn test_failed_factory_is_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .add_try_factory("flaky", move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("first attempt fails")
            } else {
                Ok(99u32)
            }
        })
        .unwrap();

    let container = builder.build();
    assert!(matches!(
        container.get("flaky"),
        Err(DiError::ResolutionFailed { .. })
    ));
    assert!(!container.is_resolved("flaky"));

    assert_eq!(*container.get_as::<u32>("flaky").unwrap(), 99);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);

    // Cached from now on.
    container.get("flaky").unwrap();
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_panicking_factory_becomes_resolution_failed() {
    let mut builder = ContainerBuilder::new();
    builder
        .add_factory("boom", || -> u8 { panic!("generator exploded") })
        .unwrap();

    let container = builder.build();
    let error = container.get("boom").unwrap_err();
    assert!(matches!(error, DiError::ResolutionFailed { .. }));
    assert!(error.to_string().contains("generator exploded"));

    // The container stays usable after the panic.
    assert!(container.get("boom").is_err());
}

#[test]
fn test_di_result_alias() {
    fn lookup(found: bool) -> DiResult<u8> {
        if found {
            Ok(1)
        } else {
            Err(DiError::UnknownIdentifier("nope".into()))
        }
    }
    assert_eq!(lookup(true).unwrap(), 1);
    assert!(lookup(false).is_err());
}
