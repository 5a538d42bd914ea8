use ferrous_faker::{
    ContainerBuilder, Definition, DefinitionKind, DiError, IetfExtension, TypeTable,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_instance_resolves_to_same_value() {
    let mut builder = ContainerBuilder::new();
    builder.add_instance("seedValue", 42i64).unwrap();

    let container = builder.build();
    let a = container.get_as::<i64>("seedValue").unwrap();
    let b = container.get_as::<i64>("seedValue").unwrap();

    assert_eq!(*a, 42);
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_factory_is_lazy_and_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .add_factory("greeting", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "hello".to_string()
        })
        .unwrap();

    let container = builder.build();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let first = container.get_as::<String>("greeting").unwrap();
    let second = container.get_as::<String>("greeting").unwrap();
    assert_eq!(first.as_str(), "hello");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_deferred_reference_is_constructed_once() {
    let mut builder = ContainerBuilder::new();
    builder.add("locale", "Ietf").unwrap();

    let container = builder.build();
    assert!(!container.is_resolved("locale"));

    let a = container.get("locale").unwrap();
    let b = container.get("locale").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(container.is_resolved("locale"));
}

#[test]
fn test_overwrite_keeps_only_last_definition() {
    let first_calls = Arc::new(AtomicUsize::new(0));
    let counter = first_calls.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .add_factory("k", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            1u32
        })
        .unwrap()
        .add_instance("k", 2u32)
        .unwrap();

    let container = builder.build();
    assert_eq!(*container.get_as::<u32>("k").unwrap(), 2);
    assert_eq!(first_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_builder_reuse_yields_independent_caches() {
    let mut builder = ContainerBuilder::new();
    builder.add_factory("token", || String::from("abc")).unwrap();

    let one = builder.build();
    let two = builder.build();

    let a = one.get("token").unwrap();
    assert!(one.is_resolved("token"));
    assert!(!two.is_resolved("token"));

    let b = two.get("token").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_cloned_container_shares_cache() {
    let mut builder = ContainerBuilder::new();
    builder.add_factory("token", || String::from("abc")).unwrap();

    let container = builder.build();
    let clone = container.clone();
    let a = container.get("token").unwrap();
    let b = clone.get("token").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_end_to_end_scenario() {
    let mut builder = ContainerBuilder::new();
    builder
        .add("locale", "Ietf")
        .unwrap()
        .add("seedValue", Definition::instance(42i64))
        .unwrap();

    let container = builder.build();

    assert_eq!(*container.get_as::<i64>("seedValue").unwrap(), 42);
    assert_eq!(*container.get_as::<i64>("seedValue").unwrap(), 42);

    let locale = container.get_trait::<dyn IetfExtension>("locale").unwrap();
    let tag = locale.language_tag(true);
    assert!((2..=8).contains(&tag.len()), "unexpected tag {tag}");

    match container.get("missing") {
        Err(DiError::UnknownIdentifier(id)) => assert_eq!(id, "missing"),
        other => panic!("expected UnknownIdentifier, got {other:?}"),
    }
}

#[test]
fn test_custom_type_table() {
    #[derive(Default)]
    struct Seed(u64);

    let mut types = TypeTable::empty();
    types.register("Seed", || Ok(Arc::new(Seed(7)) as ferrous_faker::AnyArc));

    let mut builder = ContainerBuilder::with_types(types);
    builder.add("seed", "Seed").unwrap().add("color", "Color").unwrap();

    let container = builder.build();
    assert_eq!(container.get_as::<Seed>("seed").unwrap().0, 7);
    assert!(matches!(
        container.get("color"),
        Err(DiError::UnresolvableReference { .. })
    ));
}

#[test]
fn test_descriptors_track_resolution() {
    let mut builder = ContainerBuilder::new();
    builder
        .add("b", "Blood")
        .unwrap()
        .add_instance("a", 1u8)
        .unwrap();

    let container = builder.build();
    container.get("b").unwrap();

    let descriptors = container.descriptors();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].id, "a");
    assert_eq!(descriptors[0].kind, DefinitionKind::Instance);
    assert!(!descriptors[0].resolved);
    assert_eq!(descriptors[1].id, "b");
    assert!(descriptors[1].is_deferred());
    assert!(descriptors[1].resolved);
}

#[test]
fn test_ids_are_sorted() {
    let mut builder = ContainerBuilder::new();
    builder
        .add("zeta", "Number")
        .unwrap()
        .add("alpha", "Number")
        .unwrap();
    let container = builder.build();
    assert_eq!(container.ids(), vec!["alpha", "zeta"]);
    assert!(container.has("zeta"));
    assert!(!container.has("beta"));
}
