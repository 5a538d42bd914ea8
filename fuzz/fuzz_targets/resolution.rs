#![no_main]

use ferrous_faker::{ContainerBuilder, DiError};
use libfuzzer_sys::fuzz_target;

// Interprets the input as a sequence of lookups against the default
// assembly plus a few fixed entries. Whatever the order, a resolved
// identifier keeps its instance and unknown identifiers keep failing.
fuzz_target!(|data: &[u8]| {
    let mut builder = ContainerBuilder::with_defaults();
    builder
        .add_instance("seedValue", 42u64)
        .and_then(|b| b.add("broken", "NoSuchType"))
        .expect("fixed entries are valid");

    let container = builder.build();
    let ids = container.ids().into_iter().map(String::from).collect::<Vec<_>>();
    let mut first = std::collections::HashMap::new();

    for byte in data {
        let index = *byte as usize;
        if index >= ids.len() {
            let probe = format!("unknown{index}");
            assert!(matches!(container.get(&probe), Err(DiError::UnknownIdentifier(_))));
            continue;
        }

        let id = &ids[index];
        match container.get(id) {
            Ok(value) => {
                let cached = first.entry(id.clone()).or_insert_with(|| value.clone());
                assert!(std::sync::Arc::ptr_eq(cached, &value));
            }
            Err(DiError::UnresolvableReference { .. }) => assert_eq!(id, "broken"),
            Err(other) => panic!("unexpected error for {id}: {other}"),
        }
    }
});
