#![no_main]

use ferrous_faker::{ContainerBuilder, DiError};
use libfuzzer_sys::fuzz_target;

// Strings and objects register under any identifier. Every other JSON shape
// fails with InvalidDefinition and leaves the previous entry untouched.
fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Some(entries) = value.as_object() else {
        return;
    };

    let mut builder = ContainerBuilder::new();
    for (id, definition) in entries {
        let before = builder.contains(id);
        let accepted = definition.is_string() || definition.is_object();
        match builder.add_value(id.as_str(), definition) {
            Ok(_) => {
                assert!(accepted);
                assert!(builder.contains(id));
            }
            Err(DiError::InvalidDefinition { id: rejected, .. }) => {
                assert!(!accepted);
                assert_eq!(&rejected, id);
                assert_eq!(builder.contains(id), before);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    let container = builder.build();
    for id in container.ids() {
        let _ = container.get(id);
    }
});
