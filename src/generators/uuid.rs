use ::uuid::Uuid as UuidValue;

use crate::extension::{Extension, UuidExtension};
use crate::helper::random_hex;

#[derive(Debug, Default, Clone, Copy)]
pub struct Uuid;

impl Uuid {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for Uuid {}

impl UuidExtension for Uuid {
    fn uuid3(&self) -> String {
        let name = random_hex(32);
        UuidValue::new_v3(&UuidValue::NAMESPACE_OID, name.as_bytes()).to_string()
    }

    fn uuid4(&self) -> String {
        UuidValue::new_v4().to_string()
    }
}
