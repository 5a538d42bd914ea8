use crate::extension::{BloodExtension, Extension};
use crate::helper::random_element;

const TYPES: &[&str] = &["A", "AB", "B", "O"];
const RH_FACTORS: &[&str] = &["+", "-"];

#[derive(Debug, Default, Clone, Copy)]
pub struct Blood;

impl Blood {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for Blood {}

impl BloodExtension for Blood {
    fn blood_type(&self) -> &'static str {
        random_element(TYPES)
    }

    fn blood_rh(&self) -> &'static str {
        random_element(RH_FACTORS)
    }

    fn blood_group(&self) -> String {
        format!("{}{}", self.blood_type(), self.blood_rh())
    }
}
