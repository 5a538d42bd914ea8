//! Built-in generator implementations.
//!
//! Each generator is a stateless struct implementing one capability trait
//! from [`crate::extension`]. They are registered in the default
//! [`TypeTable`] under their type names.

mod barcode;
mod blood;
mod color;
mod date_time;
mod file;
mod ietf;
mod number;
mod uuid;
mod version;

use std::sync::Arc;

pub use barcode::Barcode;
pub use blood::Blood;
pub use color::Color;
pub use date_time::DateTime;
pub use file::File;
pub use ietf::Ietf;
pub use number::Number;
pub use self::uuid::Uuid;
pub use version::Version;

use crate::extension::{
    BarcodeExtension, BloodExtension, ColorExtension, DateTimeExtension, FileExtension,
    IetfExtension, NumberExtension, UuidExtension, VersionExtension,
};
use crate::types::TypeTable;

/// Registers every built-in generator under its type name.
pub(crate) fn register_defaults(table: &mut TypeTable) {
    table
        .register_as::<dyn BarcodeExtension, _>("Barcode", || {
            Arc::new(Barcode::new()) as Arc<dyn BarcodeExtension>
        })
        .register_as::<dyn BloodExtension, _>("Blood", || {
            Arc::new(Blood::new()) as Arc<dyn BloodExtension>
        })
        .register_as::<dyn ColorExtension, _>("Color", || {
            Arc::new(Color::new()) as Arc<dyn ColorExtension>
        })
        .register_as::<dyn DateTimeExtension, _>("DateTime", || {
            Arc::new(DateTime::new()) as Arc<dyn DateTimeExtension>
        })
        .register_as::<dyn FileExtension, _>("File", || {
            Arc::new(File::new()) as Arc<dyn FileExtension>
        })
        .register_as::<dyn IetfExtension, _>("Ietf", || {
            Arc::new(Ietf::new()) as Arc<dyn IetfExtension>
        })
        .register_as::<dyn NumberExtension, _>("Number", || {
            Arc::new(Number::new()) as Arc<dyn NumberExtension>
        })
        .register_as::<dyn UuidExtension, _>("Uuid", || {
            Arc::new(Uuid::new()) as Arc<dyn UuidExtension>
        })
        .register_as::<dyn VersionExtension, _>("Version", || {
            Arc::new(Version::new()) as Arc<dyn VersionExtension>
        });
}
