//! Capability interfaces for the built-in generators.
//!
//! Each capability is a plain trait. The container only knows the identifier
//! a capability is registered under ([`Capability::ID`]); what the trait can
//! do is between the caller and the implementation.

use chrono::{DateTime, Utc};

/// Base trait shared by every generator capability.
pub trait Extension: Send + Sync {
    /// Name of the concrete type behind the capability.
    fn implementation(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Links a capability trait object to the identifier it is registered under.
///
/// Implemented for `dyn BarcodeExtension`, `dyn ColorExtension`, and the other
/// built-in capabilities; third-party capabilities can implement it for their
/// own trait objects.
///
/// # Examples
///
/// ```
/// use ferrous_faker::{Capability, ContainerBuilder, Definition, Extension};
/// use std::sync::Arc;
///
/// trait PlanetExtension: Extension {
///     fn planet(&self) -> &'static str;
/// }
///
/// impl Capability for dyn PlanetExtension {
///     const ID: &'static str = "PlanetExtension";
/// }
///
/// struct Planets;
/// impl Extension for Planets {}
/// impl PlanetExtension for Planets {
///     fn planet(&self) -> &'static str { "Neptune" }
/// }
///
/// let mut builder = ContainerBuilder::new();
/// builder
///     .add("PlanetExtension", Definition::instance(Arc::new(Planets) as Arc<dyn PlanetExtension>))
///     .unwrap();
///
/// let planets = builder.build().extension::<dyn PlanetExtension>().unwrap();
/// assert_eq!(planets.planet(), "Neptune");
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Identifier used by the default assembly.
    const ID: &'static str;
}

/// Barcode numbers with valid check digits.
pub trait BarcodeExtension: Extension {
    /// 13-digit EAN.
    fn ean13(&self) -> String;

    /// 8-digit EAN.
    fn ean8(&self) -> String;

    /// ISBN-10; the check character may be `X`.
    fn isbn10(&self) -> String;

    /// ISBN-13 with a `978` or `979` prefix.
    fn isbn13(&self) -> String;
}

/// ABO blood groups and Rh factors.
pub trait BloodExtension: Extension {
    /// One of `A`, `AB`, `B`, `O`.
    fn blood_type(&self) -> &'static str;

    /// `+` or `-`.
    fn blood_rh(&self) -> &'static str;

    /// Type and Rh factor together, e.g. `AB+`.
    fn blood_group(&self) -> String;
}

pub trait ColorExtension: Extension {
    /// `#rrggbb`.
    fn hex_color(&self) -> String;

    /// Hex color drawn from the web-safe short form, e.g. `#ff0044`.
    fn safe_hex_color(&self) -> String;

    fn rgb_color_as_array(&self) -> [u8; 3];

    /// Comma separated channels, e.g. `0,255,122`.
    fn rgb_color(&self) -> String;

    /// `rgb(r,g,b)`.
    fn rgb_css_color(&self) -> String;

    /// `rgba(r,g,b,a)` with alpha in `0..=1`.
    fn rgba_css_color(&self) -> String;

    fn safe_color_name(&self) -> &'static str;

    fn color_name(&self) -> &'static str;

    /// Comma separated hue, saturation, lightness, e.g. `340,50,20`.
    fn hsl_color(&self) -> String;

    fn hsl_color_as_array(&self) -> [u16; 3];
}

/// Dates and times. `until` defaults to now.
pub trait DateTimeExtension: Extension {
    /// Instant between the Unix epoch and `until`.
    fn date_time(&self, until: Option<DateTime<Utc>>) -> DateTime<Utc>;

    /// Instant between `from` and `until`; the bounds may be given in either order.
    fn date_time_between(&self, from: DateTime<Utc>, until: DateTime<Utc>) -> DateTime<Utc>;

    fn unix_time(&self, until: Option<DateTime<Utc>>) -> i64;

    /// Date formatted with a `strftime` pattern, e.g. `%Y-%m-%d`.
    fn date(&self, format: &str, until: Option<DateTime<Utc>>) -> String;

    /// Time formatted with a `strftime` pattern, e.g. `%H:%M:%S`.
    fn time(&self, format: &str, until: Option<DateTime<Utc>>) -> String;

    fn am_pm(&self) -> &'static str;

    /// Two digits, `01` to `31`.
    fn day_of_month(&self) -> String;

    fn day_of_week(&self) -> &'static str;

    /// Two digits, `01` to `12`.
    fn month(&self) -> String;

    fn month_name(&self) -> &'static str;

    fn year(&self) -> String;

    /// Roman numeral, `I` to `XXI`.
    fn century(&self) -> &'static str;

    /// IANA zone name.
    fn timezone(&self) -> &'static str;
}

pub trait FileExtension: Extension {
    fn mime_type(&self) -> &'static str;

    /// Extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Absolute path ending in a known extension.
    fn file_path(&self) -> String;
}

/// IETF BCP 47 language tags.
pub trait IetfExtension: Extension {
    /// A language tag such as `en-US`. With `allow_subtag` false only bare
    /// language codes (`en`, `haw`) are returned.
    fn language_tag(&self, allow_subtag: bool) -> &'static str;
}

pub trait NumberExtension: Extension {
    /// Integer in `min..=max`; the bounds may be given in either order.
    fn number_between(&self, min: i64, max: i64) -> i64;

    /// `0..=9`.
    fn random_digit(&self) -> u8;

    /// `1..=9`.
    fn random_digit_not_zero(&self) -> u8;

    /// Digit other than `except`.
    fn random_digit_not(&self, except: u8) -> u8;

    /// Float in `min..=max` rounded to `decimals` places.
    fn random_float(&self, decimals: u32, min: f64, max: f64) -> f64;

    /// Number with up to `digits` digits (exactly `digits` when `strict`).
    /// `None` picks a digit count between 1 and 9.
    fn random_number(&self, digits: Option<u32>, strict: bool) -> u64;
}

pub trait UuidExtension: Extension {
    /// Name-based (version 3) UUID over random input.
    fn uuid3(&self) -> String;

    /// Random (version 4) UUID.
    fn uuid4(&self) -> String;
}

pub trait VersionExtension: Extension {
    /// Semantic version, optionally with a pre-release and/or build suffix.
    fn semver(&self, pre_release: bool, build: bool) -> String;
}

macro_rules! capabilities {
    ($($capability:ident),* $(,)?) => {
        $(
            impl Capability for dyn $capability {
                const ID: &'static str = stringify!($capability);
            }
        )*
    };
}

capabilities!(
    BarcodeExtension,
    BloodExtension,
    ColorExtension,
    DateTimeExtension,
    FileExtension,
    IetfExtension,
    NumberExtension,
    UuidExtension,
    VersionExtension,
);
