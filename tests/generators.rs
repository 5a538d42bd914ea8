use chrono::{TimeZone, Utc};
use ferrous_faker::{
    BarcodeExtension, BloodExtension, ColorExtension, ContainerBuilder, DateTimeExtension,
    FileExtension, IetfExtension, NumberExtension, UuidExtension, VersionExtension,
};

fn ean_is_valid(code: &str) -> bool {
    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 1 { d * 3 } else { *d })
        .sum();
    sum % 10 == 0
}

#[test]
fn test_barcodes_have_valid_check_digits() {
    let barcode = ContainerBuilder::get_default()
        .extension::<dyn BarcodeExtension>()
        .unwrap();

    for _ in 0..20 {
        let ean13 = barcode.ean13();
        assert_eq!(ean13.len(), 13);
        assert!(ean_is_valid(&ean13), "{ean13}");

        let ean8 = barcode.ean8();
        assert_eq!(ean8.len(), 8);
        assert!(ean_is_valid(&ean8), "{ean8}");

        let isbn13 = barcode.isbn13();
        assert!(isbn13.starts_with("978") || isbn13.starts_with("979"));
        assert!(ean_is_valid(&isbn13), "{isbn13}");

        let isbn10 = barcode.isbn10();
        assert_eq!(isbn10.len(), 10);
        let sum: u32 = isbn10
            .chars()
            .enumerate()
            .map(|(i, c)| (10 - i as u32) * c.to_digit(10).unwrap_or(10))
            .sum();
        assert_eq!(sum % 11, 0, "{isbn10}");
    }
}

#[test]
fn test_blood_group_combines_type_and_factor() {
    let blood = ContainerBuilder::get_default()
        .extension::<dyn BloodExtension>()
        .unwrap();
    let group = blood.blood_group();
    assert!(group.ends_with('+') || group.ends_with('-'));
    assert!(["A", "AB", "B", "O"].contains(&&group[..group.len() - 1]));
}

#[test]
fn test_color_formats() {
    let color = ContainerBuilder::get_default()
        .extension::<dyn ColorExtension>()
        .unwrap();

    let hex = color.hex_color();
    assert!(hex.starts_with('#') && hex.len() == 7);
    assert!(color.rgb_css_color().starts_with("rgb("));
    assert!(color.rgba_css_color().starts_with("rgba("));
    assert_eq!(color.rgb_color().split(',').count(), 3);

    let [h, s, l] = color.hsl_color_as_array();
    assert!(h <= 360 && s <= 100 && l <= 100);
    assert!(!color.color_name().is_empty());
}

#[test]
fn test_date_time_respects_bounds() {
    let date_time = ContainerBuilder::get_default()
        .extension::<dyn DateTimeExtension>()
        .unwrap();

    let from = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(1990, 12, 31, 0, 0, 0).unwrap();
    let picked = date_time.date_time_between(from, until);
    assert!(from <= picked && picked <= until);

    assert!(date_time.unix_time(Some(until)) <= until.timestamp());
    let year: i32 = date_time.date("%Y", Some(from)).parse().unwrap();
    assert!((1970..=1990).contains(&year));
    assert_eq!(date_time.year().len(), 4);
}

#[test]
fn test_file_path_uses_known_extension() {
    let file = ContainerBuilder::get_default()
        .extension::<dyn FileExtension>()
        .unwrap();
    let path = file.file_path();
    assert!(path.starts_with('/'));
    assert!(path.contains('.'));
}

#[test]
fn test_language_tags() {
    let ietf = ContainerBuilder::get_default()
        .extension::<dyn IetfExtension>()
        .unwrap();
    for _ in 0..100 {
        assert!((2..=8).contains(&ietf.language_tag(true).len()));
        assert!((2..=3).contains(&ietf.language_tag(false).len()));
    }
}

#[test]
fn test_numbers() {
    let number = ContainerBuilder::get_default()
        .extension::<dyn NumberExtension>()
        .unwrap();
    assert!((1..=9).contains(&number.random_digit_not_zero()));
    assert_eq!(number.random_number(Some(6), true).to_string().len(), 6);
    assert!((-3..=3).contains(&number.number_between(3, -3)));
}

#[test]
fn test_uuid_shapes() {
    let uuid = ContainerBuilder::get_default()
        .extension::<dyn UuidExtension>()
        .unwrap();
    let v4 = uuid.uuid4();
    assert_eq!(v4.len(), 36);
    assert_eq!(&v4[14..15], "4");
    assert_eq!(&uuid.uuid3()[14..15], "3");
}

#[test]
fn test_semver() {
    let version = ContainerBuilder::get_default()
        .extension::<dyn VersionExtension>()
        .unwrap();
    let plain = version.semver(false, false);
    assert!(!plain.contains('-') && !plain.contains('+'));
    assert!(version.semver(true, false).contains('-'));
    assert!(version.semver(false, true).contains("+git."));
}
