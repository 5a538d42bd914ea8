use crate::extension::{BarcodeExtension, Extension};
use crate::helper::{random_digits, random_element};

const ISBN_PREFIXES: &[[u8; 3]] = &[[9, 7, 8], [9, 7, 9]];

/// EAN and ISBN numbers with valid check digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct Barcode;

impl Barcode {
    pub fn new() -> Self {
        Self
    }

    fn ean(length: usize) -> String {
        let mut digits = random_digits(length - 1);
        digits.push(ean_checksum(&digits));
        to_string(&digits)
    }
}

/// EAN check digit: weights alternate 3 and 1 starting from the rightmost digit.
pub(crate) fn ean_checksum(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// ISBN-10 check character over the first nine digits.
pub(crate) fn isbn10_checksum(digits: &[u8]) -> char {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (10 - i as u32))
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        n => char::from(b'0' + n as u8),
    }
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

impl Extension for Barcode {}

impl BarcodeExtension for Barcode {
    fn ean13(&self) -> String {
        Self::ean(13)
    }

    fn ean8(&self) -> String {
        Self::ean(8)
    }

    fn isbn10(&self) -> String {
        let digits = random_digits(9);
        let mut code = to_string(&digits);
        code.push(isbn10_checksum(&digits));
        code
    }

    fn isbn13(&self) -> String {
        let mut digits = random_element(ISBN_PREFIXES).to_vec();
        digits.extend(random_digits(9));
        digits.push(ean_checksum(&digits));
        to_string(&digits)
    }
}
