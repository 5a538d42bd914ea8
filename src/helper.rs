//! Random selection helpers shared by the generators.

use rand::seq::SliceRandom;
use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Uniformly picks one element, or `T::default()` for an empty slice.
///
/// ```
/// use ferrous_faker::helper::random_element;
///
/// let pick = random_element(&["a", "b", "c"]);
/// assert!(["a", "b", "c"].contains(&pick));
/// assert_eq!(random_element::<&str>(&[]), "");
/// ```
pub fn random_element<T: Copy + Default>(items: &[T]) -> T {
    items
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// `count` random decimal digits. The first digit may be zero.
pub fn random_digits(count: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..=9)).collect()
}

/// `count` random lowercase ASCII letters.
pub fn random_letters(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

/// `count` random lowercase hex characters.
pub fn random_hex(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
        .collect()
}
