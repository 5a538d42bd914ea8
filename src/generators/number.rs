use rand::Rng;

use crate::extension::{Extension, NumberExtension};

/// Largest digit count that always fits in a `u64`.
const MAX_DIGITS: u32 = 18;

#[derive(Debug, Default, Clone, Copy)]
pub struct Number;

impl Number {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for Number {}

impl NumberExtension for Number {
    fn number_between(&self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn random_digit(&self) -> u8 {
        rand::thread_rng().gen_range(0..=9)
    }

    fn random_digit_not_zero(&self) -> u8 {
        rand::thread_rng().gen_range(1..=9)
    }

    fn random_digit_not(&self, except: u8) -> u8 {
        if except > 9 {
            return self.random_digit();
        }
        let digit = rand::thread_rng().gen_range(0..=8);
        if digit >= except {
            digit + 1
        } else {
            digit
        }
    }

    fn random_float(&self, decimals: u32, min: f64, max: f64) -> f64 {
        // A NaN bound is ignored; infinite bounds are pulled in to the largest finite value.
        let (min, max) = match (min.is_nan(), max.is_nan()) {
            (true, true) => return 0.0,
            (true, false) => (max, max),
            (false, true) => (min, min),
            (false, false) => (min, max),
        };
        let min = min.clamp(f64::MIN, f64::MAX);
        let max = max.clamp(f64::MIN, f64::MAX);
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return lo;
        }

        let mut rng = rand::thread_rng();
        let value = if (hi - lo).is_finite() {
            rng.gen_range(lo..=hi)
        } else {
            let t: f64 = rng.gen();
            lo * (1.0 - t) + hi * t
        };

        let factor = 10f64.powi(decimals.min(15) as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value.clamp(lo, hi);
        }
        (scaled.round() / factor).clamp(lo, hi)
    }

    fn random_number(&self, digits: Option<u32>, strict: bool) -> u64 {
        let mut rng = rand::thread_rng();
        let digits = digits
            .unwrap_or_else(|| rng.gen_range(1..=9))
            .clamp(1, MAX_DIGITS);
        let max = 10u64.pow(digits) - 1;
        if strict {
            rng.gen_range(10u64.pow(digits - 1)..=max)
        } else {
            rng.gen_range(0..=max)
        }
    }
}
