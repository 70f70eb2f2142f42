//! Locale-aware number formatting
//!
//! The host environment supplies the locale conventions through a
//! [`NumberFormatter`]; [`LocaleFormatter`] is the built-in table-driven one.

use serde::{Deserialize, Serialize};

/// Minimum fraction digits applied by [`localize`].
pub const MIN_FRACTION_DIGITS: usize = 3;

/// Largest fraction precision a formatter accepts.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Formats numbers following some locale's conventions.
pub trait NumberFormatter {
    /// Format `num` with at least `min_fraction_digits` digits after the
    /// decimal separator.
    fn format(&self, num: f64, min_fraction_digits: usize) -> String;
}

impl<F> NumberFormatter for F
where
    F: Fn(f64, usize) -> String,
{
    fn format(&self, num: f64, min_fraction_digits: usize) -> String {
        self(num, min_fraction_digits)
    }
}

/// Format `num` with at least three fraction digits using `formatter`.
#[must_use]
pub fn localize<F: NumberFormatter + ?Sized>(num: f64, formatter: &F) -> String {
    formatter.format(num, MIN_FRACTION_DIGITS)
}

/// Separator table for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleFormatter {
    pub decimal_separator: String,
    pub group_separator: String,
    /// Floor on fraction digits, on top of what the caller asks for.
    pub min_fraction_digits: usize,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::en_us()
    }
}

impl LocaleFormatter {
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            min_fraction_digits: 0,
        }
    }

    /// Continental style: `1.234,500`.
    #[must_use]
    pub fn de_de() -> Self {
        Self {
            decimal_separator: ",".to_string(),
            group_separator: ".".to_string(),
            min_fraction_digits: 0,
        }
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * self.group_separator.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

/// Round to `precision` fraction digits, ties away from zero.
///
/// `format!` alone rounds exact ties to even (`0.0625` -> `0.062`).
fn round_half_away(num: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = num * factor;
    // Beyond 2^52 every f64 is already an integer at this scale
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return num;
    }
    scaled.round() / factor
}

impl NumberFormatter for LocaleFormatter {
    fn format(&self, num: f64, min_fraction_digits: usize) -> String {
        if num.is_nan() {
            return "NaN".to_string();
        }
        if num.is_infinite() {
            return if num.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }

        let precision = min_fraction_digits
            .max(self.min_fraction_digits)
            .min(MAX_FRACTION_DIGITS);
        let fixed = format!("{:.*}", precision, round_half_away(num.abs(), precision));
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        // -0.000 prints without a sign
        let negative =
            num.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}
