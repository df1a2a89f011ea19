//! Validation of externally supplied initial values.

use crate::mode::Mode;

/// Returns `true` if `value` may seed a field in `mode`.
///
/// - `Integer`: any finite integral value
/// - `Whole`: a finite integral value `>= 0`
/// - `Decimal`: a finite value whose shortest decimal text has at most
///   `places` fractional digits
///
/// # Examples
///
/// ```
/// use number_core::{Mode, is_valid_initial_value};
///
/// assert!(is_valid_initial_value(27.0, Mode::Whole));
/// assert!(!is_valid_initial_value(-3.0, Mode::Whole));
/// assert!(!is_valid_initial_value(1.234, Mode::Decimal { places: 2 }));
/// assert!(is_valid_initial_value(1.23, Mode::Decimal { places: 2 }));
/// ```
pub fn is_valid_initial_value(value: f64, mode: Mode) -> bool {
    match mode {
        Mode::Integer => is_integral(value),
        Mode::Whole => is_integral(value) && value >= 0.0,
        Mode::Decimal { places } => {
            value.is_finite() && fraction_digits(value) <= places as usize
        }
    }
}

/// Text a valid initial value seeds the field with.
///
/// This is the shortest round-trip representation, never in exponent form.
/// Negative zero is shown as `0`.
pub fn seed_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn fraction_digits(value: f64) -> usize {
    seed_text(value)
        .split_once('.')
        .map_or(0, |(_, frac)| frac.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEC2: Mode = Mode::Decimal { places: 2 };

    #[test]
    fn integer_accepts_any_sign() {
        assert!(is_valid_initial_value(0.0, Mode::Integer));
        assert!(is_valid_initial_value(-12.0, Mode::Integer));
        assert!(is_valid_initial_value(1e21, Mode::Integer));
        assert!(!is_valid_initial_value(1.5, Mode::Integer));
    }

    #[test]
    fn non_finite_values_are_never_valid() {
        for mode in [Mode::Integer, Mode::Whole, DEC2] {
            assert!(!is_valid_initial_value(f64::NAN, mode));
            assert!(!is_valid_initial_value(f64::INFINITY, mode));
            assert!(!is_valid_initial_value(f64::NEG_INFINITY, mode));
        }
    }

    #[test]
    fn whole_requires_non_negative() {
        assert!(is_valid_initial_value(27.0, Mode::Whole));
        assert!(is_valid_initial_value(-0.0, Mode::Whole));
        assert!(!is_valid_initial_value(-3.0, Mode::Whole));
        assert!(!is_valid_initial_value(2.5, Mode::Whole));
    }

    #[test]
    fn decimal_counts_shortest_fraction_digits() {
        assert!(is_valid_initial_value(1.23, DEC2));
        assert!(is_valid_initial_value(-1.2, DEC2));
        assert!(is_valid_initial_value(5.0, DEC2));
        assert!(!is_valid_initial_value(1.234, DEC2));
        assert!(!is_valid_initial_value(0.1 + 0.2, DEC2));
        assert!(!is_valid_initial_value(1e-7, DEC2));
        assert!(is_valid_initial_value(7.0, Mode::Decimal { places: 0 }));
        assert!(!is_valid_initial_value(7.5, Mode::Decimal { places: 0 }));
    }

    #[test]
    fn seed_text_is_plain_decimal() {
        assert_eq!(seed_text(27.0), "27");
        assert_eq!(seed_text(-0.0), "0");
        assert_eq!(seed_text(1.23), "1.23");
        assert_eq!(seed_text(-4.5), "-4.5");
        assert_eq!(seed_text(1e21), "1000000000000000000000");
    }
}
