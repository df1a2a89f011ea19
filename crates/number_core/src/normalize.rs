//! Keystroke-level normalization.
//!
//! Raw field text is rewritten by a single left-to-right scan. The scanner
//! tracks whether a sign, integer digits or a decimal point have been emitted,
//! and how many fractional digits are kept; everything the active [`Mode`]
//! does not allow is dropped.

use crate::mode::Mode;
use crate::parse::parse_leading_float;

/// Result of normalizing one edit.
///
/// When `display` is non-empty and numeric, `numeric` is what it parses to.
/// An empty or partial entry (`""`, `"-"`, `"-."`) carries `None`.
///
/// A digit run too long for `f64` is the one exception: the digits stay in
/// `display` but `numeric` is `None`, never an infinity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedValue {
    pub display: String,
    pub numeric: Option<f64>,
}

impl NormalizedValue {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Normalize raw field text for `mode`.
///
/// # Examples
///
/// ```
/// use number_core::{Mode, normalize};
///
/// let v = normalize("-007", Mode::Integer);
/// assert_eq!((v.display.as_str(), v.numeric), ("-7", Some(-7.0)));
///
/// let v = normalize("-5", Mode::Whole);
/// assert_eq!((v.display.as_str(), v.numeric), ("", None));
///
/// let v = normalize("3.14159", Mode::Decimal { places: 2 });
/// assert_eq!((v.display.as_str(), v.numeric), ("3.14", Some(3.14)));
/// ```
pub fn normalize(text: &str, mode: Mode) -> NormalizedValue {
    if text.trim().is_empty() {
        return NormalizedValue::empty();
    }

    let display = match mode {
        Mode::Integer => sanitize_integer(text),
        Mode::Whole => sanitize_whole(text),
        Mode::Decimal { places } => sanitize_decimal(text, places),
    };
    let numeric = parse_leading_float(&display);

    log::trace!(
        target: "number_core.normalize",
        "{mode}: {text:?} -> {display:?} ({numeric:?})"
    );

    NormalizedValue { display, numeric }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Start,
    Sign,
    Integer,
    Fraction,
}

struct Scanner {
    out: String,
    state: ScanState,
    frac_digits: u32,
}

impl Scanner {
    fn with_capacity(len: usize) -> Self {
        Self {
            out: String::with_capacity(len),
            state: ScanState::Start,
            frac_digits: 0,
        }
    }

    /// A sign is only kept as the very first emitted character.
    fn sign(&mut self) {
        if self.state == ScanState::Start {
            self.out.push('-');
            self.state = ScanState::Sign;
        }
    }

    /// Integer-part digit; a lone leading `0` is replaced by the next digit.
    fn int_digit(&mut self, d: char) {
        if self.state == ScanState::Integer && self.int_part_is_zero() {
            self.out.pop();
        }
        self.out.push(d);
        self.state = ScanState::Integer;
    }

    fn int_part_is_zero(&self) -> bool {
        matches!(self.out.as_str(), "0" | "-0")
    }

    /// Start the fraction. `.` with nothing before it becomes `0.`; after a
    /// bare sign it stays `-.`.
    fn point(&mut self) {
        if self.state == ScanState::Start {
            self.out.push('0');
        }
        self.out.push('.');
        self.state = ScanState::Fraction;
    }

    /// Fraction digits past `places` are truncated.
    fn frac_digit(&mut self, d: char, places: u32) {
        if self.frac_digits < places {
            self.out.push(d);
            self.frac_digits += 1;
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn sanitize_integer(text: &str) -> String {
    let mut scan = Scanner::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0'..='9' => scan.int_digit(c),
            '-' => scan.sign(),
            _ => {}
        }
    }
    scan.finish()
}

fn sanitize_whole(text: &str) -> String {
    let mut scan = Scanner::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0'..='9' => scan.int_digit(c),
            // A minus that would lead the number rejects the entry outright.
            '-' if scan.state == ScanState::Start => return String::new(),
            _ => {}
        }
    }
    scan.finish()
}

fn sanitize_decimal(text: &str, places: u32) -> String {
    let mut scan = Scanner::with_capacity(text.len());
    for c in text.chars() {
        match (c, scan.state) {
            ('0'..='9', ScanState::Fraction) => scan.frac_digit(c, places),
            ('0'..='9', _) => scan.int_digit(c),
            // Only the first point separates; anything after a second one is dropped.
            ('.', ScanState::Fraction) => break,
            ('.', _) => scan.point(),
            ('-', _) => scan.sign(),
            _ => {}
        }
    }
    scan.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str, mode: Mode) -> (String, Option<f64>) {
        let v = normalize(text, mode);
        (v.display, v.numeric)
    }

    fn s(display: &str, numeric: Option<f64>) -> (String, Option<f64>) {
        (display.to_string(), numeric)
    }

    const DEC2: Mode = Mode::Decimal { places: 2 };

    #[test]
    fn blank_input_is_empty_in_every_mode() {
        for mode in [Mode::Integer, Mode::Whole, DEC2] {
            for text in ["", " ", "\t\n", "\u{a0}"] {
                assert_eq!(normalize(text, mode), NormalizedValue::empty(), "{mode} {text:?}");
            }
        }
    }

    #[test]
    fn integer_collapses_zeros_and_keeps_leading_sign() {
        assert_eq!(norm("-007", Mode::Integer), s("-7", Some(-7.0)));
        assert_eq!(norm("12a3", Mode::Integer), s("123", Some(123.0)));
        assert_eq!(norm("000", Mode::Integer), s("0", Some(0.0)));
        assert_eq!(norm("100", Mode::Integer), s("100", Some(100.0)));
        assert_eq!(norm("a-5", Mode::Integer), s("-5", Some(-5.0)));
    }

    #[test]
    fn integer_drops_inner_signs_and_points() {
        assert_eq!(norm("5-3", Mode::Integer), s("53", Some(53.0)));
        assert_eq!(norm("--4", Mode::Integer), s("-4", Some(-4.0)));
        assert_eq!(norm("1.5", Mode::Integer), s("15", Some(15.0)));
    }

    #[test]
    fn integer_bare_sign_has_no_value() {
        assert_eq!(norm("-", Mode::Integer), s("-", None));
        assert_eq!(norm("-x", Mode::Integer), s("-", None));
        assert_eq!(norm("abc", Mode::Integer), s("", None));
    }

    #[test]
    fn whole_rejects_negative_entry() {
        assert_eq!(norm("-5", Mode::Whole), s("", None));
        assert_eq!(norm(" -5", Mode::Whole), s("", None));
        assert_eq!(norm("-", Mode::Whole), s("", None));
        assert_eq!(norm("x-5", Mode::Whole), s("", None));
    }

    #[test]
    fn whole_strips_everything_but_digits() {
        assert_eq!(norm("00042", Mode::Whole), s("42", Some(42.0)));
        assert_eq!(norm("3.9", Mode::Whole), s("39", Some(39.0)));
        assert_eq!(norm("5-", Mode::Whole), s("5", Some(5.0)));
        assert_eq!(norm("0-5", Mode::Whole), s("5", Some(5.0)));
    }

    #[test]
    fn decimal_truncates_fraction() {
        assert_eq!(norm("3.14159", DEC2), s("3.14", Some(3.14)));
        assert_eq!(norm("2.999", DEC2), s("2.99", Some(2.99)));
        assert_eq!(
            norm("1.23456", Mode::Decimal { places: 4 }),
            s("1.2345", Some(1.2345))
        );
    }

    #[test]
    fn decimal_prefixes_bare_point() {
        assert_eq!(norm(".5", DEC2), s("0.5", Some(0.5)));
        assert_eq!(norm(".", DEC2), s("0.", Some(0.0)));
        assert_eq!(norm("-.5", DEC2), s("-.5", Some(-0.5)));
    }

    #[test]
    fn decimal_collapses_integer_zeros_only() {
        assert_eq!(norm("007.5", DEC2), s("7.5", Some(7.5)));
        assert_eq!(norm("00.05", DEC2), s("0.05", Some(0.05)));
        assert_eq!(norm("-00.5", DEC2), s("-0.5", Some(-0.5)));
        assert_eq!(norm("0.00", DEC2), s("0.00", Some(0.0)));
    }

    #[test]
    fn decimal_second_point_ends_entry() {
        assert_eq!(norm("1.2.3", DEC2), s("1.2", Some(1.2)));
        assert_eq!(norm("1.5.", DEC2), s("1.5", Some(1.5)));
    }

    #[test]
    fn decimal_partial_entries() {
        assert_eq!(norm("-", DEC2), s("-", None));
        assert_eq!(norm("-.", DEC2), s("-.", None));
        assert_eq!(norm("4.", DEC2), s("4.", Some(4.0)));
        assert_eq!(norm("$1,234.5", DEC2), s("1234.5", Some(1234.5)));
    }

    #[test]
    fn decimal_zero_places_keeps_point() {
        assert_eq!(
            norm("3.7", Mode::Decimal { places: 0 }),
            s("3.", Some(3.0))
        );
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(norm("١٢3", Mode::Integer), s("3", Some(3.0)));
        assert_eq!(norm("€", DEC2), s("", None));
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        let inputs = [
            "-007", "12a3", "-5", "00042", "3.14159", ".5", "-.", "1.2.3", "0-5", "--", "4.",
        ];
        for mode in [Mode::Integer, Mode::Whole, DEC2, Mode::Decimal { places: 0 }] {
            for text in inputs {
                let once = normalize(text, mode);
                assert_eq!(normalize(&once.display, mode), once, "{mode} {text:?}");
            }
        }
    }

    #[test]
    fn overflowing_entry_keeps_digits_without_number() {
        let digits = "9".repeat(400);
        let v = normalize(&digits, Mode::Whole);
        assert_eq!(v.display, digits);
        assert_eq!(v.numeric, None);
        assert!(!v.is_empty());
    }
}
