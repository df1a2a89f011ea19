//! Leading-prefix float parsing.

/// Parse the longest numeric prefix of `s`.
///
/// Leading whitespace is skipped, then the longest prefix shaped like
/// `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` is parsed. The mantissa
/// must contain at least one digit. Trailing garbage is ignored, and a
/// non-finite result counts as no number.
///
/// # Examples
///
/// ```
/// use number_core::parse_leading_float;
///
/// assert_eq!(parse_leading_float("3.14abc"), Some(3.14));
/// assert_eq!(parse_leading_float("  -7"), Some(-7.0));
/// assert_eq!(parse_leading_float(".5"), Some(0.5));
/// assert_eq!(parse_leading_float("5."), Some(5.0));
/// assert_eq!(parse_leading_float("-"), None);
/// assert_eq!(parse_leading_float("-."), None);
/// assert_eq!(parse_leading_float("abc"), None);
/// ```
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        // "1e" / "1e+" keep only the mantissa.
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
