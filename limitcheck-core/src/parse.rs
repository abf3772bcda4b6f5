//! Lenient decimal parsing for free-text input
//!
//! ## Overview
//!
//! Data-collection fields deliver whatever the operator typed: `"5"`,
//! `" 12.5 mm"`, `"7,5"`, or plain garbage. Strict parsing would reject most
//! of it; instead this module extracts the leading numeric substring and
//! ignores the rest, matching the lenient semantics UI toolkits apply to
//! numeric input.
//!
//! Accepted shape, after leading whitespace:
//!
//! ```text
//! [+|-] digits [. digits] [e|E [+|-] digits]
//! ```
//!
//! Every component is optional except that at least one digit must appear
//! before the exponent. The exponent marker is only consumed when at least
//! one exponent digit follows, so `"5e"` parses as `5`. Anything after the
//! numeric prefix is ignored. No numeric prefix at all means "not a number",
//! which callers map to a Neutral verdict rather than an error.
//!
//! ## Design
//!
//! Pure function, zero allocation, no_std-friendly. The decimal exponent is
//! applied through `libm::pow` so the same code path works without a
//! platform math library.

/// Parse the leading numeric substring of `input` as an `f64`.
///
/// Returns `None` when no numeric prefix exists (including empty and
/// whitespace-only input).
pub fn parse_lenient(input: &str) -> Option<f64> {
    let bytes = input.trim_start().as_bytes();
    let mut pos = 0;

    let mut sign = 1.0;
    if let Some(&b) = bytes.first() {
        if b == b'+' || b == b'-' {
            if b == b'-' {
                sign = -1.0;
            }
            pos += 1;
        }
    }

    let mut mantissa = 0.0f64;
    let mut any_digits = false;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        mantissa = mantissa * 10.0 + f64::from(bytes[pos] - b'0');
        any_digits = true;
        pos += 1;
    }

    // Fractional digits fold into the mantissa; the decimal shift is
    // applied once at the end.
    let mut exp: i32 = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            mantissa = mantissa * 10.0 + f64::from(bytes[pos] - b'0');
            exp -= 1;
            any_digits = true;
            pos += 1;
        }
    }

    if !any_digits {
        return None;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut cursor = pos + 1;
        let mut exp_sign: i32 = 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            if bytes[cursor] == b'-' {
                exp_sign = -1;
            }
            cursor += 1;
        }
        let mut exp_value: i32 = 0;
        let mut exp_digits = false;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            exp_value = exp_value
                .saturating_mul(10)
                .saturating_add(i32::from(bytes[cursor] - b'0'));
            exp_digits = true;
            cursor += 1;
        }
        // A bare `e` or `e-` is trailing garbage, not an exponent
        if exp_digits {
            exp += exp_sign.saturating_mul(exp_value);
        }
    }

    let magnitude = if exp == 0 {
        mantissa
    } else {
        mantissa * libm::pow(10.0, f64::from(exp))
    };

    Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_lenient("5"), Some(5.0));
        assert_eq!(parse_lenient("-17"), Some(-17.0));
        assert_eq!(parse_lenient("+3"), Some(3.0));
        assert_eq!(parse_lenient("007"), Some(7.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(parse_lenient("0.5"), Some(0.5));
        assert_eq!(parse_lenient(".5"), Some(0.5));
        assert_eq!(parse_lenient("5."), Some(5.0));
        assert_eq!(parse_lenient("-.25"), Some(-0.25));
    }

    #[test]
    fn exponents() {
        assert_eq!(parse_lenient("1e3"), Some(1000.0));
        assert_eq!(parse_lenient("1.5e2"), Some(150.0));
        assert_eq!(parse_lenient("2E-2"), Some(0.02));
        // Exponent marker without digits is garbage, not an exponent
        assert_eq!(parse_lenient("5e"), Some(5.0));
        assert_eq!(parse_lenient("5e-"), Some(5.0));
    }

    #[test]
    fn trailing_garbage_ignored() {
        assert_eq!(parse_lenient("12.5 mm"), Some(12.5));
        assert_eq!(parse_lenient("7,5"), Some(7.0));
        assert_eq!(parse_lenient("0x10"), Some(0.0));
        assert_eq!(parse_lenient("3abc"), Some(3.0));
    }

    #[test]
    fn leading_whitespace_skipped() {
        assert_eq!(parse_lenient("  42"), Some(42.0));
        assert_eq!(parse_lenient("\t-1.5"), Some(-1.5));
    }

    #[test]
    fn no_numeric_prefix() {
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("   "), None);
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient("-"), None);
        assert_eq!(parse_lenient("."), None);
        assert_eq!(parse_lenient("+."), None);
        assert_eq!(parse_lenient("e5"), None);
        assert_eq!(parse_lenient("Infinity"), None);
    }

    #[test]
    fn negative_zero() {
        let parsed = parse_lenient("-0").unwrap();
        assert_eq!(parsed, 0.0);
        assert!(parsed.is_sign_negative());
    }
}
