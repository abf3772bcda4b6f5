//! Threshold evaluation
//!
//! ## Overview
//!
//! [`evaluate`] checks one candidate value against an optional limit pair
//! and produces a [`Verdict`]. It is the heart of the engine and the only
//! binding contract: everything else (styling, field monitoring,
//! normalization) is plumbing around this function.
//!
//! ## Totality
//!
//! The function never fails. Missing values, garbage text, and absent
//! limits are all legitimate "no opinion" outcomes, not errors - upstream
//! data comes from free-text UI input and partially populated configuration
//! records, and validation must never take the surrounding UI down with it.
//! There is nothing to retry and nothing fatal at this layer.
//!
//! ## Bound Semantics
//!
//! Absent and empty limits mean "no bound" - explicitly not zero. A limit
//! that is present but has no numeric prefix parses to NaN and occupies a
//! middle ground: it defeats the "no limits defined" outcome, yet can never
//! trip a violation because NaN comparisons are always false. Such a bound
//! interpolates as `NaN` in the in-range message.
//!
//! The engine does not check that min ≤ max. A single value cannot violate
//! both sides of an ordered pair; should an inverted pair ever produce both
//! flags, the below-minimum message wins.

use crate::parse::parse_lenient;
use crate::verdict::{Status, Verdict};

/// Parse a raw limit: absent/empty is no bound, unparsable text is NaN.
fn parse_bound(raw: Option<&str>) -> Option<f64> {
    match raw {
        None => None,
        Some("") => None,
        Some(text) => Some(parse_lenient(text).unwrap_or(f64::NAN)),
    }
}

/// Evaluate a candidate value against an optional min/max limit pair.
///
/// All three inputs are raw, pre-parse text; each may independently be
/// absent. The verdict echoes them untouched.
pub fn evaluate<'a>(
    value: Option<&'a str>,
    min: Option<&'a str>,
    max: Option<&'a str>,
) -> Verdict<'a> {
    let mut verdict = Verdict::neutral(value, min, max);

    let raw = match value {
        Some(text) if !text.is_empty() => text,
        _ => {
            verdict.set_message("No value entered");
            return verdict;
        }
    };

    let candidate = match parse_lenient(raw) {
        Some(number) => number,
        None => {
            verdict.set_message("Non-numeric value");
            return verdict;
        }
    };

    let min_bound = parse_bound(min);
    let max_bound = parse_bound(max);

    if min_bound.is_none() && max_bound.is_none() {
        verdict.set_message("No limits defined");
        return verdict;
    }

    let violated_min = match min_bound {
        Some(limit) if !limit.is_nan() && candidate < limit => Some(limit),
        _ => None,
    };
    let violated_max = match max_bound {
        Some(limit) if !limit.is_nan() && candidate > limit => Some(limit),
        _ => None,
    };

    verdict.below_min = violated_min.is_some();
    verdict.above_max = violated_max.is_some();
    verdict.is_valid = violated_min.is_none() && violated_max.is_none();

    if verdict.is_valid {
        verdict.status = Status::Valid;
        match (min_bound, max_bound) {
            (Some(lo), Some(hi)) => verdict.set_message_fmt(format_args!(
                "Value {} is within range [{} - {}]",
                candidate, lo, hi
            )),
            _ => verdict.set_message("Value is within limits"),
        }
    } else {
        verdict.status = Status::Warning;
        // Below-minimum takes precedence when both sides are violated
        if let Some(limit) = violated_min {
            verdict.set_message_fmt(format_args!(
                "Value {} is below minimum ({})",
                candidate, limit
            ));
        } else if let Some(limit) = violated_max {
            verdict.set_message_fmt(format_args!(
                "Value {} exceeds maximum ({})",
                candidate, limit
            ));
        }
    }

    verdict
}
