//! Whole-value normalization of numeric field text.

use std::borrow::Cow;

use crate::constraints::Constraints;
use crate::decision::Decision;
use crate::precision::clamp_fraction;
use crate::scan::{Numeral, ScanMode, scan_numeral};

/// Intermediate states a user passes through while typing a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transient {
    Empty,
    Sign,
    TrailingPoint,
}

/// Decide whether `raw` may become the field's value, and what text to show.
///
/// The steps, in order:
///
/// 1. Transient states pass through untouched: `""`, a numeral ending in a
///    single point (`"7."`, `"."`, `"-7."`), and a lone sign or sign + point
///    when the bounds admit a value of that sign.
/// 2. The leading numeral is scanned; trailing characters are ignored.
/// 3. No numeral, or a value outside `min..=max`, rejects the edit.
/// 4. With `max_dp`, surplus non-zero fractional digits are clamped according
///    to [`PrecisionPolicy`](crate::PrecisionPolicy); a clamped value that
///    leaves the bounds rejects the edit.
/// 5. Integer fields show the canonical integer. Decimal fields keep the
///    numeral plus any later digits (and a first point), dropping other
///    characters; the leading `-` survives, `+` and whitespace do not. When
///    later digits were kept, the merged value must pass the bounds again,
///    so `"5a6"` is `56` as far as `max` is concerned.
///
/// The result is idempotent: normalizing accepted text accepts it unchanged.
///
/// # Examples
///
/// ```
/// use number_input::{Constraints, Decision, normalize};
///
/// let c = Constraints::default().with_max_dp(2);
/// assert_eq!(normalize("7.1234", &c), Decision::accepted("7.12"));
/// assert_eq!(normalize("5a", &c), Decision::accepted("5"));
/// assert_eq!(normalize("12x345", &c), Decision::accepted("12345"));
/// assert_eq!(normalize("7.", &c), Decision::accepted("7."));
///
/// let c = Constraints::default().with_max(5.0);
/// assert_eq!(normalize("7", &c), Decision::Rejected);
/// ```
pub fn normalize<'a>(raw: &'a str, constraints: &Constraints) -> Decision<'a> {
    if let Some(kind) = transient(raw, constraints) {
        log::trace!(target: "number_input.normalize", "pass through {kind:?}: {raw:?}");
        return Decision::Accepted(Cow::Borrowed(raw));
    }

    let mode = if constraints.allow_decimal {
        ScanMode::Decimal
    } else {
        ScanMode::Integer
    };
    let Some(numeral) = scan_numeral(raw, mode) else {
        log::trace!(target: "number_input.normalize", "reject {raw:?}: no numeral");
        return Decision::Rejected;
    };

    if let Some(violation) = constraints.violation(numeral.value()) {
        log::trace!(target: "number_input.normalize", "reject {raw:?}: {violation}");
        return Decision::Rejected;
    }

    if !constraints.allow_decimal {
        let canonical = numeral.canonical_integer();
        if canonical == numeral.text {
            return Decision::Accepted(Cow::Borrowed(numeral.text));
        }
        log::trace!(target: "number_input.normalize", "rewrite {raw:?} -> {canonical:?}");
        return Decision::Accepted(Cow::Owned(canonical));
    }

    let Some(merged) = absorb_tail(&numeral) else {
        if !numeral.rest.is_empty() {
            log::trace!(
                target: "number_input.normalize",
                "strip {raw:?} -> {:?}",
                numeral.text
            );
        }
        return shape_decimal(raw, numeral, constraints);
    };

    // Digits past the stray characters change the value, so it goes through
    // the bounds gate again.
    log::trace!(target: "number_input.normalize", "strip {raw:?} -> {merged:?}");
    let Some(numeral) = scan_numeral(&merged, ScanMode::Decimal) else {
        return Decision::Rejected;
    };
    if let Some(violation) = constraints.violation(numeral.value()) {
        log::trace!(
            target: "number_input.normalize",
            "reject {raw:?}: stripped to {merged:?}, {violation}"
        );
        return Decision::Rejected;
    }
    shape_decimal(raw, numeral, constraints).into_owned()
}

/// Apply the decimal-place clamp to an in-bounds numeral and pick the text
/// to show.
fn shape_decimal<'t>(raw: &str, numeral: Numeral<'t>, constraints: &Constraints) -> Decision<'t> {
    if let Some(max_dp) = constraints.max_dp
        && let Some(clamped) = clamp_fraction(&numeral, max_dp, constraints.precision)
    {
        let value = clamped.parse::<f64>().unwrap_or(f64::NAN);
        if let Some(violation) = constraints.violation(value) {
            log::trace!(
                target: "number_input.normalize",
                "reject {raw:?}: clamped to {clamped:?}, {violation}"
            );
            return Decision::Rejected;
        }
        log::trace!(target: "number_input.normalize", "clamp {raw:?} -> {clamped:?}");
        return Decision::Accepted(Cow::Owned(clamped));
    }
    Decision::Accepted(Cow::Borrowed(numeral.text))
}

/// The numeral followed by the digits of its tail, with other characters
/// dropped and the tail cut at a second decimal point. A `-` is only kept in
/// front.
///
/// `None` when the tail adds no digit or point.
fn absorb_tail(numeral: &Numeral<'_>) -> Option<String> {
    let mut out = String::with_capacity(numeral.text.len() + numeral.rest.len());
    out.push_str(numeral.text);
    let mut has_point = numeral.frac_digits.is_some();
    for c in numeral.rest.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if has_point => break,
            '.' => {
                has_point = true;
                out.push(c);
            }
            _ => {}
        }
    }
    (out.len() > numeral.text.len()).then_some(out)
}

fn transient(raw: &str, constraints: &Constraints) -> Option<Transient> {
    if raw.is_empty() {
        return Some(Transient::Empty);
    }

    let (sign, rest) = if let Some(rest) = raw.strip_prefix('-') {
        (Some('-'), rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        (Some('+'), rest)
    } else {
        (None, raw)
    };

    let digits = match rest.strip_suffix('.') {
        Some(digits) if constraints.allow_decimal => digits,
        _ if rest.is_empty() => rest,
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if !digits.is_empty() {
        // `rest` is `digits` plus the trailing point.
        return Some(Transient::TrailingPoint);
    }
    match sign {
        None => Some(Transient::TrailingPoint),
        Some('-') if constraints.permits_negative() => Some(Transient::Sign),
        Some('+') if constraints.permits_positive() => Some(Transient::Sign),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::PrecisionPolicy;

    fn accepts(raw: &str, c: &Constraints, expected: &str) {
        assert_eq!(
            normalize(raw, c),
            Decision::accepted(expected),
            "normalize({raw:?}, {c:?})"
        );
    }

    fn rejects(raw: &str, c: &Constraints) {
        assert_eq!(normalize(raw, c), Decision::Rejected, "normalize({raw:?}, {c:?})");
    }

    fn dp(max_dp: u32) -> Constraints {
        Constraints::default().with_max_dp(max_dp)
    }

    #[test]
    fn valid_inputs_pass_through() {
        let c = Constraints::default();
        accepts("5", &c, "5");
        accepts("1.337", &c, "1.337");
        accepts(".1337", &c, ".1337");
        accepts("0.0", &c, "0.0");
        accepts("1.000", &c, "1.000");
        accepts("007", &c, "007");
    }

    #[test]
    fn empty_text_is_always_accepted() {
        accepts("", &Constraints::default(), "");
        accepts("", &Constraints::integers().with_min(5.0), "");
        accepts("", &Constraints::default().with_min(1.0).with_max(2.0), "");
    }

    #[test]
    fn trailing_point_is_a_transient_state() {
        let c = Constraints::default();
        accepts(".", &c, ".");
        accepts("7.", &c, "7.");
        accepts("-7.", &c, "-7.");
        accepts("+7.", &c, "+7.");
    }

    #[test]
    fn trailing_point_transient_skips_bounds() {
        accepts("7.", &Constraints::default().with_max(5.0), "7.");
    }

    #[test]
    fn point_transients_need_decimals() {
        let c = Constraints::integers();
        rejects(".", &c);
        // Not a transient, but the integer scan still finds 7.
        accepts("7.", &c, "7");
    }

    #[test]
    fn second_point_is_not_a_transient() {
        let c = Constraints::default();
        accepts("7..", &c, "7.");
        accepts("1.2.", &c, "1.2");
    }

    #[test]
    fn junk_before_trailing_point_is_not_a_transient() {
        rejects("abc.", &Constraints::default());
        accepts("5a.", &Constraints::default(), "5.");
        // Stripped to "7.", but that went through the bounds gate first.
        rejects("7a.", &Constraints::default().with_max(5.0));
    }

    #[test]
    fn lone_signs_follow_the_bounds() {
        let c = Constraints::default();
        accepts("-", &c, "-");
        accepts("+", &c, "+");
        accepts("-.", &c, "-.");
        accepts("-", &Constraints::integers(), "-");

        rejects("-", &Constraints::default().with_min(0.0));
        rejects("-.", &Constraints::default().with_min(0.0));
        accepts("-", &Constraints::default().with_min(-10.0), "-");
        rejects("+", &Constraints::default().with_max(-1.0));
        rejects("-.", &Constraints::integers());
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        let c = Constraints::default();
        accepts("-1", &c, "-1");
        accepts("-0.25", &c, "-0.25");
        accepts("-.5", &c, "-.5");
        accepts("-1", &Constraints::integers(), "-1");
    }

    #[test]
    fn plus_sign_and_leading_whitespace_are_dropped() {
        let c = Constraints::default();
        accepts("+5", &c, "5");
        accepts("  5", &c, "5");
        accepts("\t-2.5", &c, "-2.5");
    }

    #[test]
    fn not_a_number_is_rejected() {
        let c = Constraints::default();
        rejects("abc", &c);
        rejects("a5", &c);
        rejects("--1", &c);
        rejects("- 1", &c);
        rejects("+-1", &c);
    }

    #[test]
    fn bounds_gate() {
        rejects("2", &Constraints::default().with_min(5.0));
        rejects("7", &Constraints::default().with_max(5.0));
        rejects("-0.5", &Constraints::default().with_min(0.0));
        accepts("5", &Constraints::default().with_min(5.0), "5");
        accepts("5", &Constraints::default().with_max(5.0), "5");
    }

    #[test]
    fn bounds_apply_to_the_stripped_value() {
        // 5a6 would be shown as 56.
        rejects("5a6", &Constraints::default().with_max(10.0));
        accepts("5a6", &Constraints::default().with_max(100.0), "56");
        rejects("1x.2", &Constraints::default().with_max(1.1));
    }

    #[test]
    fn decimal_suppression() {
        let c = Constraints::integers();
        accepts("7.123", &c, "7");
        accepts("007", &c, "7");
        accepts("-0", &c, "0");
        accepts("+12", &c, "12");
        accepts("12abc", &c, "12");
        accepts("12x345", &c, "12");
        rejects(".5", &c);
    }

    #[test]
    fn integer_bounds_apply_to_the_truncated_value() {
        rejects("7.9", &Constraints::integers().with_min(7.5));
        accepts("8.1", &Constraints::integers().with_max(8.0), "8");
    }

    #[test]
    fn precision_clamp_truncates() {
        accepts("7.1234", &dp(2), "7.12");
        accepts("7.5489", &dp(2), "7.54");
        accepts("-7.1234", &dp(2), "-7.12");
        accepts("7.5", &dp(0), "7");
        accepts(".129", &dp(2), "0.12");
    }

    #[test]
    fn precision_clamp_can_round_half_away_from_zero() {
        let c = dp(2).with_precision(PrecisionPolicy::HalfAwayFromZero);
        accepts("7.5489", &c, "7.55");
        accepts("7.1234", &c, "7.12");
        accepts("1.005", &c, "1.01");
        accepts("-2.345", &c, "-2.35");
        accepts("9.999", &c, "10.00");
    }

    #[test]
    fn precision_within_limit_is_untouched() {
        accepts("7.12", &dp(2), "7.12");
        accepts("1.000", &dp(3), "1.000");
        accepts("1.000", &dp(2), "1.000");
        accepts("7.", &dp(0), "7.");
    }

    #[test]
    fn precision_clamp_strips_junk_too() {
        accepts("7.1234kg", &dp(2), "7.12");
        accepts("7.1x234", &dp(2), "7.12");
        accepts("1,999.5", &dp(0), "1999");
    }

    #[test]
    fn clamped_value_must_stay_in_bounds() {
        let c = dp(2).with_min(7.545);
        rejects("7.5489", &c);

        let c = dp(2)
            .with_max(7.549)
            .with_precision(PrecisionPolicy::HalfAwayFromZero);
        rejects("7.5489", &c);
        accepts("7.5449", &c, "7.54");
    }

    #[test]
    fn stray_characters_are_stripped() {
        let c = Constraints::default();
        accepts("5a", &c, "5");
        accepts("1.5.3", &c, "1.5");
        accepts("12 34", &c, "1234");
        accepts("3€", &c, "3");
        accepts("1x.2", &c, "1.2");
        accepts("12x345", &c, "12345");
        accepts("1,234.5", &c, "1234.5");
        accepts("-1-2", &c, "-12");
        accepts("1.2x.3", &c, "1.2");
    }

    #[test]
    fn unchanged_text_is_borrowed() {
        let c = Constraints::default();
        assert!(matches!(normalize("12.5", &c), Decision::Accepted(Cow::Borrowed(_))));
        assert!(matches!(normalize("12.5x", &c), Decision::Accepted(Cow::Borrowed(_))));
        assert!(matches!(normalize("12x5", &c), Decision::Accepted(Cow::Owned(_))));
        assert!(matches!(
            normalize("12", &Constraints::integers()),
            Decision::Accepted(Cow::Borrowed(_))
        ));
    }

    #[test]
    fn exponent_marker_is_stripped_like_any_letter() {
        accepts("1e5", &Constraints::default(), "15");
        rejects("1e5", &Constraints::default().with_max(10.0));
    }

    #[test]
    fn huge_values_overflow_to_infinity_and_hit_bounds() {
        let raw = "9".repeat(400);
        rejects(&raw, &Constraints::default().with_max(1e300));
        accepts(&raw, &Constraints::default(), &raw);
    }

    #[test]
    fn accepted_text_is_a_fixed_point() {
        let inputs = [
            "", ".", "-", "+", "-.", "7.", "-7.", "5", "5a", "+5", " 5", "007", "-0", "1.000",
            "7.1234", "7.5489", "-7.5489", "9.995", ".129", "-.5", "1.2.3", "5.a", "3€", "0.999",
            "12x345", "1x.2", "5a6", "5a.", "-1-2", "7.1x239", "1,234.5",
        ];
        let constraints = [
            Constraints::default(),
            Constraints::integers(),
            dp(0),
            dp(2),
            dp(2).with_precision(PrecisionPolicy::HalfAwayFromZero),
            Constraints::default().with_min(-5.0).with_max(5.0),
            Constraints::integers().with_min(0.0),
        ];
        for c in &constraints {
            for raw in inputs {
                if let Decision::Accepted(text) = normalize(raw, c) {
                    assert_eq!(
                        normalize(&text, c),
                        Decision::accepted(&*text),
                        "{raw:?} -> {text:?} is not stable under {c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn constraints_are_read_per_call() {
        let mut c = Constraints::default();
        accepts("50", &c, "50");
        c.max = Some(10.0);
        rejects("50", &c);
        c.max = None;
        accepts("50", &c, "50");
    }
}
