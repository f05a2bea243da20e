//! Decimal-place clamping on digit strings.

use crate::constraints::PrecisionPolicy;
use crate::scan::Numeral;

/// Clamp `numeral` to `max_dp` fractional digits.
///
/// Returns `None` when the numeral already fits: either it has at most
/// `max_dp` fractional digits, or every surplus digit is `0` (so the value
/// would not change and typed trailing zeros are kept). Otherwise returns the
/// clamped value in fixed-point form with exactly `max_dp` fractional digits,
/// a canonical integer part, and no sign on zero.
pub(crate) fn clamp_fraction(
    numeral: &Numeral<'_>,
    max_dp: u32,
    policy: PrecisionPolicy,
) -> Option<String> {
    let frac = numeral.frac_digits?;
    let keep = usize::try_from(max_dp).unwrap_or(usize::MAX);
    if frac.len() <= keep {
        return None;
    }
    let (kept, dropped) = frac.split_at(keep);
    if dropped.bytes().all(|b| b == b'0') {
        return None;
    }

    let int = numeral.int_digits.trim_start_matches('0');
    let mut digits: Vec<u8> = int.bytes().chain(kept.bytes()).collect();

    let round_up = match policy {
        PrecisionPolicy::Truncate => false,
        PrecisionPolicy::HalfAwayFromZero => dropped.as_bytes()[0] >= b'5',
    };
    if round_up && increment(&mut digits) {
        digits.insert(0, b'1');
    }

    let int_len = digits.len() - keep;
    let is_zero = digits.iter().all(|&b| b == b'0');

    let mut out = String::with_capacity(digits.len() + 3);
    if numeral.negative && !is_zero {
        out.push('-');
    }
    if int_len == 0 {
        out.push('0');
    }
    out.extend(digits[..int_len].iter().map(|&b| b as char));
    if keep > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&b| b as char));
    }
    Some(out)
}

/// Add one unit in the last place. Returns `true` on carry out of the
/// most significant digit.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
