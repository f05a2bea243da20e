//! Prefix scanner for numerals.
//!
//! Recognizes `[whitespace]* [+-]? digit* ('.' digit*)?` at the start of a
//! string and stops at the first byte that cannot extend the numeral. Nothing
//! after that point contributes to the scanned value, so `"5a"` scans as `5`;
//! the remainder is kept in [`Numeral::rest`] for callers that want it.
//!
//! The grammar is deliberately narrower than `f64::from_str`: no exponents,
//! no `inf`/`nan` literals.

/// Whether the scanner may consume a fractional part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Digits, optionally followed by a single point and more digits.
    Decimal,
    /// Digits only; scanning stops at a decimal point.
    Integer,
}

/// A numeral recognized at the start of a string.
///
/// All slices borrow from the scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Numeral<'a> {
    /// `true` when the numeral carried a leading `-`.
    pub negative: bool,
    /// Digits before the decimal point (may be empty, as in `".5"`).
    pub int_digits: &'a str,
    /// `Some` when a decimal point was consumed, holding the digits after it
    /// (possibly empty, as in `"5."`).
    pub frac_digits: Option<&'a str>,
    /// The numeral as typed, without leading whitespace or a `+` sign.
    pub text: &'a str,
    /// Everything after the numeral.
    pub rest: &'a str,
}

/// Scan a numeral from the start of `s`.
///
/// Returns `None` when no digit can be consumed, which callers treat as
/// not-a-number.
///
/// # Examples
///
/// ```
/// use number_input::{ScanMode, scan_numeral};
///
/// let n = scan_numeral("  -12.50kg", ScanMode::Decimal).unwrap();
/// assert!(n.negative);
/// assert_eq!(n.int_digits, "12");
/// assert_eq!(n.frac_digits, Some("50"));
/// assert_eq!(n.text, "-12.50");
///
/// let n = scan_numeral("7.123", ScanMode::Integer).unwrap();
/// assert_eq!(n.text, "7");
///
/// assert!(scan_numeral("-.", ScanMode::Decimal).is_none());
/// ```
pub fn scan_numeral(s: &str, mode: ScanMode) -> Option<Numeral<'_>> {
    let bytes = s.as_bytes();
    let start = s.len() - s.trim_start().len();

    let (negative, digits_start) = match bytes.get(start) {
        Some(b'-') => (true, start + 1),
        Some(b'+') => (false, start + 1),
        _ => (false, start),
    };
    let text_start = if negative || digits_start == start {
        start
    } else {
        digits_start
    };

    let int_end = digits_start + count_digits(&bytes[digits_start..]);
    let int_digits = &s[digits_start..int_end];

    let mut end = int_end;
    let mut frac_digits = None;
    if mode == ScanMode::Decimal && bytes.get(int_end) == Some(&b'.') {
        let frac_start = int_end + 1;
        let frac_end = frac_start + count_digits(&bytes[frac_start..]);
        frac_digits = Some(&s[frac_start..frac_end]);
        end = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_none_or(str::is_empty) {
        return None;
    }

    Some(Numeral {
        negative,
        int_digits,
        frac_digits,
        text: &s[text_start..end],
        rest: &s[end..],
    })
}

impl Numeral<'_> {
    /// Numeric value of the scanned digits.
    pub fn value(&self) -> f64 {
        let int = if self.int_digits.is_empty() {
            "0"
        } else {
            self.int_digits
        };
        let frac = match self.frac_digits {
            Some(f) if !f.is_empty() => f,
            _ => "0",
        };
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{int}.{frac}")
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn fraction_len(&self) -> usize {
        self.frac_digits.map_or(0, str::len)
    }

    /// Returns `true` if every scanned digit is `0`.
    pub fn is_zero(&self) -> bool {
        let frac = self.frac_digits.unwrap_or("");
        self.int_digits.bytes().chain(frac.bytes()).all(|b| b == b'0')
    }

    /// Canonical integer form: leading zeros removed, no sign on zero.
    ///
    /// Any fractional digits are ignored.
    pub fn canonical_integer(&self) -> String {
        let digits = self.int_digits.trim_start_matches('0');
        if digits.is_empty() {
            return "0".to_string();
        }
        let mut out = String::with_capacity(digits.len() + 1);
        if self.negative {
            out.push('-');
        }
        out.push_str(digits);
        out
    }
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
