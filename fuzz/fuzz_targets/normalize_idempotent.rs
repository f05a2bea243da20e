#![no_main]

use libfuzzer_sys::fuzz_target;
use number_input::{Constraints, Decision, PrecisionPolicy, normalize};

// First byte picks the constraints, the rest is the proposed text.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(raw) = std::str::from_utf8(rest) else {
        return;
    };

    let mut constraints = Constraints::default().with_allow_decimal(selector & 1 == 0);
    if selector & 2 != 0 {
        constraints = constraints.with_min(-100.0);
    }
    if selector & 4 != 0 {
        constraints = constraints.with_max(100.0);
    }
    if selector & 8 != 0 {
        constraints = constraints.with_max_dp(u32::from(selector >> 6));
    }
    if selector & 16 != 0 {
        constraints = constraints.with_precision(PrecisionPolicy::HalfAwayFromZero);
    }

    let Decision::Accepted(text) = normalize(raw, &constraints) else {
        return;
    };
    assert!(
        text.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+')),
        "{raw:?} -> {text:?}"
    );
    assert!(text.matches('.').count() <= 1, "{raw:?} -> {text:?}");
    assert_eq!(
        normalize(&text, &constraints),
        Decision::accepted(&*text),
        "{raw:?} -> {text:?} is not a fixed point"
    );
});
