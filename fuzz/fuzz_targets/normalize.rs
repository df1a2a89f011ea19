#![no_main]

use libfuzzer_sys::fuzz_target;
use number_core::{Mode, normalize, parse_leading_float};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let mode = match selector % 3 {
        0 => Mode::Integer,
        1 => Mode::Whole,
        _ => Mode::Decimal {
            places: u32::from(selector / 3 % 8),
        },
    };

    let once = normalize(text, mode);
    assert_eq!(once.numeric, parse_leading_float(&once.display));
    assert_eq!(normalize(&once.display, mode), once);
});
