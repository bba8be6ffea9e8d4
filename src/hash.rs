//! Deterministic sampling from string seeds.
//!
//! All "random" choices in a collage (tile sizes, synthesized reaction
//! counts, second-pill rolls) come from a 32-bit rolling hash over the UTF-16
//! code units of `seed_a + "|" + seed_b`. The hash is the classic
//! `h = h * 31 + c` written with shifts, wrapped to `i32` at every step so
//! values are identical across platforms and across runs.

/// Sample an integer in `[min, max]` from a pair of string seeds.
///
/// `min` and `max` are inclusive and `max >= min` must hold. Swapping the
/// seeds changes the result; `("a", "b")` and `("b", "a")` are different
/// draws.
pub fn sample(seed_a: &str, seed_b: &str, min: i32, max: i32) -> i32 {
    debug_assert!(max >= min);
    let mut hash: i32 = 0;
    let units = seed_a
        .encode_utf16()
        .chain(std::iter::once(u16::from(b'|')))
        .chain(seed_b.encode_utf16());
    for unit in units {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    let span = i64::from(max) - i64::from(min) + 1;
    // Widen before abs: i32::MIN has no i32 negation.
    let roll = (i64::from(hash).abs() % span) as i32;
    min + roll
}

/// Length of `s` in UTF-16 code units (astral-plane chars count as two).
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
