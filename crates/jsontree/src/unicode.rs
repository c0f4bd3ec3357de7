//! UTF-16 escape decoding and UTF-8 encoding for `\uXXXX` sequences.
//!
//! JSON spells characters outside the Basic Multilingual Plane as two
//! consecutive escapes, a high surrogate followed by a low surrogate. The
//! string decoder reads each escape with [`decode_hex4`], sorts the unit with
//! [`classify`], joins pairs with [`combine_surrogates`] and appends the
//! result with [`encode_utf8`].

/// What a single decoded `\uXXXX` unit means on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Utf16Unit {
    /// A complete Basic Multilingual Plane scalar value.
    Scalar(u32),
    /// First half of a surrogate pair, `0xD800..=0xDBFF`.
    High(u16),
    /// Second half of a surrogate pair, `0xDC00..=0xDFFF`.
    Low(u16),
}

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
        _ => None,
    }
}

/// Decodes the first four bytes of `digits` as a big-endian hexadecimal code
/// unit. Returns `None` if fewer than four bytes are available or any of them
/// is not a hex digit.
pub(crate) fn decode_hex4(digits: &[u8]) -> Option<u16> {
    let digits = digits.get(..4)?;
    digits
        .iter()
        .try_fold(0u16, |acc, &b| Some((acc << 4) | hex_val(b)?))
}

pub(crate) fn classify(unit: u16) -> Utf16Unit {
    if HIGH_SURROGATES.contains(&unit) {
        Utf16Unit::High(unit)
    } else if LOW_SURROGATES.contains(&unit) {
        Utf16Unit::Low(unit)
    } else {
        Utf16Unit::Scalar(u32::from(unit))
    }
}

/// Joins a high and a low surrogate into the supplementary-plane code point
/// they encode.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    debug_assert!(HIGH_SURROGATES.contains(&high));
    debug_assert!(LOW_SURROGATES.contains(&low));
    0x10000 + (u32::from(high) - 0xD800) * 0x400 + (u32::from(low) - 0xDC00)
}

/// Appends the UTF-8 encoding of `code_point` to `out`.
///
/// `code_point` must be at most `0x10FFFF`. Surrogate values are encoded with
/// the ordinary three-byte pattern; callers are expected to have rejected
/// them already.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_utf8(code_point: u32, out: &mut impl Extend<u8>) {
    debug_assert!(code_point <= 0x10_FFFF);
    let cp = code_point;
    match cp {
        0..=0x7F => out.extend([cp as u8]),
        0x80..=0x7FF => out.extend([0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]),
        0x800..=0xFFFF => out.extend([
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
        _ => out.extend([
            0xF0 | (cp >> 18) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
    }
}
