//! Strict JSON number lexing.
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ("e" / "E") ["-" / "+"] 1*digit
//! ```
//!
//! The shape is validated in full before any conversion happens, and the
//! conversion sees exactly the validated span.

use super::Parser;
use crate::{ErrorKind, value::Value};

/// Length of the longest prefix of `input` shaped like a JSON number.
///
/// A leading zero followed by another digit is rejected outright rather than
/// ending the match, so `0123` is an error instead of `0` plus trailing junk.
pub(crate) fn scan_number(input: &[u8]) -> Result<usize, ErrorKind> {
    let digits_from = |at: usize| {
        input
            .get(at..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut p = 0;
    if input.first() == Some(&b'-') {
        p += 1;
    }
    match input.get(p) {
        Some(b'0') => {
            p += 1;
            if input.get(p).is_some_and(u8::is_ascii_digit) {
                return Err(ErrorKind::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => p += 1 + digits_from(p + 1),
        _ => return Err(ErrorKind::InvalidValue),
    }
    if input.get(p) == Some(&b'.') {
        p += 1;
        let n = digits_from(p);
        if n == 0 {
            return Err(ErrorKind::InvalidValue);
        }
        p += n;
    }
    if let Some(b'e' | b'E') = input.get(p) {
        p += 1;
        if let Some(b'+' | b'-') = input.get(p) {
            p += 1;
        }
        let n = digits_from(p);
        if n == 0 {
            return Err(ErrorKind::InvalidValue);
        }
        p += n;
    }
    Ok(p)
}

/// Converts a span already accepted by [`scan_number`].
pub(crate) fn convert_number(span: &[u8]) -> Result<f64, ErrorKind> {
    let text = core::str::from_utf8(span).map_err(|_| ErrorKind::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ErrorKind::InvalidValue)?;
    if n.is_infinite() {
        return Err(ErrorKind::NumberTooBig);
    }
    Ok(n)
}

impl Parser<'_> {
    pub(super) fn parse_number(&mut self) -> Result<Value, ErrorKind> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = scan_number(rest)?;
        let n = convert_number(&rest[..len])?;
        self.pos += len;
        Ok(Value::Number(n))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{convert_number, scan_number};
    use crate::ErrorKind;

    #[rstest]
    #[case(b"0", 1)]
    #[case(b"-0", 2)]
    #[case(b"-0.0", 4)]
    #[case(b"1", 1)]
    #[case(b"-1", 2)]
    #[case(b"1.5", 3)]
    #[case(b"-1.5", 4)]
    #[case(b"3.1416", 6)]
    #[case(b"1E10", 4)]
    #[case(b"1e10", 4)]
    #[case(b"1E+10", 5)]
    #[case(b"1E-10", 5)]
    #[case(b"-1E10", 5)]
    #[case(b"1.234E+10", 9)]
    #[case(b"0e0", 3)]
    #[case(b"12,", 2)]
    #[case(b"7]", 1)]
    #[case(b"0 1", 1)]
    #[case(b"1.5e3x", 5)]
    fn scans_valid_prefix(#[case] input: &[u8], #[case] len: usize) {
        assert_eq!(scan_number(input), Ok(len));
    }

    #[rstest]
    #[case(b"+0")]
    #[case(b"+1")]
    #[case(b".123")]
    #[case(b"1.")]
    #[case(b"1.e5")]
    #[case(b"0123")]
    #[case(b"-01")]
    #[case(b"00")]
    #[case(b"1e")]
    #[case(b"1e+")]
    #[case(b"1e+-1")]
    #[case(b"-")]
    #[case(b"--1")]
    #[case(b"INF")]
    #[case(b"inf")]
    #[case(b"NAN")]
    #[case(b"nan")]
    #[case(b"")]
    fn rejects_malformed_shape(#[case] input: &[u8]) {
        assert_eq!(scan_number(input), Err(ErrorKind::InvalidValue));
    }

    #[rstest]
    #[case("1.0000000000000002", 1.000_000_000_000_000_2)]
    #[case("4.9406564584124654e-324", 4.940_656_458_412_465_4e-324)]
    #[case("2.2250738585072009e-308", 2.225_073_858_507_200_9e-308)]
    #[case("2.2250738585072014e-308", 2.225_073_858_507_201_4e-308)]
    #[case("1.7976931348623157e+308", 1.797_693_134_862_315_7e308)]
    #[case("1e-10000", 0.0)]
    fn converts_boundary_values(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(convert_number(input.as_bytes()).map(f64::to_bits), Ok(expected.to_bits()));
    }

    #[rstest]
    #[case("1e309")]
    #[case("-1e309")]
    #[case("1e400")]
    #[case("1.7976931348623159e308")]
    fn overflow_is_too_big(#[case] input: &str) {
        assert_eq!(convert_number(input.as_bytes()), Err(ErrorKind::NumberTooBig));
    }
}
