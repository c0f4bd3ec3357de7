//! String literal decoding.
//!
//! The decoder runs after the opening quote has been consumed and writes the
//! decoded bytes onto the scratch byte stack above a mark taken on entry. On
//! success the region is split off into the returned [`BString`]; on failure it
//! is unwound, so no partial string survives an error.

use bstr::BString;

use super::Parser;
use crate::{
    ErrorKind,
    unicode::{self, Utf16Unit},
};

/// Bytes that end a run of literal string content.
#[inline]
fn is_special(b: u8) -> bool {
    b == b'"' || b == b'\\' || b < 0x20
}

impl Parser<'_> {
    /// Decodes a string body up to and including the closing quote.
    pub(super) fn parse_string_raw(&mut self) -> Result<BString, ErrorKind> {
        let mark = self.scratch.bytes.mark();
        match self.decode_string_body() {
            Ok(()) => Ok(BString::from(self.scratch.bytes.take(mark))),
            Err(kind) => {
                self.scratch.bytes.unwind(mark);
                Err(kind)
            }
        }
    }

    fn decode_string_body(&mut self) -> Result<(), ErrorKind> {
        let input = self.input;
        loop {
            let rest = &input[self.pos..];
            let run = rest.iter().position(|&b| is_special(b)).unwrap_or(rest.len());
            self.scratch.bytes.extend_from_slice(&rest[..run]);
            self.pos += run;

            let Some(b) = self.peek() else {
                return Err(ErrorKind::MissQuotationMark);
            };
            self.pos += 1;
            match b {
                b'"' => return Ok(()),
                b'\\' => self.decode_escape()?,
                _ => return Err(ErrorKind::InvalidStringChar),
            }
        }
    }

    /// Decodes one escape sequence; the backslash is already consumed.
    fn decode_escape(&mut self) -> Result<(), ErrorKind> {
        let Some(b) = self.peek() else {
            return Err(ErrorKind::InvalidStringEscape);
        };
        self.pos += 1;
        let byte = match b {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => return self.decode_unicode_escape(),
            _ => return Err(ErrorKind::InvalidStringEscape),
        };
        self.scratch.bytes.push(byte);
        Ok(())
    }

    /// Decodes `XXXX` after `\u`, pulling in the low half of a surrogate pair
    /// when the first unit is a high surrogate.
    fn decode_unicode_escape(&mut self) -> Result<(), ErrorKind> {
        let code_point = match unicode::classify(self.read_hex4()?) {
            Utf16Unit::Scalar(cp) => cp,
            Utf16Unit::Low(_) => return Err(ErrorKind::InvalidUnicodeSurrogate),
            Utf16Unit::High(high) => {
                if !(self.eat(b'\\') && self.eat(b'u')) {
                    return Err(ErrorKind::InvalidUnicodeSurrogate);
                }
                match unicode::classify(self.read_hex4()?) {
                    Utf16Unit::Low(low) => unicode::combine_surrogates(high, low),
                    _ => return Err(ErrorKind::InvalidUnicodeSurrogate),
                }
            }
        };
        unicode::encode_utf8(code_point, &mut self.scratch.bytes);
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u16, ErrorKind> {
        let unit =
            unicode::decode_hex4(&self.input[self.pos..]).ok_or(ErrorKind::InvalidUnicodeHex)?;
        self.pos += 4;
        Ok(unit)
    }
}
