use bstr::ByteSlice;
use thiserror::Error;

/// The closed set of reasons a document can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input ended (or held only whitespace) where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// A literal or number did not match the grammar.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was followed by something other than whitespace.
    #[error("root value is not singular")]
    RootNotSingular,
    /// A number overflowed to infinity.
    #[error("number too big")]
    NumberTooBig,
    /// A string was not terminated before the end of input.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by a character that is not a valid escape.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A string contained an unescaped control character.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("invalid unicode hex digits")]
    InvalidUnicodeHex,
    /// A UTF-16 surrogate was unpaired or paired with the wrong half.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An array element was followed by neither `,` nor `]`.
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object member was not introduced by a quoted key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing colon")]
    MissColon,
    /// An object member was followed by neither `,` nor `}`.
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,
    /// Arrays and objects were nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

/// A rejected document: what went wrong and where the parser noticed it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    column: usize,
}

impl ParseError {
    /// Locates `offset` within `input` and records the 1-based line and
    /// character column.
    pub(crate) fn at(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line_start = consumed.rfind_byte(b'\n').map_or(0, |nl| nl + 1);
        let line = consumed.find_iter(b"\n").count() + 1;
        let column = consumed[line_start..].chars().count() + 1;
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// The reason the document was rejected.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of [`offset`](Self::offset), counted in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<ParseError> for ErrorKind {
    fn from(err: ParseError) -> Self {
        err.kind
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ErrorKind, ParseError};

    #[test]
    fn position_on_first_line() {
        let err = ParseError::at(ErrorKind::InvalidValue, b"[1, x]", 4);
        assert_eq!((err.line(), err.column(), err.offset()), (1, 5, 4));
    }

    #[test]
    fn position_after_newlines_counts_characters() {
        let input = "[\n  \"é\",\n  x]";
        let offset = input.find('x').unwrap();
        let err = ParseError::at(ErrorKind::InvalidValue, input.as_bytes(), offset);
        assert_eq!((err.line(), err.column()), (3, 3));
    }

    #[test]
    fn offset_past_end_is_clamped() {
        let err = ParseError::at(ErrorKind::ExpectValue, b"  ", 10);
        assert_eq!((err.offset(), err.line(), err.column()), (2, 1, 3));
    }

    #[test]
    fn display_includes_location() {
        let err = ParseError::at(ErrorKind::MissColon, b"{\"a\" 1}", 5);
        assert_eq!(err.to_string(), "missing colon at 1:6");
    }
}
