//! A strict JSON parser that builds an owned document tree.
//!
//! [`parse`] reads one complete JSON text and returns a [`Value`], or a
//! [`ParseError`] naming the first violation and where it occurred. Arrays and
//! objects are stored as exactly sized boxed slices; strings are byte strings
//! that keep embedded NUL bytes.
//!
//! ```rust
//! use jsontree::{ErrorKind, Value, parse};
//!
//! let doc = parse(r#"{"a":1,"b":[2,3]}"#).unwrap();
//! assert_eq!(doc.object_key(0), "a");
//! assert_eq!(doc.object_value(0), &Value::Number(1.0));
//! assert_eq!(doc.object_value(1).array_size(), 2);
//!
//! let err = parse(r#""\uD800""#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidUnicodeSurrogate);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod scratch;
mod unicode;
mod value;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use error::{ErrorKind, ParseError};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use value::{Member, Value, ValueType};
