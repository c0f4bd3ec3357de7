//! JSON document tree.
//!
//! This module defines [`Value`], the owned node type produced by the parser,
//! and [`Member`], one key/value pair of an object. Containers are exactly
//! sized boxed slices: once built, an array or object never grows, and every
//! descendant is owned by exactly one parent.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{fmt, str::FromStr};

use bstr::{BStr, BString, ByteSlice};

use crate::{ParseError, parser::parse};

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::False => "false",
            Self::True => "true",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// A parsed JSON value.
///
/// Scalars (`Null`, `False`, `True`, `Number`) own no heap memory. Strings are
/// byte strings whose length is authoritative, so an escaped `\u0000` is kept
/// as an embedded NUL byte. Arrays and objects exclusively own their children.
///
/// # Examples
///
/// ```
/// use jsontree::{Value, ValueType};
///
/// let doc: Value = r#"{"name":"jsontree","tags":["json",1]}"#.parse().unwrap();
/// assert_eq!(doc.value_type(), ValueType::Object);
/// assert_eq!(doc.object_key(0), "name");
/// assert_eq!(doc.find_member(b"tags").unwrap().array_size(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A finite number.
    Number(f64),
    /// A decoded string.
    String(BString),
    /// An array, in document order.
    Array(Box<[Value]>),
    /// An object's members, in document order. Duplicate keys are kept.
    Object(Box<[Member]>),
}

/// One key/value pair of an object.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    key: BString,
    value: Value,
}

impl Member {
    /// Creates a member from a key and a value.
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The decoded key.
    #[must_use]
    pub fn key(&self) -> &BStr {
        self.key.as_bstr()
    }

    /// The member's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the member's value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Splits the member into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (BString, Value) {
        (self.key, self.value)
    }
}

#[cold]
#[track_caller]
fn type_mismatch(expected: &str, found: ValueType) -> ! {
    panic!("expected a JSON {expected}, found {found}")
}

impl Value {
    /// Parses `input` into this value, releasing whatever it held before.
    ///
    /// On failure the value is left as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] describing why the document was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{ErrorKind, Value};
    ///
    /// let mut v = Value::from("old");
    /// assert_eq!(v.parse_from("[1, 2").unwrap_err().kind(), ErrorKind::MissCommaOrSquareBracket);
    /// assert!(v.is_null());
    /// ```
    pub fn parse_from(&mut self, input: impl AsRef<[u8]>) -> Result<(), ParseError> {
        self.free();
        *self = parse(input)?;
        Ok(())
    }

    /// The tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::False => ValueType::False,
            Self::True => ValueType::True,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is a [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is a [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if the value is `true` or `false`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// The number payload, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if any.
    #[must_use]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }

    /// The array elements, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object members, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// The boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `true` nor `false`.
    #[must_use]
    #[track_caller]
    pub fn boolean(&self) -> bool {
        match self.as_bool() {
            Some(b) => b,
            None => type_mismatch("boolean", self.value_type()),
        }
    }

    /// The number payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self.as_f64() {
            Some(n) => n,
            None => type_mismatch("number", self.value_type()),
        }
    }

    /// The string payload, including any embedded NUL bytes.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn string(&self) -> &BStr {
        match self.as_bstr() {
            Some(s) => s,
            None => type_mismatch("string", self.value_type()),
        }
    }

    /// Length of the string payload in bytes.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn string_len(&self) -> usize {
        self.string().len()
    }

    #[track_caller]
    fn elements(&self) -> &[Value] {
        match self.as_array() {
            Some(items) => items,
            None => type_mismatch("array", self.value_type()),
        }
    }

    #[track_caller]
    fn members(&self) -> &[Member] {
        match self.as_object() {
            Some(members) => members,
            None => type_mismatch("object", self.value_type()),
        }
    }

    #[track_caller]
    fn members_mut(&mut self) -> &mut [Member] {
        match self {
            Self::Object(members) => members,
            other => type_mismatch("object", other.value_type()),
        }
    }

    /// Number of elements in the array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn array_size(&self) -> usize {
        self.elements().len()
    }

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn array_element(&self, index: usize) -> &Value {
        &self.elements()[index]
    }

    /// Mutable access to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of bounds.
    #[track_caller]
    pub fn array_element_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Self::Array(items) => &mut items[index],
            other => type_mismatch("array", other.value_type()),
        }
    }

    /// Number of members in the object.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn object_size(&self) -> usize {
        self.members().len()
    }

    /// The key of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn object_key(&self, index: usize) -> &BStr {
        self.members()[index].key()
    }

    /// Length in bytes of the key of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn object_key_len(&self, index: usize) -> usize {
        self.object_key(index).len()
    }

    /// The value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn object_value(&self, index: usize) -> &Value {
        self.members()[index].value()
    }

    /// Mutable access to the value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of bounds.
    #[track_caller]
    pub fn object_value_mut(&mut self, index: usize) -> &mut Value {
        self.members_mut()[index].value_mut()
    }

    /// Index of the first member whose key equals `key`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn find_member_index(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        let key = key.as_ref();
        self.members().iter().position(|m| m.key.as_slice() == key)
    }

    /// Value of the first member whose key equals `key`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn find_member(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.find_member_index(key).map(|i| self.object_value(i))
    }

    /// Mutable value of the first member whose key equals `key`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn find_member_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value> {
        let index = self.find_member_index(key)?;
        Some(self.object_value_mut(index))
    }

    /// Releases the payload and resets the value to [`Value::Null`].
    ///
    /// Containers release every descendant. Calling this on `Null` does
    /// nothing.
    pub fn free(&mut self) {
        *self = Self::Null;
    }

    /// Moves the value out, leaving [`Value::Null`] in its place.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Same as [`free`](Self::free).
    pub fn set_null(&mut self) {
        self.free();
    }

    /// Replaces the value with `true` or `false`.
    pub fn set_boolean(&mut self, b: bool) {
        self.free();
        *self = Self::from(b);
    }

    /// Replaces the value with a number.
    pub fn set_number(&mut self, n: f64) {
        self.free();
        *self = Self::Number(n);
    }

    /// Replaces the value with a copy of `bytes` as a string.
    pub fn set_string(&mut self, bytes: impl AsRef<[u8]>) {
        self.free();
        *self = Self::String(BString::from(bytes.as_ref()));
    }

    /// Replaces the value with an array that takes ownership of `items`.
    pub fn set_array(&mut self, items: Vec<Value>) {
        self.free();
        *self = Self::Array(items.into_boxed_slice());
    }

    /// Replaces the value with an object that takes ownership of `members`.
    pub fn set_object(&mut self, members: Vec<Member>) {
        self.free();
        *self = Self::Object(members.into_boxed_slice());
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v.into_boxed_slice())
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v.into_boxed_slice())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
