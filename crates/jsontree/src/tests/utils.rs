//! Test-only JSON rendering.

use alloc::string::String;
use core::fmt::Write;

use bstr::ByteSlice;

use crate::Value;

/// Renders `value` as compact JSON text that the parser reads back as an equal
/// value.
///
/// Control characters are written as `\u00XX` and characters outside the Basic
/// Multilingual Plane as surrogate-pair escapes, so rendered documents also
/// exercise the escape decoder.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::False => out.push_str("false"),
        Value::True => out.push_str("true"),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => write_string(s.as_bytes(), out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(member.key(), out);
                out.push(':');
                write_value(member.value(), out);
            }
            out.push('}');
        }
    }
}

fn write_string(bytes: &[u8], out: &mut String) {
    out.push('"');
    for ch in bytes.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if (c as u32) > 0xFFFF => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[test]
fn render_escapes_controls_and_astral_chars() {
    let value = Value::from("a\"\\\u{1}\u{1D11E}é");
    assert_eq!(render(&value), r#""a\"\\\u0001\uD834\uDD1Eé""#);
}

#[test]
fn render_keeps_member_order() {
    let value = crate::parse(r#"{"b":[1,-0.5,true],"a":{},"b":null}"#).unwrap();
    assert_eq!(render(&value), r#"{"b":[1,-0.5,true],"a":{},"b":null}"#);
}
