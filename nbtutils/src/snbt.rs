//! This module contains the stringified NBT (SNBT) encoder, the textual form
//! used by commands such as `/data get`. Use [`to_string`] for text, or
//! [`to_writer`] to write bytes to a sink.
//!
//! * Numbers carry a type suffix: `1b`, `1s`, `1`, `1L`, `1.5f`, `1.5d`.
//! * Arrays carry a type prefix: `[B;1b,2b]`, `[I;1,2]`, `[L;1L,2L]`.
//! * Strings are double quoted, with `"` and `\` escaped.
//! * Compound keys are bare if they are non-empty and made of
//!   `[0-9A-Za-z_.+-]`, otherwise quoted like strings.
//!
//! ```
//! use nbtutils::{nbt, snbt};
//!
//! let tag = nbt!({
//!     "foo": true,
//!     "bar!!!": "baz",
//!     "": ["E", "M", "P", "T", "Y"],
//! });
//! assert_eq!(
//!     snbt::to_string(&tag).unwrap(),
//!     r#"{foo:1b,"bar!!!":"baz","":["E","M","P","T","Y"]}"#
//! );
//! ```
use std::io::Write;

use crate::{
    error::{Error, ErrorKind, Result},
    Compound, List, Tag,
};

/// Write `tag` as SNBT to a byte sink, returning the number of bytes written.
///
/// Strings are written in modified UTF-8 (CESU-8), like the binary format:
/// characters outside the basic multilingual plane become two 3-byte
/// surrogate sequences.
pub fn to_writer<W: Write>(tag: &Tag, writer: W) -> Result<usize> {
    let mut ser = Serializer {
        writer,
        modified_utf8: true,
    };
    ser.write_tag(tag)
}

/// Encode `tag` as SNBT bytes in modified UTF-8.
pub fn to_vec(tag: &Tag) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_writer(tag, &mut out)?;
    Ok(out)
}

/// Encode `tag` as an SNBT string. Unlike [`to_writer`] strings are kept in
/// standard UTF-8, since a Rust string cannot hold surrogates.
pub fn to_string(tag: &Tag) -> Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer {
        writer: &mut out,
        modified_utf8: false,
    };
    ser.write_tag(tag)?;
    String::from_utf8(out)
        .map_err(|e| Error::bespoke(ErrorKind::Encoding, format!("snbt not utf-8: {}", e)))
}

/// Whether a compound key can be written without quotes.
pub(crate) fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'+'))
}

struct Serializer<W> {
    writer: W,
    modified_utf8: bool,
}

impl<W: Write> Serializer<W> {
    fn write_tag(&mut self, tag: &Tag) -> Result<usize> {
        match tag {
            Tag::End => Ok(0),
            Tag::Byte(v) => self.write_int(*v, "b"),
            Tag::Short(v) => self.write_int(*v, "s"),
            Tag::Int(v) => self.write_int(*v, ""),
            Tag::Long(v) => self.write_int(*v, "L"),
            Tag::Float(v) => {
                let mut buffer = ryu::Buffer::new();
                let s = buffer.format(*v);
                Ok(self.write_raw(s.as_bytes())? + self.write_raw(b"f")?)
            }
            Tag::Double(v) => {
                let mut buffer = ryu::Buffer::new();
                let s = buffer.format(*v);
                Ok(self.write_raw(s.as_bytes())? + self.write_raw(b"d")?)
            }
            Tag::ByteArray(arr) => self.write_array("B", arr.iter().copied(), "b"),
            Tag::IntArray(arr) => self.write_array("I", arr.iter().copied(), ""),
            Tag::LongArray(arr) => self.write_array("L", arr.iter().copied(), "L"),
            Tag::String(s) => self.write_escaped_str(s),
            Tag::List(list) => self.write_list(list),
            Tag::Compound(compound) => self.write_compound(compound),
        }
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<usize> {
        self.writer.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn write_text(&mut self, s: &str) -> Result<usize> {
        if self.modified_utf8 {
            let bytes = cesu8::to_cesu8(s);
            self.write_raw(&bytes)
        } else {
            self.write_raw(s.as_bytes())
        }
    }

    fn write_int<I: itoa::Integer>(&mut self, v: I, suffix: &str) -> Result<usize> {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(v);
        Ok(self.write_raw(s.as_bytes())? + self.write_raw(suffix.as_bytes())?)
    }

    fn write_array<I, T>(&mut self, prefix: &str, values: I, suffix: &str) -> Result<usize>
    where
        I: Iterator<Item = T>,
        T: itoa::Integer,
    {
        let mut n = self.write_raw(b"[")? + self.write_raw(prefix.as_bytes())?;
        n += self.write_raw(b";")?;
        for (i, v) in values.enumerate() {
            if i != 0 {
                n += self.write_raw(b",")?;
            }
            n += self.write_int(v, suffix)?;
        }
        Ok(n + self.write_raw(b"]")?)
    }

    fn write_escaped_str(&mut self, v: &str) -> Result<usize> {
        let mut n = self.write_raw(b"\"")?;
        let bytes = v.as_bytes();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if byte != b'"' && byte != b'\\' {
                continue;
            }
            if start < i {
                n += self.write_text(&v[start..i])?;
            }
            if byte == b'"' {
                n += self.write_raw(b"\\\"")?;
            } else {
                n += self.write_raw(b"\\\\")?;
            }
            start = i + 1;
        }
        if start != bytes.len() {
            n += self.write_text(&v[start..])?;
        }
        Ok(n + self.write_raw(b"\"")?)
    }

    fn write_list(&mut self, list: &List) -> Result<usize> {
        let mut n = self.write_raw(b"[")?;
        for (i, element) in list.iter().enumerate() {
            if i != 0 {
                n += self.write_raw(b",")?;
            }
            n += self.write_tag(element)?;
        }
        Ok(n + self.write_raw(b"]")?)
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<usize> {
        let mut n = self.write_raw(b"{")?;
        for (i, (key, value)) in compound.iter().enumerate() {
            if i != 0 {
                n += self.write_raw(b",")?;
            }
            if is_bare_key(key) {
                n += self.write_raw(key.as_bytes())?;
            } else {
                n += self.write_escaped_str(key)?;
            }
            n += self.write_raw(b":")?;
            n += self.write_tag(value)?;
        }
        Ok(n + self.write_raw(b"}")?)
    }
}
