//! This module contains the binary NBT encoder. Use [`to_bytes`] or
//! [`to_writer`].
//!
//! The output is the payload of the root tag only, with no leading type byte
//! or name. NBT files conventionally wrap the root in a named header, which
//! [`to_named_writer`] produces.
//!
//! All numbers are big-endian. Strings are prefixed with their length in
//! bytes as an unsigned 16 bit integer and are written in modified UTF-8
//! (CESU-8). Arrays and lists are prefixed with their element count as a
//! signed 32 bit integer.
//!
//! ```
//! use nbtutils::{nbt, to_bytes};
//!
//! let bytes = to_bytes(&nbt!({ "a": 1_i16 })).unwrap();
//! assert_eq!(bytes, [2, 0, 1, b'a', 0, 1, 0]);
//! ```
mod write_nbt;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::trace;

use crate::error::Result;
use crate::{Compound, List, Tag, TagType};

use self::write_nbt::WriteNbt;

/// Encode the payload of `tag` into a new vector.
pub fn to_bytes(tag: &Tag) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_writer(tag, &mut out)?;
    Ok(out)
}

/// Encode the payload of `tag` to `writer`, returning the number of bytes
/// written. End tags write nothing.
///
/// On error some bytes may already have been written.
pub fn to_writer<W: Write>(tag: &Tag, mut writer: W) -> Result<usize> {
    write_payload(&mut writer, tag)
}

/// Encode `tag` as a named root: its type byte, `name` as a string payload,
/// then the payload. This is the layout of an uncompressed NBT file.
pub fn to_named_writer<W: Write>(name: &str, tag: &Tag, mut writer: W) -> Result<usize> {
    let mut n = writer.write_tag(tag.tag_type())?;
    n += writer.write_size_prefixed_str(name)?;
    n += write_payload(&mut writer, tag)?;
    Ok(n)
}

fn write_payload<W: Write>(writer: &mut W, tag: &Tag) -> Result<usize> {
    Ok(match tag {
        Tag::End => 0,
        Tag::Byte(v) => {
            writer.write_i8(*v)?;
            1
        }
        Tag::Short(v) => {
            writer.write_i16::<BigEndian>(*v)?;
            2
        }
        Tag::Int(v) => {
            writer.write_i32::<BigEndian>(*v)?;
            4
        }
        Tag::Long(v) => {
            writer.write_i64::<BigEndian>(*v)?;
            8
        }
        Tag::Float(v) => {
            writer.write_f32::<BigEndian>(*v)?;
            4
        }
        Tag::Double(v) => {
            writer.write_f64::<BigEndian>(*v)?;
            8
        }
        Tag::ByteArray(arr) => {
            let n = writer.write_len(arr.len())?;
            // Safe to treat [i8] as [u8].
            let data = unsafe { &*(&**arr as *const [i8] as *const [u8]) };
            writer.write_all(data)?;
            n + data.len()
        }
        Tag::String(s) => writer.write_size_prefixed_str(s)?,
        Tag::List(list) => write_list(writer, list)?,
        Tag::Compound(compound) => write_compound(writer, compound)?,
        Tag::IntArray(arr) => {
            let n = writer.write_len(arr.len())?;
            for v in arr.iter() {
                writer.write_i32::<BigEndian>(*v)?;
            }
            n + 4 * arr.len()
        }
        Tag::LongArray(arr) => {
            let n = writer.write_len(arr.len())?;
            for v in arr.iter() {
                writer.write_i64::<BigEndian>(*v)?;
            }
            n + 8 * arr.len()
        }
    })
}

fn write_list<W: Write>(writer: &mut W, list: &List) -> Result<usize> {
    // An empty list has no element type, End stands in for it.
    let element_type = list.element_type().unwrap_or(TagType::End);
    trace!("list of {} {:?}", list.len(), element_type);

    let mut n = writer.write_tag(element_type)?;
    n += writer.write_len(list.len())?;
    for element in list.iter() {
        n += write_payload(writer, element)?;
    }
    Ok(n)
}

fn write_compound<W: Write>(writer: &mut W, compound: &Compound) -> Result<usize> {
    let mut n = 0;
    for (key, value) in compound.iter() {
        n += writer.write_tag(value.tag_type())?;
        n += writer.write_size_prefixed_str(key)?;
        n += write_payload(writer, value)?;
    }
    n += writer.write_tag(TagType::End)?;
    Ok(n)
}
