use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::TagType;

/// Primitive writes shared by the binary encoder. Each returns the number of
/// bytes written.
pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: TagType) -> Result<usize> {
        self.write_u8(tag as u8)?;
        Ok(1)
    }

    /// Write a string payload: big-endian byte length then the modified UTF-8
    /// bytes.
    fn write_size_prefixed_str(&mut self, s: &str) -> Result<usize> {
        let bytes = cesu8::to_cesu8(s);
        let len_bytes: u16 = bytes
            .len()
            .try_into()
            .map_err(|_| Error::string_bytes_too_long(bytes.len()))?;
        self.write_u16::<BigEndian>(len_bytes)?;
        self.write_all(&bytes)?;
        Ok(2 + bytes.len())
    }

    /// Write a signed 32 bit length prefix.
    fn write_len(&mut self, len: usize) -> Result<usize> {
        let len: i32 = len.try_into().map_err(|_| Error::len_too_large(len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(4)
    }
}

impl<T> WriteNbt for T where T: Write {}
