//! nbtutils models the NBT (Named Binary Tag) format used by *Minecraft: Java
//! Edition* to store world data, player inventories and the like.
//!
//! * For the value model see [`Tag`] and its containers [`List`],
//!   [`Compound`], [`ByteArray`], [`IntArray`] and [`LongArray`].
//! * For the binary encoder see [`ser`].
//! * For the stringified (SNBT) encoder see [`snbt`].
//! * For `data get` / `data merge` style access see [`data`] and [`NbtPath`].
//!
//! # Quick example
//!
//! ```
//! use nbtutils::{data, nbt, NbtPath};
//!
//! let player = nbt!({
//!     "Health": 20.0_f32,
//!     "Inventory": [
//!         { "id": "minecraft:stone", "Count": 64_i8 },
//!         { "id": "minecraft:dirt", "Count": 3_i8 },
//!     ],
//! });
//!
//! let path: NbtPath = "Inventory[-1].Count".parse().unwrap();
//! let res = data::get(&player, &path, 1.0);
//! assert!(res.success);
//! assert_eq!(res.result, 3);
//!
//! assert_eq!(
//!     player.to_string(),
//!     r#"{Health:20.0f,Inventory:[{id:"minecraft:stone",Count:64b},{id:"minecraft:dirt",Count:3b}]}"#
//! );
//!
//! let bytes = nbtutils::to_bytes(&player).unwrap();
//! assert_eq!(bytes[0], 5); // Float tag of the first entry.
//! ```
//!
//! # Strings
//!
//! NBT strings are limited to 65535 UTF-16 code units, and are written in
//! modified UTF-8 (CESU-8), where characters outside the basic multilingual
//! plane are written as two 3-byte surrogate sequences instead of one 4-byte
//! sequence. [`NbtString`] enforces the limit when it is built.

#[macro_use]
mod macros;

pub mod data;
pub mod error;
pub mod path;
pub mod ser;
pub mod snbt;

mod arrays;
mod compound;
mod list;
mod string;
mod tag;

pub use arrays::*;
pub use compound::Compound;
pub use data::DataOperationResult;
pub use list::List;
pub use path::{NbtPath, PathComponent};
pub use ser::{to_bytes, to_writer};
pub use string::NbtString;
pub use tag::{Tag, WrappingFrom};

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// The type of an NBT tag. This does not carry the value of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change.
impl TryFrom<u8> for TagType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use TagType::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        match tag {
            TagType::End => 0,
            TagType::Byte => 1,
            TagType::Short => 2,
            TagType::Int => 3,
            TagType::Long => 4,
            TagType::Float => 5,
            TagType::Double => 6,
            TagType::ByteArray => 7,
            TagType::String => 8,
            TagType::List => 9,
            TagType::Compound => 10,
            TagType::IntArray => 11,
            TagType::LongArray => 12,
        }
    }
}
