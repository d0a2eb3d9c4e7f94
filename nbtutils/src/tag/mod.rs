mod ser;

use std::{convert::TryFrom, fmt};

use crate::{
    error::{Error, Result},
    ByteArray, Compound, IntArray, List, LongArray, NbtString, TagType,
};

/// Tag is a complete NBT value: a [`TagType`] paired with a value of the
/// matching representation. Compounds and Lists nest further tags.
///
/// Every variant's payload carries its own invariants (string length, list
/// homogeneity), so any `Tag` that exists is valid to encode.
///
/// ```
/// use nbtutils::{Tag, TagType};
///
/// assert_eq!(Tag::byte(333), Tag::Byte(77));
/// assert_eq!(Tag::new(TagType::Int), Tag::Int(0));
/// assert_eq!(Tag::Short(3).tag_type(), TagType::Short);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tag {
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(NbtString),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

/// Two's complement wraparound conversion: the value is reduced modulo
/// 2<sup>width</sup> then read back as a signed integer. This is exactly what
/// an `as` cast between Rust integers does.
///
/// ```
/// use nbtutils::WrappingFrom;
///
/// assert_eq!(i8::wrapping_from(333), 77);
/// assert_eq!(i16::wrapping_from(40000u32), -25536);
/// assert_eq!(i8::wrapping_from(true), 1);
/// ```
pub trait WrappingFrom<T>: Sized {
    fn wrapping_from(value: T) -> Self;
}

macro_rules! wrapping_from {
    ($target:ty => $($source:ty)*) => {
        $(
            impl WrappingFrom<$source> for $target {
                fn wrapping_from(value: $source) -> Self {
                    value as $target
                }
            }
        )*

        impl WrappingFrom<bool> for $target {
            fn wrapping_from(value: bool) -> Self {
                value as $target
            }
        }
    };
}

wrapping_from!(i8 => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
wrapping_from!(i16 => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
wrapping_from!(i32 => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
wrapping_from!(i64 => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Tag {
    /// The default valued tag of the given type: zero, the empty string, or
    /// an empty container.
    pub fn new(tag_type: TagType) -> Self {
        match tag_type {
            TagType::End => Tag::End,
            TagType::Byte => Tag::Byte(0),
            TagType::Short => Tag::Short(0),
            TagType::Int => Tag::Int(0),
            TagType::Long => Tag::Long(0),
            TagType::Float => Tag::Float(0.0),
            TagType::Double => Tag::Double(0.0),
            TagType::ByteArray => Tag::ByteArray(ByteArray::default()),
            TagType::String => Tag::String(NbtString::default()),
            TagType::List => Tag::List(List::default()),
            TagType::Compound => Tag::Compound(Compound::default()),
            TagType::IntArray => Tag::IntArray(IntArray::default()),
            TagType::LongArray => Tag::LongArray(LongArray::default()),
        }
    }

    pub fn byte<T>(value: T) -> Self
    where
        i8: WrappingFrom<T>,
    {
        Tag::Byte(i8::wrapping_from(value))
    }

    pub fn short<T>(value: T) -> Self
    where
        i16: WrappingFrom<T>,
    {
        Tag::Short(i16::wrapping_from(value))
    }

    pub fn int<T>(value: T) -> Self
    where
        i32: WrappingFrom<T>,
    {
        Tag::Int(i32::wrapping_from(value))
    }

    pub fn long<T>(value: T) -> Self
    where
        i64: WrappingFrom<T>,
    {
        Tag::Long(i64::wrapping_from(value))
    }

    /// Narrow a double to single precision. Finite values beyond the range of
    /// `f32` are rejected rather than becoming infinite.
    pub fn float(value: f64) -> Result<Self> {
        let narrowed = value as f32;
        if narrowed.is_infinite() && value.is_finite() {
            return Err(Error::float_out_of_range(value));
        }
        Ok(Tag::Float(narrowed))
    }

    pub fn double(value: f64) -> Self {
        Tag::Double(value)
    }

    pub fn string(value: impl Into<String>) -> Result<Self> {
        Ok(Tag::String(NbtString::new(value)?))
    }

    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl From<TagType> for Tag {
    fn from(tag_type: TagType) -> Self {
        Tag::new(tag_type)
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(NbtString, String);
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl TryFrom<&str> for Tag {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Tag::string(value)
    }
}

impl TryFrom<String> for Tag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Tag::string(value)
    }
}

impl TryFrom<&String> for Tag {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Tag::string(value.as_str())
    }
}

impl fmt::Display for Tag {
    /// Formats the tag as SNBT.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = crate::snbt::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

// Lists need every element to have the same type, so a list is built from a
// single arbitrary type and only produces values of it.
#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    let element_type: TagType = u.arbitrary()?;
    let len = u.arbitrary_len::<u8>()?;
    let mut list = List::new();
    for _ in 0..len {
        let element = arb_of_type(u, element_type)?;
        list.push(element)
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
    }
    Ok(list)
}

#[cfg(feature = "arbitrary1")]
fn arb_of_type(u: &mut arbitrary::Unstructured, tag_type: TagType) -> arbitrary::Result<Tag> {
    Ok(match tag_type {
        TagType::End => Tag::End,
        TagType::Byte => Tag::Byte(u.arbitrary()?),
        TagType::Short => Tag::Short(u.arbitrary()?),
        TagType::Int => Tag::Int(u.arbitrary()?),
        TagType::Long => Tag::Long(u.arbitrary()?),
        TagType::Float => Tag::Float(u.arbitrary()?),
        TagType::Double => Tag::Double(u.arbitrary()?),
        TagType::ByteArray => Tag::ByteArray(u.arbitrary()?),
        TagType::String => Tag::String(u.arbitrary()?),
        TagType::List => Tag::List(arb_list(u)?),
        TagType::Compound => {
            let mut compound = Compound::new();
            let len = u.arbitrary_len::<u8>()?;
            for _ in 0..len {
                let key: NbtString = u.arbitrary()?;
                let value: Tag = u.arbitrary()?;
                compound
                    .insert(key, value)
                    .map_err(|_| arbitrary::Error::IncorrectFormat)?;
            }
            Tag::Compound(compound)
        }
        TagType::IntArray => Tag::IntArray(u.arbitrary()?),
        TagType::LongArray => Tag::LongArray(u.arbitrary()?),
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag_type: TagType = u.arbitrary()?;
        arb_of_type(u, tag_type)
    }
}
