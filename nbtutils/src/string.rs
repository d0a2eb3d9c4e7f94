use std::{borrow::Borrow, convert::TryFrom, fmt, ops::Deref};

use crate::error::{Error, Result};

/// Maximum length of an NBT string, in UTF-16 code units.
pub(crate) const MAX_LEN: usize = u16::MAX as usize;

/// A string that fits the NBT length limit of 65535 UTF-16 code units. Used
/// both for String tags and for [`Compound`][`crate::Compound`] keys.
///
/// ```
/// use nbtutils::NbtString;
///
/// assert!(NbtString::new("a".repeat(65535)).is_ok());
/// assert!(NbtString::new("a".repeat(65536)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NbtString(String);

impl NbtString {
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        // Only strings with more bytes than the limit can be over it.
        if s.len() > MAX_LEN {
            let units = s.encode_utf16().count();
            if units > MAX_LEN {
                return Err(Error::string_too_long(units));
            }
        }
        Ok(Self(s))
    }

    /// Length in UTF-16 code units. This is the length the `data get` command
    /// reports for a string.
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NbtString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NbtString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a Compound be looked up by &str.
impl Borrow<str> for NbtString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NbtString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NbtString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NbtString> for String {
    fn from(s: NbtString) -> Self {
        s.0
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for NbtString {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let s: String = u.arbitrary()?;
        Self::new(s).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
