//! Contains the Error and Result type used throughout the crate.
use std::fmt::Display;

/// The broad category an [`Error`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value broke a type, width, length or homogeneity invariant while
    /// being constructed or mutated.
    Validation,
    /// A tree could not be represented in the output format, eg a length that
    /// does not fit its length prefix.
    Encoding,
    /// The sink being written to failed.
    Io,
    /// A path string was malformed.
    Parse,
}

/// Various errors that can occur when building, encoding or addressing NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::bespoke(ErrorKind::Encoding, msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::bespoke(ErrorKind::Io, format!("io error: {}", e))
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn string_too_long(len: usize) -> Error {
        Error::bespoke(
            ErrorKind::Validation,
            format!(
                "string is {} UTF-16 units long, the limit is {}",
                len,
                crate::string::MAX_LEN
            ),
        )
    }

    pub(crate) fn list_type_mismatch(expected: crate::TagType, found: crate::TagType) -> Error {
        Error::bespoke(
            ErrorKind::Validation,
            format!(
                "list holds {:?} elements, cannot admit a {:?}",
                expected, found
            ),
        )
    }

    pub(crate) fn float_out_of_range(v: f64) -> Error {
        Error::bespoke(
            ErrorKind::Validation,
            format!("float too large to store in 32 bits: {}", v),
        )
    }

    pub(crate) fn index_out_of_range(index: i32, len: usize) -> Error {
        Error::bespoke(
            ErrorKind::Validation,
            format!("index {} out of range for length {}", index, len),
        )
    }

    pub(crate) fn string_bytes_too_long(len: usize) -> Error {
        Error::bespoke(
            ErrorKind::Encoding,
            format!(
                "encoded string is {} bytes, the length prefix allows {}",
                len,
                u16::MAX
            ),
        )
    }

    pub(crate) fn len_too_large(len: usize) -> Error {
        Error::bespoke(
            ErrorKind::Encoding,
            format!("len too large for a 32 bit length prefix: {}", len),
        )
    }

    pub(crate) fn invalid_path(input: &str, pos: usize) -> Error {
        Error::bespoke(
            ErrorKind::Parse,
            format!("invalid path at {}: {:?}", pos, input),
        )
    }

    pub(crate) fn bespoke(kind: ErrorKind, msg: String) -> Error {
        Error { kind, msg }
    }
}
