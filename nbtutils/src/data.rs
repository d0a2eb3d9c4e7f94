//! Data operations over tag trees, following the game's `data` command.
//!
//! * [`get`] reads the tag at a path and computes the command's integer
//!   result from it.
//! * [`merge`] overlays one compound onto another.
//!
//! A path that does not resolve is an expected outcome rather than an error,
//! so both report it as a [`DataOperationResult`] with `success` unset.
//!
//! The command's `modify` operation (append, insert, merge, remove and set at
//! a path) is not provided. It would sit alongside these functions, taking an
//! owned tree and returning the modified copy in the result.
//!
//! ```
//! use nbtutils::{data, nbt, NbtPath};
//!
//! let tag = nbt!({ "Pos": [1.5, 64.0, -3.25] });
//! let path: NbtPath = "Pos[2]".parse().unwrap();
//!
//! let res = data::get(&tag, &path, 100.0);
//! assert!(res.success);
//! assert_eq!(res.result, -325);
//! ```
use std::fmt;

use log::{debug, trace};

use crate::{NbtPath, PathComponent, Tag};

/// Outcome of a data operation. A failure always has `result` 0 and no tag.
#[derive(Debug, Clone, PartialEq)]
pub struct DataOperationResult {
    pub success: bool,
    /// The integer the command would report.
    pub result: i32,
    pub tag: Option<Tag>,
}

impl DataOperationResult {
    pub fn failure() -> Self {
        Self {
            success: false,
            result: 0,
            tag: None,
        }
    }

    /// Result of reading `tag`: its value for numbers, its length for strings
    /// and containers, 0 for End. The value is multiplied by `scale`, rounded,
    /// and clamped to the range of `i32`.
    ///
    /// Rounding is to the nearest integer with halves away from zero, as
    /// [`f64::round`] does, so `2.5` gives 3 and `-2.5` gives -3. The product
    /// is not truncated. A NaN product gives 0.
    pub fn of_tag(tag: Tag, scale: f64) -> Self {
        let magnitude = match &tag {
            Tag::End => None,
            Tag::Byte(v) => Some(*v as f64),
            Tag::Short(v) => Some(*v as f64),
            Tag::Int(v) => Some(*v as f64),
            Tag::Long(v) => Some(*v as f64),
            Tag::Float(v) => Some(*v as f64),
            Tag::Double(v) => Some(*v),
            Tag::ByteArray(v) => Some(v.len() as f64),
            Tag::String(v) => Some(v.utf16_len() as f64),
            Tag::List(v) => Some(v.len() as f64),
            Tag::Compound(v) => Some(v.len() as f64),
            Tag::IntArray(v) => Some(v.len() as f64),
            Tag::LongArray(v) => Some(v.len() as f64),
        };

        // Float to int casts saturate at the bounds of i32, and NaN becomes 0.
        let result = magnitude.map_or(0, |m| (scale * m).round() as i32);
        Self {
            success: true,
            result,
            tag: Some(tag),
        }
    }

    /// A successful result with an explicit count, wrapped into `i32`.
    pub fn of_count(count: i64, tag: Tag) -> Self {
        Self {
            success: true,
            result: count as i32,
            tag: Some(tag),
        }
    }
}

impl fmt::Display for DataOperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.tag, self.success) {
            (Some(tag), true) => write!(f, "{} {}", self.result, tag),
            (None, true) => write!(f, "{}", self.result),
            (_, false) => f.write_str("failure"),
        }
    }
}

/// Get the tag at `path` inside `tag`. The result's tag is a copy of the tag
/// found, and its `result` is computed as in [`DataOperationResult::of_tag`].
///
/// Indexing into a Byte, Int or Long array must be the last step of the path.
pub fn get(tag: &Tag, path: &NbtPath, scale: f64) -> DataOperationResult {
    let res = get_at(tag, path, scale);
    if !res.success {
        debug!("data get {} failed", path);
    }
    res
}

/// [`get`] with a scale of 1.
pub fn get_unscaled(tag: &Tag, path: &NbtPath) -> DataOperationResult {
    get(tag, path, 1.0)
}

fn get_at(tag: &Tag, path: &[PathComponent], scale: f64) -> DataOperationResult {
    let (first, rest) = match path.split_first() {
        Some(split) => split,
        None => return DataOperationResult::of_tag(tag.clone(), scale),
    };
    trace!("data get {:?} in {:?}", first, tag.tag_type());

    match first {
        PathComponent::Key(key) => match tag {
            Tag::Compound(compound) => match compound.get(key) {
                Some(value) => get_at(value, rest, scale),
                None => DataOperationResult::failure(),
            },
            Tag::End
            | Tag::Byte(_)
            | Tag::Short(_)
            | Tag::Int(_)
            | Tag::Long(_)
            | Tag::Float(_)
            | Tag::Double(_)
            | Tag::ByteArray(_)
            | Tag::String(_)
            | Tag::List(_)
            | Tag::IntArray(_)
            | Tag::LongArray(_) => DataOperationResult::failure(),
        },
        PathComponent::Index(index) => match tag {
            Tag::ByteArray(arr) => {
                array_element(rest, arr.get_signed(*index).map(Tag::Byte), scale)
            }
            Tag::IntArray(arr) => array_element(rest, arr.get_signed(*index).map(Tag::Int), scale),
            Tag::LongArray(arr) => {
                array_element(rest, arr.get_signed(*index).map(Tag::Long), scale)
            }
            Tag::List(list) => match list.get_signed(*index) {
                Some(element) => get_at(element, rest, scale),
                None => DataOperationResult::failure(),
            },
            Tag::End
            | Tag::Byte(_)
            | Tag::Short(_)
            | Tag::Int(_)
            | Tag::Long(_)
            | Tag::Float(_)
            | Tag::Double(_)
            | Tag::String(_)
            | Tag::Compound(_) => DataOperationResult::failure(),
        },
    }
}

// Array elements are scalars, so nothing can follow them in a path.
fn array_element(rest: &[PathComponent], element: Option<Tag>, scale: f64) -> DataOperationResult {
    match element {
        Some(element) if rest.is_empty() => DataOperationResult::of_tag(element, scale),
        _ => DataOperationResult::failure(),
    }
}

/// Merge two compounds into a new one. Entries of `other` replace entries of
/// `tag` with the same key; keys new to `tag` are appended in `other`'s order.
/// Neither input is modified. Fails unless both are compounds.
///
/// ```
/// use nbtutils::{data, nbt};
///
/// let res = data::merge(&nbt!({ "a": 1 }), &nbt!({ "a": 2, "b": 3 }));
/// assert_eq!(res.tag, Some(nbt!({ "a": 2, "b": 3 })));
/// assert_eq!(res.result, 1);
/// ```
pub fn merge(tag: &Tag, other: &Tag) -> DataOperationResult {
    match (tag, other) {
        (Tag::Compound(base), Tag::Compound(overlay)) => {
            let mut merged = base.clone();
            merged.extend_from(overlay);
            DataOperationResult::of_count(1, Tag::Compound(merged))
        }
        _ => {
            debug!(
                "data merge of {:?} into {:?} failed",
                other.tag_type(),
                tag.tag_type()
            );
            DataOperationResult::failure()
        }
    }
}
