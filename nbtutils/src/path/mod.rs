//! Paths address a tag inside a tree, in the style of the game's
//! `data get entity @s Inventory[0].tag` commands.
//!
//! A path is a sequence of components, each either a compound key or a
//! list/array index. Negative indices count back from the end, `-1` being the
//! last element.
//!
//! Paths have a string form, `Foo[1].bar[-2]."Baz "`:
//!
//! * a bare key, or `.key` after the first component,
//! * `[n]` for an index,
//! * a double quoted, escaped key when the key is empty or contains any of
//!   `{}[]."'` or a space.
//!
//! The root path is written `{}`.
//!
//! ```
//! use nbtutils::{NbtPath, PathComponent};
//!
//! let path: NbtPath = r#"Foo[1].bar[-2]."Baz ""#.parse().unwrap();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path[2], PathComponent::from("bar"));
//! assert_eq!(path.get_signed(-2), Some(&PathComponent::Index(-2)));
//! assert_eq!(path.to_string(), r#"Foo[1].bar[-2]."Baz ""#);
//! ```
mod parser;

use std::{
    fmt,
    ops::{Bound, Deref, RangeBounds},
    str::FromStr,
};

use crate::error::{Error, Result};

/// Resolve a possibly negative index against a length. Negative indices count
/// back from the end. `None` if the index is out of range either way.
pub fn resolve_index(len: usize, index: i32) -> Option<usize> {
    let i = if index < 0 {
        len.checked_sub(index.unsigned_abs() as usize)?
    } else {
        index as usize
    };
    (i < len).then_some(i)
}

/// A single step of an [`NbtPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// Key of a compound entry.
    Key(String),
    /// Index into a list or array.
    Index(i32),
}

impl From<&str> for PathComponent {
    fn from(key: &str) -> Self {
        PathComponent::Key(key.to_owned())
    }
}

impl From<String> for PathComponent {
    fn from(key: String) -> Self {
        PathComponent::Key(key)
    }
}

impl From<i32> for PathComponent {
    fn from(index: i32) -> Self {
        PathComponent::Index(index)
    }
}

/// An immutable sequence of [`PathComponent`]s. The empty path is the root and
/// addresses the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NbtPath {
    components: Vec<PathComponent>,
}

impl NbtPath {
    pub fn new<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<PathComponent>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Get a component, negative indices count back from the end.
    pub fn get_signed(&self, index: i32) -> Option<&PathComponent> {
        resolve_index(self.components.len(), index).map(|i| &self.components[i])
    }

    /// A sub-path. Bounds past the end are clamped, so this never panics.
    ///
    /// ```
    /// use nbtutils::NbtPath;
    ///
    /// let path = NbtPath::new(["a", "b", "c"]);
    /// assert_eq!(path.slice(1..), NbtPath::new(["b", "c"]));
    /// assert!(path.slice(5..).is_root());
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> NbtPath {
        let len = self.components.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return NbtPath::root();
        }
        Self {
            components: self.components[start..end].to_vec(),
        }
    }

    /// The path with its components in reverse order.
    pub fn reversed(&self) -> NbtPath {
        self.components.iter().rev().cloned().collect()
    }
}

impl Deref for NbtPath {
    type Target = [PathComponent];

    fn deref(&self) -> &Self::Target {
        &self.components
    }
}

impl From<Vec<PathComponent>> for NbtPath {
    fn from(components: Vec<PathComponent>) -> Self {
        Self { components }
    }
}

impl FromIterator<PathComponent> for NbtPath {
    fn from_iter<I: IntoIterator<Item = PathComponent>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NbtPath {
    type Item = &'a PathComponent;
    type IntoIter = std::slice::Iter<'a, PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|c| matches!(c, '{' | '}' | '[' | ']' | '.' | '\'' | '"' | ' '))
}

impl fmt::Display for NbtPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("{}");
        }
        for (i, component) in self.components.iter().enumerate() {
            match component {
                PathComponent::Index(index) => write!(f, "[{}]", index)?,
                PathComponent::Key(key) => {
                    if i != 0 {
                        f.write_str(".")?;
                    }
                    if needs_quotes(key) {
                        f.write_str("\"")?;
                        for c in key.chars() {
                            if c == '"' || c == '\\' {
                                f.write_str("\\")?;
                            }
                            write!(f, "{}", c)?;
                        }
                        f.write_str("\"")?;
                    } else {
                        f.write_str(key)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl FromStr for NbtPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_path(s)
    }
}
