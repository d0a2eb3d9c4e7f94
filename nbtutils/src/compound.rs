use indexmap::{map, IndexMap};

use crate::{error::Result, NbtString, Tag};

/// NBT Compound: a map from string keys to tags that remembers the order keys
/// were first inserted. Both encoders write entries in that order.
///
/// Re-inserting an existing key replaces its value but keeps its position.
///
/// ```
/// use nbtutils::{Compound, Tag};
///
/// let mut c = Compound::new();
/// c.insert("b", Tag::Int(1)).unwrap();
/// c.insert("a", Tag::Int(2)).unwrap();
/// c.insert("b", Tag::Int(3)).unwrap();
///
/// let keys: Vec<&str> = c.keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(c.get("b"), Some(&Tag::Int(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<NbtString, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value of the key. Fails if the
    /// key is over the NBT string length limit.
    pub fn insert(&mut self, key: impl Into<String>, value: Tag) -> Result<Option<Tag>> {
        let key = NbtString::new(key)?;
        Ok(self.entries.insert(key, value))
    }

    /// Get the value of `key`, inserting `default` first if the key is
    /// missing.
    pub fn get_or_insert(&mut self, key: impl Into<String>, default: Tag) -> Result<&mut Tag> {
        let key = NbtString::new(key)?;
        Ok(self.entries.entry(key).or_insert(default))
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    /// Values of a compound are unconstrained, so unlike [`List`][`crate::List`]
    /// a compound hands out mutable access to them.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.shift_remove(key)
    }

    /// Overlay every entry of `other` onto this compound. Existing keys keep
    /// their position, new keys are appended in `other`'s order.
    pub fn extend_from(&mut self, other: &Compound) {
        for (k, v) in other.iter() {
            self.entries.insert(k.clone(), v.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, NbtString, Tag> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> map::IterMut<'_, NbtString, Tag> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> map::Keys<'_, NbtString, Tag> {
        self.entries.keys()
    }

    pub fn values(&self) -> map::Values<'_, NbtString, Tag> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(NbtString, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (NbtString, Tag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Compound {
    type Item = (NbtString, Tag);
    type IntoIter = map::IntoIter<NbtString, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a NbtString, &'a Tag);
    type IntoIter = map::Iter<'a, NbtString, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::ops::Index<&str> for Compound {
    type Output = Tag;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &str) -> &Tag {
        &self.entries[key]
    }
}
