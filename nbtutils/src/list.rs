use std::{convert::TryFrom, ops::Deref};

use log::debug;

use crate::{
    error::{Error, Result},
    path::resolve_index,
    Tag, TagType,
};

/// NBT List. Every element has the same [`TagType`], established by the first
/// element. An empty list has no element type and accepts any tag.
///
/// Read access is through `Deref<Target = [Tag]>`. Every mutation goes
/// through a check against the established element type, so there is no way
/// to get a `&mut Tag` to an element directly; use [`List::update`].
///
/// ```
/// use nbtutils::{List, Tag};
///
/// let mut list = List::new();
/// list.push(Tag::Int(1)).unwrap();
/// assert!(list.push(Tag::Byte(1)).is_err());
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    elements: Vec<Tag>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type of the elements, `None` if the list is empty.
    pub fn element_type(&self) -> Option<TagType> {
        self.elements.first().map(Tag::tag_type)
    }

    fn check(&self, tag_type: TagType) -> Result<()> {
        match self.element_type() {
            Some(expected) if expected != tag_type => {
                debug!("rejected {:?} for list of {:?}", tag_type, expected);
                Err(Error::list_type_mismatch(expected, tag_type))
            }
            _ => Ok(()),
        }
    }

    fn resolve(&self, index: i32) -> Result<usize> {
        resolve_index(self.elements.len(), index)
            .ok_or_else(|| Error::index_out_of_range(index, self.elements.len()))
    }

    pub fn push(&mut self, tag: Tag) -> Result<()> {
        self.check(tag.tag_type())?;
        self.elements.push(tag);
        Ok(())
    }

    /// Insert before `index`. An index equal to the length appends.
    pub fn insert(&mut self, index: usize, tag: Tag) -> Result<()> {
        self.check(tag.tag_type())?;
        if index > self.elements.len() {
            return Err(Error::index_out_of_range(
                i32::try_from(index).unwrap_or(i32::MAX),
                self.elements.len(),
            ));
        }
        self.elements.insert(index, tag);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one. Negative indices
    /// count back from the end.
    pub fn set(&mut self, index: i32, tag: Tag) -> Result<Tag> {
        self.check(tag.tag_type())?;
        let i = self.resolve(index)?;
        Ok(std::mem::replace(&mut self.elements[i], tag))
    }

    /// Append every tag, or none of them if any has the wrong type.
    pub fn extend<I>(&mut self, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = Tag>,
    {
        let tags: Vec<Tag> = tags.into_iter().collect();
        let first = tags.first().map(Tag::tag_type);
        let expected = match self.element_type().or(first) {
            Some(t) => t,
            None => return Ok(()),
        };
        if let Some(bad) = tags.iter().find(|t| t.tag_type() != expected) {
            debug!("rejected {:?} for list of {:?}", bad.tag_type(), expected);
            return Err(Error::list_type_mismatch(expected, bad.tag_type()));
        }
        self.elements.extend(tags);
        Ok(())
    }

    /// Modify an element in place. If `f` changes the type of the element the
    /// element is restored and an error returned.
    ///
    /// ```
    /// use nbtutils::{nbt, List, Tag};
    ///
    /// let mut list = List::try_from(vec![nbt!({ "a": 1 })]).unwrap();
    /// list.update(0, |tag| {
    ///     tag.as_compound_mut().unwrap().insert("b", Tag::Int(2)).unwrap();
    /// })
    /// .unwrap();
    /// assert_eq!(list[0], nbt!({ "a": 1, "b": 2 }));
    ///
    /// assert!(list.update(0, |tag| *tag = Tag::Int(3)).is_err());
    /// assert_eq!(list[0], nbt!({ "a": 1, "b": 2 }));
    /// ```
    pub fn update<F, R>(&mut self, index: i32, f: F) -> Result<R>
    where
        F: FnOnce(&mut Tag) -> R,
    {
        let i = self.resolve(index)?;
        let expected = self.elements[i].tag_type();
        let original = self.elements[i].clone();
        let r = f(&mut self.elements[i]);

        let found = self.elements[i].tag_type();
        if found != expected {
            self.elements[i] = original;
            debug!("rejected update changing {:?} to {:?}", expected, found);
            return Err(Error::list_type_mismatch(expected, found));
        }
        Ok(r)
    }

    pub fn remove(&mut self, index: i32) -> Result<Tag> {
        let i = self.resolve(index)?;
        Ok(self.elements.remove(i))
    }

    pub fn pop(&mut self) -> Option<Tag> {
        self.elements.pop()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Get an element, negative indices count back from the end.
    pub fn get_signed(&self, index: i32) -> Option<&Tag> {
        resolve_index(self.elements.len(), index).map(|i| &self.elements[i])
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.elements
    }
}

impl Deref for List {
    type Target = [Tag];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl TryFrom<Vec<Tag>> for List {
    type Error = Error;

    fn try_from(tags: Vec<Tag>) -> Result<Self> {
        let mut list = List::new();
        list.extend(tags)?;
        Ok(list)
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
