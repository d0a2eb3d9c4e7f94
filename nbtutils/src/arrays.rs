use std::ops::Deref;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    path::resolve_index,
    WrappingFrom,
};

// The three array types only differ in their element type, so they are
// generated here rather than written out three times.
macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Build the array from any integers, wrapping each one into
            #[doc = concat!("`", stringify!($elem), "` the same way [`Tag`][`crate::Tag`]'s")]
            /// scalar constructors do.
            pub fn from_wrapping<I, V>(values: I) -> Self
            where
                I: IntoIterator<Item = V>,
                $elem: WrappingFrom<V>,
            {
                Self {
                    data: values.into_iter().map(<$elem>::wrapping_from).collect(),
                }
            }

            /// Get an element, negative indices count back from the end.
            pub fn get_signed(&self, index: i32) -> Option<$elem> {
                resolve_index(self.data.len(), index).map(|i| self.data[i])
            }

            pub fn push(&mut self, value: $elem) {
                self.data.push(value);
            }

            /// Insert before `index`. An index equal to the length appends.
            pub fn insert(&mut self, index: usize, value: $elem) -> Result<()> {
                if index > self.data.len() {
                    return Err(Error::index_out_of_range(
                        i32::try_from(index).unwrap_or(i32::MAX),
                        self.data.len(),
                    ));
                }
                self.data.insert(index, value);
                Ok(())
            }

            /// Replace the element at `index`, returning the old one.
            pub fn set(&mut self, index: i32, value: $elem) -> Result<$elem> {
                let i = resolve_index(self.data.len(), index)
                    .ok_or_else(|| Error::index_out_of_range(index, self.data.len()))?;
                Ok(std::mem::replace(&mut self.data[i], value))
            }

            pub fn remove(&mut self, index: i32) -> Result<$elem> {
                let i = resolve_index(self.data.len(), index)
                    .ok_or_else(|| Error::index_out_of_range(index, self.data.len()))?;
                Ok(self.data.remove(i))
            }

            pub fn clear(&mut self) {
                self.data.clear();
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl Extend<$elem> for $name {
            fn extend<I: IntoIterator<Item = $elem>>(&mut self, iter: I) {
                self.data.extend(iter);
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = std::vec::IntoIter<$elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $elem;
            type IntoIter = std::slice::Iter<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.data.serialize(serializer)
            }
        }
    };
}

nbt_array!(
    /// NBT ByteArray. Each element is a signed byte.
    ///
    /// ```
    /// use nbtutils::ByteArray;
    ///
    /// let bytes = ByteArray::from_wrapping([-129, 1, 0]);
    /// assert_eq!(&*bytes, &[127, 1, 0]);
    /// ```
    ByteArray,
    i8
);

nbt_array!(
    /// NBT IntArray. Each element is a 32 bit signed integer.
    IntArray,
    i32
);

nbt_array!(
    /// NBT LongArray. Each element is a 64 bit signed integer.
    LongArray,
    i64
);
