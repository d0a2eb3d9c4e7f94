/// Produce a [`Tag`][`crate::Tag`] using
/// JSON/[SNBT](https://minecraft.wiki/w/NBT_format#SNBT_format)-like
/// syntax.
///
/// ```rust
/// use nbtutils::nbt;
/// let _ = nbt!({
///     "key1": "value1",
///     "key2": 42,
///     "key3": [4, 2],
/// });
/// ```
///
/// Compound keys are string literals, and compounds keep the order the keys
/// are written in. Any other value is converted with `TryFrom` for `Tag`, so
/// `1_i8` is a Byte, `1` an Int and `1.0` a Double.
///
/// Typed arrays use the SNBT prefixes. Their elements are integers of any
/// width, wrapped into the element type:
///
/// ```rust
/// # use nbtutils::{nbt, ByteArray, Tag};
/// let tag = nbt!({
///     "bytes": [B; 1, 2, 200],
///     "ints": [I; 1, 2, 3],
///     "longs": [L; 9999999999],
/// });
/// assert_eq!(
///     tag.as_compound().unwrap()["bytes"],
///     Tag::ByteArray(ByteArray::new(vec![1, 2, -56]))
/// );
/// ```
///
/// # Panics
///
/// Panics if the tree breaks an NBT invariant, such as a list with elements
/// of different types or a string over the length limit.
///
/// ```should_panic
/// # use nbtutils::nbt;
/// let _ = nbt!([1, "two"]);
/// ```
#[macro_export]
macro_rules! nbt {
    ([B; $($e:expr),* $(,)?]) => {
        $crate::Tag::ByteArray($crate::ByteArray::from_wrapping::<_, i128>([$($e),*]))
    };
    ([I; $($e:expr),* $(,)?]) => {
        $crate::Tag::IntArray($crate::IntArray::from_wrapping::<_, i128>([$($e),*]))
    };
    ([L; $($e:expr),* $(,)?]) => {
        $crate::Tag::LongArray($crate::LongArray::from_wrapping::<_, i128>([$($e),*]))
    };
    ([$($elems:tt)*]) => {
        $crate::Tag::List(
            <$crate::List as ::std::convert::TryFrom<_>>::try_from(
                $crate::nbt_elements!([] $($elems)*),
            )
            .unwrap(),
        )
    };
    ({$($entries:tt)*}) => {
        $crate::Tag::Compound({
            let mut compound = $crate::Compound::new();
            $crate::nbt_entries!(compound; $($entries)*);
            compound
        })
    };
    ($other:expr) => {
        <$crate::Tag as ::std::convert::TryFrom<_>>::try_from($other).unwrap()
    };
}

// Splits the inside of a list into elements. Nested lists and compounds are
// matched as whole token trees so they are not read as array expressions.
#[macro_export]
#[doc(hidden)]
macro_rules! nbt_elements {
    ([$($done:expr,)*]) => {{
        let elements: ::std::vec::Vec<$crate::Tag> = ::std::vec![$($done),*];
        elements
    }};
    ([$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nbt_elements!([$($done,)* $crate::nbt!([$($inner)*]),] $($($rest)*)?)
    };
    ([$($done:expr,)*] {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::nbt_elements!([$($done,)* $crate::nbt!({$($inner)*}),] $($($rest)*)?)
    };
    ([$($done:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::nbt_elements!([$($done,)* $crate::nbt!($next),] $($($rest)*)?)
    };
}

// Inserts `"key": value` entries into the named compound, in order.
#[macro_export]
#[doc(hidden)]
macro_rules! nbt_entries {
    ($compound:ident;) => {};
    ($compound:ident; $key:literal : [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $compound.insert($key, $crate::nbt!([$($inner)*])).unwrap();
        $crate::nbt_entries!($compound; $($($rest)*)?);
    };
    ($compound:ident; $key:literal : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $compound.insert($key, $crate::nbt!({$($inner)*})).unwrap();
        $crate::nbt_entries!($compound; $($($rest)*)?);
    };
    ($compound:ident; $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $compound.insert($key, $crate::nbt!($value)).unwrap();
        $crate::nbt_entries!($compound; $($($rest)*)?);
    };
}
