use std::convert::TryFrom;

use crate::{error::ErrorKind, ByteArray, Compound, IntArray, List, LongArray, Tag, TagType};

fn strings(values: &[&str]) -> Vec<Tag> {
    values.iter().map(|s| Tag::string(*s).unwrap()).collect()
}

#[test]
fn empty_list_accepts_any_first_type() {
    for value in 0..=12u8 {
        let tag_type = TagType::try_from(value).unwrap();
        let mut list = List::new();
        list.push(Tag::new(tag_type)).unwrap();
        assert_eq!(list.element_type(), Some(tag_type));
    }
}

#[test]
fn list_rejects_other_types_once_typed() {
    let mut list = List::new();
    list.push(Tag::Int(1)).unwrap();

    let err = list.push(Tag::Short(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(list.insert(0, Tag::Long(1)).is_err());
    assert!(list.set(0, Tag::Byte(1)).is_err());
    assert_eq!(&*list, &[Tag::Int(1)]);

    list.insert(0, Tag::Int(0)).unwrap();
    list.set(-1, Tag::Int(5)).unwrap();
    assert_eq!(&*list, &[Tag::Int(0), Tag::Int(5)]);
}

#[test]
fn list_extend_is_all_or_nothing() {
    let mut list = List::new();
    let err = list
        .extend(vec![Tag::Int(1), Tag::Int(2), Tag::Byte(3)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(list.is_empty());

    list.extend(vec![Tag::Int(1), Tag::Int(2)]).unwrap();
    assert!(list.extend(vec![Tag::Int(3), Tag::Long(4)]).is_err());
    assert_eq!(list.len(), 2);

    list.extend(Vec::new()).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn list_try_from_checks_homogeneity() {
    assert!(List::try_from(strings(&["E", "M", "P", "T", "Y"])).is_ok());
    assert!(List::try_from(vec![Tag::Int(1), Tag::string("x").unwrap()]).is_err());
}

#[test]
fn emptied_list_is_untyped_again() {
    let mut list = List::try_from(vec![Tag::Int(1)]).unwrap();
    assert_eq!(list.remove(0).unwrap(), Tag::Int(1));
    assert_eq!(list.element_type(), None);
    list.push(Tag::Double(1.0)).unwrap();

    list.clear();
    list.push(Tag::Byte(1)).unwrap();
    assert_eq!(list.pop(), Some(Tag::Byte(1)));
    assert_eq!(list.element_type(), None);
}

#[test]
fn list_update_keeps_type() {
    let mut list = List::try_from(vec![Tag::Int(1), Tag::Int(2)]).unwrap();

    let old = list
        .update(-1, |tag| std::mem::replace(tag, Tag::Int(20)))
        .unwrap();
    assert_eq!(old, Tag::Int(2));
    assert_eq!(list[1], Tag::Int(20));

    let err = list.update(0, |tag| *tag = Tag::Long(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(list[0], Tag::Int(1));

    assert!(list.update(2, |_| ()).is_err());
}

#[test]
fn list_signed_indexing() {
    let list = List::try_from(strings(&["a", "b", "c"])).unwrap();
    assert_eq!(list.get_signed(0).and_then(Tag::as_str), Some("a"));
    assert_eq!(list.get_signed(-1).and_then(Tag::as_str), Some("c"));
    assert_eq!(list.get_signed(-3).and_then(Tag::as_str), Some("a"));
    assert_eq!(list.get_signed(3), None);
    assert_eq!(list.get_signed(-4), None);
}

#[test]
fn list_out_of_range_mutations_fail() {
    let mut list = List::try_from(vec![Tag::Int(1)]).unwrap();
    assert!(list.insert(2, Tag::Int(2)).is_err());
    assert!(list.set(1, Tag::Int(2)).is_err());
    assert!(list.remove(-2).is_err());
    list.insert(1, Tag::Int(2)).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn arrays_wrap_elements() {
    let bytes = ByteArray::from_wrapping([-129, 1, 0]);
    assert_eq!(&*bytes, &[127, 1, 0]);

    let bools = ByteArray::from_wrapping([true, false]);
    assert_eq!(&*bools, &[1, 0]);

    let ints = IntArray::from_wrapping([u32::MAX, 7]);
    assert_eq!(&*ints, &[-1, 7]);

    let longs = LongArray::from_wrapping([u64::MAX]);
    assert_eq!(&*longs, &[-1]);
}

#[test]
fn array_mutation() {
    let mut arr = IntArray::new(vec![1, 2, 3]);
    arr.push(4);
    arr.insert(0, 0).unwrap();
    assert!(arr.insert(10, 0).is_err());
    assert_eq!(arr.set(-1, 40).unwrap(), 4);
    assert_eq!(arr.remove(1).unwrap(), 1);
    arr.extend(vec![5, 6]);
    assert_eq!(&*arr, &[0, 2, 3, 40, 5, 6]);

    assert_eq!(arr.get_signed(-2), Some(5));
    assert_eq!(arr.get_signed(6), None);
    assert!(arr.set(6, 1).is_err());

    arr.clear();
    assert!(arr.is_empty());
}

#[test]
fn compound_keeps_insertion_order() {
    let mut c = Compound::new();
    c.insert("b", Tag::Int(1)).unwrap();
    c.insert("a", Tag::Int(2)).unwrap();
    c.insert("c", Tag::Int(3)).unwrap();

    // Reassigning keeps the position.
    assert_eq!(c.insert("b", Tag::Int(10)).unwrap(), Some(Tag::Int(1)));
    let keys: Vec<&str> = c.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["b", "a", "c"]);

    // Removing keeps the order of the rest.
    assert_eq!(c.remove("a"), Some(Tag::Int(2)));
    let keys: Vec<&str> = c.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["b", "c"]);
}

#[test]
fn compound_rejects_long_keys() {
    let mut c = Compound::new();
    let err = c.insert("k".repeat(65536), Tag::End).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(c.is_empty());

    c.insert("k".repeat(65535), Tag::End).unwrap();
    assert_eq!(c.len(), 1);
}

#[test]
fn compound_get_or_insert() {
    let mut c = Compound::new();
    *c.get_or_insert("n", Tag::Int(0)).unwrap() = Tag::Int(1);
    assert_eq!(c.get_or_insert("n", Tag::Int(5)).unwrap(), &Tag::Int(1));
    assert!(c.get_or_insert("k".repeat(65536), Tag::End).is_err());
}

#[test]
fn compound_values_are_mutable() {
    let mut c = Compound::new();
    c.insert("list", Tag::List(List::new())).unwrap();

    if let Some(Tag::List(list)) = c.get_mut("list") {
        list.push(Tag::Int(1)).unwrap();
    }
    assert_eq!(c["list"].as_list().map(|l| l.len()), Some(1));
    assert!(c.contains_key("list"));
    assert!(!c.contains_key("other"));
}

#[test]
fn compound_equality_ignores_order() {
    let mut a = Compound::new();
    a.insert("x", Tag::Int(1)).unwrap();
    a.insert("y", Tag::Int(2)).unwrap();

    let mut b = Compound::new();
    b.insert("y", Tag::Int(2)).unwrap();
    b.insert("x", Tag::Int(1)).unwrap();

    assert_eq!(a, b);
}
