use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag};

fn compound(entries: Vec<(&str, Tag)>) -> Tag {
    let mut c = Compound::new();
    for (k, v) in entries {
        c.insert(k, v).unwrap();
    }
    Tag::Compound(c)
}

#[test]
fn nbt() {
    assert_eq!(nbt!(1_i8), Tag::Byte(1));
    assert_eq!(nbt!(1_u8), Tag::Byte(1));
    assert_eq!(nbt!(1_i16), Tag::Short(1));
    assert_eq!(nbt!(1_u16), Tag::Short(1));
    assert_eq!(nbt!(1), Tag::Int(1));
    assert_eq!(nbt!(1_u32), Tag::Int(1));
    assert_eq!(nbt!(1_i64), Tag::Long(1));
    assert_eq!(nbt!(1_u64), Tag::Long(1));
    assert_eq!(nbt!(1_f32), Tag::Float(1.0));
    assert_eq!(nbt!(1.0), Tag::Double(1.0));
    assert_eq!(nbt!(true), Tag::Byte(1));
    assert_eq!(nbt!(false), Tag::Byte(0));

    assert_eq!(nbt!("string"), Tag::string("string").unwrap());
    assert_eq!(nbt!("string".to_owned()), Tag::string("string").unwrap());

    assert_eq!(nbt!([]), Tag::List(List::new()));
    assert_eq!(
        nbt!([1, 3]),
        Tag::List(List::try_from(vec![Tag::Int(1), Tag::Int(3)]).unwrap())
    );

    assert_eq!(nbt!({}), Tag::Compound(Compound::new()));
    assert_eq!(
        nbt!({ "key": "value" }),
        compound(vec![("key", Tag::string("value").unwrap())])
    );
    assert_eq!(
        nbt!({
            "key1": "value1",
            "key2": 42,
            "key3": [4, 2],
        }),
        compound(vec![
            ("key1", Tag::string("value1").unwrap()),
            ("key2", Tag::Int(42)),
            (
                "key3",
                Tag::List(List::try_from(vec![Tag::Int(4), Tag::Int(2)]).unwrap())
            ),
        ])
    );

    assert_eq!(nbt!([B;]), Tag::ByteArray(ByteArray::new(vec![])));
    assert_eq!(nbt!([I;]), Tag::IntArray(IntArray::new(vec![])));
    assert_eq!(nbt!([L;]), Tag::LongArray(LongArray::new(vec![])));
    assert_eq!(
        nbt!([B; 1, 2, 3]),
        Tag::ByteArray(ByteArray::new(vec![1, 2, 3]))
    );
    assert_eq!(nbt!([I;1,2,3]), Tag::IntArray(IntArray::new(vec![1, 2, 3])));
    assert_eq!(
        nbt!([L; 1, 2, 3,]),
        Tag::LongArray(LongArray::new(vec![1, 2, 3]))
    );
}

#[test]
fn array_elements_wrap() {
    assert_eq!(
        nbt!([B; -129, 1, 128]),
        Tag::ByteArray(ByteArray::new(vec![127, 1, -128]))
    );
    assert_eq!(nbt!([B; 200]), Tag::ByteArray(ByteArray::new(vec![-56])));
    assert_eq!(
        nbt!([I; 4294967295]),
        Tag::IntArray(IntArray::new(vec![-1]))
    );
}

#[test]
fn long_array_literals_beyond_i32() {
    assert_eq!(
        nbt!([L; 9999999999, -9999999999]),
        Tag::LongArray(LongArray::new(vec![9999999999, -9999999999]))
    );
    assert_eq!(
        nbt!({ "longs": [L; 9223372036854775807, 1] }).to_string(),
        "{longs:[L;9223372036854775807L,1L]}"
    );
}

#[test]
fn nested_containers() {
    let tag = nbt!([[1, 2], [], [{ "a": [B; 1] }]]);
    assert_eq!(tag.to_string(), "[[1,2],[],[{a:[B;1b]}]]");

    let tag = nbt!({ "list": [{}, { "x": -1 },], "empty": {} });
    assert_eq!(tag.to_string(), "{list:[{},{x:-1}],empty:{}}");
}

#[test]
fn keys_keep_written_order() {
    let tag = nbt!({ "z": 1, "a": 2, "m": 3 });
    let keys: Vec<&str> = tag
        .as_compound()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn variables_and_expressions() {
    let name = String::from("Steve");
    let count = 3_i8;
    let tag = nbt!({
        "name": name,
        "count": count,
        "double": count as i32 * 2,
    });
    assert_eq!(tag.to_string(), r#"{name:"Steve",count:3b,double:6}"#);
}

#[test]
#[should_panic]
fn mixed_list_panics() {
    let _ = nbt!([1, 2_i8]);
}
