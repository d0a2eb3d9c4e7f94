use crate::{
    data::{self, DataOperationResult},
    NbtPath, Tag,
};

fn path(s: &str) -> NbtPath {
    s.parse().unwrap()
}

fn player() -> Tag {
    nbt!({
        "Health": 20.0_f32,
        "Pos": [1.5, 64.0, -3.25],
        "Inventory": [
            { "id": "minecraft:stone", "Count": 64_i8 },
            { "id": "minecraft:dirt", "Count": 3_i8, "tag": { "Damage": 7 } },
        ],
        "bytes": [B; 1, 2, 3],
        "ints": [I; 10, 20],
        "longs": [L; 100],
        "name": "Steve",
    })
}

#[test]
fn root_path_scales_value() {
    let res = data::get(&Tag::Int(5), &NbtPath::root(), 3.0);
    assert_eq!(
        res,
        DataOperationResult {
            success: true,
            result: 15,
            tag: Some(Tag::Int(5)),
        }
    );
}

#[test]
fn nested_values() {
    let tag = player();

    let res = data::get(&tag, &path("Inventory[-1].Count"), 1.0);
    assert!(res.success);
    assert_eq!(res.result, 3);
    assert_eq!(res.tag, Some(Tag::Byte(3)));

    let res = data::get_unscaled(&tag, &path("Inventory[1].tag.Damage"));
    assert_eq!(res.result, 7);

    let res = data::get(&tag, &path("Pos[2]"), 100.0);
    assert_eq!(res.result, -325);
    assert_eq!(res.tag, Some(Tag::Double(-3.25)));

    let res = data::get(&tag, &path("Health"), 0.5);
    assert_eq!(res.result, 10);
}

#[test]
fn lengths() {
    let tag = player();
    assert_eq!(data::get_unscaled(&tag, &path("Inventory")).result, 2);
    assert_eq!(data::get_unscaled(&tag, &path("Inventory[0]")).result, 2);
    assert_eq!(data::get_unscaled(&tag, &path("bytes")).result, 3);
    assert_eq!(data::get_unscaled(&tag, &path("ints")).result, 2);
    assert_eq!(data::get_unscaled(&tag, &path("longs")).result, 1);
    assert_eq!(data::get_unscaled(&tag, &path("name")).result, 5);
    assert_eq!(data::get_unscaled(&tag, &NbtPath::root()).result, 7);

    // Lengths scale like values do.
    assert_eq!(data::get(&tag, &path("name"), 2.0).result, 10);

    // Strings count UTF-16 units.
    let s = Tag::string("\u{1F600}ab").unwrap();
    assert_eq!(data::get_unscaled(&s, &NbtPath::root()).result, 4);
}

#[test]
fn array_elements() {
    let tag = player();

    let res = data::get_unscaled(&tag, &path("bytes[-1]"));
    assert_eq!(res.tag, Some(Tag::Byte(3)));
    assert_eq!(res.result, 3);

    let res = data::get_unscaled(&tag, &path("ints[0]"));
    assert_eq!(res.tag, Some(Tag::Int(10)));

    let res = data::get_unscaled(&tag, &path("longs[0]"));
    assert_eq!(res.tag, Some(Tag::Long(100)));

    assert!(!data::get_unscaled(&tag, &path("bytes[3]")).success);
    assert!(!data::get_unscaled(&tag, &path("bytes[0][0]")).success);
    assert!(!data::get_unscaled(&tag, &path("bytes[0].x")).success);
}

#[test]
fn unresolved_paths_fail() {
    let tag = player();
    for p in [
        "Missing",
        "Inventory[2]",
        "Inventory[-3]",
        "Inventory.id",
        "Health.x",
        "Health[0]",
        "name[0]",
        "Inventory[0][0]",
        "[0]",
    ] {
        assert_eq!(
            data::get_unscaled(&tag, &path(p)),
            DataOperationResult::failure(),
            "{}",
            p
        );
    }
}

#[test]
fn end_is_zero() {
    let res = data::get(&Tag::End, &NbtPath::root(), 10.0);
    assert!(res.success);
    assert_eq!(res.result, 0);
    assert_eq!(res.tag, Some(Tag::End));
}

#[test]
fn rounds_to_nearest() {
    let root = NbtPath::root();
    assert_eq!(data::get(&Tag::Double(2.4), &root, 1.0).result, 2);
    assert_eq!(data::get(&Tag::Double(2.5), &root, 1.0).result, 3);
    assert_eq!(data::get(&Tag::Double(-2.5), &root, 1.0).result, -3);
    assert_eq!(data::get(&Tag::Double(2.7), &root, 1.0).result, 3);
    assert_eq!(data::get(&Tag::Double(-2.7), &root, 1.0).result, -3);
    assert_eq!(data::get(&Tag::Int(3), &root, 0.1).result, 0);
    assert_eq!(data::get(&Tag::Int(3), &root, -1.0).result, -3);
}

#[test]
fn clamps_to_i32() {
    let root = NbtPath::root();
    assert_eq!(data::get(&Tag::Long(i64::MAX), &root, 1.0).result, i32::MAX);
    assert_eq!(data::get(&Tag::Long(i64::MIN), &root, 1.0).result, i32::MIN);
    assert_eq!(data::get(&Tag::Double(1e20), &root, 1.0).result, i32::MAX);
    assert_eq!(data::get(&Tag::Double(-1e20), &root, 1.0).result, i32::MIN);
    assert_eq!(data::get(&Tag::Int(i32::MAX), &root, 2.0).result, i32::MAX);
    assert_eq!(
        data::get(&Tag::Double(f64::INFINITY), &root, 1.0).result,
        i32::MAX
    );

    let res = data::get(&Tag::Double(f64::NAN), &root, 1.0);
    assert!(res.success);
    assert_eq!(res.result, 0);
}

#[test]
fn count_wraps() {
    let res = DataOperationResult::of_count(i64::from(i32::MAX) + 1, Tag::End);
    assert_eq!(res.result, i32::MIN);
}

#[test]
fn merge_overlays_entries() {
    let base = nbt!({ "a": 1, "b": { "x": 1 }, "c": 2 });
    let overlay = nbt!({ "b": { "y": 2 }, "d": 3, "a": 5 });

    let res = data::merge(&base, &overlay);
    assert!(res.success);
    assert_eq!(res.result, 1);

    // Nested compounds are replaced, not merged.
    let merged = res.tag.unwrap();
    assert_eq!(merged, nbt!({ "a": 5, "b": { "y": 2 }, "c": 2, "d": 3 }));
    assert_eq!(merged.to_string(), "{a:5,b:{y:2},c:2,d:3}");

    assert_eq!(base, nbt!({ "a": 1, "b": { "x": 1 }, "c": 2 }));
    assert_eq!(overlay, nbt!({ "b": { "y": 2 }, "d": 3, "a": 5 }));
}

#[test]
fn merge_empty() {
    let base = nbt!({ "a": 1 });
    let res = data::merge(&base, &nbt!({}));
    assert_eq!(res.tag, Some(base.clone()));

    let res = data::merge(&nbt!({}), &base);
    assert_eq!(res.tag, Some(base));
}

#[test]
fn merge_needs_compounds() {
    let compound = nbt!({ "a": 1 });
    assert_eq!(
        data::merge(&compound, &Tag::Int(1)),
        DataOperationResult::failure()
    );
    assert_eq!(
        data::merge(&nbt!([1]), &compound),
        DataOperationResult::failure()
    );
    assert_eq!(
        data::merge(&Tag::End, &Tag::End),
        DataOperationResult::failure()
    );
}

#[test]
fn display() {
    assert_eq!(DataOperationResult::failure().to_string(), "failure");

    let res = data::get_unscaled(&player(), &path("Inventory[0].Count"));
    assert_eq!(res.to_string(), "64 64b");

    let res = DataOperationResult {
        success: true,
        result: 2,
        tag: None,
    };
    assert_eq!(res.to_string(), "2");
}
