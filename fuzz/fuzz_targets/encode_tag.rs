#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtutils::error::ErrorKind;
use nbtutils::{snbt, to_writer, Compound, Tag};

fuzz_target!(|v: Tag| {
    let mut root = Compound::new();
    root.insert("", v).unwrap();
    let v = Tag::Compound(root);

    let mut out = Vec::new();
    match to_writer(&v, &mut out) {
        Ok(n) => assert_eq!(n, out.len()),
        Err(e) => assert_eq!(e.kind(), ErrorKind::Encoding),
    }

    let mut out = Vec::new();
    let n = snbt::to_writer(&v, &mut out).unwrap();
    assert_eq!(n, out.len());
});
