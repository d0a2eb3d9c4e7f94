#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtutils::NbtPath;

fuzz_target!(|data: &str| {
    if let Ok(path) = data.parse::<NbtPath>() {
        let again: NbtPath = path.to_string().parse().unwrap();
        assert_eq!(path, again);
    }
});
