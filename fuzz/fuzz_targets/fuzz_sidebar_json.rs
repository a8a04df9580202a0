#![no_main]

use libfuzzer_sys::fuzz_target;
use navtree::{parse_str, to_string, Format};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any tree that parses must come back unchanged after re-emitting
        if let Ok(tree) = parse_str(content, Format::Json) {
            let out = to_string(&tree, Format::Json).unwrap();
            assert_eq!(parse_str(&out, Format::Json).unwrap(), tree);
        }
    }
});
