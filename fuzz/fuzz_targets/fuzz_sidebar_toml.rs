#![no_main]

use libfuzzer_sys::fuzz_target;
use navtree::{parse_str, to_string, Format};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and re-emitting should never panic
        if let Ok(tree) = parse_str(content, Format::Toml) {
            let _ = to_string(&tree, Format::Toml);
        }
    }
});
