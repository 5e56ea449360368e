#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any stats that parse must also build
        if let Ok(snapshot) = assetmap::parse_stats(content) {
            let _ = assetmap::ManifestBuilder::new().build(&snapshot);
        }
    }
});
