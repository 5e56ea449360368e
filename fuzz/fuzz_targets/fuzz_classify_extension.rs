#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(filename) = std::str::from_utf8(data) {
        let builder = assetmap::ManifestBuilder::new();
        let tag = builder.classify_extension(filename);
        assert!(filename.ends_with(tag.as_str()));
        let _ = builder.is_image(&tag);
    }
});
