#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must agree and never panic
    let probe = bmpkit::ImageInfo::from_bytes(data);
    let decoded = bmpkit::decode(data);
    assert_eq!(probe.is_ok(), decoded.is_ok());

    if let (Ok(info), Ok(image)) = (probe, decoded) {
        assert_eq!(info, image.header_info());
        let _ = info.to_string();
    }
});
