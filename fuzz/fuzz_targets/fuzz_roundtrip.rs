#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpkit::*;

fuzz_target!(|data: &[u8]| {
    // The first byte picks a transform; the rest is the file
    let Some((&op, file)) = data.split_first() else {
        return;
    };
    let limits = Limits::with_max_memory(1 << 22);
    let Ok(mut image) = DecodeRequest::new(file).with_limits(&limits).decode() else {
        return;
    };

    // If we can decode it, re-encoding and decoding again must be identical
    let reencoded = image.encode().expect("decoded image must re-encode");
    let decoded2 = decode(&reencoded).expect("re-encoded data failed to decode");
    assert_eq!(image, decoded2, "roundtrip mismatch");

    let transform: Transform = match op % 10 {
        0 => MirrorDirection::Horizontal.into(),
        1 => MirrorDirection::Vertical.into(),
        2 => RotateDirection::Left.into(),
        3 => RotateDirection::Right.into(),
        4 => FilterKind::Grayscale.into(),
        5 => FilterKind::Negative.into(),
        6 => FilterKind::Pixelate { block_size: usize::from(op >> 4) }.into(),
        7 => FilterKind::Blur { radius: usize::from(op >> 5) }.into(),
        8 => CropRequest::at(usize::from(op >> 4), usize::from(op >> 6)).into(),
        _ => FilterKind::Red.into(),
    };
    if transform.apply(&mut image).is_err() {
        return;
    }

    // Transforms keep the size fields in step with the grid
    let encoded = image.encode().expect("transformed image must encode");
    assert_eq!(image.file_header().file_size as usize, encoded.len());
    assert_eq!(decode(&encoded).expect("transformed output must decode"), image);
});
