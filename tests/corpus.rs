//! Test corpus: pattern images through every transform.

use bmpkit::*;
use imgref::ImgVec;

fn checkerboard(w: usize, h: usize) -> Image {
    let buf = (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            if (x + y) % 2 == 0 {
                Pixel::new(200, 220, 240)
            } else {
                Pixel::new(10, 40, 70)
            }
        })
        .collect();
    Image::from_pixels(ImgVec::new(buf, w, h)).unwrap()
}

fn noise_pattern(w: usize, h: usize) -> Image {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    let buf = (0..w * h).map(|_| Pixel::new(next(), next(), next())).collect();
    Image::from_pixels(ImgVec::new(buf, w, h)).unwrap()
}

fn apply(image: &Image, transforms: &[Transform]) -> Image {
    let mut out = image.clone();
    apply_all(&mut out, transforms).unwrap();
    out
}

fn every_filter() -> [FilterKind; 7] {
    [
        FilterKind::Red,
        FilterKind::Green,
        FilterKind::Blue,
        FilterKind::Grayscale,
        FilterKind::Negative,
        FilterKind::Pixelate { block_size: 3 },
        FilterKind::Blur { radius: 2 },
    ]
}

// ── Algebraic properties ─────────────────────────────────────────────

#[test]
fn mirrors_are_involutions() {
    for image in [noise_pattern(7, 5), noise_pattern(4, 4), noise_pattern(2, 9)] {
        for direction in [MirrorDirection::Horizontal, MirrorDirection::Vertical] {
            let once = apply(&image, &[direction.into()]);
            assert_ne!(once, image, "{direction:?}");
            assert_eq!(apply(&once, &[direction.into()]), image, "{direction:?}");
        }
    }
}

#[test]
fn rotations_invert_each_other() {
    let image = noise_pattern(6, 3);
    let left: Transform = RotateDirection::Left.into();
    let right: Transform = RotateDirection::Right.into();

    let turned = apply(&image, &[right]);
    assert_eq!((turned.width(), turned.height()), (3, 6));
    assert_eq!(apply(&turned, &[left]), image);
    assert_eq!(apply(&image, &[left, right]), image);
    assert_eq!(apply(&image, &[right; 4]), image);
}

#[test]
fn half_turn_is_two_quarter_turns() {
    let image = noise_pattern(5, 4);
    let mut half = image.clone();
    Pipeline::new().rotate_half().apply(&mut half).unwrap();
    let right: Transform = RotateDirection::Right.into();
    assert_eq!(half, apply(&image, &[right, right]));
}

#[test]
fn full_bounds_crop_is_identity() {
    let image = noise_pattern(9, 4);
    for request in [CropRequest::at(0, 0), CropRequest::new(0, 0, 9, 4)] {
        assert_eq!(apply(&image, &[request.into()]), image);
    }
}

#[test]
fn grayscale_is_idempotent() {
    let image = noise_pattern(8, 8);
    let gray = apply(&image, &[FilterKind::Grayscale.into()]);
    assert!(gray.pixels().buf().iter().all(|px| px.r == px.g && px.g == px.b));
    assert_eq!(apply(&gray, &[FilterKind::Grayscale.into()]), gray);
}

#[test]
fn negative_is_an_involution() {
    let image = noise_pattern(8, 3);
    let negative: Transform = FilterKind::Negative.into();
    let once = apply(&image, &[negative]);
    assert_eq!(once.pixel(0, 0).map(|px| px.r), image.pixel(0, 0).map(|px| 255 - px.r));
    assert_eq!(apply(&once, &[negative]), image);
}

#[test]
fn channel_filters_keep_one_channel() {
    let image = noise_pattern(4, 4);
    let red = apply(&image, &[FilterKind::Red.into()]);
    let blue = apply(&image, &[FilterKind::Blue.into()]);
    let pairs = image.pixels().buf().iter().zip(red.pixels().buf().iter());
    for ((src, r), b) in pairs.zip(blue.pixels().buf().iter()) {
        assert_eq!(*r, Pixel::new(src.r, 0, 0));
        assert_eq!(*b, Pixel::new(0, 0, src.b));
    }
}

#[test]
fn uniform_images_survive_pixelate_and_blur() {
    let color = Pixel::new(17, 130, 251);
    let image = Image::filled(11, 7, color).unwrap();
    for block_size in [1, 2, 3, 4, 50] {
        assert_eq!(apply(&image, &[FilterKind::Pixelate { block_size }.into()]), image);
    }
    for radius in [1, 3, 20] {
        assert_eq!(apply(&image, &[FilterKind::Blur { radius }.into()]), image);
    }
}

// ── Concrete scenarios ───────────────────────────────────────────────

#[test]
fn horizontal_mirror_of_four_by_two() {
    let top = [
        Pixel::new(255, 0, 0),
        Pixel::new(0, 255, 0),
        Pixel::new(0, 0, 255),
        Pixel::new(255, 255, 0),
    ];
    let bottom = [Pixel::new(40, 40, 40); 4];
    let buf = top.iter().chain(bottom.iter()).copied().collect();
    let image = Image::from_pixels(ImgVec::new(buf, 4, 2)).unwrap();

    let decoded = decode(&image.encode().unwrap()).unwrap();
    let mirrored = apply(&decoded, &[MirrorDirection::Horizontal.into()]);

    for x in 0..4 {
        assert_eq!(mirrored.pixel(x, 0), Some(top[3 - x]));
        assert_eq!(mirrored.pixel(x, 1), Some(bottom[x]));
    }
    assert_eq!(mirrored.info_header(), decoded.info_header());
}

#[test]
fn vertical_mirror_moves_rows_not_the_height_sign() {
    let mut image = checkerboard(3, 4);
    image.set_top_down(true);
    let mirrored = apply(&image, &[MirrorDirection::Vertical.into()]);

    assert_eq!(mirrored.info_header().height, -4);
    assert_eq!(mirrored.pixel(0, 0), image.pixel(0, 3));
    assert_eq!(mirrored.pixel(0, 3), image.pixel(0, 0));
}

#[test]
fn pipeline_order_matters() {
    let image = noise_pattern(4, 3);
    let crop: Transform = CropRequest::new(0, 0, 2, 3).into();
    let rotate: Transform = RotateDirection::Right.into();

    let crop_first = apply(&image, &[crop, rotate]);
    let rotate_first = apply(&image, &[rotate, crop]);
    assert_eq!((crop_first.width(), crop_first.height()), (3, 2));
    assert_eq!((rotate_first.width(), rotate_first.height()), (2, 3));
    assert_ne!(crop_first, rotate_first);
}

#[test]
fn crop_reads_from_the_top_left() {
    let image = checkerboard(6, 6);
    let cropped = apply(&image, &[CropRequest::new(1, 0, 2, 3).into()]);
    assert_eq!((cropped.width(), cropped.height()), (2, 3));
    for y in 0..3 {
        for x in 0..2 {
            assert_eq!(cropped.pixel(x, y), image.pixel(x + 1, y));
        }
    }
}

#[test]
fn crop_without_extent_runs_to_the_edges() {
    let image = noise_pattern(10, 8);
    let cropped = apply(&image, &["7-5".parse::<CropRequest>().unwrap().into()]);
    assert_eq!((cropped.width(), cropped.height()), (3, 3));
    assert_eq!(cropped.pixel(2, 2), image.pixel(9, 7));
}

// ── Size invariants ──────────────────────────────────────────────────

#[test]
fn every_transform_keeps_headers_consistent() {
    let mut transforms: Vec<Transform> = every_filter().into_iter().map(Into::into).collect();
    let geometry: [Transform; 5] = [
        MirrorDirection::Horizontal.into(),
        MirrorDirection::Vertical.into(),
        RotateDirection::Left.into(),
        RotateDirection::Right.into(),
        CropRequest::new(1, 2, 3, 2).into(),
    ];
    transforms.extend(geometry);

    for top_down in [false, true] {
        let mut image = noise_pattern(5, 7);
        image.set_top_down(top_down);
        for transform in &transforms {
            let out = apply(&image, &[*transform]);
            let (w, h) = (out.width(), out.height());
            let stride = (w * 3).div_ceil(4) * 4;

            let info = out.info_header();
            assert_eq!(info.width as usize, w, "{transform:?}");
            assert_eq!(info.height.unsigned_abs() as usize, h, "{transform:?}");
            assert_eq!(info.is_top_down(), top_down, "{transform:?}");
            assert_eq!(info.image_size as usize, stride * h, "{transform:?}");

            let encoded = out.encode().unwrap();
            assert_eq!(encoded.len(), 54 + stride * h, "{transform:?}");
            assert_eq!(out.file_header().file_size as usize, encoded.len());
            assert_eq!(decode(&encoded).unwrap(), out, "{transform:?}");
        }
    }
}

#[test]
fn blur_spreads_a_single_bright_pixel() {
    let mut image = Image::filled(5, 5, Pixel::new(0, 0, 0)).unwrap();
    image.pixels_mut()[12] = Pixel::new(90, 180, 255);
    let blurred = apply(&image, &[FilterKind::Blur { radius: 1 }.into()]);

    // interior windows hold 9 samples, corner windows 4
    assert_eq!(blurred.pixel(2, 2), Some(Pixel::new(10, 20, 28)));
    assert_eq!(blurred.pixel(1, 1), Some(Pixel::new(10, 20, 28)));
    assert_eq!(blurred.pixel(0, 0), Some(Pixel::new(0, 0, 0)));
    assert_eq!(blurred.pixel(4, 2), Some(Pixel::new(0, 0, 0)));
}

#[test]
fn pixelate_tiles_are_flat() {
    let image = noise_pattern(10, 9);
    let out = apply(&image, &[FilterKind::Pixelate { block_size: 4 }.into()]);
    for (tx, ty) in [(0, 0), (4, 0), (8, 4), (4, 8)] {
        let first = out.pixel(tx, ty);
        for y in ty..(ty + 4).min(9) {
            for x in tx..(tx + 4).min(10) {
                assert_eq!(out.pixel(x, y), first, "tile ({tx}, {ty})");
            }
        }
    }
}
