#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, header_size: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    let stride = (width as usize * 3).div_ceil(4) * 4;
    let rows = height.unsigned_abs() as usize;
    let extra = header_size as usize - 40;
    let data_offset = 54 + extra;
    let file_size = data_offset + stride * rows;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());
    out.extend_from_slice(&header_size.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&((stride * rows) as u32).to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&[0u8; 8]);
    out.resize(data_offset, 0);
    for row in pixels.chunks(width as usize) {
        for bgr in row {
            out.extend_from_slice(bgr);
        }
        out.resize(out.len() + stride - row.len() * 3, 0);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 1x1, both row orders
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 40, &[[0, 0, 0xff]])).unwrap();
    fs::write(format!("{dir}/bmp_1x1_top_down.bmp"), bmp(1, -1, 40, &[[0xff, 0, 0]])).unwrap();

    // 3x2 exercises row padding
    let px: Vec<[u8; 3]> = (0..6u8).map(|i| [i * 40, 255 - i * 40, i]).collect();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, 40, &px)).unwrap();

    // V5 info header carried through
    fs::write(format!("{dir}/bmp_v5_2x2.bmp"), bmp(2, 2, 124, &px[..4])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut wrong_size = bmp(2, 2, 40, &px[..4]);
    wrong_size[2] ^= 1;
    fs::write(format!("{dir}/bmp_wrong_file_size.bin"), wrong_size).unwrap();

    println!("Generated seed corpus in {dir}/");
}
