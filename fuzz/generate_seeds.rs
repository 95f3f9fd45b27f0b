#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp_24(width: u32, height: i32, fill: [u8; 3]) -> Vec<u8> {
    let stride = (width as usize * 3 + 3) & !3;
    let rows = height.unsigned_abs() as usize;
    let size = 54 + stride * rows;
    let mut bmp = vec![0u8; size];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&height.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    for row in 0..rows {
        for col in 0..width as usize {
            let off = 54 + row * stride + col * 3;
            bmp[off..off + 3].copy_from_slice(&fill); // BGR
        }
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp_24(1, 1, [0xff, 0x00, 0x00])).unwrap();
    fs::write(format!("{dir}/bmp_2x2.bmp"), bmp_24(2, 2, [0x10, 0x20, 0x30])).unwrap();
    fs::write(format!("{dir}/bmp_5x3.bmp"), bmp_24(5, 3, [0x80, 0x80, 0x80])).unwrap();
    fs::write(format!("{dir}/bmp_topdown_3x2.bmp"), bmp_24(3, -2, [0x00, 0xff, 0x00])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut bpp8 = bmp_24(2, 2, [0, 0, 0]);
    bpp8[28] = 8;
    fs::write(format!("{dir}/bmp_8bpp.bin"), bpp8).unwrap();
    let truncated = bmp_24(4, 4, [1, 2, 3]);
    fs::write(format!("{dir}/bmp_truncated.bin"), &truncated[..60]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
