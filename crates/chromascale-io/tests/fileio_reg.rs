//! File I/O regression test
//!
//! Container roundtrips through real files plus sequence enumeration.

use chromascale_core::{ColorSpace, Image, plane};
use chromascale_io::{
    FileKind, YuvLayout, bmp_dimensions, detect_sequence, read_bmp, read_yuv, sniff_file_kind,
    write_bmp, write_yuv,
};
use chromascale_test::{RegParams, ramp};
use std::fs::File;

#[test]
fn fileio_reg() {
    let mut rp = RegParams::new("fileio");
    let dir = tempfile::tempdir().unwrap();

    // --- Test 1: BMP file roundtrip ---
    let img = ramp(19, 7);
    let bmp_path = dir.path().join("ramp.bmp");
    write_bmp(&img, File::create(&bmp_path).unwrap()).unwrap();
    let back = read_bmp(File::open(&bmp_path).unwrap()).unwrap();
    rp.compare_images(&img, &back, 0);

    // --- Test 2: header probe matches decode ---
    let (w, h) = bmp_dimensions(File::open(&bmp_path).unwrap()).unwrap();
    rp.compare_values(19.0, w as f64, 0.0);
    rp.compare_values(7.0, h as f64, 0.0);

    // --- Test 3: extensionless BMP is sniffed by header ---
    let anon_path = dir.path().join("anonymous");
    std::fs::copy(&bmp_path, &anon_path).unwrap();
    rp.check(
        sniff_file_kind(&anon_path).unwrap() == FileKind::Bmp,
        "BMP header sniff",
    );

    // --- Test 4: multi-frame YUV file roundtrip in every layout ---
    let mut frame_a = Image::fixed8(ColorSpace::Yuv420, 6, 4).unwrap();
    let mut frame_b = Image::fixed8(ColorSpace::Yuv420, 6, 4).unwrap();
    for y in 0..4 {
        for x in 0..6 {
            frame_a.set_plane_8(plane::Y, x, y, (y * 6 + x) as u8);
            frame_b.set_plane_8(plane::Y, x, y, 255 - (y * 6 + x) as u8);
        }
    }
    for y in 0..2 {
        for x in 0..3 {
            frame_a.set_plane_8(plane::U, x, y, 60);
            frame_a.set_plane_8(plane::V, x, y, 190);
            frame_b.set_plane_8(plane::U, x, y, 70);
            frame_b.set_plane_8(plane::V, x, y, 180);
        }
    }
    for layout in [
        YuvLayout::I420,
        YuvLayout::Yv12,
        YuvLayout::Nv12,
        YuvLayout::Nv21,
    ] {
        let path = dir.path().join("two_frames.yuv");
        let mut file = File::create(&path).unwrap();
        write_yuv(&frame_a, &mut file, layout).unwrap();
        write_yuv(&frame_b, &mut file, layout).unwrap();
        drop(file);

        let a = read_yuv(File::open(&path).unwrap(), ColorSpace::Yuv420, 6, 4, 0, layout)
            .unwrap();
        let b = read_yuv(File::open(&path).unwrap(), ColorSpace::Yuv420, 6, 4, 1, layout)
            .unwrap();
        rp.compare_images(&frame_a, &a, 0);
        rp.compare_images(&frame_b, &b, 0);

        // The sequence detector sees both frames in the one file
        let seq = detect_sequence(&path, FileKind::Yuv, Some((6, 4))).unwrap();
        rp.compare_values(2.0, seq.total_frames() as f64, 0.0);
    }

    // --- Test 5: numbered BMP sequence enumeration ---
    for i in 0..4 {
        let img = ramp(8, 8);
        let path = dir.path().join(format!("seq{:05}.bmp", i));
        write_bmp(&img, File::create(&path).unwrap()).unwrap();
    }
    let seq = detect_sequence(
        &dir.path().join("seq00000.bmp"),
        FileKind::Bmp,
        None,
    )
    .unwrap();
    rp.compare_values(4.0, seq.num_files() as f64, 0.0);
    rp.check(
        seq.nth_file(2) == dir.path().join("seq00002.bmp"),
        "numbered sequence paths",
    );

    assert!(rp.cleanup(), "fileio regression test failed");
}
