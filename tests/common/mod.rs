//! Common test utilities and helpers for the simulator tests
//!
//! Shared frame generators and assertions used by the integration tests.
#![allow(dead_code)]

use image::RgbaImage;

/// A spread of colors across the gamut: primaries, neutrals, and a few
/// arbitrary mixtures. Used both as single-pixel probes and to build
/// synthetic frames.
pub const TEST_COLORS: [[u8; 4]; 12] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 255, 255],
    [0, 0, 0, 255],
    [128, 128, 128, 255],
    [255, 128, 0, 255],
    [64, 200, 140, 255],
    [30, 60, 90, 255],
    [200, 30, 180, 255],
    [12, 240, 56, 255],
    [90, 90, 200, 255],
];

/// Create a gradient image with varying alpha, for testing the full
/// buffer walk. The alpha ramp matters: it proves the transform skips
/// the fourth channel everywhere, not just on opaque pixels.
pub fn create_gradient_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = ((x as f32 / width as f32) * 255.0) as u8;
        let g = ((y as f32 / height as f32) * 255.0) as u8;
        let b = 128u8;
        let a = (x.wrapping_add(y) % 256) as u8;
        *pixel = image::Rgba([r, g, b, a]);
    }
    img
}

/// Create a solid color image.
pub fn create_solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(rgba))
}

/// Largest per-channel difference over R, G, B (alpha excluded) between
/// two equally sized RGBA buffers.
pub fn max_rgb_diff(a: &[u8], b: &[u8]) -> u8 {
    assert_eq!(a.len(), b.len(), "buffer size mismatch");
    let mut worst = 0u8;
    for (pa, pb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
        for c in 0..3 {
            worst = worst.max(pa[c].abs_diff(pb[c]));
        }
    }
    worst
}

/// Assert the alpha channel is byte-identical between two RGBA buffers.
pub fn assert_alpha_identical(a: &[u8], b: &[u8]) {
    assert_eq!(a.len(), b.len(), "buffer size mismatch");
    for (i, (pa, pb)) in a.chunks_exact(4).zip(b.chunks_exact(4)).enumerate() {
        assert_eq!(pa[3], pb[3], "alpha changed at pixel {i}");
    }
}

/// Run one RGBA pixel through a simulation entry point.
pub fn simulate_one_pixel(
    simulate: fn(
        cvd_core::Deficiency,
        f32,
        &mut [u8],
        u32,
        u32,
        usize,
    ) -> Result<(), cvd_core::SimulateError>,
    deficiency: cvd_core::Deficiency,
    severity: f32,
    rgba: [u8; 4],
) -> [u8; 4] {
    let mut buf = rgba;
    simulate(deficiency, severity, &mut buf, 1, 1, 0).unwrap();
    buf
}
