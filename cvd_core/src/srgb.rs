// SPDX-License-Identifier: MIT
// Textbook piecewise sRGB transfer functions (IEC 61966-2-1). A 256-entry
// LUT would be faster for the decode direction but is less SIMD-friendly;
// optimizations stay out of this crate.

/// sRGB EOTF: gamma-encoded 8-bit sample → linear light in [0, 1].
#[inline]
pub fn linear_from_srgb(v: u8) -> f32 {
    let fv = v as f32 / 255.0;
    if fv < 0.04045 {
        fv / 12.92
    } else {
        ((fv + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse OETF: linear light → gamma-encoded 8-bit sample.
///
/// Inputs ≤ 0 map to 0 and inputs ≥ 1 map to 255. The linear segment
/// rounds to nearest; the power segment truncates the scaled value. The
/// asymmetry is deliberate: it reproduces the reference outputs exactly,
/// and keeps `srgb_from_linear(linear_from_srgb(v))` within one code
/// value of `v`.
#[inline]
pub fn srgb_from_linear(v: f32) -> u8 {
    if v <= 0.0 {
        return 0;
    }
    if v >= 1.0 {
        return 255;
    }
    if v < 0.0031308 {
        (0.5 + v * 12.92 * 255.0) as u8
    } else {
        (255.0 * (v.powf(1.0 / 2.4) * 1.055 - 0.055)) as u8
    }
}
