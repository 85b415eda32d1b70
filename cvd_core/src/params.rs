// SPDX-License-Identifier: MIT
//! Precomputed simulation parameters for each deficiency.
//!
//! All matrices map linear RGB to linear RGB. They were derived offline
//! from the Smith & Pokorny 1975 cone-response model combined with the
//! sRGB primaries, so no LMS conversion happens at transform time. The
//! Brettel projection planes are anchored on RGB white rather than the
//! equal-energy illuminant, which keeps more of the projected colors
//! inside the sRGB gamut.

use crate::simulate::Deficiency;

/// Brettel 1997 parameters: one projection matrix per half-plane, plus the
/// separation plane normal used to pick between them.
///
/// Each matrix already folds "project into the dichromat's color surface"
/// and "map back to RGB" into a single operator, and the plane normal is
/// expressed in linear RGB so the half-plane test is a plain dot product.
pub struct Brettel1997Params {
    /// Row-major transform for colors on the positive side of the plane.
    pub rgb_cvd_from_rgb_1: [f32; 9],
    /// Row-major transform for colors on the negative side.
    pub rgb_cvd_from_rgb_2: [f32; 9],
    /// Separation plane normal, in linear RGB.
    pub separation_plane_normal: [f32; 3],
}

pub static BRETTEL_PROTAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: [
        0.14510, 1.20165, -0.34675, //
        0.10447, 0.85316, 0.04237, //
        0.00429, -0.00603, 1.00174,
    ],
    rgb_cvd_from_rgb_2: [
        0.14115, 1.16782, -0.30897, //
        0.10495, 0.85730, 0.03776, //
        0.00431, -0.00586, 1.00155,
    ],
    separation_plane_normal: [0.00048, 0.00416, -0.00464],
};

pub static BRETTEL_DEUTAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: [
        0.36198, 0.86755, -0.22953, //
        0.26099, 0.64512, 0.09389, //
        -0.01975, 0.02686, 0.99289,
    ],
    rgb_cvd_from_rgb_2: [
        0.37009, 0.88540, -0.25549, //
        0.25767, 0.63782, 0.10451, //
        -0.01950, 0.02741, 0.99209,
    ],
    separation_plane_normal: [-0.00293, -0.00645, 0.00938],
};

pub static BRETTEL_TRITAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: [
        1.01354, 0.14268, -0.15622, //
        -0.01181, 0.87561, 0.13619, //
        0.07707, 0.81208, 0.11085,
    ],
    rgb_cvd_from_rgb_2: [
        0.93337, 0.19999, -0.13336, //
        0.05809, 0.82565, 0.11626, //
        -0.37923, 1.13825, 0.24098,
    ],
    separation_plane_normal: [0.03960, -0.02831, -0.01129],
};

/// Viénot 1999 collapses the whole pipeline to one matrix because there is
/// only a single projection plane.
pub static VIENOT_PROTAN: [f32; 9] = [
    0.10889, 0.89111, -0.00000, //
    0.10889, 0.89111, 0.00000, //
    0.00447, -0.00447, 1.00000,
];

pub static VIENOT_DEUTAN: [f32; 9] = [
    0.29031, 0.70969, -0.00000, //
    0.29031, 0.70969, -0.00000, //
    -0.02197, 0.02197, 1.00000,
];

/// Kept for comparison only. Viénot 1999 does not model tritanopia well;
/// the dispatcher never selects this matrix.
pub static VIENOT_TRITAN: [f32; 9] = [
    1.00000, 0.15236, -0.15236, //
    0.00000, 0.86717, 0.13283, //
    -0.00000, 0.86717, 0.13283,
];

pub fn brettel1997(deficiency: Deficiency) -> &'static Brettel1997Params {
    match deficiency {
        Deficiency::Protan => &BRETTEL_PROTAN,
        Deficiency::Deutan => &BRETTEL_DEUTAN,
        Deficiency::Tritan => &BRETTEL_TRITAN,
    }
}

pub fn vienot1999(deficiency: Deficiency) -> &'static [f32; 9] {
    match deficiency {
        Deficiency::Protan => &VIENOT_PROTAN,
        Deficiency::Deutan => &VIENOT_DEUTAN,
        Deficiency::Tritan => &VIENOT_TRITAN,
    }
}
