// SPDX-License-Identifier: MIT
//! SVG `<filter>` generation from the same parameter tables as the raster
//! path, for contexts where the pixel buffer is not directly addressable
//! (browsers, declarative renderers).
//!
//! Filters run in `linearRGB` filter space, matching the raster pipeline's
//! decode → transform → encode round trip. Severity is folded into the
//! matrices up front: the blend is linear in linear light, so
//! `s*M + (1-s)*I` applied once equals transforming and then blending.
//!
//! The red-green deficiencies need one `feColorMatrix`. Tritanopia needs
//! the Brettel two-plane selection, built as a small graph: both plane
//! projections, a mask from the separation plane (a heavily scaled color
//! matrix whose output clamp acts as the step function), and arithmetic
//! composites to pick per pixel. One known deviation from the raster
//! path: the clamped mask sends a dot product of exactly 0 to plane 2
//! while the raster tie-break picks plane 1.

use crate::params;
use crate::simulate::Deficiency;

/// Scale applied to the separation plane normal inside the mask matrix.
/// Large enough that any off-plane color saturates the clamp to 0 or 1.
const SEPARATION_SCALE: f32 = 1.0e7;

/// Markup for one `<filter>` element simulating `deficiency` at
/// `severity`, using the same algorithm choice as the raster dispatcher.
pub fn filter_markup(deficiency: Deficiency, severity: f32) -> String {
    match deficiency {
        Deficiency::Tritan => brettel_filter_markup(deficiency, severity),
        Deficiency::Protan | Deficiency::Deutan => vienot_filter_markup(deficiency, severity),
    }
}

/// Single-matrix Viénot 1999 filter. Not accurate for tritanopia.
pub fn vienot_filter_markup(deficiency: Deficiency, severity: f32) -> String {
    let m = fold_severity(params::vienot1999(deficiency), severity);
    format!(
        "<filter id=\"{id}\" color-interpolation-filters=\"linearRGB\">\n  \
         <feColorMatrix type=\"matrix\" values=\"{values}\"/>\n\
         </filter>",
        id = filter_id(deficiency, severity),
        values = color_matrix_values(&m),
    )
}

/// Two-plane Brettel 1997 filter graph.
pub fn brettel_filter_markup(deficiency: Deficiency, severity: f32) -> String {
    let p = params::brettel1997(deficiency);
    let m1 = fold_severity(&p.rgb_cvd_from_rgb_1, severity);
    let m2 = fold_severity(&p.rgb_cvd_from_rgb_2, severity);
    let n = p.separation_plane_normal;
    format!(
        "<filter id=\"{id}\" color-interpolation-filters=\"linearRGB\">\n  \
         <feColorMatrix in=\"SourceGraphic\" type=\"matrix\" values=\"{plane1}\" result=\"proj1\"/>\n  \
         <feColorMatrix in=\"SourceGraphic\" type=\"matrix\" values=\"{plane2}\" result=\"proj2\"/>\n  \
         <feColorMatrix in=\"SourceGraphic\" type=\"matrix\" values=\"{mask}\" result=\"mask\"/>\n  \
         <feComposite in=\"proj1\" in2=\"mask\" operator=\"arithmetic\" k1=\"1\" k2=\"0\" k3=\"0\" k4=\"0\" result=\"side1\"/>\n  \
         <feComposite in=\"proj2\" in2=\"mask\" operator=\"arithmetic\" k1=\"-1\" k2=\"1\" k3=\"0\" k4=\"0\" result=\"side2\"/>\n  \
         <feComposite in=\"side1\" in2=\"side2\" operator=\"arithmetic\" k1=\"0\" k2=\"1\" k3=\"1\" k4=\"0\"/>\n\
         </filter>",
        id = filter_id(deficiency, severity),
        plane1 = color_matrix_values(&m1),
        plane2 = color_matrix_values(&m2),
        mask = mask_matrix_values(n),
    )
}

fn filter_id(deficiency: Deficiency, severity: f32) -> String {
    let name = match deficiency {
        Deficiency::Protan => "protan",
        Deficiency::Deutan => "deutan",
        Deficiency::Tritan => "tritan",
    };
    // "protan-0_55" rather than "protan-0.55": dots are awkward in ids.
    format!("{name}-{}", format!("{severity:.2}").replace('.', "_"))
}

fn fold_severity(m: &[f32; 9], severity: f32) -> [f32; 9] {
    const IDENTITY: [f32; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let mut out = [0.0f32; 9];
    for i in 0..9 {
        out[i] = severity * m[i] + (1.0 - severity) * IDENTITY[i];
    }
    out
}

/// 5×4 feColorMatrix values for a 3×3 color transform: the RGB block,
/// zero offsets, and an alpha row that passes alpha through.
fn color_matrix_values(m: &[f32; 9]) -> String {
    format!(
        "{:.5} {:.5} {:.5} 0 0 {:.5} {:.5} {:.5} 0 0 {:.5} {:.5} {:.5} 0 0 0 0 0 1 0",
        m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
    )
}

/// Mask matrix: every color row computes the scaled separation dot
/// product (clamped by the filter to 0 or 1); alpha is forced to 1 so the
/// arithmetic composites reassemble the source alpha unchanged.
fn mask_matrix_values(n: [f32; 3]) -> String {
    let r = format!(
        "{:.0} {:.0} {:.0} 0 0",
        n[0] * SEPARATION_SCALE,
        n[1] * SEPARATION_SCALE,
        n[2] * SEPARATION_SCALE
    );
    format!("{r} {r} {r} 0 0 0 0 1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_green_filters_are_a_single_matrix() {
        for d in [Deficiency::Protan, Deficiency::Deutan] {
            let markup = filter_markup(d, 1.0);
            assert_eq!(markup.matches("<feColorMatrix").count(), 1);
            assert!(markup.contains("color-interpolation-filters=\"linearRGB\""));
        }
    }

    #[test]
    fn tritan_filter_carries_the_two_plane_graph() {
        let markup = filter_markup(Deficiency::Tritan, 1.0);
        assert_eq!(markup.matches("<feColorMatrix").count(), 3);
        assert_eq!(markup.matches("<feComposite").count(), 3);
        assert!(markup.contains("result=\"proj1\""));
        assert!(markup.contains("result=\"proj2\""));
        assert!(markup.contains("result=\"mask\""));
    }

    #[test]
    fn zero_severity_folds_to_the_identity_matrix() {
        let markup = vienot_filter_markup(Deficiency::Protan, 0.0);
        assert!(markup.contains("1.00000 0.00000 0.00000 0 0 0.00000 1.00000 0.00000 0 0"));
    }

    #[test]
    fn full_severity_emits_the_raw_table() {
        let markup = vienot_filter_markup(Deficiency::Deutan, 1.0);
        assert!(markup.contains("0.29031 0.70969"));
    }

    #[test]
    fn filter_ids_encode_deficiency_and_severity() {
        assert!(filter_markup(Deficiency::Tritan, 0.55).contains("id=\"tritan-0_55\""));
        assert!(filter_markup(Deficiency::Protan, 1.0).contains("id=\"protan-1_00\""));
    }
}
