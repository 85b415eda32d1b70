//! # CVD Simulator Library
//!
//! Simulates color vision deficiencies (protanopia, deuteranopia,
//! tritanopia) on image files, for accessibility testing of screenshots
//! and UI renders.
//!
//! ## Architecture
//!
//! The library is organized into two layers:
//! - `cvd_core`: the per-pixel transform pipeline (sRGB decode, dichromat
//!   projection, severity blend, encode) over raw RGBA8 buffers
//! - this crate: file plumbing around the core, i.e. image decode/encode
//!   via the `image` crate, configuration, and error types
//!
//! The core never sees a file; this crate never does color math.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cvd_simulator::{run_simulation, SimulationOptions};
//! use cvd_simulator::config::Algorithm;
//! use cvd_simulator::Deficiency;
//!
//! # fn example() -> Result<(), cvd_simulator::SimulatorError> {
//! let options = SimulationOptions {
//!     input: "screenshot.png".to_string(),
//!     output: "screenshot_protan.png".to_string(),
//!     deficiency: Deficiency::Protan,
//!     severity: 1.0,
//!     algorithm: Algorithm::Auto,
//! };
//! run_simulation(&options)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use cvd_core::{Deficiency, SimulateError};
pub use error::SimulatorError;

use config::Algorithm;
use cvd_core::{simulate_cvd, simulate_cvd_brettel1997, simulate_cvd_vienot1999};
use image::RgbaImage;

/// Options for one simulation run, produced from a validated
/// [`config::SimulationConfig`].
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub input: String,
    pub output: String,
    pub deficiency: Deficiency,
    pub severity: f32,
    pub algorithm: Algorithm,
}

/// Read `options.input`, simulate the deficiency, write `options.output`.
///
/// The input is decoded to RGBA8 whatever its on-disk format; the output
/// format is chosen from the output path's extension by the `image`
/// crate. The transform itself runs in place on the decoded buffer.
pub fn run_simulation(options: &SimulationOptions) -> Result<(), SimulatorError> {
    let mut img = image::open(&options.input)?.to_rgba8();
    simulate_image(
        &mut img,
        options.deficiency,
        options.severity,
        options.algorithm,
    )?;
    img.save(&options.output)?;
    Ok(())
}

/// Simulate a deficiency in place on an already-decoded RGBA image.
///
/// For callers that manage their own image I/O; this is the whole bridge
/// between `image::RgbaImage` and the core's raw-buffer contract.
pub fn simulate_image(
    img: &mut RgbaImage,
    deficiency: Deficiency,
    severity: f32,
    algorithm: Algorithm,
) -> Result<(), SimulateError> {
    let (width, height) = img.dimensions();
    let pixels: &mut [u8] = img;
    match algorithm {
        Algorithm::Auto => simulate_cvd(deficiency, severity, pixels, width, height, 0),
        Algorithm::Brettel1997 => {
            simulate_cvd_brettel1997(deficiency, severity, pixels, width, height, 0)
        }
        Algorithm::Vienot1999 => {
            simulate_cvd_vienot1999(deficiency, severity, pixels, width, height, 0)
        }
    }
}
