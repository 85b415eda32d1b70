//! Error types for the image-file simulation layer.
//!
//! The algorithmic core has almost no error surface (bad buffer geometry
//! is the only failure), so this stays small: one enum covering the
//! decode/encode boundary and configuration mistakes. Binaries wrap these
//! in `anyhow` at the top level.

use std::fmt;

#[derive(Debug)]
pub enum SimulatorError {
    /// The configuration failed validation before any work started.
    Config(String),
    /// The image codec could not decode or encode a file.
    Image(image::ImageError),
    /// The core transform rejected the buffer geometry.
    Simulate(cvd_core::SimulateError),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            SimulatorError::Image(e) => write!(f, "Image codec error: {e}"),
            SimulatorError::Simulate(e) => write!(f, "Simulation error: {e}"),
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::Image(e) => Some(e),
            SimulatorError::Simulate(e) => Some(e),
            SimulatorError::Config(_) => None,
        }
    }
}

impl From<image::ImageError> for SimulatorError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<cvd_core::SimulateError> for SimulatorError {
    fn from(e: cvd_core::SimulateError) -> Self {
        Self::Simulate(e)
    }
}
