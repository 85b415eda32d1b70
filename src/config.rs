//! # Configuration Module
//!
//! Configuration structures and validation for simulation runs. This is
//! the common interface between the CLI and the library: the CLI parses
//! arguments into a [`SimulationConfig`], validates it, and converts it
//! into the [`SimulationOptions`](crate::SimulationOptions) struct the
//! library consumes.
//!
//! ## Validation rules
//!
//! - Input and output paths must be non-empty.
//! - Severity must be a finite number. It is deliberately NOT clamped to
//!   [0.0, 1.0]: out-of-range severities are documented pass-through
//!   behavior of the simulation (they extrapolate), not a configuration
//!   error.
//!
//! ## Examples
//!
//! ```rust
//! use cvd_simulator::config::{Algorithm, SimulationConfig};
//! use cvd_simulator::Deficiency;
//!
//! let config = SimulationConfig::new(
//!     "screenshot.png".to_string(),
//!     "screenshot_deutan.png".to_string(),
//!     Deficiency::Deutan,
//!     0.8,
//!     Algorithm::Auto,
//! );
//! assert!(config.validate().is_ok());
//! let options = config.to_options();
//! ```

use cvd_core::Deficiency;

/// Which simulation algorithm to run.
///
/// `Auto` is the fixed dispatch policy of the core (Brettel 1997 for
/// tritanopia, Viénot 1999 otherwise); the other variants force one
/// algorithm for comparison runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Pick the best algorithm for the deficiency.
    Auto,
    /// Force the Brettel 1997 two-plane algorithm.
    #[clap(name = "brettel")]
    Brettel1997,
    /// Force the Viénot 1999 single-matrix algorithm.
    #[clap(name = "vienot")]
    Vienot1999,
}

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Path of the image to read.
    pub input: String,
    /// Path the simulated image is written to.
    pub output: String,
    /// Deficiency to simulate.
    pub deficiency: Deficiency,
    /// Blend factor between the original (0.0) and fully simulated (1.0)
    /// color.
    pub severity: f32,
    /// Algorithm selection.
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    pub fn new(
        input: String,
        output: String,
        deficiency: Deficiency,
        severity: f32,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            input,
            output,
            deficiency,
            severity,
            algorithm,
        }
    }

    /// Validate the configuration, returning a human-readable message on
    /// failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("Input path must not be empty".to_string());
        }
        if self.output.is_empty() {
            return Err("Output path must not be empty".to_string());
        }
        if !self.severity.is_finite() {
            return Err(format!("Severity must be a finite number, got {}", self.severity));
        }
        Ok(())
    }

    /// Convert to the options struct consumed by
    /// [`run_simulation`](crate::run_simulation).
    pub fn to_options(&self) -> crate::SimulationOptions {
        crate::SimulationOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            deficiency: self.deficiency,
            severity: self.severity,
            algorithm: self.algorithm,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: "simulated.png".to_string(),
            deficiency: Deficiency::Protan,
            severity: 1.0,
            algorithm: Algorithm::Auto,
        }
    }
}
