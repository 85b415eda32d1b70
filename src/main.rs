use anyhow::Result;
use clap::Parser;
use cvd_simulator::Deficiency;
use cvd_simulator::config::{Algorithm, SimulationConfig};

/// Simulate color vision deficiencies on image files:
/// - Protan/Deutan: Viénot 1999 single-matrix simulation
/// - Tritan: Brettel 1997 two-plane simulation
#[derive(Parser, Debug)]
#[command(name = "cvd")]
#[command(about = "👁 Simulate color vision deficiencies on an image for accessibility testing")]
#[command(
    long_about = "Simulate how an image appears to viewers with a color vision deficiency.
The right algorithm is picked per deficiency automatically; partial (anomalous)
deficiencies are modeled with the severity blend factor."
)]
struct Args {
    /// Input image path (anything the image crate can decode)
    #[arg(help = "Image to simulate (PNG, JPEG, ...)")]
    input: String,

    /// Output image path
    #[arg(
        short,
        long,
        default_value = "simulated.png",
        help = "Where to write the simulated image (format from extension)"
    )]
    output: String,

    /// Deficiency to simulate
    #[arg(
        short,
        long,
        value_enum,
        default_value = "protan",
        help = "Deficiency type: protan (red-blind), deutan (green-blind), tritan (blue-blind)"
    )]
    deficiency: Deficiency,

    /// Severity of the deficiency
    #[arg(
        short,
        long,
        default_value_t = 1.0,
        help = "Severity in [0.0, 1.0]: 1.0 = complete dichromacy, lower = anomalous trichromacy"
    )]
    severity: f32,

    /// Simulation algorithm
    #[arg(
        short,
        long,
        value_enum,
        default_value = "auto",
        help = "Algorithm: auto (recommended), brettel (force Brettel 1997), vienot (force Viénot 1999)"
    )]
    algorithm: Algorithm,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SimulationConfig::new(
        args.input,
        args.output,
        args.deficiency,
        args.severity,
        args.algorithm,
    );

    config.validate().map_err(anyhow::Error::msg)?;
    let options = config.to_options();
    cvd_simulator::run_simulation(&options)?;

    println!(
        "Simulated {:?} at severity {:.2}: {} -> {}",
        options.deficiency, options.severity, options.input, options.output
    );
    Ok(())
}
