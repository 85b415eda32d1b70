/// Benchmark comparing the throughput of the two simulation algorithms.
///
/// Time complexity: O(width * height * frames) for both algorithms; the
/// difference is constant-factor only (Brettel does one extra dot product
/// and carries two matrices through the cache instead of one).
use anyhow::Result;
use cvd_core::{Deficiency, SimulateError, simulate_cvd_brettel1997, simulate_cvd_vienot1999};
use std::time::{Duration, Instant};

type SimulateFn = fn(Deficiency, f32, &mut [u8], u32, u32, usize) -> Result<(), SimulateError>;

fn main() -> Result<()> {
    println!("CVD Simulation Throughput Benchmark");
    println!("═══════════════════════════════════");

    // Test with 1080p resolution
    let width: u32 = 1920;
    let height: u32 = 1080;
    let frames = 30;

    println!(
        "Benchmarking: {}x{} resolution, {} frames per case",
        width, height, frames
    );
    println!();

    let base = gradient_frame(width, height);
    let megapixels = (width as f64 * height as f64) / 1.0e6;

    let cases: [(&str, SimulateFn, Deficiency); 6] = [
        ("vienot1999 protan", simulate_cvd_vienot1999, Deficiency::Protan),
        ("vienot1999 deutan", simulate_cvd_vienot1999, Deficiency::Deutan),
        ("vienot1999 tritan", simulate_cvd_vienot1999, Deficiency::Tritan),
        ("brettel1997 protan", simulate_cvd_brettel1997, Deficiency::Protan),
        ("brettel1997 deutan", simulate_cvd_brettel1997, Deficiency::Deutan),
        ("brettel1997 tritan", simulate_cvd_brettel1997, Deficiency::Tritan),
    ];

    let mut vienot_total = Duration::ZERO;
    let mut brettel_total = Duration::ZERO;

    println!("Results:");
    println!("───────────");
    for (label, simulate, deficiency) in cases {
        let elapsed = run_case(simulate, deficiency, &base, width, height, frames)?;
        let ms_per_frame = elapsed.as_secs_f64() * 1000.0 / frames as f64;
        println!(
            "{:<20} {:>7.2} ms/frame  {:>8.1} MP/s",
            label,
            ms_per_frame,
            megapixels / (ms_per_frame / 1000.0)
        );
        if label.starts_with("vienot") {
            vienot_total += elapsed;
        } else {
            brettel_total += elapsed;
        }
    }

    println!();
    println!(
        "Viénot 1999 is {:.2}x faster than Brettel 1997 on this machine",
        brettel_total.as_secs_f64() / vienot_total.as_secs_f64()
    );
    println!("The automatic dispatcher only pays the Brettel cost for tritanopia.");
    Ok(())
}

fn run_case(
    simulate: SimulateFn,
    deficiency: Deficiency,
    base: &[u8],
    width: u32,
    height: u32,
    frames: usize,
) -> Result<Duration> {
    let mut scratch = vec![0u8; base.len()];
    let start = Instant::now();
    for _ in 0..frames {
        // Fresh copy per frame, like a capture pipeline handing over a new
        // buffer each time.
        scratch.copy_from_slice(base);
        simulate(deficiency, 1.0, &mut scratch, width, height, 0)?;
    }
    Ok(start.elapsed())
}

/// RGBA gradient covering a good spread of the gamut, so the benchmark
/// exercises both sRGB branches and (for Brettel) both half-planes.
fn gradient_frame(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; (width * height * 4) as usize];
    for y in 0..height {
        for x in 0..width {
            let i = ((y * width + x) * 4) as usize;
            data[i] = ((x as f32 / width as f32) * 255.0) as u8;
            data[i + 1] = ((y as f32 / height as f32) * 255.0) as u8;
            data[i + 2] = ((x ^ y) & 0xFF) as u8;
            data[i + 3] = 255;
        }
    }
    data
}
