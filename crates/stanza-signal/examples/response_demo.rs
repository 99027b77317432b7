//! Response demo: enumerate modes for a listening room and print the
//! synthesized curve's strongest regions.
//!
//! Run with: cargo run -p stanza-signal --example response_demo

use stanza_core::{AcousticParameters, ModeType, RoomGeometry, enumerate_modes};
use stanza_signal::{DEFAULT_RESOLUTION, ResponseCurves};

fn main() {
    let room = RoomGeometry::new(4.0, 3.0, 2.5);
    let params = AcousticParameters::new(343.0, 4);

    println!("=== Room Modes: {}x{}x{} m ===\n", room.length, room.width, room.height);

    let modes = enumerate_modes(&room, &params);
    println!(
        "{} modes ({} axial, {} tangential, {} oblique)",
        modes.total(),
        modes.axial.len(),
        modes.tangential.len(),
        modes.oblique.len()
    );

    println!("\nLowest axial modes:");
    println!("{:>10} {:>12}", "Mode", "Freq (Hz)");
    for record in modes.axial.iter().take(5) {
        println!("{:>10} {:>12.2}", record.label(), record.frequency);
    }

    let curves = ResponseCurves::from_modes(&modes, params.max_mode_index, DEFAULT_RESOLUTION);
    println!(
        "\nSampled response: {} points over 0..{:.0} Hz",
        curves.resolution(),
        curves.max_frequency
    );

    if let Some((freq, amplitude)) = curves.combined_peak() {
        println!("Combined curve peaks at {:.1} Hz (amplitude {:.4})", freq, amplitude);
    }

    println!("\nPer-type curve maxima:");
    for mode_type in ModeType::ALL {
        let peak = curves
            .by_type(mode_type)
            .iter()
            .copied()
            .fold(0.0f64, f64::max);
        println!("  {:<12} {:.4}", mode_type.label(), peak);
    }

    // Coarse ASCII rendering of the combined curve, 20 buckets.
    println!("\nCombined response (20-bucket maxima):");
    let bucket = curves.resolution() / 20;
    let peak = curves
        .combined
        .iter()
        .copied()
        .fold(0.0f64, f64::max)
        .max(1e-12);
    for i in 0..20 {
        let lo = i * bucket;
        let hi = (lo + bucket).min(curves.resolution());
        let max_in_bucket = curves.combined[lo..hi]
            .iter()
            .copied()
            .fold(0.0f64, f64::max);
        let bar = "#".repeat((max_in_bucket / peak * 40.0).round() as usize);
        println!("{:>6.0} Hz | {}", curves.frequency_at(lo), bar);
    }
}
