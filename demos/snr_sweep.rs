//! SNR sweep over noise level and filter design
//!
//! Runs the receiver preset (AM on a 200 Hz carrier) through every filter
//! design at a few tap counts, then raises the noise. Shows:
//! - How the moving average leaks the 2·fc mixer image
//! - The windowed-sinc filters holding SNR as taps grow
//! - SNR falling as noise rises, with the same seeded draw scaled up
//!
//! Run with: cargo run --example snr_sweep

use iqscope::dsp::Window;
use iqscope::pipeline::{self, FilterDesign};
use iqscope::SimConfig;

const TAPS: &[usize] = &[21, 51, 101, 201];
const NOISE: &[f64] = &[0.0, 0.05, 0.1, 0.25, 0.5];
const SEED: u64 = 42;

fn format_db(db: f64) -> String {
    if db.is_infinite() {
        "inf".to_string()
    } else {
        format!("{db:.1}")
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let designs = [
        FilterDesign::MovingAverage,
        FilterDesign::WindowedSinc(Window::Hamming),
        FilterDesign::WindowedSinc(Window::Blackman),
    ];

    print!("{:<20}", "filter \\ noise");
    for noise in NOISE {
        print!("{:>9.2}", noise);
    }
    println!();

    for design in designs {
        for &taps in TAPS {
            print!("{:<20}", format!("{} × {}", design.name(), taps));
            for &noise in NOISE {
                let config = SimConfig::receiver()
                    .with_filter(design, taps, 60.0)
                    .with_noise(noise)
                    .with_seed(SEED);
                let output = pipeline::run(&config)?;
                print!("{:>9}", format_db(output.snr_db()));
            }
            println!();
        }
    }

    Ok(())
}
