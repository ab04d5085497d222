//! Noise learning session with a separate control thread.
//!
//! An "audio" loop produces random noise power spectra while a control
//! thread plays the part of a UI: it starts capture, restarts learning once
//! and finally stops capture. The learned profile is compared against the
//! true noise floor.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p noisefloor --example learn_noise --features examples -- --blocks 400
//! ```

use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use noisefloor::{NoiseProfiler, ProfilerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Learn a synthetic noise profile")]
struct Args {
    /// Analysis transform length.
    #[arg(long, default_value_t = 1024)]
    transform_size: usize,

    /// Total number of analysis blocks to run.
    #[arg(long, default_value_t = 400)]
    blocks: usize,

    /// Noise floor level in dBFS.
    #[arg(long, default_value_t = -60.0, allow_hyphen_values = true)]
    level_db: f32,

    /// Seed for the noise generator.
    #[arg(long, default_value_t = 42)]
    seed: u32,
}

#[derive(Debug, Clone, Copy)]
enum UiEvent {
    Start,
    Relearn,
    Stop,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    ensure!(args.blocks >= 4, "need at least 4 blocks, got {}", args.blocks);

    let config = ProfilerConfig {
        transform_size: args.transform_size,
        capture_on_start: false,
    };
    let mut profiler = NoiseProfiler::new(&config).context("failed to create profiler")?;
    let control = profiler.control();

    let floor = 10.0f32.powf(args.level_db / 10.0);
    let schedule = [
        (args.blocks / 8, UiEvent::Start),
        (args.blocks / 4, UiEvent::Relearn),
        (args.blocks * 3 / 4, UiEvent::Stop),
    ];

    // The UI thread waits for block ticks and reacts on schedule.
    let (tick_tx, tick_rx) = mpsc::channel::<usize>();
    let (ack_tx, ack_rx) = mpsc::channel::<()>();
    let ui = thread::spawn(move || {
        for block in tick_rx {
            for &(at, event) in &schedule {
                if block == at {
                    tracing::info!(block, ?event, "ui event");
                    match event {
                        UiEvent::Start => control.start_capture(),
                        UiEvent::Relearn => control.request_reset(),
                        UiEvent::Stop => control.stop_capture(),
                    }
                }
            }
            if ack_tx.send(()).is_err() {
                break;
            }
        }
    });

    let mut rng = Lcg(args.seed);
    let mut spectrum = vec![0.0f32; config.num_bins()];
    for block in 0..args.blocks {
        tick_tx.send(block).context("ui thread exited early")?;
        ack_rx.recv().context("ui thread exited early")?;

        // After capture stops, a loud "speech" block must not leak in.
        let gain = if block > args.blocks * 3 / 4 { 1.0e4 } else { 1.0 };
        for p in spectrum.iter_mut() {
            // Exponentially distributed power: |X|^2 of complex white noise.
            *p = -floor * gain * (1.0 - rng.next_unit()).ln();
        }
        profiler.process(&spectrum)?;
    }
    drop(tick_tx);
    ui.join()
        .map_err(|_| anyhow::anyhow!("ui thread panicked"))?;

    let stats = profiler.statistics();
    let mean = stats
        .mean_noise_power
        .context("no noise profile was captured")?;
    let error_db = 10.0 * (mean / floor).log10();

    println!("captured blocks : {}", stats.blocks_captured);
    println!("true floor      : {:.3e}", floor);
    println!("learned mean    : {:.3e} ({error_db:+.2} dB)", mean);
    ensure!(error_db.abs() < 1.0, "learned floor is off by {error_db:.2} dB");
    Ok(())
}

/// Linear congruential generator; good enough for synthetic noise.
#[derive(Debug)]
struct Lcg(u32);

impl Lcg {
    fn next_unit(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(69069).wrapping_add(1);
        (self.0 >> 8) as f32 / (1u32 << 24) as f32
    }
}
