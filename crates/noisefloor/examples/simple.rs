//! Minimal noise profiling demo.
//!
//! Feeds synthetic power spectra of a hiss-like noise floor to a profiler,
//! stops capture, and prints the learned profile for a few bins.
//!
//! ```sh
//! cargo run -p noisefloor --example simple
//! ```

use noisefloor::{NoiseProfiler, ProfilerConfig};

fn main() {
    let config = ProfilerConfig {
        transform_size: 256,
        capture_on_start: true,
    };
    let mut profiler = NoiseProfiler::new(&config).unwrap();
    let control = profiler.control();

    // Learn from 100 blocks of noise whose power falls off with frequency.
    for block in 0..100 {
        let spectrum = noise_block(config.num_bins(), block);
        profiler.process(&spectrum).unwrap();
    }

    // Done learning; later blocks (speech, music, ...) don't touch the profile.
    control.stop_capture();
    let loud = vec![1.0f32; config.num_bins()];
    profiler.process(&loud).unwrap();

    let profile = profiler
        .noise_profile()
        .expect("profile should be available after capture");
    for k in [0, 16, 64, 128] {
        println!("bin {k:>3}: {:.3e}", profile[k]);
    }

    let stats = profiler.statistics();
    assert_eq!(stats.blocks_captured, 100);
    println!(
        "Learned a {}-bin noise profile from {} blocks.",
        profile.len(),
        stats.blocks_captured
    );
}

/// A pink-ish noise power spectrum with a small block-dependent ripple.
fn noise_block(num_bins: usize, block: usize) -> Vec<f32> {
    (0..num_bins)
        .map(|k| {
            let ripple = 1.0 + 0.2 * ((k * 7 + block * 13) as f32 * 0.1).sin();
            1.0e-4 / (1.0 + k as f32) * ripple
        })
        .collect()
}
