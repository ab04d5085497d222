//! Background noise profiling for spectral noise reduction.
//!
//! Learns the noise floor of an audio signal as a per-bin power spectrum,
//! averaged over every analysis block captured since the last reset. The
//! transform that produces the spectra and the stage that applies gains
//! from the profile are left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use noisefloor::{NoiseProfiler, ProfilerConfig};
//!
//! let config = ProfilerConfig {
//!     transform_size: 512,
//!     capture_on_start: true,
//! };
//! let mut profiler = NoiseProfiler::new(&config)?;
//! let control = profiler.control(); // hand this to the UI thread
//!
//! // For each analysis block, on the audio thread:
//! let power_spectrum = vec![1.0e-4f32; config.num_bins()];
//! profiler.process(&power_spectrum)?;
//!
//! // "Stop learning" from the UI:
//! control.stop_capture();
//!
//! if let Some(noise) = profiler.noise_profile() {
//!     assert_eq!(noise.len(), 257);
//! }
//! # Ok::<(), noisefloor::Error>(())
//! ```

mod capture;
pub mod config;
mod error;
mod noise_estimator;
pub mod stats;

// Public re-exports.
pub use capture::{CaptureControl, NoiseProfiler};
pub use config::ProfilerConfig;
pub use error::Error;
pub use noise_estimator::NoiseSpectrumEstimator;
pub use stats::ProfileStats;
