//! Noise capture control.
//!
//! The [`NoiseProfiler`] lives on the audio thread and is the only owner of
//! the estimator. Other threads steer it through a [`CaptureControl`]
//! handle, which only flips atomic flags; the profiler picks the changes up
//! at the start of its next block. Nothing on the audio path locks or
//! allocates.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ProfilerConfig;
use crate::error::Error;
use crate::noise_estimator::NoiseSpectrumEstimator;
use crate::stats::ProfileStats;

#[derive(Debug, Default)]
struct ControlState {
    capturing: AtomicBool,
    reset_pending: AtomicBool,
}

/// Thread-safe handle for starting, stopping and resetting noise capture.
///
/// Cloning the handle shares the same state.
#[derive(Debug, Clone, Default)]
pub struct CaptureControl {
    state: Arc<ControlState>,
}

impl CaptureControl {
    fn new(capturing: bool) -> Self {
        let control = Self::default();
        control.state.capturing.store(capturing, Ordering::Release);
        control
    }

    /// Start feeding incoming spectra to the noise estimator.
    pub fn start_capture(&self) {
        self.state.capturing.store(true, Ordering::Release);
    }

    /// Stop feeding incoming spectra; the learned profile is kept.
    pub fn stop_capture(&self) {
        self.state.capturing.store(false, Ordering::Release);
    }

    /// Whether spectra are currently being captured.
    pub fn is_capturing(&self) -> bool {
        self.state.capturing.load(Ordering::Acquire)
    }

    /// Ask the profiler to discard its profile before the next block.
    pub fn request_reset(&self) {
        self.state.reset_pending.store(true, Ordering::Release);
    }

    /// Whether a reset has been requested but not yet applied.
    pub fn is_reset_pending(&self) -> bool {
        self.state.reset_pending.load(Ordering::Acquire)
    }

    fn take_reset_request(&self) -> bool {
        self.state.reset_pending.swap(false, Ordering::AcqRel)
    }
}

/// Audio-thread owner of a [`NoiseSpectrumEstimator`], driven by a
/// [`CaptureControl`].
///
/// # Example
///
/// ```
/// use noisefloor::{NoiseProfiler, ProfilerConfig};
///
/// let mut profiler = NoiseProfiler::new(&ProfilerConfig {
///     transform_size: 4,
///     ..Default::default()
/// })?;
/// let control = profiler.control();
///
/// // Not capturing yet: the spectrum is ignored.
/// profiler.process(&[1.0, 1.0, 1.0])?;
/// assert!(profiler.noise_profile().is_none());
///
/// control.start_capture();
/// profiler.process(&[1.0, 2.0, 3.0])?;
/// assert_eq!(profiler.noise_profile(), Some(&[1.0, 2.0, 3.0][..]));
/// # Ok::<(), noisefloor::Error>(())
/// ```
#[derive(Debug)]
pub struct NoiseProfiler {
    estimator: NoiseSpectrumEstimator,
    control: CaptureControl,
    // Capture state seen by the last processed block.
    was_capturing: bool,
}

impl NoiseProfiler {
    /// Create a profiler with an empty noise profile.
    pub fn new(config: &ProfilerConfig) -> Result<Self, Error> {
        let estimator = NoiseSpectrumEstimator::new(config.transform_size)?;
        tracing::debug!(
            transform_size = config.transform_size,
            capture_on_start = config.capture_on_start,
            "noise profiler created"
        );
        Ok(Self {
            estimator,
            control: CaptureControl::new(config.capture_on_start),
            was_capturing: config.capture_on_start,
        })
    }

    /// Returns a handle that other threads can use to steer capture.
    pub fn control(&self) -> CaptureControl {
        self.control.clone()
    }

    /// Process one analysis block.
    ///
    /// Applies a pending reset, then folds `spectrum` into the profile if
    /// capture is active. The spectrum is length-checked either way; on
    /// error nothing changes, including pending requests.
    pub fn process(&mut self, spectrum: &[f32]) -> Result<(), Error> {
        let expected = self.estimator.num_bins();
        if spectrum.len() != expected {
            return Err(Error::SpectrumLengthMismatch {
                expected,
                actual: spectrum.len(),
            });
        }

        if self.control.take_reset_request() {
            tracing::debug!(
                discarded_blocks = self.estimator.num_blocks(),
                "noise profile reset"
            );
            self.estimator.reset();
        }

        let capturing = self.control.is_capturing();
        if capturing != self.was_capturing {
            if capturing {
                tracing::debug!(blocks = self.estimator.num_blocks(), "noise capture started");
            } else {
                tracing::debug!(blocks = self.estimator.num_blocks(), "noise capture stopped");
            }
            self.was_capturing = capturing;
        }

        if capturing {
            self.estimator.update(spectrum)?;
        }
        Ok(())
    }

    /// Discard the profile immediately, from the owning thread.
    pub fn reset(&mut self) {
        self.control.take_reset_request();
        self.estimator.reset();
    }

    /// The learned noise power spectrum, or `None` if nothing has been
    /// captured since the last reset.
    pub fn noise_profile(&self) -> Option<&[f32]> {
        self.estimator
            .is_available()
            .then(|| self.estimator.noise_spectrum())
    }

    /// The underlying estimator.
    pub fn estimator(&self) -> &NoiseSpectrumEstimator {
        &self.estimator
    }

    /// Current profile statistics.
    pub fn statistics(&self) -> ProfileStats {
        ProfileStats::from_estimator(&self.estimator, self.control.is_capturing())
    }
}
