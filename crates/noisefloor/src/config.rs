//! Noise profiler configuration and transform-size constants.

/// Default analysis transform length in samples.
pub const DEFAULT_TRANSFORM_SIZE: usize = 2048;

/// Smallest transform length that still yields a DC and a Nyquist bin.
pub const MIN_TRANSFORM_SIZE: usize = 2;

/// Number of non-redundant frequency bins (DC through Nyquist) of a real
/// transform of `transform_size` samples.
#[inline]
pub const fn num_bins(transform_size: usize) -> usize {
    transform_size / 2 + 1
}

/// Returns true if `transform_size` can be used to build an estimator.
#[inline]
pub const fn is_valid_transform_size(transform_size: usize) -> bool {
    transform_size >= MIN_TRANSFORM_SIZE && transform_size % 2 == 0
}

/// Configuration for a [`NoiseProfiler`](crate::NoiseProfiler).
///
/// # Example
///
/// ```
/// use noisefloor::ProfilerConfig;
///
/// let config = ProfilerConfig {
///     transform_size: 1024,
///     ..Default::default()
/// };
/// assert!(!config.capture_on_start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilerConfig {
    /// Length of the analysis transform feeding the profiler (default: 2048).
    /// Must be even and at least [`MIN_TRANSFORM_SIZE`].
    pub transform_size: usize,
    /// Start in the capturing state (default: false).
    pub capture_on_start: bool,
}

impl ProfilerConfig {
    /// Number of bins every submitted spectrum must have.
    pub const fn num_bins(&self) -> usize {
        num_bins(self.transform_size)
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            transform_size: DEFAULT_TRANSFORM_SIZE,
            capture_on_start: false,
        }
    }
}
