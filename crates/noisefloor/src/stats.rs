//! Noise profile statistics.

use crate::noise_estimator::NoiseSpectrumEstimator;

/// Snapshot of the learned noise profile.
///
/// The `Option` fields are `None` while no profile is available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStats {
    /// Number of spectra averaged since the last reset.
    pub blocks_captured: u64,
    /// Whether the profiler was capturing when the snapshot was taken.
    pub capturing: bool,
    /// Mean noise power over all bins.
    pub mean_noise_power: Option<f32>,
    /// Index of the bin with the highest noise power.
    pub peak_bin: Option<usize>,
}

impl ProfileStats {
    pub(crate) fn from_estimator(estimator: &NoiseSpectrumEstimator, capturing: bool) -> Self {
        if !estimator.is_available() {
            return Self {
                blocks_captured: 0,
                capturing,
                ..Default::default()
            };
        }

        let spectrum = estimator.noise_spectrum();
        let mean = spectrum.iter().sum::<f32>() / spectrum.len() as f32;
        let peak_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| k);

        Self {
            blocks_captured: estimator.num_blocks(),
            capturing,
            mean_noise_power: Some(mean),
            peak_bin,
        }
    }
}
