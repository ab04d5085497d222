//! Rolling-mean noise power spectrum estimation.
//!
//! Averages every power spectrum submitted since the last reset, bin by bin,
//! into a single noise profile. The mean is unweighted: old blocks are never
//! forgotten, so the estimate converges to the true mean of a stationary
//! noise floor.

use crate::config;
use crate::error::Error;

/// Per-bin running-mean estimator of the background noise power spectrum.
///
/// The estimator is either empty (no profile) or ready (at least one block
/// averaged since construction or the last [`reset`](Self::reset)).
///
/// # Example
///
/// ```
/// use noisefloor::NoiseSpectrumEstimator;
///
/// let mut estimator = NoiseSpectrumEstimator::new(4)?;
/// assert!(!estimator.is_available());
///
/// estimator.update(&[2.0, 4.0, 6.0])?;
/// estimator.update(&[4.0, 8.0, 12.0])?;
/// assert_eq!(estimator.noise_spectrum(), &[3.0, 6.0, 9.0]);
/// # Ok::<(), noisefloor::Error>(())
/// ```
#[derive(derive_more::Debug)]
pub struct NoiseSpectrumEstimator {
    transform_size: usize,
    #[debug(skip)]
    noise_spectrum: Box<[f32]>,
    available: bool,
    // Kept as a float so the mean update divides without conversion.
    block_count: f32,
}

impl NoiseSpectrumEstimator {
    /// Creates an empty estimator for spectra of a `transform_size`-point
    /// real transform (`transform_size / 2 + 1` bins).
    ///
    /// Fails if `transform_size` is odd or smaller than
    /// [`MIN_TRANSFORM_SIZE`](crate::config::MIN_TRANSFORM_SIZE), or if the
    /// bin buffer cannot be allocated.
    pub fn new(transform_size: usize) -> Result<Self, Error> {
        if !config::is_valid_transform_size(transform_size) {
            return Err(Error::InvalidTransformSize { transform_size });
        }

        let bins = config::num_bins(transform_size);
        let mut noise_spectrum = Vec::new();
        noise_spectrum
            .try_reserve_exact(bins)
            .map_err(|_| Error::AllocationFailed { bins })?;
        noise_spectrum.resize(bins, 0.0);

        tracing::trace!(transform_size, bins, "created noise spectrum estimator");

        Ok(Self {
            transform_size,
            noise_spectrum: noise_spectrum.into_boxed_slice(),
            available: false,
            block_count: 0.0,
        })
    }

    /// Discards the current profile. The next [`update`](Self::update)
    /// starts a new average from scratch.
    pub fn reset(&mut self) {
        self.available = false;
        self.block_count = 0.0;
        self.noise_spectrum.fill(0.0);
    }

    /// Returns true once at least one spectrum has been averaged since
    /// construction or the last reset.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Folds one power spectrum into the running mean.
    ///
    /// `spectrum` must hold one non-negative power value per bin, DC first.
    /// A spectrum of the wrong length is rejected before any state changes.
    pub fn update(&mut self, spectrum: &[f32]) -> Result<(), Error> {
        if spectrum.len() != self.noise_spectrum.len() {
            return Err(Error::SpectrumLengthMismatch {
                expected: self.noise_spectrum.len(),
                actual: spectrum.len(),
            });
        }
        debug_assert!(
            spectrum.iter().all(|&p| p >= 0.0),
            "power spectrum values must be non-negative"
        );

        self.block_count += 1.0;

        if self.block_count <= 1.0 {
            self.noise_spectrum.copy_from_slice(spectrum);
        } else {
            let count = self.block_count;
            for (noise, &power) in self.noise_spectrum.iter_mut().zip(spectrum) {
                *noise += (power - *noise) / count;
            }
        }

        self.available = true;
        Ok(())
    }

    /// The current noise power estimate, one value per bin (all zero while
    /// no profile is available).
    #[inline]
    pub fn noise_spectrum(&self) -> &[f32] {
        &self.noise_spectrum
    }

    /// Length of the analysis transform this estimator was built for.
    #[inline]
    pub fn transform_size(&self) -> usize {
        self.transform_size
    }

    /// Number of frequency bins (DC through Nyquist).
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.noise_spectrum.len()
    }

    /// Number of spectra averaged since construction or the last reset.
    #[inline]
    pub fn num_blocks(&self) -> u64 {
        self.block_count as u64
    }
}
