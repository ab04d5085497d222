//! Proptest strategies for transform sizes and power spectra.

use proptest::collection::vec;
use proptest::prelude::*;

/// Largest power value produced by the spectrum strategies.
pub const MAX_POWER: f32 = 1.0e3;

/// Even transform sizes in `2..=max_transform_size`.
pub fn transform_size(max_transform_size: usize) -> impl Strategy<Value = usize> {
    (1usize..=max_transform_size.max(2) / 2).prop_map(|half| half * 2)
}

/// One non-negative power spectrum with `num_bins` values.
pub fn power_spectrum(num_bins: usize) -> impl Strategy<Value = Vec<f32>> {
    vec(0.0f32..=MAX_POWER, num_bins)
}

/// Between `min_blocks` and `max_blocks` power spectra of `num_bins` values
/// each.
pub fn power_spectra(
    num_bins: usize,
    min_blocks: usize,
    max_blocks: usize,
) -> impl Strategy<Value = Vec<Vec<f32>>> {
    vec(power_spectrum(num_bins), min_blocks..=max_blocks)
}

/// A transform size together with a sequence of matching power spectra.
pub fn transform_and_spectra(
    max_transform_size: usize,
    max_blocks: usize,
) -> impl Strategy<Value = (usize, Vec<Vec<f32>>)> {
    transform_size(max_transform_size).prop_flat_map(move |size| {
        (Just(size), power_spectra(size / 2 + 1, 1, max_blocks))
    })
}

/// Per-bin arithmetic mean of `spectra`, accumulated in `f64`.
pub fn reference_mean(spectra: &[Vec<f32>]) -> Vec<f32> {
    let Some(first) = spectra.first() else {
        return Vec::new();
    };
    let mut sums = vec![0.0f64; first.len()];
    for spectrum in spectra {
        for (sum, &v) in sums.iter_mut().zip(spectrum) {
            *sum += f64::from(v);
        }
    }
    let n = spectra.len() as f64;
    sums.into_iter().map(|s| (s / n) as f32).collect()
}
