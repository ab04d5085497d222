//! Property tests for the noise spectrum estimator and profiler.

use noisefloor::{NoiseProfiler, NoiseSpectrumEstimator, ProfilerConfig};
use noisefloor_proptest::comparison::{compare_f32, relative_tolerance};
use noisefloor_proptest::generators::{
    power_spectra, power_spectrum, reference_mean, transform_and_spectra, transform_size,
};
use proptest::prelude::*;
use test_strategy::proptest;

#[proptest]
fn fresh_estimator_is_cold(#[strategy(transform_size(8192))] size: usize) {
    let est = NoiseSpectrumEstimator::new(size).unwrap();
    prop_assert!(!est.is_available());
    prop_assert_eq!(est.num_bins(), size / 2 + 1);
    prop_assert!(est.noise_spectrum().iter().all(|&v| v == 0.0));
}

#[proptest]
fn first_update_is_exact(#[strategy(power_spectrum(65))] spectrum: Vec<f32>) {
    let mut est = NoiseSpectrumEstimator::new(128).unwrap();
    est.update(&spectrum).unwrap();
    prop_assert!(est.is_available());
    prop_assert_eq!(est.noise_spectrum(), spectrum.as_slice());
}

#[proptest]
fn estimate_is_running_mean(
    #[strategy(transform_and_spectra(256, 40))] input: (usize, Vec<Vec<f32>>),
) {
    let (size, spectra) = input;
    let mut est = NoiseSpectrumEstimator::new(size).unwrap();
    for spectrum in &spectra {
        est.update(spectrum).unwrap();
    }

    let expected = reference_mean(&spectra);
    let result = compare_f32(
        est.noise_spectrum(),
        &expected,
        relative_tolerance(&expected, 1e-4),
    );
    prop_assert!(result.is_match(), "{}", result);
    prop_assert_eq!(est.num_blocks(), spectra.len() as u64);
}

#[proptest]
fn estimate_stays_non_negative(#[strategy(power_spectra(33, 1, 60))] spectra: Vec<Vec<f32>>) {
    let mut est = NoiseSpectrumEstimator::new(64).unwrap();
    for spectrum in &spectra {
        est.update(spectrum).unwrap();
        prop_assert!(est.noise_spectrum().iter().all(|&v| v >= 0.0));
    }
}

#[proptest]
fn estimate_bounded_by_input_range(#[strategy(power_spectra(17, 2, 30))] spectra: Vec<Vec<f32>>) {
    let mut est = NoiseSpectrumEstimator::new(32).unwrap();
    for spectrum in &spectra {
        est.update(spectrum).unwrap();
    }
    for (k, &noise) in est.noise_spectrum().iter().enumerate() {
        let lo = spectra.iter().map(|s| s[k]).fold(f32::INFINITY, f32::min);
        let hi = spectra.iter().map(|s| s[k]).fold(0.0f32, f32::max);
        let slack = relative_tolerance(&[hi], 1e-4);
        prop_assert!(
            noise >= lo - slack && noise <= hi + slack,
            "bin {} = {} outside [{}, {}]",
            k,
            noise,
            lo,
            hi
        );
    }
}

#[proptest]
fn reset_behaves_like_fresh_instance(
    #[strategy(power_spectra(9, 1, 10))] history: Vec<Vec<f32>>,
    #[strategy(power_spectra(9, 1, 10))] spectra: Vec<Vec<f32>>,
) {
    let mut reused = NoiseSpectrumEstimator::new(16).unwrap();
    for spectrum in &history {
        reused.update(spectrum).unwrap();
    }
    reused.reset();
    prop_assert!(!reused.is_available());
    prop_assert!(reused.noise_spectrum().iter().all(|&v| v == 0.0));

    let mut fresh = NoiseSpectrumEstimator::new(16).unwrap();
    for spectrum in &spectra {
        reused.update(spectrum).unwrap();
        fresh.update(spectrum).unwrap();
    }
    prop_assert_eq!(reused.noise_spectrum(), fresh.noise_spectrum());
    prop_assert_eq!(reused.num_blocks(), fresh.num_blocks());
}

#[proptest]
fn wrong_length_never_mutates(
    #[strategy(power_spectrum(9))] first: Vec<f32>,
    #[strategy(0usize..32)] bad_len: usize,
) {
    prop_assume!(bad_len != 9);
    let mut est = NoiseSpectrumEstimator::new(16).unwrap();
    est.update(&first).unwrap();

    let bad = vec![1.0f32; bad_len];
    prop_assert!(est.update(&bad).is_err());
    prop_assert_eq!(est.noise_spectrum(), first.as_slice());
    prop_assert_eq!(est.num_blocks(), 1);
}

#[proptest]
fn idle_profiler_ignores_spectra(#[strategy(power_spectra(5, 1, 10))] spectra: Vec<Vec<f32>>) {
    let mut profiler = NoiseProfiler::new(&ProfilerConfig {
        transform_size: 8,
        capture_on_start: false,
    })
    .unwrap();
    for spectrum in &spectra {
        profiler.process(spectrum).unwrap();
    }
    prop_assert!(profiler.noise_profile().is_none());
    prop_assert_eq!(profiler.statistics().blocks_captured, 0);
}

#[test]
fn scenario_two_blocks_three_bins() {
    let mut est = NoiseSpectrumEstimator::new(4).unwrap();
    est.update(&[2.0, 4.0, 6.0]).unwrap();
    est.update(&[4.0, 8.0, 12.0]).unwrap();
    assert_eq!(est.noise_spectrum(), &[3.0, 6.0, 9.0]);
    assert!(est.is_available());
}

#[test]
fn scenario_capture_session() {
    let mut profiler = NoiseProfiler::new(&ProfilerConfig {
        transform_size: 2,
        capture_on_start: false,
    })
    .unwrap();
    let control = profiler.control();

    control.start_capture();
    profiler.process(&[10.0, 10.0]).unwrap();

    // User restarts learning.
    control.request_reset();
    for (power, expected) in [(1.0, 1.0), (3.0, 2.0), (5.0, 3.0)] {
        profiler.process(&[power, power]).unwrap();
        assert_eq!(profiler.noise_profile(), Some(&[expected, expected][..]));
    }

    control.stop_capture();
    profiler.process(&[1000.0, 1000.0]).unwrap();

    let stats = profiler.statistics();
    assert_eq!(stats.blocks_captured, 3);
    assert!(!stats.capturing);
    assert_eq!(stats.mean_noise_power, Some(3.0));
}
