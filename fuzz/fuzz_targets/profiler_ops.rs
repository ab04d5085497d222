#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use noisefloor::{NoiseProfiler, ProfilerConfig};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Half of the transform size, before clamping.
    half_size: u8,
    capture_on_start: bool,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Start,
    Stop,
    RequestReset,
    Reset,
    /// Process a spectrum built from `power` with `len_delta` bins too many
    /// or too few.
    Process { power: f32, len_delta: i8 },
}

fuzz_target!(|input: FuzzInput| {
    let transform_size = 2 * (input.half_size as usize + 1);
    let config = ProfilerConfig {
        transform_size,
        capture_on_start: input.capture_on_start,
    };
    let mut profiler = NoiseProfiler::new(&config).unwrap();
    let control = profiler.control();
    let num_bins = config.num_bins();

    for op in &input.ops {
        match *op {
            Op::Start => control.start_capture(),
            Op::Stop => control.stop_capture(),
            Op::RequestReset => control.request_reset(),
            Op::Reset => profiler.reset(),
            Op::Process { power, len_delta } => {
                if !power.is_finite() || power < 0.0 {
                    continue;
                }
                let len = num_bins.saturating_add_signed(len_delta as isize);
                let spectrum = vec![power; len];
                let before = profiler.estimator().num_blocks();
                match profiler.process(&spectrum) {
                    Ok(()) => assert!(profiler.estimator().num_blocks() <= before + 1),
                    Err(_) => {
                        assert_ne!(len, num_bins);
                        assert_eq!(profiler.estimator().num_blocks(), before);
                    }
                }
            }
        }

        let available = profiler.noise_profile().is_some();
        assert_eq!(available, profiler.estimator().num_blocks() > 0);
        if let Some(noise) = profiler.noise_profile() {
            assert_eq!(noise.len(), num_bins);
            assert!(noise.iter().all(|&v| v >= 0.0));
        }
    }
});
