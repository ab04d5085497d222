//! Float buffer comparison with diagnostics.

use std::fmt;

/// Outcome of comparing two `f32` buffers element by element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    /// Number of compared elements.
    pub len: usize,
    /// Number of elements whose difference exceeds the tolerance.
    pub mismatches: usize,
    /// Index of the first mismatching element.
    pub first_mismatch: Option<usize>,
    /// Largest absolute difference seen.
    pub max_abs_diff: f32,
}

impl ComparisonResult {
    /// True if every element matched.
    pub fn is_match(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} mismatches, max_abs_diff={:.6e}",
            self.mismatches, self.len, self.max_abs_diff
        )?;
        if let Some(idx) = self.first_mismatch {
            write!(f, ", first at index {idx}")?;
        }
        Ok(())
    }
}

/// Compare `actual` against `expected` with an absolute `tolerance`.
///
/// A length difference counts every unpaired element as a mismatch.
/// NaN never matches anything, including NaN.
pub fn compare_f32(actual: &[f32], expected: &[f32], tolerance: f32) -> ComparisonResult {
    let len = actual.len().max(expected.len());
    let mut mismatches = len - actual.len().min(expected.len());
    let mut first_mismatch = (mismatches > 0).then(|| actual.len().min(expected.len()));
    let mut max_abs_diff = 0.0f32;

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        if diff.is_nan() || diff > tolerance {
            mismatches += 1;
            first_mismatch = Some(first_mismatch.map_or(i, |j| j.min(i)));
        }
        if diff > max_abs_diff {
            max_abs_diff = diff;
        }
    }

    ComparisonResult {
        len,
        mismatches,
        first_mismatch,
        max_abs_diff,
    }
}

/// Relative tolerance scaled to the magnitude of `expected`.
///
/// Useful for running means, whose rounding error grows with the values
/// averaged.
pub fn relative_tolerance(expected: &[f32], epsilon: f32) -> f32 {
    let peak = expected.iter().fold(0.0f32, |acc, &v| acc.max(v.abs()));
    epsilon * peak.max(1.0)
}
