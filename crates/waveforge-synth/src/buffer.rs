//! Waveform buffer: the time-series data model every engine operation
//! produces and consumes.

/// An ordered, fixed-length sequence of real-valued audio samples.
///
/// Samples are nominally in [-1.0, 1.0]; sums produced by additive mixing
/// may transiently exceed that range. Range violations are resolved only
/// by the hard clip in quantization, never earlier, so relative levels
/// between segments stay predictable.
///
/// Index `i` corresponds to time `i / sample_rate`. Buffers are value
/// types: transforms produce new buffers rather than mutating shared
/// state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveBuffer {
    samples: Vec<f64>,
}

impl WaveBuffer {
    /// Wraps raw samples in a buffer.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Creates a zero-filled buffer of the given length.
    pub fn silence(num_samples: usize) -> Self {
        Self {
            samples: vec![0.0; num_samples],
        }
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrows the raw samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, yielding its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Largest absolute sample value (0.0 for an empty buffer).
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
    }
}

impl From<Vec<f64>> for WaveBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self::from_samples(samples)
    }
}
