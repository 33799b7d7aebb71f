//! Sine oscillator and phase-continuous frequency sweeps.
//!
//! Both generators share one phase accumulator: the phase for sample `i`
//! is the running sum of instantaneous angular frequency up to `i`. For a
//! constant frequency this reduces to `2π f i / sample_rate`, so a sweep
//! with equal start and end frequencies is sample-for-sample identical to
//! a plain tone. Evaluating `sin(2π f(t) t)` per sample instead would
//! produce audible phase discontinuities whenever the frequency varies.

use std::f64::consts::PI;

/// Full circle in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Running-sum phase accumulator.
///
/// `advance` returns the phase for the current sample and then steps it
/// by the instantaneous angular frequency, keeping the waveform
/// continuous across frequency changes.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator starting at phase 0.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the current phase in radians, then advances it for the
    /// given instantaneous frequency.
    pub fn advance(&mut self, frequency_hz: f64) -> f64 {
        let phase = self.phase;
        self.phase += TWO_PI * frequency_hz / self.sample_rate;
        // Keep the argument to sin() small over long buffers.
        if self.phase >= TWO_PI {
            self.phase -= TWO_PI;
        } else if self.phase <= -TWO_PI {
            self.phase += TWO_PI;
        }
        phase
    }
}

/// Generates a pure sine tone.
///
/// Sample `i` is `amplitude * sin(2π * frequency_hz * i / sample_rate)`.
/// Negative frequency yields a phase-reversed tone; zero or negative
/// amplitude yields silence or a phase-inverted tone. Both are valid.
pub fn tone(frequency_hz: f64, amplitude: f64, num_samples: usize, sample_rate: f64) -> Vec<f64> {
    let mut output = Vec::with_capacity(num_samples);
    let mut phase_acc = PhaseAccumulator::new(sample_rate);

    for _ in 0..num_samples {
        let phase = phase_acc.advance(frequency_hz);
        output.push(amplitude * phase.sin());
    }

    output
}

/// Generates a linear chirp from `freq_start_hz` to `freq_end_hz`.
///
/// The instantaneous frequency at sample `i` is the linear interpolation
/// at `t = i / num_samples`; the phase is accumulated per sample. Each
/// simultaneous sweep (e.g. a doubled harmonic) needs its own call and
/// therefore its own accumulator.
pub fn sweep(
    freq_start_hz: f64,
    freq_end_hz: f64,
    amplitude: f64,
    num_samples: usize,
    sample_rate: f64,
) -> Vec<f64> {
    let mut output = Vec::with_capacity(num_samples);
    let mut phase_acc = PhaseAccumulator::new(sample_rate);

    for i in 0..num_samples {
        let t = i as f64 / num_samples as f64;
        let freq = freq_start_hz + (freq_end_hz - freq_start_hz) * t;
        let phase = phase_acc.advance(freq);
        output.push(amplitude * phase.sin());
    }

    output
}
