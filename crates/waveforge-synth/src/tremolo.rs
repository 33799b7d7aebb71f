//! Amplitude tremolo.
//!
//! Multiplies a buffer by `1 + depth * sin(2π * rate * t)`, the
//! low-frequency amplitude wobble used by ring bursts (a classic phone
//! ring is a dual tone under a ~20 Hz tremolo). This is an
//! amplitude-domain transform like the envelope shaper; it performs no
//! filtering.

use crate::buffer::WaveBuffer;
use crate::oscillator::TWO_PI;

/// Applies a sine tremolo to a buffer.
///
/// `depth` is the modulation amount (0.1 gives a gentle ±10% wobble);
/// `rate_hz` is the wobble frequency.
pub fn apply(buffer: &WaveBuffer, rate_hz: f64, depth: f64, sample_rate: f64) -> WaveBuffer {
    let shaped = buffer
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let t = i as f64 / sample_rate;
            sample * (1.0 + depth * (TWO_PI * rate_hz * t).sin())
        })
        .collect();
    WaveBuffer::from_samples(shaped)
}
