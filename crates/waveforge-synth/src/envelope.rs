//! ADSR envelope shaping.
//!
//! Builds a per-sample amplitude multiplier curve for a fixed-length
//! buffer and multiplies the signal by it. This is a stateless transform:
//! the same buffer and parameters always produce the same output. Two
//! boundary conditions are clamped rather than treated as errors:
//!
//! - a decay window that does not fit entirely inside the buffer is
//!   skipped (never partially applied);
//! - a release window spanning the whole buffer is skipped, avoiding a
//!   degenerate all-zero signal.

use crate::buffer::WaveBuffer;

/// ADSR envelope parameters.
///
/// Attack, decay, and release are durations in seconds; sustain is the
/// held amplitude level (dimensionless, typically 0-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParams {
    /// Seconds to ramp 0 -> 1.
    pub attack: f64,
    /// Seconds to ramp 1 -> sustain.
    pub decay: f64,
    /// Held amplitude level (0.0 to 1.0).
    pub sustain: f64,
    /// Seconds to ramp to 0, anchored at the end of the buffer.
    pub release: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

impl EnvelopeParams {
    /// Creates new envelope parameters, clamping negatives to zero and
    /// sustain into [0, 1].
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Percussive envelope: instant-ish attack, no held sustain.
    pub fn percussive(attack: f64, decay: f64) -> Self {
        Self::new(attack, decay, 0.0, decay)
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// A single-element ramp holds `start`, matching the convention the
/// curve arithmetic below relies on for one-sample windows.
fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Builds the multiplier curve for a buffer of `num_samples` samples.
pub fn curve(params: &EnvelopeParams, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    let mut env = vec![1.0; num_samples];
    if num_samples == 0 {
        return env;
    }

    let attack_samples = (params.attack * sample_rate).round() as usize;
    let decay_samples = (params.decay * sample_rate).round() as usize;
    let release_samples = (params.release * sample_rate).round() as usize;

    if attack_samples > 0 {
        let ramp = linspace(0.0, 1.0, attack_samples);
        for (slot, value) in env.iter_mut().zip(ramp) {
            *slot = value;
        }
    }

    if decay_samples > 0 {
        let start = attack_samples;
        let end = start + decay_samples;
        // Skipped entirely unless the whole window fits.
        if end <= num_samples {
            for (slot, value) in env[start..end]
                .iter_mut()
                .zip(linspace(1.0, params.sustain, decay_samples))
            {
                *slot = value;
            }
            for slot in &mut env[end..] {
                *slot = params.sustain;
            }
        }
    }

    // Release must leave at least one unshaped sample; a window spanning
    // the whole buffer is skipped.
    if release_samples > 0 && release_samples < num_samples {
        let start = num_samples - release_samples;
        let anchor = env[start];
        for (slot, value) in env[start..]
            .iter_mut()
            .zip(linspace(anchor, 0.0, release_samples))
        {
            *slot = value;
        }
    }

    env
}

/// Multiplies a buffer by its envelope curve.
///
/// The output always has the same length as the input.
pub fn apply(buffer: &WaveBuffer, params: &EnvelopeParams, sample_rate: f64) -> WaveBuffer {
    let env = curve(params, sample_rate, buffer.len());
    let shaped = buffer
        .samples()
        .iter()
        .zip(env)
        .map(|(&sample, gain)| sample * gain)
        .collect();
    WaveBuffer::from_samples(shaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 1000.0;

    #[test]
    fn test_attack_ramps_zero_to_one() {
        let params = EnvelopeParams::new(0.1, 0.0, 1.0, 0.0);
        let env = curve(&params, RATE, 500);

        assert_eq!(env.len(), 500);
        assert_eq!(env[0], 0.0);
        assert!((env[99] - 1.0).abs() < 1e-12);
        // Flat at 1.0 after the attack.
        assert!(env[100..].iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_decay_reaches_and_holds_sustain() {
        let params = EnvelopeParams::new(0.0, 0.1, 0.5, 0.0);
        let env = curve(&params, RATE, 500);

        assert_eq!(env[0], 1.0);
        assert!((env[99] - 0.5).abs() < 1e-12);
        assert!(env[100..].iter().all(|&v| v == 0.5));
    }

    #[test]
    fn test_unfittable_decay_is_skipped_entirely() {
        // attack 100 + decay 300 > 350 samples: decay must not be
        // partially applied.
        let params = EnvelopeParams::new(0.1, 0.3, 0.5, 0.0);
        let env = curve(&params, RATE, 350);

        assert_eq!(env.len(), 350);
        assert!(env[100..].iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_release_ramps_from_anchor_to_zero() {
        let params = EnvelopeParams::new(0.0, 0.1, 0.5, 0.1);
        let env = curve(&params, RATE, 500);

        // Anchor is the sustain level reached by the decay.
        assert!((env[400] - 0.5).abs() < 1e-12);
        assert_eq!(env[499], 0.0);
    }

    #[test]
    fn test_release_spanning_whole_buffer_is_skipped() {
        // Boundary case: a release window >= the buffer length discards
        // the fade rather than zeroing the entire signal.
        let params = EnvelopeParams::new(0.0, 0.0, 1.0, 1.0);
        let env = curve(&params, RATE, 500);
        assert!(env.iter().all(|&v| v == 1.0));

        // Exactly one sample longer than the release still applies it.
        let env = curve(&params, RATE, 1001);
        assert_eq!(env[1000], 0.0);
    }

    #[test]
    fn test_output_length_matches_input() {
        let buffer = WaveBuffer::from_samples(vec![1.0; 237]);
        for params in [
            EnvelopeParams::default(),
            EnvelopeParams::new(5.0, 5.0, 0.5, 5.0),
            EnvelopeParams::new(0.0, 0.0, 1.0, 0.0),
        ] {
            let shaped = apply(&buffer, &params, RATE);
            assert_eq!(shaped.len(), buffer.len());
        }
    }

    #[test]
    fn test_apply_is_elementwise_product() {
        let buffer = WaveBuffer::from_samples(vec![0.8; 400]);
        let params = EnvelopeParams::new(0.0, 0.1, 0.5, 0.0);
        let shaped = apply(&buffer, &params, RATE);

        assert!((shaped.samples()[0] - 0.8).abs() < 1e-12);
        assert!((shaped.samples()[399] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_buffer_passes_through() {
        let shaped = apply(&WaveBuffer::default(), &EnvelopeParams::default(), RATE);
        assert!(shaped.is_empty());
    }

    #[test]
    fn test_params_new_clamps() {
        let params = EnvelopeParams::new(-0.1, -0.2, 1.5, -0.3);
        assert_eq!(params.attack, 0.0);
        assert_eq!(params.decay, 0.0);
        assert_eq!(params.sustain, 1.0);
        assert_eq!(params.release, 0.0);
    }

    #[test]
    fn test_linspace_matches_inclusive_convention() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        let ramp = linspace(0.0, 1.0, 5);
        assert_eq!(ramp, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
