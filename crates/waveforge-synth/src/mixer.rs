//! Additive mixer.
//!
//! Sums buffers elementwise with no renormalization: loud harmonic
//! stacks are allowed to exceed [-1.0, 1.0] here and are resolved by the
//! hard clip in quantization, so relative levels between segments stay
//! predictable for the preset catalog.

use crate::buffer::WaveBuffer;
use crate::error::{SynthError, SynthResult};

/// Sums the given buffers elementwise.
///
/// All inputs must share the same length; callers are responsible for
/// generating harmonics over the same duration. A single input is
/// returned unchanged and an empty slice yields an empty buffer.
///
/// # Errors
/// [`SynthError::LengthMismatch`] if any buffer's length differs from
/// the first's.
pub fn mix(buffers: &[WaveBuffer]) -> SynthResult<WaveBuffer> {
    let Some(first) = buffers.first() else {
        return Ok(WaveBuffer::default());
    };

    let expected = first.len();
    for buffer in &buffers[1..] {
        if buffer.len() != expected {
            return Err(SynthError::LengthMismatch {
                expected,
                found: buffer.len(),
            });
        }
    }

    let mut output = vec![0.0; expected];
    for buffer in buffers {
        for (out, &sample) in output.iter_mut().zip(buffer.samples()) {
            *out += sample;
        }
    }

    Ok(WaveBuffer::from_samples(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_input_is_identity() {
        let buffer = WaveBuffer::from_samples(vec![0.1, -0.2, 0.3]);
        let mixed = mix(std::slice::from_ref(&buffer)).unwrap();
        assert_eq!(mixed, buffer);
    }

    #[test]
    fn test_elementwise_sum() {
        let a = WaveBuffer::from_samples(vec![0.1, 0.2, 0.3]);
        let b = WaveBuffer::from_samples(vec![0.4, -0.2, 0.1]);
        let mixed = mix(&[a, b]).unwrap();
        let expected = [0.5, 0.0, 0.4];
        for (got, want) in mixed.samples().iter().zip(&expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_renormalization() {
        let a = WaveBuffer::from_samples(vec![0.9; 8]);
        let b = WaveBuffer::from_samples(vec![0.9; 8]);
        let mixed = mix(&[a, b]).unwrap();
        // Sums may transiently exceed the nominal range; that is resolved
        // at quantization, not here.
        assert!(mixed.peak() > 1.0);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let a = WaveBuffer::silence(100);
        let b = WaveBuffer::silence(80);
        let err = mix(&[a, b]).unwrap_err();
        match err {
            SynthError::LengthMismatch { expected, found } => {
                assert_eq!(expected, 100);
                assert_eq!(found, 80);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_buffer() {
        let mixed = mix(&[]).unwrap();
        assert!(mixed.is_empty());
    }
}
