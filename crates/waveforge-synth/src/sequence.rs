//! Sequencer: concatenation of shaped segments and silence gaps.

use crate::buffer::WaveBuffer;
use crate::error::{SynthError, SynthResult};

/// One entry in a composite sound.
///
/// Silence durations are in seconds and expand to zero-filled samples at
/// concatenation time. Segments are consumed, never shared between two
/// composite sounds.
#[derive(Debug, Clone)]
pub enum Segment {
    /// An already-shaped waveform buffer.
    Sound(WaveBuffer),
    /// A silence gap of the given duration in seconds.
    Silence(f64),
}

/// Concatenates segments in order into one buffer.
///
/// No crossfading or overlap is applied between adjacent segments;
/// discontinuities at the boundaries are part of the intended sound
/// character (a distinct "ding" then "dong").
///
/// # Errors
/// [`SynthError::InvalidDuration`] if a silence duration is negative or
/// non-finite.
pub fn concatenate(segments: Vec<Segment>, sample_rate: f64) -> SynthResult<WaveBuffer> {
    let mut output = Vec::new();
    for segment in segments {
        match segment {
            Segment::Sound(buffer) => output.extend_from_slice(buffer.samples()),
            Segment::Silence(duration_s) => {
                if !duration_s.is_finite() || duration_s < 0.0 {
                    return Err(SynthError::InvalidDuration {
                        duration: duration_s,
                    });
                }
                let num_samples = (duration_s * sample_rate).round() as usize;
                output.resize(output.len() + num_samples, 0.0);
            }
        }
    }
    Ok(WaveBuffer::from_samples(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_preserves_order_and_length() {
        let a = WaveBuffer::from_samples(vec![0.5; 100]);
        let b = WaveBuffer::from_samples(vec![-0.5; 80]);

        let out = concatenate(
            vec![Segment::Sound(a), Segment::Silence(0.05), Segment::Sound(b)],
            1000.0,
        )
        .unwrap();

        assert_eq!(out.len(), 230);
        assert!(out.samples()[..100].iter().all(|&s| s == 0.5));
        assert!(out.samples()[100..150].iter().all(|&s| s == 0.0));
        assert!(out.samples()[150..].iter().all(|&s| s == -0.5));
    }

    #[test]
    fn test_empty_sequence() {
        let out = concatenate(Vec::new(), 1000.0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_silence_only() {
        let out = concatenate(vec![Segment::Silence(0.25)], 1000.0).unwrap();
        assert_eq!(out.len(), 250);
        assert_eq!(out.peak(), 0.0);
    }

    #[test]
    fn test_negative_silence_rejected() {
        let err = concatenate(vec![Segment::Silence(-0.1)], 1000.0).unwrap_err();
        assert!(matches!(err, SynthError::InvalidDuration { .. }));
    }
}
