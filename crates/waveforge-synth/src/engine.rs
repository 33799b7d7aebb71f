//! Engine facade over the synthesis pipeline.
//!
//! A [`SoundEngine`] is a fixed sample rate plus the seconds-to-samples
//! conversion policy. Everything else is delegated to the generator and
//! transform modules; the facade exists so callers describe sounds in
//! seconds and Hz without repeating the sample rate everywhere.

use rand_pcg::Pcg32;

use crate::buffer::WaveBuffer;
use crate::envelope::{self, EnvelopeParams};
use crate::error::{SynthError, SynthResult};
use crate::sequence::{self, Segment};
use crate::wav::PcmStream;
use crate::{noise, oscillator, tremolo};

/// Stateless synthesis front end bound to a sample rate.
#[derive(Debug, Clone, Copy)]
pub struct SoundEngine {
    sample_rate: u32,
}

impl SoundEngine {
    /// Creates an engine rendering at the given sample rate in Hz.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Converts a duration in seconds to a sample count.
    ///
    /// Durations are rounded to the nearest sample; zero is valid and
    /// yields an empty buffer downstream.
    fn num_samples(&self, duration_s: f64) -> SynthResult<usize> {
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(SynthError::InvalidDuration {
                duration: duration_s,
            });
        }
        Ok((duration_s * self.sample_rate as f64).round() as usize)
    }

    /// Generates a constant-frequency sine tone.
    ///
    /// # Errors
    /// [`SynthError::InvalidDuration`] if `duration_s` is negative or
    /// non-finite.
    pub fn generate_tone(
        &self,
        frequency_hz: f64,
        amplitude: f64,
        duration_s: f64,
    ) -> SynthResult<WaveBuffer> {
        let num_samples = self.num_samples(duration_s)?;
        Ok(WaveBuffer::from_samples(oscillator::tone(
            frequency_hz,
            amplitude,
            num_samples,
            self.sample_rate as f64,
        )))
    }

    /// Generates a phase-continuous linear frequency sweep.
    ///
    /// # Errors
    /// [`SynthError::InvalidDuration`] if `duration_s` is negative or
    /// non-finite.
    pub fn generate_sweep(
        &self,
        freq_start_hz: f64,
        freq_end_hz: f64,
        amplitude: f64,
        duration_s: f64,
    ) -> SynthResult<WaveBuffer> {
        let num_samples = self.num_samples(duration_s)?;
        Ok(WaveBuffer::from_samples(oscillator::sweep(
            freq_start_hz,
            freq_end_hz,
            amplitude,
            num_samples,
            self.sample_rate as f64,
        )))
    }

    /// Generates uniform noise in `[low, high)` from the caller's RNG.
    ///
    /// The RNG is advanced by exactly one draw per sample, so two noise
    /// layers generated back to back from the same RNG are decorrelated.
    ///
    /// # Errors
    /// [`SynthError::InvalidDuration`] if `duration_s` is negative or
    /// non-finite.
    pub fn generate_noise(
        &self,
        duration_s: f64,
        low: f64,
        high: f64,
        rng: &mut Pcg32,
    ) -> SynthResult<WaveBuffer> {
        let num_samples = self.num_samples(duration_s)?;
        Ok(WaveBuffer::from_samples(noise::uniform(
            low,
            high,
            num_samples,
            rng,
        )))
    }

    /// Shapes a buffer with an ADSR envelope.
    pub fn apply_envelope(&self, buffer: &WaveBuffer, params: &EnvelopeParams) -> WaveBuffer {
        envelope::apply(buffer, params, self.sample_rate as f64)
    }

    /// Applies sinusoidal amplitude modulation.
    pub fn apply_tremolo(&self, buffer: &WaveBuffer, rate_hz: f64, depth: f64) -> WaveBuffer {
        tremolo::apply(buffer, rate_hz, depth, self.sample_rate as f64)
    }

    /// Concatenates segments and silence gaps into one buffer.
    ///
    /// # Errors
    /// [`SynthError::InvalidDuration`] if a silence duration is negative
    /// or non-finite.
    pub fn concatenate(&self, segments: Vec<Segment>) -> SynthResult<WaveBuffer> {
        sequence::concatenate(segments, self.sample_rate as f64)
    }

    /// Clips and quantizes a buffer to a 16-bit PCM stream.
    pub fn quantize(&self, buffer: &WaveBuffer) -> PcmStream {
        PcmStream::quantize(buffer, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_duration_rounds_to_nearest_sample() {
        let engine = SoundEngine::new(44100);
        let tone = engine.generate_tone(440.0, 0.5, 0.1).unwrap();
        assert_eq!(tone.len(), 4410);

        // 0.0100001s at 44100 Hz is 441.0044 samples, rounding down.
        let tone = engine.generate_tone(440.0, 0.5, 0.0100001).unwrap();
        assert_eq!(tone.len(), 441);
    }

    #[test]
    fn test_zero_duration_yields_empty_buffer() {
        let engine = SoundEngine::new(44100);
        assert!(engine.generate_tone(440.0, 0.5, 0.0).unwrap().is_empty());
        assert!(engine
            .generate_sweep(200.0, 800.0, 0.5, 0.0)
            .unwrap()
            .is_empty());

        let mut rng = create_rng(7);
        assert!(engine
            .generate_noise(0.0, -0.1, 0.1, &mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let engine = SoundEngine::new(44100);
        let err = engine.generate_tone(440.0, 0.5, -1.0).unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidDuration { duration } if duration == -1.0
        ));
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        let engine = SoundEngine::new(44100);
        assert!(engine.generate_tone(440.0, 0.5, f64::NAN).is_err());
        assert!(engine.generate_tone(440.0, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_quantize_carries_engine_rate() {
        let engine = SoundEngine::new(22050);
        let tone = engine.generate_tone(440.0, 0.5, 0.1).unwrap();
        let stream = engine.quantize(&tone);
        assert_eq!(stream.sample_rate(), 22050);
        assert_eq!(stream.len(), tone.len());
    }

    #[test]
    fn test_tremolo_preserves_length() {
        let engine = SoundEngine::new(44100);
        let tone = engine.generate_tone(440.0, 0.5, 0.2).unwrap();
        let modulated = engine.apply_tremolo(&tone, 20.0, 0.1);
        assert_eq!(modulated.len(), tone.len());
    }
}
