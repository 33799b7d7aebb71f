//! Shared recipe building blocks.

use waveforge_synth::{mix, EnvelopeParams, SoundEngine, SynthResult, WaveBuffer};

/// Mixes constant-frequency sine layers of a shared duration.
///
/// `layers` is a list of (frequency Hz, amplitude) pairs.
pub(crate) fn layered(
    engine: &SoundEngine,
    duration_s: f64,
    layers: &[(f64, f64)],
) -> SynthResult<WaveBuffer> {
    let tones = layers
        .iter()
        .map(|&(frequency_hz, amplitude)| engine.generate_tone(frequency_hz, amplitude, duration_s))
        .collect::<SynthResult<Vec<_>>>()?;
    mix(&tones)
}

/// Mixed tone layers shaped by an envelope.
pub(crate) fn shaped(
    engine: &SoundEngine,
    duration_s: f64,
    layers: &[(f64, f64)],
    env: &EnvelopeParams,
) -> SynthResult<WaveBuffer> {
    Ok(engine.apply_envelope(&layered(engine, duration_s, layers)?, env))
}

/// Harmonic stack over a base frequency.
///
/// `partials` holds (frequency multiplier, relative amplitude) pairs; the
/// common `gain` keeps the additive sum inside quantizer range.
pub(crate) fn harmonic_stack(
    engine: &SoundEngine,
    base_hz: f64,
    duration_s: f64,
    gain: f64,
    partials: &[(f64, f64)],
    env: &EnvelopeParams,
) -> SynthResult<WaveBuffer> {
    let tones = partials
        .iter()
        .map(|&(multiplier, amplitude)| {
            engine.generate_tone(base_hz * multiplier, amplitude * gain, duration_s)
        })
        .collect::<SynthResult<Vec<_>>>()?;
    Ok(engine.apply_envelope(&mix(&tones)?, env))
}
