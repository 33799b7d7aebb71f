//! Mechanical UI sounds: clicks, keys, shutters, locks, clocks, registers.
//!
//! These are mostly very short shaped tone stacks; the keyboard and
//! shutter recipes layer a uniform noise bed on top for mechanical
//! texture.

use waveforge_synth::rng::Pcg32;
use waveforge_synth::{mix, EnvelopeParams, Segment, SoundEngine, SynthResult, WaveBuffer};

use crate::support::{layered, shaped};

/// Click weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Soft,
    Hard,
    Mechanical,
}

/// Keyboard key sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    /// Sharp click with resonance and noise texture.
    Mechanical,
    /// Gentle tap.
    Soft,
    /// Impact plus short resonant tail.
    Typewriter,
}

/// Cash register styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterKind {
    /// Drawer rumble, then the bell.
    Classic,
    /// Electronic beep and confirmation tones.
    Modern,
    /// Bell only.
    ChaChing,
}

pub(crate) fn click(engine: &SoundEngine, kind: ClickKind) -> SynthResult<WaveBuffer> {
    let (duration_s, layers): (f64, &[(f64, f64)]) = match kind {
        ClickKind::Soft => (0.03, &[(1000.0, 0.3), (2000.0, 0.15)]),
        ClickKind::Hard => (0.02, &[(1500.0, 0.5), (3000.0, 0.2)]),
        ClickKind::Mechanical => (0.04, &[(800.0, 0.4), (400.0, 0.3)]),
    };
    shaped(
        engine,
        duration_s,
        layers,
        &EnvelopeParams::new(0.001, 0.005, 0.2, 0.01),
    )
}

pub(crate) fn keyboard(
    engine: &SoundEngine,
    kind: KeyboardKind,
    rng: &mut Pcg32,
) -> SynthResult<WaveBuffer> {
    match kind {
        KeyboardKind::Mechanical => {
            let duration_s = 0.03;
            let tones = layered(
                engine,
                duration_s,
                &[(1500.0, 0.3), (3000.0, 0.2), (4500.0, 0.1)],
            )?;
            let noise = engine.generate_noise(duration_s, -0.05, 0.05, rng)?;
            let audio = mix(&[tones, noise])?;
            Ok(engine.apply_envelope(&audio, &EnvelopeParams::new(0.001, 0.01, 0.2, 0.015)))
        }
        KeyboardKind::Soft => shaped(
            engine,
            0.02,
            &[(800.0, 0.2), (1600.0, 0.1)],
            &EnvelopeParams::new(0.001, 0.005, 0.3, 0.01),
        ),
        KeyboardKind::Typewriter => {
            // The impact transient is left unshaped; only the resonant
            // tail gets an envelope.
            let impact = layered(engine, 0.01, &[(1200.0, 0.4), (2400.0, 0.2)])?;
            let resonance = shaped(
                engine,
                0.03,
                &[(800.0, 0.15)],
                &EnvelopeParams::new(0.001, 0.01, 0.3, 0.015),
            )?;
            engine.concatenate(vec![Segment::Sound(impact), Segment::Sound(resonance)])
        }
    }
}

pub(crate) fn camera_shutter(engine: &SoundEngine, rng: &mut Pcg32) -> SynthResult<WaveBuffer> {
    let open = mix(&[
        layered(engine, 0.03, &[(800.0, 0.3), (1200.0, 0.2)])?,
        engine.generate_noise(0.03, -0.1, 0.1, rng)?,
    ])?;
    let open = engine.apply_envelope(&open, &EnvelopeParams::new(0.001, 0.01, 0.3, 0.015));

    let close = mix(&[
        layered(engine, 0.025, &[(700.0, 0.25), (1100.0, 0.15)])?,
        engine.generate_noise(0.025, -0.08, 0.08, rng)?,
    ])?;
    let close = engine.apply_envelope(&close, &EnvelopeParams::new(0.001, 0.008, 0.2, 0.012));

    engine.concatenate(vec![
        Segment::Sound(open),
        Segment::Silence(0.02),
        Segment::Sound(close),
    ])
}

pub(crate) fn lock(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    // Descending pitch pair, then a low mechanical settle.
    let click = shaped(
        engine,
        0.05,
        &[(1000.0, 0.3), (500.0, 0.2)],
        &EnvelopeParams::new(0.001, 0.015, 0.3, 0.025),
    )?;
    let settle = shaped(
        engine,
        0.08,
        &[(300.0, 0.15)],
        &EnvelopeParams::new(0.01, 0.03, 0.4, 0.03),
    )?;
    engine.concatenate(vec![Segment::Sound(click), Segment::Sound(settle)])
}

pub(crate) fn unlock(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    // Ascending pitch pair, then a brighter release tone.
    let click = shaped(
        engine,
        0.05,
        &[(500.0, 0.3), (1000.0, 0.25)],
        &EnvelopeParams::new(0.001, 0.015, 0.3, 0.025),
    )?;
    let release = shaped(
        engine,
        0.06,
        &[(1200.0, 0.2)],
        &EnvelopeParams::new(0.005, 0.02, 0.3, 0.03),
    )?;
    engine.concatenate(vec![Segment::Sound(click), Segment::Sound(release)])
}

pub(crate) fn tick_tock(engine: &SoundEngine, cycles: usize) -> SynthResult<WaveBuffer> {
    let env = EnvelopeParams::new(0.001, 0.005, 0.2, 0.01);
    let mut segments = Vec::new();
    for _ in 0..cycles {
        let tick = shaped(engine, 0.02, &[(1200.0, 0.25), (2400.0, 0.12)], &env)?;
        segments.push(Segment::Sound(tick));
        segments.push(Segment::Silence(0.48));

        let tock = shaped(engine, 0.02, &[(1000.0, 0.25), (2000.0, 0.12)], &env)?;
        segments.push(Segment::Sound(tock));
        segments.push(Segment::Silence(0.48));
    }
    engine.concatenate(segments)
}

pub(crate) fn cash_register(engine: &SoundEngine, kind: RegisterKind) -> SynthResult<WaveBuffer> {
    match kind {
        RegisterKind::Classic => {
            let rumble = shaped(
                engine,
                0.3,
                &[(120.0, 0.2), (180.0, 0.15)],
                &EnvelopeParams::new(0.01, 0.1, 0.6, 0.1),
            )?;
            let cha = shaped(
                engine,
                0.15,
                &[(800.0, 0.4), (1200.0, 0.3), (1600.0, 0.2)],
                &EnvelopeParams::new(0.001, 0.05, 0.3, 0.08),
            )?;
            let ching = shaped(
                engine,
                0.5,
                &[(1200.0, 0.5), (2400.0, 0.3), (3600.0, 0.2)],
                &EnvelopeParams::new(0.001, 0.2, 0.2, 0.3),
            )?;
            engine.concatenate(vec![
                Segment::Sound(rumble),
                Segment::Silence(0.05),
                Segment::Sound(cha),
                Segment::Sound(ching),
            ])
        }
        RegisterKind::Modern => {
            let beep = shaped(
                engine,
                0.1,
                &[(1000.0, 0.4)],
                &EnvelopeParams::new(0.001, 0.02, 0.7, 0.05),
            )?;
            let low = shaped(
                engine,
                0.08,
                &[(800.0, 0.3)],
                &EnvelopeParams::new(0.001, 0.02, 0.5, 0.04),
            )?;
            let high = shaped(
                engine,
                0.1,
                &[(1200.0, 0.35)],
                &EnvelopeParams::new(0.001, 0.03, 0.5, 0.05),
            )?;
            engine.concatenate(vec![
                Segment::Sound(beep),
                Segment::Silence(0.05),
                Segment::Sound(low),
                Segment::Sound(high),
            ])
        }
        RegisterKind::ChaChing => {
            let cha = shaped(
                engine,
                0.1,
                &[(900.0, 0.45), (1350.0, 0.35), (1800.0, 0.25)],
                &EnvelopeParams::new(0.001, 0.03, 0.4, 0.06),
            )?;
            let ching = shaped(
                engine,
                0.6,
                &[(1400.0, 0.5), (2800.0, 0.35), (4200.0, 0.2), (5600.0, 0.1)],
                &EnvelopeParams::new(0.001, 0.25, 0.15, 0.35),
            )?;
            engine.concatenate(vec![
                Segment::Sound(cha),
                Segment::Silence(0.02),
                Segment::Sound(ching),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waveforge_synth::rng::create_rng;

    #[test]
    fn test_click_durations() {
        let engine = SoundEngine::new(44100);
        assert_eq!(click(&engine, ClickKind::Soft).unwrap().len(), 1323);
        assert_eq!(click(&engine, ClickKind::Hard).unwrap().len(), 882);
        assert_eq!(click(&engine, ClickKind::Mechanical).unwrap().len(), 1764);
    }

    #[test]
    fn test_tick_tock_cycle_length() {
        let engine = SoundEngine::new(44100);
        let audio = tick_tock(&engine, 3).unwrap();
        // Each cycle is 2 * (0.02s hit + 0.48s pause) = 1s exactly.
        assert_eq!(audio.len(), 3 * 44100);
    }

    #[test]
    fn test_camera_shutter_is_deterministic_per_rng_seed() {
        let engine = SoundEngine::new(44100);
        let a = camera_shutter(&engine, &mut create_rng(7)).unwrap();
        let b = camera_shutter(&engine, &mut create_rng(7)).unwrap();
        let c = camera_shutter(&engine, &mut create_rng(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_lock_and_unlock_differ() {
        let engine = SoundEngine::new(44100);
        let locked = lock(&engine).unwrap();
        let unlocked = unlock(&engine).unwrap();
        assert_ne!(locked, unlocked);
        assert_eq!(locked.len(), ((0.05 + 0.08) * 44100.0_f64).round() as usize);
        assert_eq!(unlocked.len(), ((0.05 + 0.06) * 44100.0_f64).round() as usize);
    }

    #[test]
    fn test_typewriter_keeps_raw_impact() {
        let engine = SoundEngine::new(44100);
        let mut rng = create_rng(1);
        let audio = keyboard(&engine, KeyboardKind::Typewriter, &mut rng).unwrap();
        assert_eq!(audio.len(), ((0.01 + 0.03) * 44100.0_f64).round() as usize);
    }
}
