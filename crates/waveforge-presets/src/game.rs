//! Game and motion sounds: pickups, arpeggios, sweeps, pops.
//!
//! The sweep-based recipes (jump, laser, swoosh, bubble pops) are where
//! phase continuity matters: each chirp layer runs its own phase
//! accumulator, so stacked layers never click against each other.

use waveforge_synth::rng::Pcg32;
use waveforge_synth::{mix, EnvelopeParams, Segment, SoundEngine, SynthResult, WaveBuffer};

use crate::support::shaped;

/// Game event sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// Ascending C-E-G-C arpeggio.
    PowerUp,
    /// Triumphant four-note fanfare.
    LevelUp,
    /// Descending G-F-E-C melody.
    GameOver,
    /// Quick rising chirp, 200 to 600 Hz.
    Jump,
    /// Falling chirp with a doubled harmonic layer.
    Laser,
}

/// Swoosh lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwooshKind {
    Short,
    Medium,
    Long,
}

/// Bubble sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    /// Quick high-pitched pop.
    Pop,
    /// Tiny two-tone blip.
    Small,
    /// Deeper pop with an octave layer.
    Large,
}

pub(crate) fn coin(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    let first = shaped(
        engine,
        0.08,
        &[(988.0, 0.3), (1976.0, 0.15)],
        &EnvelopeParams::new(0.001, 0.02, 0.3, 0.04),
    )?;
    let second = shaped(
        engine,
        0.1,
        &[(1319.0, 0.35), (2638.0, 0.15)],
        &EnvelopeParams::new(0.001, 0.03, 0.4, 0.05),
    )?;
    engine.concatenate(vec![Segment::Sound(first), Segment::Sound(second)])
}

pub(crate) fn game(engine: &SoundEngine, kind: GameKind) -> SynthResult<WaveBuffer> {
    match kind {
        GameKind::PowerUp => {
            let env = EnvelopeParams::new(0.001, 0.02, 0.5, 0.03);
            let mut segments = Vec::new();
            for note in [262.0, 330.0, 392.0, 523.0] {
                let tone = shaped(engine, 0.08, &[(note, 0.3), (note * 2.0, 0.15)], &env)?;
                segments.push(Segment::Sound(tone));
            }
            engine.concatenate(segments)
        }
        GameKind::LevelUp => {
            let env = EnvelopeParams::new(0.001, 0.05, 0.7, 0.1);
            let notes = [523.0, 659.0, 784.0, 1047.0];
            let mut segments = Vec::new();
            for (i, &note) in notes.iter().enumerate() {
                // Hold the final note longer.
                let duration_s = if i < 3 { 0.15 } else { 0.3 };
                let tone = shaped(engine, duration_s, &[(note, 0.35), (note * 2.0, 0.2)], &env)?;
                segments.push(Segment::Sound(tone));
            }
            engine.concatenate(segments)
        }
        GameKind::GameOver => {
            let env = EnvelopeParams::new(0.01, 0.1, 0.7, 0.15);
            let mut segments = Vec::new();
            for note in [392.0, 349.0, 330.0, 262.0] {
                segments.push(Segment::Sound(shaped(engine, 0.3, &[(note, 0.3)], &env)?));
            }
            engine.concatenate(segments)
        }
        GameKind::Jump => {
            let chirp = engine.generate_sweep(200.0, 600.0, 0.3, 0.15)?;
            Ok(engine.apply_envelope(&chirp, &EnvelopeParams::new(0.001, 0.05, 0.3, 0.08)))
        }
        GameKind::Laser => {
            let audio = mix(&[
                engine.generate_sweep(1200.0, 300.0, 0.4, 0.2)?,
                engine.generate_sweep(2400.0, 600.0, 0.2, 0.2)?,
            ])?;
            Ok(engine.apply_envelope(&audio, &EnvelopeParams::new(0.001, 0.05, 0.4, 0.12)))
        }
    }
}

pub(crate) fn swoosh(
    engine: &SoundEngine,
    kind: SwooshKind,
    rng: &mut Pcg32,
) -> SynthResult<WaveBuffer> {
    let duration_s = match kind {
        SwooshKind::Short => 0.15,
        SwooshKind::Medium => 0.3,
        SwooshKind::Long => 0.5,
    };

    // Falling chirp with detuned partials at 1.5x and 2.3x, plus a
    // uniform noise bed for air.
    let audio = mix(&[
        engine.generate_sweep(2000.0, 500.0, 0.2, duration_s)?,
        engine.generate_sweep(3000.0, 750.0, 0.15, duration_s)?,
        engine.generate_sweep(4600.0, 1150.0, 0.1, duration_s)?,
        engine.generate_noise(duration_s, -0.05, 0.05, rng)?,
    ])?;
    Ok(engine.apply_envelope(&audio, &EnvelopeParams::new(0.01, 0.1, 0.5, 0.2)))
}

pub(crate) fn bubble(engine: &SoundEngine, kind: BubbleKind) -> SynthResult<WaveBuffer> {
    match kind {
        BubbleKind::Pop => {
            let chirp = engine.generate_sweep(1500.0, 300.0, 0.3, 0.08)?;
            Ok(engine.apply_envelope(&chirp, &EnvelopeParams::new(0.001, 0.02, 0.1, 0.05)))
        }
        BubbleKind::Small => shaped(
            engine,
            0.05,
            &[(2000.0, 0.2), (3000.0, 0.1)],
            &EnvelopeParams::new(0.001, 0.01, 0.2, 0.03),
        ),
        BubbleKind::Large => {
            let audio = mix(&[
                engine.generate_sweep(800.0, 400.0, 0.35, 0.12)?,
                engine.generate_sweep(1600.0, 800.0, 0.15, 0.12)?,
            ])?;
            Ok(engine.apply_envelope(&audio, &EnvelopeParams::new(0.001, 0.03, 0.2, 0.08)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waveforge_synth::rng::create_rng;

    #[test]
    fn test_coin_is_two_notes() {
        let engine = SoundEngine::new(44100);
        let audio = coin(&engine).unwrap();
        assert_eq!(audio.len(), ((0.08 + 0.1) * 44100.0_f64).round() as usize);
    }

    #[test]
    fn test_level_up_holds_final_note() {
        let engine = SoundEngine::new(44100);
        let audio = game(&engine, GameKind::LevelUp).unwrap();
        // 3 * 0.15s + 0.3s
        assert_eq!(audio.len(), ((0.75) * 44100.0_f64).round() as usize);
    }

    #[test]
    fn test_jump_chirp_rises() {
        let engine = SoundEngine::new(44100);
        let audio = game(&engine, GameKind::Jump).unwrap();
        assert_eq!(audio.len(), (0.15 * 44100.0_f64).round() as usize);
        assert!(audio.peak() > 0.0);
    }

    #[test]
    fn test_swoosh_lengths_scale() {
        let engine = SoundEngine::new(44100);
        let mut rng = create_rng(3);
        let short = swoosh(&engine, SwooshKind::Short, &mut rng).unwrap();
        let medium = swoosh(&engine, SwooshKind::Medium, &mut rng).unwrap();
        let long = swoosh(&engine, SwooshKind::Long, &mut rng).unwrap();
        assert_eq!(short.len(), 6615);
        assert_eq!(medium.len(), 13230);
        assert_eq!(long.len(), 22050);
    }

    #[test]
    fn test_swoosh_noise_follows_rng_seed() {
        let engine = SoundEngine::new(44100);
        let a = swoosh(&engine, SwooshKind::Medium, &mut create_rng(1)).unwrap();
        let b = swoosh(&engine, SwooshKind::Medium, &mut create_rng(1)).unwrap();
        let c = swoosh(&engine, SwooshKind::Medium, &mut create_rng(2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_bubbles_stay_in_range() {
        let engine = SoundEngine::new(44100);
        for kind in [BubbleKind::Pop, BubbleKind::Small, BubbleKind::Large] {
            let audio = bubble(&engine, kind).unwrap();
            assert!(!audio.is_empty());
            assert!(audio.peak() <= 1.0);
        }
    }
}
