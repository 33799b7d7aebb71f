//! Bell and doorbell recipes.
//!
//! Bells are harmonic stacks with inharmonic partials (2.4x, 4.2x and so
//! on) under a fast-attack, long-release envelope; the inharmonicity is
//! what reads as "metal" rather than "organ".

use waveforge_synth::{EnvelopeParams, Segment, SoundEngine, SynthResult, WaveBuffer};

use crate::support::{harmonic_stack, shaped};

/// Doorbell styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorbellKind {
    /// Classic two-tone ding-dong.
    DingDong,
    /// Pleasant three-note chime (E, G, A).
    Chime,
    /// Electric buzzer.
    Buzz,
}

pub(crate) fn simple_bell(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    harmonic_stack(
        engine,
        800.0,
        1.5,
        0.3,
        &[(1.0, 1.0), (2.0, 0.5), (2.4, 0.3), (3.0, 0.2), (4.2, 0.15)],
        &EnvelopeParams::new(0.001, 0.3, 0.1, 0.7),
    )
}

pub(crate) fn church_bell(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    harmonic_stack(
        engine,
        200.0,
        3.0,
        0.2,
        &[
            (1.0, 1.0),
            (1.5, 0.6),
            (2.0, 0.4),
            (2.5, 0.3),
            (3.0, 0.25),
            (4.0, 0.15),
            (5.0, 0.1),
        ],
        &EnvelopeParams::new(0.001, 0.5, 0.3, 2.0),
    )
}

pub(crate) fn hand_bell(engine: &SoundEngine) -> SynthResult<WaveBuffer> {
    harmonic_stack(
        engine,
        1200.0,
        0.8,
        0.4,
        &[(1.0, 1.0), (2.0, 0.4), (3.0, 0.3), (4.2, 0.15), (5.4, 0.1)],
        &EnvelopeParams::new(0.001, 0.2, 0.2, 0.4),
    )
}

pub(crate) fn doorbell(engine: &SoundEngine, kind: DoorbellKind) -> SynthResult<WaveBuffer> {
    match kind {
        DoorbellKind::DingDong => {
            let ding = shaped(
                engine,
                0.3,
                &[(800.0, 0.5), (1600.0, 0.2)],
                &EnvelopeParams::new(0.001, 0.1, 0.3, 0.15),
            )?;
            let dong = shaped(
                engine,
                0.4,
                &[(600.0, 0.5), (1200.0, 0.2)],
                &EnvelopeParams::new(0.001, 0.15, 0.3, 0.2),
            )?;
            engine.concatenate(vec![
                Segment::Sound(ding),
                Segment::Silence(0.1),
                Segment::Sound(dong),
            ])
        }
        DoorbellKind::Chime => {
            let env = EnvelopeParams::new(0.001, 0.1, 0.4, 0.3);
            let mut segments = Vec::new();
            for note in [659.0, 784.0, 880.0] {
                let tone = shaped(engine, 0.4, &[(note, 0.3), (note * 2.0, 0.15)], &env)?;
                segments.push(Segment::Sound(tone));
                segments.push(Segment::Silence(0.05));
            }
            engine.concatenate(segments)
        }
        DoorbellKind::Buzz => shaped(
            engine,
            0.8,
            &[(300.0, 0.6)],
            &EnvelopeParams::new(0.001, 0.05, 0.9, 0.05),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bell_durations() {
        let engine = SoundEngine::new(44100);
        assert_eq!(simple_bell(&engine).unwrap().len(), 66150); // 1.5s
        assert_eq!(church_bell(&engine).unwrap().len(), 132300); // 3.0s
        assert_eq!(hand_bell(&engine).unwrap().len(), 35280); // 0.8s
    }

    #[test]
    fn test_ding_dong_layout() {
        let engine = SoundEngine::new(44100);
        let audio = doorbell(&engine, DoorbellKind::DingDong).unwrap();
        // 0.3s ding + 0.1s pause + 0.4s dong
        assert_eq!(audio.len(), 35280);
    }

    #[test]
    fn test_bells_stay_in_quantizer_range() {
        let engine = SoundEngine::new(44100);
        for bell in [
            simple_bell(&engine).unwrap(),
            church_bell(&engine).unwrap(),
            hand_bell(&engine).unwrap(),
        ] {
            assert!(bell.peak() <= 1.0);
        }
    }
}
