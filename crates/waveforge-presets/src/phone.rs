//! Telephone signal recipes.
//!
//! Frequencies follow North American precise-tone conventions: 440+880
//! ring, 480+620 busy, 350+440 dial tone. The busy and dial-tone
//! recipes deliberately skip the envelope; hard on/off edges are part of
//! how those signals sound.

use waveforge_synth::{EnvelopeParams, Segment, SoundEngine, SynthResult, WaveBuffer};

use crate::support::layered;

/// Telephone signal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    /// Two ring bursts under a 20 Hz tremolo, then a long pause.
    Ringtone,
    /// Busy signal, four on/off cycles.
    Busy,
    /// Continuous dual tone.
    DialTone,
}

pub(crate) fn phone(engine: &SoundEngine, kind: PhoneKind) -> SynthResult<WaveBuffer> {
    match kind {
        PhoneKind::Ringtone => {
            let env = EnvelopeParams::new(0.01, 0.1, 0.8, 0.1);
            let mut segments = Vec::new();
            for _ in 0..2 {
                let burst = layered(engine, 0.4, &[(440.0, 0.4), (880.0, 0.3)])?;
                let burst = engine.apply_tremolo(&burst, 20.0, 0.1);
                segments.push(Segment::Sound(engine.apply_envelope(&burst, &env)));
                segments.push(Segment::Silence(0.2));
            }
            segments.push(Segment::Silence(1.0));
            engine.concatenate(segments)
        }
        PhoneKind::Busy => {
            let mut segments = Vec::new();
            for _ in 0..4 {
                segments.push(Segment::Sound(layered(
                    engine,
                    0.25,
                    &[(480.0, 0.4), (620.0, 0.4)],
                )?));
                segments.push(Segment::Silence(0.25));
            }
            engine.concatenate(segments)
        }
        PhoneKind::DialTone => layered(engine, 2.0, &[(350.0, 0.3), (440.0, 0.3)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ringtone_layout() {
        let engine = SoundEngine::new(44100);
        let audio = phone(&engine, PhoneKind::Ringtone).unwrap();
        // 2 * (0.4s burst + 0.2s gap) + 1.0s trailing pause
        assert_eq!(audio.len(), ((2.2) * 44100.0_f64).round() as usize);
        // Trailing pause is actually silent.
        let tail = &audio.samples()[audio.len() - 44100..];
        assert!(tail.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_busy_signal_duty_cycle() {
        let engine = SoundEngine::new(44100);
        let audio = phone(&engine, PhoneKind::Busy).unwrap();
        assert_eq!(audio.len(), 2 * 44100);
        // Second half of each cycle is off.
        let cycle = 22050;
        assert!(audio.samples()[cycle / 2..cycle].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_dial_tone_is_continuous() {
        let engine = SoundEngine::new(44100);
        let audio = phone(&engine, PhoneKind::DialTone).unwrap();
        assert_eq!(audio.len(), 2 * 44100);
        // No envelope: the tone does not fade at the end.
        let tail = &audio.samples()[audio.len() - 441..];
        assert!(tail.iter().any(|&s| s.abs() > 0.1));
    }
}
