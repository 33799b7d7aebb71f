//! Buzzers, notifications, system beeps, and alarms.

use waveforge_synth::{EnvelopeParams, Segment, SoundEngine, SynthResult, WaveBuffer};

use crate::support::{harmonic_stack, shaped};

/// Buzzer severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerKind {
    /// Low, harsh sound.
    Error,
    /// Medium frequency.
    Warning,
    /// Higher, cleaner sound.
    Success,
}

/// Notification flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Gentle ascending two-tone.
    Message,
    /// Attention-grabbing triple beep.
    Alert,
    /// Ascending C-E-G arpeggio.
    Complete,
    /// Short subtle pop.
    Pop,
}

/// System beep severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeepKind {
    Info,
    Warning,
    Error,
    Critical,
}

/// Alarm patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmKind {
    /// Gentle escalating beeps with shrinking pauses.
    WakeUp,
    /// Simple repeating beep.
    Timer,
    /// Urgent alternating siren tones.
    Emergency,
}

pub(crate) fn buzzer(engine: &SoundEngine, kind: BuzzerKind) -> SynthResult<WaveBuffer> {
    let (base_hz, partials): (f64, &[(f64, f64)]) = match kind {
        BuzzerKind::Error => (200.0, &[(1.0, 1.0), (1.5, 0.5), (2.0, 0.3), (2.5, 0.2)]),
        BuzzerKind::Warning => (400.0, &[(1.0, 1.0), (2.0, 0.4), (3.0, 0.2)]),
        BuzzerKind::Success => (600.0, &[(1.0, 1.0), (2.0, 0.3)]),
    };
    harmonic_stack(
        engine,
        base_hz,
        0.5,
        0.5,
        partials,
        &EnvelopeParams::new(0.001, 0.05, 0.8, 0.1),
    )
}

pub(crate) fn notification(engine: &SoundEngine, kind: NotificationKind) -> SynthResult<WaveBuffer> {
    match kind {
        NotificationKind::Message => {
            let env = EnvelopeParams::new(0.001, 0.03, 0.5, 0.04);
            let low = shaped(engine, 0.08, &[(600.0, 0.4)], &env)?;
            let high = shaped(engine, 0.08, &[(900.0, 0.4)], &env)?;
            engine.concatenate(vec![Segment::Sound(low), Segment::Sound(high)])
        }
        NotificationKind::Alert => {
            let env = EnvelopeParams::new(0.001, 0.02, 0.8, 0.05);
            let mut segments = Vec::new();
            for _ in 0..3 {
                segments.push(Segment::Sound(shaped(engine, 0.1, &[(1000.0, 0.5)], &env)?));
                segments.push(Segment::Silence(0.05));
            }
            engine.concatenate(segments)
        }
        NotificationKind::Complete => {
            let env = EnvelopeParams::new(0.001, 0.03, 0.5, 0.05);
            let mut segments = Vec::new();
            for note in [523.0, 659.0, 784.0] {
                segments.push(Segment::Sound(shaped(engine, 0.1, &[(note, 0.3)], &env)?));
            }
            engine.concatenate(segments)
        }
        NotificationKind::Pop => shaped(
            engine,
            0.05,
            &[(800.0, 0.4), (1600.0, 0.2)],
            &EnvelopeParams::new(0.001, 0.01, 0.3, 0.03),
        ),
    }
}

pub(crate) fn system_beep(engine: &SoundEngine, kind: BeepKind) -> SynthResult<WaveBuffer> {
    match kind {
        BeepKind::Info => shaped(
            engine,
            0.1,
            &[(800.0, 0.3)],
            &EnvelopeParams::new(0.001, 0.03, 0.6, 0.05),
        ),
        BeepKind::Warning => {
            let env = EnvelopeParams::new(0.001, 0.02, 0.7, 0.04);
            let beep = shaped(engine, 0.08, &[(600.0, 0.35)], &env)?;
            engine.concatenate(vec![
                Segment::Sound(beep.clone()),
                Segment::Silence(0.05),
                Segment::Sound(beep),
            ])
        }
        BeepKind::Error => shaped(
            engine,
            0.3,
            &[(300.0, 0.4), (450.0, 0.3)],
            &EnvelopeParams::new(0.01, 0.05, 0.8, 0.1),
        ),
        BeepKind::Critical => {
            let env = EnvelopeParams::new(0.001, 0.02, 0.8, 0.03);
            let mut segments = Vec::new();
            for _ in 0..3 {
                segments.push(Segment::Sound(shaped(engine, 0.1, &[(400.0, 0.45)], &env)?));
                segments.push(Segment::Silence(0.05));
            }
            engine.concatenate(segments)
        }
    }
}

pub(crate) fn alarm(engine: &SoundEngine, kind: AlarmKind) -> SynthResult<WaveBuffer> {
    match kind {
        AlarmKind::WakeUp => {
            let env = EnvelopeParams::new(0.01, 0.1, 0.7, 0.1);
            let mut segments = Vec::new();
            for i in 0..4 {
                let amplitude = 0.2 + i as f64 * 0.1;
                let beep = shaped(
                    engine,
                    0.3,
                    &[(800.0, amplitude), (1600.0, amplitude * 0.5)],
                    &env,
                )?;
                segments.push(Segment::Sound(beep));
                segments.push(Segment::Silence(0.5 - i as f64 * 0.1));
            }
            engine.concatenate(segments)
        }
        AlarmKind::Timer => {
            let env = EnvelopeParams::new(0.01, 0.05, 0.8, 0.05);
            let mut segments = Vec::new();
            for _ in 0..3 {
                segments.push(Segment::Sound(shaped(engine, 0.2, &[(1000.0, 0.4)], &env)?));
                segments.push(Segment::Silence(0.2));
            }
            engine.concatenate(segments)
        }
        AlarmKind::Emergency => {
            let env = EnvelopeParams::new(0.01, 0.05, 0.9, 0.02);
            let mut segments = Vec::new();
            for i in 0..6 {
                let freq = if i % 2 == 0 { 800.0 } else { 600.0 };
                segments.push(Segment::Sound(shaped(engine, 0.25, &[(freq, 0.5)], &env)?));
            }
            engine.concatenate(segments)
        }
    }
}
