//! waveforge synthesis engine
//!
//! This crate synthesizes short sound effects procedurally (no sampled
//! audio) and renders them to mono 16-bit PCM WAV files.
//!
//! # Overview
//!
//! The engine is a small pipeline of buffer-producing operations:
//!
//! - **Oscillator** - pure sine tones at a fixed frequency
//! - **Sweep** - phase-continuous linear chirps
//! - **Noise** - uniform random texture layers
//! - **Mixer** - additive combination of harmonics
//! - **Envelope** - ADSR amplitude shaping
//! - **Sequencer** - concatenation of shaped segments and silence gaps
//! - **Quantizer/Encoder** - clip, convert to 16-bit PCM, write WAV
//!
//! Data flows strictly upward: generators produce [`WaveBuffer`]s, the
//! mixer and shapers transform them, the sequencer concatenates them, and
//! quantization turns the result into a [`PcmStream`] ready for disk.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Randomness flows through explicitly
//! seeded PCG32 generators (see [`rng`]), with seeds derived via BLAKE3
//! hashing, so the same inputs and seed produce byte-identical output.
//! The quantized PCM carries a BLAKE3 hash for cheap identity checks.
//!
//! # Example
//!
//! ```no_run
//! use waveforge_synth::{EnvelopeParams, Segment, SoundEngine, SynthResult};
//!
//! fn ding_dong() -> SynthResult<()> {
//!     let engine = SoundEngine::new(44100);
//!
//!     let ding = engine.generate_tone(800.0, 0.3, 0.5)?;
//!     let ding = engine.apply_envelope(&ding, &EnvelopeParams::new(0.001, 0.1, 0.3, 0.15));
//!
//!     let dong = engine.generate_tone(600.0, 0.4, 0.5)?;
//!     let dong = engine.apply_envelope(&dong, &EnvelopeParams::new(0.001, 0.15, 0.3, 0.2));
//!
//!     let sound = engine.concatenate(vec![
//!         Segment::Sound(ding),
//!         Segment::Silence(0.1),
//!         Segment::Sound(dong),
//!     ])?;
//!
//!     engine.quantize(&sound).write_to_file("ding_dong.wav")?;
//!     Ok(())
//! }
//! ```

pub mod buffer;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod noise;
pub mod oscillator;
pub mod rng;
pub mod sequence;
pub mod tremolo;
pub mod wav;

// Re-export main types at crate root
pub use buffer::WaveBuffer;
pub use engine::SoundEngine;
pub use envelope::EnvelopeParams;
pub use error::{SynthError, SynthResult};
pub use mixer::mix;
pub use sequence::Segment;
pub use wav::{PcmStream, WavFormat};
