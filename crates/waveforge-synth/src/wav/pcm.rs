//! Quantized PCM frame stream.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::buffer::WaveBuffer;
use crate::error::SynthResult;

use super::format::WavFormat;
use super::writer::{write_wav, write_wav_to_vec};

/// A quantized, byte-serializable waveform: mono 16-bit signed
/// little-endian frames at a fixed sample rate.
///
/// This is the only persisted entity in the engine; it has no lifecycle
/// beyond being written once to a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmStream {
    frames: Vec<i16>,
    sample_rate: u32,
}

impl PcmStream {
    /// Quantizes a floating-point buffer.
    ///
    /// Each sample is hard-clipped to [-1.0, 1.0] and mapped to a 16-bit
    /// signed integer via `round(sample * 32767)`. This is the only place
    /// range violations from unnormalized additive mixing are resolved;
    /// clipping instead of global rescaling keeps relative levels between
    /// segments predictable.
    pub fn quantize(buffer: &WaveBuffer, sample_rate: u32) -> Self {
        let frames = buffer
            .samples()
            .iter()
            .map(|&sample| (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16)
            .collect();
        Self {
            frames,
            sample_rate,
        }
    }

    /// Borrows the quantized frames.
    pub fn frames(&self) -> &[i16] {
        &self.frames
    }

    /// Number of frames in the stream.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the stream holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Raw frame bytes, little-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.frames.len() * 2);
        for frame in &self.frames {
            bytes.extend_from_slice(&frame.to_le_bytes());
        }
        bytes
    }

    /// BLAKE3 hash of the frame bytes as a hex string.
    ///
    /// Two streams with the same hash are byte-identical; used by tests
    /// to validate determinism.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.to_bytes()).to_hex().to_string()
    }

    /// Serializes the stream into a complete WAV file in memory.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let format = WavFormat::mono(self.sample_rate);
        write_wav_to_vec(&format, &self.to_bytes())
    }

    /// Writes the stream as a WAV file to an arbitrary writer.
    ///
    /// Header length fields are computed from the known frame count
    /// before any byte is emitted, so a corrupt header is never written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> SynthResult<()> {
        let format = WavFormat::mono(self.sample_rate);
        write_wav(writer, &format, &self.to_bytes())?;
        Ok(())
    }

    /// Writes the stream as a WAV file at the given path.
    ///
    /// The full file is assembled in memory first and written in one
    /// call; any failure surfaces as [`crate::SynthError::Io`] and is
    /// never reported as success.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> SynthResult<()> {
        fs::write(path, self.to_wav_bytes())?;
        Ok(())
    }
}
