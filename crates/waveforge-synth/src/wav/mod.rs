//! Quantization and deterministic WAV encoding.
//!
//! Floating-point buffers are hard-clipped to [-1.0, 1.0] and quantized
//! to mono 16-bit signed little-endian PCM, then wrapped in a minimal
//! RIFF/WAVE header with no timestamps or variable metadata. The BLAKE3
//! hash of the PCM frames gives a cheap byte-identity check across runs.

mod format;
mod pcm;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::PcmStream;
pub use writer::{write_wav, write_wav_to_vec};
