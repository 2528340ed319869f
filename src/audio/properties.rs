use std::fmt;

use super::decode::{AudioBuffer, SampleEncoding};
use super::round2;

/// Decoded in-memory bit depth class. Mirrors what the codec handed back,
/// not the container header: a decoder that upconverts reports the
/// upconverted width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Pcm16,
    Pcm32,
    Float32,
    Unknown,
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitDepth::Pcm16 => write!(f, "16"),
            BitDepth::Pcm32 => write!(f, "32"),
            BitDepth::Float32 => write!(f, "32 (float)"),
            BitDepth::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioProperties {
    pub sample_rate: u32,
    pub channels: usize,
    pub bit_depth: BitDepth,
    /// Frames / sample rate, rounded to 2 decimals (halves away from zero).
    pub duration_secs: f64,
}

pub fn extract(buffer: &AudioBuffer) -> AudioProperties {
    let bit_depth = match buffer.encoding {
        SampleEncoding::Int16 => BitDepth::Pcm16,
        SampleEncoding::Int32 => BitDepth::Pcm32,
        SampleEncoding::Float32 => BitDepth::Float32,
        SampleEncoding::Other => BitDepth::Unknown,
    };

    AudioProperties {
        sample_rate: buffer.sample_rate,
        channels: buffer.channels,
        bit_depth,
        duration_secs: round2(buffer.frames() as f64 / buffer.sample_rate as f64),
    }
}
