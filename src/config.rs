use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::audio::properties::BitDepth;
use crate::audio::stereo::StereoStatus;
use crate::error::AnalysisError;

const SAMPLE_RATE_KHZ_CHOICES: [f64; 4] = [44.1, 48.0, 96.0, 192.0];

/// Container format a profile can require. Only the filename suffix is
/// ever checked against this; MP3/AAC payloads are not decodable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredFormat {
    Wav,
    Mp3,
    Aac,
}

impl RequiredFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RequiredFormat::Wav => ".wav",
            RequiredFormat::Mp3 => ".mp3",
            RequiredFormat::Aac => ".aac",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "wav" => Some(RequiredFormat::Wav),
            "mp3" => Some(RequiredFormat::Mp3),
            "aac" => Some(RequiredFormat::Aac),
            _ => None,
        }
    }
}

impl fmt::Display for RequiredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredFormat::Wav => write!(f, "WAV"),
            RequiredFormat::Mp3 => write!(f, "MP3"),
            RequiredFormat::Aac => write!(f, "AAC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredBitDepth {
    Pcm16,
    Pcm24,
    Pcm32,
}

impl RequiredBitDepth {
    /// 24-bit exists only on the requirement side; the decoder never
    /// classifies a file as 24-bit, so that requirement cannot be met.
    pub fn matches(self, measured: BitDepth) -> bool {
        matches!(
            (self, measured),
            (RequiredBitDepth::Pcm16, BitDepth::Pcm16) | (RequiredBitDepth::Pcm32, BitDepth::Pcm32)
        )
    }

    fn parse(value: u32) -> Option<Self> {
        match value {
            16 => Some(RequiredBitDepth::Pcm16),
            24 => Some(RequiredBitDepth::Pcm24),
            32 => Some(RequiredBitDepth::Pcm32),
            _ => None,
        }
    }
}

impl fmt::Display for RequiredBitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredBitDepth::Pcm16 => write!(f, "16"),
            RequiredBitDepth::Pcm24 => write!(f, "24"),
            RequiredBitDepth::Pcm32 => write!(f, "32"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredStereo {
    Mono,
    DualMono,
    TrueStereo,
    JointStereo,
}

impl RequiredStereo {
    /// Joint Stereo is a requirement-side option the classifier never
    /// produces, so it can never be satisfied.
    pub fn matches(self, measured: StereoStatus) -> bool {
        matches!(
            (self, measured),
            (RequiredStereo::Mono, StereoStatus::Mono)
                | (RequiredStereo::DualMono, StereoStatus::DualMono)
                | (RequiredStereo::TrueStereo, StereoStatus::TrueStereo)
        )
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "mono" => Some(RequiredStereo::Mono),
            "dual-mono" => Some(RequiredStereo::DualMono),
            "true-stereo" => Some(RequiredStereo::TrueStereo),
            "joint-stereo" => Some(RequiredStereo::JointStereo),
            _ => None,
        }
    }
}

impl fmt::Display for RequiredStereo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredStereo::Mono => write!(f, "Mono"),
            RequiredStereo::DualMono => write!(f, "Dual Mono"),
            RequiredStereo::TrueStereo => write!(f, "True Stereo"),
            RequiredStereo::JointStereo => write!(f, "Joint Stereo"),
        }
    }
}

/// Immutable requirement set one evaluation run compares against.
#[derive(Debug, Clone)]
pub struct RequirementProfile {
    pub format: RequiredFormat,
    pub channels: usize,
    pub sample_rate_hz: u32,
    pub bit_depth: RequiredBitDepth,
    pub noise_floor_db: f64,
    pub stereo_status: RequiredStereo,
}

impl RequirementProfile {
    /// Validate raw option values against their enumerated domains and
    /// build a profile. The sample rate arrives in kHz and converts to Hz
    /// as `(khz * 1000).round()`.
    pub fn from_options(
        format: &str,
        channels: u32,
        sample_rate_khz: f64,
        bit_depth: u32,
        noise_floor_db: i32,
        stereo_status: &str,
    ) -> Result<Self, AnalysisError> {
        let format = RequiredFormat::parse(format).ok_or_else(|| {
            AnalysisError::Configuration(format!("unknown format '{format}' (expected wav, mp3, or aac)"))
        })?;

        if !(channels == 1 || channels == 2) {
            return Err(AnalysisError::Configuration(format!(
                "channel count {channels} out of range (expected 1 or 2)"
            )));
        }

        if !SAMPLE_RATE_KHZ_CHOICES.contains(&sample_rate_khz) {
            return Err(AnalysisError::Configuration(format!(
                "sample rate {sample_rate_khz} kHz not offered (expected 44.1, 48, 96, or 192)"
            )));
        }

        let bit_depth = RequiredBitDepth::parse(bit_depth).ok_or_else(|| {
            AnalysisError::Configuration(format!("bit depth {bit_depth} not offered (expected 16, 24, or 32)"))
        })?;

        if !(-100..=0).contains(&noise_floor_db) {
            return Err(AnalysisError::Configuration(format!(
                "noise floor {noise_floor_db} dB out of range (expected -100 to 0)"
            )));
        }

        let stereo_status = RequiredStereo::parse(stereo_status).ok_or_else(|| {
            AnalysisError::Configuration(format!(
                "unknown stereo status '{stereo_status}' (expected mono, dual-mono, true-stereo, or joint-stereo)"
            ))
        })?;

        Ok(RequirementProfile {
            format,
            channels: channels as usize,
            sample_rate_hz: (sample_rate_khz * 1000.0).round() as u32,
            bit_depth,
            noise_floor_db: noise_floor_db as f64,
            stereo_status,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub requirements: RequirementsConfig,
}

#[derive(Debug, Deserialize)]
pub struct RequirementsConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_channels")]
    pub channels: u32,
    #[serde(default = "default_sample_rate_khz")]
    pub sample_rate_khz: f64,
    #[serde(default = "default_bit_depth")]
    pub bit_depth: u32,
    #[serde(default = "default_noise_floor_db")]
    pub noise_floor_db: i32,
    #[serde(default = "default_stereo_status")]
    pub stereo_status: String,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            channels: default_channels(),
            sample_rate_khz: default_sample_rate_khz(),
            bit_depth: default_bit_depth(),
            noise_floor_db: default_noise_floor_db(),
            stereo_status: default_stereo_status(),
        }
    }
}

fn default_format() -> String { "wav".into() }
fn default_channels() -> u32 { 1 }
fn default_sample_rate_khz() -> f64 { 44.1 }
fn default_bit_depth() -> u32 { 16 }
fn default_noise_floor_db() -> i32 { -60 }
fn default_stereo_status() -> String { "dual-mono".into() }

pub fn load_config(path: &PathBuf) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}
