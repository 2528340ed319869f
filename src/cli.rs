use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wavecheck", about = "WAV audio property inspector and requirement checker")]
pub struct Cli {
    /// Audio files to check (WAV)
    pub files: Vec<PathBuf>,

    /// Config file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Required container format (wav, mp3, aac)
    #[arg(long, default_value = "wav")]
    pub format: String,

    /// Required channel count (1 or 2)
    #[arg(long, default_value_t = 1)]
    pub channels: u32,

    /// Required sample rate in kHz (44.1, 48, 96, 192)
    #[arg(long, default_value_t = 44.1)]
    pub sample_rate_khz: f64,

    /// Required bit depth (16, 24, 32)
    #[arg(long, default_value_t = 16)]
    pub bit_depth: u32,

    /// Required minimum noise floor in dB (integer, -100 to 0)
    #[arg(long, default_value_t = -60, allow_hyphen_values = true)]
    pub noise_floor_db: i32,

    /// Required stereo status (mono, dual-mono, true-stereo, joint-stereo)
    #[arg(long, default_value = "dual-mono")]
    pub stereo_status: String,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
