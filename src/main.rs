mod audio;
mod cli;
mod config;
mod error;
mod report;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::RequirementProfile;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect wavecheck.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let local = std::path::PathBuf::from("wavecheck.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("wavecheck").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("wavecheck").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });
    if let Some(ref path) = config_path {
        if let Some(cfg) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            // Merge: config values apply only when CLI is at its default
            let req = cfg.requirements;
            if cli.format == "wav" { cli.format = req.format; }
            if cli.channels == 1 { cli.channels = req.channels; }
            if cli.sample_rate_khz == 44.1 { cli.sample_rate_khz = req.sample_rate_khz; }
            if cli.bit_depth == 16 { cli.bit_depth = req.bit_depth; }
            if cli.noise_floor_db == -60 { cli.noise_floor_db = req.noise_floor_db; }
            if cli.stereo_status == "dual-mono" { cli.stereo_status = req.stereo_status; }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    if cli.files.is_empty() {
        anyhow::bail!("No input files. Pass one or more WAV files to check.");
    }

    let profile = RequirementProfile::from_options(
        &cli.format,
        cli.channels,
        cli.sample_rate_khz,
        cli.bit_depth,
        cli.noise_floor_db,
        &cli.stereo_status,
    )?;

    log::info!("wavecheck - audio property validator");
    log::info!(
        "Requirements: {} / {} ch / {} Hz / {} bit / >= {} dB / {}",
        profile.format,
        profile.channels,
        profile.sample_rate_hz,
        profile.bit_depth,
        profile.noise_floor_db,
        profile.stereo_status,
    );

    // 1. Read inputs up front; a missing file is a usage error, not a row
    let mut inputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read audio file: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        inputs.push((name, bytes));
    }

    // 2. Analyze and evaluate
    let report = report::run_batch(inputs, &profile);

    // 3. Render
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::table::render_json(&report))?);
    } else {
        if report.entries.len() == 1 {
            print!("{}", report::table::render_properties(&report.entries[0]));
            println!();
        }
        print!("{}", report::table::render_table(&report));
    }

    Ok(())
}
