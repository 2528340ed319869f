use super::{BatchReport, ReportEntry};

/// Fixed-width text table, one row per input file. Failed files carry
/// their error message in place of the metric columns.
pub fn render_table(report: &BatchReport) -> String {
    let name_w = report
        .entries
        .iter()
        .map(|e| e.file_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();

    let header = format!(
        "{:>4}  {:<name_w$}  {:<9}  {:>9}  {:<10}  {:>2}  {:<11}  {:>10}  {:>8}  {}\n",
        "No.", "File", "Format", "Rate (Hz)", "Bit Depth", "Ch", "Stereo", "Noise (dB)", "Dur (s)", "Match",
    );
    out.push_str(&header);
    out.push_str(&"-".repeat(header.trim_end().chars().count()));
    out.push('\n');

    for entry in &report.entries {
        match &entry.outcome {
            Ok(v) => {
                let p = &v.metrics.properties;
                let format_label = format!(
                    "{} ({})",
                    report.profile.format,
                    if v.matches.format { "O" } else { "X" }
                );
                out.push_str(&format!(
                    "{:>4}  {:<name_w$}  {:<9}  {:>9}  {:<10}  {:>2}  {:<11}  {:>10.2}  {:>8.2}  {}\n",
                    entry.seq,
                    entry.file_name,
                    format_label,
                    p.sample_rate,
                    p.bit_depth.to_string(),
                    p.channels,
                    v.metrics.stereo_status.to_string(),
                    v.metrics.noise_floor_db,
                    p.duration_secs,
                    if v.matches_all { "O" } else { "X" },
                ));
            }
            Err(e) => {
                out.push_str(&format!(
                    "{:>4}  {:<name_w$}  {} -- X\n",
                    entry.seq, entry.file_name, e,
                ));
            }
        }
    }

    out
}

/// Key/value property listing for a single file (the inspection view).
pub fn render_properties(entry: &ReportEntry) -> String {
    let mut out = String::new();
    match &entry.outcome {
        Ok(v) => {
            let p = &v.metrics.properties;
            out.push_str(&format!("File: {}\n", entry.file_name));
            out.push_str(&format!("  Sample Rate: {}\n", p.sample_rate));
            out.push_str(&format!("  Channels: {}\n", p.channels));
            out.push_str(&format!("  Bit Depth: {}\n", p.bit_depth));
            out.push_str(&format!("  Duration (seconds): {:.2}\n", p.duration_secs));
            out.push_str(&format!("  Noise Floor (dB): {:.2}\n", v.metrics.noise_floor_db));
            out.push_str(&format!("  Stereo Status: {}\n", v.metrics.stereo_status));
        }
        Err(e) => {
            out.push_str(&format!("File: {}\n  Error: {}\n", entry.file_name, e));
        }
    }
    out
}

/// Machine-readable rendering of the same report.
pub fn render_json(report: &BatchReport) -> serde_json::Value {
    let files: Vec<serde_json::Value> = report
        .entries
        .iter()
        .map(|entry| match &entry.outcome {
            Ok(v) => {
                let p = &v.metrics.properties;
                serde_json::json!({
                    "no": entry.seq,
                    "file": entry.file_name,
                    "sample_rate": p.sample_rate,
                    "channels": p.channels,
                    "bit_depth": p.bit_depth.to_string(),
                    "duration_secs": p.duration_secs,
                    "noise_floor_db": v.metrics.noise_floor_db,
                    "stereo_status": v.metrics.stereo_status.to_string(),
                    "matches": {
                        "format": v.matches.format,
                        "channels": v.matches.channels,
                        "sample_rate": v.matches.sample_rate,
                        "bit_depth": v.matches.bit_depth,
                        "noise_floor": v.matches.noise_floor,
                        "stereo_status": v.matches.stereo_status,
                    },
                    "matches_all": v.matches_all,
                })
            }
            Err(e) => serde_json::json!({
                "no": entry.seq,
                "file": entry.file_name,
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::json!({
        "requirements": {
            "format": report.profile.format.to_string(),
            "channels": report.profile.channels,
            "sample_rate_hz": report.profile.sample_rate_hz,
            "bit_depth": report.profile.bit_depth.to_string(),
            "noise_floor_db": report.profile.noise_floor_db,
            "stereo_status": report.profile.stereo_status.to_string(),
        },
        "files": files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fixtures;
    use crate::config::RequirementProfile;
    use crate::report::run_batch;

    fn sample_report() -> BatchReport {
        let profile = RequirementProfile::from_options("wav", 1, 44.1, 16, -60, "mono").unwrap();
        let inputs = vec![
            ("tone.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[100; 44100])),
            ("broken.wav".to_string(), b"garbage".to_vec()),
        ];
        run_batch(inputs, &profile)
    }

    #[test]
    fn table_has_one_row_per_file() {
        let report = sample_report();
        let table = render_table(&report);

        let rows: Vec<&str> = table.lines().collect();
        // header + rule + 2 entries
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Noise (dB)"));
        assert!(rows[2].contains("tone.wav"));
        assert!(rows[3].contains("broken.wav"));
    }

    #[test]
    fn passing_row_reads_o() {
        let report = sample_report();
        let table = render_table(&report);
        let tone_row = table.lines().find(|l| l.contains("tone.wav")).unwrap();

        assert!(tone_row.contains("WAV (O)"));
        assert!(tone_row.contains("44100"));
        assert!(tone_row.contains("Mono"));
        assert!(tone_row.trim_end().ends_with("O"));
    }

    #[test]
    fn failed_row_shows_the_error() {
        let report = sample_report();
        let table = render_table(&report);
        let broken_row = table.lines().find(|l| l.contains("broken.wav")).unwrap();

        assert!(broken_row.contains("decode error"));
        assert!(broken_row.trim_end().ends_with("X"));
    }

    #[test]
    fn properties_listing_uses_original_labels() {
        let report = sample_report();
        let listing = render_properties(&report.entries[0]);

        assert!(listing.contains("Sample Rate: 44100"));
        assert!(listing.contains("Channels: 1"));
        assert!(listing.contains("Bit Depth: 16"));
        assert!(listing.contains("Duration (seconds): 1.00"));
        assert!(listing.contains("Noise Floor (dB): 40.00"));
        assert!(listing.contains("Stereo Status: Mono"));
    }

    #[test]
    fn json_report_structure() {
        let report = sample_report();
        let json = render_json(&report);

        assert_eq!(json["requirements"]["sample_rate_hz"], 44100);
        assert_eq!(json["files"].as_array().unwrap().len(), 2);
        assert_eq!(json["files"][0]["file"], "tone.wav");
        assert_eq!(json["files"][0]["matches_all"], true);
        assert_eq!(json["files"][1]["no"], 2);
        assert!(json["files"][1]["error"].as_str().unwrap().contains("decode error"));
    }
}
