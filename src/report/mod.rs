pub mod table;
pub mod verdict;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::audio::analysis;
use crate::config::RequirementProfile;
use crate::error::AnalysisError;
use self::verdict::{evaluate, FileVerdict};

/// One report row: a full verdict, or the per-file failure that replaced it.
#[derive(Debug)]
pub struct ReportEntry {
    /// 1-based position in the input order.
    pub seq: usize,
    pub file_name: String,
    pub outcome: Result<FileVerdict, AnalysisError>,
}

/// Ordered aggregation of per-file results. Rows keep the order the files
/// were given in; no deduplication, no sorting, no filtering.
#[derive(Debug)]
pub struct BatchReport {
    pub profile: RequirementProfile,
    pub entries: Vec<ReportEntry>,
}

/// Analyze every input against the profile. Files are processed in
/// parallel; row order follows input order, not completion order, and a
/// failing file never takes the batch down with it.
pub fn run_batch(inputs: Vec<(String, Vec<u8>)>, profile: &RequirementProfile) -> BatchReport {
    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let entries: Vec<ReportEntry> = inputs
        .into_par_iter()
        .enumerate()
        .map(|(i, (file_name, bytes))| {
            let outcome = analysis::analyze(bytes).map(|m| evaluate(&file_name, m, profile));
            if let Err(ref e) = outcome {
                log::warn!("{}: {}", file_name, e);
            }
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
            ReportEntry {
                seq: i + 1,
                file_name,
                outcome,
            }
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    BatchReport {
        profile: profile.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fixtures;

    fn profile() -> RequirementProfile {
        RequirementProfile::from_options("wav", 1, 44.1, 16, -60, "mono").unwrap()
    }

    #[test]
    fn corrupt_file_keeps_its_row_and_order() {
        let inputs = vec![
            ("a.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[100; 1000])),
            ("b.wav".to_string(), b"not a wav".to_vec()),
            ("c.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[200; 1000])),
        ];
        let report = run_batch(inputs, &profile());

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[0].seq, 1);
        assert_eq!(report.entries[1].seq, 2);
        assert_eq!(report.entries[2].seq, 3);
        assert_eq!(report.entries[0].file_name, "a.wav");
        assert_eq!(report.entries[1].file_name, "b.wav");
        assert_eq!(report.entries[2].file_name, "c.wav");

        assert!(report.entries[0].outcome.is_ok());
        assert!(matches!(report.entries[1].outcome, Err(AnalysisError::Decode(_))));
        assert!(report.entries[2].outcome.is_ok());
    }

    #[test]
    fn single_passing_file() {
        let inputs = vec![("tone.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[100; 44100]))];
        let report = run_batch(inputs, &profile());

        assert_eq!(report.entries.len(), 1);
        let verdict = report.entries[0].outcome.as_ref().unwrap();
        assert!(verdict.matches_all);
    }

    #[test]
    fn silent_file_is_isolated_too() {
        let inputs = vec![
            ("quiet.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[0; 4410])),
            ("tone.wav".to_string(), fixtures::wav_pcm16(44100, 1, &[100; 4410])),
        ];
        let report = run_batch(inputs, &profile());

        assert!(matches!(report.entries[0].outcome, Err(AnalysisError::InvalidSignal)));
        assert!(report.entries[1].outcome.is_ok());
    }
}
