use crate::audio::analysis::FileMetrics;
use crate::config::RequirementProfile;

/// Outcome of one requirement comparison per field. Each flag is a pure
/// function of the measurements and the profile.
#[derive(Debug, Clone, Copy)]
pub struct MatchFlags {
    pub format: bool,
    pub channels: bool,
    pub sample_rate: bool,
    pub bit_depth: bool,
    pub noise_floor: bool,
    pub stereo_status: bool,
}

impl MatchFlags {
    /// Logical AND across exactly the six per-field flags.
    pub fn all(&self) -> bool {
        self.format
            && self.channels
            && self.sample_rate
            && self.bit_depth
            && self.noise_floor
            && self.stereo_status
    }
}

/// One file's measurements plus its comparison against the profile.
#[derive(Debug, Clone)]
pub struct FileVerdict {
    pub metrics: FileMetrics,
    pub matches: MatchFlags,
    pub matches_all: bool,
}

/// Compare measured metrics against the profile.
///
/// The format check is a case-insensitive filename suffix test, not a
/// container inspection: a misnamed file passes or fails by its name
/// alone. The noise floor is a floor: measured values at or above the
/// required minimum pass, lower values are too noisy.
pub fn evaluate(file_name: &str, metrics: FileMetrics, profile: &RequirementProfile) -> FileVerdict {
    let matches = MatchFlags {
        format: file_name.to_lowercase().ends_with(profile.format.extension()),
        channels: metrics.properties.channels == profile.channels,
        sample_rate: metrics.properties.sample_rate == profile.sample_rate_hz,
        bit_depth: profile.bit_depth.matches(metrics.properties.bit_depth),
        noise_floor: metrics.noise_floor_db >= profile.noise_floor_db,
        stereo_status: profile.stereo_status.matches(metrics.stereo_status),
    };
    let matches_all = matches.all();

    FileVerdict {
        metrics,
        matches,
        matches_all,
    }
}
