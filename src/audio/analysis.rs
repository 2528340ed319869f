use crate::error::AnalysisError;

use super::decode;
use super::noise;
use super::properties::{self, AudioProperties};
use super::stereo::{self, StereoStatus};

/// Everything measured from one file, merged into a single record.
#[derive(Debug, Clone)]
pub struct FileMetrics {
    pub properties: AudioProperties,
    pub noise_floor_db: f64,
    pub stereo_status: StereoStatus,
}

/// Decode a WAV byte stream once and derive every reported metric from the
/// same buffer. The buffer is dropped when this returns.
pub fn analyze(bytes: Vec<u8>) -> Result<FileMetrics, AnalysisError> {
    let buffer = decode::decode_wav(bytes)?;

    let properties = properties::extract(&buffer);
    let noise_floor_db = noise::noise_floor_db(&buffer)?;
    let stereo_status = stereo::classify(&buffer);

    Ok(FileMetrics {
        properties,
        noise_floor_db,
        stereo_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fixtures;
    use crate::audio::properties::BitDepth;

    #[test]
    fn near_silent_mono_tone() {
        // 1.0 s of constant amplitude 100 at 44.1 kHz, 16-bit PCM.
        let bytes = fixtures::wav_pcm16(44100, 1, &vec![100i16; 44100]);
        let metrics = analyze(bytes).unwrap();

        assert_eq!(metrics.properties.channels, 1);
        assert_eq!(metrics.properties.sample_rate, 44100);
        assert_eq!(metrics.properties.bit_depth, BitDepth::Pcm16);
        assert_eq!(metrics.properties.duration_secs, 1.0);
        assert_eq!(metrics.stereo_status, StereoStatus::Mono);
        assert!((metrics.noise_floor_db - 40.0).abs() < 1e-9);
    }

    #[test]
    fn dual_mono_at_48k() {
        // 2.5 s, both channels bit-identical.
        let frames = 120_000usize;
        let mut interleaved = Vec::with_capacity(frames * 2);
        for i in 0..frames {
            let s = ((i % 100) as i16) - 50;
            interleaved.push(s);
            interleaved.push(s);
        }
        let bytes = fixtures::wav_pcm16(48000, 2, &interleaved);
        let metrics = analyze(bytes).unwrap();

        assert_eq!(metrics.properties.channels, 2);
        assert_eq!(metrics.properties.duration_secs, 2.5);
        assert_eq!(metrics.stereo_status, StereoStatus::DualMono);
    }

    #[test]
    fn silent_file_reports_invalid_signal() {
        let bytes = fixtures::wav_pcm16(44100, 1, &vec![0i16; 4410]);
        assert!(matches!(analyze(bytes), Err(AnalysisError::InvalidSignal)));
    }

    #[test]
    fn corrupt_stream_reports_decode_error() {
        assert!(matches!(
            analyze(b"RIFFnope".to_vec()),
            Err(AnalysisError::Decode(_))
        ));
    }
}
