use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{
    CodecType, DecoderOptions, CODEC_TYPE_NULL, CODEC_TYPE_PCM_F32BE, CODEC_TYPE_PCM_F32LE,
    CODEC_TYPE_PCM_S16BE, CODEC_TYPE_PCM_S16LE, CODEC_TYPE_PCM_S32BE, CODEC_TYPE_PCM_S32LE,
};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// The in-memory sample representation the codec handed back. Classified
/// once here so downstream code can match exhaustively instead of
/// re-inspecting codec parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEncoding {
    Int16,
    Int32,
    Float32,
    Other,
}

/// One decoded file, alive for the duration of that file's analysis.
pub struct AudioBuffer {
    /// Interleaved frames in the encoding's native numeric domain:
    /// integer PCM keeps its integer scale, float stays unit-scaled.
    /// `Other` encodings fall back to unit-scaled f64.
    pub samples: Vec<f64>,
    pub channels: usize,
    pub sample_rate: u32,
    pub encoding: SampleEncoding,
}

impl AudioBuffer {
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Samples of one channel, in frame order.
    pub fn channel(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied().skip(index).step_by(self.channels)
    }
}

/// Decode an in-memory WAV byte stream. Only RIFF/WAVE containers are
/// recognized; anything else fails with a decode error.
pub fn decode_wav(bytes: Vec<u8>) -> Result<AudioBuffer, AnalysisError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| AnalysisError::Decode(format!("not a recognizable WAV stream: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::Decode("no audio track in stream".into()))?;

    let track_id = track.id;
    let channels = track.codec_params.channels.map_or(1, |c| c.count());
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::Decode("stream does not declare a sample rate".into()))?;
    let encoding = classify_codec(track.codec_params.codec);

    if channels == 0 {
        return Err(AnalysisError::Decode("stream declares zero channels".into()));
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::Decode(format!("unsupported WAV encoding: {e}")))?;

    let mut samples: Vec<f64> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(AnalysisError::Decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(AnalysisError::Decode(e.to_string())),
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames() as u64;

        // Copy out interleaved in the native domain of the source encoding.
        match encoding {
            SampleEncoding::Int16 => {
                let mut buf = SampleBuffer::<i16>::new(num_frames, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend(buf.samples().iter().map(|&s| s as f64));
            }
            SampleEncoding::Int32 => {
                let mut buf = SampleBuffer::<i32>::new(num_frames, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend(buf.samples().iter().map(|&s| s as f64));
            }
            SampleEncoding::Float32 => {
                let mut buf = SampleBuffer::<f32>::new(num_frames, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend(buf.samples().iter().map(|&s| s as f64));
            }
            SampleEncoding::Other => {
                let mut buf = SampleBuffer::<f64>::new(num_frames, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buf.samples());
            }
        }
    }

    log::info!(
        "Decoded WAV: {} frames, {} ch, {} Hz, {:?}",
        samples.len() / channels,
        channels,
        sample_rate,
        encoding,
    );

    Ok(AudioBuffer {
        samples,
        channels,
        sample_rate,
        encoding,
    })
}

fn classify_codec(codec: CodecType) -> SampleEncoding {
    match codec {
        CODEC_TYPE_PCM_S16LE | CODEC_TYPE_PCM_S16BE => SampleEncoding::Int16,
        CODEC_TYPE_PCM_S32LE | CODEC_TYPE_PCM_S32BE => SampleEncoding::Int32,
        CODEC_TYPE_PCM_F32LE | CODEC_TYPE_PCM_F32BE => SampleEncoding::Float32,
        _ => SampleEncoding::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fixtures;

    #[test]
    fn decodes_pcm16_mono() {
        let bytes = fixtures::wav_pcm16(44100, 1, &[0, 1000, -1000, 32767]);
        let buf = decode_wav(bytes).unwrap();

        assert_eq!(buf.sample_rate, 44100);
        assert_eq!(buf.channels, 1);
        assert_eq!(buf.encoding, SampleEncoding::Int16);
        assert_eq!(buf.frames(), 4);
        assert_eq!(buf.samples, vec![0.0, 1000.0, -1000.0, 32767.0]);
    }

    #[test]
    fn decodes_pcm16_stereo_interleaved() {
        let bytes = fixtures::wav_pcm16(48000, 2, &[1, 10, 2, 20, 3, 30]);
        let buf = decode_wav(bytes).unwrap();

        assert_eq!(buf.channels, 2);
        assert_eq!(buf.frames(), 3);
        let left: Vec<f64> = buf.channel(0).collect();
        let right: Vec<f64> = buf.channel(1).collect();
        assert_eq!(left, vec![1.0, 2.0, 3.0]);
        assert_eq!(right, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn decodes_pcm32_in_integer_domain() {
        let bytes = fixtures::wav_pcm32(44100, 1, &[0, 1_000_000, -1_000_000]);
        let buf = decode_wav(bytes).unwrap();

        assert_eq!(buf.encoding, SampleEncoding::Int32);
        assert_eq!(buf.samples, vec![0.0, 1_000_000.0, -1_000_000.0]);
    }

    #[test]
    fn decodes_float32_unit_scaled() {
        let bytes = fixtures::wav_float32(48000, 1, &[0.0, 0.5, -0.25]);
        let buf = decode_wav(bytes).unwrap();

        assert_eq!(buf.encoding, SampleEncoding::Float32);
        assert_eq!(buf.samples, vec![0.0, 0.5, -0.25]);
    }

    #[test]
    fn rejects_non_wav_bytes() {
        let err = decode_wav(b"this is definitely not audio".to_vec()).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn rejects_empty_stream() {
        let err = decode_wav(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn rejects_truncated_header() {
        let mut bytes = fixtures::wav_pcm16(44100, 1, &[0, 1, 2, 3]);
        bytes.truncate(16);
        let err = decode_wav(bytes).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }
}
