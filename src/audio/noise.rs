use super::decode::AudioBuffer;
use super::round2;
use crate::error::AnalysisError;

/// Average-amplitude noise floor of channel 0, in dB, rounded to 2 decimals.
///
/// Channels past the first are ignored; widening the estimate would change
/// every reported figure, so the asymmetry is kept. Samples are read in
/// their decoded numeric domain, which makes figures comparable only
/// between files of the same encoding class.
pub fn noise_floor_db(buffer: &AudioBuffer) -> Result<f64, AnalysisError> {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for sample in buffer.channel(0) {
        sum += sample.abs();
        count += 1;
    }

    if count == 0 {
        return Err(AnalysisError::InvalidSignal);
    }

    // A zero or non-finite mean has no defined dB value; fail instead of
    // letting -inf/NaN leak into a report.
    let mean_abs = sum / count as f64;
    if !(mean_abs > 0.0) {
        return Err(AnalysisError::InvalidSignal);
    }

    let db = 20.0 * mean_abs.log10();
    if !db.is_finite() {
        return Err(AnalysisError::InvalidSignal);
    }

    Ok(round2(db))
}
