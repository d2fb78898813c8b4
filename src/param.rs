use serde::{Deserialize, Serialize};

/// Waveform loading parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceParam {
    pub sample_rate: u32,
    /// Silence trimming threshold in dB, `None` disables trimming.
    pub top_db: Option<f64>,
    pub pad_second: f64,
}

impl Default for VoiceParam {
    fn default() -> Self {
        Self {
            sample_rate: 24000,
            top_db: None,
            pad_second: 0.0,
        }
    }
}

/// Vocoder analysis parameters for acoustic feature extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticFeatureParam {
    /// Frame shift in milliseconds.
    pub frame_period: u32,
    /// Mel-cepstrum order.
    pub order: u32,
    /// All-pass constant of the mel-cepstrum.
    pub alpha: f64,
    pub f0_estimating_method: String,
    pub f0_floor: f64,
    pub f0_ceil: f64,
    pub fft_length: u32,
    pub dtype: String,
}

impl Default for AcousticFeatureParam {
    fn default() -> Self {
        Self {
            frame_period: 5,
            order: 8,
            alpha: 0.466,
            f0_estimating_method: "harvest".to_string(),
            f0_floor: 71.0,
            f0_ceil: 800.0,
            fft_length: 1024,
            dtype: "float32".to_string(),
        }
    }
}

/// Feature parameters shared by the dataset pipeline.
///
/// Never read from a config document: loading always starts from
/// `Param::default()`, saving writes it out as a nested object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub voice_param: VoiceParam,
    pub acoustic_feature_param: AcousticFeatureParam,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_serializes_as_nested_record() {
        let value = serde_json::to_value(Param::default()).unwrap();

        assert_eq!(value["voice_param"]["sample_rate"], 24000);
        assert!(value["voice_param"]["top_db"].is_null());
        assert_eq!(value["acoustic_feature_param"]["f0_estimating_method"], "harvest");
        assert_eq!(value["acoustic_feature_param"]["alpha"], 0.466);
    }
}
