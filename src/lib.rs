pub mod config;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod param;
pub mod utils;

pub use config::{
    create_from_json, Config, ConfigSource, DatasetConfig, LossConfig, ModelConfig, TrainConfig,
};
pub use dataset::DatasetSplit;
pub use error::{ConfigError, Result};
pub use param::{AcousticFeatureParam, Param, VoiceParam};
