use std::fs;
use std::path::{Path, PathBuf};

use candle_core::Device;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::param::Param;
use crate::utils::{deserialize_expanded_path, device};

pub const ARCHIVE_FILE_NAME: &str = "config.json";

const SECTIONS: [&str; 4] = ["dataset", "model", "loss", "train"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(skip_deserializing)]
    pub param: Param,
    pub input_glob: String,
    pub target_glob: String,
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub input_mean_path: PathBuf,
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub input_var_path: PathBuf,
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub target_mean_path: PathBuf,
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub target_var_path: PathBuf,
    pub seed: u64,
    pub num_test: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub in_channels: usize,
    pub conv_bank_out_channels: usize,
    pub conv_bank_k: usize,
    pub max_pooling_k: usize,
    pub conv_projections_hidden_channels: usize,
    pub highway_layers: usize,
    pub out_channels: usize,
    pub out_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossConfig {
    pub l1: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub batchsize: usize,
    /// Device index, negative for CPU.
    pub gpu: i32,
    pub log_iteration: usize,
    pub snapshot_iteration: usize,
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub output: PathBuf,
}

impl TrainConfig {
    pub fn device(&self) -> candle_core::Result<Device> {
        device(self.gpu)
    }
}

/// Settings of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub model: ModelConfig,
    pub loss: LossConfig,
    pub train: TrainConfig,
}

impl Config {
    /// Render the whole config, `dataset.param` included, as pretty JSON
    /// with keys sorted at every level.
    pub fn to_json_string(&self) -> Result<String> {
        // Map is BTreeMap-backed, so going through Value sorts the keys.
        let value = serde_json::to_value(self).map_err(ConfigError::Serialize)?;
        serde_json::to_string_pretty(&value).map_err(ConfigError::Serialize)
    }

    /// Archive the config at `path`, overwriting any existing file.
    pub fn save_as_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("config saved to {path:?}");
        Ok(())
    }

    /// Create `train.output` and archive the config there as `config.json`.
    pub fn archive_to_output(&self) -> Result<PathBuf> {
        let output = &self.train.output;
        fs::create_dir_all(output).map_err(|source| ConfigError::Write {
            path: output.clone(),
            source,
        })?;
        let archived = output.join(ARCHIVE_FILE_NAME);
        self.save_as_json(&archived)?;
        Ok(archived)
    }
}

/// Where a config document comes from.
///
/// Strings are always JSON text and paths are always files, so a string that
/// happens to name a file is still parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Json(String),
    File(PathBuf),
}

impl From<&str> for ConfigSource {
    fn from(s: &str) -> Self {
        ConfigSource::Json(s.to_string())
    }
}

impl From<String> for ConfigSource {
    fn from(s: String) -> Self {
        ConfigSource::Json(s)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::File(path.to_path_buf())
    }
}

impl From<&PathBuf> for ConfigSource {
    fn from(path: &PathBuf) -> Self {
        ConfigSource::File(path.clone())
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

pub fn create_from_json<S: Into<ConfigSource>>(source: S) -> Result<Config> {
    let text = match source.into() {
        ConfigSource::Json(text) => text,
        ConfigSource::File(path) => {
            log::debug!("loading config from {path:?}");
            fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?
        }
    };

    let document: serde_json::Value = serde_json::from_str(&text).map_err(ConfigError::Parse)?;
    require_mappings(&document)?;
    serde_json::from_value(document).map_err(ConfigError::Field)
}

/// The root and every present section must be objects; derived structs would
/// otherwise accept arrays by field position.
fn require_mappings(document: &serde_json::Value) -> Result<()> {
    let root = document
        .as_object()
        .ok_or_else(|| not_a_mapping("config document"))?;
    for section in SECTIONS {
        match root.get(section) {
            Some(value) if !value.is_object() => return Err(not_a_mapping(section)),
            _ => {}
        }
    }
    Ok(())
}

fn not_a_mapping(what: &str) -> ConfigError {
    ConfigError::Field(serde::de::Error::custom(format!(
        "{what} must be a JSON object"
    )))
}
