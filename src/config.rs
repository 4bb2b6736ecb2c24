//! JSON configuration for the `edge_detect` tool.
use crate::edges::BlurKernel;
use crate::error::EdgeError;
use crate::image::Channel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Percentile used when the config does not name one.
pub const DEFAULT_PERCENTILE: u32 = 89;

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    pub blur: BlurKernel,
    #[serde(default = "default_percentile")]
    pub percentile: u32,
    pub output: OutputConfig,
}

/// Where each stage writes its snapshot. Only the binarized result is
/// mandatory.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub blurred: Option<PathBuf>,
    #[serde(default)]
    pub gradient: Option<PathBuf>,
    pub threshold: PathBuf,
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl PipelineConfig {
    /// Config with defaults for everything but the input and final output.
    pub fn new(input: impl Into<PathBuf>, threshold: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            channel: Channel::default(),
            blur: BlurKernel::default(),
            percentile: DEFAULT_PERCENTILE,
            output: OutputConfig {
                blurred: None,
                gradient: None,
                threshold: threshold.into(),
                report: None,
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EdgeError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EdgeError::Config(format!("failed to parse config: {e}")))?;
        if config.percentile > 100 {
            return Err(EdgeError::Config(format!(
                "percentile must be in 0..=100, got {}",
                config.percentile
            )));
        }
        Ok(config)
    }
}

fn default_percentile() -> u32 {
    DEFAULT_PERCENTILE
}

pub fn load_config(path: &Path) -> Result<PipelineConfig, EdgeError> {
    let data = fs::read_to_string(path)
        .map_err(|e| EdgeError::Config(format!("failed to read {}: {e}", path.display())))?;
    PipelineConfig::from_json(&data)
}
