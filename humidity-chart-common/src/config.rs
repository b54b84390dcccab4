use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_bins")]
    pub bin_count: usize,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default = "default_wrapper_id")]
    pub wrapper_id: String,
    #[serde(default = "default_tooltip_id")]
    pub tooltip_id: String,
}

fn default_width() -> f64 {
    600.0
}
fn default_bins() -> usize {
    12
}
fn default_bar_padding() -> f64 {
    1.0
}
fn default_wrapper_id() -> String {
    "wrapper".into()
}
fn default_tooltip_id() -> String {
    "tooltip".into()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            bin_count: default_bins(),
            bar_padding: default_bar_padding(),
            wrapper_id: default_wrapper_id(),
            tooltip_id: default_tooltip_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_format() -> String {
    "json".into()
}
fn default_output_dir() -> String {
    ".".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("humidity-chart")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("HUMIDITY_CHART_CONFIG") {
            PathBuf::from(env_path) // $HUMIDITY_CHART_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::ChartError::Other(e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::ChartError::Other(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
