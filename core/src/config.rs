//! Configuration types for colornet-rs.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Model artifact configuration.
    #[serde(default)]
    pub model: ModelConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Model artifact configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ModelConfig {
    /// Path to the `.param` topology descriptor.
    #[serde(default)]
    pub param_path: Option<String>,

    /// Path to the `.bin` weight blob.
    #[serde(default)]
    pub weights_path: Option<String>,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output encoding tag ("jpg" or "png").
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "jpg".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> crate::error::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let config = Config::from_yaml_str(
            "model:\n  param_path: models/siggraph17_color_sim.param\n",
        )
        .unwrap();
        assert_eq!(
            config.model.param_path.as_deref(),
            Some("models/siggraph17_color_sim.param")
        );
        assert!(config.model.weights_path.is_none());
        assert_eq!(config.output.format, "jpg");
    }

    #[test]
    fn empty_config_defaults() {
        let config = Config::default();
        assert!(config.model.param_path.is_none());
        assert_eq!(config.output.format, "jpg");
    }
}
