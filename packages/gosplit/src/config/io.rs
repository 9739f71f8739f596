//! Configuration I/O (YAML loading)

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::split_config::{CollisionPolicy, FormatterKind, ImplicitRepetition, SplitConfig};

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// Every field except `version` is optional and overlays the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<FormatterKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter_program: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision: Option<CollisionPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_repetition: Option<ImplicitRepetition>,
}

impl SplitConfig {
    /// Load a configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(dir) = file.dir {
            config.dir = dir.into();
        }
        if let Some(formatter) = file.formatter {
            config.formatter = formatter;
        }
        if let Some(program) = file.formatter_program {
            config.formatter_program = program;
        }
        if let Some(backup) = file.backup {
            config.backup = backup;
        }
        if let Some(suffix) = file.backup_suffix {
            config.backup_suffix = suffix;
        }
        if let Some(collision) = file.collision {
            config.collision = collision;
        }
        if let Some(policy) = file.implicit_repetition {
            config.implicit_repetition = policy;
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as a v1 configuration file
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            dir: Some(self.dir.display().to_string()),
            formatter: Some(self.formatter),
            formatter_program: Some(self.formatter_program.clone()),
            backup: Some(self.backup),
            backup_suffix: Some(self.backup_suffix.clone()),
            collision: Some(self.collision),
            implicit_repetition: Some(self.implicit_repetition),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}
