use std::path::Path;

use serde::Deserialize;

use crate::internal::common::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "gres_groups.toml";

/// A single `[[gres]]` line of the configuration.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GresLine {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct GresGroupsConfig {
    #[serde(default)]
    pub gres: Vec<GresLine>,
}

impl GresGroupsConfig {
    pub fn parse(str: &str) -> Result<GresGroupsConfig, ConfigError> {
        let config: GresGroupsConfig = toml::from_str(str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<GresGroupsConfig, ConfigError> {
        log::debug!("gres_groups: reading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for line in &self.gres {
            if line.name.is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            match &line.group {
                None => return Err(ConfigError::GresWithoutGroup(line.name.clone())),
                Some(group) if group.is_empty() => return Err(ConfigError::EmptyKey),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Ordered `(resource, group)` pairs.
    pub fn entries(&self) -> Result<Vec<(&str, &str)>, ConfigError> {
        self.gres
            .iter()
            .map(|line| match &line.group {
                Some(group) => Ok((line.name.as_str(), group.as_str())),
                None => Err(ConfigError::GresWithoutGroup(line.name.clone())),
            })
            .collect()
    }
}
