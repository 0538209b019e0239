use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::{Context, Result};

pub const DEFAULT_CONFIG_FILE: &str = "varuint.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub json: bool,
    pub uppercase: bool,
    pub separator: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            json: false,
            uppercase: false,
            separator: " ".to_string(),
        }
    }
}

impl CliConfig {
    /// Load `config_path` (or the default file) if it exists, otherwise use defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)
                .with_context(|| format!("reading config {}", config_file))?;
            let config: CliConfig = toml::from_str(&content)
                .with_context(|| format!("parsing config {}", config_file))?;
            tracing::debug!("Loaded config from {}", config_file);
            Ok(config)
        } else {
            if config_path.is_some() {
                tracing::warn!("Config file {} not found, using defaults", config_file);
            }
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path.as_ref(), content)
            .with_context(|| format!("writing config {}", config_path.as_ref().display()))?;
        Ok(())
    }

    /// Render bytes as hex using the configured case and separator
    pub fn format_hex(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|b| if self.uppercase { format!("{:02X}", b) } else { format!("{:02x}", b) })
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("varuint.toml");
        let config = CliConfig { json: true, uppercase: true, separator: ":".to_string() };
        config.save(&path).unwrap();

        let loaded = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(CliConfig::load(path.to_str()).unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("varuint.toml");
        std::fs::write(&path, "uppercase = true\n").unwrap();

        let loaded = CliConfig::load(path.to_str()).unwrap();
        assert!(loaded.uppercase);
        assert!(!loaded.json);
        assert_eq!(loaded.separator, " ");
    }

    #[test]
    fn hex_formatting() {
        let mut config = CliConfig::default();
        assert_eq!(config.format_hex(&[0xFA, 0x01, 0x08, 0xF0]), "fa 01 08 f0");
        config.uppercase = true;
        config.separator = String::new();
        assert_eq!(config.format_hex(&[0xFA, 0x01]), "FA01");
    }
}
