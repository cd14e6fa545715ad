use std::path::PathBuf;

use color_eyre::{Result, eyre::Context, eyre::eyre};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    database: String,
    #[serde(default)]
    server: ServerConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("melodex").join("config.toml"))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path().ok_or_else(|| eyre!("Config file not found"))?;
        Self::from_file(&config_path)
    }

    /// Create a default config file, if it doesn't exist
    pub fn create_default() -> Result<()> {
        let config_path = Self::config_path().ok_or_else(|| eyre!("No config directory found"))?;
        if config_path.exists() {
            return Err(eyre!(
                "Config file already exists: {}",
                config_path.display()
            ));
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let database = dirs::data_dir()
            .map(|dir| dir.join("melodex").join("melodex.db"))
            .ok_or_else(|| eyre!("No data directory found"))?;
        let config = Config {
            database: database.to_string_lossy().to_string(),
            server: ServerConfig::default(),
        };

        let contents = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;
        Ok(())
    }

    /// Expand ~ to home directory
    fn expand_path(&self, path: &str) -> PathBuf {
        if path.starts_with("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(&path[2..]);
        }
        PathBuf::from(path)
    }

    pub fn database_path(&self) -> PathBuf {
        self.expand_path(&self.database)
    }

    /// Port from the config file, overridden by the CLI when given
    pub fn port(&self) -> Option<u16> {
        self.server.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: Config = toml::from_str(r#"database = "/tmp/melodex.db""#).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/tmp/melodex.db"));
        assert_eq!(config.port(), None);
    }

    #[test]
    fn parses_server_port() {
        let config: Config = toml::from_str(
            r#"
database = "melodex.db"

[server]
port = 8080
"#,
        )
        .unwrap();
        assert_eq!(config.port(), Some(8080));
    }
}
