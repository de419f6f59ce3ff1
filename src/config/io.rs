use super::models::AppConfig;
use super::tables::{ConfigTables, TABLE_NAMES};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Parse either the table layout or a flat list of keys.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let raw: toml::Table = toml::from_str(contents)?;
    let uses_tables = raw
        .iter()
        .any(|(key, value)| TABLE_NAMES.contains(&key.as_str()) && value.is_table());
    if uses_tables {
        let tables: ConfigTables = toml::from_str(contents)?;
        Ok(tables.into())
    } else {
        debug!("Config has no tables; reading flat keys");
        toml::from_str(contents)
    }
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&ConfigTables::from(config))
}
