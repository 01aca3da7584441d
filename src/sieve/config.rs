use crate::attributes::AttrFilter;
use crate::error::{Result, SieveError};
use crate::query::MatchMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SIEVE_CONFIG_DIR";

/// How matches are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name> is <size> and <color> ` lines
    #[default]
    Text,
    /// A pretty-printed JSON array of products
    Json,
}

/// Configuration for sieve, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SieveConfig {
    /// Catalog file to read instead of the built-in sample
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default criteria as attribute name -> value, used when no criterion
    /// flag is given on the command line
    #[serde(default = "default_criteria")]
    pub criteria: BTreeMap<String, String>,

    /// How criteria are combined
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_criteria() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("color".to_string(), "black".to_string()),
        ("size".to_string(), "small".to_string()),
    ])
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            criteria: default_criteria(),
            match_mode: MatchMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl SieveConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// A relative `catalog` path is taken relative to `config_dir`.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SieveError::Io)?;
        let mut config: SieveConfig =
            serde_json::from_str(&content).map_err(SieveError::Serialization)?;
        if let Some(catalog) = config.catalog.take() {
            config.catalog = Some(if catalog.is_relative() {
                config_dir.join(catalog)
            } else {
                catalog
            });
        }
        Ok(config)
    }

    /// Save config to the given directory
    #[cfg(test)]
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SieveError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SieveError::Serialization)?;
        fs::write(config_path, content).map_err(SieveError::Io)?;
        Ok(())
    }

    /// Validate the configured criteria, in attribute name order.
    pub fn criteria_filters(&self) -> Result<Vec<AttrFilter>> {
        self.criteria
            .iter()
            .map(|(attr, value)| AttrFilter::eq(attr, value))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| SieveError::Config(format!("invalid criteria: {}", e)))
    }
}

/// The directory config is read from: `$SIEVE_CONFIG_DIR` if set, else the
/// platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "sieve", "sieve").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SieveConfig::default();
        assert_eq!(config.catalog, None);
        assert_eq!(config.criteria.get("color").map(String::as_str), Some("black"));
        assert_eq!(config.criteria.get("size").map(String::as_str), Some("small"));
        assert_eq!(config.match_mode, MatchMode::All);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = SieveConfig::load(temp.path()).unwrap();
        assert_eq!(config, SieveConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = SieveConfig::default();
        config.format = OutputFormat::Json;
        config.match_mode = MatchMode::Any;
        config.criteria = BTreeMap::from([("name".to_string(), "Tiger".to_string())]);
        config.save(&dir).unwrap();

        let loaded = SieveConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_relative_catalog_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"catalog": "catalog.json"}"#,
        )
        .unwrap();

        let config = SieveConfig::load(temp.path()).unwrap();
        assert_eq!(config.catalog, Some(temp.path().join("catalog.json")));
    }

    #[test]
    fn test_absolute_catalog_is_kept() {
        let temp = TempDir::new().unwrap();
        let absolute = temp.path().join("elsewhere").join("catalog.json");
        let config = SieveConfig {
            catalog: Some(absolute.clone()),
            ..SieveConfig::default()
        };
        config.save(temp.path()).unwrap();

        let loaded = SieveConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.catalog, Some(absolute));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"format": "json"}"#).unwrap();

        let config = SieveConfig::load(temp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.criteria, default_criteria());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{not json").unwrap();

        assert!(matches!(
            SieveConfig::load(temp.path()),
            Err(SieveError::Serialization(_))
        ));
    }

    #[test]
    fn test_criteria_filters_in_name_order() {
        let filters = SieveConfig::default().criteria_filters().unwrap();
        let rendered: Vec<String> = filters.iter().map(|f| f.to_string()).collect();
        assert_eq!(rendered, vec!["color=black", "size=small"]);
    }

    #[test]
    fn test_invalid_criteria_is_config_error() {
        let mut config = SieveConfig::default();
        config.criteria.insert("weight".into(), "heavy".into());

        let err = config.criteria_filters().unwrap_err();
        assert!(matches!(err, SieveError::Config(_)));
        assert!(err.to_string().contains("Unknown attribute: weight"));
    }
}
