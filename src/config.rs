use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DocketError, Result};
use crate::report::RefColumn;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for docket, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocketConfig {
    /// Default column set for the reference report (e.g. ["name", "url"])
    #[serde(default = "default_report_columns")]
    pub report_columns: Vec<String>,
}

fn default_report_columns() -> Vec<String> {
    RefColumn::ALL.iter().map(|c| c.key().to_string()).collect()
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            report_columns: default_report_columns(),
        }
    }
}

impl DocketConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path).map_err(DocketError::Io)?;
        let config: DocketConfig =
            serde_json::from_str(&content).map_err(DocketError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocketError::Io)?;
        }
        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocketError::Serialization)?;
        fs::write(config_path, content).map_err(DocketError::Io)?;
        Ok(())
    }

    /// The configured report columns, parsed; an empty list means all.
    pub fn report_columns(&self) -> Result<Vec<RefColumn>> {
        if self.report_columns.is_empty() {
            return Ok(RefColumn::ALL.to_vec());
        }
        RefColumn::parse_list(&self.report_columns.join(","))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "report-columns" => Some(self.report_columns.join(",")),
            _ => None,
        }
    }

    /// Set a key; values are validated before they are stored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "report-columns" => {
                let columns = RefColumn::parse_list(value)?;
                self.report_columns = columns.iter().map(|c| c.key().to_string()).collect();
                Ok(())
            }
            _ => Err(DocketError::Api(format!("Unknown config key: {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocketConfig::default();
        assert_eq!(
            config.report_columns,
            vec!["name", "url", "profile", "collection", "product-id"]
        );
    }

    #[test]
    fn test_set_validates_columns() {
        let mut config = DocketConfig::default();
        config.set("report-columns", "name, url").unwrap();
        assert_eq!(config.get("report-columns").unwrap(), "name,url");
        assert!(config.set("report-columns", "name, size").is_err());
        assert!(config.set("theme", "dark").is_err());
    }

    #[test]
    fn test_report_columns_parse_back() {
        let mut config = DocketConfig::default();
        config.set("report-columns", "url,name").unwrap();
        assert_eq!(
            config.report_columns().unwrap(),
            vec![RefColumn::Url, RefColumn::Name]
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DocketConfig::default();
        config.set("report-columns", "name").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = DocketConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DocketConfig::load(dir.path().join("none")).unwrap();
        assert_eq!(config, DocketConfig::default());
    }

    #[test]
    fn test_forward_compatible_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"reportColumns": null, "report_columns": ["url"]}"#,
        )
        .unwrap();
        let config = DocketConfig::load(dir.path()).unwrap();
        assert_eq!(config.report_columns, vec!["url"]);
    }
}
