use crate::adapters::FileTitleSource;
use crate::core::catalog::{MatchPolicy, TitleCatalog};
use crate::domain::model::Bookstore;
use crate::utils::error::{BookstoreError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_SQUARE_FEET: u32 = 10_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub name: String,
    pub address: Option<String>,
    pub square_feet: Option<u32>,
    pub used_books: Option<bool>,
    pub open: Option<bool>,
    pub close_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub titles_path: Option<String>,
    pub case_sensitive: Option<bool>,
}

impl StoreConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookstoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookstoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TITLES_PATH})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookstoreError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("store.name", &self.store.name)?;

        let titles_path =
            validation::validate_required_field("catalog.titles_path", &self.catalog.titles_path)?;
        validation::validate_path("catalog.titles_path", titles_path)?;

        if let Some(square_feet) = self.store.square_feet {
            validation::validate_range("store.square_feet", square_feet, 0, MAX_SQUARE_FEET)?;
        }

        Ok(())
    }

    pub fn titles_path(&self) -> Option<&str> {
        self.catalog.titles_path.as_deref()
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::from_case_sensitive(self.catalog.case_sensitive.unwrap_or(true))
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl Bookstore {
    /// Builds a fully populated store. A missing `titles_path` yields an empty
    /// catalog; an unreadable one degrades the same way.
    pub fn from_config(config: &StoreConfig) -> Self {
        let policy = config.match_policy();
        let catalog = match config.titles_path() {
            Some(path) => {
                let mut source = FileTitleSource::new(path);
                TitleCatalog::load_with_policy(&mut source, policy)
            }
            None => {
                tracing::warn!("No catalog.titles_path configured, starting with an empty catalog");
                TitleCatalog::default().with_match_policy(policy)
            }
        };

        let section = &config.store;
        let mut store =
            Bookstore::with_catalog(&section.name, section.open.unwrap_or(false), catalog);
        if let Some(address) = &section.address {
            store.set_address(address);
        }
        if let Some(square_feet) = section.square_feet {
            store.set_square_feet(square_feet);
        }
        if let Some(used_books) = section.used_books {
            store.set_used_books(used_books);
        }
        if let Some(close_time) = &section.close_time {
            store.set_close_time(close_time);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[store]
name = "Tor Books"
address = "222 S. Elm St., Greensboro, NC 27401"
square_feet = 1000
open = true
close_time = "Never. We're open 24 hours!"

[catalog]
titles_path = "titles.txt"
case_sensitive = false
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store.name, "Tor Books");
        assert_eq!(config.store.square_feet, Some(1000));
        assert_eq!(config.store.used_books, None);
        assert_eq!(config.titles_path(), Some("titles.txt"));
        assert_eq!(config.match_policy(), MatchPolicy::CaseInsensitive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOKSTORE_TEST_TITLES", "/srv/titles.txt");

        let toml_content = r#"
[store]
name = "Tor Books"

[catalog]
titles_path = "${BOOKSTORE_TEST_TITLES}"
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.titles_path(), Some("/srv/titles.txt"));

        std::env::remove_var("BOOKSTORE_TEST_TITLES");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
[store]
name = "${BOOKSTORE_TEST_UNSET_NAME}"

[catalog]
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store.name, "${BOOKSTORE_TEST_UNSET_NAME}");
    }

    #[test]
    fn test_config_validation() {
        let blank_name = r#"
[store]
name = "  "

[catalog]
titles_path = "titles.txt"
"#;
        assert!(StoreConfig::from_toml_str(blank_name).unwrap().validate().is_err());

        let no_titles = r#"
[store]
name = "Tor Books"

[catalog]
"#;
        let err = StoreConfig::from_toml_str(no_titles).unwrap().validate().unwrap_err();
        assert!(matches!(err, BookstoreError::MissingConfigError { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StoreConfig::from_toml_str("[store\nname = 1").unwrap_err();
        assert!(matches!(err, BookstoreError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\nname = \"File Books\"\n\n[catalog]\ntitles_path = \"t.txt\"\n")
            .unwrap();

        let config = StoreConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store.name, "File Books");
        assert_eq!(config.match_policy(), MatchPolicy::CaseSensitive);
    }

    #[test]
    fn test_store_from_config_with_unreadable_titles() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let toml_content = format!(
            "[store]\nname = \"Tor Books\"\nsquare_feet = 1000\nopen = true\n\n[catalog]\ntitles_path = \"{}\"\n",
            missing.display().to_string().replace('\\', "/")
        );

        let config = StoreConfig::from_toml_str(&toml_content).unwrap();
        let store = Bookstore::from_config(&config);

        assert_eq!(store.store_name(), "Tor Books");
        assert_eq!(store.square_feet(), 1000);
        assert!(store.is_open());
        assert_eq!(store.title_count(), 0);
        assert!(store.catalog().is_degraded());
    }
}
