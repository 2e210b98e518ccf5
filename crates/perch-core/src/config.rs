//! Configuration management for perch.
//!
//! Loads configuration from ${PERCH_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    // Parse the template as the base
    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    // Parse user's existing config
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    // Overlay user values onto template
    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                // Scalar value: override in target
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                // Nested table: recursively merge
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    // Target doesn't have this table, copy it
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                // Array of tables: replace entirely with user's version
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for perch configuration and data directories.
    //!
    //! PERCH_HOME resolution order:
    //! 1. PERCH_HOME environment variable (if set)
    //! 2. ~/.config/perch (default)

    use std::path::PathBuf;

    /// Returns the perch home directory.
    ///
    /// Checks PERCH_HOME env var first, falls back to ~/.config/perch
    pub fn perch_home() -> PathBuf {
        if let Ok(home) = std::env::var("PERCH_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("perch"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        perch_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        perch_home().join("session.json")
    }

    /// Returns the directory file logs are written to.
    pub fn logs_dir() -> PathBuf {
        perch_home().join("logs")
    }
}

/// Backend service endpoints and project identity.
///
/// Both URLs are overridable so tests (and self-hosted deployments) can
/// point the client at a different host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project API key sent with identity requests.
    pub api_key: String,
    /// Backend project identifier (scopes the document store).
    pub project_id: String,
    /// Identity service base URL (sign-in / sign-up).
    pub identity_url: String,
    /// Document store base URL (post feed).
    pub data_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            identity_url: "https://identitytoolkit.googleapis.com".to_string(),
            data_url: "https://firestore.googleapis.com".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clear form fields after every submit attempt, valid or not.
    ///
    /// The historical behavior discards user input even when client-side
    /// validation fails; set to false to keep the typed values in place.
    pub clear_fields_on_submit: bool,

    /// Default log filter for file logs (RUST_LOG overrides this).
    pub log_filter: String,

    /// Backend endpoints and project identity.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_fields_on_submit: true,
            log_filter: "info".to_string(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the config template to `path`.
    ///
    /// If the file already exists, user values are merged into the latest
    /// template so new sections and comments show up without losing edits.
    pub fn init_at(path: &Path) -> Result<()> {
        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Validates backend endpoints before anything tries to use them.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.backend.identity_url).with_context(|| {
            format!("Invalid identity_url: {}", self.backend.identity_url)
        })?;
        url::Url::parse(&self.backend.data_url)
            .with_context(|| format!("Invalid data_url: {}", self.backend.data_url))?;
        Ok(())
    }
}
