use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory
pub const CONFIG_FILE: &str = "menu-render.toml";

/// What to do with a row that has fewer than four fields
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Log a warning and leave the row out of every group
    #[default]
    Skip,
    /// Abort the run with `MenuError::MalformedRow`
    Reject,
}

/// Main menu rendering configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// CSV file to read menu rows from
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Destination of the HTML rendering
    #[serde(default = "default_html_output")]
    pub html_output: PathBuf,
    /// Destination of the plain text rendering
    #[serde(default = "default_text_output")]
    pub text_output: PathBuf,
    /// Handling of short rows
    #[serde(default)]
    pub row_policy: RowPolicy,
    /// Encode `<`, `>` and `&` in HTML output instead of inserting values verbatim
    #[serde(default)]
    pub escape_html: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            html_output: default_html_output(),
            text_output: default_text_output(),
            row_policy: RowPolicy::default(),
            escape_html: false,
        }
    }
}

// Default value functions
fn default_input() -> PathBuf {
    PathBuf::from("menu.csv")
}

fn default_html_output() -> PathBuf {
    PathBuf::from("menu.html")
}

fn default_text_output() -> PathBuf {
    PathBuf::from("menu.txt")
}

impl MenuConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MENU_RENDER__ prefix
/// 2. menu-render.toml file in current directory
/// 3. Default values
///
/// Environment variable format: MENU_RENDER__ROW_POLICY=reject
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    load_config_from(Path::new(CONFIG_FILE))
}

/// Same as [`load_config`] with an explicit settings file path
pub fn load_config_from(path: &Path) -> Result<MenuConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("MENU_RENDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
