pub mod builder;
pub mod config;
pub mod error;
pub mod grouping;
pub mod model;
pub mod renderers;
pub mod source;

pub use builder::{InputSource, MenuConverter, MenuConverterBuilder, MenuReport};
pub use config::{load_config, load_config_from, MenuConfig, RowPolicy};
pub use error::MenuError;
pub use grouping::{group_lines, Grouping};
pub use model::{MealGroup, MenuGroups, MenuLine};
pub use renderers::{standard_renderers, HtmlRenderer, MenuRenderer, TextRenderer};
pub use source::MenuSource;

/// Convert the configured menu into both standard outputs.
///
/// Loads `config.input` once, groups it once and writes the HTML rendering
/// followed by the text rendering.
pub async fn convert_menu(config: &MenuConfig) -> Result<MenuReport, MenuError> {
    MenuConverterBuilder::from_config(config).build().await
}
