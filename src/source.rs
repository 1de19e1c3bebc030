use crate::config::RowPolicy;
use crate::error::MenuError;
use crate::grouping::{group_lines, Grouping};
use log::info;
use std::path::Path;

/// Raw menu rows, loaded once and shared read-only with every renderer
#[derive(Debug, Clone, Default)]
pub struct MenuSource {
    lines: Vec<String>,
}

impl MenuSource {
    /// Read the whole file and split it into lines.
    ///
    /// Both `\n` and `\r\n` end a line; a trailing separator does not add an
    /// empty record.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| MenuError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let source = Self::from_text(&data);
        info!("Loaded {} lines from {}", source.lines.len(), path.display());
        Ok(source)
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn group(&self, policy: RowPolicy) -> Result<Grouping, MenuError> {
        group_lines(self.lines.iter().map(String::as_str), policy)
    }
}
