mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::error::MenuError;
use crate::model::MenuGroups;
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

/// Unified trait for all menu output formats
#[async_trait]
pub trait MenuRenderer: Send + Sync {
    /// Get the renderer name (e.g., "html", "text")
    fn name(&self) -> &str;

    /// File the rendered menu is written to
    fn output_path(&self) -> &Path;

    /// Format grouped rows into the complete document
    fn format(&self, groups: &MenuGroups) -> String;

    /// Write `content` to `output_path`, replacing any existing file
    async fn persist(&self, content: &str) -> Result<(), MenuError> {
        let path = self.output_path();
        tokio::fs::write(path, content)
            .await
            .map_err(|source| MenuError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Format then persist, returning the written path
    async fn render(&self, groups: &MenuGroups) -> Result<PathBuf, MenuError> {
        let content = self.format(groups);
        self.persist(&content).await?;
        info!(
            "{} renderer wrote {} bytes to {}",
            self.name(),
            content.len(),
            self.output_path().display()
        );
        Ok(self.output_path().to_path_buf())
    }
}

/// The standard renderers for whichever outputs are set: HTML first, then text
pub fn standard_renderers(
    html_output: Option<&Path>,
    text_output: Option<&Path>,
    escape_html: bool,
) -> Vec<Box<dyn MenuRenderer>> {
    let mut renderers: Vec<Box<dyn MenuRenderer>> = Vec::new();
    if let Some(path) = html_output {
        renderers.push(Box::new(HtmlRenderer::new(path).escape(escape_html)));
    }
    if let Some(path) = text_output {
        renderers.push(Box::new(TextRenderer::new(path)));
    }
    renderers
}
