use std::path::PathBuf;

use log::info;

use crate::{
    renderers::{standard_renderers, MenuRenderer},
    MenuConfig, MenuError, MenuSource, RowPolicy,
};

/// Represents the input source for a menu
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Read rows from a CSV file
    File(PathBuf),
    /// Use CSV content already in memory
    Text(String),
}

/// Outcome of a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuReport {
    /// Number of distinct meal types
    pub group_count: usize,
    /// Rows placed into groups
    pub row_count: usize,
    /// 1-based line numbers of short rows that were skipped
    pub skipped_rows: Vec<usize>,
    /// Files written, in renderer order
    pub written: Vec<PathBuf>,
}

/// Builder for configuring and executing menu conversions
#[derive(Default)]
pub struct MenuConverterBuilder {
    source: Option<InputSource>,
    renderers: Vec<Box<dyn MenuRenderer>>,
    html_output: Option<PathBuf>,
    text_output: Option<PathBuf>,
    row_policy: RowPolicy,
    escape_html: bool,
}

impl MenuConverterBuilder {
    /// Start from a loaded configuration: its input file, both standard
    /// outputs, row policy and escaping flag.
    pub fn from_config(config: &MenuConfig) -> Self {
        Self::default()
            .file(&config.input)
            .html_output(&config.html_output)
            .text_output(&config.text_output)
            .row_policy(config.row_policy)
            .escape_html(config.escape_html)
    }

    /// Set the input source to a CSV file
    ///
    /// # Example
    /// ```
    /// use menu_render::MenuConverter;
    ///
    /// let builder = MenuConverter::builder()
    ///     .file("menu.csv");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Set the input source to CSV text
    ///
    /// # Example
    /// ```
    /// use menu_render::MenuConverter;
    ///
    /// let builder = MenuConverter::builder()
    ///     .text("Breakfast,Dairy,7am,Yogurt\nLunch,Meat,12pm,Sandwich");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Write an HTML rendering to `path`
    pub fn html_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_output = Some(path.into());
        self
    }

    /// Write a plain text rendering to `path`
    pub fn text_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_output = Some(path.into());
        self
    }

    /// Add a custom renderer; it runs after the HTML and text outputs
    pub fn renderer(mut self, renderer: Box<dyn MenuRenderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    /// Choose how rows with fewer than four fields are handled
    ///
    /// # Example
    /// ```
    /// use menu_render::{MenuConverter, RowPolicy};
    ///
    /// let builder = MenuConverter::builder()
    ///     .file("menu.csv")
    ///     .row_policy(RowPolicy::Reject);
    /// ```
    pub fn row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Encode `<`, `>` and `&` in the HTML output
    pub fn escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Build and execute the conversion
    ///
    /// The source is loaded and grouped once, then every renderer runs in
    /// order. Nothing is written if loading or grouping fails; if a later
    /// renderer fails, files written by earlier ones stay on disk.
    ///
    /// # Errors
    /// Returns `MenuError` if:
    /// - No input source or no output was specified
    /// - The input file cannot be read
    /// - A short row is found under `RowPolicy::Reject`
    /// - An output file cannot be written
    ///
    /// # Example
    /// ```no_run
    /// # use menu_render::MenuConverter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = MenuConverter::builder()
    ///     .file("menu.csv")
    ///     .html_output("menu.html")
    ///     .text_output("menu.txt")
    ///     .build()
    ///     .await?;
    /// println!("{} meal types", report.group_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<MenuReport, MenuError> {
        let source = self.source.ok_or_else(|| {
            MenuError::BuilderError("No input source specified. Use .file() or .text()".to_string())
        })?;

        let mut renderers = standard_renderers(
            self.html_output.as_deref(),
            self.text_output.as_deref(),
            self.escape_html,
        );
        renderers.extend(self.renderers);

        if renderers.is_empty() {
            return Err(MenuError::BuilderError(
                "No output specified. Use .html_output(), .text_output() or .renderer()"
                    .to_string(),
            ));
        }

        let menu = match source {
            InputSource::File(path) => MenuSource::load(path).await?,
            InputSource::Text(text) => MenuSource::from_text(&text),
        };

        let grouping = menu.group(self.row_policy)?;
        let mut report = MenuReport {
            group_count: grouping.groups.len(),
            row_count: grouping.groups.row_count(),
            skipped_rows: grouping.skipped_rows,
            written: Vec::with_capacity(renderers.len()),
        };

        for renderer in &renderers {
            let path = renderer.render(&grouping.groups).await?;
            report.written.push(path);
        }

        info!(
            "Rendered {} meal type(s), {} row(s) into {} file(s)",
            report.group_count,
            report.row_count,
            report.written.len()
        );
        Ok(report)
    }
}

/// Main entry point for the builder API
pub struct MenuConverter;

impl MenuConverter {
    /// Creates a new builder for converting menus
    ///
    /// # Example
    /// ```
    /// use menu_render::MenuConverter;
    ///
    /// let builder = MenuConverter::builder();
    /// ```
    pub fn builder() -> MenuConverterBuilder {
        MenuConverterBuilder::default()
    }
}
