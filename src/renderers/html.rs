use super::MenuRenderer;
use crate::model::MenuGroups;
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Renders one `<table>` per meal group.
///
/// The output is a fragment: no `<html>` or `<body>` wrapper and no styling.
/// Values are inserted verbatim unless escaping is switched on.
pub struct HtmlRenderer {
    output_path: PathBuf,
    escape: bool,
}

impl HtmlRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            escape: false,
        }
    }

    /// Encode `<`, `>` and `&` in cell text
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    fn cell<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            html_escape::encode_text(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[async_trait]
impl MenuRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn format(&self, groups: &MenuGroups) -> String {
        let mut html = String::new();

        for group in groups {
            html.push_str("<table border='1'>\n");
            html.push_str("  <tr>\n");
            html.push_str(&format!(
                "    <th scope='col'>{}</th>\n",
                self.cell(&group.title())
            ));
            html.push_str("  </tr>\n");

            for line in &group.lines {
                html.push_str("  <tr>\n");
                html.push_str(&format!("    <td>{}</td>\n", self.cell(&line.entry_text())));
                html.push_str("  </tr>\n");
            }

            html.push_str("</table>\n");
        }

        html
    }
}
