use super::MenuRenderer;
use crate::model::MenuGroups;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Renders each meal group as a `* Breakfast Items *` section.
/// Sections are separated by a blank line.
pub struct TextRenderer {
    output_path: PathBuf,
}

impl TextRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

#[async_trait]
impl MenuRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn format(&self, groups: &MenuGroups) -> String {
        let sections: Vec<String> = groups
            .iter()
            .map(|group| {
                let mut section = format!("* {} *\n", group.title());
                for line in &group.lines {
                    section.push_str(&line.entry_text());
                    section.push('\n');
                }
                section
            })
            .collect();

        sections.join("\n")
    }
}
