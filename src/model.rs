use crate::error::MenuError;
use std::collections::HashMap;

/// Fields a row needs: meal type, category, detail and item name
pub const REQUIRED_FIELDS: usize = 4;

/// One menu row: `mealType,category,detail,itemName`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    /// Grouping key, kept verbatim (not trimmed)
    pub meal_type: String,
    /// First descriptive attribute, e.g. "Dairy"
    pub category: String,
    /// Second descriptive attribute, e.g. a price or a serving time
    pub detail: String,
    pub item_name: String,
}

impl MenuLine {
    /// Split a raw line on commas. There is no quoting support, so a comma
    /// inside a value shifts every following field.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, MenuError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(MenuError::MalformedRow {
                line_number,
                line: line.to_string(),
                fields: fields.len(),
            });
        }

        Ok(Self {
            meal_type: fields[0].to_string(),
            category: fields[1].to_string(),
            detail: fields[2].to_string(),
            item_name: fields[3].to_string(),
        })
    }

    /// Display text shared by every output format: item name first, then the
    /// two attributes in source order.
    pub fn entry_text(&self) -> String {
        format!("{}, {}, {}", self.item_name, self.category, self.detail)
    }
}

/// All rows sharing one meal type, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealGroup {
    pub meal_type: String,
    pub lines: Vec<MenuLine>,
}

impl MealGroup {
    pub fn new(meal_type: impl Into<String>) -> Self {
        Self {
            meal_type: meal_type.into(),
            lines: Vec::new(),
        }
    }

    /// Section title, taken from the first row's meal type.
    pub fn title(&self) -> String {
        let meal_type = self
            .lines
            .first()
            .map(|line| line.meal_type.as_str())
            .unwrap_or(&self.meal_type);
        format!("{} Items", meal_type)
    }
}

/// Meal groups ordered by the first appearance of their meal type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuGroups {
    groups: Vec<MealGroup>,
    index: HashMap<String, usize>,
}

impl MenuGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to its group, opening a new group at the end if the meal
    /// type has not been seen yet.
    pub fn push(&mut self, line: MenuLine) {
        match self.index.get(&line.meal_type) {
            Some(&position) => self.groups[position].lines.push(line),
            None => {
                self.index.insert(line.meal_type.clone(), self.groups.len());
                let mut group = MealGroup::new(line.meal_type.clone());
                group.lines.push(line);
                self.groups.push(group);
            }
        }
    }

    pub fn get(&self, meal_type: &str) -> Option<&MealGroup> {
        self.index
            .get(meal_type)
            .map(|&position| &self.groups[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MealGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|group| group.lines.len()).sum()
    }
}

impl<'a> IntoIterator for &'a MenuGroups {
    type Item = &'a MealGroup;
    type IntoIter = std::slice::Iter<'a, MealGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
