use crate::config::RowPolicy;
use crate::error::MenuError;
use crate::model::{MenuGroups, MenuLine};
use log::{debug, warn};

/// Result of a grouping pass
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    pub groups: MenuGroups,
    /// 1-based line numbers of short rows left out under `RowPolicy::Skip`
    pub skipped_rows: Vec<usize>,
}

/// Partition lines into meal groups in a single pass.
///
/// Groups keep the order in which their meal type first appears and rows keep
/// their source order within a group. Blank lines are dropped. Short rows are
/// handled according to `policy`.
pub fn group_lines<'a, I>(lines: I, policy: RowPolicy) -> Result<Grouping, MenuError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouping = Grouping::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            debug!("Skipping blank line {}", line_number);
            continue;
        }

        match MenuLine::parse(line, line_number) {
            Ok(menu_line) => grouping.groups.push(menu_line),
            Err(err @ MenuError::MalformedRow { .. }) if policy == RowPolicy::Skip => {
                warn!("{}; skipping", err);
                grouping.skipped_rows.push(line_number);
            }
            Err(err) => return Err(err),
        }
    }

    for group in &grouping.groups {
        debug!("Group {:?}: {} item(s)", group.meal_type, group.lines.len());
    }

    Ok(grouping)
}
