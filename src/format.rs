// Grouping and rendering of the shopping list.
// Active tasks are bucketed by the name of their section and rendered as a
// plain-text block meant for pasting into a chat message. Every ordering is
// byte-wise on the UTF-8 strings, which equals code-point order; no locale
// collation is applied and duplicate items are kept.

use crate::api::Task;
use std::collections::{BTreeMap, HashMap};

pub const HEADER: &str = "🛒 *Einkaufsliste*";
pub const EMPTY_NOTICE: &str = "✅ Liste ist leer — nichts zu kaufen!";

/// Label of the pseudo-group for tasks without a (known) section.
const UNSECTIONED: &str = "";

/// Item contents keyed by section name. The empty label holds the
/// unsectioned items; a label is created on its first item.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedList {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group the unchecked tasks by resolving `section_id` through
    /// `sections`. Missing or unknown ids fall into the unsectioned group.
    pub fn group(tasks: &[Task], sections: &HashMap<String, String>) -> Self {
        let mut list = Self::new();
        for task in tasks.iter().filter(|t| !t.checked) {
            let label = task
                .section_id
                .as_ref()
                .and_then(|id| sections.get(id))
                .map(String::as_str)
                .unwrap_or(UNSECTIONED);
            list.push(label, &task.content);
        }
        list
    }

    pub fn push(&mut self, label: &str, content: &str) {
        self.groups
            .entry(label.to_string())
            .or_default()
            .push(content.to_string());
    }

    /// Unsectioned items in sorted order.
    pub fn unsectioned(&self) -> Vec<&str> {
        self.groups
            .get(UNSECTIONED)
            .map(|items| sorted(items))
            .unwrap_or_default()
    }

    /// Sectioned groups, ordered by name, each with its items sorted.
    pub fn sections(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.groups
            .iter()
            .filter(|(label, _)| !label.is_empty())
            .map(|(label, items)| (label.as_str(), sorted(items)))
    }

    pub fn has_sections(&self) -> bool {
        self.groups.keys().any(|label| !label.is_empty())
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

fn sorted(items: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = items.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}

/// Render the grouped list. Unsectioned items come first, then one block
/// per section; trailing whitespace of the whole text is stripped.
pub fn render(list: &GroupedList) -> String {
    let mut lines: Vec<String> = vec![HEADER.to_string(), String::new()];

    let loose = list.unsectioned();
    if !loose.is_empty() {
        lines.extend(loose.iter().map(|item| format!("• {}", item)));
        if list.has_sections() {
            lines.push(String::new());
        }
    }

    for (name, items) in list.sections() {
        lines.push(format!("📦 *{}*", name));
        lines.extend(items.iter().map(|item| format!("  • {}", item)));
        lines.push(String::new());
    }

    if list.is_empty() {
        lines.push(EMPTY_NOTICE.to_string());
    }

    lines.join("\n").trim_end().to_string()
}

/// Group `tasks` by section and render them in one go.
pub fn format_shopping_list(tasks: &[Task], sections: &HashMap<String, String>) -> String {
    render(&GroupedList::group(tasks, sections))
}
