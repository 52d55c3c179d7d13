//! Line format for the task file.
//!
//! Canonical shape, one task per line:
//!
//! ```text
//! <tab>|<title>,<description>,<due date>,<priority>,<completed>
//! ```
//!
//! Fields are not escaped. A line whose record does not split into exactly
//! five comma-separated fields is rejected, which is how rows corrupted by a
//! stray comma get dropped. The legacy flat shape is the bare record with no
//! tab prefix.

use crate::model::Task;

pub const TAB_SEPARATOR: char = '|';
pub const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 5;

/// `true` in any letter case; every other value is `false`.
pub fn parse_completed(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

pub fn encode_record(task: &Task) -> String {
    format!(
        "{title}{sep}{description}{sep}{due}{sep}{priority}{sep}{completed}",
        sep = FIELD_SEPARATOR,
        title = task.title(),
        description = task.description(),
        due = task.due_date().unwrap_or(""),
        priority = task.priority(),
        completed = task.is_completed(),
    )
}

pub fn encode_line(tab: &str, task: &Task) -> String {
    format!("{tab}{TAB_SEPARATOR}{}", encode_record(task))
}

pub fn decode_record(record: &str) -> Option<Task> {
    // Trailing empty fields count toward the five: `t,d,,Low,` is a full
    // record with an empty completed flag.
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    let [title, description, due, priority, completed] = fields[..] else {
        return None;
    };
    let mut task = Task::new(title, description, Some(due), priority);
    task.set_completed(parse_completed(completed));
    Some(task)
}

/// Decode a canonical line. Only the first `|` splits; later ones belong to
/// the record.
pub fn decode_line(line: &str) -> Option<(String, Task)> {
    let (tab, record) = line.split_once(TAB_SEPARATOR)?;
    let task = decode_record(record)?;
    Some((tab.to_string(), task))
}

/// Whether `task` would come back unchanged from `encode_line(tab, task)`.
pub fn is_lossless(tab: &str, task: &Task) -> bool {
    let clean = |s: &str| !s.contains([FIELD_SEPARATOR, '\n', '\r']);
    !tab.contains([TAB_SEPARATOR, '\n', '\r'])
        && clean(task.title())
        && clean(task.description())
        && task.due_date().is_none_or(clean)
        && clean(task.priority().as_str())
}
