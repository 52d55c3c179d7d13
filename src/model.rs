use chrono::NaiveDate;
use serde::Serialize;

/// Title given to tasks created with a blank title.
pub const DEFAULT_TITLE: &str = "New Task";

/// Format of a due date in storage and on the command line.
pub const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Task priority. Stored as free text: anything other than the three exact
/// names is kept verbatim so it survives a save/load cycle unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Other(raw) => raw,
        }
    }

    /// Short list marker. High and Medium are matched case-insensitively;
    /// everything else, including unrecognized text, is shown as low.
    pub fn marker(&self) -> &'static str {
        let raw = self.as_str();
        if raw.eq_ignore_ascii_case("high") {
            "[H]"
        } else if raw.eq_ignore_ascii_case("medium") {
            "[M]"
        } else {
            "[L]"
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Kind-specific payload. Held in memory only; the line format has no field
/// for it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    #[default]
    Standard,
    Work {
        project: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    None,
    Overdue(NaiveDate),
    Today,
    Upcoming(NaiveDate),
    Unparseable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    title: String,
    description: String,
    due_date: Option<String>,
    priority: Priority,
    completed: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

/// Collapse every spelling of "no due date" (missing, blank, `null` in any
/// case) to `None`. Other text is kept as given.
pub fn normalize_due_date(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(raw.to_string())
    }
}

fn normalize_title(raw: &str) -> String {
    if raw.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        raw.to_string()
    }
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: Option<&str>, priority: &str) -> Self {
        Self {
            title: normalize_title(title),
            description: description.to_string(),
            due_date: normalize_due_date(due_date),
            priority: Priority::parse(priority),
            completed: false,
            kind: TaskKind::Standard,
        }
    }

    pub fn work(
        title: &str,
        description: &str,
        due_date: Option<&str>,
        priority: &str,
        project: &str,
    ) -> Self {
        Self {
            kind: TaskKind::Work {
                project: project.to_string(),
            },
            ..Self::new(title, description, due_date, priority)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn set_due_date(&mut self, due_date: Option<&str>) {
        self.due_date = normalize_due_date(due_date);
    }

    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn set_priority(&mut self, priority: &str) {
        self.priority = Priority::parse(priority);
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn project(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Work { project } => Some(project),
            TaskKind::Standard => None,
        }
    }

    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        let raw = self.due_date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT).ok()
    }

    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        if !self.has_due_date() {
            return DueStatus::None;
        }
        match self.due_date_parsed() {
            None => DueStatus::Unparseable,
            Some(date) if date < today => DueStatus::Overdue(date),
            Some(date) if date == today => DueStatus::Today,
            Some(date) => DueStatus::Upcoming(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_task_starts_incomplete_and_standard() {
        let task = Task::new("Write report", "quarterly", Some("01/15/2026"), "High");
        assert_eq!(task.title(), "Write report");
        assert_eq!(task.description(), "quarterly");
        assert_eq!(task.due_date(), Some("01/15/2026"));
        assert_eq!(task.priority(), &Priority::High);
        assert!(!task.is_completed());
        assert_eq!(task.kind(), &TaskKind::Standard);
    }

    #[test]
    fn blank_title_defaults() {
        assert_eq!(Task::new("", "", None, "Low").title(), DEFAULT_TITLE);
        assert_eq!(Task::new("   ", "", None, "Low").title(), DEFAULT_TITLE);

        let mut task = Task::new("Named", "", None, "Low");
        task.set_title(" ");
        assert_eq!(task.title(), DEFAULT_TITLE);
    }

    #[test]
    fn absent_due_date_spellings_normalize_to_none() {
        for raw in [None, Some(""), Some("  "), Some("null"), Some("NULL"), Some("Null")] {
            let task = Task::new("t", "", raw, "Low");
            assert!(!task.has_due_date(), "{raw:?} should mean no due date");
            assert_eq!(task.due_date(), None);
        }
    }

    #[test]
    fn unrecognized_priority_passes_through() {
        let task = Task::new("t", "", None, "urgent!!");
        assert_eq!(task.priority(), &Priority::Other("urgent!!".into()));
        assert_eq!(task.priority().to_string(), "urgent!!");

        // Case matters for storage, not for the marker.
        let lower = Priority::parse("high");
        assert_eq!(lower, Priority::Other("high".into()));
        assert_eq!(lower.marker(), "[H]");
        assert_eq!(Priority::parse("whatever").marker(), "[L]");
    }

    #[test]
    fn due_status_classifies_relative_to_today() {
        let today = date(2026, 3, 10);
        let at = |raw: Option<&str>| Task::new("t", "", raw, "Low").due_status(today);

        assert_eq!(at(None), DueStatus::None);
        assert_eq!(at(Some("03/09/2026")), DueStatus::Overdue(date(2026, 3, 9)));
        assert_eq!(at(Some("03/10/2026")), DueStatus::Today);
        assert_eq!(at(Some("12/25/2026")), DueStatus::Upcoming(date(2026, 12, 25)));
        assert_eq!(at(Some("2026-03-10")), DueStatus::Unparseable);
    }

    #[test]
    fn work_task_carries_project() {
        let task = Task::work("Ship v1", "", None, "High", "Apollo");
        assert_eq!(task.project(), Some("Apollo"));
        assert_eq!(Task::new("x", "", None, "Low").project(), None);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["kind"], "work");
        assert_eq!(json["project"], "Apollo");
        assert_eq!(json["priority"], "High");
        assert_eq!(json["due_date"], serde_json::Value::Null);
    }
}
