use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("tab '{0}' not found")]
    TabNotFound(String),

    #[error("tab '{0}' already exists")]
    TabExists(String),

    #[error("tab '{0}' is protected and cannot be renamed or deleted")]
    ProtectedTab(String),

    #[error("tab '{0}' has no tasks; empty tabs are not stored")]
    EmptyTab(String),

    #[error("invalid tab name '{0}': {1}")]
    InvalidTabName(String, String),

    #[error("task {1} not found in tab '{0}'")]
    TaskNotFound(String, usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TabNotFound(_) => "tab_not_found",
            Self::TabExists(_) => "tab_exists",
            Self::ProtectedTab(_) => "protected_tab",
            Self::EmptyTab(_) => "empty_tab",
            Self::InvalidTabName(_, _) => "invalid_tab_name",
            Self::TaskNotFound(_, _) => "task_not_found",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
