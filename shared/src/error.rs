use crate::stack::ScreenId;

/// Navigation requests the stack refused. State is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// Mutation attempted while the stack is closed. Use `open_screen` first.
    #[error("screen stack is closed")]
    Closed,

    #[error("screen id `{0}` is already on the stack")]
    DuplicateId(ScreenId),

    /// `reopen` found no retained history to resume.
    #[error("no retained history to resume")]
    NothingToResume,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value `{value}` for {var}")]
    InvalidValue { var: &'static str, value: String },
}
