use super::ScreenId;
use serde::{Deserialize, Serialize};

/// Direction of the most recent transition. Presentation hint only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    Forward,
    Backward,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSummary {
    pub id: ScreenId,
    pub title: String,
}

/// Owned copy of the read model, without payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSnapshot {
    pub screens: Vec<ScreenSummary>,
    pub current_index: Option<usize>,
    pub is_open: bool,
    pub direction: NavigationDirection,
}

impl StackSnapshot {
    pub fn current(&self) -> Option<&ScreenSummary> {
        self.current_index.and_then(|i| self.screens.get(i))
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.is_some_and(|i| i > 0)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.screens.iter().map(|s| s.id.as_str()).collect()
    }
}
