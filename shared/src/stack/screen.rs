use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a screen, unique within a stack at any one time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        ScreenId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        ScreenId(id.to_string())
    }
}

impl From<String> for ScreenId {
    fn from(id: String) -> Self {
        ScreenId(id)
    }
}

impl PartialEq<str> for ScreenId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScreenId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One navigable unit of content. Immutable once built: to change what is
/// shown at a position, push a new screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen<P> {
    id: ScreenId,
    title: String,
    payload: P,
}

impl<P> Screen<P> {
    pub fn new(id: impl Into<ScreenId>, title: impl Into<String>, payload: P) -> Self {
        Screen {
            id: id.into(),
            title: title.into(),
            payload,
        }
    }

    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Take the payload back, e.g. after the screen has been discarded.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl Screen<()> {
    /// A screen with no payload, handy for hosts that key content off the id.
    pub fn bare(id: impl Into<ScreenId>, title: impl Into<String>) -> Self {
        Screen::new(id, title, ())
    }
}
