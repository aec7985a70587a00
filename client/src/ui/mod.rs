pub mod chrome;
pub mod context;
pub mod layout;
pub mod screens;
pub mod style;
pub mod widget;

// Re-export the core UI pieces for ergonomic imports:
pub use chrome::{CHROME_HEIGHT, chrome};
pub use context::{DrawCmd, UiContext};
pub use layout::{HBox, VBox};
pub use widget::{Button, Card, Label, Toggle, UiResponse, Widget};
// screens:
pub use screens::{PanelView, launcher, panel_ui};
