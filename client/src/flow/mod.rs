pub mod nav;
pub mod panel;

// re-export at `crate::flow::…`
pub use nav::{NavCommand, command_for_input};
pub use panel::Panel;
