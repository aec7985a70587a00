//! A navigable history of screens for modal dialogs, dropdowns and
//! multi-step flows.
//!
//! The stack owns an ordered list of [`Screen`]s and the index of the one
//! currently presented. Renderers read the current screen through the read
//! model and subscribe for change notifications; host code drives navigation
//! through [`ScreenStack::open_screen`], [`ScreenStack::push_screen`],
//! [`ScreenStack::pop_screen`] and [`ScreenStack::close`].

pub mod config;
pub mod error;
pub mod shared;
pub mod stack;

pub use config::{ClosePolicy, DuplicateIdPolicy, StackConfig};
pub use error::{ConfigError, StackError};
pub use shared::SharedScreenStack;
pub use stack::{
    NavigationDirection, Screen, ScreenId, ScreenStack, ScreenSummary, StackEvent,
    StackEventKind, StackSnapshot, SubscriptionId,
};
