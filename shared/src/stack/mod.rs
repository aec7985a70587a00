//! Screen stack state machine: which screen is presented and the history
//! behind (and ahead of) it.

mod observer;
mod screen;
mod snapshot;

pub use observer::{StackEvent, StackEventKind, SubscriptionId};
pub use screen::{Screen, ScreenId};
pub use snapshot::{NavigationDirection, ScreenSummary, StackSnapshot};

use crate::config::{ClosePolicy, DuplicateIdPolicy, StackConfig};
use crate::error::StackError;
use observer::Observers;
use tracing::{debug, info, warn};

/// Ordered history of screens with a movable cursor.
///
/// Index 0 is the root. `current` always addresses a screen while the stack
/// is open; it is only moved by the navigation methods below.
#[derive(Debug)]
pub struct ScreenStack<P> {
    screens: Vec<Screen<P>>,
    current: usize,
    open: bool,
    direction: NavigationDirection,
    config: StackConfig,
    observers: Observers,
}

impl<P> Default for ScreenStack<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ScreenStack<P> {
    /// Create an empty, closed stack with the default config.
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    pub fn with_config(config: StackConfig) -> Self {
        ScreenStack {
            screens: Vec::new(),
            current: 0,
            open: false,
            direction: NavigationDirection::None,
            config,
            observers: Observers::default(),
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    // --- Navigation ---

    /// Open fresh with `screen` as the only entry. Discards any history,
    /// whether the stack was open or closed.
    pub fn open_screen(&mut self, screen: Screen<P>) {
        info!(id = %screen.id(), discarded = self.screens.len(), "opening screen stack");
        self.screens.clear();
        self.screens.push(screen);
        self.current = 0;
        self.open = true;
        self.direction = NavigationDirection::None;
        self.emit(StackEventKind::Opened);
    }

    /// Push `screen` after the current one, dropping any forward history.
    ///
    /// Fails with [`StackError::Closed`] on a closed stack, and with
    /// [`StackError::DuplicateId`] under [`DuplicateIdPolicy::Reject`].
    /// The stack is unchanged on error.
    pub fn push_screen(&mut self, screen: Screen<P>) -> Result<(), StackError> {
        if !self.open {
            warn!(id = %screen.id(), "push on closed screen stack ignored");
            return Err(StackError::Closed);
        }

        // Only screens up to the cursor survive the truncation.
        let duplicate = self.screens[..=self.current]
            .iter()
            .any(|s| s.id() == screen.id());
        if duplicate {
            match self.config.duplicate_ids {
                DuplicateIdPolicy::Allow => {}
                DuplicateIdPolicy::Warn => {
                    warn!(id = %screen.id(), "pushing screen with duplicate id");
                }
                DuplicateIdPolicy::Reject => {
                    warn!(id = %screen.id(), "rejected screen with duplicate id");
                    return Err(StackError::DuplicateId(screen.id().clone()));
                }
            }
        }

        let discarded = self.screens.len() - (self.current + 1);
        self.screens.truncate(self.current + 1);
        self.screens.push(screen);
        self.current = self.screens.len() - 1;
        self.direction = NavigationDirection::Forward;
        debug!(
            id = %self.screens[self.current].id(),
            index = self.current,
            discarded,
            "pushed screen"
        );
        self.emit(StackEventKind::Pushed);
        Ok(())
    }

    /// Step back one screen. Returns `false` (and does nothing) at the root
    /// or when closed; never closes the stack.
    pub fn pop_screen(&mut self) -> bool {
        if !self.open {
            warn!("pop on closed screen stack ignored");
            return false;
        }
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.direction = NavigationDirection::Backward;
        debug!(
            id = %self.screens[self.current].id(),
            index = self.current,
            depth = self.screens.len(),
            "popped screen"
        );
        self.emit(StackEventKind::Popped);
        true
    }

    /// Step back to the nearest earlier screen with `id`.
    pub fn pop_to(&mut self, id: &ScreenId) -> bool {
        if !self.open {
            warn!(%id, "pop_to on closed screen stack ignored");
            return false;
        }
        let Some(target) = self.screens[..self.current]
            .iter()
            .rposition(|s| s.id() == id)
        else {
            return false;
        };
        self.current = target;
        self.direction = NavigationDirection::Backward;
        debug!(%id, index = target, "popped to screen");
        self.emit(StackEventKind::Popped);
        true
    }

    /// Return to the root screen, discarding everything above it.
    pub fn reset(&mut self) -> bool {
        if !self.open {
            warn!("reset on closed screen stack ignored");
            return false;
        }
        if self.screens.len() <= 1 {
            return false;
        }
        let discarded = self.screens.len() - 1;
        self.screens.truncate(1);
        self.current = 0;
        self.direction = NavigationDirection::Backward;
        debug!(discarded, "reset screen stack to root");
        self.emit(StackEventKind::Reset);
        true
    }

    /// Hide the stack. Idempotent. History is kept or dropped according to
    /// [`StackConfig::close_policy`].
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if self.config.close_policy == ClosePolicy::Clear {
            self.screens.clear();
            self.current = 0;
        }
        info!(policy = ?self.config.close_policy, depth = self.screens.len(), "closed screen stack");
        self.emit(StackEventKind::Closed);
    }

    /// Reopen at the screen that was current when the stack was closed.
    ///
    /// Only possible under [`ClosePolicy::Retain`]. A no-op when already open.
    pub fn reopen(&mut self) -> Result<(), StackError> {
        if self.open {
            return Ok(());
        }
        if self.screens.is_empty() {
            return Err(StackError::NothingToResume);
        }
        self.open = true;
        self.direction = NavigationDirection::None;
        info!(index = self.current, depth = self.screens.len(), "reopened screen stack");
        self.emit(StackEventKind::Reopened);
        Ok(())
    }

    // --- Read model ---

    /// The presented screen, or `None` while closed.
    pub fn current_screen(&self) -> Option<&Screen<P>> {
        if !self.open {
            return None;
        }
        self.screens.get(self.current)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_screen().map(|_| self.current)
    }

    pub fn can_go_back(&self) -> bool {
        self.open && self.current > 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn navigation_direction(&self) -> NavigationDirection {
        self.direction
    }

    /// Number of screens held, including forward history.
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn screens(&self) -> &[Screen<P>] {
        &self.screens
    }

    /// Screens after the current one, kept until the next push.
    pub fn forward_history(&self) -> &[Screen<P>] {
        self.screens.get(self.current + 1..).unwrap_or(&[])
    }

    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot {
            screens: self
                .screens
                .iter()
                .map(|s| ScreenSummary {
                    id: s.id().clone(),
                    title: s.title().to_string(),
                })
                .collect(),
            current_index: self.current_index(),
            is_open: self.open,
            direction: self.direction,
        }
    }

    // --- Subscriptions ---

    /// Register `listener` for every state change from now on.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StackEvent) + Send + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn emit(&mut self, kind: StackEventKind) {
        if self.observers.is_empty() {
            return;
        }
        let event = StackEvent {
            kind,
            snapshot: self.snapshot(),
        };
        self.observers.notify(&event);
    }
}
