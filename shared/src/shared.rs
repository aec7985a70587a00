//! Thread-safe handle for hosts that drive one stack from several threads.

use crate::config::StackConfig;
use crate::error::StackError;
use crate::stack::{
    NavigationDirection, Screen, ScreenId, ScreenStack, StackEvent, StackSnapshot, SubscriptionId,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a [`ScreenStack`] behind a single mutex. Every method
/// holds the lock for exactly one operation, so operations are totally
/// ordered across threads.
///
/// Listeners run while the lock is held and must not call back into the
/// same handle.
#[derive(Debug)]
pub struct SharedScreenStack<P> {
    inner: Arc<Mutex<ScreenStack<P>>>,
}

impl<P> Clone for SharedScreenStack<P> {
    fn clone(&self) -> Self {
        SharedScreenStack {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> Default for SharedScreenStack<P> {
    fn default() -> Self {
        Self::from_stack(ScreenStack::new())
    }
}

impl<P> SharedScreenStack<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StackConfig) -> Self {
        Self::from_stack(ScreenStack::with_config(config))
    }

    pub fn from_stack(stack: ScreenStack<P>) -> Self {
        SharedScreenStack {
            inner: Arc::new(Mutex::new(stack)),
        }
    }

    // State is consistent between operations; a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, ScreenStack<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with the stack locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut ScreenStack<P>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn open_screen(&self, screen: Screen<P>) {
        self.lock().open_screen(screen);
    }

    pub fn push_screen(&self, screen: Screen<P>) -> Result<(), StackError> {
        self.lock().push_screen(screen)
    }

    pub fn pop_screen(&self) -> bool {
        self.lock().pop_screen()
    }

    pub fn pop_to(&self, id: &ScreenId) -> bool {
        self.lock().pop_to(id)
    }

    pub fn reset(&self) -> bool {
        self.lock().reset()
    }

    pub fn close(&self) {
        self.lock().close();
    }

    pub fn reopen(&self) -> Result<(), StackError> {
        self.lock().reopen()
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    pub fn navigation_direction(&self) -> NavigationDirection {
        self.lock().navigation_direction()
    }

    pub fn snapshot(&self) -> StackSnapshot {
        self.lock().snapshot()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StackEvent) + Send + 'static,
    {
        self.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }
}

impl<P: Clone> SharedScreenStack<P> {
    /// Clone of the presented screen; the lock is released on return.
    pub fn current_screen(&self) -> Option<Screen<P>> {
        self.lock().current_screen().cloned()
    }
}
