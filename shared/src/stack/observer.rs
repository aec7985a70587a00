use super::StackSnapshot;

/// What kind of operation produced a [`StackEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEventKind {
    Opened,
    Pushed,
    Popped,
    Reset,
    Closed,
    Reopened,
}

/// Change notification delivered to subscribers after an operation that
/// altered observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEvent {
    pub kind: StackEventKind,
    pub snapshot: StackSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StackEvent) + Send>;

/// Listeners in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Observers {
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StackEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self, event: &StackEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

// Custom Debug impl omits callbacks
impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
