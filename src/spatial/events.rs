//! Cell change notification
//!
//! Observers are invoked synchronously, in subscription order, from inside the
//! write that triggered them. They only receive the written coordinate; anything
//! needing the value re-reads it from the grid once the mutating call returns.

use std::fmt;

/// Notification payload for a single successful cell write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChanged {
    /// Column of the written cell
    pub x: i32,
    /// Row of the written cell
    pub y: i32,
}

/// Receives cell change notifications from a grid
pub trait GridObserver {
    /// Called once per successful write, before the write call returns
    fn on_cell_changed(&mut self, event: CellChanged);
}

impl<F> GridObserver for F
where
    F: FnMut(CellChanged),
{
    fn on_cell_changed(&mut self, event: CellChanged) {
        self(event);
    }
}

/// Handle identifying one subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered list of subscribed observers
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn GridObserver>)>,
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field(
                "subscriptions",
                &self.observers.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; it is notified after every earlier subscriber
    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer, returning whether it was subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of live subscriptions
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is subscribed
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every observer in subscription order
    pub fn notify(&mut self, event: CellChanged) {
        for (_, observer) in &mut self.observers {
            observer.on_cell_changed(event);
        }
    }
}
