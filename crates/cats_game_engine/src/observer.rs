//! Change notification for view layers.

use crate::game::Snapshot;

/// Receives a fresh [`Snapshot`] after every state change.
///
/// Observers run synchronously inside [`Game::apply_move`](crate::Game::apply_move)
/// and [`Game::restart`](crate::Game::restart), in subscription order.
pub trait Observer {
    /// Called with the new state.
    fn notify(&mut self, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot),
{
    fn notify(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Handle returned by [`Game::subscribe`](crate::Game::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription#{_0}")]
pub struct SubscriptionId(pub(crate) u64);

/// Registered observers keyed by subscription id.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify_all(&mut self, snapshot: &Snapshot) {
        for (_, observer) in &mut self.entries {
            observer.notify(snapshot);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
