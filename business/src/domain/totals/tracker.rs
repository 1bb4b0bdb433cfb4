use tokio::sync::watch;

use super::model::ShoppingTotals;
use crate::domain::item::model::Item;

/// Publishes running totals to any number of subscribers.
///
/// The UI recomputes after every mutating event by calling [`TotalsTracker::update`];
/// each subscriber sees the latest totals. Nothing here is persisted.
pub struct TotalsTracker {
    sender: watch::Sender<ShoppingTotals>,
}

impl Default for TotalsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TotalsTracker {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ShoppingTotals::default());
        Self { sender }
    }

    /// Recomputes totals from the in-memory items and notifies subscribers
    /// when they changed.
    pub fn update(&self, items: &[Item]) -> ShoppingTotals {
        let totals = ShoppingTotals::from_items(items);
        self.sender.send_if_modified(|current| {
            if *current == totals {
                return false;
            }
            *current = totals.clone();
            true
        });
        totals
    }

    pub fn current(&self) -> ShoppingTotals {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShoppingTotals> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
