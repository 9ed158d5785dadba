//! Resize Hub
//!
//! Fans the single window `resize` event out to every mounted plot. Widgets
//! hold a [`ResizeSubscription`] for exactly as long as they are mounted;
//! dropping it unregisters the callback, so a removed widget is never asked
//! to resize a detached canvas.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::plots::PlotId;

type ResizeCallback = Rc<dyn Fn()>;

struct Subscriber {
    plot: PlotId,
    callback: ResizeCallback,
}

#[derive(Default)]
struct HubInner {
    next_token: u64,
    subscribers: BTreeMap<u64, Subscriber>,
}

/// Registry of live resize callbacks, shared through the global state
#[derive(Clone, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `plot` until the returned guard is dropped
    #[must_use = "dropping the subscription unregisters it immediately"]
    pub fn subscribe(&self, plot: PlotId, callback: impl Fn() + 'static) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.subscribers.insert(
            token,
            Subscriber {
                plot,
                callback: Rc::new(callback),
            },
        );
        log::debug!("plot {} subscribed to resize ({} live)", plot, inner.subscribers.len());

        ResizeSubscription {
            hub: Rc::downgrade(&self.inner),
            token,
        }
    }

    /// Invoke every live callback in subscription order. Returns how many ran.
    ///
    /// A subscription dropped by an earlier callback in the same pass is
    /// skipped; one added during the pass waits for the next broadcast.
    pub fn broadcast(&self) -> usize {
        let tokens: Vec<u64> = self.inner.borrow().subscribers.keys().copied().collect();

        let mut notified = 0;
        for token in tokens {
            // Callbacks may subscribe or unsubscribe, so never hold the borrow across one
            let callback = match self.inner.borrow().subscribers.get(&token) {
                Some(subscriber) => Rc::clone(&subscriber.callback),
                None => continue,
            };
            callback();
            notified += 1;
        }
        notified
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for one registered resize callback
pub struct ResizeSubscription {
    hub: Weak<RefCell<HubInner>>,
    token: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        let Ok(mut inner) = hub.try_borrow_mut() else {
            return;
        };
        if let Some(subscriber) = inner.subscribers.remove(&self.token) {
            log::debug!(
                "plot {} unsubscribed from resize ({} live)",
                subscriber.plot,
                inner.subscribers.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    fn plot_ids(count: usize) -> Vec<PlotId> {
        let mut plots = crate::state::plots::PlotCollection::initialize();
        while plots.len() < count {
            plots.add();
        }
        plots.entries().iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_broadcast_reaches_every_subscriber() {
        let hub = ResizeHub::new();
        let ids = plot_ids(2);
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();

        let _a = hub.subscribe(ids[0], first_cb);
        let _b = hub.subscribe(ids[1], second_cb);

        assert_eq!(hub.broadcast(), 2);
        assert_eq!(hub.broadcast(), 2);
        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_dropped_subscription_never_fires() {
        let hub = ResizeHub::new();
        let ids = plot_ids(2);
        let (kept, kept_cb) = counter();
        let (dropped, dropped_cb) = counter();

        let _kept = hub.subscribe(ids[0], kept_cb);
        let removed = hub.subscribe(ids[1], dropped_cb);
        hub.broadcast();

        drop(removed);
        assert_eq!(hub.len(), 1);
        hub.broadcast();
        hub.broadcast();

        assert_eq!(dropped.get(), 1);
        assert_eq!(kept.get(), 3);
    }

    #[test]
    fn test_unsubscribe_during_broadcast() {
        let hub = ResizeHub::new();
        let ids = plot_ids(1);
        let slot: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));

        let slot_in_cb = Rc::clone(&slot);
        let subscription = hub.subscribe(ids[0], move || {
            slot_in_cb.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        assert_eq!(hub.broadcast(), 1);
        assert!(hub.is_empty());
        assert_eq!(hub.broadcast(), 0);
    }

    #[test]
    fn test_guard_outliving_hub() {
        let ids = plot_ids(1);
        let subscription = {
            let hub = ResizeHub::new();
            hub.subscribe(ids[0], || {})
        };
        assert!(subscription.hub.upgrade().is_none());
        drop(subscription);
    }

    #[test]
    fn test_guard_dropped_mid_broadcast_skips_its_callback() {
        let hub = ResizeHub::new();
        let ids = plot_ids(2);
        let (later, later_cb) = counter();

        let slot: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));
        let slot_in_cb = Rc::clone(&slot);
        let _first = hub.subscribe(ids[0], move || {
            slot_in_cb.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(hub.subscribe(ids[1], later_cb));

        assert_eq!(hub.broadcast(), 1);
        assert_eq!(hub.len(), 1);
        assert_eq!(later.get(), 0);
    }
}
