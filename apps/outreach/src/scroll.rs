//! Main-content scroll container.
//!
//! Views subscribe to scroll offsets and hold the returned `ScrollSubscription`
//! for as long as they are mounted. Dropping the subscription detaches the
//! listener, so an unmounted view can never be called back.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::trace;

type Listener = Box<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    listeners
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct ScrollContainer {
    scroll_top: f64,
    listeners: Arc<Mutex<Listeners>>,
}

impl ScrollContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Records the new offset and notifies listeners in subscription order.
    pub fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset;
        let listeners = lock(&self.listeners);
        trace!("scroll_top={offset} -> {} listener(s)", listeners.entries.len());
        for (_, listener) in &listeners.entries {
            listener(offset);
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> ScrollSubscription
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        ScrollSubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

/// Detaches its listener on drop.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct ScrollSubscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_listener_receives_offsets() {
        let mut container = ScrollContainer::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = container.subscribe(move |offset| sink.lock().unwrap().push(offset));

        container.set_scroll_top(12.0);
        container.set_scroll_top(0.0);

        assert_eq!(*seen.lock().unwrap(), vec![12.0, 0.0]);
        assert_eq!(container.scroll_top(), 0.0);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let mut container = ScrollContainer::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = container.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(container.listener_count(), 1);

        drop(sub);
        container.set_scroll_top(5.0);

        assert_eq!(container.listener_count(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_only_removes_own_listener() {
        let container = ScrollContainer::new();
        let first = container.subscribe(|_| {});
        let _second = container.subscribe(|_| {});
        drop(first);
        assert_eq!(container.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outliving_container_is_harmless() {
        let container = ScrollContainer::new();
        let sub = container.subscribe(|_| {});
        drop(container);
        drop(sub);
    }
}
