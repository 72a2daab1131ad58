//! # Mutex-guarded broadcast to registered listeners.
//!
//! [`NotificationHub`] is a single-writer-many-listener primitive:
//! listeners register once, emitted data is delivered synchronously in
//! registration order, and one mutual-exclusion lock serializes every
//! `subscribe` and `emit` against each other.
//!
//! ## Rules
//! - **Append-only**: the listener list is never shrunk or reordered;
//!   there is no removal API.
//! - **Whole-emit critical section**: the lock is held from before the
//!   first listener runs until after the last one returns. Two emits can
//!   never interleave, and a subscribe can never land mid-broadcast.
//! - **Delivery guarantee**: a listener subscribed before an emit's
//!   critical section begins observes that emit and every later one. A
//!   subscribe racing an in-flight emit is serialized by the lock, but
//!   which side wins is unspecified.
//! - **No isolation**: a panicking listener unwinds out of `emit`
//!   untranslated. The lock is released on unwind and the hub remains
//!   usable.

use parking_lot::Mutex;

use super::listen::Listen;

/// Ordered, lock-serialized broadcast hub.
///
/// Generic over the emitted data type; listeners receive `&T`, so emitted
/// types need no `Clone` bound.
///
/// ## Example
/// ```rust
/// use messenger_utils::NotificationHub;
///
/// let hub = NotificationHub::new();
/// hub.subscribe(|n: &u32| assert!(*n < 100));
/// hub.emit(7);
/// ```
pub struct NotificationHub<T> {
    listeners: Mutex<Vec<Box<dyn Listen<T>>>>,
}

impl<T> NotificationHub<T> {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers a listener at the end of the delivery order.
    ///
    /// Cannot fail, and is permitted at any time — including while
    /// another thread is emitting; the lock serializes the two.
    pub fn subscribe<L>(&self, listener: L)
    where
        L: Listen<T> + 'static,
    {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Delivers `data` to every registered listener, in subscription
    /// order, holding the lock until all listeners have returned.
    ///
    /// A listener panic propagates to the caller of `emit`.
    pub fn emit(&self, data: T) {
        let mut listeners = self.listeners.lock();
        for listener in listeners.iter_mut() {
            listener.on_notify(&data);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl<T> Default for NotificationHub<T> {
    fn default() -> Self {
        Self::new()
    }
}
