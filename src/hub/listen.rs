//! # Listener contract.
//!
//! `Listen` is the extension point for plugging handlers into a
//! [`NotificationHub`](crate::NotificationHub). Listeners run inline on
//! the emitting thread, inside the hub's critical section: a slow
//! listener delays every later listener and blocks concurrent emits and
//! subscribes for the duration.
//!
//! Any `FnMut(&T) + Send` closure is a listener, so most callers never
//! implement the trait by hand:
//!
//! ```rust
//! use messenger_utils::NotificationHub;
//!
//! let hub = NotificationHub::new();
//! hub.subscribe(|event: &String| println!("saw {event}"));
//! hub.emit("deploy finished".to_string());
//! ```

/// Contract for hub listeners.
///
/// Invoked once per emit with a shared reference to the emitted data.
/// Receives `&mut self` so listeners may keep state across calls.
pub trait Listen<T>: Send {
    /// Handles one emitted value.
    fn on_notify(&mut self, data: &T);
}

impl<T, F> Listen<T> for F
where
    F: FnMut(&T) + Send,
{
    fn on_notify(&mut self, data: &T) {
        self(data)
    }
}
