//! Synchronous notification hub.
//!
//! This module groups the listener **seam** and the **hub** that delivers
//! emitted data to every registered listener under one lock.
//!
//! ## Architecture
//! ```text
//! emit(data)
//!     │ lock ─────────────────────────────────┐
//!     ├──► listener 1.on_notify(&data)        │ subscription order,
//!     ├──► listener 2.on_notify(&data)        │ serialized with every
//!     └──► listener N.on_notify(&data)        │ other emit/subscribe
//!       unlock ◄──────────────────────────────┘
//! ```
//!
//! ## Contents
//! - [`Listen`] listener contract, blanket-implemented for closures
//! - [`NotificationHub`] append-only listener list behind a mutex

mod listen;
mod notification;

pub use listen::Listen;
pub use notification::NotificationHub;
