//! # messenger-utils
//!
//! **messenger-utils** is a small console-output and notification library.
//!
//! It provides styled line printers backed by a heterogeneous message
//! formatter, a synchronous publish-subscribe hub, and an email syntax
//! validator. The crate is designed as a leaf dependency: no runtime, no
//! persistence, no background work.
//!
//! ## Architecture
//! ```text
//!   msg![ "...", 42, ts ]           caller data (any type)
//!          │                              │
//!          ▼                              ▼
//!   ┌──────────────┐              ┌────────────────────┐
//!   │   [Value]    │              │ NotificationHub<T> │
//!   │ (closed set) │              │  - Mutex<Vec<..>>  │
//!   └──────┬───────┘              │  - subscribe()     │
//!          ▼                      │  - emit()          │
//!   ┌──────────────────┐          └─────────┬──────────┘
//!   │ format_message() │                    │ in subscription order,
//!   │  (space-joined)  │                    │ whole emit under one lock
//!   └──────┬───────────┘                    ▼
//!          ▼                       listener.on_notify(&data)
//!   ┌─────────────────────────┐
//!   │ Messenger::print_info   │  verbosity-gated
//!   │ print_error, print_todo │  unconditional
//!   └──────────┬──────────────┘
//!              ▼
//!        one styled line on stdout
//! ```
//!
//! ## Features
//! | Area           | Description                                                 | Key items                                      |
//! |----------------|-------------------------------------------------------------|------------------------------------------------|
//! | **Formatting** | Render mixed value sequences into one display string.       | [`Value`], [`format_message`], [`msg!`]        |
//! | **Printing**   | Bold-labelled `INFO`/`ERROR`/`TODO` lines on stdout.        | [`Messenger`], [`print_error`], [`print_todo`] |
//! | **Pub-sub**    | Ordered, lock-serialized broadcast to registered listeners. | [`NotificationHub`], [`Listen`]                |
//! | **Validation** | Email syntax checking.                                      | [`is_valid_email`]                             |
//!
//! ## Example
//! ```rust
//! use messenger_utils::{is_valid_email, msg, Messenger, NotificationHub};
//!
//! let messenger = Messenger::new(true);
//! messenger.print_info(&msg!["starting sync for", 3_u32, "mailboxes"]);
//!
//! let hub = NotificationHub::new();
//! hub.subscribe(|address: &String| println!("invite queued for {address}"));
//!
//! let address = "team@example.com".to_string();
//! if is_valid_email(&address) {
//!     hub.emit(address);
//! }
//! ```

mod format;
mod hub;
mod print;
mod validate;

// ---- Public re-exports ----

pub use format::{format_message, Value};
pub use hub::{Listen, NotificationHub};
pub use print::{print_error, print_todo, write_error, write_todo, Messenger, BOLD, RESET};
pub use validate::is_valid_email;

/// Builds a fixed-size [`Value`] array from mixed literals.
///
/// Each element is converted with `Value::from`, so anything with a
/// `From` conversion into [`Value`] can appear directly. Types outside
/// the supported set enter through [`Value::other`] instead.
///
/// ## Example
/// ```rust
/// use messenger_utils::{format_message, msg};
///
/// let rendered = format_message(&msg!["The", 42, "answer is"]);
/// assert_eq!(rendered, "The 42 answer is");
/// ```
#[macro_export]
macro_rules! msg {
    () => {
        <[$crate::Value; 0]>::default()
    };
    ($($value:expr),+ $(,)?) => {
        [$($crate::Value::from($value)),+]
    };
}
