//! UserDeck Console
//!
//! In-memory view state for the admin console: fetched user/role lists,
//! derived filtered/sorted views, modal form handling, and the
//! notifications surfaced after each action. All derivation is pure;
//! the only side effects are the API calls made on user actions.

pub mod dashboard;
pub mod forms;
pub mod notify;
pub mod roles;
pub mod users;

pub use notify::{Notification, NotificationKind};
