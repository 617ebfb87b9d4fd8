//! UserDeck API
//!
//! Domain entities, MongoDB repositories, and axum REST handlers for
//! the user-administration console. Each aggregate follows the same
//! layout: `entity.rs` for the stored document, `repository.rs` for
//! collection access, `api.rs` for the HTTP surface.

pub mod role;
pub mod shared;
pub mod user;

pub use shared::error::{ApiError, Result};
