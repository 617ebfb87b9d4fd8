//! UserDeck API Client
//!
//! Thin typed wrappers over the console's REST surface: one async
//! function per operation, request/response only. Failures map HTTP
//! status to a message the console can show directly; anything the
//! mapping does not cover surfaces the raw transport error.

mod client;
mod error;
pub mod types;

pub use client::Client;
pub use error::{Error, Result};
