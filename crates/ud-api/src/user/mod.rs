//! User Aggregate

pub mod api;
pub mod entity;
pub mod repository;

pub use api::{users_router, UsersState};
pub use entity::{User, UserStatus};
pub use repository::UserRepository;
