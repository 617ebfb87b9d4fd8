//! Role Aggregate

pub mod api;
pub mod entity;
pub mod repository;

pub use api::{roles_router, RolesState};
pub use entity::{Role, PERMISSIONS};
pub use repository::RoleRepository;
