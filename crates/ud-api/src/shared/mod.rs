//! Shared API infrastructure

pub mod error;
pub mod health_api;
