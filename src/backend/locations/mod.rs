//! Locations Module
//!
//! CRUD for the sites a user owns. Every query is scoped by `owner_id`, so a
//! location that belongs to someone else looks exactly like a missing one.

pub mod db;
pub mod handlers;

pub use handlers::*;
