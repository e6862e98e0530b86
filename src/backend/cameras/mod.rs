//! Cameras Module
//!
//! Cameras hang off locations, so ownership is checked through the
//! location's `owner_id` in the same statement that reads or writes the
//! camera.

pub mod db;
pub mod handlers;

pub use handlers::*;
