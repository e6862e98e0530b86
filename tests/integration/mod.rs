//! Integration tests
//!
//! - `api` - Router-level tests that need no database
//! - `database` - Full flows against PostgreSQL (`#[ignore]`)

pub mod database;
