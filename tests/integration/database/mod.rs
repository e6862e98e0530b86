//! Database-backed tests
//!
//! Run with `DATABASE_URL` pointing at a scratch PostgreSQL database and
//! `--ignored`.
