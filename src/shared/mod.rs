//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the backend and its clients. These are the JSON bodies that travel over
//! the API, the validation rules applied to them, and the configuration
//! used to start the server.
//!
//! # Overview
//!
//! The shared module has no server dependencies, so it builds without the
//! `ssr` feature. Every request body implements [`Validate`], which is the
//! declared schema the backend checks before touching the database.

/// Authentication request and response bodies
pub mod auth;

/// Location request and response bodies
pub mod locations;

/// Camera request and response bodies
pub mod cameras;

/// Request validation
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use auth::{AuthResponse, LoginRequest, MessageResponse, RefreshResponse, SignupRequest, UserResponse};
pub use cameras::{Camera, CreateCameraRequest, UpdateCameraRequest};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use locations::{Location, LocationRequest};
pub use validation::Validate;
