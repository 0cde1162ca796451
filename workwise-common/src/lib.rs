//! # WorkWise Common Library
//!
//! Shared code for the WorkWise marketplace service:
//! - Database schema, records and repository queries
//! - Configuration loading and root folder resolution
//! - Password and session token hashing
//! - Lapu-Lapu City location data (barangays)

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod location;
pub mod money;
pub mod time;

pub use error::{Error, Result};
pub use money::Money;
