//! Database schema, records and repository queries
//!
//! Each submodule owns the queries for one table. Handlers never build SQL
//! themselves; relationship lookups (a bid's job, a job's employer) are
//! explicit calls into these modules.

pub mod bids;
pub mod init;
pub mod jobs;
pub mod models;
pub mod projects;
pub mod reviews;
pub mod sessions;
pub mod users;

pub use init::{create_schema, init_database};
pub use models::*;

use crate::Error;

/// Decode a JSON text column holding a list of strings
pub(crate) fn decode_string_list(column: &str, raw: &str) -> crate::Result<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| Error::Internal(format!("Failed to deserialize {}: {}", column, e)))
}

pub(crate) fn encode_string_list(column: &str, list: &[String]) -> crate::Result<String> {
    serde_json::to_string(list)
        .map_err(|e| Error::Internal(format!("Failed to serialize {}: {}", column, e)))
}
