//! HTTP API handlers for workwise-web

pub mod accounts;
pub mod ai;
pub mod buildinfo;
pub mod health;
pub mod jobs;
pub mod ui;

pub use accounts::{get_profile, login, logout, register, update_profile};
pub use ai::{job_suggestions, matching_freelancers, personalized_insights, recommendations};
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use jobs::{close_job, create_job, get_bid, get_job, list_bids, submit_bid};
pub use ui::{list_barangays, serve_register_page};
