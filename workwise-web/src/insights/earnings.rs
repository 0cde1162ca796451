//! Earning potential projection

use serde::Serialize;
use workwise_common::db::User;

use super::round_to;

/// Rate assumed when a freelancer has not set one
pub const DEFAULT_HOURLY_RATE: f64 = 20.0;

/// Billable hours per month used for the monthly projection
pub const HOURS_PER_MONTH: f64 = 160.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningPotential {
    pub current_rate: f64,
    pub potential_rate: f64,
    pub monthly_potential: f64,
    pub improvement_needed: bool,
}

/// Rate multiplier earned by a rating / completion-rate combination
pub fn potential_multiplier(average_rating: f64, completion_rate: f64) -> f64 {
    if average_rating >= 4.8 && completion_rate >= 95.0 {
        1.3
    } else if average_rating >= 4.5 && completion_rate >= 90.0 {
        1.15
    } else {
        1.0
    }
}

pub fn earning_potential(user: &User) -> EarningPotential {
    let current_rate = user.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE);
    let potential_rate =
        current_rate * potential_multiplier(user.average_rating, user.completion_rate);

    EarningPotential {
        current_rate,
        potential_rate: round_to(potential_rate, 2),
        monthly_potential: round_to(potential_rate * HOURS_PER_MONTH, 2),
        improvement_needed: potential_rate > current_rate,
    }
}
