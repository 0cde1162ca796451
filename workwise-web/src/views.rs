//! Response shapes that differ from the stored records

use serde::Serialize;
use workwise_common::db::{Bid, Job, User, UserType};

/// What other users may see of an account (no email, no consent flags)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicProfile {
    pub id: i64,
    pub name: String,
    pub user_type: UserType,
    pub barangay: String,
    pub city: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    pub completion_rate: f64,
    pub average_rating: f64,
}

impl From<&User> for PublicProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            user_type: user.user_type,
            barangay: user.barangay.clone(),
            city: user.city.clone(),
            bio: user.bio.clone(),
            skills: user.skills.clone(),
            hourly_rate: user.hourly_rate,
            portfolio_url: user.portfolio_url.clone(),
            completion_rate: user.completion_rate,
            average_rating: user.average_rating,
        }
    }
}

/// A bid together with its job and freelancer
#[derive(Debug, Clone, Serialize)]
pub struct BidDetail {
    #[serde(flatten)]
    pub bid: Bid,
    pub is_pending: bool,
    pub is_accepted: bool,
    pub is_rejected: bool,
    pub job: Job,
    pub freelancer: PublicProfile,
}

impl BidDetail {
    pub fn new(bid: Bid, job: Job, freelancer: &User) -> Self {
        Self {
            is_pending: bid.is_pending(),
            is_accepted: bid.is_accepted(),
            is_rejected: bid.is_rejected(),
            bid,
            job,
            freelancer: PublicProfile::from(freelancer),
        }
    }
}

/// A job together with the client who posted it
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub employer: PublicProfile,
}

impl JobDetail {
    pub fn new(job: Job, employer: &User) -> Self {
        Self {
            job,
            employer: PublicProfile::from(employer),
        }
    }
}
