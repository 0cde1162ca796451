//! Database records
//!
//! Plain data carried between the repository functions and the web layer.
//! Status columns are stored as lowercase text and parsed into enums here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Money};

/// Declares a text-backed status enum with `as_str`, `Display` and `FromStr`
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(Error::InvalidInput(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }
    };
}

text_enum!(
    /// Account role chosen at registration
    UserType {
        Freelancer => "freelancer",
        Client => "client",
    }
);

text_enum!(
    /// Bid lifecycle; transitions are owned by the acceptance workflow
    BidStatus {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
    }
);

text_enum!(
    JobStatus {
        Open => "open",
        Closed => "closed",
    }
);

text_enum!(
    ProjectStatus {
        Active => "active",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

/// Registered account
///
/// Credentials are deliberately absent; see [`crate::db::users::find_credentials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
    pub barangay: String,
    pub city: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    /// Percentage of accepted projects finished (0-100), maintained elsewhere
    pub completion_rate: f64,
    /// Mean review rating (0-5), maintained elsewhere
    pub average_rating: f64,
    pub marketing_emails: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_freelancer(&self) -> bool {
        self.user_type == UserType::Freelancer
    }

    pub fn is_client(&self) -> bool {
        self.user_type == UserType::Client
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields written when an account is created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC string from [`crate::auth::hash_password`]
    pub password_hash: String,
    pub user_type: UserType,
    pub barangay: String,
    pub city: String,
    pub marketing_emails: bool,
}

/// Profile fields a user may edit; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
}

/// Posted job (the "gig")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub budget_min: Money,
    pub budget_max: Money,
    pub experience_level: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub budget_min: Money,
    pub budget_max: Money,
    pub experience_level: String,
}

/// A freelancer's offer on a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: i64,
    pub job_id: i64,
    pub freelancer_id: i64,
    pub bid_amount: Money,
    pub proposal_message: String,
    pub estimated_days: i64,
    pub status: BidStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Bid {
    pub fn is_pending(&self) -> bool {
        self.status == BidStatus::Pending
    }

    pub fn is_accepted(&self) -> bool {
        self.status == BidStatus::Accepted
    }

    pub fn is_rejected(&self) -> bool {
        self.status == BidStatus::Rejected
    }
}

#[derive(Debug, Clone)]
pub struct NewBid {
    pub job_id: i64,
    pub freelancer_id: i64,
    pub bid_amount: Money,
    pub proposal_message: String,
    pub estimated_days: i64,
}

/// Engagement between a client and a freelancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub job_id: i64,
    pub client_id: i64,
    pub freelancer_id: i64,
    pub agreed_amount: Money,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub job_id: i64,
    pub client_id: i64,
    pub freelancer_id: i64,
    pub agreed_amount: Money,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub project_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub project_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
}
