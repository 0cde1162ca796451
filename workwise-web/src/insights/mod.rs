//! Rule-based insight scoring
//!
//! Everything here is a closed-form function of already-loaded rows:
//! fixed point awards, threshold multipliers, set differences and static
//! tables. Handlers in `api::ai` load the inputs and call in.

pub mod catalog;
pub mod earnings;
pub mod hiring;
pub mod matching;
pub mod profile;
pub mod skills;

pub use earnings::{earning_potential, EarningPotential};
pub use hiring::{
    budget_optimization, hiring_success_rate, preferred_freelancer_types, BudgetOptimization,
    HiringSuccessRate, PreferredFreelancerTypes,
};
pub use profile::{improvement_suggestions, profile_score, ProfileScore};
pub use skills::{skill_gaps, SkillGaps};

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}


#[cfg(test)]
pub(crate) mod tests_support {
    use chrono::Utc;
    use workwise_common::db::{User, UserType};

    /// Freelancer with an empty profile and zeroed aggregates
    pub fn freelancer() -> User {
        User {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            email: "ana@example.com".into(),
            user_type: UserType::Freelancer,
            barangay: "Basak".into(),
            city: "Lapu-Lapu City".into(),
            bio: None,
            skills: vec![],
            hourly_rate: None,
            portfolio_url: None,
            completion_rate: 0.0,
            average_rating: 0.0,
            marketing_emails: false,
            created_at: Utc::now(),
        }
    }
}
