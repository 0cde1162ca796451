//! Client-side hiring insights

use serde::Serialize;

use super::round_to;

/// Success rate clients are compared against
pub const HIRING_BENCHMARK: u32 = 85;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringSuccessRate {
    pub success_rate: f64,
    pub total_projects: i64,
    pub successful_projects: i64,
    pub benchmark: u32,
}

/// Completed projects as a percentage of all the client's projects
///
/// A client with no projects has a rate of 0.
pub fn hiring_success_rate(total_projects: i64, successful_projects: i64) -> HiringSuccessRate {
    let success_rate = if total_projects > 0 {
        successful_projects as f64 / total_projects as f64 * 100.0
    } else {
        0.0
    };

    HiringSuccessRate {
        success_rate: round_to(success_rate, 1),
        total_projects,
        successful_projects,
        benchmark: HIRING_BENCHMARK,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOptimization {
    pub average_project_cost: f64,
    pub cost_per_successful_project: String,
    pub optimization_tips: Vec<String>,
}

pub fn budget_optimization(average_agreed_amount: Option<f64>) -> BudgetOptimization {
    BudgetOptimization {
        average_project_cost: average_agreed_amount.map_or(0.0, |avg| round_to(avg, 2)),
        cost_per_successful_project: "Calculate based on success rate".to_string(),
        optimization_tips: vec![
            "Consider milestone-based payments".to_string(),
            "Invest in higher-rated freelancers for critical projects".to_string(),
            "Use fixed-price contracts for well-defined projects".to_string(),
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferredFreelancerTypes {
    pub experience_preference: String,
    pub rate_range_preference: String,
    pub location_preference: String,
    pub skill_preferences: Vec<String>,
}

/// Fixed profile of the freelancers clients most often hire
pub fn preferred_freelancer_types() -> PreferredFreelancerTypes {
    PreferredFreelancerTypes {
        experience_preference: "Intermediate".to_string(),
        rate_range_preference: "$20-35/hr".to_string(),
        location_preference: "Local (Lapu-Lapu City)".to_string(),
        skill_preferences: vec![
            "Web Development".to_string(),
            "Design".to_string(),
            "Marketing".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_projects_is_zero_not_nan() {
        let rate = hiring_success_rate(0, 0);
        assert_eq!(rate.success_rate, 0.0);
        assert_eq!(rate.benchmark, 85);
    }

    #[test]
    fn test_rate_rounded_to_one_decimal() {
        assert_eq!(hiring_success_rate(3, 2).success_rate, 66.7);
        assert_eq!(hiring_success_rate(4, 4).success_rate, 100.0);
        assert_eq!(hiring_success_rate(8, 1).success_rate, 12.5);
    }

    #[test]
    fn test_budget_optimization_defaults_to_zero() {
        assert_eq!(budget_optimization(None).average_project_cost, 0.0);
        assert_eq!(
            budget_optimization(Some(4000.0)).average_project_cost,
            4000.0
        );
        assert_eq!(budget_optimization(None).optimization_tips.len(), 3);
    }
}
