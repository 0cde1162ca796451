//! Profile completeness score and activity-based suggestions

use serde::Serialize;
use workwise_common::db::User;

pub const MAX_PROFILE_SCORE: u32 = 100;

const BIO_MIN_CHARS: usize = 50;
const MIN_SKILLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileScore {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub suggestions: Vec<String>,
}

/// Score how complete a freelancer's profile is
///
/// | Criterion                   | Points     |
/// |-----------------------------|------------|
/// | bio of 50+ characters       | 20         |
/// | 3+ skills                   | 25         |
/// | hourly rate set             | 15         |
/// | portfolio URL set           | 20         |
/// | reviews received: 5+ / 1+   | 20 / 10    |
pub fn profile_score(user: &User, review_count: i64) -> ProfileScore {
    let mut score = 0;
    let mut suggestions = Vec::new();

    let bio_chars = user.bio.as_deref().map_or(0, |b| b.chars().count());
    if bio_chars >= BIO_MIN_CHARS {
        score += 20;
    } else {
        suggestions.push("Add a detailed bio (at least 50 characters)".to_string());
    }

    if user.skills.len() >= MIN_SKILLS {
        score += 25;
    } else {
        suggestions.push("Add at least 3 relevant skills".to_string());
    }

    // A zero rate counts as unset
    if user.hourly_rate.is_some_and(|r| r > 0.0) {
        score += 15;
    } else {
        suggestions.push("Set your hourly rate".to_string());
    }

    if user.portfolio_url.as_deref().is_some_and(|u| !u.is_empty()) {
        score += 20;
    } else {
        suggestions.push("Add a portfolio URL".to_string());
    }

    if review_count >= 5 {
        score += 20;
    } else if review_count >= 1 {
        score += 10;
    } else {
        suggestions.push("Complete projects to get reviews".to_string());
    }

    let percentage = (f64::from(score) / f64::from(MAX_PROFILE_SCORE) * 100.0).round() as u32;

    ProfileScore {
        score,
        max_score: MAX_PROFILE_SCORE,
        percentage,
        suggestions,
    }
}

/// Advice driven by performance aggregates and current workload
pub fn improvement_suggestions(user: &User, active_projects: i64) -> Vec<String> {
    let mut suggestions = Vec::new();

    if user.completion_rate < 90.0 {
        suggestions.push(
            "Focus on completing projects on time to improve your completion rate".to_string(),
        );
    }

    if user.average_rating < 4.5 {
        suggestions
            .push("Work on improving client satisfaction to boost your ratings".to_string());
    }

    if active_projects == 0 {
        suggestions
            .push("Apply to more jobs to increase your activity and visibility".to_string());
    }

    suggestions
}
