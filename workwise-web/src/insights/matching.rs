//! Job / freelancer matching
//!
//! A freelancer's match score for a job, out of 100:
//!
//! ```text
//! 60 * skill overlap + 25 * rating / 5 + 15 * completion rate / 100
//! ```
//!
//! Skill overlap is the share of the job's required skills the freelancer
//! lists (case-insensitive). A job listing no skills counts as half overlap
//! for everyone. Results are ordered best first, ties by ascending id.

use serde::Serialize;
use std::collections::HashSet;
use workwise_common::db::{Job, User};

use super::round_to;
use crate::views::PublicProfile;

pub const MATCHING_FREELANCERS_LIMIT: usize = 20;
pub const JOB_SUGGESTIONS_LIMIT: usize = 15;
pub const RECOMMENDATIONS_LIMIT: usize = 10;

const SKILL_WEIGHT: f64 = 60.0;
const RATING_WEIGHT: f64 = 25.0;
const COMPLETION_WEIGHT: f64 = 15.0;
const OPEN_JOB_OVERLAP: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub ratio: f64,
    /// Required skills the freelancer has, spelled as the job lists them
    pub matched: Vec<String>,
}

pub fn skill_overlap(required: &[String], skills: &[String]) -> SkillOverlap {
    let have: HashSet<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();

    let mut seen = HashSet::new();
    let required: Vec<&String> = required
        .iter()
        .filter(|s| seen.insert(s.trim().to_lowercase()))
        .collect();

    if required.is_empty() {
        return SkillOverlap {
            ratio: OPEN_JOB_OVERLAP,
            matched: Vec::new(),
        };
    }

    let matched: Vec<String> = required
        .iter()
        .filter(|s| have.contains(&s.trim().to_lowercase()))
        .map(|s| s.to_string())
        .collect();

    SkillOverlap {
        ratio: matched.len() as f64 / required.len() as f64,
        matched,
    }
}

pub fn match_score(overlap: &SkillOverlap, freelancer: &User) -> f64 {
    let rating = (freelancer.average_rating / 5.0).clamp(0.0, 1.0);
    let completion = (freelancer.completion_rate / 100.0).clamp(0.0, 1.0);
    round_to(
        SKILL_WEIGHT * overlap.ratio + RATING_WEIGHT * rating + COMPLETION_WEIGHT * completion,
        1,
    )
}

/// Whether a pairing is worth showing at all
fn is_candidate(job: &Job, overlap: &SkillOverlap) -> bool {
    job.required_skills.is_empty() || !overlap.matched.is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub struct FreelancerMatch {
    pub freelancer: PublicProfile,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
}

/// Best freelancers for `job`, excluding its owner
pub fn find_matching_freelancers(job: &Job, freelancers: &[User], limit: usize) -> Vec<FreelancerMatch> {
    let mut matches: Vec<FreelancerMatch> = freelancers
        .iter()
        .filter(|f| f.is_freelancer() && f.id != job.employer_id)
        .filter_map(|f| {
            let overlap = skill_overlap(&job.required_skills, &f.skills);
            if !is_candidate(job, &overlap) {
                return None;
            }
            Some(FreelancerMatch {
                match_score: match_score(&overlap, f),
                freelancer: PublicProfile::from(f),
                matching_skills: overlap.matched,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then(a.freelancer.id.cmp(&b.freelancer.id))
    });
    matches.truncate(limit);
    matches
}

#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub job: Job,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub reason: String,
}

/// Best open jobs for `freelancer` among `jobs`
///
/// `jobs` is expected to be pre-filtered to open jobs the freelancer does
/// not own and has not bid on.
pub fn find_matching_jobs(freelancer: &User, jobs: Vec<Job>, limit: usize) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .into_iter()
        .filter_map(|job| {
            let overlap = skill_overlap(&job.required_skills, &freelancer.skills);
            if !is_candidate(&job, &overlap) {
                return None;
            }
            let reason = if overlap.matched.is_empty() {
                "Open to all skill sets".to_string()
            } else {
                format!("Matches your skills: {}", overlap.matched.join(", "))
            };
            Some(JobMatch {
                match_score: match_score(&overlap, freelancer),
                matching_skills: overlap.matched,
                reason,
                job,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then(a.job.id.cmp(&b.job.id))
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::tests_support::freelancer;
    use chrono::Utc;
    use workwise_common::db::{JobStatus, UserType};
    use workwise_common::Money;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn job(id: i64, employer_id: i64, skills: &[&str]) -> Job {
        Job {
            id,
            employer_id,
            title: format!("Job {}", id),
            description: "Work".into(),
            required_skills: strings(skills),
            budget_min: Money::ZERO,
            budget_max: Money::from_cents(500_000),
            experience_level: "intermediate".into(),
            status: JobStatus::Open,
            created_at: Utc::now(),
        }
    }

    fn worker(id: i64, skills: &[&str], rating: f64, completion: f64) -> User {
        let mut user = freelancer();
        user.id = id;
        user.skills = strings(skills);
        user.average_rating = rating;
        user.completion_rate = completion;
        user
    }

    #[test]
    fn test_overlap_is_case_insensitive_and_deduplicated() {
        let overlap = skill_overlap(
            &strings(&["React", "react", "Laravel", "AWS"]),
            &strings(&["REACT", " aws "]),
        );
        assert_eq!(overlap.matched, vec!["React", "AWS"]);
        assert!((overlap.ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_for_job_without_skills() {
        let overlap = skill_overlap(&[], &strings(&["PHP"]));
        assert_eq!(overlap.ratio, 0.5);
        assert!(overlap.matched.is_empty());
    }

    #[test]
    fn test_match_score_formula() {
        let perfect = worker(2, &["React"], 5.0, 100.0);
        let overlap = skill_overlap(&strings(&["React"]), &perfect.skills);
        assert_eq!(match_score(&overlap, &perfect), 100.0);

        let half = worker(3, &["React"], 2.5, 50.0);
        let overlap = skill_overlap(&strings(&["React", "Laravel"]), &half.skills);
        // 30 + 12.5 + 7.5
        assert_eq!(match_score(&overlap, &half), 50.0);
    }

    #[test]
    fn test_matching_freelancers_ranked_and_filtered() {
        let posted = job(1, 100, &["React", "Laravel"]);
        let mut owner_as_freelancer = worker(100, &["React"], 5.0, 100.0);
        owner_as_freelancer.user_type = UserType::Freelancer;
        let pool = vec![
            worker(2, &["React"], 4.0, 80.0),
            worker(3, &["React", "Laravel"], 3.0, 60.0),
            worker(4, &["Figma"], 5.0, 100.0),
            owner_as_freelancer,
        ];

        let matches = find_matching_freelancers(&posted, &pool, 20);
        let ids: Vec<i64> = matches.iter().map(|m| m.freelancer.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(matches[0].matching_skills, vec!["React", "Laravel"]);
    }

    #[test]
    fn test_matching_freelancers_respects_limit_and_tie_order() {
        let posted = job(1, 100, &[]);
        let pool: Vec<User> = (1..=30).map(|id| worker(id, &[], 4.0, 90.0)).collect();

        let matches = find_matching_freelancers(&posted, &pool, MATCHING_FREELANCERS_LIMIT);
        assert_eq!(matches.len(), 20);
        assert_eq!(matches[0].freelancer.id, 1);
        assert_eq!(matches[19].freelancer.id, 20);
    }

    #[test]
    fn test_matching_jobs_ranked_with_reasons() {
        let me = worker(5, &["Laravel", "Vue"], 4.5, 90.0);
        let jobs = vec![
            job(1, 100, &["React"]),
            job(2, 100, &["Laravel", "React"]),
            job(3, 100, &["laravel"]),
            job(4, 100, &[]),
        ];

        let matches = find_matching_jobs(&me, jobs, JOB_SUGGESTIONS_LIMIT);
        let ids: Vec<i64> = matches.iter().map(|m| m.job.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
        assert_eq!(matches[0].reason, "Matches your skills: laravel");
        assert_eq!(matches[2].reason, "Open to all skill sets");
    }
}
