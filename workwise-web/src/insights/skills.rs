//! Skill gap detection against the in-demand list

use serde::Serialize;
use std::collections::HashSet;

/// Skills the local market is asking for, lowercase
pub const IN_DEMAND_SKILLS: [&str; 6] = ["react", "laravel", "node.js", "python", "aws", "docker"];

const SKILL_RECOMMENDATIONS: [&str; 4] = [
    "Based on your current skills, consider learning:",
    "React.js for modern web development",
    "Laravel for PHP backend development",
    "AWS for cloud services",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGaps {
    pub missing_high_demand_skills: Vec<String>,
    pub skill_recommendations: Vec<String>,
}

/// In-demand skills the user does not list (case-insensitive), in list order
pub fn skill_gaps(user_skills: &[String]) -> SkillGaps {
    let have: HashSet<String> = user_skills.iter().map(|s| s.trim().to_lowercase()).collect();

    SkillGaps {
        missing_high_demand_skills: IN_DEMAND_SKILLS
            .iter()
            .filter(|skill| !have.contains(**skill))
            .map(|skill| skill.to_string())
            .collect(),
        skill_recommendations: SKILL_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}
