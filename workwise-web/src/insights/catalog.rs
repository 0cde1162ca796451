//! Static market tables for Lapu-Lapu City
//!
//! Returned verbatim; nothing here depends on the requester.

use serde_json::{json, Value};

pub fn market_trends() -> Value {
    json!({
        "trending_skills": {
            "Web Development": {"growth": "+25%", "demand": "High"},
            "Mobile Apps": {"growth": "+18%", "demand": "High"},
            "Digital Marketing": {"growth": "+22%", "demand": "Medium"},
            "Graphic Design": {"growth": "+12%", "demand": "Medium"},
            "Content Writing": {"growth": "+15%", "demand": "Medium"}
        },
        "local_opportunities": [
            "Tourism websites for Lapu-Lapu resorts",
            "E-commerce for local businesses",
            "Mobile apps for local services",
            "Digital marketing for hospitality sector"
        ],
        "seasonal_trends": [
            "Peak season: December-April (Tourism boost)",
            "Festival periods: Kadaugan sa Mactan celebrations",
            "Back-to-school: June-August (Education projects)"
        ]
    })
}

pub fn pricing_insights() -> Value {
    json!({
        "average_rates": {
            "Web Development": {"min": "₱15/hr", "max": "₱45/hr", "avg": "₱28/hr"},
            "Mobile Development": {"min": "₱20/hr", "max": "₱50/hr", "avg": "₱32/hr"},
            "Graphic Design": {"min": "₱10/hr", "max": "₱30/hr", "avg": "₱18/hr"},
            "Content Writing": {"min": "₱8/hr", "max": "₱25/hr", "avg": "₱15/hr"},
            "Digital Marketing": {"min": "₱12/hr", "max": "₱35/hr", "avg": "₱22/hr"}
        },
        "budget_recommendations": {
            "Small projects (1-2 weeks)": "₱500 - ₱2,000",
            "Medium projects (1-2 months)": "₱2,000 - ₱8,000",
            "Large projects (3+ months)": "₱8,000 - ₱25,000"
        },
        "cost_factors": [
            "Experience level of freelancer",
            "Project complexity and scope",
            "Timeline and urgency",
            "Additional services required"
        ]
    })
}

pub fn skill_demand() -> Value {
    json!({
        "high_demand": {
            "React.js": "Very High",
            "Laravel": "High",
            "WordPress": "High",
            "SEO": "High",
            "Social Media Marketing": "Medium-High"
        },
        "emerging_skills": [
            "AI/Machine Learning",
            "Blockchain Development",
            "Mobile App Security",
            "Voice User Interface",
            "AR/VR Development"
        ],
        "local_specialties": [
            "Tourism website development",
            "Restaurant management systems",
            "Local business directories",
            "Event management platforms"
        ]
    })
}

pub fn hiring_tips() -> Value {
    json!({
        "screening_tips": [
            "Review portfolio thoroughly",
            "Check client testimonials and ratings",
            "Conduct a brief interview or test project",
            "Verify technical skills with specific questions",
            "Ensure good communication skills"
        ],
        "red_flags": [
            "Unusually low bids compared to market rates",
            "Poor communication or delayed responses",
            "No portfolio or previous work examples",
            "Requests for payment outside the platform",
            "Unrealistic timeline promises"
        ],
        "best_practices": [
            "Write clear, detailed project descriptions",
            "Set realistic budgets and timelines",
            "Use milestone-based payments",
            "Maintain regular communication",
            "Provide constructive feedback"
        ],
        "local_advantages": [
            "Same timezone for better communication",
            "Understanding of local market and culture",
            "Potential for in-person meetings if needed",
            "Support for local economy and talent"
        ]
    })
}

/// The four tables bundled for the client dashboard
pub fn client_insights() -> Value {
    json!({
        "market_trends": market_trends(),
        "pricing_insights": pricing_insights(),
        "skill_demand": skill_demand(),
        "hiring_tips": hiring_tips(),
    })
}
