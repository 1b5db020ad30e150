//! Role matching — how many job-role tokens appear in the resume, and the
//! ATS estimate derived from it.

use serde::{Deserialize, Serialize};

use crate::analysis::metrics::ResumeDocument;
use crate::analysis::skills::DetectedSkills;

/// Match score used when the role has no tokens at all.
pub const NEUTRAL_MATCH_SCORE: u32 = 50;

/// ATS points per skill category with at least one detected skill.
const ATS_POINTS_PER_CATEGORY: u32 = 10;

/// Match scores above this read as a strong alignment.
const STRONG_ALIGNMENT_THRESHOLD: u32 = 70;

pub const ATS_SUGGESTIONS: &[&str] = &[
    "Include more industry-standard keywords",
    "Use conventional section headers",
    "Ensure proper formatting for ATS parsing",
];

/// Role tokens split by whether the resume mentions them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Strong,
    Partial,
}

/// One row of the requirements table, e.g. `Leadership: 8/10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: String,
    pub rating: String,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    /// 0 – 100
    pub match_score: u32,
    pub matched_tokens: usize,
    pub total_tokens: usize,
    pub feedback: Vec<String>,
    pub requirements: Vec<RequirementMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCompatibility {
    /// 0 – 100
    pub overall_score: u32,
    pub keyword_analysis: KeywordAnalysis,
}

/// Lowercased whitespace tokens of the role, duplicates kept.
pub fn role_tokens(job_role: &str) -> Vec<String> {
    job_role
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Percentage of role tokens found in the resume, floored. Falls back to
/// `NEUTRAL_MATCH_SCORE` for a role with no tokens.
pub fn compute_match_score(doc: &ResumeDocument, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return NEUTRAL_MATCH_SCORE;
    }
    let matched = tokens.iter().filter(|t| doc.mentions(t)).count();
    ((matched * 100 / tokens.len()) as u32).min(100)
}

pub fn compute_ats_score(match_score: u32, skills: &DetectedSkills) -> u32 {
    (match_score + ATS_POINTS_PER_CATEGORY * skills.non_empty_categories() as u32).min(100)
}

pub fn match_role(doc: &ResumeDocument, job_role: &str, skills: &DetectedSkills) -> RoleMatch {
    let tokens = role_tokens(job_role);
    let match_score = compute_match_score(doc, &tokens);
    let matched_tokens = tokens.iter().filter(|t| doc.mentions(t)).count();

    let alignment = if match_score > STRONG_ALIGNMENT_THRESHOLD {
        "Strong technical skill alignment"
    } else {
        "Consider adding more role-specific keywords"
    };

    RoleMatch {
        match_score,
        matched_tokens,
        total_tokens: tokens.len(),
        feedback: vec![
            format!("Match Score: {match_score}% alignment with the {job_role} role"),
            alignment.to_string(),
        ],
        requirements: requirements_table(doc, skills),
    }
}

fn requirements_table(doc: &ResumeDocument, skills: &DetectedSkills) -> Vec<RequirementMatch> {
    let languages = skills
        .category("Languages")
        .map(|c| c.skills.len())
        .unwrap_or(0);
    let has_led = doc.mentions("led") || doc.mentions("managed");

    let row = |requirement: &str, rating: String, strong: bool| RequirementMatch {
        requirement: requirement.to_string(),
        rating,
        status: if strong {
            MatchStatus::Strong
        } else {
            MatchStatus::Partial
        },
    };

    vec![
        row("Required Skills", format!("{languages}/10"), languages > 5),
        row("Experience Level", "7/10".to_string(), false),
        row("Domain Knowledge", "6/10".to_string(), false),
        row("Leadership", "8/10".to_string(), has_led),
    ]
}

pub fn ats_compatibility(
    doc: &ResumeDocument,
    role: &RoleMatch,
    job_role: &str,
    skills: &DetectedSkills,
) -> AtsCompatibility {
    let mut present: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for token in role_tokens(job_role) {
        if present.contains(&token) || missing.contains(&token) {
            continue;
        }
        if doc.mentions(&token) {
            present.push(token);
        } else {
            missing.push(token);
        }
    }

    AtsCompatibility {
        overall_score: compute_ats_score(role.match_score, skills),
        keyword_analysis: KeywordAnalysis {
            present,
            missing,
            suggestions: ATS_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
    }
}
