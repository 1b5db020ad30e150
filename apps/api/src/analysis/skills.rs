//! Skill catalog and detector.
//!
//! The catalog is a compile-time table grouped by category. Detection is a
//! case-insensitive substring test of each skill name against the resume, so
//! punctuated names like `ci/cd` or `c++` must appear verbatim.

use serde::{Deserialize, Serialize};

use crate::analysis::metrics::ResumeDocument;

/// How widely a skill is asked for. Rendered as one to three stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    Niche,
    Common,
    Core,
}

impl LevelTier {
    pub fn stars(self) -> &'static str {
        match self {
            LevelTier::Niche => "⭐",
            LevelTier::Common => "⭐⭐",
            LevelTier::Core => "⭐⭐⭐",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    /// Lowercase match key.
    pub name: &'static str,
    pub tier: LevelTier,
    pub context: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [SkillEntry],
}

/// Ordered set of skill categories. New categories only need a new table entry.
#[derive(Debug, Clone, Copy)]
pub struct SkillCatalog {
    pub categories: &'static [SkillCategory],
}

const fn skill(name: &'static str, tier: LevelTier, context: &'static str) -> SkillEntry {
    SkillEntry {
        name,
        tier,
        context,
    }
}

static DEFAULT_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &[
            skill("python", LevelTier::Core, "Modern development, data analysis, automation"),
            skill("java", LevelTier::Common, "Enterprise applications, Spring framework"),
            skill("javascript", LevelTier::Common, "Web development, React/Node.js"),
            skill("c++", LevelTier::Common, "System programming, performance optimization"),
            skill("sql", LevelTier::Core, "Database design, complex queries"),
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            skill("git", LevelTier::Common, "Version control, collaboration"),
            skill("docker", LevelTier::Common, "Containerization, deployment"),
            skill("kubernetes", LevelTier::Niche, "Container orchestration"),
            skill("jenkins", LevelTier::Niche, "CI/CD pipelines"),
            skill("jira", LevelTier::Common, "Project management, agile"),
        ],
    },
    SkillCategory {
        name: "Frameworks",
        skills: &[
            skill("react", LevelTier::Common, "Frontend development"),
            skill("angular", LevelTier::Niche, "SPA development"),
            skill("django", LevelTier::Common, "Python web framework"),
            skill("flask", LevelTier::Common, "Lightweight web services"),
            skill("spring", LevelTier::Niche, "Java enterprise applications"),
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &[
            skill("aws", LevelTier::Common, "Cloud infrastructure"),
            skill("azure", LevelTier::Niche, "Microsoft cloud services"),
            skill("gcp", LevelTier::Niche, "Google cloud platform"),
            skill("terraform", LevelTier::Niche, "Infrastructure as Code"),
            skill("ci/cd", LevelTier::Common, "Automated deployment"),
        ],
    },
];

/// Skills every modern engineering resume is expected to mention.
pub const ESSENTIAL_SKILLS: &[&str] = &["ci/cd", "testing", "cloud", "agile"];

impl SkillCatalog {
    pub fn standard() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES,
        }
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// A catalog skill found in the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSkill {
    pub name: String,
    pub tier: LevelTier,
    pub stars: String,
    pub context: String,
}

/// Matches for one catalog category. Present even when `skills` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub category: String,
    pub skills: Vec<DetectedSkill>,
}

/// Per-category detection results, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectedSkills(pub Vec<CategoryMatches>);

impl DetectedSkills {
    pub fn category(&self, name: &str) -> Option<&CategoryMatches> {
        self.0.iter().find(|c| c.category == name)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|c| c.skills.len()).sum()
    }

    pub fn non_empty_categories(&self) -> usize {
        self.0.iter().filter(|c| !c.skills.is_empty()).count()
    }

    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.0
            .iter()
            .any(|c| c.skills.iter().any(|s| s.name == skill))
    }
}

pub fn detect_skills(doc: &ResumeDocument, catalog: &SkillCatalog) -> DetectedSkills {
    DetectedSkills(
        catalog
            .categories
            .iter()
            .map(|category| CategoryMatches {
                category: category.name.to_string(),
                skills: category
                    .skills
                    .iter()
                    .filter(|s| doc.mentions(&s.name.to_lowercase()))
                    .map(|s| DetectedSkill {
                        name: s.name.to_string(),
                        tier: s.tier,
                        stars: s.tier.stars().to_string(),
                        context: s.context.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    )
}

/// Essential skills absent from the resume, in `ESSENTIAL_SKILLS` order.
pub fn missing_essential_skills(doc: &ResumeDocument) -> Vec<String> {
    ESSENTIAL_SKILLS
        .iter()
        .filter(|skill| !doc.mentions(skill))
        .map(|skill| skill.to_string())
        .collect()
}
