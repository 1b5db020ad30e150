//! Recommendation generator.
//!
//! A small rule table: each rule looks at the score set and may add one
//! priority block. Fragments are independent, so rules apply in table order
//! with no conflict resolution. The high-impact catalog, quick wins and skill
//! optimization blocks are static guidance emitted on every report.

use serde::{Deserialize, Serialize};

use crate::analysis::scoring::ScoreSet;

/// Scores below this trigger a priority block for that area.
pub const NEEDS_WORK_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreArea {
    Structure,
    Content,
    Clarity,
}

impl ScoreArea {
    fn score(self, scores: &ScoreSet) -> u32 {
        match self {
            ScoreArea::Structure => scores.structure,
            ScoreArea::Content => scores.content,
            ScoreArea::Clarity => scores.clarity,
        }
    }
}

/// Score-driven guidance for a weak area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityImprovement {
    pub area: ScoreArea,
    pub title: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighImpactItem {
    pub title: String,
    pub description: String,
    pub examples: Vec<BeforeAfter>,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickWins {
    pub formatting: Vec<String>,
    pub content: Vec<String>,
    pub ats_optimization: Vec<String>,
}

impl QuickWins {
    /// Buckets with their display titles, in export order.
    pub fn buckets(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Formatting", self.formatting.as_slice()),
            ("Content", self.content.as_slice()),
            ("ATS Optimization", self.ats_optimization.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAdvice {
    pub title: String,
    pub suggestions: Vec<String>,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOptimization {
    pub technical: SkillAdvice,
    pub soft: SkillAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTree {
    pub priority: Vec<PriorityImprovement>,
    pub high_impact: Vec<HighImpactItem>,
    pub quick_wins: QuickWins,
    pub skill_optimization: SkillOptimization,
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

struct PriorityRule {
    area: ScoreArea,
    title: &'static str,
    actions: &'static [&'static str],
}

const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        area: ScoreArea::Structure,
        title: "Structure Needs Work",
        actions: &[
            "Add clear section headers",
            "Ensure logical flow of information",
            "Include all essential sections",
        ],
    },
    PriorityRule {
        area: ScoreArea::Content,
        title: "Content Enhancement Needed",
        actions: &[
            "Add more quantifiable achievements",
            "Include specific technical skills",
            "Highlight relevant experience",
        ],
    },
    PriorityRule {
        area: ScoreArea::Clarity,
        title: "Improve Clarity",
        actions: &[
            "Use more concise language",
            "Remove redundant information",
            "Strengthen action verbs",
        ],
    },
];

impl PriorityRule {
    fn apply(&self, scores: &ScoreSet) -> Option<PriorityImprovement> {
        (self.area.score(scores) < NEEDS_WORK_THRESHOLD).then(|| PriorityImprovement {
            area: self.area,
            title: self.title.to_string(),
            actions: owned(self.actions),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static guidance
// ────────────────────────────────────────────────────────────────────────────

struct HighImpactTemplate {
    title: &'static str,
    description: &'static str,
    examples: &'static [(&'static str, &'static str)],
    rationale: &'static str,
}

const HIGH_IMPACT_CATALOG: &[HighImpactTemplate] = &[
    HighImpactTemplate {
        title: "💡 Quantify Your Achievements",
        description: "Transform your achievements with specific metrics and outcomes",
        examples: &[
            (
                "Improved system performance",
                "Optimized database queries resulting in 40% faster response time and 30% reduced server load",
            ),
            (
                "Managed a team project",
                "Led a team of 8 developers to deliver a $2M project 2 weeks ahead of schedule",
            ),
        ],
        rationale: "Quantified achievements provide concrete evidence of your impact and make your resume more credible.",
    },
    HighImpactTemplate {
        title: "🔧 Technical Project Details",
        description: "Showcase your technical depth with detailed project descriptions",
        examples: &[
            (
                "Built a web application",
                "Architected and developed a scalable web platform using React/Node.js, handling 100K+ daily users",
            ),
            (
                "Implemented database optimizations",
                "Redesigned database schema and implemented query optimization, reducing data retrieval time from 5s to 200ms",
            ),
        ],
        rationale: "Detailed technical descriptions demonstrate your expertise and problem-solving abilities.",
    },
    HighImpactTemplate {
        title: "👥 Leadership & Collaboration",
        description: "Highlight your team leadership and collaboration skills",
        examples: &[
            (
                "Worked on team projects",
                "Mentored 4 junior developers, implemented agile practices, and increased team velocity by 50%",
            ),
            (
                "Participated in code reviews",
                "Established code review guidelines and led bi-weekly technical knowledge sharing sessions",
            ),
        ],
        rationale: "Leadership examples show your ability to influence and drive team success.",
    },
    HighImpactTemplate {
        title: "🎯 Job-Specific Alignment",
        description: "Tailor your experience to match job requirements",
        examples: &[
            (
                "Worked with various programming languages",
                "Proficient in Python and Java, with 3+ years building REST APIs and microservices",
            ),
            (
                "Familiar with cloud services",
                "Designed and deployed containerized applications on AWS using ECS, Lambda, and RDS",
            ),
        ],
        rationale: "Aligned experience helps recruiters quickly identify your relevant qualifications.",
    },
];

const FORMATTING_WINS: &[&str] = &[
    "Use consistent bullet point formatting throughout",
    "Ensure section headers are clearly visible",
    "Maintain consistent font and spacing",
    "Use bold for key achievements and metrics",
];

const CONTENT_WINS: &[&str] = &[
    "Add a compelling professional summary (3-4 lines)",
    "Include GitHub/portfolio/LinkedIn links",
    "List relevant certifications with dates",
    "Add technologies used in each project",
];

const ATS_WINS: &[&str] = &[
    "Use standard section headers (Experience, Education, Skills)",
    "Include keywords from the job description",
    "Avoid tables and complex formatting",
    "Use common file formats (PDF, DOCX)",
];

const TECHNICAL_SKILLS_TITLE: &str = "💻 Technical Skills Enhancement";

const TECHNICAL_SKILLS_SUGGESTIONS: &[&str] = &[
    "Create a dedicated 'Technical Skills' section at the top",
    "Group skills by category (Languages, Frameworks, Tools, etc.)",
    "Highlight proficiency levels for key skills",
    "Add relevant certifications and training",
];

const TECHNICAL_SKILLS_EXAMPLE: &str = "
Technical Skills
---------------
Languages: Python (Expert), Java (Advanced), JavaScript (Intermediate)
Frameworks: Django, Spring Boot, React.js
Cloud & DevOps: AWS (Certified), Docker, Kubernetes
Tools: Git, JIRA, Jenkins, Prometheus
";

const SOFT_SKILLS_TITLE: &str = "🤝 Soft Skills Integration";

const SOFT_SKILLS_SUGGESTIONS: &[&str] = &[
    "Weave soft skills into achievement descriptions",
    "Demonstrate leadership and communication abilities",
    "Show problem-solving and decision-making examples",
    "Include team collaboration highlights",
];

const SOFT_SKILLS_EXAMPLE: &str = "
• Led cross-functional team meetings and workshops, improving team collaboration and project delivery time by 25%
• Mentored 3 junior developers, creating detailed documentation that reduced onboarding time from 2 weeks to 4 days
• Presented technical solutions to stakeholders, securing buy-in for a $500K system upgrade
";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn priority_improvements(scores: &ScoreSet) -> Vec<PriorityImprovement> {
    PRIORITY_RULES
        .iter()
        .filter_map(|rule| rule.apply(scores))
        .collect()
}

pub fn high_impact() -> Vec<HighImpactItem> {
    HIGH_IMPACT_CATALOG
        .iter()
        .map(|t| HighImpactItem {
            title: t.title.to_string(),
            description: t.description.to_string(),
            examples: t
                .examples
                .iter()
                .map(|(before, after)| BeforeAfter {
                    before: before.to_string(),
                    after: after.to_string(),
                })
                .collect(),
            rationale: t.rationale.to_string(),
        })
        .collect()
}

pub fn quick_wins() -> QuickWins {
    QuickWins {
        formatting: owned(FORMATTING_WINS),
        content: owned(CONTENT_WINS),
        ats_optimization: owned(ATS_WINS),
    }
}

pub fn skill_optimization() -> SkillOptimization {
    SkillOptimization {
        technical: SkillAdvice {
            title: TECHNICAL_SKILLS_TITLE.to_string(),
            suggestions: owned(TECHNICAL_SKILLS_SUGGESTIONS),
            example: TECHNICAL_SKILLS_EXAMPLE.to_string(),
        },
        soft: SkillAdvice {
            title: SOFT_SKILLS_TITLE.to_string(),
            suggestions: owned(SOFT_SKILLS_SUGGESTIONS),
            example: SOFT_SKILLS_EXAMPLE.to_string(),
        },
    }
}

pub fn build_recommendations(scores: &ScoreSet) -> RecommendationTree {
    RecommendationTree {
        priority: priority_improvements(scores),
        high_impact: high_impact(),
        quick_wins: quick_wins(),
        skill_optimization: skill_optimization(),
    }
}
