//! Lexical indicator scanner.
//!
//! Each term list is scanned independently and reports how many distinct
//! members occur anywhere in the resume. No weighting happens here.

use crate::analysis::metrics::ResumeDocument;

/// Strong ownership verbs.
pub const PROFESSIONAL_TERMS: &[&str] = &[
    "implemented",
    "developed",
    "managed",
    "led",
    "architected",
    "designed",
    "optimized",
];

/// Phrases that hide the candidate's actual contribution.
pub const VAGUE_TERMS: &[&str] = &["worked on", "helped with", "assisted", "responsible for"];

/// Verbs that signal hands-on project delivery.
pub const PROJECT_TERMS: &[&str] = &["implemented", "developed", "designed", "architected"];

pub const COMPLEXITY_TERMS: &[&str] = &["complex", "scalable", "distributed", "optimized"];

pub const IMPACT_TERMS: &[&str] = &["increased", "improved", "achieved"];

pub const CASUAL_TERMS: &[&str] = &["cool", "awesome", "great"];

/// Sections every resume is expected to carry.
pub const SECTION_TERMS: &[&str] = &["experience", "education", "skills"];

/// Term groups behind the per-aspect experience scores.
pub const EXPERIENCE_ASPECTS: &[(&str, &[&str])] = &[
    ("Role Clarity", &["led", "managed", "responsible", "ownership"]),
    ("Achievement Focus", &["improved", "increased", "reduced", "achieved"]),
    ("Leadership", &["team", "mentored", "supervised", "directed"]),
    ("Domain Expertise", &["expert", "specialist", "proficient", "advanced"]),
];

/// Counts distinct members of `terms` found in the resume. Bounded by `terms.len()`.
pub fn count_present(doc: &ResumeDocument, terms: &[&str]) -> usize {
    terms.iter().filter(|term| doc.mentions(term)).count()
}

/// Every term-list count the scorers and assessments read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalProfile {
    pub professional: usize,
    pub vague: usize,
    pub project: usize,
    pub complexity: usize,
    pub impact: usize,
    pub casual: usize,
    pub sections: usize,
}

impl LexicalProfile {
    pub fn scan(doc: &ResumeDocument) -> Self {
        Self {
            professional: count_present(doc, PROFESSIONAL_TERMS),
            vague: count_present(doc, VAGUE_TERMS),
            project: count_present(doc, PROJECT_TERMS),
            complexity: count_present(doc, COMPLEXITY_TERMS),
            impact: count_present(doc, IMPACT_TERMS),
            casual: count_present(doc, CASUAL_TERMS),
            sections: count_present(doc, SECTION_TERMS),
        }
    }
}
