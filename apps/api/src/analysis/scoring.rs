//! Scoring engine — the four headline scores and the secondary assessments
//! derived from the lexical profile.

use serde::{Deserialize, Serialize};

use crate::analysis::indicators::{
    count_present, LexicalProfile, EXPERIENCE_ASPECTS, IMPACT_TERMS,
};
use crate::analysis::metrics::ResumeDocument;
use crate::analysis::skills::DetectedSkills;

const POINTS_PER_SECTION: u32 = 30;
const CLARITY_FLOOR: u32 = 20;
const WORDS_PER_CLARITY_POINT: usize = 10;
/// Density below which writing reads as concise.
const CONCISE_DENSITY: f64 = 0.1;

/// Headline scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub structure: u32,
    pub content: u32,
    pub clarity: u32,
    pub overall: u32,
}

impl ScoreSet {
    /// `content` is the role-match percentage.
    pub fn compute(doc: &ResumeDocument, profile: &LexicalProfile, match_score: u32) -> Self {
        let structure = (POINTS_PER_SECTION * profile.sections as u32).min(100);
        let content = match_score.min(100);
        let clarity = clarity_score(doc.word_count);
        Self {
            structure,
            content,
            clarity,
            overall: (structure + content + clarity) / 3,
        }
    }
}

pub fn clarity_score(word_count: usize) -> u32 {
    let points = (word_count / WORDS_PER_CLARITY_POINT).min(100) as u32;
    points.max(CLARITY_FLOOR)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingStyle {
    /// 0 – 100
    pub clarity_score: u32,
    pub tone_analysis: String,
    pub structure_feedback: String,
}

pub fn assess_writing_style(profile: &LexicalProfile) -> WritingStyle {
    let raw = 100 + 10 * profile.professional as i64 - 20 * profile.vague as i64;

    WritingStyle {
        clarity_score: raw.clamp(0, 100) as u32,
        tone_analysis: if profile.professional > profile.vague {
            "Your resume maintains a professional tone"
        } else {
            "Consider using more professional action verbs"
        }
        .to_string(),
        structure_feedback: if profile.sections > 0 {
            "Well-structured with clear sections"
        } else {
            "Important sections may be missing or unclear"
        }
        .to_string(),
    }
}

/// A rated writing dimension, e.g. `Clarity: Strong`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRating {
    pub aspect: String,
    pub level: String,
    pub note: String,
}

pub fn assess_writing_quality(doc: &ResumeDocument, profile: &LexicalProfile) -> Vec<QualityRating> {
    let concise = doc
        .sentence_density()
        .map(|d| d < CONCISE_DENSITY)
        .unwrap_or(false);
    let impactful = profile.impact >= IMPACT_TERMS.len();

    let rating = |aspect: &str, level: &str, note: &str| QualityRating {
        aspect: aspect.to_string(),
        level: level.to_string(),
        note: note.to_string(),
    };

    vec![
        if concise {
            rating("Clarity", "Strong", "Clear and concise language")
        } else {
            rating("Clarity", "Medium", "Could be more concise")
        },
        if impactful {
            rating("Impact", "High", "Good use of impact verbs")
        } else {
            rating("Impact", "Medium", "Add more achievement metrics")
        },
        if profile.casual == 0 {
            rating("Professionalism", "High", "Maintains professional tone")
        } else {
            rating("Professionalism", "Medium", "Maintains professional tone")
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectScore {
    pub aspect: String,
    /// 0 – 100
    pub score: u32,
}

/// 10 points per indicator present, one entry per aspect.
pub fn experience_scores(doc: &ResumeDocument) -> Vec<AspectScore> {
    EXPERIENCE_ASPECTS
        .iter()
        .map(|(aspect, indicators)| AspectScore {
            aspect: aspect.to_string(),
            score: (10 * count_present(doc, indicators) as u32).min(100),
        })
        .collect()
}

/// Ratios in `[0, 1]` describing technical breadth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub project_complexity: f64,
    pub technical_depth: f64,
    pub tool_diversity: f64,
}

impl QualityMetrics {
    pub fn compute(profile: &LexicalProfile, skills: &DetectedSkills) -> Self {
        Self {
            project_complexity: (profile.complexity as f64 * 0.25).min(1.0),
            technical_depth: (skills.total() as f64 * 0.1).min(1.0),
            tool_diversity: (profile.project as f64 * 0.2).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skills::{detect_skills, SkillCatalog};
    use proptest::prelude::*;

    fn scores(text: &str, match_score: u32) -> ScoreSet {
        let doc = ResumeDocument::new(text);
        ScoreSet::compute(&doc, &LexicalProfile::scan(&doc), match_score)
    }

    #[test]
    fn test_empty_resume_scores() {
        let s = scores("", 50);
        assert_eq!(s.structure, 0);
        assert_eq!(s.content, 50);
        assert_eq!(s.clarity, 20);
        assert_eq!(s.overall, 23);
    }

    #[test]
    fn test_structure_caps_at_ninety_with_three_sections() {
        let s = scores("Experience Education Skills Experience", 0);
        assert_eq!(s.structure, 90);
    }

    #[test]
    fn test_clarity_floor_and_ceiling() {
        assert_eq!(clarity_score(0), 20);
        assert_eq!(clarity_score(150), 20);
        assert_eq!(clarity_score(400), 40);
        assert_eq!(clarity_score(5_000), 100);
    }

    #[test]
    fn test_writing_style_penalizes_vague_language() {
        let doc = ResumeDocument::new("Worked on reports. Assisted the team. Helped with audits.");
        let style = assess_writing_style(&LexicalProfile::scan(&doc));
        assert_eq!(style.clarity_score, 40);
        assert_eq!(style.tone_analysis, "Consider using more professional action verbs");
        assert_eq!(style.structure_feedback, "Important sections may be missing or unclear");
    }

    #[test]
    fn test_writing_style_caps_at_100() {
        let doc = ResumeDocument::new("Led and managed; implemented and optimized. Experience");
        let style = assess_writing_style(&LexicalProfile::scan(&doc));
        assert_eq!(style.clarity_score, 100);
        assert_eq!(style.tone_analysis, "Your resume maintains a professional tone");
        assert_eq!(style.structure_feedback, "Well-structured with clear sections");
    }

    #[test]
    fn test_zero_words_reads_as_medium_clarity() {
        let doc = ResumeDocument::new("");
        let quality = assess_writing_quality(&doc, &LexicalProfile::scan(&doc));
        assert_eq!(quality[0].level, "Medium");
        assert_eq!(quality[2].level, "High");
    }

    #[test]
    fn test_impact_high_needs_every_impact_verb() {
        let doc = ResumeDocument::new("Increased revenue, improved uptime, achieved SOC2");
        let quality = assess_writing_quality(&doc, &LexicalProfile::scan(&doc));
        assert_eq!(quality[1].level, "High");
    }

    #[test]
    fn test_casual_words_lower_professionalism() {
        let doc = ResumeDocument::new("Built an awesome dashboard");
        let quality = assess_writing_quality(&doc, &LexicalProfile::scan(&doc));
        assert_eq!(quality[2].level, "Medium");
        assert_eq!(quality[2].note, "Maintains professional tone");
    }

    #[test]
    fn test_experience_scores_cover_all_aspects() {
        let doc = ResumeDocument::new("Mentored the team; proficient in Go");
        let scores = experience_scores(&doc);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[2].aspect, "Leadership");
        assert_eq!(scores[2].score, 20);
        assert_eq!(scores[3].score, 10);
        assert_eq!(scores[1].score, 0);
    }

    #[test]
    fn test_quality_metrics_saturate_at_one() {
        let doc = ResumeDocument::new(
            "complex scalable distributed optimized python java sql git docker react aws azure gcp terraform",
        );
        let profile = LexicalProfile::scan(&doc);
        let skills = detect_skills(&doc, &SkillCatalog::standard());
        let metrics = QualityMetrics::compute(&profile, &skills);
        assert_eq!(metrics.project_complexity, 1.0);
        assert_eq!(metrics.technical_depth, 1.0);
        assert_eq!(metrics.tool_diversity, 0.0);
    }

    proptest! {
        #[test]
        fn test_scores_stay_bounded(text in "\\PC{0,400}", match_score in 0u32..=100) {
            let s = scores(&text, match_score);
            prop_assert!(s.structure <= 100);
            prop_assert!(s.content <= 100);
            prop_assert!(s.clarity >= 20 && s.clarity <= 100);
            prop_assert!(s.overall <= 100);
            prop_assert_eq!(s.overall, (s.structure + s.content + s.clarity) / 3);
        }

        #[test]
        fn test_clarity_never_below_floor(word_count in 0usize..100_000) {
            let clarity = clarity_score(word_count);
            prop_assert!((20..=100).contains(&clarity));
        }
    }
}
