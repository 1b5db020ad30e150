//! Report assembler — runs every analysis stage in order and composes the
//! single `AnalysisReport` returned to callers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::indicators::LexicalProfile;
use crate::analysis::metrics::ResumeDocument;
use crate::analysis::recommendations::{build_recommendations, RecommendationTree};
use crate::analysis::role_match::{ats_compatibility, match_role, AtsCompatibility, RoleMatch};
use crate::analysis::scoring::{
    assess_writing_quality, assess_writing_style, experience_scores, AspectScore, QualityMetrics,
    QualityRating, ScoreSet, WritingStyle,
};
use crate::analysis::skills::{detect_skills, missing_essential_skills, DetectedSkills, SkillCatalog};

/// Full analysis of one resume against one role. Every field is always
/// populated; collections may be empty but are never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub job_role: String,
    pub scores: ScoreSet,
    pub summary: String,
    pub word_count: usize,
    pub sentence_count: usize,
    pub writing_style: WritingStyle,
    pub writing_quality: Vec<QualityRating>,
    pub experience_scores: Vec<AspectScore>,
    pub detected_skills: DetectedSkills,
    pub missing_skills: Vec<String>,
    pub quality_metrics: QualityMetrics,
    pub role_match: RoleMatch,
    pub ats: AtsCompatibility,
    pub recommendations: RecommendationTree,
}

/// Analyzes `resume_text` against `job_role` with the standard skill catalog.
pub fn analyze(resume_text: &str, job_role: &str) -> AnalysisReport {
    analyze_with_catalog(resume_text, job_role, &SkillCatalog::standard())
}

pub fn analyze_with_catalog(
    resume_text: &str,
    job_role: &str,
    catalog: &SkillCatalog,
) -> AnalysisReport {
    let doc = ResumeDocument::new(resume_text);
    let profile = LexicalProfile::scan(&doc);
    let detected_skills = detect_skills(&doc, catalog);
    let missing_skills = missing_essential_skills(&doc);

    let role_match = match_role(&doc, job_role, &detected_skills);
    let scores = ScoreSet::compute(&doc, &profile, role_match.match_score);
    let ats = ats_compatibility(&doc, &role_match, job_role, &detected_skills);

    debug!(
        words = doc.word_count,
        sentences = doc.sentence_count,
        structure = scores.structure,
        content = scores.content,
        clarity = scores.clarity,
        overall = scores.overall,
        "Resume analyzed"
    );

    AnalysisReport {
        job_role: job_role.to_string(),
        summary: build_summary(&doc, job_role),
        word_count: doc.word_count,
        sentence_count: doc.sentence_count,
        writing_style: assess_writing_style(&profile),
        writing_quality: assess_writing_quality(&doc, &profile),
        experience_scores: experience_scores(&doc),
        quality_metrics: QualityMetrics::compute(&profile, &detected_skills),
        recommendations: build_recommendations(&scores),
        scores,
        detected_skills,
        missing_skills,
        role_match,
        ats,
    }
}

fn detail_level(word_count: usize) -> &'static str {
    if word_count > 400 {
        "good"
    } else if word_count > 300 {
        "moderate"
    } else {
        "limited"
    }
}

fn build_summary(doc: &ResumeDocument, job_role: &str) -> String {
    let role = job_role.trim();
    let role = if role.is_empty() { "target" } else { role };
    format!(
        "Based on a comprehensive analysis of your resume for the {role} position, \
         I've identified several key areas of strength and opportunities for enhancement. \
         Your resume demonstrates {} words across {} distinct statements, \
         suggesting {} detail level.",
        doc.word_count,
        doc.sentence_count,
        detail_level(doc.word_count)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::role_match::NEUTRAL_MATCH_SCORE;
    use proptest::prelude::*;

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    #[test]
    fn test_empty_inputs_produce_full_degraded_report() {
        let report = analyze("", "");
        assert_eq!(report.scores.structure, 0);
        assert_eq!(report.scores.content, NEUTRAL_MATCH_SCORE);
        assert_eq!(report.scores.clarity, 20);
        assert_eq!(report.scores.overall, 23);
        assert_eq!(report.detected_skills.0.len(), 4);
        assert_eq!(report.missing_skills, vec!["ci/cd", "testing", "cloud", "agile"]);
        assert_eq!(report.experience_scores.len(), 4);
        assert_eq!(report.recommendations.priority.len(), 3);
        assert_eq!(report.recommendations.high_impact.len(), 4);
        assert!(report.ats.keyword_analysis.present.is_empty());
        assert!(report.summary.contains("target position"));
    }

    #[test]
    fn test_sectioned_resume_matching_role() {
        let text = format!("Experience Education Skills data analyst {}", filler(395));
        let report = analyze(&text, "Data Analyst");
        assert_eq!(report.word_count, 400);
        assert_eq!(report.scores.structure, 90);
        assert_eq!(report.scores.content, 100);
        assert_eq!(report.scores.clarity, 40);
        assert_eq!(report.scores.overall, 76);
        assert_eq!(report.ats.overall_score, 100);
        assert_eq!(report.ats.keyword_analysis.present, vec!["data", "analyst"]);
    }

    #[test]
    fn test_identical_inputs_yield_identical_reports() {
        let text = "Senior Python engineer. Led a team of 5; built CI/CD on AWS. Experience: 8 years.";
        let first = analyze(text, "Python Engineer");
        let second = analyze(text, "Python Engineer");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_whitespace_role_gets_neutral_content_score() {
        let report = analyze("Python developer", "   ");
        assert_eq!(report.role_match.match_score, NEUTRAL_MATCH_SCORE);
        assert_eq!(report.scores.content, NEUTRAL_MATCH_SCORE);
        assert_eq!(report.role_match.total_tokens, 0);
    }

    #[test]
    fn test_overall_is_floor_of_mean() {
        let report = analyze("Skills: python, docker", "Platform Engineer");
        let s = report.scores;
        assert_eq!(s.overall, (s.structure + s.content + s.clarity) / 3);
    }

    #[test]
    fn test_summary_detail_levels() {
        assert_eq!(detail_level(401), "good");
        assert_eq!(detail_level(400), "moderate");
        assert_eq!(detail_level(301), "moderate");
        assert_eq!(detail_level(300), "limited");
    }

    #[test]
    fn test_report_serializes_detected_skills_as_list() {
        let report = analyze("python and react", "Engineer");
        let json = serde_json::to_value(&report).unwrap();
        let categories = json["detected_skills"].as_array().unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0]["category"], "Languages");
        assert_eq!(categories[0]["skills"][0]["name"], "python");
        assert_eq!(categories[1]["skills"].as_array().unwrap().len(), 0);
    }

    proptest! {
        #[test]
        fn test_any_input_yields_bounded_scores(text in "\\PC{0,300}", role in "\\PC{0,40}") {
            let s = analyze(&text, &role).scores;
            for v in [s.structure, s.content, s.clarity, s.overall] {
                prop_assert!(v <= 100);
            }
            prop_assert!(s.clarity >= 20);
            prop_assert_eq!(s.overall, (s.structure + s.content + s.clarity) / 3);
        }

        #[test]
        fn test_repeated_analysis_is_identical(text in "\\PC{0,300}", role in "\\PC{0,40}") {
            prop_assert_eq!(analyze(&text, &role), analyze(&text, &role));
        }

        #[test]
        fn test_blank_role_always_neutral(text in "\\PC{0,300}", role in "[ \\t\\n]{0,10}") {
            let report = analyze(&text, &role);
            prop_assert_eq!(report.role_match.match_score, NEUTRAL_MATCH_SCORE);
            prop_assert_eq!(report.scores.content, NEUTRAL_MATCH_SCORE);
        }
    }
}
