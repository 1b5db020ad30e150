//! Plain-text export of an `AnalysisReport`.
//!
//! The layout is fixed; every byte comes from report fields so the same report
//! always renders to the same text.
//!
//! Quick-win buckets are titled `Formatting`, `Content` and `ATS Optimization`,
//! not the snake_case-derived `Ats_Optimization` of the legacy download. The
//! technical skills example ends on its last skill line with no trailing
//! indented blank line.

use std::fmt::Write;

use crate::analysis::report::AnalysisReport;

pub const EXPORT_FILE_NAME: &str = "resume_analysis_report.txt";

pub fn render_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    let scores = &report.scores;
    write!(
        out,
        "\nResume Analysis Report for {} Position\n\
         ============================================\n\
         \n\
         Overall Scores\n\
         -------------\n\
         Structure: {}%\n\
         Content: {}%\n\
         Clarity: {}%\n\
         Overall: {}%\n\
         \n\
         High-Impact Recommendations\n\
         -------------------------\n",
        report.job_role, scores.structure, scores.content, scores.clarity, scores.overall
    )?;

    for item in &report.recommendations.high_impact {
        write!(out, "\n{}\n", item.title)?;
        writeln!(out, "{}", "-".repeat(item.title.chars().count()))?;
        write!(out, "{}\n\n", item.description)?;
        out.push_str("Examples:\n");
        for pair in &item.examples {
            writeln!(out, "Before: {}", pair.before)?;
            write!(out, "After:  {}\n\n", pair.after)?;
        }
    }

    let technical = &report.recommendations.skill_optimization.technical;
    out.push_str("\nSkills Optimization\n==================\n");
    out.push_str("\nTechnical Skills Suggestions:\n");
    for suggestion in &technical.suggestions {
        writeln!(out, "• {suggestion}")?;
    }
    out.push_str("\nExample Technical Skills Format:\n");
    out.push_str(&technical.example);

    out.push_str("\n\nQuick Improvements\n=================\n");
    for (title, tips) in report.recommendations.quick_wins.buckets() {
        write!(out, "\n{title}:\n")?;
        for tip in tips {
            writeln!(out, "• {tip}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::analyze;

    #[test]
    fn test_header_and_scores_block() {
        let report = analyze("", "");
        let text = render_text_report(&report);
        let expected_head = "\nResume Analysis Report for  Position\n\
                             ============================================\n\n\
                             Overall Scores\n-------------\n\
                             Structure: 0%\nContent: 50%\nClarity: 20%\nOverall: 23%\n\n\
                             High-Impact Recommendations\n-------------------------\n";
        assert!(text.starts_with(expected_head), "got:\n{text}");
    }

    #[test]
    fn test_high_impact_item_layout() {
        let report = analyze("python", "Engineer");
        let text = render_text_report(&report);
        let block = "\n💡 Quantify Your Achievements\n\
                     ----------------------------\n\
                     Transform your achievements with specific metrics and outcomes\n\n\
                     Examples:\n\
                     Before: Improved system performance\n\
                     After:  Optimized database queries resulting in 40% faster response time and 30% reduced server load\n\n";
        assert!(text.contains(block), "got:\n{text}");
    }

    #[test]
    fn test_underline_counts_characters_not_bytes() {
        let report = analyze("", "Engineer");
        let text = render_text_report(&report);
        let title = &report.recommendations.high_impact[0].title;
        let underline = "-".repeat(title.chars().count());
        assert!(title.len() > title.chars().count());
        assert!(text.contains(&format!("{title}\n{underline}\n")));
    }

    #[test]
    fn test_closing_sections() {
        let report = analyze("", "Engineer");
        let text = render_text_report(&report);
        assert!(text.contains(
            "\nSkills Optimization\n==================\n\nTechnical Skills Suggestions:\n\
             • Create a dedicated 'Technical Skills' section at the top\n"
        ));
        assert!(text.contains("\nExample Technical Skills Format:\n\nTechnical Skills\n"));
        assert!(text.contains("\n\nQuick Improvements\n=================\n\nFormatting:\n• "));
        assert!(text.contains("\nATS Optimization:\n"));
        assert!(text.ends_with("• Use common file formats (PDF, DOCX)\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_text_report(&analyze("Led agile team", "Lead"));
        let b = render_text_report(&analyze("Led agile team", "Lead"));
        assert_eq!(a, b);
    }

    const EMPTY_ENGINEER_REPORT: &str = r#"
Resume Analysis Report for Engineer Position
============================================

Overall Scores
-------------
Structure: 0%
Content: 0%
Clarity: 20%
Overall: 6%

High-Impact Recommendations
-------------------------

💡 Quantify Your Achievements
----------------------------
Transform your achievements with specific metrics and outcomes

Examples:
Before: Improved system performance
After:  Optimized database queries resulting in 40% faster response time and 30% reduced server load

Before: Managed a team project
After:  Led a team of 8 developers to deliver a $2M project 2 weeks ahead of schedule


🔧 Technical Project Details
---------------------------
Showcase your technical depth with detailed project descriptions

Examples:
Before: Built a web application
After:  Architected and developed a scalable web platform using React/Node.js, handling 100K+ daily users

Before: Implemented database optimizations
After:  Redesigned database schema and implemented query optimization, reducing data retrieval time from 5s to 200ms


👥 Leadership & Collaboration
----------------------------
Highlight your team leadership and collaboration skills

Examples:
Before: Worked on team projects
After:  Mentored 4 junior developers, implemented agile practices, and increased team velocity by 50%

Before: Participated in code reviews
After:  Established code review guidelines and led bi-weekly technical knowledge sharing sessions


🎯 Job-Specific Alignment
------------------------
Tailor your experience to match job requirements

Examples:
Before: Worked with various programming languages
After:  Proficient in Python and Java, with 3+ years building REST APIs and microservices

Before: Familiar with cloud services
After:  Designed and deployed containerized applications on AWS using ECS, Lambda, and RDS


Skills Optimization
==================

Technical Skills Suggestions:
• Create a dedicated 'Technical Skills' section at the top
• Group skills by category (Languages, Frameworks, Tools, etc.)
• Highlight proficiency levels for key skills
• Add relevant certifications and training

Example Technical Skills Format:

Technical Skills
---------------
Languages: Python (Expert), Java (Advanced), JavaScript (Intermediate)
Frameworks: Django, Spring Boot, React.js
Cloud & DevOps: AWS (Certified), Docker, Kubernetes
Tools: Git, JIRA, Jenkins, Prometheus


Quick Improvements
=================

Formatting:
• Use consistent bullet point formatting throughout
• Ensure section headers are clearly visible
• Maintain consistent font and spacing
• Use bold for key achievements and metrics

Content:
• Add a compelling professional summary (3-4 lines)
• Include GitHub/portfolio/LinkedIn links
• List relevant certifications with dates
• Add technologies used in each project

ATS Optimization:
• Use standard section headers (Experience, Education, Skills)
• Include keywords from the job description
• Avoid tables and complex formatting
• Use common file formats (PDF, DOCX)
"#;

    #[test]
    fn test_full_report_matches_golden_text() {
        let text = render_text_report(&analyze("", "Engineer"));
        assert_eq!(text, EMPTY_ENGINEER_REPORT);
    }
}
