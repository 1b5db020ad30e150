use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stand-in description used when the caller leaves the job description blank.
pub const PLACEHOLDER_DESCRIPTION: &str =
    "[No description provided]\nYou can paste a full job listing here to improve feedback.";

/// Target role plus an optional job listing, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub role: String,
    pub description: String,
}

impl JobRequest {
    pub fn new(role: impl Into<String>, description: Option<String>) -> Self {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

        Self {
            role: role.into().trim().to_string(),
            description,
        }
    }

    pub fn has_description(&self) -> bool {
        self.description != PLACEHOLDER_DESCRIPTION
    }
}

/// Why a review request cannot be analyzed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotReady {
    #[error("resume text is empty; upload a PDF/TXT file or paste the resume")]
    MissingResume,
    #[error("job_role cannot be empty")]
    MissingRole,
}

/// JSON body accepted by the analyze and export endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// A request that passed the precondition check.
#[derive(Debug, Clone)]
pub struct ReadyReview {
    pub resume_text: String,
    pub job: JobRequest,
}

impl ReviewRequest {
    /// Checks that both a resume and a role are present. The resume is checked first.
    pub fn ready(self) -> Result<ReadyReview, NotReady> {
        if self.resume_text.trim().is_empty() {
            return Err(NotReady::MissingResume);
        }
        if self.job_role.trim().is_empty() {
            return Err(NotReady::MissingRole);
        }
        Ok(ReadyReview {
            job: JobRequest::new(self.job_role, self.job_description),
            resume_text: self.resume_text,
        })
    }
}
