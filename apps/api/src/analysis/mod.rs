// Resume analysis engine.
// Pure and synchronous: every stage reads the resume text and static tables only.
// Order: metrics → skills/indicators → scoring → role match → recommendations → report.

pub mod export;
pub mod handlers;
pub mod indicators;
pub mod metrics;
pub mod recommendations;
pub mod report;
pub mod role_match;
pub mod scoring;
pub mod skills;
