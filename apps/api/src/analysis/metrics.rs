//! Text metrics — word and sentence counts over the raw resume text.

/// Characters that end a sentence. Consecutive terminators count as one break.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Resume text plus the counts every downstream component needs.
///
/// Built once per analysis and never mutated. `lowered` is the case-folded
/// view all substring lookups run against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub text: String,
    pub lowered: String,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl ResumeDocument {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lowered: text.to_lowercase(),
            word_count: count_words(text),
            sentence_count: count_sentences(text),
        }
    }

    /// Case-insensitive substring test. `term` must already be lowercase.
    pub fn mentions(&self, term: &str) -> bool {
        self.lowered.contains(term)
    }

    /// Sentences per word. `None` when there are no words to divide by;
    /// callers read that as maximal density.
    pub fn sentence_density(&self) -> Option<f64> {
        if self.word_count == 0 {
            None
        } else {
            Some(self.sentence_count as f64 / self.word_count as f64)
        }
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of segments left after splitting on runs of `.`, `!` and `?`.
///
/// Empty segments count, including a trailing one after a final terminator,
/// so the result is always at least 1.
pub fn count_sentences(text: &str) -> usize {
    let mut breaks = 0;
    let mut in_run = false;
    for c in text.chars() {
        let is_terminator = SENTENCE_TERMINATORS.contains(&c);
        if is_terminator && !in_run {
            breaks += 1;
        }
        in_run = is_terminator;
    }
    breaks + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_sentence_and_no_words() {
        let doc = ResumeDocument::new("");
        assert_eq!(doc.word_count, 0);
        assert_eq!(doc.sentence_count, 1);
        assert!(doc.sentence_density().is_none());
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        assert_eq!(count_words("Led  a\tteam\nof 8"), 5);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_terminator_runs_count_once() {
        // "Wow", " Really", " Yes", "" -> 4 segments
        assert_eq!(count_sentences("Wow!!! Really?! Yes."), 4);
    }

    #[test]
    fn test_text_without_terminators_is_one_sentence() {
        assert_eq!(count_sentences("Senior engineer with ten years"), 1);
    }

    #[test]
    fn test_sentence_density() {
        let doc = ResumeDocument::new("Built APIs. Shipped features.");
        // 4 words, 3 segments
        let density = doc.sentence_density().unwrap();
        assert!((density - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let doc = ResumeDocument::new("Expert in PYTHON");
        assert!(doc.mentions("python"));
        assert!(!doc.mentions("java"));
    }
}
