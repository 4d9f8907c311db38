// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use regex::Regex;

const SLUG_MAX_CHARS: usize = 100;

/// Lower-cases, drops everything but `[a-z0-9_]`, whitespace and hyphens,
/// collapses separator runs into single hyphens and trims them from the ends.
#[derive(Clone)]
pub struct RegexSlugGenerator {
    disallowed: Regex,
    separators: Regex,
}

impl RegexSlugGenerator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            disallowed: Regex::new(r"[^a-z0-9_\s-]")?,
            separators: Regex::new(r"[\s_-]+")?,
        })
    }
}

impl SlugGenerator for RegexSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        let stripped = self.disallowed.replace_all(&lowered, "");
        let hyphenated = self.separators.replace_all(&stripped, "-");
        hyphenated
            .trim_matches('-')
            .chars()
            .take(SLUG_MAX_CHARS)
            .collect()
    }
}
