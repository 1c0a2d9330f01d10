use std::collections::HashSet;

const SPANISH_STOPWORDS: &str = include_str!("stopwords_es.txt");

/// Filler words that say nothing about which appliance the user means.
pub const DOMAIN_STOPWORDS: &[&str] = &[
    "como", "ahorra", "ahorrar", "con", "la", "el", "los", "las", "un", "una", "que", "para",
];

/// Immutable set of lower-cased stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Spanish function words plus [`DOMAIN_STOPWORDS`].
    pub fn spanish() -> Self {
        SPANISH_STOPWORDS
            .lines()
            .chain(DOMAIN_STOPWORDS.iter().copied())
            .collect()
    }

    /// Adds statically configured entries; blank entries are ignored.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            extra
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::default().with_extra(iter)
    }
}
