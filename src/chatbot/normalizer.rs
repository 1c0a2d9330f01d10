use super::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("word regex is valid"));

/// Lower-cases `text` and splits it into word tokens.
///
/// Punctuation and whitespace act as separators; tokens made only of punctuation
/// never appear in the output.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenizes `query` and drops every stopword, keeping input order.
///
/// An empty result means the query carried no keyword at all.
pub fn normalize(query: &str, stopwords: &StopwordSet) -> Vec<String> {
    tokenize(query)
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}
