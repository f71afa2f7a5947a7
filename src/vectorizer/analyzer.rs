use crate::{config::EngineConfig, vectorizer::{stop_words::is_stop_word, term::TermFrequency}};

/// Turns raw text into the features of the term space:
/// lowercase word tokens (two or more word characters), stop words removed,
/// then every n-gram in `ngram_min..=ngram_max` over the surviving tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub english_stop_words: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            ngram_min: 1,
            ngram_max: 2,
            english_stop_words: true,
        }
    }
}

impl From<&EngineConfig> for Analyzer {
    fn from(config: &EngineConfig) -> Self {
        Self {
            ngram_min: config.ngram_min,
            ngram_max: config.ngram_max,
            english_stop_words: config.english_stop_words,
        }
    }
}

impl Analyzer {
    /// Word tokens of `text`, stop words already removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| w.chars().nth(1).is_some())
            .filter(|w| !(self.english_stop_words && is_stop_word(w)))
            .map(str::to_string)
            .collect()
    }

    /// All n-gram features of `text`, shortest n first
    pub fn features(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let mut out = Vec::new();
        for n in self.ngram_min..=self.ngram_max {
            if n == 0 || n > tokens.len() {
                continue;
            }
            if n == 1 {
                out.extend(tokens.iter().cloned());
            } else {
                out.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        out
    }

    pub fn analyze(&self, text: &str) -> TermFrequency {
        TermFrequency::from(self.features(text).as_slice())
    }
}
