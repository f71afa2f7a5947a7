use std::cmp::Reverse;

use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// Collection statistics of the fitted documents
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it
    pub term_counts: IndexMap<Box<str>, u64>,
    /// term -> total occurrences across all documents
    pub total_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.doc_num += 1;
        for (term, count) in doc.iter() {
            match self.term_counts.get_mut(term) {
                Some(df) => *df += 1,
                None => {
                    self.term_counts.insert(term.into(), 1);
                }
            }
            match self.total_counts.get_mut(term) {
                Some(total) => *total += count,
                None => {
                    self.total_counts.insert(term.into(), count);
                }
            }
        }
    }

    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Document frequency of `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Total occurrences of `term` across the corpus
    #[inline]
    pub fn get_total_count(&self, term: &str) -> u64 {
        self.total_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of unique terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Up to `limit` terms with the highest total occurrence,
    /// ties broken by term text ascending. Returned in lexicographic order.
    pub fn top_terms(&self, limit: usize) -> Vec<&str> {
        let mut terms: Vec<(&str, u64)> = self
            .total_counts
            .iter()
            .map(|(t, &c)| (&**t, c))
            .collect();
        if terms.len() > limit {
            terms.sort_by_key(|&(t, c)| (Reverse(c), t));
            terms.truncate(limit);
        }
        let mut kept: Vec<&str> = terms.into_iter().map(|(t, _)| t).collect();
        kept.sort_unstable();
        kept
    }
}
