pub mod analyzer;
pub mod corpus;
pub mod stop_words;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use indexmap::IndexMap;
use num::Float;
use rayon::prelude::*;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{analyzer::Analyzer, corpus::Corpus, term::TermFrequency, tfidf::{DefaultTFIDFEngine, TFIDFEngine}}};

/// Fits a shared term space over a batch of documents and projects every
/// document into it.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: vector element type (f32, f64)
/// - `E`: TF-IDF calculation engine (e.g. `DefaultTFIDFEngine`)
///
/// The vectorizer is built per batch; refitting replaces the vocabulary.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    pub analyzer: Analyzer,
    /// vocabulary cap
    pub max_features: usize,
    /// term -> dimension, dimensions in lexicographic term order
    vocabulary: IndexMap<Box<str>, usize>,
    /// IDF weight per dimension
    idf_vec: Vec<N>,
    _marker: PhantomData<E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn new(analyzer: Analyzer, max_features: usize) -> Self {
        Self {
            analyzer,
            max_features,
            vocabulary: IndexMap::new(),
            idf_vec: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Fit the term space over `docs` and return one unit-length vector per
    /// document, in input order.
    pub fn fit_transform<S>(&mut self, docs: &[S]) -> Vec<ZeroSpVec<N>>
    where
        S: AsRef<str> + Sync,
    {
        let analyzer = &self.analyzer;
        let freqs: Vec<TermFrequency> = docs.par_iter().map(|d| analyzer.analyze(d.as_ref())).collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }

        self.vocabulary = corpus
            .top_terms(self.max_features)
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (Box::<str>::from(term), dim))
            .collect();
        self.idf_vec = E::idf_vec(&corpus, self.vocabulary.keys().map(|k| &**k));

        tracing::debug!(
            docs = docs.len(),
            terms = corpus.vocab_size(),
            kept = self.vocabulary.len(),
            "fitted term space"
        );

        let vocabulary = &self.vocabulary;
        let idf = &self.idf_vec;
        freqs.par_iter().map(|freq| E::tf_idf_vec(freq, vocabulary, idf)).collect()
    }

    /// Project a new document into the fitted space
    pub fn transform(&self, doc: &str) -> ZeroSpVec<N> {
        E::tf_idf_vec(&self.analyzer.analyze(doc), &self.vocabulary, &self.idf_vec)
    }

    /// Dimension of the fitted space
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// IDF weight of `term`, None when outside the fitted space
    pub fn idf(&self, term: &str) -> Option<N> {
        self.vocabulary.get(term).map(|&dim| self.idf_vec[dim])
    }

    /// Fitted terms in dimension order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(|k| &**k)
    }
}
