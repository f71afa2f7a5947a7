use rayon::prelude::*;

use crate::{
    config::EngineConfig,
    recommend::{candidate::Candidate, profile::TravelerProfile},
    utils::math::vector::ZeroSpVec,
    vectorizer::{analyzer::Analyzer, TFIDFVectorizer},
};

/// A candidate with its similarity score
pub type Scored<'a> = (&'a Candidate, f64);

/// Lexical similarity of each candidate to the traveler's aggregate profile
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    analyzer: Analyzer,
    max_features: usize,
}

impl From<&EngineConfig> for SimilarityScorer {
    fn from(config: &EngineConfig) -> Self {
        Self {
            analyzer: Analyzer::from(config),
            max_features: config.max_features,
        }
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl SimilarityScorer {
    /// Every candidate paired with its score in [0, 1], in input order.
    ///
    /// Profile and candidate documents share one fitted term space. The
    /// profile collapses to the unweighted mean of its trip vectors; each
    /// score is the cosine between a candidate and that mean.
    pub fn score<'a>(&self, profile: &TravelerProfile, candidates: &'a [Candidate]) -> Vec<Scored<'a>> {
        let profile_len = profile.len();
        let docs: Vec<&str> = profile
            .documents()
            .iter()
            .map(String::as_str)
            .chain(candidates.iter().map(|c| c.document.as_str()))
            .collect();

        let mut vectorizer: TFIDFVectorizer<f64> = TFIDFVectorizer::new(self.analyzer.clone(), self.max_features);
        let vectors = vectorizer.fit_transform(&docs);
        let (profile_vecs, candidate_vecs) = vectors.split_at(profile_len);

        let preference = ZeroSpVec::mean(profile_vecs, vectorizer.vocab_size());
        tracing::debug!(
            profile_docs = profile_len,
            candidates = candidates.len(),
            dims = vectorizer.vocab_size(),
            preference_nnz = preference.nnz(),
            "scoring candidates"
        );

        candidate_vecs
            .par_iter()
            .zip(candidates.par_iter())
            .map(|(v, candidate)| (candidate, v.cosine_similarity(&preference).clamp(0.0, 1.0)))
            .collect()
    }
}
