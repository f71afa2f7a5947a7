use indexmap::IndexMap;
use num::{Float, NumCast};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

/// Weighting strategy of the shared term space
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF weight per vocabulary dimension
    /// # Arguments
    /// * `corpus` - statistics of the fitted documents
    /// * `vocabulary` - kept terms, in dimension order
    fn idf_vec<'a>(corpus: &Corpus, vocabulary: impl Iterator<Item = &'a str>) -> Vec<N>;

    /// TF-IDF vector of one document in the shared space.
    /// Terms outside `vocabulary` are ignored.
    fn tf_idf_vec(freq: &TermFrequency, vocabulary: &IndexMap<Box<str>, usize>, idf: &[N]) -> ZeroSpVec<N>;
}

/// Default TF-IDF engine
/// - tf: raw in-document count
/// - idf: ln((1 + n) / (1 + df)) + 1 (smoothed, never zero)
/// - rows scaled to unit L2 length
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec<'a>(corpus: &Corpus, vocabulary: impl Iterator<Item = &'a str>) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        vocabulary
            .map(|term| {
                let doc_freq = corpus.get_term_count(term) as f64;
                let idf = ((1.0 + doc_num) / (1.0 + doc_freq)).ln() + 1.0;
                <N as NumCast>::from(idf).unwrap_or_else(N::one)
            })
            .collect()
    }

    fn tf_idf_vec(freq: &TermFrequency, vocabulary: &IndexMap<Box<str>, usize>, idf: &[N]) -> ZeroSpVec<N> {
        let mut inds = Vec::with_capacity(freq.term_num());
        let mut vals = Vec::with_capacity(freq.term_num());
        for (term, count) in freq.iter() {
            if let Some(&dim) = vocabulary.get(term) {
                let tf = <N as NumCast>::from(count).unwrap_or_else(N::zero);
                inds.push(dim as u32);
                vals.push(tf * idf[dim]);
            }
        }
        let mut vec = ZeroSpVec::from_unsorted(vocabulary.len(), inds, vals);
        vec.normalize_l2();
        vec
    }
}
