//! This crate recommends unvisited cities inside a traveler's planned
//! countries, ranked by TF-IDF similarity to their past trips.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod state;
pub mod trip;
pub mod utils;
pub mod vectorizer;

/// Recommendation Engine
/// The top-level entry point of this crate.
/// Takes trip history, planned countries and the catalog as plain inputs and
/// returns suggestions grouped by country.
///
/// Flow:
/// - trips -> `TravelerProfile` (one document per trip)
/// - planned countries + `Catalog` -> `Candidate` list
/// - profile + candidates -> `SimilarityScorer` (shared TF-IDF space, cosine
///   against the mean profile vector)
/// - scores -> `Ranker` (descending, top-K per country, reason text)
///
/// Without history the scorer is skipped and every candidate receives the
/// configured cold-start score.
pub use recommend::{Recommendation, Recommender};

/// Suggestion output structures
/// - `Suggestion`: city, score and a human-readable reason
/// - `Suggestions`: country -> ranked, capped suggestion list
pub use recommend::ranker::{Ranker, Suggestion, Suggestions};

/// Engine building blocks, usable on their own
pub use recommend::{candidate::{generate_candidates, Candidate}, profile::TravelerProfile, scorer::{Scored, SimilarityScorer}};

/// Country -> city lookup table, plus a process-wide cache for the file form
pub use catalog::{Catalog, CatalogCache};

/// Engine tunables (TOML)
pub use config::EngineConfig;

/// Error type and result alias of this crate
pub use error::{RecommendError, Result};

/// Trip log and traveler state
pub use state::TravelerState;
pub use trip::{Trip, TripDraft};

/// TF-IDF Vectorizer
/// Fits a shared term space over a batch of documents.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: vector element type (f32, f64)
/// - `E`: TF-IDF calculation engine (e.g. `DefaultTFIDFEngine`)
pub use vectorizer::TFIDFVectorizer;

/// TF IDF Calculation Engine Trait
/// Plug a different weighting into `TFIDFVectorizer<N, E>` by implementing it.
/// `DefaultTFIDFEngine` uses raw counts, smoothed IDF and unit-length rows.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term Frequency structure
/// Counts term occurrences within one document.
pub use vectorizer::term::TermFrequency;

/// Corpus statistics (document frequency, total counts)
pub use vectorizer::corpus::Corpus;

/// Text to features: tokenizer, stop words, n-grams
pub use vectorizer::analyzer::Analyzer;

/// Sparse vector with zero as the implicit element
pub use utils::math::vector::ZeroSpVec;
