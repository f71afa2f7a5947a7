pub mod candidate;
pub mod profile;
pub mod ranker;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    config::EngineConfig,
    error::Result,
    recommend::{candidate::generate_candidates, profile::TravelerProfile, ranker::{Ranker, Suggestions}, scorer::SimilarityScorer},
    trip::Trip,
};

pub const NO_CANDIDATES_NOTE: &str =
    "No candidates found for your planned countries. Add cities for them to the country catalog.";

/// Result of one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub suggestions: Suggestions,
    /// advisory message for an empty but valid result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Recommendation {
    fn empty_with_note() -> Self {
        Self {
            suggestions: Suggestions::new(),
            note: Some(NO_CANDIDATES_NOTE.to_string()),
        }
    }

    /// Total suggestions across all countries
    pub fn len(&self) -> usize {
        self.suggestions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Recommendation engine.
///
/// A pure function of its inputs: trip history, planned countries and the
/// catalog come in as parameters, a `Recommendation` goes out. Nothing is
/// cached between calls, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: EngineConfig,
}

impl Recommender {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Suggest unvisited cities in `planned` countries, ranked by similarity
    /// to `trips` (newest first; order does not change scores).
    ///
    /// # Errors
    /// `CatalogUnavailable` when `catalog` holds no entries, even if
    /// `planned` is empty.
    pub fn recommend<S>(&self, trips: &[Trip], planned: &[S], catalog: &Catalog) -> Result<Recommendation>
    where
        S: AsRef<str>,
    {
        let profile = TravelerProfile::from_trips(trips);
        self.recommend_for_profile(&profile, planned, catalog)
    }

    /// Same as [`Recommender::recommend`] with an already built profile
    pub fn recommend_for_profile<S>(
        &self,
        profile: &TravelerProfile,
        planned: &[S],
        catalog: &Catalog,
    ) -> Result<Recommendation>
    where
        S: AsRef<str>,
    {
        let candidates = generate_candidates(planned, catalog)?;
        if candidates.is_empty() {
            tracing::info!(planned = planned.len(), "no candidates for planned countries");
            return Ok(Recommendation::empty_with_note());
        }

        let ranker = Ranker::from(&self.config);
        let suggestions = if profile.is_empty() {
            tracing::info!(candidates = candidates.len(), "no trip history, cold start");
            ranker.cold_start(&candidates)
        } else {
            tracing::info!(
                profile_docs = profile.len(),
                candidates = candidates.len(),
                "scoring against travel profile"
            );
            let scored = SimilarityScorer::from(&self.config).score(profile, &candidates);
            ranker.rank(&scored)
        };

        Ok(Recommendation {
            suggestions,
            note: None,
        })
    }
}
