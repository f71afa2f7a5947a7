use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{config::EngineConfig, recommend::{candidate::Candidate, scorer::Scored}};

pub const COLD_START_REASON: &str = "No past trips yet - showing starter cities.";

/// One recommended city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub city: String,
    pub score: f64,
    pub reason: String,
}

/// country -> capped, ranked suggestions.
/// Countries appear in the order their first suggestion was selected.
pub type Suggestions = IndexMap<String, Vec<Suggestion>>;

/// Sorts, groups per country and caps
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    pub per_country_cap: usize,
    pub cold_start_score: f64,
}

impl From<&EngineConfig> for Ranker {
    fn from(config: &EngineConfig) -> Self {
        Self {
            per_country_cap: config.per_country_cap,
            cold_start_score: config.cold_start_score,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl Ranker {
    /// Top `per_country_cap` candidates per country by descending score.
    /// Equal scores keep generation order.
    pub fn rank(&self, scored: &[Scored<'_>]) -> Suggestions {
        let mut order: Vec<&Scored<'_>> = scored.iter().collect();
        // stable
        order.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut out = Suggestions::new();
        for &(candidate, score) in order {
            self.push_capped(&mut out, candidate, score, match_reason(score));
        }
        out
    }

    /// No history: every candidate gets the placeholder score, emission order kept
    pub fn cold_start(&self, candidates: &[Candidate]) -> Suggestions {
        let mut out = Suggestions::new();
        for candidate in candidates {
            self.push_capped(&mut out, candidate, self.cold_start_score, COLD_START_REASON.to_string());
        }
        out
    }

    fn push_capped(&self, out: &mut Suggestions, candidate: &Candidate, score: f64, reason: String) {
        let bucket = out.entry(candidate.country.clone()).or_default();
        if bucket.len() >= self.per_country_cap {
            return;
        }
        bucket.push(Suggestion {
            city: candidate.city.clone(),
            score,
            reason,
        });
    }
}

pub fn match_reason(score: f64) -> String {
    format!("Matches your travel profile (score {score:.2}).")
}
