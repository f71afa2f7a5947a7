use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{error::{RecommendError, Result}, trip::{uniq_sorted, Trip, TripDraft}};

/// Everything known about one traveler: visited and planned countries plus
/// the trip log. Held in memory; storing it is the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelerState {
    #[serde(default)]
    pub visited: Vec<String>,
    #[serde(default)]
    pub planned: Vec<String>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl TravelerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON state document.
    /// Country lists and trips are normalized; a trip without country, with
    /// dates out of order or with a repeated id is `InvalidInput`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let mut state: TravelerState = serde_json::from_str(s)?;
        let visited = std::mem::take(&mut state.visited);
        let planned = std::mem::take(&mut state.planned);
        state.set_lists(visited, planned);

        let mut ids = IndexSet::with_capacity(state.trips.len());
        let trips = std::mem::take(&mut state.trips);
        for trip in trips {
            if !ids.insert(trip.id) {
                return Err(RecommendError::invalid_input(format!("duplicate trip id {}", trip.id)));
            }
            state.trips.push(trip.normalized()?);
        }
        Ok(state)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Replace both country lists (trimmed, deduplicated, sorted)
    pub fn set_lists<V, P, S, T>(&mut self, visited: V, planned: P)
    where
        V: IntoIterator<Item = S>,
        P: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.visited = uniq_sorted(visited);
        self.planned = uniq_sorted(planned);
    }

    pub fn add_trip(&mut self, draft: TripDraft) -> Result<u64> {
        self.add_trip_at(draft, Utc::now())
    }

    /// Store a trip. A country seen for the first time moves from planned
    /// to visited.
    pub fn add_trip_at(&mut self, draft: TripDraft, created_at: DateTime<Utc>) -> Result<u64> {
        let id = self.trips.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        let trip = draft.into_trip(id, created_at)?;
        if !self.visited.contains(&trip.country) {
            self.visited.push(trip.country.clone());
            self.visited.sort();
            self.planned.retain(|c| *c != trip.country);
        }
        tracing::debug!(id, country = %trip.country, "trip added");
        self.trips.push(trip);
        Ok(id)
    }

    pub fn remove_trip(&mut self, id: u64) -> Result<Trip> {
        let pos = self
            .trips
            .iter()
            .position(|t| t.id == id)
            .ok_or(RecommendError::TripNotFound { id })?;
        Ok(self.trips.remove(pos))
    }

    /// Trips ordered by creation time, newest first (ties: higher id first)
    pub fn trips_newest_first(&self) -> Vec<Trip> {
        let mut trips = self.trips.clone();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        trips
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn set_lists_normalizes() {
        let mut state = TravelerState::new();
        state.set_lists([" Spain", "Spain", ""], ["Japan", "Italy"]);
        assert_eq!(state.visited, vec!["Spain"]);
        assert_eq!(state.planned, vec!["Italy", "Japan"]);
    }

    #[test]
    fn first_trip_to_a_country_moves_it_to_visited() {
        let mut state = TravelerState::new();
        state.set_lists(Vec::<String>::new(), ["Italy", "Spain"]);
        let id = state.add_trip_at(TripDraft::new("Spain"), at(1)).unwrap();
        assert_eq!(id, 1);
        assert_eq!(state.visited, vec!["Spain"]);
        assert_eq!(state.planned, vec!["Italy"]);
    }

    #[test]
    fn ids_increase_and_removal_works() {
        let mut state = TravelerState::new();
        let a = state.add_trip_at(TripDraft::new("Spain"), at(1)).unwrap();
        let b = state.add_trip_at(TripDraft::new("Italy"), at(2)).unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(state.remove_trip(a).unwrap().country, "Spain");
        assert!(matches!(state.remove_trip(a), Err(RecommendError::TripNotFound { id: 1 })));
        assert_eq!(state.add_trip_at(TripDraft::new("Peru"), at(3)).unwrap(), 3);
    }

    #[test]
    fn invalid_trip_leaves_state_untouched() {
        let mut state = TravelerState::new();
        assert!(state.add_trip_at(TripDraft::new(""), at(1)).is_err());
        assert!(state.trips.is_empty());
        assert!(state.visited.is_empty());
    }

    #[test]
    fn trips_are_listed_newest_first() {
        let mut state = TravelerState::new();
        state.add_trip_at(TripDraft::new("Spain"), at(1)).unwrap();
        state.add_trip_at(TripDraft::new("Italy"), at(5)).unwrap();
        state.add_trip_at(TripDraft::new("Peru"), at(3)).unwrap();
        let order: Vec<String> = state.trips_newest_first().into_iter().map(|t| t.country).collect();
        assert_eq!(order, vec!["Italy", "Peru", "Spain"]);
    }

    #[test]
    fn json_state_rejects_non_list_planned() {
        assert!(matches!(
            TravelerState::from_json_str(r#"{"planned": "Spain"}"#),
            Err(RecommendError::Json { .. })
        ));
        let state = TravelerState::from_json_str(r#"{"planned": ["Spain ", "Italy", "Spain"]}"#).unwrap();
        assert_eq!(state.planned, vec!["Italy", "Spain"]);
        assert!(state.trips.is_empty());
    }

    const CREATED: &str = r#""created_at": "2024-05-01T10:00:00Z""#;

    #[test]
    fn json_state_normalizes_trip_names() {
        let json = format!(
            r#"{{"trips": [{{"id": 1, "country": " Spain ", "cities": [" Granada", "Granada", ""],
                "companions": ["Ana ", "Ana"], "notes": " tapas ", {CREATED}}}]}}"#
        );
        let state = TravelerState::from_json_str(&json).unwrap();
        let trip = &state.trips[0];
        assert_eq!(trip.country, "Spain");
        assert_eq!(trip.cities, vec!["Granada"]);
        assert_eq!(trip.companions, vec!["Ana"]);
        assert_eq!(trip.notes, "tapas");
    }

    #[test]
    fn json_state_rejects_blank_country() {
        let json = format!(r#"{{"trips": [{{"id": 1, "country": "   ", {CREATED}}}]}}"#);
        assert!(matches!(
            TravelerState::from_json_str(&json),
            Err(RecommendError::InvalidInput { .. })
        ));
    }

    #[test]
    fn json_state_rejects_dates_out_of_order() {
        let json = format!(
            r#"{{"trips": [{{"id": 1, "country": "Spain", "start_date": "2024-05-09",
                "end_date": "2024-05-01", {CREATED}}}]}}"#
        );
        assert!(matches!(
            TravelerState::from_json_str(&json),
            Err(RecommendError::InvalidInput { .. })
        ));
    }

    #[test]
    fn json_state_rejects_repeated_trip_ids() {
        let json = format!(
            r#"{{"trips": [{{"id": 1, "country": "Spain", {CREATED}}},
                {{"id": 1, "country": "Italy", {CREATED}}}]}}"#
        );
        assert!(matches!(
            TravelerState::from_json_str(&json),
            Err(RecommendError::InvalidInput { .. })
        ));
    }
}
