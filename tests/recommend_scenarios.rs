use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use trip_suggest::{Catalog, CatalogCache, EngineConfig, RecommendError, Recommender, TravelerProfile, TravelerState, TripDraft};

fn spain_catalog() -> Catalog {
    Catalog::from_entries([("Spain", vec!["Granada", "Madrid", "Seville", "Valencia"])])
}

#[test]
fn granada_and_seville_beat_madrid_and_valencia() {
    let profile = TravelerProfile::from_documents([
        "Spain Granada Seville tapas friends",
        "Spain Barcelona art solo",
    ]);
    let rec = Recommender::default()
        .recommend_for_profile(&profile, &["Spain"], &spain_catalog())
        .unwrap();
    let spain = &rec.suggestions["Spain"];
    let score = |city: &str| spain.iter().find(|s| s.city == city).map(|s| s.score).unwrap();
    for liked in ["Granada", "Seville"] {
        for other in ["Madrid", "Valencia"] {
            assert!(score(liked) >= score(other), "{liked} vs {other}");
        }
    }
    let top: Vec<&str> = spain.iter().take(2).map(|s| s.city.as_str()).collect();
    assert!(top.contains(&"Granada") && top.contains(&"Seville"));
    assert!(spain[0].reason.starts_with("Matches your travel profile (score "));
}

#[test]
fn unknown_planned_country_is_empty_success_with_note() {
    let rec = Recommender::default()
        .recommend(&[], &["Nowhereland"], &spain_catalog())
        .unwrap();
    assert!(rec.suggestions.is_empty());
    assert!(rec.note.is_some());
}

#[test]
fn empty_planned_list_is_empty_success() {
    let planned: Vec<String> = Vec::new();
    let rec = Recommender::default().recommend(&[], &planned, &spain_catalog()).unwrap();
    assert!(rec.suggestions.is_empty());
}

#[test]
fn empty_catalog_is_unavailable_with_plans() {
    let err = Recommender::default()
        .recommend(&[], &["Spain"], &Catalog::new())
        .unwrap_err();
    assert!(matches!(err, RecommendError::CatalogUnavailable { .. }));
    assert!(err.user_message().contains("Catalog missing or empty"));
}

#[test]
fn state_file_to_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("country_cities.json");
    std::fs::write(
        &catalog_path,
        r#"{"Italy": ["Venice", "Rome", "Florence", "Milan"], "Spain": ["Granada"]}"#,
    )
    .unwrap();

    let mut state = TravelerState::new();
    state.set_lists(Vec::<String>::new(), ["Italy", "Spain"]);
    state
        .add_trip_at(
            TripDraft::new("Spain").cities(["Granada"]).notes("florence style gelato"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();
    // the trip moved Spain out of planned
    assert_eq!(state.planned, vec!["Italy"]);

    let round_trip = TravelerState::from_json_str(&serde_json::to_string(&state).unwrap()).unwrap();
    assert_eq!(round_trip, state);

    let catalog = CatalogCache::new(&catalog_path).get().unwrap();
    let rec = Recommender::default()
        .recommend(&round_trip.trips_newest_first(), &round_trip.planned, &catalog)
        .unwrap();
    assert_eq!(rec.suggestions.keys().collect::<Vec<_>>(), vec!["Italy"]);
    assert_eq!(rec.suggestions["Italy"][0].city, "Florence");
}

#[test]
fn config_file_changes_cap_and_cold_score() {
    let config = EngineConfig::from_toml_str("per_country_cap = 2\ncold_start_score = 0.25").unwrap();
    let rec = Recommender::new(config)
        .unwrap()
        .recommend(&[], &["Spain"], &spain_catalog())
        .unwrap();
    let spain = &rec.suggestions["Spain"];
    assert_eq!(spain.len(), 2);
    assert!(spain.iter().all(|s| s.score == 0.25));
}

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "beach", "museum", "tapas", "hiking", "granada", "rome", "lisbon", "wine", "friends", "solo",
        "spain", "italy", "portugal", "castle", "market",
    ])
    .prop_map(str::to_string)
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..8).prop_map(|w| w.join(" "))
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Spain", "Italy", "Portugal"]),
            prop::collection::vec(word(), 1..20),
        ),
        1..4,
    )
    .prop_map(|entries| Catalog::from_entries(entries))
}

proptest! {
    #[test]
    fn lists_are_capped_sorted_and_bounded(
        docs in prop::collection::vec(document(), 1..5),
        catalog in catalog_strategy(),
    ) {
        let profile = TravelerProfile::from_documents(&docs);
        let planned = ["Spain", "Italy", "Portugal"];
        let rec = Recommender::default().recommend_for_profile(&profile, &planned, &catalog).unwrap();
        for list in rec.suggestions.values() {
            prop_assert!(!list.is_empty());
            prop_assert!(list.len() <= 8);
            prop_assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
            prop_assert!(list.iter().all(|s| (0.0..=1.0).contains(&s.score)));
        }
    }

    #[test]
    fn cold_start_scores_are_constant(catalog in catalog_strategy()) {
        let rec = Recommender::default()
            .recommend_for_profile(&TravelerProfile::default(), &["Spain", "Italy", "Portugal"], &catalog)
            .unwrap();
        prop_assert!(rec.suggestions.values().flatten().all(|s| s.score == 0.10));
    }

    #[test]
    fn identical_inputs_identical_output(
        docs in prop::collection::vec(document(), 0..4),
        catalog in catalog_strategy(),
    ) {
        let profile = TravelerProfile::from_documents(&docs);
        let planned = ["Portugal", "Spain", "Italy"];
        let engine = Recommender::default();
        let a = engine.recommend_for_profile(&profile, &planned, &catalog).unwrap();
        let b = engine.recommend_for_profile(&profile, &planned, &catalog).unwrap();
        prop_assert_eq!(a, b);
    }
}
