use indexmap::IndexSet;
use serde::Serialize;

use crate::{catalog::Catalog, error::Result};

/// An unvisited city inside a planned country, eligible for ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub country: String,
    pub city: String,
    /// "{country} {city}"
    pub document: String,
}

impl Candidate {
    pub fn new(country: &str, city: &str) -> Self {
        Self {
            country: country.to_string(),
            city: city.to_string(),
            document: format!("{country} {city}"),
        }
    }
}

/// Expand planned countries into (country, city) candidates.
///
/// Planned countries are visited in the given order (a repeated country
/// counts once), cities in catalog order. A country missing from the catalog
/// contributes nothing. An empty catalog is `CatalogUnavailable`.
pub fn generate_candidates<S>(planned: &[S], catalog: &Catalog) -> Result<Vec<Candidate>>
where
    S: AsRef<str>,
{
    catalog.ensure_available()?;
    let countries: IndexSet<&str> = planned.iter().map(|c| c.as_ref()).collect();
    let mut candidates = Vec::new();
    for country in countries {
        match catalog.cities(country) {
            Some(cities) => candidates.extend(cities.iter().map(|city| Candidate::new(country, city))),
            None => tracing::debug!(country, "planned country not in catalog"),
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;

    fn catalog() -> Catalog {
        Catalog::from_entries([
            ("Spain", vec!["Seville", "Granada"]),
            ("Portugal", vec!["Porto", "Lisbon"]),
        ])
    }

    #[test]
    fn follows_planned_order_then_catalog_order() {
        let got = generate_candidates(&["Portugal", "Spain"], &catalog()).unwrap();
        let pairs: Vec<(&str, &str)> = got.iter().map(|c| (c.country.as_str(), c.city.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("Portugal", "Lisbon"), ("Portugal", "Porto"), ("Spain", "Granada"), ("Spain", "Seville")]
        );
        assert_eq!(got[0].document, "Portugal Lisbon");
    }

    #[test]
    fn unknown_country_contributes_nothing() {
        assert!(generate_candidates(&["Nowhereland"], &catalog()).unwrap().is_empty());
    }

    #[test]
    fn no_planned_countries_is_not_an_error() {
        let planned: [&str; 0] = [];
        assert!(generate_candidates(&planned, &catalog()).unwrap().is_empty());
    }

    #[test]
    fn repeated_country_is_expanded_once() {
        assert_eq!(generate_candidates(&["Spain", "Spain"], &catalog()).unwrap().len(), 2);
    }

    #[test]
    fn empty_catalog_fails() {
        assert!(matches!(
            generate_candidates(&["Spain"], &Catalog::new()),
            Err(RecommendError::CatalogUnavailable { .. })
        ));
    }
}
