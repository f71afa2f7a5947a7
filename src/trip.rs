use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// One past trip of the traveler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u64,
    pub country: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// trimmed, deduplicated, sorted
    #[serde(default)]
    pub cities: Vec<String>,
    /// trimmed, deduplicated, sorted
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated trip as submitted by a client.
/// Dates are `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripDraft {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TripDraft {
    pub fn new<S: Into<String>>(country: S) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    pub fn companions<I, S>(mut self, companions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companions = companions.into_iter().map(Into::into).collect();
        self
    }

    pub fn notes<S: Into<String>>(mut self, notes: S) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn dates<S: Into<String>>(mut self, start: Option<S>, end: Option<S>) -> Self {
        self.start_date = start.map(Into::into);
        self.end_date = end.map(Into::into);
        self
    }

    /// Validate and normalize into a stored trip
    pub fn into_trip(self, id: u64, created_at: DateTime<Utc>) -> Result<Trip> {
        let country = self.country.trim().to_string();
        if country.is_empty() {
            return Err(RecommendError::invalid_input("country is required"));
        }
        let start_date = parse_date(self.start_date.as_deref())?;
        let end_date = parse_date(self.end_date.as_deref())?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(RecommendError::invalid_input("end_date is before start_date"));
            }
        }
        Ok(Trip {
            id,
            country,
            start_date,
            end_date,
            cities: uniq_sorted(self.cities),
            companions: uniq_sorted(self.companions),
            notes: self.notes.unwrap_or_default().trim().to_string(),
            created_at,
        })
    }
}

impl Trip {
    /// Re-apply the draft rules to a trip read back from storage
    pub fn normalized(self) -> Result<Trip> {
        let draft = TripDraft {
            country: self.country,
            start_date: None,
            end_date: None,
            cities: self.cities,
            companions: self.companions,
            notes: Some(self.notes),
        };
        let mut trip = draft.into_trip(self.id, self.created_at)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(RecommendError::invalid_input(format!(
                    "trip {}: end_date is before start_date",
                    self.id
                )));
            }
        }
        trip.start_date = self.start_date;
        trip.end_date = self.end_date;
        Ok(trip)
    }
}

/// Trim, drop empties, deduplicate and sort
pub fn uniq_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// `YYYY-MM-DD`; blank or absent is None
pub fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| RecommendError::invalid_input(format!("invalid date {s:?}: {e}"))),
    }
}
