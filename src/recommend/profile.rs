use crate::trip::Trip;

/// What the traveler likes, as one text document per past trip.
/// Built per request, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelerProfile {
    documents: Vec<String>,
}

impl TravelerProfile {
    /// One document per trip, in the given order. Trips with no text are dropped.
    pub fn from_trips(trips: &[Trip]) -> Self {
        let documents = trips
            .iter()
            .map(preference_document)
            .filter(|doc| !doc.is_empty())
            .collect();
        Self { documents }
    }

    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|d| d.as_ref().trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// No history: the cold-start case
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// country, cities, notes, companions joined by single spaces
pub fn preference_document(trip: &Trip) -> String {
    let cities = trip.cities.join(" ");
    let companions = trip.companions.join(" ");
    [trip.country.as_str(), cities.as_str(), trip.notes.as_str(), companions.as_str()]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::trip::TripDraft;

    fn trip(draft: TripDraft) -> Trip {
        draft.into_trip(1, Utc::now()).unwrap()
    }

    #[test]
    fn document_concatenates_fields_in_order() {
        let t = trip(
            TripDraft::new("Spain")
                .cities(["Seville", "Granada"])
                .notes("tapas")
                .companions(["friends"]),
        );
        assert_eq!(preference_document(&t), "Spain Granada Seville tapas friends");
    }

    #[test]
    fn missing_fields_leave_no_gaps() {
        let t = trip(TripDraft::new("Japan").companions(["Ken"]));
        assert_eq!(preference_document(&t), "Japan Ken");
    }

    #[test]
    fn empty_history_is_empty_profile() {
        assert!(TravelerProfile::from_trips(&[]).is_empty());
    }

    #[test]
    fn blank_documents_are_dropped() {
        let p = TravelerProfile::from_documents(["Spain Granada", "   ", ""]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.documents()[0], "Spain Granada");
    }
}
