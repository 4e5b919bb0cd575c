//! Values flowing through and out of the pipeline.

use data_loader::{CatalogEntry, MovieCatalog, PersonRatings, Title};
use serde::{Serialize, Serializer};

/// A title moving through the filter stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub title: Title,
    /// Mean rating of the selected critics, rounded to 2 decimals
    pub rating: f64,
    /// Catalog data, attached by the catalog join
    pub movie: Option<CatalogEntry>,
}

impl Candidate {
    pub fn new(title: impl Into<Title>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
            movie: None,
        }
    }

    /// Primary genre, once catalog data is attached
    pub fn genre(&self) -> Option<&str> {
        self.movie.as_ref().map(|m| m.genre.as_str())
    }
}

/// What the filters may consult besides the candidates themselves
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    pub person: &'a PersonRatings,
    pub catalog: &'a MovieCatalog,
}

impl<'a> RecommendationContext<'a> {
    pub fn new(person: &'a PersonRatings, catalog: &'a MovieCatalog) -> Self {
        Self { person, catalog }
    }
}

/// One recommended movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub title: Title,
    pub genre: String,
    pub rating: f64,
    #[serde(serialize_with = "blank_if_missing")]
    pub year: Option<u16>,
    #[serde(serialize_with = "blank_if_missing")]
    pub runtime: Option<u32>,
}

impl RecommendationRecord {
    /// Build a record from a candidate that went through the catalog join
    pub fn from_candidate(candidate: Candidate) -> Option<Self> {
        let movie = candidate.movie?;
        Some(Self {
            title: candidate.title,
            genre: movie.genre,
            rating: candidate.rating,
            year: movie.year,
            runtime: movie.runtime,
        })
    }

    /// Year as text, blank when unknown
    pub fn year_text(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Runtime as text, blank when unknown
    pub fn runtime_text(&self) -> String {
        self.runtime.map(|r| r.to_string()).unwrap_or_default()
    }
}

// Missing values serialize as "" rather than null
fn blank_if_missing<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_requires_catalog_data() {
        assert!(RecommendationRecord::from_candidate(Candidate::new("Alien", 8.0)).is_none());
    }

    #[test]
    fn test_missing_values_render_blank() {
        let record = RecommendationRecord {
            title: "Alien".to_string(),
            genre: "Horror".to_string(),
            rating: 8.5,
            year: Some(1979),
            runtime: None,
        };

        assert_eq!(record.year_text(), "1979");
        assert_eq!(record.runtime_text(), "");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["year"], 1979);
        assert_eq!(json["runtime"], "");
    }
}
