//! # Data Loader Crate
//!
//! This crate loads the three tables a recommendation run works from:
//! critic ratings, one person's ratings, and the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Domain types (CriticRatings, PersonRatings, MovieCatalog, Dataset)
//! - **parser**: Parse the CSV tables into those types
//! - **dataset**: Load all three files and validate ratings
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataFiles, Dataset, RatingScale};
//!
//! let files = DataFiles::new("data", "IMDB.csv", "ratings.csv", "p8.csv");
//! let dataset = Dataset::load_from_files(&files, RatingScale::default())?;
//!
//! println!("{} rated {} titles", dataset.person.name(), dataset.person.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use dataset::DataFiles;
pub use types::{
    // Type aliases
    Title,
    CriticId,
    RatingCell,
    // Core types
    CriticRatings,
    PersonRatings,
    CatalogEntry,
    MovieCatalog,
    RatingScale,
    Dataset,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();

        assert!(dataset.critics.is_empty());
        assert!(dataset.person.is_empty());
        assert!(dataset.catalog.is_empty());
    }

    #[test]
    fn test_duplicate_critic_is_rejected() {
        let err = CriticRatings::new(vec!["Ann".to_string(), "Ann".to_string()]).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateKey { .. }));
    }

    #[test]
    fn test_insert_critic_rows() {
        let mut critics = CriticRatings::new(vec!["Ann".to_string(), "Bob".to_string()]).unwrap();
        critics.insert_row("Alien", vec![Some(8.0), None]).unwrap();

        assert_eq!(critics.len(), 1);
        assert_eq!(critics.critic_position("Bob"), Some(1));
        assert_eq!(critics.rating("Alien", "Ann"), Some(8.0));
        assert_eq!(critics.rating("Alien", "Bob"), None);
        assert_eq!(critics.rating("Heat", "Ann"), None);
        assert_eq!(critics.rating("Alien", "Cy"), None);

        // Wrong width and duplicate titles are both rejected
        assert!(critics.insert_row("Heat", vec![Some(1.0)]).is_err());
        assert!(critics.insert_row("Alien", vec![None, None]).is_err());
    }

    #[test]
    fn test_ratings_for_one_critic() {
        let mut critics = CriticRatings::new(vec!["Ann".to_string(), "Bob".to_string()]).unwrap();
        critics.insert_row("Alien", vec![Some(8.0), None]).unwrap();
        critics.insert_row("Heat", vec![None, Some(6.0)]).unwrap();

        let bob: Vec<(&Title, RatingCell)> = critics.ratings_for("Bob").unwrap().collect();
        assert_eq!(bob.len(), 2);
        assert_eq!((bob[0].0.as_str(), bob[0].1), ("Alien", None));
        assert_eq!((bob[1].0.as_str(), bob[1].1), ("Heat", Some(6.0)));

        assert!(critics.ratings_for("Cy").is_none());
    }

    #[test]
    fn test_default_scale_accepts_zero() {
        let scale = RatingScale::default();
        assert!(scale.contains(0.0));
        assert!(scale.contains(10.0));
        assert!(!scale.contains(10.5));
    }

    #[test]
    fn test_blank_person_rating_is_unrated() {
        let mut person = PersonRatings::new("Joann");
        person.insert("Alien", Some(0.0)).unwrap();
        person.insert("Heat", None).unwrap();

        // Zero is a rating, a blank cell is not
        assert!(person.has_rated("Alien"));
        assert!(!person.has_rated("Heat"));
        assert_eq!(person.rating("Alien"), Some(0.0));
    }

    #[test]
    fn test_catalog_keeps_first_duplicate() {
        let mut catalog = MovieCatalog::new();
        let first = CatalogEntry {
            genre: "Horror".to_string(),
            year: Some(1979),
            runtime: None,
        };
        let second = CatalogEntry {
            genre: "Action".to_string(),
            year: Some(1986),
            runtime: None,
        };

        assert!(catalog.insert("Alien", first.clone()));
        assert!(!catalog.insert("Alien", second));
        assert_eq!(catalog.get("Alien"), Some(&first));
    }
}
