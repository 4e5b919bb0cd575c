//! Integration tests for the pipeline.
//!
//! These run critic selection and aggregation together on small tables.

use data_loader::{CatalogEntry, CriticRatings, MovieCatalog, PersonRatings};
use pipeline::{recommend, round_rating, PipelineError, RecommendationRecord};
use similarity::{select_closest_critics, SelectedCritics};

fn entry(genre: &str, year: Option<u16>, runtime: Option<u32>) -> CatalogEntry {
    CatalogEntry {
        genre: genre.to_string(),
        year,
        runtime,
    }
}

fn create_test_setup() -> (CriticRatings, PersonRatings, MovieCatalog) {
    let critics: Vec<String> = ["A", "B", "C", "D"].iter().map(|c| c.to_string()).collect();
    let mut ratings = CriticRatings::new(critics).unwrap();

    // A and B match the person exactly on M1/M2, C is off by one, D far off
    ratings.insert_row("M1", vec![Some(7.0), Some(7.0), Some(8.0), Some(3.0)]).unwrap();
    ratings.insert_row("M2", vec![Some(5.0), Some(5.0), Some(5.0), Some(9.0)]).unwrap();
    ratings.insert_row("M3", vec![Some(8.0), Some(7.0), Some(9.0), Some(1.0)]).unwrap();
    ratings.insert_row("M4", vec![Some(9.0), None, Some(9.0), Some(1.0)]).unwrap();
    ratings.insert_row("M5", vec![None, Some(7.0), None, Some(10.0)]).unwrap();

    let mut person = PersonRatings::new("Joann");
    person.insert("M1", Some(7.0)).unwrap();
    person.insert("M2", Some(5.0)).unwrap();

    let mut catalog = MovieCatalog::new();
    catalog.insert("M1", entry("Drama", Some(2001), Some(100)));
    catalog.insert("M2", entry("Comedy", Some(2002), Some(95)));
    catalog.insert("M3", entry("Drama", Some(2003), Some(120)));
    catalog.insert("M4", entry("Drama", Some(2004), None));
    catalog.insert("M5", entry("Comedy", None, Some(88)));

    (ratings, person, catalog)
}

#[test]
fn test_end_to_end() {
    let (critics, person, catalog) = create_test_setup();

    let selected = select_closest_critics(&critics, &person).unwrap();
    assert_eq!(selected.as_slice(), ["A", "B", "C"]);

    let records = recommend(&critics, &selected, &person, &catalog).unwrap();

    assert_eq!(
        records,
        vec![
            RecommendationRecord {
                title: "M5".to_string(),
                genre: "Comedy".to_string(),
                rating: 7.0,
                year: None,
                runtime: Some(88),
            },
            RecommendationRecord {
                title: "M4".to_string(),
                genre: "Drama".to_string(),
                rating: 9.0,
                year: Some(2004),
                runtime: None,
            },
        ]
    );
    assert_eq!(records[0].year_text(), "");
    assert_eq!(records[1].runtime_text(), "");
}

#[test]
fn test_output_properties() {
    let (critics, person, catalog) = create_test_setup();
    let selected = select_closest_critics(&critics, &person).unwrap();
    let records = recommend(&critics, &selected, &person, &catalog).unwrap();

    // Nothing the person rated is recommended
    assert!(records.iter().all(|r| !person.has_rated(&r.title)));

    // Genres ascend
    assert!(records.windows(2).all(|w| w[0].genre <= w[1].genre));

    for record in &records {
        // Rating is the rounded mean of the selected critics' present ratings
        let present: Vec<f64> = selected
            .iter()
            .filter_map(|c| critics.rating(&record.title, c))
            .collect();
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        assert_eq!(record.rating, round_rating(mean));

        // and it is the maximum among unwatched, cataloged titles of its genre
        let genre_max = critics
            .titles()
            .iter()
            .filter(|t| !person.has_rated(t))
            .filter(|t| catalog.get(t).is_some_and(|e| e.genre == record.genre))
            .filter_map(|t| {
                let present: Vec<f64> =
                    selected.iter().filter_map(|c| critics.rating(t, c)).collect();
                (!present.is_empty())
                    .then(|| present.iter().sum::<f64>() / present.len() as f64)
            })
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(record.rating, round_rating(genre_max));
    }
}

#[test]
fn test_no_catalog_match_is_empty_not_error() {
    let (critics, person, _) = create_test_setup();
    let mut catalog = MovieCatalog::new();
    // only a watched title is cataloged
    catalog.insert("M1", entry("Drama", Some(2001), None));

    let selected = select_closest_critics(&critics, &person).unwrap();
    let records = recommend(&critics, &selected, &person, &catalog).unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_person_rating_never_enters_the_mean() {
    let (critics, mut person, catalog) = create_test_setup();
    // Rating M3 removes it from the output; M4 stays at the critics' mean
    person.insert("M3", Some(1.0)).unwrap();

    let selected = SelectedCritics::new(vec!["A".to_string(), "C".to_string()]);
    let records = recommend(&critics, &selected, &person, &catalog).unwrap();

    let drama: Vec<&RecommendationRecord> =
        records.iter().filter(|r| r.genre == "Drama").collect();
    assert_eq!(drama.len(), 1);
    assert_eq!(drama[0].title, "M4");
    assert_eq!(drama[0].rating, 9.0);
    // M5 has no rating from A or C
    assert!(records.iter().all(|r| r.title != "M5"));
}

#[test]
fn test_unknown_critic_selection() {
    let (critics, person, catalog) = create_test_setup();
    let selected = SelectedCritics::new(vec!["A".to_string(), "E".to_string()]);

    let err = recommend(&critics, &selected, &person, &catalog).unwrap_err();
    assert_eq!(
        err,
        PipelineError::InvalidCriticSelection {
            critic: "E".to_string()
        }
    );
}
