//! Loading the three input tables into a `Dataset`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations of the three input files
///
/// File names are resolved against `dir`.
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub dir: PathBuf,
    pub movies: String,
    pub critics: String,
    pub person: String,
}

impl DataFiles {
    pub fn new(
        dir: impl Into<PathBuf>,
        movies: impl Into<String>,
        critics: impl Into<String>,
        person: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            movies: movies.into(),
            critics: critics.into(),
            person: person.into(),
        }
    }

    pub fn movies_path(&self) -> PathBuf {
        self.dir.join(&self.movies)
    }

    pub fn critics_path(&self) -> PathBuf {
        self.dir.join(&self.critics)
    }

    pub fn person_path(&self) -> PathBuf {
        self.dir.join(&self.person)
    }
}

impl Dataset {
    /// Load and validate all three tables.
    ///
    /// Steps:
    /// 1. Parse critic ratings, person ratings and the catalog
    /// 2. Validate every present rating against `scale`
    pub fn load_from_files(files: &DataFiles, scale: RatingScale) -> Result<Self> {
        info!("Loading dataset from {:?}", files.dir);

        let critics = parser::parse_critic_ratings(&files.critics_path())?;
        let person = parser::parse_person_ratings(&files.person_path())?;
        let catalog = parser::parse_movie_catalog(&files.movies_path())?;

        info!(
            "Loaded {} critics over {} titles, {} person ratings for {}, {} catalog titles",
            critics.critics().len(),
            critics.len(),
            person.len(),
            person.name(),
            catalog.len()
        );

        let dataset = Dataset {
            critics,
            person,
            catalog,
        };
        dataset.validate(scale)?;
        debug!("Dataset validated against scale {}..={}", scale.min, scale.max);
        Ok(dataset)
    }

    /// Load from a directory using the given file names
    pub fn load_from_dir(
        dir: &Path,
        movies: &str,
        critics: &str,
        person: &str,
        scale: RatingScale,
    ) -> Result<Self> {
        Self::load_from_files(&DataFiles::new(dir, movies, critics, person), scale)
    }

    /// Check that every present rating lies within `scale`.
    pub fn validate(&self, scale: RatingScale) -> Result<()> {
        for (title, cells) in self.critics.rows() {
            for (critic, cell) in self.critics.critics().iter().zip(cells) {
                if let Some(rating) = *cell {
                    if !scale.contains(rating) {
                        return Err(DataLoadError::InvalidValue {
                            field: format!("rating of '{}' by {}", title, critic),
                            value: rating.to_string(),
                        });
                    }
                }
            }
        }

        for (title, cell) in self.person.iter() {
            if let Some(rating) = cell {
                if !scale.contains(rating) {
                    return Err(DataLoadError::InvalidValue {
                        field: format!("rating of '{}' by {}", title, self.person.name()),
                        value: rating.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
