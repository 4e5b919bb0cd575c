//! Core domain types for the critic/person/catalog tables.
//!
//! All three tables are immutable snapshots once loaded. They are built
//! through the `insert_*` methods (used by the parser and by tests) and then
//! only read.

use crate::error::{DataLoadError, Result};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Movie title, the join key shared by all three tables
pub type Title = String;

/// Critic identifier (a column header of the critic table)
pub type CriticId = String;

/// A rating that may be absent.
///
/// `None` means "not rated", which is not the same thing as a rating of zero.
pub type RatingCell = Option<f64>;

// =============================================================================
// Critic Ratings
// =============================================================================

/// Ratings of many critics for many titles.
///
/// Critic order is the column order of the source table and row order is the
/// order titles were inserted. Both orders are observable: critic order breaks
/// distance ties, row order is kept inside each genre of the output.
#[derive(Debug, Clone, Default)]
pub struct CriticRatings {
    critics: Vec<CriticId>,
    critic_index: HashMap<CriticId, usize>,
    titles: Vec<Title>,
    title_index: HashMap<Title, usize>,
    /// Row-major, one row per title, one cell per critic
    cells: Vec<Vec<RatingCell>>,
}

impl CriticRatings {
    /// Creates an empty table with the given critic columns.
    ///
    /// Fails with `DuplicateKey` if a critic identifier repeats.
    pub fn new(critics: Vec<CriticId>) -> Result<Self> {
        let mut critic_index = HashMap::with_capacity(critics.len());
        for (pos, critic) in critics.iter().enumerate() {
            if critic_index.insert(critic.clone(), pos).is_some() {
                return Err(DataLoadError::DuplicateKey {
                    table: "critic".to_string(),
                    key: critic.clone(),
                });
            }
        }

        Ok(Self {
            critics,
            critic_index,
            titles: Vec::new(),
            title_index: HashMap::new(),
            cells: Vec::new(),
        })
    }

    /// Appends one title row. `cells` is in critic column order.
    pub fn insert_row(&mut self, title: impl Into<Title>, cells: Vec<RatingCell>) -> Result<()> {
        let title = title.into();
        if cells.len() != self.critics.len() {
            return Err(DataLoadError::InvalidValue {
                field: "row width".to_string(),
                value: format!(
                    "{}: expected {} cells, found {}",
                    title,
                    self.critics.len(),
                    cells.len()
                ),
            });
        }
        if self.title_index.contains_key(&title) {
            return Err(DataLoadError::DuplicateKey {
                table: "critic ratings title".to_string(),
                key: title,
            });
        }

        self.title_index.insert(title.clone(), self.titles.len());
        self.titles.push(title);
        self.cells.push(cells);
        Ok(())
    }

    /// Critic identifiers in column order
    pub fn critics(&self) -> &[CriticId] {
        &self.critics
    }

    /// Titles in row order
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Column position of a critic, if present
    pub fn critic_position(&self, critic: &str) -> Option<usize> {
        self.critic_index.get(critic).copied()
    }

    /// One critic's column as `(title, cell)` pairs in row order
    pub fn ratings_for(&self, critic: &str) -> Option<impl Iterator<Item = (&Title, RatingCell)>> {
        let col = self.critic_position(critic)?;
        Some(self.titles.iter().zip(self.cells.iter().map(move |row| row[col])))
    }

    /// Rating of `title` by `critic`; `None` if either is unknown or the cell is blank
    pub fn rating(&self, title: &str, critic: &str) -> RatingCell {
        let row = *self.title_index.get(title)?;
        let col = self.critic_position(critic)?;
        self.cells[row][col]
    }

    /// Iterates rows as `(title, cells)` in row order
    pub fn rows(&self) -> impl Iterator<Item = (&Title, &[RatingCell])> {
        self.titles
            .iter()
            .zip(self.cells.iter().map(|row| row.as_slice()))
    }

    /// Number of titles
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

// =============================================================================
// Person Ratings
// =============================================================================

/// Ratings of a single person, keyed by title.
#[derive(Debug, Clone, Default)]
pub struct PersonRatings {
    /// Display name, taken from the rating column header
    name: String,
    ratings: HashMap<Title, RatingCell>,
}

impl PersonRatings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ratings: HashMap::new(),
        }
    }

    /// Records the person's cell for `title`. Titles must be unique.
    pub fn insert(&mut self, title: impl Into<Title>, rating: RatingCell) -> Result<()> {
        let title = title.into();
        if self.ratings.contains_key(&title) {
            return Err(DataLoadError::DuplicateKey {
                table: "person ratings title".to_string(),
                key: title,
            });
        }
        self.ratings.insert(title, rating);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's rating for `title`.
    ///
    /// A title missing from the table and a blank cell both yield `None`.
    pub fn rating(&self, title: &str) -> RatingCell {
        self.ratings.get(title).copied().flatten()
    }

    /// True when the person has a present rating for `title`
    pub fn has_rated(&self, title: &str) -> bool {
        self.rating(title).is_some()
    }

    /// Iterates `(title, cell)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Title, RatingCell)> {
        self.ratings.iter().map(|(title, cell)| (title, *cell))
    }

    /// Number of rows, including blank cells
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

// =============================================================================
// Movie Catalog
// =============================================================================

/// Catalog metadata the recommender consumes for one title
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Primary genre (the first-listed genre of the title)
    pub genre: String,
    pub year: Option<u16>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
}

/// Movie metadata keyed by title.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    entries: HashMap<Title, CatalogEntry>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry unless the title is already present.
    ///
    /// Returns `false` (and keeps the existing entry) on a duplicate title.
    pub fn insert(&mut self, title: impl Into<Title>, entry: CatalogEntry) -> bool {
        match self.entries.entry(title.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Closed range of legal rating values
///
/// The default range starts at 0 because a zero rating is a real rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
}

impl RatingScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self { min: 0.0, max: 10.0 }
    }
}

/// The three input tables of one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub critics: CriticRatings,
    pub person: PersonRatings,
    pub catalog: MovieCatalog,
}
