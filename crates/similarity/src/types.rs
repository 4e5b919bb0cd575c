//! Result types of critic selection.

use data_loader::CriticId;
use serde::Serialize;

/// How far one critic's ratings are from the person's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticDistance {
    pub critic: CriticId,
    /// Sum of squared rating differences over co-rated titles
    pub distance: f64,
    /// Number of titles both the critic and the person rated
    pub shared_titles: usize,
}

/// Critics chosen for a person, closest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedCritics(Vec<CriticId>);

impl SelectedCritics {
    pub fn new(critics: Vec<CriticId>) -> Self {
        Self(critics)
    }

    pub fn as_slice(&self) -> &[CriticId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CriticId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SelectedCritics {
    type Item = &'a CriticId;
    type IntoIter = std::slice::Iter<'a, CriticId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
