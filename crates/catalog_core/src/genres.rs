use catalog_logging::{catalog_debug, catalog_warn};

use crate::{DomainResult, Genre, GenresResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    NotRequested,
    Pending,
    Resolved(GenresResult),
}

/// Fetches the genre list once and keeps the outcome for projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenreController {
    phase: Phase,
}

impl GenreController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the single genre fetch should be issued.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotRequested {
            return false;
        }
        self.phase = Phase::Pending;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Records the genre outcome. Results arriving without a pending fetch are ignored.
    pub fn apply(&mut self, result: GenresResult) -> bool {
        if !self.is_pending() {
            catalog_debug!("ignoring genre result with no pending fetch");
            return false;
        }
        if let DomainResult::Error { message } = &result {
            catalog_warn!("genre fetch failed: {}", message);
        }
        self.phase = Phase::Resolved(result);
        true
    }

    pub fn result(&self) -> Option<&GenresResult> {
        match &self.phase {
            Phase::Resolved(result) => Some(result),
            _ => None,
        }
    }
}

/// Prepends the synthetic "All" genre whose count is the sum of `genres`.
/// Returns `None` for an empty list since it cannot back a filter bar.
pub fn with_all_genre(genres: &[Genre]) -> Option<Vec<Genre>> {
    if genres.is_empty() {
        return None;
    }
    let total = genres
        .iter()
        .fold(0u32, |acc, genre| acc.saturating_add(genre.count));
    let mut out = Vec::with_capacity(genres.len() + 1);
    out.push(Genre::all(total));
    out.extend(genres.iter().cloned());
    Some(out)
}
