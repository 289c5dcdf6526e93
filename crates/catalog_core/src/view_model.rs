//! Presentation state derived from domain results. Everything here is pure.

use crate::{
    fallback_genres, with_all_genre, DomainResult, Genre, GenresResult, Movie, MoviesResult,
};

/// The only error text ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str = "There was an error.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub genres: Vec<String>,
    pub url: String,
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone(),
            genres: movie.genres.clone(),
            url: movie.detail_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MoviesUiState {
    #[default]
    Loading,
    Content {
        rows: Vec<MovieRow>,
        /// A further page is being fetched; show the loading row.
        loading_more: bool,
        /// More pages may exist.
        has_more: bool,
    },
    Error {
        message: String,
    },
}

impl MoviesUiState {
    pub fn content(rows: Vec<MovieRow>) -> Self {
        MoviesUiState::Content {
            rows,
            loading_more: false,
            has_more: true,
        }
    }

    /// Appends the rows of `next` to existing content. Non-content `next`
    /// states replace `self`.
    pub fn append(self, next: MoviesUiState) -> MoviesUiState {
        match (self, next) {
            (
                MoviesUiState::Content {
                    mut rows,
                    loading_more,
                    has_more,
                },
                MoviesUiState::Content { rows: more, .. },
            ) => {
                rows.extend(more);
                MoviesUiState::Content {
                    rows,
                    loading_more,
                    has_more,
                }
            }
            (_, next) => next,
        }
    }

    pub fn with_paging(self, loading: bool, more: bool) -> MoviesUiState {
        match self {
            MoviesUiState::Content { rows, .. } => MoviesUiState::Content {
                rows,
                loading_more: loading,
                has_more: more,
            },
            other => other,
        }
    }

    pub fn rows(&self) -> &[MovieRow] {
        match self {
            MoviesUiState::Content { rows, .. } => rows,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenresUiState {
    Content { genres: Vec<Genre> },
    Error { fallback_genres: Vec<Genre> },
}

impl Default for GenresUiState {
    fn default() -> Self {
        GenresUiState::Content { genres: Vec::new() }
    }
}

impl GenresUiState {
    pub fn genres(&self) -> &[Genre] {
        match self {
            GenresUiState::Content { genres } => genres,
            GenresUiState::Error { fallback_genres } => fallback_genres,
        }
    }
}

pub fn project_movies(result: &MoviesResult) -> MoviesUiState {
    match result {
        DomainResult::Success { items } => {
            MoviesUiState::content(items.iter().map(MovieRow::from).collect())
        }
        DomainResult::Error { .. } => MoviesUiState::Error {
            message: GENERIC_ERROR_MESSAGE.to_string(),
        },
    }
}

/// An empty genre list is projected as an error so the fallback set is shown.
pub fn project_genres(result: &GenresResult) -> GenresUiState {
    let genres = match result {
        DomainResult::Success { items } => with_all_genre(items),
        DomainResult::Error { .. } => None,
    };
    match genres {
        Some(genres) => GenresUiState::Content { genres },
        None => GenresUiState::Error {
            fallback_genres: fallback_genres(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub movies: MoviesUiState,
    pub genres: GenresUiState,
    pub selected_genre: Genre,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            movies: MoviesUiState::default(),
            genres: GenresUiState::default(),
            selected_genre: Genre::all(0),
        }
    }
}
