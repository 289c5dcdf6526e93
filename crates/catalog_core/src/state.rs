use crate::view_model::{project_genres, AppViewModel, MoviesUiState};
use crate::{GenreController, PaginationController, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pagination: PaginationController,
    genres: GenreController,
    movies_view: MoviesUiState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            pagination: PaginationController::new(page_size),
            genres: GenreController::new(),
            movies_view: MoviesUiState::Loading,
            dirty: false,
        }
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn genres(&self) -> &GenreController {
        &self.genres
    }

    pub fn view(&self) -> AppViewModel {
        let movies = self.movies_view.clone().with_paging(
            self.pagination.is_loading_more(),
            self.pagination.has_more(),
        );
        let genres = self
            .genres
            .result()
            .map(project_genres)
            .unwrap_or_default();
        AppViewModel {
            movies,
            genres,
            selected_genre: self.pagination.selected_genre().clone(),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn pagination_mut(&mut self) -> &mut PaginationController {
        &mut self.pagination
    }

    pub(crate) fn genres_mut(&mut self) -> &mut GenreController {
        &mut self.genres
    }

    pub(crate) fn set_movies_view(&mut self, view: MoviesUiState) {
        self.movies_view = view;
        self.dirty = true;
    }

    pub(crate) fn take_movies_view(&mut self) -> MoviesUiState {
        std::mem::take(&mut self.movies_view)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
