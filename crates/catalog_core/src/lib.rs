//! Catalog core: pure pagination/genre state machine and view-model projection.
mod effect;
mod genres;
mod model;
mod msg;
mod pagination;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use genres::{with_all_genre, GenreController};
pub use model::{
    fallback_genres, FetchTicket, Genre, Movie, PageRequest, ALL_GENRE_NAME, DEFAULT_PAGE_SIZE,
    INITIAL_PAGE,
};
pub use msg::Msg;
pub use pagination::{ApplyOutcome, MoviesFetch, MoviesState, PaginationController};
pub use result::{DomainResult, FetchResult, GenresResult, MoviesResult, UNKNOWN_ERROR};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    project_genres, project_movies, AppViewModel, GenresUiState, MovieRow, MoviesUiState,
    GENERIC_ERROR_MESSAGE,
};
