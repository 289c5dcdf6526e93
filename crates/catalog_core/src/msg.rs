use crate::{FetchTicket, Genre, GenresResult, MoviesResult, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Shell is ready; issue the initial genre and movie fetches.
    Started,
    /// User picked a genre in the filter bar.
    GenreSelected(Genre),
    /// Rendering layer reached the end of the list. May fire repeatedly.
    LoadMoreRequested,
    /// User asked to reload after an error.
    RetryRequested,
    /// Engine completion for a movie page.
    MoviesLoaded {
        ticket: FetchTicket,
        request: PageRequest,
        result: MoviesResult,
    },
    /// Engine completion for the genre list.
    GenresLoaded(GenresResult),
}
