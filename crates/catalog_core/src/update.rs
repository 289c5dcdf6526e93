use crate::view_model::{project_movies, MoviesUiState};
use crate::{AppState, ApplyOutcome, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let mut effects = Vec::with_capacity(2);
            if state.genres_mut().start() {
                state.mark_dirty();
                effects.push(Effect::FetchGenres);
            }
            if let Some(fetch) = state.pagination_mut().start() {
                state.set_movies_view(MoviesUiState::Loading);
                effects.push(fetch.into());
            }
            effects
        }
        Msg::GenreSelected(genre) => match state.pagination_mut().select_genre(genre) {
            Some(fetch) => {
                state.set_movies_view(MoviesUiState::Loading);
                vec![fetch.into()]
            }
            None => Vec::new(),
        },
        Msg::LoadMoreRequested => match state.pagination_mut().request_next_page() {
            Some(fetch) => {
                state.mark_dirty();
                vec![fetch.into()]
            }
            None => Vec::new(),
        },
        Msg::RetryRequested => match state.pagination_mut().retry() {
            Some(fetch) => {
                state.set_movies_view(MoviesUiState::Loading);
                vec![fetch.into()]
            }
            None => Vec::new(),
        },
        Msg::MoviesLoaded {
            ticket,
            request,
            result,
        } => {
            match state.pagination_mut().apply(ticket, &request, &result) {
                ApplyOutcome::Stale => {}
                ApplyOutcome::Replaced | ApplyOutcome::Failed => {
                    state.set_movies_view(project_movies(&result));
                }
                ApplyOutcome::Appended => {
                    let merged = state.take_movies_view().append(project_movies(&result));
                    state.set_movies_view(merged);
                }
            }
            Vec::new()
        }
        Msg::GenresLoaded(result) => {
            if state.genres_mut().apply(result) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}
