use crate::{FetchTicket, MoviesFetch, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchMovies {
        ticket: FetchTicket,
        request: PageRequest,
        limit: u32,
    },
    FetchGenres,
}

impl From<MoviesFetch> for Effect {
    fn from(fetch: MoviesFetch) -> Self {
        Effect::FetchMovies {
            ticket: fetch.ticket,
            request: fetch.request,
            limit: fetch.limit,
        }
    }
}
