//! Pagination controller: owns the selected genre and the page counter and
//! accumulates successive pages for the current selection.
//!
//! Every issued fetch is tagged with a [`FetchTicket`]. A completion is applied
//! only when its ticket and request still match the in-flight fetch; anything
//! else is stale and dropped without a state change.

use catalog_logging::{catalog_debug, catalog_warn};

use crate::{
    DomainResult, FetchTicket, Genre, Movie, MoviesResult, PageRequest, DEFAULT_PAGE_SIZE,
    INITIAL_PAGE,
};

/// Domain state of the movie stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MoviesState {
    /// No request issued yet.
    #[default]
    Idle,
    /// First page of a fresh selection is in flight.
    Loading,
    Content {
        items: Vec<Movie>,
    },
    Error {
        message: String,
    },
}

/// A movie fetch the controller wants executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviesFetch {
    pub ticket: FetchTicket,
    pub request: PageRequest,
    pub limit: u32,
}

/// How a completion was folded into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Stale,
    Replaced,
    Appended,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    selected: Genre,
    page: u32,
    page_size: u32,
    state: MoviesState,
    in_flight: Option<MoviesFetch>,
    last_ticket: FetchTicket,
    exhausted: bool,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationController {
    /// A zero page size is clamped to 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            selected: Genre::all(0),
            page: INITIAL_PAGE,
            page_size: page_size.max(1),
            state: MoviesState::Idle,
            in_flight: None,
            last_ticket: 0,
            exhausted: false,
        }
    }

    pub fn selected_genre(&self) -> &Genre {
        &self.selected
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> &MoviesState {
        &self.state
    }

    /// Accumulated movies of the current selection, in page order.
    pub fn items(&self) -> &[Movie] {
        match &self.state {
            MoviesState::Content { items } => items,
            _ => &[],
        }
    }

    pub fn in_flight(&self) -> Option<&MoviesFetch> {
        self.in_flight.as_ref()
    }

    /// True while a page after the first is being fetched.
    pub fn is_loading_more(&self) -> bool {
        matches!(self.state, MoviesState::Content { .. }) && self.in_flight.is_some()
    }

    /// False once a page came back empty.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn current_request(&self) -> PageRequest {
        PageRequest::new(self.page, &self.selected)
    }

    /// Issues the first page for the initial genre. No-op once started.
    pub fn start(&mut self) -> Option<MoviesFetch> {
        if self.state != MoviesState::Idle || self.in_flight.is_some() {
            return None;
        }
        Some(self.restart_selection())
    }

    pub fn select_genre(&mut self, genre: Genre) -> Option<MoviesFetch> {
        if self.selected.same_selection(&genre) {
            catalog_debug!("genre {} already selected", genre.name);
            return None;
        }
        if let Some(previous) = &self.in_flight {
            catalog_debug!(
                "superseding fetch ticket={} page={} genre={:?}",
                previous.ticket,
                previous.request.page,
                previous.request.genre_filter
            );
        }
        self.selected = genre;
        Some(self.restart_selection())
    }

    /// Advances to the next page. At most one fetch is outstanding per stream, so
    /// repeated calls while a page is loading do nothing.
    pub fn request_next_page(&mut self) -> Option<MoviesFetch> {
        if self.in_flight.is_some() {
            catalog_debug!("next page ignored, page {} still loading", self.page);
            return None;
        }
        if !matches!(self.state, MoviesState::Content { .. }) {
            return None;
        }
        if self.exhausted {
            catalog_debug!("next page ignored, list exhausted at page {}", self.page);
            return None;
        }
        self.page += 1;
        Some(self.issue())
    }

    /// Reloads the current selection from the first page after a failure.
    pub fn retry(&mut self) -> Option<MoviesFetch> {
        if matches!(self.state, MoviesState::Error { .. }) && self.in_flight.is_none() {
            Some(self.restart_selection())
        } else {
            None
        }
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        request: &PageRequest,
        result: &MoviesResult,
    ) -> ApplyOutcome {
        let current = match &self.in_flight {
            Some(fetch) if fetch.ticket == ticket && &fetch.request == request => fetch,
            _ => {
                catalog_debug!(
                    "dropping stale result ticket={} page={} genre={:?}",
                    ticket,
                    request.page,
                    request.genre_filter
                );
                return ApplyOutcome::Stale;
            }
        };
        if current.request != self.current_request() {
            catalog_debug!("dropping result for superseded combination ticket={}", ticket);
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            DomainResult::Success { items: page } => {
                if page.is_empty() {
                    self.exhausted = true;
                }
                if request.page == INITIAL_PAGE {
                    self.state = MoviesState::Content {
                        items: page.clone(),
                    };
                    ApplyOutcome::Replaced
                } else {
                    let mut items = match std::mem::take(&mut self.state) {
                        MoviesState::Content { items } => items,
                        _ => Vec::new(),
                    };
                    items.extend(page.iter().cloned());
                    self.state = MoviesState::Content { items };
                    ApplyOutcome::Appended
                }
            }
            DomainResult::Error { message } => {
                catalog_warn!(
                    "movie fetch failed page={} genre={:?}: {}",
                    request.page,
                    request.genre_filter,
                    message
                );
                self.state = MoviesState::Error {
                    message: message.clone(),
                };
                ApplyOutcome::Failed
            }
        }
    }

    fn restart_selection(&mut self) -> MoviesFetch {
        self.page = INITIAL_PAGE;
        self.exhausted = false;
        self.state = MoviesState::Loading;
        self.issue()
    }

    fn issue(&mut self) -> MoviesFetch {
        self.last_ticket += 1;
        let fetch = MoviesFetch {
            ticket: self.last_ticket,
            request: self.current_request(),
            limit: self.page_size,
        };
        catalog_debug!(
            "issuing fetch ticket={} page={} genre={:?}",
            fetch.ticket,
            fetch.request.page,
            fetch.request.genre_filter
        );
        self.in_flight = Some(fetch.clone());
        fetch
    }
}
