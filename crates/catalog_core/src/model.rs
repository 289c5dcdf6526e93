/// Name of the client-side genre that stands for "no filter".
pub const ALL_GENRE_NAME: &str = "All";

/// First page index of every genre selection.
pub const INITIAL_PAGE: u32 = 0;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A genre as offered by the filter bar. Equality for selection purposes is by
/// name only; see [`Genre::same_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub count: u32,
}

impl Genre {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// The synthetic "All" genre carrying an aggregate count.
    pub fn all(count: u32) -> Self {
        Self::new(ALL_GENRE_NAME, count)
    }

    pub fn is_all(&self) -> bool {
        self.name == ALL_GENRE_NAME
    }

    pub fn same_selection(&self, other: &Genre) -> bool {
        self.name == other.name
    }

    /// Filter value sent upstream; `None` for "All".
    pub fn filter(&self) -> Option<String> {
        if self.is_all() {
            None
        } else {
            Some(self.name.clone())
        }
    }
}

/// Hard-coded genres shown when the real list is unavailable.
pub fn fallback_genres() -> Vec<Genre> {
    vec![
        Genre::all(10_000),
        Genre::new("Drama", 1_000),
        Genre::new("Action", 2_000),
        Genre::new("Comedy", 3_000),
        Genre::new("Adventure", 4_000),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub genres: Vec<String>,
    pub overview: String,
    pub release_date: String,
    pub detail_url: String,
}

/// One logical fetch: a page index under a genre filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u32,
    pub genre_filter: Option<String>,
}

impl PageRequest {
    pub fn new(page: u32, genre: &Genre) -> Self {
        Self {
            page,
            genre_filter: genre.filter(),
        }
    }

    /// Item offset of this page for the given page size.
    pub fn offset(&self, page_size: u32) -> u64 {
        u64::from(self.page) * u64::from(page_size)
    }
}

/// Generation tag attached to every issued movie fetch.
pub type FetchTicket = u64;
