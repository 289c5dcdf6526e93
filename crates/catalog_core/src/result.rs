use crate::{Genre, Movie};

/// Diagnostic text used when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of exactly one data source call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Success { items: Vec<T> },
    Failure { message: Option<String> },
}

impl<T> FetchResult<T> {
    pub fn success(items: Vec<T>) -> Self {
        Self::Success { items }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }
}

/// Tagged domain result consumed by the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainResult<T> {
    Success { items: Vec<T> },
    Error { message: String },
}

pub type MoviesResult = DomainResult<Movie>;
pub type GenresResult = DomainResult<Genre>;

impl<T> DomainResult<T> {
    /// Maps a raw fetch outcome into domain entities. Never fails.
    pub fn from_fetch<R>(raw: FetchResult<R>) -> Self
    where
        R: Into<T>,
    {
        match raw {
            FetchResult::Success { items } => DomainResult::Success {
                items: items.into_iter().map(Into::into).collect(),
            },
            FetchResult::Failure { message } => DomainResult::Error {
                message: message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            },
        }
    }
}

impl<T, R: Into<T>> From<FetchResult<R>> for DomainResult<T> {
    fn from(raw: FetchResult<R>) -> Self {
        DomainResult::from_fetch(raw)
    }
}
