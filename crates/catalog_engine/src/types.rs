use std::fmt;

use catalog_core::{FetchTicket, Genre, GenresResult, Movie, MoviesResult, PageRequest};
use serde::{Deserialize, Deserializer};

/// Movie as served by `/api/movies`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub url: String,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie {
            id: record.id,
            title: record.title,
            genres: record.genres,
            overview: record.overview,
            release_date: record.release_date,
            detail_url: record.url,
        }
    }
}

/// Genre as served by `/api/genres`: a `[name, count]` pair. The count may
/// arrive as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenreRecord(
    pub String,
    #[serde(deserialize_with = "count_from_number_or_text")] pub u32,
);

fn count_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(count) => Ok(count),
        Count::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Genre::new(record.0, record.1)
    }
}

/// Completion reported by the engine for one effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    MoviesFetched {
        ticket: FetchTicket,
        request: PageRequest,
        result: MoviesResult,
    },
    GenresFetched(GenresResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    EmptyBody,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::EmptyBody => write!(f, "empty body"),
            FailureKind::Decode => write!(f, "invalid json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SourceError {
    pub kind: FailureKind,
    pub message: String,
}

impl SourceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
