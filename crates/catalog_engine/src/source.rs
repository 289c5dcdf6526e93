use std::time::Duration;

use async_trait::async_trait;
use catalog_core::FetchResult;
use catalog_logging::{catalog_debug, catalog_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{FailureKind, GenreRecord, MovieRecord, SourceError};

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl SourceSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Remote catalog. One attempt per call; failures come back as
/// [`FetchResult::Failure`], never as panics or errors.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_movies(
        &self,
        limit: u32,
        offset: u64,
        genre: Option<&str>,
    ) -> FetchResult<MovieRecord>;

    async fn fetch_genres(&self) -> FetchResult<GenreRecord>;
}

/// Shares one pooled [`reqwest::Client`] across all requests.
#[derive(Debug, Clone)]
pub struct ReqwestDataSource {
    settings: SourceSettings,
    client: reqwest::Client,
}

impl ReqwestDataSource {
    pub fn new(settings: SourceSettings) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SourceError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, resource: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| SourceError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::new(FailureKind::InvalidUrl, "base url cannot have paths"))?
            .pop_if_empty()
            .extend(["api", resource]);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, SourceError> {
        catalog_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(SourceError::new(FailureKind::EmptyBody, "response had no body"));
        }
        let items: Option<Vec<T>> = serde_json::from_slice(&body)
            .map_err(|err| SourceError::new(FailureKind::Decode, err.to_string()))?;
        items.ok_or_else(|| SourceError::new(FailureKind::EmptyBody, "response body was null"))
    }

    async fn list_movies(
        &self,
        limit: u32,
        offset: u64,
        genre: Option<&str>,
    ) -> Result<Vec<MovieRecord>, SourceError> {
        let mut url = self.endpoint("movies")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            query.append_pair("from", &offset.to_string());
            if let Some(genre) = genre {
                query.append_pair("genre", genre);
            }
        }
        self.get_list(url).await
    }

    async fn list_genres(&self) -> Result<Vec<GenreRecord>, SourceError> {
        let url = self.endpoint("genres")?;
        self.get_list(url).await
    }
}

#[async_trait]
impl DataSource for ReqwestDataSource {
    async fn fetch_movies(
        &self,
        limit: u32,
        offset: u64,
        genre: Option<&str>,
    ) -> FetchResult<MovieRecord> {
        let result = self.list_movies(limit, offset, genre).await;
        into_fetch_result(
            result,
            &format!("movies, limit={limit}, from={offset}, genre={genre:?}"),
        )
    }

    async fn fetch_genres(&self) -> FetchResult<GenreRecord> {
        let result = self.list_genres().await;
        into_fetch_result(result, "genres")
    }
}

fn into_fetch_result<T>(result: Result<Vec<T>, SourceError>, what: &str) -> FetchResult<T> {
    match result {
        Ok(items) => FetchResult::success(items),
        Err(err) => {
            catalog_warn!("fetching {} failed: {}", what, err);
            FetchResult::failure(format!("Error fetching {what}: {err}"))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::new(FailureKind::Timeout, err.to_string());
    }
    SourceError::new(FailureKind::Network, err.to_string())
}
