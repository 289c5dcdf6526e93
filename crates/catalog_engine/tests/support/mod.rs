#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use catalog_core::{AppViewModel, FetchResult};
use catalog_engine::{CatalogSession, DataSource, GenreRecord, MovieRecord};
use tokio::sync::oneshot;

pub type MovieKey = (u64, Option<String>);

/// In-memory source with per-request scripted replies and optional gates that
/// hold a reply back until the test releases it.
#[derive(Default)]
pub struct ScriptedSource {
    movies: Mutex<HashMap<MovieKey, FetchResult<MovieRecord>>>,
    gates: Mutex<HashMap<MovieKey, oneshot::Receiver<()>>>,
    genres: Mutex<Option<FetchResult<GenreRecord>>>,
    calls: Mutex<Vec<(u32, u64, Option<String>)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self, offset: u64, genre: Option<&str>, result: FetchResult<MovieRecord>) {
        self.movies
            .lock()
            .unwrap()
            .insert((offset, genre.map(str::to_string)), result);
    }

    /// Holds the reply for this request until the returned sender fires.
    pub fn gate(&self, offset: u64, genre: Option<&str>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert((offset, genre.map(str::to_string)), rx);
        tx
    }

    pub fn genres(&self, result: FetchResult<GenreRecord>) {
        *self.genres.lock().unwrap() = Some(result);
    }

    pub fn movie_calls(&self) -> Vec<(u32, u64, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch_movies(
        &self,
        limit: u32,
        offset: u64,
        genre: Option<&str>,
    ) -> FetchResult<MovieRecord> {
        let key = (offset, genre.map(str::to_string));
        self.calls
            .lock()
            .unwrap()
            .push((limit, offset, key.1.clone()));
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.movies
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| FetchResult::success(Vec::new()))
    }

    async fn fetch_genres(&self) -> FetchResult<GenreRecord> {
        self.genres
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| FetchResult::success(Vec::new()))
    }
}

pub fn record(id: u64, genre: &str) -> MovieRecord {
    MovieRecord {
        id,
        title: format!("Movie {id}"),
        genres: vec![genre.to_string()],
        overview: String::new(),
        release_date: "2000-01-01".to_string(),
        tagline: String::new(),
        url: format!("https://example.com/movies/{id}"),
    }
}

pub fn page(ids: &[u64], genre: &str) -> FetchResult<MovieRecord> {
    FetchResult::success(ids.iter().map(|id| record(*id, genre)).collect())
}

/// Polls the session's latest view until `predicate` holds or `timeout` elapses.
pub fn wait_for(
    session: &CatalogSession,
    timeout: Duration,
    predicate: impl Fn(&AppViewModel) -> bool,
) -> Option<AppViewModel> {
    let deadline = Instant::now() + timeout;
    loop {
        let view = session.view();
        if predicate(&view) {
            return Some(view);
        }
        if Instant::now() >= deadline {
            return None;
        }
        thread::sleep(Duration::from_millis(5));
    }
}
