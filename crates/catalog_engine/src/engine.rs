use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use catalog_core::{Effect, FetchTicket, GenresResult, MoviesResult, PageRequest};
use catalog_logging::{catalog_debug, catalog_error};
use tokio_util::sync::CancellationToken;

use crate::{DataSource, EngineEvent};

/// Receives engine completions.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchMovies {
        ticket: FetchTicket,
        request: PageRequest,
        limit: u32,
    },
    FetchGenres,
    Shutdown,
}

/// Executes fetch effects on a tokio runtime owned by a worker thread.
///
/// Only one movie fetch is kept alive: enqueueing a new one cancels the
/// previous one, and a cancelled fetch reports nothing.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn DataSource>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("catalog-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("catalog-engine-commands".to_string())
            .spawn(move || {
                let mut current_movies: Option<CancellationToken> = None;
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::FetchMovies {
                            ticket,
                            request,
                            limit,
                        } => {
                            if let Some(previous) = current_movies.take() {
                                previous.cancel();
                            }
                            let token = CancellationToken::new();
                            current_movies = Some(token.clone());
                            runtime.spawn(fetch_movies(
                                source.clone(),
                                sink.clone(),
                                token,
                                ticket,
                                request,
                                limit,
                            ));
                        }
                        EngineCommand::FetchGenres => {
                            runtime.spawn(fetch_genres(source.clone(), sink.clone()));
                        }
                        EngineCommand::Shutdown => break,
                    }
                }
                runtime.shutdown_background();
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = match effect {
                Effect::FetchMovies {
                    ticket,
                    request,
                    limit,
                } => EngineCommand::FetchMovies {
                    ticket,
                    request,
                    limit,
                },
                Effect::FetchGenres => EngineCommand::FetchGenres,
            };
            if self.cmd_tx.send(command).is_err() {
                catalog_error!("engine worker is gone, dropping effect");
            }
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}

async fn fetch_movies(
    source: Arc<dyn DataSource>,
    sink: Arc<dyn EventSink>,
    token: CancellationToken,
    ticket: FetchTicket,
    request: PageRequest,
    limit: u32,
) {
    let offset = request.offset(limit);
    let raw = tokio::select! {
        _ = token.cancelled() => {
            catalog_debug!("movie fetch ticket={} cancelled", ticket);
            return;
        }
        raw = source.fetch_movies(limit, offset, request.genre_filter.as_deref()) => raw,
    };
    sink.emit(EngineEvent::MoviesFetched {
        ticket,
        request,
        result: MoviesResult::from_fetch(raw),
    });
}

async fn fetch_genres(source: Arc<dyn DataSource>, sink: Arc<dyn EventSink>) {
    let raw = source.fetch_genres().await;
    sink.emit(EngineEvent::GenresFetched(GenresResult::from_fetch(raw)));
}
