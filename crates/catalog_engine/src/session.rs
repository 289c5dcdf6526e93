//! Single-writer session: owns the [`AppState`] on its own thread and folds UI
//! intents and engine completions into it one message at a time.

use std::io;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use catalog_core::{update, AppState, AppViewModel, Genre, Msg};
use catalog_logging::{catalog_debug, catalog_info};

use crate::{DataSource, EngineEvent, EngineHandle, EventSink};

enum Input {
    Msg(Msg),
    Shutdown,
}

impl From<EngineEvent> for Msg {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::MoviesFetched {
                ticket,
                request,
                result,
            } => Msg::MoviesLoaded {
                ticket,
                request,
                result,
            },
            EngineEvent::GenresFetched(result) => Msg::GenresLoaded(result),
        }
    }
}

struct InboxSink {
    tx: mpsc::Sender<Input>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Input::Msg(event.into()));
    }
}

pub struct CatalogSession {
    inbox: mpsc::Sender<Input>,
    latest: Arc<Mutex<AppViewModel>>,
    worker: Option<JoinHandle<()>>,
}

impl CatalogSession {
    /// Starts the session and issues the initial fetches. Every published view
    /// is also sent on the returned receiver.
    pub fn start(
        source: Arc<dyn DataSource>,
        page_size: u32,
    ) -> io::Result<(Self, mpsc::Receiver<AppViewModel>)> {
        let (inbox_tx, inbox_rx) = mpsc::channel();
        let (view_tx, view_rx) = mpsc::channel();

        let sink = Arc::new(InboxSink {
            tx: inbox_tx.clone(),
        });
        let engine = EngineHandle::new(source, sink)?;
        let state = AppState::with_page_size(page_size);
        let latest = Arc::new(Mutex::new(state.view()));

        let worker = {
            let latest = latest.clone();
            thread::Builder::new()
                .name("catalog-session".to_string())
                .spawn(move || run_loop(state, engine, inbox_rx, view_tx, latest))?
        };

        let session = Self {
            inbox: inbox_tx,
            latest,
            worker: Some(worker),
        };
        session.send(Msg::Started);
        catalog_info!("catalog session started, page_size={}", page_size);
        Ok((session, view_rx))
    }

    pub fn select_genre(&self, genre: Genre) {
        self.send(Msg::GenreSelected(genre));
    }

    /// Safe to call repeatedly for the same page.
    pub fn request_next_page(&self) {
        self.send(Msg::LoadMoreRequested);
    }

    pub fn retry(&self) {
        self.send(Msg::RetryRequested);
    }

    /// Most recently published view.
    pub fn view(&self) -> AppViewModel {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn send(&self, msg: Msg) {
        if self.inbox.send(Input::Msg(msg)).is_err() {
            catalog_debug!("session loop has stopped, dropping message");
        }
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        let _ = self.inbox.send(Input::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_loop(
    mut state: AppState,
    engine: EngineHandle,
    inbox: mpsc::Receiver<Input>,
    views: mpsc::Sender<AppViewModel>,
    latest: Arc<Mutex<AppViewModel>>,
) {
    while let Ok(input) = inbox.recv() {
        let msg = match input {
            Input::Msg(msg) => msg,
            Input::Shutdown => break,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        engine.run(effects);

        if state.consume_dirty() {
            let view = state.view();
            *latest.lock().unwrap_or_else(PoisonError::into_inner) = view.clone();
            let _ = views.send(view);
        }
    }
    catalog_debug!("catalog session loop stopped");
}
