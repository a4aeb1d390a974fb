//! Session-scoped holder of the loaded heroes and the current pick.
//!
//! # Design
//! `HeroStore` owns three pieces of shared state behind one mutex: the
//! `LoadState`, the last successfully loaded collection, and the selection.
//! Only `load` and `pick_random` mutate them.
//!
//! `load` returns immediately; the fetch runs on a named worker thread.
//! While a fetch is outstanding further `load` calls are ignored, so at most
//! one request is in flight and each started fetch applies exactly one
//! result. A fetch the transport never finishes leaves the store `Loading`.
//!
//! Every change is pushed to subscribers as a `StoreUpdate` snapshot. Sends
//! happen under the lock, so each subscriber sees transitions in the order
//! they were applied and never a half-applied load.
//!
//! A failed load keeps the collection and selection from the last success;
//! a first-time failure leaves both empty.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::client::HeroClient;
use crate::error::HeroError;
use crate::http::Transport;
use crate::selector::RandomSelector;
use crate::types::{Collection, Superhero};

/// Fetch lifecycle. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Collection),
    Failed(HeroError),
}

/// Snapshot sent to subscribers after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUpdate {
    pub state: LoadState,
    pub selection: Option<Superhero>,
}

struct Inner {
    state: LoadState,
    heroes: Collection,
    selection: Option<Superhero>,
    subscribers: Vec<Sender<StoreUpdate>>,
}

impl Inner {
    fn publish(&mut self) {
        let update = StoreUpdate {
            state: self.state.clone(),
            selection: self.selection.clone(),
        };
        self.subscribers.retain(|tx| tx.send(update.clone()).is_ok());
    }
}

struct Shared<T> {
    client: HeroClient<T>,
    selector: RandomSelector,
    inner: Mutex<Inner>,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(&self, result: Result<Collection, HeroError>) {
        let mut inner = self.lock();
        match result {
            Ok(heroes) => {
                inner.selection = self.selector.pick(&heroes[..]).cloned();
                inner.heroes = Arc::clone(&heroes);
                inner.state = LoadState::Loaded(heroes);
                tracing::info!(
                    count = inner.heroes.len(),
                    selected = ?inner.selection.as_ref().map(|h| h.id),
                    "heroes loaded"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, kept = inner.heroes.len(), "hero load failed");
                inner.state = LoadState::Failed(err);
            }
        }
        inner.publish();
    }
}

pub struct HeroStore<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for HeroStore<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Transport + 'static> HeroStore<T> {
    /// A store in `Idle`. Nothing is fetched until `load` is called.
    pub fn new(client: HeroClient<T>) -> Self {
        Self {
            shared: Arc::new(Shared {
                client,
                selector: RandomSelector,
                inner: Mutex::new(Inner {
                    state: LoadState::Idle,
                    heroes: Arc::from(Vec::new()),
                    selection: None,
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    /// Start fetching the collection in the background.
    ///
    /// Returns `false` without doing anything if a fetch is already in
    /// flight. Never fails: errors surface as `LoadState::Failed`.
    pub fn load(&self) -> bool {
        {
            let mut inner = self.shared.lock();
            if inner.state == LoadState::Loading {
                tracing::debug!("load ignored, fetch already in flight");
                return false;
            }
            inner.state = LoadState::Loading;
            inner.publish();
        }

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("hero-fetch".into())
            .spawn(move || {
                let result = shared.client.fetch_all();
                shared.finish(result);
            });
        if let Err(e) = spawned {
            self.shared
                .finish(Err(HeroError::UnknownError(format!("could not start fetch: {e}"))));
        }
        true
    }

    /// Draw a new selection from the loaded collection.
    ///
    /// No-op unless the store is `Loaded` with at least one hero. Never
    /// touches `LoadState` or the network.
    pub fn pick_random(&self) {
        let mut inner = self.shared.lock();
        let picked = match &inner.state {
            LoadState::Loaded(heroes) => self.shared.selector.pick(&heroes[..]).cloned(),
            _ => None,
        };
        match picked {
            Some(hero) => {
                tracing::debug!(id = hero.id, "picked hero");
                inner.selection = Some(hero);
                inner.publish();
            }
            None => tracing::debug!("pick ignored, nothing loaded"),
        }
    }
}

impl<T> HeroStore<T> {
    pub fn state(&self) -> LoadState {
        self.shared.lock().state.clone()
    }

    pub fn current_selection(&self) -> Option<Superhero> {
        self.shared.lock().selection.clone()
    }

    /// The collection from the last successful load; empty before one.
    pub fn collection(&self) -> Collection {
        Arc::clone(&self.shared.lock().heroes)
    }

    /// State and selection read under a single lock.
    pub fn snapshot(&self) -> StoreUpdate {
        let inner = self.shared.lock();
        StoreUpdate {
            state: inner.state.clone(),
            selection: inner.selection.clone(),
        }
    }

    /// User-facing text for the current failure, if any.
    pub fn error_message(&self) -> Option<String> {
        match &self.shared.lock().state {
            LoadState::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    /// Receive every subsequent change, in the order it was applied.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<StoreUpdate> {
        let (tx, rx) = mpsc::channel();
        self.shared.lock().subscribers.push(tx);
        rx
    }
}
