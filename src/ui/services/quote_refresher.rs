use crate::config::RefreshConfig;
use crate::market::{fetch_quotes, QuoteProvider};
use crate::types::{QuoteMap, Symbol};
use std::sync::mpsc::{sync_channel, Receiver, TryRecvError, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// Waiting for `next_due`
    Idle { next_due: Instant },
    /// A worker thread is fetching
    Fetching,
}

/// Periodic background fetch with a single-slot hand-off to the UI thread.
///
/// Only the worker thread calls the provider. Its result travels through a
/// channel of capacity one, so the UI never shares the quote map with it.
pub struct QuoteRefresher {
    provider: Arc<dyn QuoteProvider>,
    interval: Duration,
    state: RefreshState,
    result_rx: Option<Receiver<QuoteMap>>,
    refresh_requested: bool,
}

impl QuoteRefresher {
    /// The first fetch is due immediately.
    pub fn new(provider: Arc<dyn QuoteProvider>, interval: Duration) -> Self {
        Self {
            provider,
            interval,
            state: RefreshState::Idle { next_due: Instant::now() },
            result_rx: None,
            refresh_requested: false,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.state == RefreshState::Fetching
    }

    /// Make the next fetch due now, or right after the one in flight.
    pub fn request_now(&mut self) {
        match self.state {
            RefreshState::Idle { .. } => {
                self.state = RefreshState::Idle { next_due: Instant::now() };
            }
            RefreshState::Fetching => self.refresh_requested = true,
        }
    }

    /// Start a worker if the next fetch is due. Returns whether one started.
    pub fn tick(&mut self, now: Instant, symbols: &[Symbol]) -> bool {
        match self.state {
            RefreshState::Idle { next_due } if now >= next_due => {
                self.spawn_worker(symbols.to_vec());
                true
            }
            _ => false,
        }
    }

    /// Take the finished result, if any, and schedule the next cycle.
    pub fn poll(&mut self, now: Instant) -> Option<QuoteMap> {
        let rx = self.result_rx.as_ref()?;

        let result = match rx.try_recv() {
            Ok(quotes) => Some(quotes),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Quote worker exited without a result");
                None
            }
        };

        self.result_rx = None;
        let next_due = if std::mem::take(&mut self.refresh_requested) {
            now
        } else {
            self.after_interval(now)
        };
        self.state = RefreshState::Idle { next_due };
        result
    }

    /// `now + interval`, or the default interval when that overflows.
    fn after_interval(&self, now: Instant) -> Instant {
        now.checked_add(self.interval).unwrap_or_else(|| {
            log::warn!("Refresh interval {:?} is out of range, using the default", self.interval);
            now + RefreshConfig::default().interval()
        })
    }

    fn spawn_worker(&mut self, symbols: Vec<Symbol>) {
        let (result_tx, result_rx) = sync_channel(1);
        let provider = Arc::clone(&self.provider);

        log::debug!("Starting quote refresh for {} symbols", symbols.len());
        let spawned = thread::Builder::new()
            .name("quote-refresh".to_string())
            .spawn(move || {
                let quotes = fetch_quotes(provider.as_ref(), &symbols);
                if let Err(TrySendError::Full(_)) = result_tx.try_send(quotes) {
                    log::warn!("Dropping quote result, a previous one is still pending");
                }
            });

        match spawned {
            Ok(_) => {
                self.result_rx = Some(result_rx);
                self.state = RefreshState::Fetching;
            }
            Err(e) => {
                log::error!("Failed to spawn quote worker: {}", e);
                self.state = RefreshState::Idle { next_due: self.after_interval(Instant::now()) };
            }
        }
    }
}
