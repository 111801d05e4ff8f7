use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::io::repository::{ContentRepository, FetchError};
use crate::model::Item;
use crate::ops::navigation::Ticket;

/// A finished item fetch, sent back to the event loop
#[derive(Debug)]
pub struct LoadResult {
    pub ticket: Ticket,
    pub fetched: Result<Item, FetchError>,
}

/// Runs item fetches off the UI thread.
///
/// Results arrive in completion order through [`ItemLoader::poll`]; the
/// navigator's tickets decide which of them still apply.
pub struct ItemLoader {
    repo: Arc<dyn ContentRepository>,
    tx: mpsc::Sender<LoadResult>,
    rx: mpsc::Receiver<LoadResult>,
    threaded: bool,
}

impl ItemLoader {
    /// One worker thread per request
    pub fn threaded(repo: Arc<dyn ContentRepository>) -> Self {
        Self::new(repo, true)
    }

    /// Fetch during `request` itself; results still go through the channel
    pub fn inline(repo: Arc<dyn ContentRepository>) -> Self {
        Self::new(repo, false)
    }

    fn new(repo: Arc<dyn ContentRepository>, threaded: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        ItemLoader {
            repo,
            tx,
            rx,
            threaded,
        }
    }

    pub fn request(&self, ticket: Ticket) {
        if !self.threaded {
            let fetched = self.repo.item(ticket.item_id());
            let _ = self.tx.send(LoadResult { ticket, fetched });
            return;
        }
        let repo = Arc::clone(&self.repo);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let fetched = repo.item(ticket.item_id());
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(LoadResult { ticket, fetched });
        });
    }

    /// Non-blocking poll for finished fetches
    pub fn poll(&self) -> Vec<LoadResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            results.push(result);
        }
        results
    }

    /// Block until the next fetch finishes or `timeout` passes
    pub fn wait(&self, timeout: Duration) -> Option<LoadResult> {
        self.rx.recv_timeout(timeout).ok()
    }
}
