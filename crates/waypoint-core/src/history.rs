//! History backends
//!
//! A [`History`] stores the stack of visited locations. The browser
//! backend lives in waypoint-wasm; [`MemoryHistory`] keeps everything
//! in process for tests and headless hosts.

use crate::{Error, Result};
use waypoint_router::{HistoryMode, Location};

/// Navigation history backend
pub trait History {
    /// Mode this backend writes locations in
    fn mode(&self) -> HistoryMode;

    /// Current in-app location
    fn location(&self) -> Location;

    /// Add a new entry after the current one
    fn push(&mut self, location: &Location) -> Result<()>;

    /// Overwrite the current entry
    fn replace(&mut self, location: &Location) -> Result<()>;

    /// Move `delta` entries through history
    ///
    /// Returns the new location when the move completes synchronously,
    /// or `None` when the backend reports it later (the host then calls
    /// `Router::sync`).
    fn go(&mut self, delta: isize) -> Result<Option<Location>>;
}

/// In-process history stack
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl MemoryHistory {
    /// History with a single `/` entry
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// History with a single entry at `location`
    pub fn starting_at(location: &str) -> Self {
        Self {
            entries: vec![Location::parse(location)],
            cursor: 0,
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Index of the current entry
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Memory
    }

    fn location(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, location: &Location) -> Result<()> {
        // Pushing drops any forward entries
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.clone());
        self.cursor = self.entries.len() - 1;
        Ok(())
    }

    fn replace(&mut self, location: &Location) -> Result<()> {
        self.entries[self.cursor] = location.clone();
        Ok(())
    }

    fn go(&mut self, delta: isize) -> Result<Option<Location>> {
        let target = self
            .cursor
            .checked_add_signed(delta)
            .filter(|&i| i < self.entries.len())
            .ok_or(Error::HistoryOutOfRange { delta })?;
        self.cursor = target;
        Ok(Some(self.location()))
    }
}

/// History whose moves complete later, like the browser's
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct DeferredHistory {
    inner: MemoryHistory,
}

#[cfg(test)]
impl DeferredHistory {
    /// Entries oldest first, positioned on the last one
    pub(crate) fn with_entries(paths: &[&str]) -> Self {
        let mut inner = MemoryHistory::starting_at(paths[0]);
        for path in &paths[1..] {
            inner.push(&Location::parse(path)).unwrap();
        }
        Self { inner }
    }
}

#[cfg(test)]
impl History for DeferredHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Web
    }

    fn location(&self) -> Location {
        self.inner.location()
    }

    fn push(&mut self, location: &Location) -> Result<()> {
        self.inner.push(location)
    }

    fn replace(&mut self, location: &Location) -> Result<()> {
        self.inner.replace(location)
    }

    /// Moves at once but, like `history.go`, reports nothing
    fn go(&mut self, delta: isize) -> Result<Option<Location>> {
        self.inner.go(delta).map(|_| None)
    }
}
