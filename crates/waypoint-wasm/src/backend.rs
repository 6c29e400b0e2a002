//! History backend selection
//!
//! `Web` and `Hash` modes write to the browser; `Memory` (and every mode
//! when built without the `wasm` feature) stays in process.

use waypoint_core::{History, MemoryHistory, Result};
use waypoint_router::{HistoryMode, Location};

#[cfg(feature = "wasm")]
use crate::browser::BrowserHistory;

/// History backend picked from a mode name at runtime
#[derive(Debug)]
pub enum Backend {
    Memory(MemoryHistory),
    #[cfg(feature = "wasm")]
    Browser(BrowserHistory),
}

impl Backend {
    #[cfg_attr(not(feature = "wasm"), allow(unused_variables))]
    pub fn for_mode(mode: HistoryMode, base: &str) -> Self {
        match mode {
            #[cfg(feature = "wasm")]
            HistoryMode::Web | HistoryMode::Hash => Backend::Browser(BrowserHistory::new(mode, base)),
            _ => Backend::Memory(MemoryHistory::new()),
        }
    }

    pub fn is_browser(&self) -> bool {
        !matches!(self, Backend::Memory(_))
    }
}

impl History for Backend {
    fn mode(&self) -> HistoryMode {
        match self {
            Backend::Memory(h) => h.mode(),
            #[cfg(feature = "wasm")]
            Backend::Browser(h) => h.mode(),
        }
    }

    fn location(&self) -> Location {
        match self {
            Backend::Memory(h) => h.location(),
            #[cfg(feature = "wasm")]
            Backend::Browser(h) => h.location(),
        }
    }

    fn push(&mut self, location: &Location) -> Result<()> {
        match self {
            Backend::Memory(h) => h.push(location),
            #[cfg(feature = "wasm")]
            Backend::Browser(h) => h.push(location),
        }
    }

    fn replace(&mut self, location: &Location) -> Result<()> {
        match self {
            Backend::Memory(h) => h.replace(location),
            #[cfg(feature = "wasm")]
            Backend::Browser(h) => h.replace(location),
        }
    }

    fn go(&mut self, delta: isize) -> Result<Option<Location>> {
        match self {
            Backend::Memory(h) => h.go(delta),
            #[cfg(feature = "wasm")]
            Backend::Browser(h) => h.go(delta),
        }
    }
}
