//! waypoint-wasm: Browser navigation for WASM
//!
//! Drives the application router from `window.history` and hands every
//! view change to a JS render callback.

pub mod backend;
pub mod router;

#[cfg(feature = "wasm")]
pub mod browser;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use backend::Backend;
pub use router::{build_router, HistoryMode, Location, Router, View};

#[cfg(feature = "wasm")]
pub use browser::BrowserHistory;
