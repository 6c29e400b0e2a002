//! Browser history backend
//!
//! Writes locations with `history.pushState` / `replaceState`, so the
//! address bar changes without a document reload, and reads them back
//! from `window.location`.

use wasm_bindgen::JsValue;
use waypoint_core::{Error, History, Result};
use waypoint_router::{HistoryMode, Location};

/// `window.history` backed [`History`]
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    mode: HistoryMode,
    base: String,
}

impl BrowserHistory {
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        Self {
            mode,
            base: base.to_string(),
        }
    }

    fn history(&self) -> Result<web_sys::History> {
        web_sys::window()
            .ok_or_else(|| Error::History("no global window".to_string()))?
            .history()
            .map_err(js_error)
    }
}

impl History for BrowserHistory {
    fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn location(&self) -> Location {
        let Some(window) = web_sys::window() else {
            return Location::parse("/");
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        self.mode.location_from(&self.base, &pathname, &search, &hash)
    }

    fn push(&mut self, location: &Location) -> Result<()> {
        let href = self.mode.href(&self.base, location);
        self.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&href))
            .map_err(js_error)
    }

    fn replace(&mut self, location: &Location) -> Result<()> {
        let href = self.mode.href(&self.base, location);
        self.history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&href))
            .map_err(js_error)
    }

    /// The browser moves asynchronously and fires `popstate` when done
    fn go(&mut self, delta: isize) -> Result<Option<Location>> {
        let delta = i32::try_from(delta).map_err(|_| Error::HistoryOutOfRange { delta })?;
        self.history()?.go_with_delta(delta).map_err(js_error)?;
        Ok(None)
    }
}

/// Convert a thrown JS value into a history error
pub(crate) fn js_error(value: JsValue) -> Error {
    Error::History(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
