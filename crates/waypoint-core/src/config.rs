//! Router configuration

use waypoint_router::HistoryMode;

/// Router configuration
#[derive(Debug, Clone)]
pub struct RouterConfig<V> {
    /// History mode the route table is declared with
    pub mode: HistoryMode,
    /// Base path the app is served under
    pub base: String,
    /// View rendered for unmatched paths; `None` makes them an error
    pub fallback: Option<V>,
}

impl<V> Default for RouterConfig<V> {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Web,
            base: "/".to_string(),
            fallback: None,
        }
    }
}

impl<V> RouterConfig<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }
}
