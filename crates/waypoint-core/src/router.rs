//! Navigator over an immutable route table
//!
//! The [`Router`] owns a [`RouteTable`] and a [`History`] backend and
//! tracks the active route. It is an ordinary value: the host creates
//! it once and hands it to its shell explicitly.

use crate::{Error, History, Result};
use tracing::{debug, warn};
use waypoint_router::{Location, RouteEntry, RouteTable};

/// How a navigation came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
    /// Initial resolution of the backend's location
    Start,
    /// New history entry
    Push,
    /// Current history entry overwritten
    Replace,
    /// Moved through existing history (back/forward/go/popstate)
    Pop,
    /// Target equals the current location; nothing changed
    Duplicated,
}

impl NavigationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationType::Start => "start",
            NavigationType::Push => "push",
            NavigationType::Replace => "replace",
            NavigationType::Pop => "pop",
            NavigationType::Duplicated => "duplicated",
        }
    }
}

/// The route currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRoute<'a, V> {
    pub location: &'a Location,
    pub view: &'a V,
    /// Path of the matched entry; `None` when the fallback view is shown
    pub matched: Option<&'a str>,
}

impl<V> ActiveRoute<'_, V> {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

/// Outcome of a successful navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<'a, V> {
    pub kind: NavigationType,
    /// Previous location, if a route was active
    pub from: Option<Location>,
    pub to: ActiveRoute<'a, V>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Entry(usize),
    Fallback,
}

#[derive(Debug, Clone)]
struct Current {
    location: Location,
    target: Target,
}

/// Client-side router
#[derive(Debug)]
pub struct Router<V, H> {
    table: RouteTable<V>,
    history: H,
    fallback: Option<V>,
    current: Option<Current>,
}

impl<V, H: History> Router<V, H> {
    /// Create a router over `table`
    ///
    /// Every table path must start with `/` and carry no `?` or `#`.
    /// Shadowed duplicate paths are logged and never matched.
    pub fn new(table: RouteTable<V>, history: H) -> Result<Self> {
        for entry in table.entries() {
            let path = entry.path.as_str();
            if !path.starts_with('/') || path.contains(['?', '#']) {
                return Err(Error::InvalidPath(entry.path.clone()));
            }
        }
        for entry in table.shadowed() {
            warn!(path = %entry.path, "duplicate route path; first registration wins");
        }
        if history.mode() != table.mode() {
            debug!(
                declared = table.mode().as_str(),
                backend = history.mode().as_str(),
                "history backend mode differs from route table mode"
            );
        }

        Ok(Self {
            table,
            history,
            fallback: None,
            current: None,
        })
    }

    /// Render `view` for unmatched paths instead of failing
    pub fn with_fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Find the entry for a location
    ///
    /// Query and fragment are ignored; the path must equal an entry's
    /// path exactly.
    pub fn resolve(&self, location: &str) -> Result<&RouteEntry<V>> {
        let location = Location::parse(location);
        self.table
            .resolve(&location.path)
            .ok_or(Error::RouteNotFound {
                path: location.path,
            })
    }

    /// Resolve the backend's current location as the initial route
    pub fn start(&mut self) -> Result<Navigation<'_, V>> {
        let location = self.history.location();
        self.settle(location, NavigationType::Start)
    }

    /// Push `location` and make it the active route
    ///
    /// Unmatched paths fail with [`Error::RouteNotFound`] and leave the
    /// history and active route untouched, unless a fallback is set.
    pub fn navigate(&mut self, location: &str) -> Result<Navigation<'_, V>> {
        self.transition(Location::parse(location), NavigationType::Push)
    }

    /// Like [`navigate`](Self::navigate), but overwrites the current entry
    pub fn replace(&mut self, location: &str) -> Result<Navigation<'_, V>> {
        self.transition(Location::parse(location), NavigationType::Replace)
    }

    /// Go back one entry
    pub fn back(&mut self) -> Result<Option<Navigation<'_, V>>> {
        self.go(-1)
    }

    /// Go forward one entry
    pub fn forward(&mut self) -> Result<Option<Navigation<'_, V>>> {
        self.go(1)
    }

    /// Move `delta` entries through history
    ///
    /// `Ok(None)` means the backend completes the move asynchronously;
    /// call [`sync`](Self::sync) once it reports the new location.
    pub fn go(&mut self, delta: isize) -> Result<Option<Navigation<'_, V>>> {
        match self.history.go(delta)? {
            Some(location) => self.settle(location, NavigationType::Pop).map(Some),
            None => Ok(None),
        }
    }

    /// Re-resolve the backend's current location (e.g. after popstate)
    pub fn sync(&mut self) -> Result<Navigation<'_, V>> {
        let location = self.history.location();
        self.settle(location, NavigationType::Pop)
    }

    /// The active route, if any
    pub fn current(&self) -> Option<ActiveRoute<'_, V>> {
        let current = self.current.as_ref()?;
        let (view, matched) = match current.target {
            Target::Entry(i) => {
                let entry = self.table.get(i)?;
                (&entry.view, Some(entry.path.as_str()))
            }
            Target::Fallback => (self.fallback.as_ref()?, None),
        };
        Some(ActiveRoute {
            location: &current.location,
            view,
            matched,
        })
    }

    /// URL the table's history mode writes for `location`
    pub fn href(&self, location: &str) -> String {
        self.table
            .mode()
            .href(self.table.base(), &Location::parse(location))
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Entries in registration order
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.table.entries().iter()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn target_for(&self, location: &Location) -> Result<Target> {
        match self.table.position(&location.path) {
            Some(i) => Ok(Target::Entry(i)),
            None if self.fallback.is_some() => Ok(Target::Fallback),
            None => {
                warn!(path = %location.path, "no route matches");
                Err(Error::RouteNotFound {
                    path: location.path.clone(),
                })
            }
        }
    }

    fn is_current(&self, location: &Location) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| &c.location == location)
    }

    /// Push/replace: validate before touching history
    fn transition(&mut self, location: Location, kind: NavigationType) -> Result<Navigation<'_, V>> {
        if self.is_current(&location) {
            return self.finish(location.clone(), location, NavigationType::Duplicated);
        }
        let target = self.target_for(&location)?;
        if self.current.is_none() && self.history.location() == location {
            // Not started and the backend already sits here: adopt it
            let from = self.activate(location.clone(), target);
            return self.finish_from(from, location, NavigationType::Start);
        }
        match kind {
            NavigationType::Replace => self.history.replace(&location)?,
            _ => self.history.push(&location)?,
        }
        let from = self.activate(location.clone(), target);
        self.finish_from(from, location, kind)
    }

    /// Start/pop: the backend already moved, so a miss clears the active route
    fn settle(&mut self, location: Location, kind: NavigationType) -> Result<Navigation<'_, V>> {
        if kind == NavigationType::Pop && self.is_current(&location) {
            return self.finish(location.clone(), location, NavigationType::Duplicated);
        }
        let target = match self.target_for(&location) {
            Ok(target) => target,
            Err(e) => {
                self.current = None;
                return Err(e);
            }
        };
        let from = self.activate(location.clone(), target);
        self.finish_from(from, location, kind)
    }

    fn activate(&mut self, location: Location, target: Target) -> Option<Location> {
        self.current
            .replace(Current { location, target })
            .map(|previous| previous.location)
    }

    fn finish(&self, from: Location, to: Location, kind: NavigationType) -> Result<Navigation<'_, V>> {
        self.finish_from(Some(from), to, kind)
    }

    fn finish_from(
        &self,
        from: Option<Location>,
        to: Location,
        kind: NavigationType,
    ) -> Result<Navigation<'_, V>> {
        debug!(kind = ?kind, from = ?from, to = %to, "navigation");
        let route = self
            .current()
            .ok_or(Error::RouteNotFound { path: to.path })?;
        Ok(Navigation {
            kind,
            from,
            to: route,
        })
    }
}
