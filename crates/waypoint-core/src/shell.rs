//! Host UI shell
//!
//! The shell owns the router and the renderer, and mounts whatever view
//! the router lands on. Nothing here is global: the host builds one
//! shell and drops it (via [`AppShell::unmount`]) when the app goes away.

use crate::{History, Navigation, NavigationType, Result, Router};
use tracing::info;
use waypoint_router::Location;

/// Something that can show a view
pub trait Renderer<V> {
    /// Show `view` for `location`, replacing whatever was shown
    fn mount(&mut self, view: &V, location: &Location);

    /// Clear the screen
    fn unmount(&mut self);
}

/// Application shell driving a [`Renderer`] from a [`Router`]
#[derive(Debug)]
pub struct AppShell<V, H, R> {
    router: Router<V, H>,
    renderer: R,
}

impl<V, H, R> AppShell<V, H, R>
where
    H: History,
    R: Renderer<V>,
{
    pub fn new(router: Router<V, H>, renderer: R) -> Self {
        Self { router, renderer }
    }

    /// Resolve the initial location and render it
    ///
    /// An unmatched initial location leaves the screen blank and returns
    /// the error.
    pub fn mount(&mut self) -> Result<NavigationType> {
        info!("mounting app shell");
        let result = self.router.start();
        Self::render(&mut self.renderer, result)
    }

    pub fn navigate(&mut self, location: &str) -> Result<NavigationType> {
        let nav = self.router.navigate(location)?;
        Self::render(&mut self.renderer, Ok(nav))
    }

    pub fn replace(&mut self, location: &str) -> Result<NavigationType> {
        let nav = self.router.replace(location)?;
        Self::render(&mut self.renderer, Ok(nav))
    }

    /// Returns `None` while an asynchronous backend is still moving
    pub fn back(&mut self) -> Result<Option<NavigationType>> {
        match self.router.back()? {
            Some(nav) => Self::render(&mut self.renderer, Ok(nav)).map(Some),
            None => Ok(None),
        }
    }

    pub fn forward(&mut self) -> Result<Option<NavigationType>> {
        match self.router.forward()? {
            Some(nav) => Self::render(&mut self.renderer, Ok(nav)).map(Some),
            None => Ok(None),
        }
    }

    /// Follow a location change the backend reported
    pub fn sync(&mut self) -> Result<NavigationType> {
        let result = self.router.sync();
        Self::render(&mut self.renderer, result)
    }

    pub fn router(&self) -> &Router<V, H> {
        &self.router
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear the app down, handing the renderer back
    pub fn unmount(mut self) -> R {
        info!("unmounting app shell");
        self.renderer.unmount();
        self.renderer
    }

    fn render(renderer: &mut R, result: Result<Navigation<'_, V>>) -> Result<NavigationType> {
        match result {
            Ok(nav) => {
                if nav.kind != NavigationType::Duplicated {
                    renderer.mount(nav.to.view, nav.to.location);
                }
                Ok(nav.kind)
            }
            Err(e) => {
                // Start/pop onto an unknown path: nothing to show
                if e.is_not_found() {
                    renderer.unmount();
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DeferredHistory;
    use crate::{Error, MemoryHistory};
    use waypoint_router::RouteTable;

    #[derive(Debug, Default)]
    struct Screen {
        shown: Option<(&'static str, String)>,
        mounts: usize,
    }

    impl Renderer<&'static str> for Screen {
        fn mount(&mut self, view: &&'static str, location: &Location) {
            self.shown = Some((*view, location.to_string()));
            self.mounts += 1;
        }

        fn unmount(&mut self) {
            self.shown = None;
        }
    }

    fn shell(start: &str) -> AppShell<&'static str, MemoryHistory, Screen> {
        let table = RouteTable::builder()
            .route("/", "form")
            .route("/users", "list")
            .build();
        let router = Router::new(table, MemoryHistory::starting_at(start)).unwrap();
        AppShell::new(router, Screen::default())
    }

    #[test]
    fn test_mount_renders_initial_view() {
        let mut shell = shell("/");
        assert_eq!(shell.mount().unwrap(), NavigationType::Start);
        assert_eq!(shell.renderer().shown, Some(("form", "/".to_string())));
    }

    #[test]
    fn test_navigate_renders() {
        let mut shell = shell("/");
        shell.mount().unwrap();
        shell.navigate("/users?page=2").unwrap();
        assert_eq!(shell.renderer().shown, Some(("list", "/users?page=2".to_string())));

        shell.back().unwrap();
        assert_eq!(shell.renderer().shown, Some(("form", "/".to_string())));

        shell.forward().unwrap();
        assert_eq!(shell.renderer().shown.as_ref().unwrap().0, "list");
    }

    #[test]
    fn test_failed_navigate_keeps_view() {
        let mut shell = shell("/");
        shell.mount().unwrap();
        assert!(shell.navigate("/unknown").is_err());
        assert_eq!(shell.renderer().shown.as_ref().unwrap().0, "form");
    }

    #[test]
    fn test_duplicate_does_not_remount() {
        let mut shell = shell("/");
        shell.mount().unwrap();
        assert_eq!(shell.navigate("/").unwrap(), NavigationType::Duplicated);
        assert_eq!(shell.renderer().mounts, 1);
    }

    #[test]
    fn test_unknown_initial_location_is_blank() {
        let mut shell = shell("/missing");
        let err = shell.mount().unwrap_err();
        assert_eq!(err, Error::RouteNotFound { path: "/missing".to_string() });
        assert!(shell.renderer().shown.is_none());
    }

    fn deferred_shell(paths: &[&str]) -> AppShell<&'static str, DeferredHistory, Screen> {
        let table = RouteTable::builder()
            .route("/", "form")
            .route("/users", "list")
            .build();
        let router = Router::new(table, DeferredHistory::with_entries(paths)).unwrap();
        AppShell::new(router, Screen::default())
    }

    #[test]
    fn test_deferred_back_renders_on_sync() {
        let mut shell = deferred_shell(&["/users", "/"]);
        shell.mount().unwrap();

        assert_eq!(shell.back().unwrap(), None);
        assert_eq!(shell.renderer().shown, Some(("form", "/".to_string())));

        assert_eq!(shell.sync().unwrap(), NavigationType::Pop);
        assert_eq!(shell.renderer().shown, Some(("list", "/users".to_string())));
        assert_eq!(shell.renderer().mounts, 2);
    }

    #[test]
    fn test_sync_onto_unknown_unmounts() {
        let mut shell = deferred_shell(&["/gone", "/"]);
        shell.mount().unwrap();
        assert_eq!(shell.back().unwrap(), None);

        assert!(shell.sync().unwrap_err().is_not_found());
        assert!(shell.renderer().shown.is_none());
        assert!(shell.router().current().is_none());
    }

    #[test]
    fn test_unmount() {
        let mut shell = shell("/users");
        shell.mount().unwrap();
        let screen = shell.unmount();
        assert!(screen.shown.is_none());
        assert_eq!(screen.mounts, 1);
    }
}
