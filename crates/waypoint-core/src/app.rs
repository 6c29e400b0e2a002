//! The application's route table
//!
//! | path     | view       |
//! |----------|------------|
//! | `/`      | `UserForm` |
//! | `/users` | `UserList` |
//!
//! declared with browser-native path history.

use crate::{History, Result, Router, RouterConfig};
use std::fmt;
use waypoint_router::RouteTable;

/// Views the application can show
///
/// The router only stores and hands these back; rendering them is the
/// host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// User entry form
    UserForm,
    /// Listing of existing users
    UserList,
}

impl View {
    pub const ALL: [View; 2] = [View::UserForm, View::UserList];

    pub fn name(&self) -> &'static str {
        match self {
            View::UserForm => "UserForm",
            View::UserList => "UserList",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The application's route table under `config`'s mode and base
pub fn route_table(config: &RouterConfig<View>) -> RouteTable<View> {
    RouteTable::builder()
        .mode(config.mode)
        .base(config.base.clone())
        .route("/", View::UserForm)
        .route("/users", View::UserList)
        .build()
}

/// Build the application router with the default configuration
///
/// # Example
/// ```
/// use waypoint_core::{build_router, MemoryHistory, View};
///
/// let mut router = build_router(MemoryHistory::new()).unwrap();
/// assert_eq!(router.resolve("/users").unwrap().view, View::UserList);
///
/// router.start().unwrap();
/// router.navigate("/users").unwrap();
/// assert_eq!(router.current().unwrap().location.path, "/users");
/// ```
pub fn build_router<H: History>(history: H) -> Result<Router<View, H>> {
    build_router_with(RouterConfig::default(), history)
}

/// Build the application router with an explicit configuration
pub fn build_router_with<H: History>(config: RouterConfig<View>, history: H) -> Result<Router<View, H>> {
    let router = Router::new(route_table(&config), history)?;
    Ok(match config.fallback {
        Some(view) => router.with_fallback(view),
        None => router,
    })
}
