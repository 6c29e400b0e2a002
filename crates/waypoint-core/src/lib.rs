//! waypoint-core: Client-side navigation core
//!
//! Shared between native hosts and the WASM browser binding.
//!
//! ## Pieces
//! - [`Router`] - resolves locations against an immutable route table
//!   and moves through a [`History`] backend
//! - [`MemoryHistory`] - in-process history for tests and headless hosts
//! - [`AppShell`] / [`Renderer`] - mounts the view the router lands on
//! - [`build_router`] - the application's own table (`/` and `/users`)

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod router;
pub mod shell;

// Re-exports
pub use app::{build_router, build_router_with, route_table, View};
pub use config::RouterConfig;
pub use error::{Error, Result};
pub use history::{History, MemoryHistory};
pub use router::{ActiveRoute, Navigation, NavigationType, Router};
pub use shell::{AppShell, Renderer};

pub use waypoint_router::{HistoryMode, Location, RouteEntry, RouteTable, RouteTableBuilder};
