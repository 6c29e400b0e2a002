//! Router - Re-exports from waypoint-core (SSOT)
//!
//! The route table and navigator live in waypoint-router and
//! waypoint-core so native and WASM builds match paths identically.

pub use waypoint_core::{build_router, Router, View};
pub use waypoint_router::{HistoryMode, Location};
