//! waypoint-router: Zero-dependency client-side route table
//!
//! Single Source of Truth (SSOT) route table used by both waypoint-core
//! (native navigator) and waypoint-wasm (browser) builds.
//!
//! ## Features
//! - Ordered path-to-view bindings, O(1) exact lookup
//! - First registered entry wins on duplicate paths
//! - History modes: path-based (`Web`), fragment-based (`Hash`), `Memory`
//! - Location parsing (`path?query#hash`) and href formatting with a base
//! - Zero external dependencies
//!
//! ## Matching
//! Paths match by exact string equality. There are no parameters,
//! wildcards or trailing-slash folding: `/users` and `/users/` differ.
//!
//! ## Example
//! ```
//! use waypoint_router::{HistoryMode, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .mode(HistoryMode::Web)
//!     .route("/", "form")
//!     .route("/users", "list")
//!     .build();
//!
//! assert_eq!(table.resolve("/users").unwrap().view, "list");
//! assert!(table.resolve("/unknown").is_none());
//! ```

mod location;
mod mode;
mod table;

pub use location::Location;
pub use mode::HistoryMode;
pub use table::{RouteEntry, RouteTable, RouteTableBuilder};
