//! History modes
//!
//! A mode decides how an in-app [`Location`] is written into the browser
//! address bar and how it is read back.

use crate::Location;

/// How navigation state is represented in the address bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HistoryMode {
    /// Browser-native path history: `/app/users`
    #[default]
    Web,
    /// Fragment history: `/app/#/users`
    Hash,
    /// No address bar; locations live in process
    Memory,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Web => "web",
            HistoryMode::Hash => "hash",
            HistoryMode::Memory => "memory",
        }
    }

    /// Parse a mode name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "web" | "history" => Some(HistoryMode::Web),
            "hash" => Some(HistoryMode::Hash),
            "memory" | "abstract" => Some(HistoryMode::Memory),
            _ => None,
        }
    }

    /// URL written to the address bar for `location`
    ///
    /// # Example
    /// ```
    /// use waypoint_router::{HistoryMode, Location};
    ///
    /// let loc = Location::parse("/users");
    /// assert_eq!(HistoryMode::Web.href("/app/", &loc), "/app/users");
    /// assert_eq!(HistoryMode::Hash.href("/app/", &loc), "/app/#/users");
    /// ```
    pub fn href(&self, base: &str, location: &Location) -> String {
        match self {
            HistoryMode::Web => format!("{}{}", trim_base(base), location),
            HistoryMode::Hash => {
                let base = if base.is_empty() { "/" } else { base };
                format!("{base}#{location}")
            }
            HistoryMode::Memory => location.to_string(),
        }
    }

    /// Read the in-app location back from address bar parts
    ///
    /// `search` and `hash` are taken as the browser reports them, i.e.
    /// with their leading `?` / `#` (or empty).
    pub fn location_from(&self, base: &str, pathname: &str, search: &str, hash: &str) -> Location {
        match self {
            HistoryMode::Web => {
                let base = trim_base(base);
                let path = match pathname.strip_prefix(base) {
                    Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                    _ => pathname,
                };
                Location::parse(&format!("{path}{search}{hash}"))
            }
            HistoryMode::Hash => Location::parse(hash.strip_prefix('#').unwrap_or(hash)),
            HistoryMode::Memory => Location::parse(&format!("{pathname}{search}{hash}")),
        }
    }
}

/// Base without its trailing slash; `/` becomes empty
fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_web() {
        assert_eq!(HistoryMode::default(), HistoryMode::Web);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(HistoryMode::from_name("web"), Some(HistoryMode::Web));
        assert_eq!(HistoryMode::from_name("HASH"), Some(HistoryMode::Hash));
        assert_eq!(HistoryMode::from_name("memory"), Some(HistoryMode::Memory));
        assert_eq!(HistoryMode::from_name("bogus"), None);
        for mode in [HistoryMode::Web, HistoryMode::Hash, HistoryMode::Memory] {
            assert_eq!(HistoryMode::from_name(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_web_href() {
        let loc = Location::parse("/users?page=2");
        assert_eq!(HistoryMode::Web.href("/", &loc), "/users?page=2");
        assert_eq!(HistoryMode::Web.href("", &loc), "/users?page=2");
        assert_eq!(HistoryMode::Web.href("/app", &loc), "/app/users?page=2");
        assert_eq!(HistoryMode::Web.href("/", &Location::parse("/")), "/");
    }

    #[test]
    fn test_hash_href() {
        let loc = Location::parse("/users");
        assert_eq!(HistoryMode::Hash.href("/", &loc), "/#/users");
        assert_eq!(HistoryMode::Hash.href("", &loc), "/#/users");
    }

    #[test]
    fn test_memory_href() {
        let loc = Location::parse("/users#top");
        assert_eq!(HistoryMode::Memory.href("/app/", &loc), "/users#top");
    }

    #[test]
    fn test_web_location_from() {
        let mode = HistoryMode::Web;
        assert_eq!(mode.location_from("/", "/users", "", "").path, "/users");
        assert_eq!(mode.location_from("/app/", "/app/users", "", "").path, "/users");
        assert_eq!(mode.location_from("/app/", "/app", "", "").path, "/");

        let loc = mode.location_from("/app/", "/app/users", "?page=2", "#top");
        assert_eq!(loc.to_string(), "/users?page=2#top");
    }

    #[test]
    fn test_web_location_outside_base() {
        // "/application" is not under "/app"
        let loc = HistoryMode::Web.location_from("/app/", "/application", "", "");
        assert_eq!(loc.path, "/application");
    }

    #[test]
    fn test_hash_location_from() {
        let mode = HistoryMode::Hash;
        assert_eq!(mode.location_from("/", "/", "", "#/users").path, "/users");
        assert_eq!(mode.location_from("/", "/", "", "").path, "/");

        let loc = mode.location_from("/", "/", "", "#/users?page=2");
        assert_eq!(loc.path, "/users");
        assert_eq!(loc.query.as_deref(), Some("page=2"));
    }

    #[test]
    fn test_href_roundtrip_web_base() {
        let loc = Location::parse("/users?a=1");
        let href = HistoryMode::Web.href("/app/", &loc);
        let (pathname, search) = href.split_once('?').unwrap();
        let back = HistoryMode::Web.location_from("/app/", pathname, &format!("?{search}"), "");
        assert_eq!(back, loc);
    }
}
