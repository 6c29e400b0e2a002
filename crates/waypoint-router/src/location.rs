//! Navigation targets: `path[?query][#hash]`

use std::fmt;

/// A parsed in-app location
///
/// `path` always starts with `/`. `query` and `hash` are stored without
/// their `?` / `#` markers and are `None` when absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Parse a location string
    ///
    /// # Example
    /// ```
    /// use waypoint_router::Location;
    ///
    /// let loc = Location::parse("/users?page=2#top");
    /// assert_eq!(loc.path, "/users");
    /// assert_eq!(loc.query.as_deref(), Some("page=2"));
    /// assert_eq!(loc.hash.as_deref(), Some("top"));
    /// ```
    pub fn parse(input: &str) -> Self {
        let (rest, hash) = match input.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (input, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self { path, query, hash }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(ref query) = self.query {
            write!(f, "?{query}")?;
        }
        if let Some(ref hash) = self.hash {
            write!(f, "#{hash}")?;
        }
        Ok(())
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
