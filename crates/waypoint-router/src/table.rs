//! Route table: ordered path-to-view bindings

use crate::HistoryMode;
use std::collections::HashMap;

/// One navigable path and the view it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    /// Exact path this entry answers to
    pub path: String,
    /// View rendered when `path` matches
    pub view: V,
}

/// Immutable, ordered route table
///
/// Entries keep registration order. Lookup goes through a path index
/// that only ever points at the first entry registered for a path;
/// later duplicates are kept for reporting but never matched.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    /// Path -> index of the winning entry
    index: HashMap<String, usize>,
    mode: HistoryMode,
    base: String,
}

impl<V> RouteTable<V> {
    /// Start building a table
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Find the entry bound to `path`
    ///
    /// # Returns
    /// `Some(entry)` for the first entry registered with exactly this path,
    /// `None` if no entry matches
    ///
    /// # Example
    /// ```
    /// use waypoint_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/", 0)
    ///     .route("/", 1)
    ///     .build();
    ///
    /// assert_eq!(table.resolve("/").unwrap().view, 0);
    /// ```
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.index.get(path).map(|&i| &self.entries[i])
    }

    /// Position of the entry bound to `path`, in registration order
    pub fn position(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied()
    }

    /// Entry at a registration position
    pub fn get(&self, position: usize) -> Option<&RouteEntry<V>> {
        self.entries.get(position)
    }

    /// All entries in registration order, shadowed ones included
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// Entries that lost to an earlier entry with the same path
    pub fn shadowed(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, e)| self.index.get(&e.path) != Some(i))
            .map(|(_, e)| e)
    }

    /// History mode this table was declared with
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Base path prepended to every href
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`RouteTable`]
///
/// The only way to add entries; once built the table has no
/// mutating methods.
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V> {
    entries: Vec<RouteEntry<V>>,
    mode: HistoryMode,
    base: String,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            mode: HistoryMode::default(),
            base: "/".to_string(),
        }
    }
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the history mode
    pub fn mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the base path (e.g. `/app/`). Empty means `/`; a missing
    /// leading `/` is added so hrefs stay absolute.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.base = if base.starts_with('/') {
            base
        } else {
            format!("/{base}")
        };
        self
    }

    /// Append a route
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            view,
        });
        self
    }

    /// Freeze the table
    pub fn build(self) -> RouteTable<V> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            // First registration wins
            index.entry(entry.path.clone()).or_insert(i);
        }
        RouteTable {
            entries: self.entries,
            index,
            mode: self.mode,
            base: self.base,
        }
    }
}
