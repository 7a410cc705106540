use snafu::ensure;

use crate::Result;
use crate::error::{DuplicateRouteSnafu, InvalidRoutePathSnafu};

/// A single `(path, view)` pair of the route table.
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    pub path: &'static str,
    pub name: &'static str,
    pub view: V,
}

impl<V> RouteEntry<V> {
    pub fn new(path: &'static str, name: &'static str, view: V) -> Self {
        Self { path, name, view }
    }
}

/// Ordered, immutable list of routes.
///
/// Two paths that differ only in case, a trailing slash, a query string or a
/// fragment are rejected when the table is built.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            ensure!(
                entry.path.starts_with('/'),
                InvalidRoutePathSnafu { path: entry.path }
            );

            let taken = entries[..index]
                .iter()
                .any(|prev| same_path(prev.path, entry.path));

            ensure!(!taken, DuplicateRouteSnafu { path: entry.path });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&RouteEntry<V>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips query, fragment and trailing slashes. The root stays `/`.
pub fn normalize_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

fn same_path(a: &str, b: &str) -> bool {
    normalize_path(a).eq_ignore_ascii_case(normalize_path(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample_table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            RouteEntry::new("/", "Home", "home"),
            RouteEntry::new("/settings", "Settings", "settings"),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/settings/"), "/settings");
        assert_eq!(normalize_path("/settings?tab=plex"), "/settings");
        assert_eq!(normalize_path("/settings#token"), "/settings");
        assert_eq!(normalize_path("/?x=1"), "/");
    }

    #[test]
    fn test_order_is_preserved() {
        let table = sample_table();
        let paths: Vec<&str> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/settings"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).map(|e| e.view), Some("settings"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/", "Home", ()),
            RouteEntry::new("/settings", "Settings", ()),
            RouteEntry::new("/Settings/", "Other", ()),
        ]);

        match result {
            Err(Error::DuplicateRoute { path }) => assert_eq!(path, "/Settings/"),
            other => panic!("expected duplicate route error, got {:?}", other),
        }
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = RouteTable::new(vec![RouteEntry::new("settings", "Settings", ())]);
        assert!(matches!(result, Err(Error::InvalidRoutePath { .. })));

        let result = RouteTable::new(vec![RouteEntry::new("", "Empty", ())]);
        assert!(matches!(result, Err(Error::InvalidRoutePath { .. })));
    }

    #[test]
    fn test_empty_table() {
        let table: RouteTable<()> = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
