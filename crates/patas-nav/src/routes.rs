//! Route table and path normalization

use std::collections::HashMap;

/// Hardcoded fallback when the table itself has no default entry.
pub const DEFAULT_FRAGMENT: &str = "index.html";

/// Mapping from route key to fragment resource name. The empty key is the
/// default/root route and must resolve for fallback to work.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// The site's routes: home, project page and registration form.
    pub fn site_routes() -> RouteTable {
        let mut table = RouteTable {
            routes: HashMap::new(),
        };
        table.insert("", "index.html");
        table.insert("index.html", "index.html");
        table.insert("project.html", "project.html");
        table.insert("register.html", "register.html");
        table
    }

    pub fn empty() -> RouteTable {
        RouteTable {
            routes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, fragment: &str) {
        self.routes.insert(key.to_string(), fragment.to_string());
    }

    /// Reduce a location path to a bare route key: drop a leading separator
    /// and any directory prefix, keeping only the final segment.
    pub fn normalize(path: &str) -> &str {
        let path = path.strip_prefix('/').unwrap_or(path);
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Resolve a path to a fragment resource name. Unknown keys fall back to
    /// the default entry, then to the hardcoded default fragment.
    pub fn resolve(&self, path: &str) -> String {
        let key = Self::normalize(path);

        self.routes
            .get(key)
            .or_else(|| self.routes.get(""))
            .cloned()
            .unwrap_or_else(|| DEFAULT_FRAGMENT.to_string())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::site_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes_resolve() {
        let table = RouteTable::site_routes();

        assert_eq!(table.resolve(""), "index.html");
        assert_eq!(table.resolve("/"), "index.html");
        assert_eq!(table.resolve("index.html"), "index.html");
        assert_eq!(table.resolve("/project.html"), "project.html");
        assert_eq!(table.resolve("register.html"), "register.html");
    }

    #[test]
    fn test_directory_prefix_is_stripped() {
        let table = RouteTable::site_routes();
        assert_eq!(table.resolve("/pages/register.html"), "register.html");
        assert_eq!(table.resolve("a/b/project.html"), "project.html");
    }

    #[test]
    fn test_unknown_route_falls_back_to_default() {
        let table = RouteTable::site_routes();
        assert_eq!(table.resolve("missing.html"), "index.html");
        assert_eq!(table.resolve("/nope/also-missing.html"), "index.html");
    }

    #[test]
    fn test_empty_table_uses_hardcoded_default() {
        let table = RouteTable::empty();
        assert_eq!(table.resolve("anything.html"), DEFAULT_FRAGMENT);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(RouteTable::normalize("/index.html"), "index.html");
        assert_eq!(RouteTable::normalize("html/index.html"), "index.html");
        assert_eq!(RouteTable::normalize("/"), "");
        assert_eq!(RouteTable::normalize(""), "");
    }
}
