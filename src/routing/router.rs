//! Route table storage and lookup.
//!
//! # Responsibilities
//! - Store routes in declaration order
//! - Resolve a request path to the first matching route
//! - Reverse a route name to its path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan for resolution (the table is tiny and order matters)
//! - Explicit NotFound rather than silent default

use std::collections::HashSet;
use std::fmt;

use axum::routing::MethodRouter;

use crate::routing::matcher::{ExactPathMatcher, Matcher};
use crate::routing::RoutingError;

/// A handler reference that the dispatcher can mount.
pub trait Endpoint: Clone + fmt::Debug + Send + Sync + 'static {
    /// Build the axum method router that serves this endpoint.
    fn method_router(&self) -> MethodRouter;
}

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<H> {
    matcher: ExactPathMatcher,
    handler: H,
    name: Option<String>,
}

impl<H> Route<H> {
    /// The literal path this route serves.
    pub fn path(&self) -> &str {
        self.matcher.path()
    }

    /// The handler reference.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The symbolic name used for reverse lookup, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

/// Ordered, immutable collection of routes.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> RouteTable<H> {
    /// Start declaring a table.
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder::default()
    }

    /// Find the first route whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Result<&Route<H>, RoutingError> {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .ok_or_else(|| RoutingError::NotFound {
                path: path.to_string(),
            })
    }

    /// Return the path of the route registered under `name`.
    pub fn reverse(&self, name: &str) -> Result<&str, RoutingError> {
        self.routes
            .iter()
            .find(|route| route.name() == Some(name))
            .map(Route::path)
            .ok_or_else(|| RoutingError::NoReverseMatch {
                name: name.to_string(),
            })
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<H>> {
        self.routes.iter()
    }

    /// Names of the named routes, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().filter_map(Route::name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, H> IntoIterator for &'a RouteTable<H> {
    type Item = &'a Route<H>;
    type IntoIter = std::slice::Iter<'a, Route<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Builder for [`RouteTable`].
///
/// Declaration errors are held until [`RouteTableBuilder::build`], which
/// reports the first one.
#[derive(Debug)]
pub struct RouteTableBuilder<H> {
    routes: Vec<Route<H>>,
    error: Option<RoutingError>,
}

impl<H> Default for RouteTableBuilder<H> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            error: None,
        }
    }
}

impl<H> RouteTableBuilder<H> {
    /// Declare a named route.
    pub fn route(self, pattern: &str, handler: H, name: impl Into<String>) -> Self {
        self.push(pattern, handler, Some(name.into()))
    }

    /// Declare a route without a name. It can be resolved but not reversed.
    pub fn unnamed(self, pattern: &str, handler: H) -> Self {
        self.push(pattern, handler, None)
    }

    fn push(mut self, pattern: &str, handler: H, name: Option<String>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match ExactPathMatcher::parse(pattern) {
            Ok(matcher) => self.routes.push(Route {
                matcher,
                handler,
                name,
            }),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Freeze the declared routes.
    pub fn build(self) -> Result<RouteTable<H>, RoutingError> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let mut seen = HashSet::new();
        for name in self.routes.iter().filter_map(Route::name) {
            if !seen.insert(name) {
                return Err(RoutingError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }

        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/", "default", "default")
            .route("/home", "home_page", "home-page")
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve() {
        let table = table();

        assert_eq!(*table.resolve("/").unwrap().handler(), "default");
        assert_eq!(*table.resolve("/home").unwrap().handler(), "home_page");

        let err = table.resolve("/nonexistent").unwrap_err();
        assert_eq!(
            err,
            RoutingError::NotFound {
                path: "/nonexistent".into()
            }
        );
    }

    #[test]
    fn test_reverse() {
        let table = table();

        assert_eq!(table.reverse("default").unwrap(), "/");
        assert_eq!(table.reverse("home-page").unwrap(), "/home");
        assert!(matches!(
            table.reverse("home_page"),
            Err(RoutingError::NoReverseMatch { .. })
        ));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::builder()
            .route("/home", "first", "first")
            .route("/home", "second", "second")
            .build()
            .unwrap();

        assert_eq!(*table.resolve("/home").unwrap().handler(), "first");
        // The shadowed route is still reversible.
        assert_eq!(table.reverse("second").unwrap(), "/home");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::builder()
            .route("/", "default", "default")
            .route("/other", "other", "default")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            RoutingError::DuplicateName {
                name: "default".into()
            }
        );
    }

    #[test]
    fn test_first_error_reported() {
        let err = RouteTable::builder()
            .route("home", "home_page", "home-page")
            .route("/{id}", "detail", "detail")
            .build()
            .unwrap_err();

        match err {
            RoutingError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "home"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unnamed_routes() {
        let table = RouteTable::builder()
            .unnamed("/health", "health")
            .route("/", "default", "default")
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(RouteTable::<&str>::builder().build().unwrap().is_empty());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["default"]);
        assert_eq!(table.resolve("/health").unwrap().name(), None);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = table();
        let paths: Vec<_> = table.iter().map(Route::path).collect();
        assert_eq!(paths, vec!["/", "/home"]);
    }
}
