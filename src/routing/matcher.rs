//! Route matching logic.
//!
//! # Responsibilities
//! - Validate literal path patterns at table build time
//! - Match a request path against a pattern (exact, case-sensitive)
//!
//! # Design Decisions
//! - Patterns are literal paths, no captures or wildcards
//! - Trailing slashes are significant: `/home` and `/home/` differ
//! - No regex, matching is a string comparison

use crate::routing::RoutingError;

/// Characters axum reads as capture or wildcard syntax.
const RESERVED: &[char] = &['{', '}', '*'];

/// Trait for matching request paths against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    /// Parse a literal path pattern.
    ///
    /// The pattern must be absolute and must not carry a query, a fragment,
    /// or any capture syntax.
    pub fn parse(pattern: impl Into<String>) -> Result<Self, RoutingError> {
        let path = pattern.into();
        let invalid = |reason: &str| RoutingError::InvalidPattern {
            pattern: path.clone(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if path.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }
        if path.contains(RESERVED) || path.split('/').any(|s| s.starts_with(':')) {
            return Err(invalid("must be a literal path without captures"));
        }
        if path.contains("//") {
            return Err(invalid("must not contain empty segments"));
        }

        Ok(Self { path })
    }

    /// The literal path this matcher accepts.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}
