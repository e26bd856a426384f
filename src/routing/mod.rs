//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Declaration (at startup):
//!     (pattern, handler, name)[]
//!     → matcher.rs (validate literal patterns)
//!     → router.rs (check name uniqueness)
//!     → Freeze as immutable RouteTable
//!
//! Incoming path
//!     → RouteTable::resolve (first match)
//!     → Return: matched Route or NotFound
//!
//! Route name
//!     → RouteTable::reverse
//!     → Return: path or NoReverseMatch
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use router::{Endpoint, Route, RouteTable, RouteTableBuilder};

/// Errors raised while building or querying a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route name {name:?} is declared more than once")]
    DuplicateName { name: String },

    #[error("no route matches path {path:?}")]
    NotFound { path: String },

    #[error("no route is named {name:?}")]
    NoReverseMatch { name: String },
}
