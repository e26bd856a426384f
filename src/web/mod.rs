//! The web application: its views and the URL declaration that routes to
//! them.

pub mod urls;
pub mod views;

pub use urls::url_patterns;
pub use views::{View, X_VIEW};
