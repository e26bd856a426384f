//! URL declaration of the web application.

use crate::routing::{RouteTable, RoutingError};
use crate::web::views::View;

/// The application's route table.
pub fn url_patterns() -> Result<RouteTable<View>, RoutingError> {
    RouteTable::builder()
        .route("/", View::Default, "default")
        .route("/home", View::HomePage, "home-page")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_lookup() {
        let table = url_patterns().unwrap();

        assert_eq!(table.reverse("default").unwrap(), "/");
        assert_eq!(table.reverse("home-page").unwrap(), "/home");
    }

    #[test]
    fn test_resolution() {
        let table = url_patterns().unwrap();

        assert_eq!(*table.resolve("/").unwrap().handler(), View::Default);
        assert_eq!(*table.resolve("/home").unwrap().handler(), View::HomePage);
        assert!(matches!(
            table.resolve("/nonexistent"),
            Err(RoutingError::NotFound { .. })
        ));
    }

    #[test]
    fn test_names_unique() {
        let table = url_patterns().unwrap();
        let names: Vec<_> = table.names().collect();

        assert_eq!(names, vec!["default", "home-page"]);
    }
}
