use yew_router::prelude::*;

/// Every navigable view in the application. Parameterized routes carry the
/// entity id; a missing entity renders a not-found fallback, never a panic.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tours")]
    Tours,
    #[at("/tours/:id")]
    TourDetails { id: String },
    #[at("/book/:id")]
    Book { id: String },
    #[at("/auth")]
    Auth,
    #[at("/dashboard")]
    Dashboard,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    Admin,
    #[at("/confirmation/:booking_id")]
    Confirmation { booking_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_routes_render_their_ids() {
        assert_eq!(
            Route::TourDetails {
                id: "2".to_string()
            }
            .to_path(),
            "/tours/2"
        );
        assert_eq!(
            Route::Book {
                id: "5".to_string()
            }
            .to_path(),
            "/book/5"
        );
        assert_eq!(
            Route::Confirmation {
                booking_id: "abc".to_string()
            }
            .to_path(),
            "/confirmation/abc"
        );
    }

    #[test]
    fn static_routes_match_the_navigation_surface() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Tours.to_path(), "/tours");
        assert_eq!(Route::Auth.to_path(), "/auth");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::Admin.to_path(), "/admin");
    }
}
