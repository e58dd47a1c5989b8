use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hooks")]
    Hooks,
    #[at("/promises")]
    Promises,
    #[at("/axios-examples")]
    HttpClient,
    #[at("/array-methods")]
    ArrayMethods,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar entries, in display order.
    pub const NAVIGATION: [(Route, &'static str); 5] = [
        (Route::Home, "Home"),
        (Route::Hooks, "Hooks"),
        (Route::Promises, "Promises"),
        (Route::HttpClient, "HTTP Client"),
        (Route::ArrayMethods, "Array Methods"),
    ];
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn test_routes_map_to_paths() {
        let expected = [
            (Route::Home, "/"),
            (Route::Hooks, "/hooks"),
            (Route::Promises, "/promises"),
            (Route::HttpClient, "/axios-examples"),
            (Route::ArrayMethods, "/array-methods"),
            (Route::NotFound, "/404"),
        ];

        for (route, path) in expected {
            assert_eq!(route.to_path(), path);
            assert_eq!(Route::recognize(path), Some(route));
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::recognize("/lifecycle"), Some(Route::NotFound));
    }

    #[test]
    fn test_navigation_covers_every_page() {
        let pages: Vec<Route> = Route::NAVIGATION.iter().map(|(r, _)| *r).collect();

        assert_eq!(pages.len(), Route::routes().len() - 1);
        assert!(!pages.contains(&Route::NotFound));
    }
}
