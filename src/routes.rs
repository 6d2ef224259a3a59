use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::{
    CareerTestView, DashboardView, ForumView, HomeView, LoginView, RegisterView, UserPlansView,
};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/plans")]
    Plans,
    #[at("/forum")]
    Forum,
    #[at("/career-test")]
    CareerTest,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/*")]
    DashboardSection,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Nested admin routes under /dashboard. Declared as absolute paths so the
/// intended-route resolver can recognize a stored "/dashboard/accounts"
/// directly into the right screen.
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum DashboardRoute {
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/categories")]
    Categories,
    #[at("/dashboard/courses")]
    Courses,
    #[at("/dashboard/course-builder")]
    CourseBuilder,
    #[at("/dashboard/career-questions")]
    CareerQuestions,
    #[at("/dashboard/accounts")]
    Accounts,
    #[at("/dashboard/plans")]
    Plans,
    #[not_found]
    #[at("/dashboard/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Plans => html! { <UserPlansView /> },
        Route::Forum => html! { <ForumView /> },
        Route::CareerTest => html! { <CareerTestView /> },
        Route::Dashboard | Route::DashboardSection => html! { <DashboardView /> },
        // Catch all - về trang chủ
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Navigates to a stored path string (the deferred navigation intent).
/// Dashboard subpaths must resolve through `DashboardRoute`, otherwise the
/// wildcard segment in `Route` would swallow the concrete path.
pub fn navigate_to_path(navigator: &Navigator, path: &str) {
    if path.starts_with("/dashboard") {
        if let Some(route) = DashboardRoute::recognize(path) {
            navigator.push(&route);
            return;
        }
    }
    match Route::recognize(path) {
        Some(route) => navigator.push(&route),
        None => navigator.push(&Route::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_dashboard_paths_resolve_to_concrete_screens() {
        assert_eq!(
            DashboardRoute::recognize("/dashboard/accounts"),
            Some(DashboardRoute::Accounts)
        );
        assert_eq!(
            DashboardRoute::recognize("/dashboard/plans"),
            Some(DashboardRoute::Plans)
        );
        assert_eq!(DashboardRoute::recognize("/dashboard"), Some(DashboardRoute::Overview));
    }

    #[test]
    fn top_level_paths_recognize() {
        assert_eq!(Route::recognize("/forum"), Some(Route::Forum));
        assert_eq!(Route::recognize("/career-test"), Some(Route::CareerTest));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
