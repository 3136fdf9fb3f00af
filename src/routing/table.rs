//! The application's fixed URL surface.
//!
//! Declaration order is load-bearing: `/tag/:id`, `/signin`, `/signup`,
//! `/reset`, `/reset/:username/:token` and `/subscriptions` all sit before
//! the `/:id` profile catch-all, and the `/:id/...` sub-pages are
//! distinguished from `/:id` by segment count.

use crate::routing::pattern::PathPattern;
use crate::routing::router::{Route, RouteTable, RouteView};

fn route(view: RouteView, pattern: &str) -> Route {
    // Patterns here are static and known-good; a typo is a programmer
    // error caught by the table tests.
    let pattern = PathPattern::parse(pattern).expect("static route pattern");
    Route { view, pattern }
}

/// Build the route table for the reading application.
pub fn reading_app_table() -> RouteTable {
    RouteTable::new(vec![
        route(RouteView::Home, "/"),
        route(RouteView::Tag, "/tag/:id"),
        route(RouteView::SignIn, "/signin"),
        route(RouteView::SignUp, "/signup"),
        route(RouteView::RequestReset, "/reset"),
        route(RouteView::ResetPassword, "/reset/:username/:token"),
        route(RouteView::Subscriptions, "/subscriptions"),
        route(RouteView::Profile, "/:id"),
        route(RouteView::EditProfile, "/:id/edit"),
        route(RouteView::Following, "/:id/following"),
        route(RouteView::Followers, "/:id/followers"),
        route(RouteView::Favorites, "/:id/favorites"),
        route(RouteView::Outdated, "/:id/outdated"),
    ])
}
