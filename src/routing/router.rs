//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled, ordered route list
//! - Resolve a path to the first matching route
//! - Return the matched view identifier plus parameter bindings
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; the table is small and order carries meaning
//!   (`/tag/:id` and `/subscriptions` must win over the `/:id` catch-all)
//! - Explicit None rather than a silent default when nothing matches

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::routing::pattern::{PathPattern, RouteParams};

/// Identifier of the view composition a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteView {
    Home,
    Tag,
    SignIn,
    SignUp,
    RequestReset,
    ResetPassword,
    Subscriptions,
    Profile,
    EditProfile,
    Following,
    Followers,
    Favorites,
    Outdated,
}

impl RouteView {
    /// Whether this view renders inside the shared timeline layout.
    ///
    /// Timeline routes get the alert banner and the authenticated /
    /// anonymous header split; the standalone form views do not.
    pub fn uses_timeline_layout(&self) -> bool {
        !matches!(
            self,
            RouteView::SignIn
                | RouteView::SignUp
                | RouteView::RequestReset
                | RouteView::ResetPassword
                | RouteView::EditProfile
        )
    }
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteView::Home => "home",
            RouteView::Tag => "tag",
            RouteView::SignIn => "sign_in",
            RouteView::SignUp => "sign_up",
            RouteView::RequestReset => "request_reset",
            RouteView::ResetPassword => "reset_password",
            RouteView::Subscriptions => "subscriptions",
            RouteView::Profile => "profile",
            RouteView::EditProfile => "edit_profile",
            RouteView::Following => "following",
            RouteView::Followers => "followers",
            RouteView::Favorites => "favorites",
            RouteView::Outdated => "outdated",
        };
        f.write_str(name)
    }
}

/// One declared route: a compiled pattern bound to a view.
#[derive(Debug, Clone)]
pub struct Route {
    pub view: RouteView,
    pub pattern: PathPattern,
}

/// A resolved navigation: which view, with which bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub view: RouteView,
    pub params: RouteParams,
}

/// The ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Resolve a path to the first matching route, in declaration order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(path) {
                tracing::debug!(
                    path = %path,
                    view = %route.view,
                    pattern = %route.pattern.as_str(),
                    "Route resolved"
                );
                return Some(RouteMatch {
                    view: route.view,
                    params,
                });
            }
        }
        tracing::debug!(path = %path, "No route matched");
        None
    }

    /// Resolve the path component of an absolute URL.
    pub fn resolve_url(&self, raw: &str) -> Result<Option<RouteMatch>, url::ParseError> {
        let url = Url::parse(raw)?;
        Ok(self.resolve(url.path()))
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        crate::routing::table::reading_app_table()
    }

    #[test]
    fn test_first_match_wins_over_catch_all() {
        let t = table();
        // Literal routes declared before /:id must win for their paths.
        assert_eq!(t.resolve("/signin").unwrap().view, RouteView::SignIn);
        assert_eq!(
            t.resolve("/subscriptions").unwrap().view,
            RouteView::Subscriptions
        );
        // A path that only the catch-all matches falls through to it.
        let m = t.resolve("/alice").unwrap();
        assert_eq!(m.view, RouteView::Profile);
        assert_eq!(m.params.get("id"), Some("alice"));
    }

    #[test]
    fn test_specific_beats_generic_for_same_id() {
        let t = table();
        let profile = t.resolve("/alice").unwrap();
        let edit = t.resolve("/alice/edit").unwrap();
        assert_eq!(profile.view, RouteView::Profile);
        assert_eq!(edit.view, RouteView::EditProfile);
        assert_eq!(edit.params.get("id"), Some("alice"));
    }

    #[test]
    fn test_reset_params() {
        let t = table();
        let m = t.resolve("/reset/bob/tok123").unwrap();
        assert_eq!(m.view, RouteView::ResetPassword);
        assert_eq!(m.params.get("username"), Some("bob"));
        assert_eq!(m.params.get("token"), Some("tok123"));
    }

    #[test]
    fn test_unmatched_path() {
        let t = table();
        assert!(t.resolve("/alice/unknown").is_none());
        assert!(t.resolve("/tag/a/b").is_none());
        assert!(t.resolve("").is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let t = table();
        let a = t.resolve("/tag/rust").unwrap();
        let b = t.resolve("/tag/rust").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_url() {
        let t = table();
        let m = t
            .resolve_url("https://example.com/tag/abc?page=2")
            .unwrap()
            .unwrap();
        assert_eq!(m.view, RouteView::Tag);
        assert_eq!(m.params.get("id"), Some("abc"));
        assert!(t.resolve_url("not a url").is_err());
    }
}
