//! End-to-end resolution properties over the full URL surface.

mod common;

use common::{anonymous_state, signed_in_state, with_alert};
use folio_router::view::composition::{RenderPlan, TimelineHeader};
use folio_router::view::lazy::ViewModuleId;
use folio_router::{reading_app_table, resolve_and_compose, AppConfig, RouteView};

fn plan(path: &str, state: &folio_router::AppState) -> RenderPlan {
    resolve_and_compose(&reading_app_table(), path, state, &AppConfig::default())
}

/// Every timeline route, with a representative id substituted.
const TIMELINE_PATHS: &[&str] = &[
    "/",
    "/tag/rust",
    "/subscriptions",
    "/alice",
    "/alice/following",
    "/alice/followers",
    "/alice/favorites",
    "/alice/outdated",
];

/// The standalone form routes, which never show the shared banner.
const FORM_PATHS: &[&str] = &[
    "/signin",
    "/signup",
    "/reset",
    "/reset/bob/tok123",
    "/alice/edit",
];

#[test]
fn every_declared_pattern_resolves_to_itself() {
    let table = reading_app_table();
    let expected = [
        ("/", RouteView::Home),
        ("/tag/abc", RouteView::Tag),
        ("/signin", RouteView::SignIn),
        ("/signup", RouteView::SignUp),
        ("/reset", RouteView::RequestReset),
        ("/reset/bob/tok123", RouteView::ResetPassword),
        ("/subscriptions", RouteView::Subscriptions),
        ("/alice", RouteView::Profile),
        ("/alice/edit", RouteView::EditProfile),
        ("/alice/following", RouteView::Following),
        ("/alice/followers", RouteView::Followers),
        ("/alice/favorites", RouteView::Favorites),
        ("/alice/outdated", RouteView::Outdated),
    ];
    for (path, view) in expected {
        let matched = table
            .resolve(path)
            .unwrap_or_else(|| panic!("{path} did not resolve"));
        assert_eq!(matched.view, view, "path {path}");
    }
}

#[test]
fn ordering_disambiguates_literals_from_the_catch_all() {
    let table = reading_app_table();
    // These ids collide with literal routes only by shape, and order
    // keeps them apart.
    assert_eq!(table.resolve("/tag/signin").unwrap().view, RouteView::Tag);
    assert_eq!(
        table.resolve("/subscriptions").unwrap().view,
        RouteView::Subscriptions
    );
    // An id equal to a literal never reaches the catch-all.
    assert_eq!(table.resolve("/signin").unwrap().view, RouteView::SignIn);
    // Same id, different depth.
    let shallow = table.resolve("/signin2").unwrap();
    assert_eq!(shallow.view, RouteView::Profile);
    assert_eq!(shallow.params.get("id"), Some("signin2"));
}

#[test]
fn banner_appears_exactly_once_on_shared_layout_routes() {
    let quiet = anonymous_state();
    let noisy = with_alert(anonymous_state(), "saved");

    for path in TIMELINE_PATHS {
        match plan(path, &quiet) {
            RenderPlan::Timeline(t) => assert!(t.banner.is_none(), "path {path}"),
            other => panic!("{path}: unexpected plan {other:?}"),
        }
        match plan(path, &noisy) {
            RenderPlan::Timeline(t) => {
                let banner = t.banner.expect(path);
                assert_eq!(banner.message, "saved");
            }
            other => panic!("{path}: unexpected plan {other:?}"),
        }
    }

    for path in FORM_PATHS {
        let p = plan(path, &noisy);
        assert!(
            !matches!(p, RenderPlan::Timeline(_)),
            "form route {path} must not use the shared layout"
        );
    }
}

#[test]
fn session_controls_the_timeline_header() {
    let anon = anonymous_state();
    let signed = signed_in_state("1", "alice");

    for path in TIMELINE_PATHS {
        match plan(path, &anon) {
            RenderPlan::Timeline(t) => {
                assert_eq!(t.header, TimelineHeader::SignUpCard, "path {path}")
            }
            other => panic!("{path}: unexpected plan {other:?}"),
        }
        match plan(path, &signed) {
            RenderPlan::Timeline(t) => {
                assert_eq!(t.header, TimelineHeader::ArticleForm, "path {path}")
            }
            other => panic!("{path}: unexpected plan {other:?}"),
        }
    }
}

#[test]
fn parameter_extraction() {
    let table = reading_app_table();

    let m = table.resolve("/tag/abc").unwrap();
    assert_eq!(m.params.get("id"), Some("abc"));

    let m = table.resolve("/reset/bob/tok123").unwrap();
    assert_eq!(m.params.get("username"), Some("bob"));
    assert_eq!(m.params.get("token"), Some("tok123"));
    assert_eq!(m.params.len(), 2);
}

#[test]
fn resolution_is_idempotent_end_to_end() {
    let state = with_alert(signed_in_state("9", "dana"), "hello");
    for path in TIMELINE_PATHS.iter().chain(FORM_PATHS) {
        assert_eq!(plan(path, &state), plan(path, &state), "path {path}");
    }
}

#[test]
fn unmatched_paths_reach_the_not_found_terminal() {
    match plan("/alice/unknown/deep", &anonymous_state()) {
        RenderPlan::NotFound { path } => assert_eq!(path, "/alice/unknown/deep"),
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn home_fallback_config_replaces_not_found() {
    let mut config = AppConfig::default();
    config.routing.home_fallback = true;
    let p = resolve_and_compose(
        &reading_app_table(),
        "/no/such/route",
        &anonymous_state(),
        &config,
    );
    assert!(matches!(p, RenderPlan::Timeline(_)));
}

#[test]
fn lazy_modules_stay_within_the_known_set() {
    // Every module any plan can defer must be a declared module, and
    // each declared module must fetch under a distinct chunk name.
    let state = with_alert(signed_in_state("1", "alice"), "pending");
    for path in TIMELINE_PATHS.iter().chain(FORM_PATHS) {
        for module in plan(path, &state).lazy_modules() {
            assert!(
                ViewModuleId::ALL.contains(&module),
                "path {path} defers undeclared module {module}"
            );
        }
    }

    let mut chunks: Vec<&str> = ViewModuleId::ALL.iter().map(|m| m.chunk_name()).collect();
    chunks.sort_unstable();
    chunks.dedup();
    assert_eq!(chunks.len(), ViewModuleId::ALL.len());
}

#[test]
fn render_plans_serialize_with_stable_tags() {
    let json = serde_json::to_value(plan("/signin", &anonymous_state())).unwrap();
    assert_eq!(json["view"], "auth_form");
    assert_eq!(json["mode"], "sign_in");

    let json = serde_json::to_value(plan("/tag/rust", &anonymous_state())).unwrap();
    assert_eq!(json["view"], "timeline");
    assert_eq!(json["header"], "sign_up_card");
}
