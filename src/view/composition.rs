//! Render-plan composition.
//!
//! # Responsibilities
//! - Turn a resolved route plus a state snapshot into a concrete plan
//! - Apply the conditional-render policy:
//!   - timeline routes prepend the alert banner iff an alert is pending
//!   - authenticated sessions get the article form, anonymous ones the
//!     sign-up card
//! - Bind route parameters into the leaf view plans
//!
//! # Design Decisions
//! - Pure function: no store access, no clocks, no I/O
//! - Standalone form views receive the pending alert inline instead of
//!   the shared banner
//! - Unmatched paths produce an explicit NotFound terminal (or the home
//!   timeline when the config enables that fallback)

use serde::Serialize;

use crate::actions::{ActionKind, AuthMode};
use crate::config::schema::{AppConfig, UiConfig};
use crate::routing::{RouteMatch, RouteTable, RouteView};
use crate::state::{Alert, AppState};
use crate::view::lazy::ViewModuleId;

/// Which reading list a timeline panel is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListScope {
    Global,
    Subscriptions,
    User(String),
}

/// Header slot of the shared timeline layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineHeader {
    ArticleForm,
    SignUpCard,
}

/// Left panel of the aside column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum AsidePanel {
    Global {
        scope: ListScope,
        title: Option<String>,
        tag_id: Option<String>,
    },
    User {
        user_id: String,
    },
}

/// Tag cloud slot of the aside column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagsAside {
    pub scope: Option<ListScope>,
    pub user_id: Option<String>,
}

/// Aside column of a timeline plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsidePlan {
    pub panel: AsidePanel,
    pub tags: TagsAside,
}

/// Which subscription relation a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionKind {
    Following,
    Followers,
}

/// Main content of a timeline plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum BodyPlan {
    Readings {
        scope: ListScope,
        tag_id: Option<String>,
        user_id: Option<String>,
        favorites_only: bool,
        outdated_only: bool,
    },
    Subscriptions {
        user_id: String,
        kind: SubscriptionKind,
    },
}

/// A fully bound timeline composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePlan {
    /// Present exactly once iff an alert is pending.
    pub banner: Option<Alert>,
    pub header: TimelineHeader,
    pub aside: AsidePlan,
    pub body: BodyPlan,
}

/// The shared sign-in / sign-up form, fully bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthFormPlan {
    pub mode: AuthMode,
    pub heading: String,
    pub button_text: String,
    pub alert: Option<Alert>,
}

/// The reset-email request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailFormPlan {
    pub heading: String,
    pub button_text: String,
    pub alert: Option<Alert>,
}

/// The new-password form reached from a reset link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetPasswordFormPlan {
    pub username: String,
    pub token: String,
    pub heading: String,
    pub button_text: String,
    pub alert: Option<Alert>,
}

/// The profile update form. Heading and path come from the session,
/// empty for anonymous visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFormPlan {
    pub heading: String,
    pub profile_path: String,
    pub button_text: String,
    pub alert: Option<Alert>,
}

/// The resolved view tree for one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderPlan {
    Timeline(TimelinePlan),
    AuthForm(AuthFormPlan),
    EmailForm(EmailFormPlan),
    ResetPasswordForm(ResetPasswordFormPlan),
    UpdateForm(UpdateFormPlan),
    NotFound { path: String },
}

impl RenderPlan {
    /// Deferred view modules this plan needs before it can render.
    pub fn lazy_modules(&self) -> Vec<ViewModuleId> {
        match self {
            RenderPlan::Timeline(plan) => {
                let mut modules = Vec::new();
                if plan.banner.is_some() {
                    modules.push(ViewModuleId::AlertBanner);
                }
                if matches!(plan.aside.panel, AsidePanel::User { .. }) {
                    modules.push(ViewModuleId::UserAside);
                }
                if matches!(plan.body, BodyPlan::Subscriptions { .. }) {
                    modules.push(ViewModuleId::SubscriptionsList);
                }
                modules
            }
            RenderPlan::AuthForm(_) => vec![ViewModuleId::AuthForm],
            RenderPlan::EmailForm(_) => vec![ViewModuleId::EmailForm],
            RenderPlan::ResetPasswordForm(_) => vec![ViewModuleId::ResetPasswordForm],
            RenderPlan::UpdateForm(_) => vec![ViewModuleId::UpdateForm],
            RenderPlan::NotFound { .. } => Vec::new(),
        }
    }

    /// Action creators the leaf view of this plan gets wired to.
    pub fn required_actions(&self) -> &'static [ActionKind] {
        match self {
            RenderPlan::AuthForm(_) => &[ActionKind::AuthUser],
            RenderPlan::EmailForm(_) => &[ActionKind::SendResetEmail, ActionKind::RemoveAlert],
            RenderPlan::ResetPasswordForm(_) => {
                &[ActionKind::ResetPassword, ActionKind::RemoveAlert]
            }
            RenderPlan::UpdateForm(_) => &[ActionKind::AuthUser, ActionKind::RemoveAlert],
            RenderPlan::Timeline(_) | RenderPlan::NotFound { .. } => &[],
        }
    }
}

/// Compose the render plan for a resolved route against a state snapshot.
pub fn compose(matched: &RouteMatch, state: &AppState, ui: &UiConfig) -> RenderPlan {
    let alert = state.alerts.pending().cloned();
    let id = matched.params.get("id").unwrap_or("").to_string();

    let banner = alert.clone();
    let timeline = move |aside: AsidePlan, body: BodyPlan| {
        RenderPlan::Timeline(TimelinePlan {
            banner: banner.clone(),
            header: if state.current_user.is_authenticated() {
                TimelineHeader::ArticleForm
            } else {
                TimelineHeader::SignUpCard
            },
            aside,
            body,
        })
    };

    let readings = |scope: ListScope, tag_id: Option<String>, user_id: Option<String>| {
        BodyPlan::Readings {
            scope,
            tag_id,
            user_id,
            favorites_only: false,
            outdated_only: false,
        }
    };

    match matched.view {
        RouteView::Home => timeline(
            AsidePlan {
                panel: AsidePanel::Global {
                    scope: ListScope::Global,
                    title: Some(ui.global_timeline_title.clone()),
                    tag_id: None,
                },
                tags: TagsAside {
                    scope: Some(ListScope::Global),
                    user_id: None,
                },
            },
            readings(ListScope::Global, None, None),
        ),
        RouteView::Tag => timeline(
            AsidePlan {
                panel: AsidePanel::Global {
                    scope: ListScope::Global,
                    title: None,
                    tag_id: Some(id.clone()),
                },
                tags: TagsAside {
                    scope: Some(ListScope::Global),
                    user_id: None,
                },
            },
            readings(ListScope::Global, Some(id), None),
        ),
        RouteView::Subscriptions => timeline(
            AsidePlan {
                panel: AsidePanel::Global {
                    scope: ListScope::Subscriptions,
                    title: Some(ui.subscriptions_timeline_title.clone()),
                    tag_id: None,
                },
                tags: TagsAside {
                    scope: Some(ListScope::Subscriptions),
                    user_id: None,
                },
            },
            readings(ListScope::Subscriptions, None, None),
        ),
        RouteView::Profile => timeline(
            AsidePlan {
                panel: AsidePanel::User {
                    user_id: id.clone(),
                },
                tags: TagsAside {
                    scope: Some(ListScope::User(id.clone())),
                    user_id: Some(id.clone()),
                },
            },
            readings(ListScope::User(id.clone()), None, Some(id)),
        ),
        RouteView::Following | RouteView::Followers => timeline(
            AsidePlan {
                panel: AsidePanel::User {
                    user_id: id.clone(),
                },
                tags: TagsAside::default(),
            },
            BodyPlan::Subscriptions {
                user_id: id,
                kind: if matched.view == RouteView::Following {
                    SubscriptionKind::Following
                } else {
                    SubscriptionKind::Followers
                },
            },
        ),
        RouteView::Favorites => timeline(
            AsidePlan {
                panel: AsidePanel::User {
                    user_id: id.clone(),
                },
                tags: TagsAside {
                    scope: Some(ListScope::User(id.clone())),
                    user_id: None,
                },
            },
            BodyPlan::Readings {
                scope: ListScope::User(id.clone()),
                tag_id: None,
                user_id: Some(id),
                favorites_only: true,
                outdated_only: false,
            },
        ),
        RouteView::Outdated => timeline(
            AsidePlan {
                panel: AsidePanel::User {
                    user_id: id.clone(),
                },
                tags: TagsAside::default(),
            },
            BodyPlan::Readings {
                scope: ListScope::User(id.clone()),
                tag_id: None,
                user_id: Some(id),
                favorites_only: false,
                outdated_only: true,
            },
        ),
        RouteView::SignIn => RenderPlan::AuthForm(AuthFormPlan {
            mode: AuthMode::SignIn,
            heading: ui.signin.heading.clone(),
            button_text: ui.signin.button_text.clone(),
            alert,
        }),
        RouteView::SignUp => RenderPlan::AuthForm(AuthFormPlan {
            mode: AuthMode::SignUp,
            heading: ui.signup.heading.clone(),
            button_text: ui.signup.button_text.clone(),
            alert,
        }),
        RouteView::RequestReset => RenderPlan::EmailForm(EmailFormPlan {
            heading: ui.reset_request.heading.clone(),
            button_text: ui.reset_request.button_text.clone(),
            alert,
        }),
        RouteView::ResetPassword => RenderPlan::ResetPasswordForm(ResetPasswordFormPlan {
            username: matched.params.get("username").unwrap_or("").to_string(),
            token: matched.params.get("token").unwrap_or("").to_string(),
            heading: ui.reset_password.heading.clone(),
            button_text: ui.reset_password.button_text.clone(),
            alert,
        }),
        RouteView::EditProfile => {
            let user = state.current_user.user();
            RenderPlan::UpdateForm(UpdateFormPlan {
                heading: user.map(|u| u.username.clone()).unwrap_or_default(),
                profile_path: user.map(|u| u.id.clone()).unwrap_or_default(),
                button_text: ui.update_button_text.clone(),
                alert,
            })
        }
    }
}

/// Resolve a path and compose its plan in one step.
///
/// Unmatched paths end in `NotFound`, unless the config routes them back
/// to the home timeline.
pub fn resolve_and_compose(
    table: &RouteTable,
    path: &str,
    state: &AppState,
    config: &AppConfig,
) -> RenderPlan {
    match table.resolve(path) {
        Some(matched) => compose(&matched, state, &config.ui),
        None if config.routing.home_fallback => {
            tracing::debug!(path = %path, "Unmatched path, falling back to home");
            let home = RouteMatch {
                view: RouteView::Home,
                params: Default::default(),
            };
            compose(&home, state, &config.ui)
        }
        None => RenderPlan::NotFound {
            path: path.to_string(),
        },
    }
}
