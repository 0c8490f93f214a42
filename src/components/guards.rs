//! Route Guard Components
//!
//! Map a `GuardDecision` onto a view: placeholder, children or redirect.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use kanbanflow_core::guard::GuardDecision;

use crate::components::Loading;
use crate::context::use_session;

const CHECKING_TEXT: &str = "Checking authentication...";
const STARTING_TEXT: &str = "Starting application...";

fn render_decision(decision: GuardDecision, loading_text: &'static str, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Loading => view! { <Loading message=loading_text /> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(route) => view! { <Redirect path=route.path() /> }.into_any(),
    }
}

/// Only signed-in users get past; everyone else goes to `/login`
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    // Memo so session errors alone do not re-render the page
    let decision = Memo::new(move |_| session.protected_decision());

    move || render_decision(decision.get(), CHECKING_TEXT, &children)
}

/// Login/register: signed-in users are sent to `/dashboard`
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.public_decision());

    move || render_decision(decision.get(), CHECKING_TEXT, &children)
}

/// `/`: wait for the session check, then pick a side
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.root_decision());

    move || match decision.get() {
        GuardDecision::Redirect(route) => view! { <Redirect path=route.path() /> }.into_any(),
        _ => view! { <Loading message=STARTING_TEXT /> }.into_any(),
    }
}
