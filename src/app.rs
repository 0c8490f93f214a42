//! KanbanFlow Frontend App
//!
//! Root component: API client and session context, then the routes.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{provide_board_dnd, HomeRedirect, ProtectedRoute, PublicRoute};
use crate::config::AppConfig;
use crate::context::provide_session;
use crate::pages::{DashboardPage, LoginPage, RegisterPage};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    log::info!("[APP] API base URL: {}", config.api_base_url);

    let api = ApiClient::new(&config);
    provide_context(api.clone());
    // Document drag listeners, bound once for the page
    provide_board_dnd(api.clone());

    // Session check on boot
    provide_session(api);

    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=HomeRedirect />
                    <Route
                        path=path!("/login")
                        view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <PublicRoute><RegisterPage /></PublicRoute> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                    />
                </Routes>
            </div>
        </Router>
    }
}
