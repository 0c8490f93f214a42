//! Route Guards
//!
//! Pure decisions behind the protected/public route wrappers. The components
//! only translate a `GuardDecision` into a view.

/// Views the client can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Resolve a location path; anything unknown goes back to the root
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => Route::Root,
        }
    }
}

/// Read-only view of the session the guards need
pub trait SessionView {
    fn is_loading(&self) -> bool;
    fn is_authenticated(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still pending
    Loading,
    Render,
    Redirect(Route),
}

/// Only signed-in users may see the view
pub fn protected<S: SessionView + ?Sized>(session: &S) -> GuardDecision {
    if session.is_loading() {
        GuardDecision::Loading
    } else if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Signed-in users are sent to the dashboard instead
pub fn public<S: SessionView + ?Sized>(session: &S) -> GuardDecision {
    if session.is_loading() {
        GuardDecision::Loading
    } else if session.is_authenticated() {
        GuardDecision::Redirect(Route::Dashboard)
    } else {
        GuardDecision::Render
    }
}

/// `/` always redirects once the session is known
pub fn root<S: SessionView + ?Sized>(session: &S) -> GuardDecision {
    if session.is_loading() {
        GuardDecision::Loading
    } else if session.is_authenticated() {
        GuardDecision::Redirect(Route::Dashboard)
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}
