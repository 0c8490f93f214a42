//! Session Context
//!
//! The signed-in user, provided via Leptos Context API from the root
//! component. Created once at boot (profile check) and torn down on logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kanbanflow_core::domain::{Credentials, Registration, User};
use kanbanflow_core::guard::{self, GuardDecision};
use kanbanflow_core::session::{self, Session, SessionEvent};
use kanbanflow_core::{ApiResult, SessionError};

use crate::api::ApiClient;

/// Session signal plus the client its workflows run against
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    api: StoredValue<ApiClient>,
}

impl SessionContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            api: StoredValue::new(api),
        }
    }

    fn apply(&self, event: SessionEvent) {
        self.session.update(|s| s.apply(event));
    }

    // ========================
    // Reads
    // ========================

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn error(&self) -> Option<SessionError> {
        self.session.with(|s| s.error())
    }

    pub fn protected_decision(&self) -> GuardDecision {
        self.session.with(|s| guard::protected(s))
    }

    pub fn public_decision(&self) -> GuardDecision {
        self.session.with(|s| guard::public(s))
    }

    pub fn root_decision(&self) -> GuardDecision {
        self.session.with(|s| guard::root(s))
    }

    // ========================
    // Workflows
    // ========================

    /// Restore the session from the stored token (runs once at boot)
    pub fn check(&self) {
        self.apply(SessionEvent::CheckStarted);
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            let event = session::check_session(&api, api.tokens()).await;
            ctx.apply(event);
        });
    }

    pub async fn login(&self, credentials: Credentials) -> ApiResult<User> {
        let api = self.api.get_value();
        let result = session::login(&api, api.tokens(), &credentials).await;
        self.apply(Session::login_event(&result));
        result
    }

    pub async fn register(&self, registration: Registration) -> ApiResult<User> {
        let api = self.api.get_value();
        let result = session::register(&api, api.tokens(), &registration).await;
        self.apply(Session::register_event(&result));
        result
    }

    pub async fn logout(&self) {
        let api = self.api.get_value();
        let event = session::logout(&api, api.tokens()).await;
        self.apply(event);
    }
}

/// Create the session context, provide it and start the boot check
pub fn provide_session(api: ApiClient) -> SessionContext {
    let ctx = SessionContext::new(api);
    provide_context(ctx);
    ctx.check();
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
