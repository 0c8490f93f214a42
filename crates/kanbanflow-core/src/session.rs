//! Session State Machine
//!
//! `unknown (loading)` → `authenticated` | `unauthenticated`.
//!
//! The async workflows talk to the backend and the token store and return a
//! `SessionEvent`; `Session::apply` is the only way the state changes.

use crate::api::{AuthApi, TokenStore};
use crate::domain::{Credentials, Registration, User};
use crate::error::{ApiResult, SessionError};
use crate::guard::SessionView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Client-side session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    loading: bool,
    error: Option<SessionError>,
}

/// Outcome of a session workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session check is starting
    CheckStarted,
    /// No stored token
    NoToken,
    /// Stored token accepted by the profile endpoint
    Restored(User),
    /// Stored token rejected or the profile call failed
    Expired,
    LoggedIn(User),
    LoginFailed,
    Registered(User),
    RegistrationFailed,
    LoggedOut,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session at application start: nothing known yet
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<SessionError> {
        self.error
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Unknown
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }

    pub fn apply(&mut self, event: SessionEvent) {
        log::debug!("[SESSION] {:?}", event);
        match event {
            SessionEvent::CheckStarted => {
                self.error = None;
            }
            SessionEvent::NoToken => {
                self.user = None;
                self.loading = false;
            }
            SessionEvent::Restored(user) => {
                self.user = Some(user);
                self.loading = false;
            }
            SessionEvent::Expired => {
                self.user = None;
                self.error = Some(SessionError::Expired);
                self.loading = false;
            }
            SessionEvent::LoggedIn(user) | SessionEvent::Registered(user) => {
                self.user = Some(user);
                self.error = None;
            }
            SessionEvent::LoginFailed => {
                self.error = Some(SessionError::InvalidCredentials);
            }
            SessionEvent::RegistrationFailed => {
                self.error = Some(SessionError::RegistrationFailed);
            }
            SessionEvent::LoggedOut => {
                self.user = None;
                self.error = None;
            }
        }
        log::debug!("[SESSION] Now {:?}", self.status());
    }

    /// Event for a finished login attempt
    pub fn login_event(result: &ApiResult<User>) -> SessionEvent {
        match result {
            Ok(user) => SessionEvent::LoggedIn(user.clone()),
            Err(_) => SessionEvent::LoginFailed,
        }
    }

    /// Event for a finished registration attempt
    pub fn register_event(result: &ApiResult<User>) -> SessionEvent {
        match result {
            Ok(user) => SessionEvent::Registered(user.clone()),
            Err(_) => SessionEvent::RegistrationFailed,
        }
    }
}

impl SessionView for Session {
    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

// ========================
// Workflows
// ========================

/// Restore the session from a stored token.
///
/// Any profile failure discards the token.
pub async fn check_session<A, S>(api: &A, tokens: &S) -> SessionEvent
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    if tokens.get().is_none() {
        return SessionEvent::NoToken;
    }

    match api.profile().await {
        Ok(user) => SessionEvent::Restored(user),
        Err(e) => {
            log::warn!("[SESSION] Profile check failed: {}", e);
            tokens.clear();
            SessionEvent::Expired
        }
    }
}

/// Exchange credentials for a token; the error is returned to the caller.
pub async fn login<A, S>(api: &A, tokens: &S, credentials: &Credentials) -> ApiResult<User>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let response = api.login(credentials).await?;
    tokens.set(&response.token);
    Ok(response.user)
}

/// Create an account and sign in with it.
pub async fn register<A, S>(api: &A, tokens: &S, registration: &Registration) -> ApiResult<User>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let response = api.register(registration).await?;
    tokens.set(&response.token);
    Ok(response.user)
}

/// Tell the backend (best effort), then drop the local session.
pub async fn logout<A, S>(api: &A, tokens: &S) -> SessionEvent
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    if let Err(e) = api.logout().await {
        log::warn!("[SESSION] Logout request failed: {}", e);
    }
    tokens.clear();
    SessionEvent::LoggedOut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{make_user, FakeAuth, MemoryTokenStore};

    #[test]
    fn test_new_session_is_unknown() {
        let session = Session::new();
        assert_eq!(session.status(), SessionStatus::Unknown);
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_apply_transitions() {
        let mut session = Session::new();
        session.apply(SessionEvent::Expired);
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert_eq!(session.error(), Some(SessionError::Expired));

        session.apply(SessionEvent::LoginFailed);
        assert_eq!(session.error(), Some(SessionError::InvalidCredentials));
        assert_eq!(session.status(), SessionStatus::Unauthenticated);

        session.apply(SessionEvent::LoggedIn(make_user(1, "ana")));
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.error(), None);

        session.apply(SessionEvent::LoggedOut);
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_check_without_token() {
        let api = FakeAuth::default();
        let tokens = MemoryTokenStore::default();

        let event = check_session(&api, &tokens).await;

        assert_eq!(event, SessionEvent::NoToken);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_check_restores_user() {
        let api = FakeAuth::with_profile(Ok(make_user(2, "bo")));
        let tokens = MemoryTokenStore::with_token("t0k3n");

        let mut session = Session::new();
        session.apply(check_session(&api, &tokens).await);

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("bo"));
        assert_eq!(tokens.get().as_deref(), Some("t0k3n"));
    }

    #[tokio::test]
    async fn test_check_failure_discards_token() {
        let api = FakeAuth::with_profile(Err(ApiError::Network("offline".into())));
        let tokens = MemoryTokenStore::with_token("stale");

        let mut session = Session::new();
        session.apply(check_session(&api, &tokens).await);

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert_eq!(session.error(), Some(SessionError::Expired));
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let api = FakeAuth::default();
        let tokens = MemoryTokenStore::default();
        let credentials = Credentials { username: "ana".into(), password: "pw".into() };

        let result = login(&api, &tokens, &credentials).await;
        let mut session = Session::new();
        session.apply(SessionEvent::NoToken);
        session.apply(Session::login_event(&result));

        assert_eq!(result.map(|u| u.username), Ok("ana".to_string()));
        assert_eq!(tokens.get().as_deref(), Some("token-ana"));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_is_reraised() {
        let api = FakeAuth::rejecting();
        let tokens = MemoryTokenStore::default();
        let credentials = Credentials { username: "ana".into(), password: "wrong".into() };

        let result = login(&api, &tokens, &credentials).await;
        let mut session = Session::new();
        session.apply(SessionEvent::NoToken);
        session.apply(Session::login_event(&result));

        assert!(result.is_err());
        assert_eq!(tokens.get(), None);
        assert_eq!(session.error(), Some(SessionError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_failure_sets_error() {
        let api = FakeAuth::rejecting();
        let tokens = MemoryTokenStore::default();
        let registration = Registration { username: "ana".into(), ..Default::default() };

        let result = register(&api, &tokens, &registration).await;
        let mut session = Session::new();
        session.apply(SessionEvent::NoToken);
        session.apply(Session::register_event(&result));

        assert!(result.is_err());
        assert_eq!(session.error(), Some(SessionError::RegistrationFailed));
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let api = FakeAuth::rejecting();
        let tokens = MemoryTokenStore::with_token("abc");
        let mut session = Session::new();
        session.apply(SessionEvent::Restored(make_user(1, "ana")));

        session.apply(logout(&api, &tokens).await);

        assert_eq!(tokens.get(), None);
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert_eq!(session.error(), None);
    }
}
