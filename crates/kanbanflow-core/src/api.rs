//! Backend API Surface
//!
//! The REST endpoints the client talks to, the traits the browser HTTP client
//! implements, and the shared 401 policy.

use async_trait::async_trait;

use crate::domain::{
    AuthResponse, Credentials, NewProject, NewTask, Project, ProjectId, Registration, Task, TaskId,
    TaskStatus, User,
};
use crate::error::{ApiError, ApiResult};
use crate::guard::Route;

// ========================
// Endpoints
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Every backend route the client knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    Logout,
    Profile,
    ListProjects,
    CreateProject,
    UpdateProject(ProjectId),
    DeleteProject(ProjectId),
    ListTasks(ProjectId),
    CreateTask,
    UpdateTask(TaskId),
    UpdateTaskStatus(TaskId),
    DeleteTask(TaskId),
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Login | Endpoint::Register | Endpoint::Logout => HttpMethod::Post,
            Endpoint::CreateProject | Endpoint::CreateTask => HttpMethod::Post,
            Endpoint::Profile | Endpoint::ListProjects | Endpoint::ListTasks(_) => HttpMethod::Get,
            Endpoint::UpdateProject(_) | Endpoint::UpdateTask(_) => HttpMethod::Put,
            Endpoint::UpdateTaskStatus(_) => HttpMethod::Patch,
            Endpoint::DeleteProject(_) | Endpoint::DeleteTask(_) => HttpMethod::Delete,
        }
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login/".to_string(),
            Endpoint::Register => "/auth/register/".to_string(),
            Endpoint::Logout => "/auth/logout/".to_string(),
            Endpoint::Profile => "/auth/profile/".to_string(),
            Endpoint::ListProjects | Endpoint::CreateProject => "/projects/".to_string(),
            Endpoint::UpdateProject(id) | Endpoint::DeleteProject(id) => format!("/projects/{}/", id),
            Endpoint::ListTasks(project) => format!("/tasks/?project={}", project),
            Endpoint::CreateTask => "/tasks/".to_string(),
            Endpoint::UpdateTask(id) | Endpoint::DeleteTask(id) => format!("/tasks/{}/", id),
            Endpoint::UpdateTaskStatus(id) => format!("/tasks/{}/update_status/", id),
        }
    }

    /// Join with a base URL, tolerating a trailing slash on the base
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

// ========================
// Traits
// ========================

/// `/auth/*`
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;
    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse>;
    async fn logout(&self) -> ApiResult<()>;
    async fn profile(&self) -> ApiResult<User>;
}

/// `/projects/*`
#[async_trait(?Send)]
pub trait ProjectApi {
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;
    async fn create_project(&self, project: &NewProject) -> ApiResult<Project>;
    /// Reserved: not used by any view
    async fn update_project(&self, id: ProjectId, project: &NewProject) -> ApiResult<Project>;
    /// Reserved: not used by any view
    async fn delete_project(&self, id: ProjectId) -> ApiResult<()>;
}

/// `/tasks/*`
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>>;
    async fn create_task(&self, task: &NewTask) -> ApiResult<Task>;
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> ApiResult<Task>;
    /// Reserved: not used by any view
    async fn update_task(&self, id: TaskId, task: &NewTask) -> ApiResult<Task>;
    /// Reserved: not used by any view
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}

/// Where the session token lives between page loads
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Sends the browser to another view outside the router
pub trait Navigator {
    fn redirect(&self, path: &str);
}

// ========================
// Response policy
// ========================

/// Map a response status onto the client's error policy.
///
/// A 401 from any request tears the session down: the stored token is
/// removed and the browser is sent to the login view.
pub fn check_status<S, N>(status: u16, body: &str, tokens: &S, navigator: &N) -> ApiResult<()>
where
    S: TokenStore + ?Sized,
    N: Navigator + ?Sized,
{
    match status {
        200..=299 => Ok(()),
        401 => {
            log::warn!("[API] Unauthorized response, clearing session");
            tokens.clear();
            navigator.redirect(Route::Login.path());
            Err(ApiError::Unauthorized)
        }
        _ => Err(ApiError::Http {
            status,
            message: error_message(body),
        }),
    }
}

/// Pull a readable message out of an error body.
///
/// Understands `{"detail": ".."}`, `{"error": ".."}`, `{"message": ".."}`
/// and field-error maps such as `{"username": [".."]}`.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return if trimmed.is_empty() { "Request failed".to_string() } else { trimmed.to_string() };
    };

    if let Some(obj) = value.as_object() {
        for key in ["detail", "error", "message", "non_field_errors"] {
            if let Some(msg) = obj.get(key).and_then(first_string) {
                return msg;
            }
        }
        if let Some((field, msg)) = obj.iter().find_map(|(k, v)| first_string(v).map(|m| (k, m))) {
            return format!("{}: {}", field, msg);
        }
    }
    "Request failed".to_string()
}

fn first_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryTokenStore, RecordingNavigator};

    #[test]
    fn test_endpoint_table() {
        let cases = [
            (Endpoint::Login, HttpMethod::Post, "/auth/login/"),
            (Endpoint::Register, HttpMethod::Post, "/auth/register/"),
            (Endpoint::Logout, HttpMethod::Post, "/auth/logout/"),
            (Endpoint::Profile, HttpMethod::Get, "/auth/profile/"),
            (Endpoint::ListProjects, HttpMethod::Get, "/projects/"),
            (Endpoint::CreateProject, HttpMethod::Post, "/projects/"),
            (Endpoint::UpdateProject(4), HttpMethod::Put, "/projects/4/"),
            (Endpoint::DeleteProject(4), HttpMethod::Delete, "/projects/4/"),
            (Endpoint::ListTasks(9), HttpMethod::Get, "/tasks/?project=9"),
            (Endpoint::CreateTask, HttpMethod::Post, "/tasks/"),
            (Endpoint::UpdateTask(3), HttpMethod::Put, "/tasks/3/"),
            (Endpoint::UpdateTaskStatus(3), HttpMethod::Patch, "/tasks/3/update_status/"),
            (Endpoint::DeleteTask(3), HttpMethod::Delete, "/tasks/3/"),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "{:?}", endpoint);
            assert_eq!(endpoint.path(), path, "{:?}", endpoint);
        }
    }

    #[test]
    fn test_url_join() {
        assert_eq!(Endpoint::Profile.url("http://localhost:8000/api/"), "http://localhost:8000/api/auth/profile/");
        assert_eq!(Endpoint::Profile.url("http://localhost:8000/api"), "http://localhost:8000/api/auth/profile/");
    }

    #[test]
    fn test_unauthorized_clears_token_and_redirects() {
        let tokens = MemoryTokenStore::with_token("abc");
        let navigator = RecordingNavigator::default();

        let result = check_status(401, "", &tokens, &navigator);

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(tokens.get(), None);
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_success_leaves_session_alone() {
        let tokens = MemoryTokenStore::with_token("abc");
        let navigator = RecordingNavigator::default();

        assert!(check_status(204, "", &tokens, &navigator).is_ok());
        assert_eq!(tokens.get().as_deref(), Some("abc"));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn test_other_errors_keep_token() {
        let tokens = MemoryTokenStore::with_token("abc");
        let navigator = RecordingNavigator::default();

        let result = check_status(400, r#"{"name": ["This field is required."]}"#, &tokens, &navigator);

        assert_eq!(
            result,
            Err(ApiError::Http { status: 400, message: "name: This field is required.".to_string() })
        );
        assert_eq!(tokens.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(error_message(r#"{"detail": "Not found."}"#), "Not found.");
        assert_eq!(error_message(r#"{"non_field_errors": ["Bad login"]}"#), "Bad login");
        assert_eq!(error_message("<html>oops</html>"), "<html>oops</html>");
        assert_eq!(error_message(""), "Request failed");
        assert_eq!(error_message("[]"), "Request failed");
    }
}
