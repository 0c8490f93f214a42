//! In-memory fakes for the API traits, token store and navigator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{check_status, AuthApi, Navigator, ProjectApi, TaskApi, TokenStore};
use crate::domain::{
    AuthResponse, Credentials, NewProject, NewTask, Project, ProjectId, Registration, Task, TaskId,
    TaskStatus, User,
};
use crate::error::{ApiError, ApiResult};

pub fn make_user(id: u32, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        first_name: String::new(),
        last_name: String::new(),
    }
}

// ========================
// Token store / navigator
// ========================

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_string())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

// ========================
// Auth
// ========================

pub struct FakeAuth {
    profile: ApiResult<User>,
    reject: bool,
    profile_calls: Cell<u32>,
}

impl Default for FakeAuth {
    fn default() -> Self {
        Self::with_profile(Ok(make_user(1, "ana")))
    }
}

impl FakeAuth {
    pub fn with_profile(profile: ApiResult<User>) -> Self {
        Self { profile, reject: false, profile_calls: Cell::new(0) }
    }

    /// Every call fails
    pub fn rejecting() -> Self {
        Self {
            profile: Err(ApiError::Unauthorized),
            reject: true,
            profile_calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.profile_calls.get()
    }

    fn bad_request() -> ApiError {
        ApiError::Http { status: 400, message: "Invalid data".into() }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuth {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        if self.reject {
            return Err(Self::bad_request());
        }
        Ok(AuthResponse {
            user: make_user(1, &credentials.username),
            token: format!("token-{}", credentials.username),
        })
    }

    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse> {
        if self.reject {
            return Err(Self::bad_request());
        }
        Ok(AuthResponse {
            user: make_user(2, &registration.username),
            token: format!("token-{}", registration.username),
        })
    }

    async fn logout(&self) -> ApiResult<()> {
        if self.reject {
            return Err(ApiError::Network("offline".into()));
        }
        Ok(())
    }

    async fn profile(&self) -> ApiResult<User> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone()
    }
}

// ========================
// Projects + tasks
// ========================

/// Backend double keeping projects and tasks in memory.
///
/// `fail_status_updates` makes every status PATCH fail; `unauthorized` makes
/// every call answer 401 through the shared response policy.
#[derive(Default)]
pub struct FakeBackend {
    projects: RefCell<Vec<Project>>,
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u32>,
    pub fail_status_updates: Cell<bool>,
    pub unauthorized: Cell<bool>,
    pub tokens: Rc<MemoryTokenStore>,
    pub navigator: Rc<RecordingNavigator>,
}

impl FakeBackend {
    pub fn signed_in() -> Self {
        Self {
            tokens: Rc::new(MemoryTokenStore::with_token("valid")),
            ..Default::default()
        }
    }

    fn gate(&self) -> ApiResult<()> {
        let status = if self.unauthorized.get() { 401 } else { 200 };
        check_status(status, "", self.tokens.as_ref(), self.navigator.as_ref())
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn not_found() -> ApiError {
        ApiError::Http { status: 404, message: "Not found.".into() }
    }

    pub fn stored_status(&self, id: TaskId) -> Option<TaskStatus> {
        self.tasks.borrow().iter().find(|t| t.id == id).map(|t| t.status)
    }
}

#[async_trait(?Send)]
impl ProjectApi for FakeBackend {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.gate()?;
        Ok(self.projects.borrow().clone())
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        self.gate()?;
        let created = Project::new(self.next_id(), project.name.clone(), project.description.clone());
        self.projects.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_project(&self, id: ProjectId, project: &NewProject) -> ApiResult<Project> {
        self.gate()?;
        let mut projects = self.projects.borrow_mut();
        let stored = projects.iter_mut().find(|p| p.id == id).ok_or_else(Self::not_found)?;
        stored.name = project.name.clone();
        stored.description = project.description.clone();
        Ok(stored.clone())
    }

    async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.gate()?;
        self.projects.borrow_mut().retain(|p| p.id != id);
        self.tasks.borrow_mut().retain(|t| t.project != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeBackend {
    async fn list_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>> {
        self.gate()?;
        Ok(self.tasks.borrow().iter().filter(|t| t.project == project).cloned().collect())
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.gate()?;
        let mut created = Task::new(self.next_id(), task.project, task.title.clone());
        created.description = task.description.clone();
        created.priority = task.priority;
        created.status = task.status;
        created.created_by = Some("ana".to_string());
        self.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> ApiResult<Task> {
        self.gate()?;
        if self.fail_status_updates.get() {
            return Err(ApiError::Http { status: 500, message: "Server error".into() });
        }
        let mut tasks = self.tasks.borrow_mut();
        let stored = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        stored.status = status;
        Ok(stored.clone())
    }

    async fn update_task(&self, id: TaskId, task: &NewTask) -> ApiResult<Task> {
        self.gate()?;
        let mut tasks = self.tasks.borrow_mut();
        let stored = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        stored.title = task.title.clone();
        stored.description = task.description.clone();
        stored.priority = task.priority;
        stored.status = task.status;
        Ok(stored.clone())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.gate()?;
        self.tasks.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}
