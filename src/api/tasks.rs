//! `/tasks/*`

use async_trait::async_trait;

use kanbanflow_core::api::{Endpoint, TaskApi};
use kanbanflow_core::domain::{NewTask, ProjectId, StatusUpdate, Task, TaskId, TaskStatus};
use kanbanflow_core::ApiResult;

use super::ApiClient;

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn list_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>> {
        self.fetch(Endpoint::ListTasks(project)).await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.submit(Endpoint::CreateTask, task).await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> ApiResult<Task> {
        self.submit(Endpoint::UpdateTaskStatus(id), &StatusUpdate { status }).await
    }

    async fn update_task(&self, id: TaskId, task: &NewTask) -> ApiResult<Task> {
        self.submit(Endpoint::UpdateTask(id), task).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.execute(Endpoint::DeleteTask(id)).await
    }
}
