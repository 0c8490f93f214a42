//! `/projects/*`

use async_trait::async_trait;

use kanbanflow_core::api::{Endpoint, ProjectApi};
use kanbanflow_core::domain::{NewProject, Project, ProjectId};
use kanbanflow_core::ApiResult;

use super::ApiClient;

#[async_trait(?Send)]
impl ProjectApi for ApiClient {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.fetch(Endpoint::ListProjects).await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        self.submit(Endpoint::CreateProject, project).await
    }

    async fn update_project(&self, id: ProjectId, project: &NewProject) -> ApiResult<Project> {
        self.submit(Endpoint::UpdateProject(id), project).await
    }

    async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.execute(Endpoint::DeleteProject(id)).await
    }
}
