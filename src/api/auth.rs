//! `/auth/*`

use async_trait::async_trait;

use kanbanflow_core::api::{AuthApi, Endpoint};
use kanbanflow_core::domain::{AuthResponse, Credentials, Registration, User};
use kanbanflow_core::ApiResult;

use super::ApiClient;

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.submit(Endpoint::Login, credentials).await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse> {
        self.submit(Endpoint::Register, registration).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.execute(Endpoint::Logout).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.fetch(Endpoint::Profile).await
    }
}
