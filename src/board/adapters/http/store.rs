//! HTTP task store adapter.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::debug;

use crate::board::{
    domain::{ProjectId, TaskId, TaskRecord, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store reached over the project-management HTTP API.
///
/// Status updates go out as partial `PATCH` bodies; any 2xx answer counts as
/// success and everything else, including transport failures, surfaces as a
/// [`TaskStoreError`] for the sync engine to reconcile.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: TaskStatus,
}

impl HttpTaskStore {
    /// Creates a store against the given API base URL with a default client.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a store reusing an existing client (connection pooling,
    /// timeouts, and auth middleware are the caller's concern).
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> TaskStoreResult<Url> {
        self.base_url.join(path).map_err(TaskStoreError::network)
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let url = self.endpoint(&format!("api/tasks/{id}"))?;
        debug!(task = %id, status = %status, "patching task status");
        let response = self
            .client
            .patch(url)
            .json(&StatusPatch { status })
            .send()
            .await
            .map_err(TaskStoreError::network)?;
        let code = response.status();
        if code.is_success() {
            Ok(())
        } else {
            Err(TaskStoreError::Status {
                code: code.as_u16(),
            })
        }
    }

    async fn fetch_all(&self, project: ProjectId) -> TaskStoreResult<Vec<TaskRecord>> {
        let url = self.endpoint(&format!("api/projects/{project}/tasks"))?;
        debug!(project = %project, "fetching project tasks");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TaskStoreError::network)?;
        let code = response.status();
        if !code.is_success() {
            return Err(TaskStoreError::Status {
                code: code.as_u16(),
            });
        }
        response
            .json::<Vec<TaskRecord>>()
            .await
            .map_err(TaskStoreError::network)
    }
}
