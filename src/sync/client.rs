//! HTTP client for the remote todo collection.
//!
//! The remote resource exposes the collection under `{base}/todos`.
//! Only [`TaskRecord`] crosses the wire; the local `editing` flag is
//! stripped on the way out and defaulted on the way in.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::store::Task;
use crate::sync::error::SyncError;

/// Wire form of a task: what the remote collection stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: record.id,
            text: record.text,
            done: record.done,
            editing: false,
        }
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            id: task.id.clone(),
            text: task.text.clone(),
            done: task.done,
        }
    }
}

/// Client for the `/todos` collection resource.
#[derive(Clone)]
pub struct TaskClient {
    client: Client,
    base_url: String,
}

impl TaskClient {
    /// Build a client against `base_url` (scheme + host + port, no
    /// trailing slash) with the configured timeouts. A hung server
    /// surfaces as a transport failure instead of blocking forever.
    pub fn new(base_url: &str, sync: &SyncConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(sync.connect_timeout())
            .timeout(sync.request_timeout())
            .build()
            .expect("failed to build http client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// `GET {base}/todos`: the full collection.
    pub async fn list(&self) -> Result<Vec<TaskRecord>, SyncError> {
        let url = self.collection_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.clone(),
                source,
            })?;

        let response = check_status(response, &url)?;
        response
            .json()
            .await
            .map_err(|source| SyncError::Decode { url, source })
    }

    /// `POST {base}/todos/`: create one task.
    pub async fn create(&self, record: &TaskRecord) -> Result<(), SyncError> {
        let url = format!("{}/", self.collection_url());
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.clone(),
                source,
            })?;

        check_status(response, &url)?;
        Ok(())
    }

    /// `PUT {base}/todos/{id}`: update a task in place.
    pub async fn update(&self, record: &TaskRecord) -> Result<(), SyncError> {
        let url = self.item_url(&record.id);
        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.clone(),
                source,
            })?;

        check_status(response, &url)?;
        Ok(())
    }

    /// `DELETE {base}/todos/{id}`.
    pub async fn delete(&self, id: &str) -> Result<(), SyncError> {
        let url = self.item_url(id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.clone(),
                source,
            })?;

        check_status(response, &url)?;
        Ok(())
    }
}

fn check_status(
    response: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SyncError::UnexpectedStatus {
            url: url.to_string(),
            status,
        })
    }
}
