//! Typed HTTP calls against `/students`.

use reqwest::Response;
use roster_types::{
    CreatedResponse, ErrorBody, MessageResponse, StudentFields, StudentId, StudentRecord,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ClientError, ClientResult};

/// Thin client for the student API rooted at a base URL.
#[derive(Debug, Clone)]
pub struct StudentsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StudentsClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn students_url(&self) -> String {
        format!("{}/students", self.base_url)
    }

    fn student_url(&self, id: StudentId) -> String {
        format!("{}/students/{}", self.base_url, id)
    }

    /// `GET /students`
    pub async fn list(&self) -> ClientResult<Vec<StudentRecord>> {
        let resp = self.http.get(self.students_url()).send().await?;
        decode(resp).await
    }

    /// `POST /students`
    pub async fn create(&self, fields: &StudentFields) -> ClientResult<CreatedResponse> {
        let resp = self.http.post(self.students_url()).json(fields).send().await?;
        decode(resp).await
    }

    /// `PUT /students/{id}`
    pub async fn update(
        &self,
        id: StudentId,
        fields: &StudentFields,
    ) -> ClientResult<MessageResponse> {
        let resp = self.http.put(self.student_url(id)).json(fields).send().await?;
        decode(resp).await
    }

    /// `DELETE /students/{id}`
    pub async fn delete(&self, id: StudentId) -> ClientResult<MessageResponse> {
        let resp = self.http.delete(self.student_url(id)).send().await?;
        decode(resp).await
    }
}

/// Reads the whole body, then decodes it as `T` on success or as an
/// [`ErrorBody`] otherwise.
async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    debug!("HTTP {} ({} bytes)", status, bytes.len());

    if status.is_success() {
        return serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()));
    }

    let body: ErrorBody = serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("HTTP {status}: {e}")))?;
    Err(ClientError::Server {
        status: status.as_u16(),
        body,
    })
}
