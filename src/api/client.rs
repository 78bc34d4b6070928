//! HTTP client for communicating with the forms service
//!
//! Every call is a single JSON request; failures are returned to the caller
//! and never retried.

use super::error::ApiError;
use super::traits::FormsApi;
use crate::state::{FormPayload, FormRecord, FormSummary, SubmissionPayload};
use async_trait::async_trait;
use reqwest::{header, Response, StatusCode};
use std::time::Duration;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/forms";

/// Client for communicating with the forms service
#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::Client,
    base_url: String,
}

impl FormsClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Absolute URL for a path below the base
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map non-success statuses to errors
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Parse a form body; a JSON `null` means the form does not exist
fn parse_form(body: &str) -> Result<FormRecord, ApiError> {
    let form: Option<FormRecord> = serde_json::from_str(body)?;
    form.ok_or(ApiError::NotFound)
}

/// Pull the service-assigned id out of a create response, if any
fn created_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("_id")
        .or_else(|| value.get("id"))
        .and_then(|id| id.as_str())
        .map(str::to_string)
}

#[async_trait]
impl FormsApi for FormsClient {
    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError> {
        tracing::debug!("Listing forms");
        let response = check_status(self.http.get(self.url("/")).send().await?)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_form(&self, id: &str) -> Result<FormRecord, ApiError> {
        tracing::debug!("Fetching form {id}");
        let response = check_status(self.http.get(self.url(&format!("/{id}"))).send().await?)?;
        let body = response.text().await?;
        parse_form(&body)
    }

    async fn create_form(&self, payload: &FormPayload) -> Result<Option<String>, ApiError> {
        tracing::debug!(
            "Creating form '{}' with {} fields",
            payload.title,
            payload.fields.len()
        );
        let response = check_status(
            self.http
                .post(self.url("/create"))
                .json(payload)
                .send()
                .await?,
        )?;
        let body = response.text().await?;
        Ok(created_id(&body))
    }

    async fn update_form(&self, id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        tracing::debug!("Updating form {id}");
        check_status(
            self.http
                .put(self.url(&format!("/{id}/edit")))
                .json(payload)
                .send()
                .await?,
        )?;
        Ok(())
    }

    async fn delete_form(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!("Deleting form {id}");
        check_status(self.http.delete(self.url(&format!("/{id}"))).send().await?)?;
        Ok(())
    }

    async fn submit_response(
        &self,
        id: &str,
        payload: &SubmissionPayload,
    ) -> Result<(), ApiError> {
        tracing::debug!("Submitting response to form {id}");
        check_status(
            self.http
                .post(self.url(&format!("/form/{id}/submit")))
                .json(payload)
                .send()
                .await?,
        )?;
        Ok(())
    }
}
