//! Trait abstraction for the forms client to enable mocking in tests

use super::error::ApiError;
use crate::state::{FormPayload, FormRecord, FormSummary, SubmissionPayload};
use async_trait::async_trait;

/// Operations offered by the forms service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// List all forms
    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError>;

    /// Fetch a form with its fields and responses
    async fn get_form(&self, id: &str) -> Result<FormRecord, ApiError>;

    /// Create a form, returning the id the service assigned if it reported one
    async fn create_form(&self, payload: &FormPayload) -> Result<Option<String>, ApiError>;

    /// Replace title and fields of an existing form
    async fn update_form(&self, id: &str, payload: &FormPayload) -> Result<(), ApiError>;

    /// Delete a form
    async fn delete_form(&self, id: &str) -> Result<(), ApiError>;

    /// Append a response to a form
    async fn submit_response(&self, id: &str, payload: &SubmissionPayload)
        -> Result<(), ApiError>;
}
