//! Background task spawning for forms service requests
//!
//! Each request runs on its own tokio task and reports back with an
//! [`ApiEvent`] on the app's channel. The event loop drains the channel on
//! every pass, so the UI keeps drawing and reading keys while a request is
//! pending.

use crate::api::{ApiError, FormsApi};
use crate::state::{FormPayload, FormRecord, FormSummary, SubmissionPayload};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of a finished request, tagged with the page generation it was
/// issued for
#[derive(Debug)]
pub enum ApiEvent {
    FormsListed {
        page: u64,
        result: Result<Vec<FormSummary>, ApiError>,
    },
    FormLoaded {
        page: u64,
        form_id: String,
        result: Result<FormRecord, ApiError>,
    },
    /// `form_id` is `None` for a newly created form
    FormSaved {
        page: u64,
        form_id: Option<String>,
        result: Result<(), ApiError>,
    },
    FormDeleted {
        page: u64,
        form_id: String,
        result: Result<(), ApiError>,
    },
    ResponseSubmitted {
        page: u64,
        form_id: String,
        result: Result<(), ApiError>,
    },
}

impl ApiEvent {
    /// Page generation the request was issued for
    pub fn page(&self) -> u64 {
        match self {
            Self::FormsListed { page, .. }
            | Self::FormLoaded { page, .. }
            | Self::FormSaved { page, .. }
            | Self::FormDeleted { page, .. }
            | Self::ResponseSubmitted { page, .. } => *page,
        }
    }
}

/// Spawn the forms list fetch in background
pub fn spawn_list_forms(api: Arc<dyn FormsApi>, tx: mpsc::Sender<ApiEvent>, page: u64) {
    tokio::spawn(async move {
        let result = api.list_forms().await;
        let _ = tx.send(ApiEvent::FormsListed { page, result }).await;
    });
}

/// Spawn a single form fetch in background
pub fn spawn_get_form(
    api: Arc<dyn FormsApi>,
    tx: mpsc::Sender<ApiEvent>,
    page: u64,
    form_id: String,
) {
    tokio::spawn(async move {
        let result = api.get_form(&form_id).await;
        let _ = tx
            .send(ApiEvent::FormLoaded {
                page,
                form_id,
                result,
            })
            .await;
    });
}

/// Spawn a create (no id) or update (with id) in background
pub fn spawn_save_form(
    api: Arc<dyn FormsApi>,
    tx: mpsc::Sender<ApiEvent>,
    page: u64,
    form_id: Option<String>,
    payload: FormPayload,
) {
    tokio::spawn(async move {
        let result = match &form_id {
            None => api.create_form(&payload).await.map(|created| {
                tracing::debug!(
                    "Created form {}",
                    created.as_deref().unwrap_or("(unknown id)")
                );
            }),
            Some(id) => api.update_form(id, &payload).await,
        };
        let _ = tx
            .send(ApiEvent::FormSaved {
                page,
                form_id,
                result,
            })
            .await;
    });
}

/// Spawn a form deletion in background
pub fn spawn_delete_form(
    api: Arc<dyn FormsApi>,
    tx: mpsc::Sender<ApiEvent>,
    page: u64,
    form_id: String,
) {
    tokio::spawn(async move {
        let result = api.delete_form(&form_id).await;
        let _ = tx
            .send(ApiEvent::FormDeleted {
                page,
                form_id,
                result,
            })
            .await;
    });
}

/// Spawn a response submission in background
pub fn spawn_submit_response(
    api: Arc<dyn FormsApi>,
    tx: mpsc::Sender<ApiEvent>,
    page: u64,
    form_id: String,
    payload: SubmissionPayload,
) {
    tokio::spawn(async move {
        let result = api.submit_response(&form_id, &payload).await;
        let _ = tx
            .send(ApiEvent::ResponseSubmitted {
                page,
                form_id,
                result,
            })
            .await;
    });
}
