//! Forms service client module for JSON-over-HTTP communication

mod client;
mod error;
mod traits;

pub use client::{FormsClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::FormsApi;

#[cfg(test)]
pub use traits::MockFormsApi;
