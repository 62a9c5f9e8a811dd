//! Resource-access layer for the HireBoard UI.
//!
//! This crate provides:
//! - One leaf operation per backend resource-action pair (jobs, companies,
//!   applications, saved jobs)
//! - The [`Fetch`] request-lifecycle wrapper exposing
//!   `{trigger, data, loading, error}` to UI bindings
//!
//! Every operation takes a caller-supplied bearer token, issues one filtered
//! query or one upload-then-insert sequence, and maps the outcome to
//! `Option<rows>`: expected backend failures are logged and collapse to
//! `None`, so callers treat `None` as "operation did not succeed" without
//! distinguishing causes. Credential failures are the only errors that
//! surface, through the wrapper's `error` field.

pub mod applications;
pub mod companies;
pub mod fetch;
pub mod jobs;

pub use applications::ApplicationsApi;
pub use companies::CompaniesApi;
pub use fetch::{Fetch, STORE_AUDIENCE};
pub use jobs::JobsApi;
