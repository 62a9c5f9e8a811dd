//! Object storage client for HireBoard uploads.
//!
//! This crate provides:
//! - Byte uploads to the platform's `/storage/v1/object` endpoint
//! - Deterministic public URLs for stored objects
//! - Randomized object-key generation for resumes and company logos

pub mod client;
pub mod error;
pub mod operations;

pub use client::{StorageClient, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use operations::{object_key, FileUpload, COMPANY_LOGO_BUCKET, RESUMES_BUCKET};
