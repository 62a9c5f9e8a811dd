//! PostgREST client for the relational store.
//!
//! This crate provides:
//! - A typed REST client over the store's `/rest/v1` endpoint
//! - Select/insert/update/delete with embedded-resource projections
//! - Equality and case-insensitive substring filters
//! - Per-request bearer credentials (never cached here)

pub mod client;
pub mod error;
pub mod metrics;
pub mod query;

#[cfg(test)]
mod client_tests;

pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use query::{Filter, SelectQuery};
