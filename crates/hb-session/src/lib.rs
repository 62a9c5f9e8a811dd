//! Session credential provider for the HireBoard backend.
//!
//! Every store or storage operation runs under a short-lived bearer token
//! minted by the identity provider for the active user session. This crate
//! provides:
//! - The [`TokenProvider`] capability trait, injected into callers instead of
//!   ambient session state
//! - [`SessionClient`], the REST implementation against the identity provider
//! - [`StaticTokenProvider`] for service contexts and tests
//!
//! Tokens are minted per call and never cached here.

pub mod client;
pub mod error;
pub mod provider;

pub use client::{SessionClient, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use provider::{StaticTokenProvider, TokenProvider};
