//! Request-lifecycle wrapper.
//!
//! UI bindings do not call resource operations directly; they hold a
//! [`Fetch`] that pairs one operation with a fixed context and a credential
//! provider, and observe `{data, loading, error}` across triggers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hb_session::{SessionError, TokenProvider};

/// Audience the store credential is minted for.
pub const STORE_AUDIENCE: &str = "store";

type FetchFuture<T> = Pin<Box<dyn Future<Output = Option<T>> + Send>>;
type FetchFn<Ctx, Args, T> = Box<dyn Fn(String, Ctx, Args) -> FetchFuture<T> + Send + Sync>;

/// One resource operation bound to a fixed context and a credential
/// provider.
///
/// Each `trigger` mints a fresh bearer token, runs the operation with the
/// fixed context plus the per-call arguments, and records the outcome:
/// - `data` holds the result of the last completed operation; a `None`
///   result from an expected backend failure is stored as such;
/// - `error` holds the credential failure from the last trigger, cleared
///   when a new trigger starts;
/// - `loading` is unset until the first trigger, then tracks whether one is
///   in flight.
///
/// `trigger` takes `&mut self`, so triggers on one instance cannot overlap;
/// every instance observes its own operations in order.
pub struct Fetch<Ctx: 'static, Args: 'static, T: 'static> {
    provider: Arc<dyn TokenProvider>,
    options: Ctx,
    cb: FetchFn<Ctx, Args, T>,
    /// Result of the last completed operation
    pub data: Option<T>,
    /// Whether a trigger is in flight; unset until the first one
    pub loading: Option<bool>,
    /// Credential failure from the last trigger
    pub error: Option<SessionError>,
}

impl<Ctx: 'static, Args: 'static, T: 'static> Fetch<Ctx, Args, T>
where
    Ctx: Clone,
{
    /// Wrap `cb` with a fixed context and a credential provider.
    pub fn new<F, Fut>(provider: Arc<dyn TokenProvider>, options: Ctx, cb: F) -> Self
    where
        F: Fn(String, Ctx, Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            provider,
            options,
            cb: Box::new(move |token, ctx, args| Box::pin(cb(token, ctx, args))),
            data: None,
            loading: None,
            error: None,
        }
    }

    /// Run the wrapped operation once with the given per-call arguments.
    ///
    /// Returns the stored `data` for call-site convenience. When the
    /// credential fetch fails the operation is not invoked and `data` keeps
    /// its previous value.
    pub async fn trigger(&mut self, args: Args) -> &Option<T> {
        self.loading = Some(true);
        self.error = None;

        match self.provider.bearer_token(STORE_AUDIENCE).await {
            Ok(token) => {
                self.data = (self.cb)(token, self.options.clone(), args).await;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }

        self.loading = Some(false);
        &self.data
    }
}
