//! Middleware layer.
//!
//! Middleware intercepts requests on their way to a response and is the
//! right place for cross-cutting concerns: structured tracing, request-id
//! injection, authentication-header inspection — and verb dispatch, which is
//! what [`ViewHandler`](crate::ViewHandler) does.
//!
//! A [`Chain`] runs its middleware in registration order. Each one receives
//! the request and a [`Next`] continuation and either:
//!
//! - answers the request itself,
//! - yields with [`Next::run`], or
//! - gives up with [`Next::fail`], which hands the error to the chain's
//!   [`Catcher`]s.
//!
//! ```rust
//! use tsu_view::middleware::{Chain, catch_fn, from_fn};
//! use tsu_view::{Error, Response, Status};
//!
//! let chain = Chain::new()
//!     .with(from_fn(|req, next: tsu_view::middleware::Next| async move {
//!         if req.header("authorization").is_none() {
//!             return next.fail(Status::Unauthorized.into()).await;
//!         }
//!         next.run(req).await
//!     }))
//!     .with(from_fn(|_req, _next| async { Response::text("hello") }))
//!     .catch(catch_fn(|err: Error| async move {
//!         Ok::<_, Error>(Response::text(format!("sorry: {err}")))
//!     }));
//! # drop(chain);
//! ```

mod catch;
mod chain;

use std::future::Future;

use crate::handler::BoxFuture;
use crate::request::Request;
use crate::response::Response;

pub use catch::{CatchFn, Catcher, catch_fn};
pub use chain::{Chain, Next};

/// One step of a [`Chain`].
///
/// Implemented by [`ViewHandler`](crate::ViewHandler) and by closures
/// wrapped with [`from_fn`].
pub trait Middleware: Send + Sync + 'static {
    fn call(&self, req: Request, next: Next) -> BoxFuture<Response>;
}

/// Adapts an async closure `Fn(Request, Next) -> impl Future<Output = Response>`
/// into a [`Middleware`].
pub fn from_fn<F, Fut>(f: F) -> FromFn<F>
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    FromFn(f)
}

/// Middleware built by [`from_fn`].
pub struct FromFn<F>(F);

impl<F, Fut> Middleware for FromFn<F>
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, req: Request, next: Next) -> BoxFuture<Response> {
        Box::pin((self.0)(req, next))
    }
}
