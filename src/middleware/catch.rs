use std::future::Future;

use crate::error::Error;
use crate::handler::BoxFuture;
use crate::response::{IntoResponse, Response};

/// Error-handling middleware.
///
/// Catchers see every error passed to [`Next::fail`](super::Next::fail), in
/// registration order. Return `Ok` to answer the request, or `Err` to pass
/// the (possibly replaced) error to the next catcher.
pub trait Catcher: Send + Sync + 'static {
    fn catch(&self, err: Error) -> BoxFuture<Result<Response, Error>>;
}

/// Adapts an async closure `Fn(Error) -> impl Future<Output = Result<_, _>>`
/// into a [`Catcher`].
pub fn catch_fn<F, Fut, R, E>(f: F) -> CatchFn<F>
where
    F: Fn(Error) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: IntoResponse,
    E: Into<Error>,
{
    CatchFn(f)
}

/// Catcher built by [`catch_fn`].
pub struct CatchFn<F>(F);

impl<F, Fut, R, E> Catcher for CatchFn<F>
where
    F: Fn(Error) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: IntoResponse,
    E: Into<Error>,
{
    fn catch(&self, err: Error) -> BoxFuture<Result<Response, Error>> {
        let fut = (self.0)(err);
        Box::pin(async move {
            fut.await
                .map(IntoResponse::into_response)
                .map_err(Into::into)
        })
    }
}
