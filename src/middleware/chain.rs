use std::sync::Arc;

use tracing::{debug, error};

use super::{Catcher, Middleware};
use crate::error::Error;
use crate::handler::BoxFuture;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

#[derive(Clone, Default)]
struct Stack {
    middleware: Vec<Arc<dyn Middleware>>,
    catchers: Vec<Arc<dyn Catcher>>,
}

/// An ordered list of middleware plus the catchers that handle their errors.
///
/// Build it once at startup and mount it on a [`Router`](crate::Router).
/// Cloning is one atomic increment; clones share the same stack.
#[derive(Clone, Default)]
pub struct Chain {
    stack: Arc<Stack>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware. Returns `self` for chaining.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        Arc::make_mut(&mut self.stack).middleware.push(Arc::new(middleware));
        self
    }

    /// Appends a catcher. Returns `self` for chaining.
    pub fn catch(mut self, catcher: impl Catcher) -> Self {
        Arc::make_mut(&mut self.stack).catchers.push(Arc::new(catcher));
        self
    }

    /// Runs `req` through the chain, starting at the first middleware.
    pub fn handle(&self, req: Request) -> BoxFuture<Response> {
        Next { stack: Arc::clone(&self.stack), index: 0 }.run(req)
    }
}

/// The continuation handed to every middleware.
///
/// Consumed by value: a middleware continues a request at most once, either
/// by yielding ([`run`](Next::run)) or by failing ([`fail`](Next::fail)).
pub struct Next {
    stack: Arc<Stack>,
    index: usize,
}

impl Next {
    /// Passes the request to the next middleware in the chain.
    ///
    /// Past the end of the chain the request is answered `404 Not Found`.
    pub fn run(self, req: Request) -> BoxFuture<Response> {
        let Some(middleware) = self.stack.middleware.get(self.index).cloned() else {
            return Box::pin(async { Response::status(Status::NotFound) });
        };
        middleware.call(req, Next { stack: self.stack, index: self.index + 1 })
    }

    /// Skips the remaining middleware and hands `err` to the catchers.
    pub fn fail(self, err: Error) -> BoxFuture<Response> {
        recover(self.stack, err)
    }

    /// Keeps a handle on the error path while `self` is given away.
    pub(crate) fn rescue(&self) -> Rescue {
        Rescue { stack: Arc::clone(&self.stack) }
    }
}

/// Error-only continuation, see [`Next::rescue`].
pub(crate) struct Rescue {
    stack: Arc<Stack>,
}

impl Rescue {
    pub(crate) fn fail(self, err: Error) -> BoxFuture<Response> {
        recover(self.stack, err)
    }
}

fn recover(stack: Arc<Stack>, err: Error) -> BoxFuture<Response> {
    Box::pin(async move {
        let mut err = err;
        for catcher in &stack.catchers {
            match catcher.catch(err).await {
                Ok(res) => return res,
                Err(e) => err = e,
            }
        }
        fallback(err)
    })
}

/// Renders an error nobody caught.
///
/// The error's status is honoured when it is a registered 4xx or 5xx code;
/// anything else becomes `500 Internal Server Error`.
fn fallback(err: Error) -> Response {
    let status = err
        .status()
        .and_then(|code| Status::try_from(code).ok())
        .filter(|s| s.is_error())
        .unwrap_or(Status::InternalServerError);

    if status.code() >= 500 {
        error!(status = status.code(), error = %err, "unhandled error");
    } else {
        debug!(status = status.code(), error = %err, "unhandled error");
    }

    Response::builder().status(status).text(status.reason())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bytes::Bytes;

    use super::*;
    use crate::middleware::{catch_fn, from_fn};

    fn get(path: &str) -> Request {
        Request::from(http::Request::builder().uri(path).body(Bytes::new()).unwrap())
    }

    #[tokio::test]
    async fn runs_middleware_in_order() {
        let chain = Chain::new()
            .with(from_fn(|req, next: Next| async move {
                let res = next.run(req).await;
                let body = format!("outer({})", String::from_utf8_lossy(res.body()));
                Response::text(body)
            }))
            .with(from_fn(|_req, _next| async { Response::text("inner") }));

        let res = chain.handle(get("/")).await;
        assert_eq!(res.body(), b"outer(inner)");
    }

    #[tokio::test]
    async fn exhausted_chain_is_404() {
        let res = Chain::new().handle(get("/")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn fail_skips_remaining_middleware() {
        let reached = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reached);

        let chain = Chain::new()
            .with(from_fn(|_req, next: Next| next.fail(Status::Forbidden.into())))
            .with(from_fn(move |_req, _next| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Response::text("unreachable") }
            }));

        let res = chain.handle(get("/")).await;
        assert_eq!(res.status_code(), 403);
        assert_eq!(res.body(), b"Forbidden");
        assert_eq!(reached.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn catchers_run_in_order_and_may_pass() {
        let chain = Chain::new()
            .with(from_fn(|_req, next: Next| next.fail(Error::other("oops"))))
            .catch(catch_fn(|err: Error| async move { Err::<Response, _>(err) }))
            .catch(catch_fn(|_err: Error| async {
                Ok::<_, Error>(Response::builder().status(Status::ServiceUnavailable).text("oh no"))
            }));

        let res = chain.handle(get("/")).await;
        assert_eq!(res.status_code(), 503);
        assert_eq!(res.body(), b"oh no");
    }

    #[tokio::test]
    async fn fallback_without_status_is_500() {
        let chain = Chain::new().with(from_fn(|_req, next: Next| next.fail(Error::other("oops"))));
        let res = chain.handle(get("/")).await;
        assert_eq!(res.status_code(), 500);
    }

    #[tokio::test]
    async fn fallback_ignores_non_error_statuses() {
        let chain = Chain::new().with(from_fn(|_req, next: Next| next.fail(Error::new(204, "odd"))));
        let res = chain.handle(get("/")).await;
        assert_eq!(res.status_code(), 500);
    }
}
