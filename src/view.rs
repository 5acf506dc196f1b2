//! Class-style views: one type, one handler per HTTP verb.
//!
//! Implement [`View`] on a type, say which verbs it answers, and mount
//! [`View::handler`] as a single middleware:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tsu_view::middleware::{Chain, Next};
//! use tsu_view::{Error, Method, Options, Request, Response, Router, Slot, View};
//!
//! #[derive(Default)]
//! struct Users;
//!
//! impl Users {
//!     async fn get(self: Arc<Self>, _req: Request, _next: Next) -> Result<Response, Error> {
//!         Ok(Response::text("alice, bob"))
//!     }
//!
//!     async fn post(self: Arc<Self>, req: Request, _next: Next) -> Result<Response, Error> {
//!         if req.body().is_empty() {
//!             return Err(Error::new(400, "empty body"));
//!         }
//!         Ok(Response::text("created"))
//!     }
//! }
//!
//! impl View for Users {
//!     fn verb(method: Method) -> Option<Slot<Self>> {
//!         match method {
//!             Method::Get => Some(Slot::new(Self::get)),
//!             Method::Post => Some(Slot::new(Self::post)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let app = Router::new().mount("/users", Chain::new().with(Users::handler(Options::new())));
//! # drop(app);
//! ```
//!
//! The resulting middleware:
//!
//! - dispatches each request to the handler for its verb,
//! - answers `OPTIONS` with `204` and an `Allowed` header listing every
//!   supported verb, unless the view handles `OPTIONS` itself,
//! - fails with a `405` error when the verb has no handler,
//! - hands handler errors *and* handler panics to the chain's catchers.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::error::{self, Error, ErrorFactory};
use crate::handler::{BoxFuture, Slot};
use crate::method::Method;
use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// A type whose methods handle HTTP verbs.
pub trait View: Send + Sync + Sized + 'static {
    /// Returns the handler for `method`, if this view has one.
    ///
    /// Called once per verb in [`Method::ALL`] when a [`ViewHandler`] is
    /// built; the answers are fixed for the handler's lifetime.
    fn verb(method: Method) -> Option<Slot<Self>>;

    /// Type-level error generator for the `405` path.
    ///
    /// Used when [`Options`] carries no override. `None` falls back to
    /// [`Error::from_code`].
    fn errors() -> Option<ErrorFactory> {
        None
    }

    /// Builds the dispatch middleware around a fresh instance.
    fn handler(options: Options) -> ViewHandler<Self>
    where
        Self: Default,
    {
        ViewHandler::new(Self::default(), options)
    }

    /// [`handler`](View::handler) with default [`Options`].
    fn handler_default() -> ViewHandler<Self>
    where
        Self: Default,
    {
        Self::handler(Options::default())
    }
}

/// Per-handler configuration.
#[derive(Clone, Default)]
pub struct Options {
    errors: Option<ErrorFactory>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the error generator for this handler, taking precedence
    /// over [`View::errors`].
    ///
    /// ```rust
    /// use tsu_view::{Error, Options};
    ///
    /// let options = Options::new().errors(|code| Error::new(code, "nope"));
    /// # drop(options);
    /// ```
    pub fn errors<F>(mut self, f: F) -> Self
    where
        F: Fn(u16) -> Error + Send + Sync + 'static,
    {
        self.errors = Some(Arc::new(f));
        self
    }
}

enum Route<V> {
    Verb(Slot<V>),
    /// The built-in `OPTIONS` responder.
    Allowed,
}

struct Inner<V> {
    view: Arc<V>,
    routes: HashMap<Method, Route<V>>,
    allowed: Vec<Method>,
    errors: ErrorFactory,
}

/// The dispatch middleware produced by [`View::handler`].
///
/// Holds one view instance and never mutates it; clones share it.
pub struct ViewHandler<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for ViewHandler<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<V: View> ViewHandler<V> {
    /// Builds the dispatch middleware around an existing instance.
    ///
    /// Use this when the view carries state that `Default` cannot supply.
    pub fn new(view: V, options: Options) -> Self {
        let mut routes: HashMap<Method, Route<V>> = Method::ALL
            .into_iter()
            .filter_map(|method| V::verb(method).map(|slot| (method, Route::Verb(slot))))
            .collect();
        routes.entry(Method::Options).or_insert(Route::Allowed);

        let allowed: Vec<Method> = Method::ALL
            .into_iter()
            .filter(|method| routes.contains_key(method))
            .collect();

        let errors = error::resolve_factory(options.errors, V::errors());

        debug!(view = type_name::<V>(), allowed = %join(&allowed), "view handler ready");

        Self {
            inner: Arc::new(Inner { view: Arc::new(view), routes, allowed, errors }),
        }
    }
}

impl<V: View> Middleware for ViewHandler<V> {
    fn call(&self, req: Request, next: Next) -> BoxFuture<Response> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move { inner.dispatch(req, next).await })
    }
}

impl<V: View> Inner<V> {
    async fn dispatch(&self, req: Request, next: Next) -> Response {
        let verb = req.verb();
        let route = Method::from_verb(&verb).and_then(|method| self.routes.get(&method));

        match route {
            None => {
                debug!(view = type_name::<V>(), verb = %verb, "no handler for verb");
                let err = (self.errors)(Status::MethodNotAllowed.code());
                next.fail(err).await
            }
            Some(Route::Allowed) => Response::builder()
                .status(Status::NoContent)
                .header("Allowed", &join(&self.allowed))
                .no_body(),
            Some(Route::Verb(slot)) => {
                let rescue = next.rescue();
                let view = Arc::clone(&self.view);
                // The call itself happens inside the guarded future so a
                // panic before the first await is caught too.
                let call = async move { slot.call(view, req, next).await };

                let err = match AssertUnwindSafe(call).catch_unwind().await {
                    Ok(Ok(res)) => return res,
                    Ok(Err(err)) => err,
                    Err(payload) => Error::panic(panic_message(payload)),
                };
                warn!(view = type_name::<V>(), verb = %verb, error = %err, "view handler failed");
                rescue.fail(err).await
            }
        }
    }
}

fn join(methods: &[Method]) -> String {
    methods.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(",")
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bytes::Bytes;

    use super::*;
    use crate::middleware::{Chain, catch_fn, from_fn};

    fn request(method: &str) -> Request {
        Request::from(
            http::Request::builder()
                .method(method)
                .uri("/")
                .body(Bytes::new())
                .unwrap(),
        )
    }

    async fn ok<V: Send + Sync>(_: Arc<V>, _: Request, _: Next) -> Result<Response, Error> {
        Ok(Response::text("ok"))
    }

    #[derive(Default)]
    struct Empty;

    impl View for Empty {
        fn verb(_: Method) -> Option<Slot<Self>> {
            None
        }
    }

    /// Declares `put` before `delete` and `get` on purpose.
    #[derive(Default)]
    struct Shuffled;

    impl View for Shuffled {
        fn verb(method: Method) -> Option<Slot<Self>> {
            match method {
                Method::Put => Some(Slot::new(ok::<Self>)),
                Method::Delete => Some(Slot::new(ok::<Self>)),
                Method::Get => Some(Slot::new(ok::<Self>)),
                _ => None,
            }
        }
    }

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl Counting {
        async fn get(self: Arc<Self>, req: Request, _: Next) -> Result<Response, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Response::text(req.path().to_owned()))
        }
    }

    impl View for Counting {
        fn verb(method: Method) -> Option<Slot<Self>> {
            (method == Method::Get).then(|| Slot::new(Self::get))
        }
    }

    #[test]
    fn discovery_follows_registry_order() {
        let handler = Shuffled::handler_default();
        assert_eq!(
            handler.inner.allowed,
            [Method::Delete, Method::Get, Method::Options, Method::Put]
        );
    }

    #[test]
    fn options_is_always_discovered() {
        assert_eq!(Empty::handler_default().inner.allowed, [Method::Options]);
    }

    #[test]
    fn every_handler_keeps_its_own_record() {
        let a = Shuffled::handler_default();
        let b = Empty::handler_default();
        assert_eq!(a.inner.allowed.len(), 4);
        assert_eq!(b.inner.allowed.len(), 1);
    }

    #[tokio::test]
    async fn dispatches_to_matching_verb_once() {
        let handler = ViewHandler::new(Counting::default(), Options::new());
        let chain = Chain::new().with(handler.clone());

        let res = chain.handle(request("GET")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"/");
        assert_eq!(handler.inner.view.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_verbs_are_405() {
        let chain = Chain::new().with(Counting::handler_default());
        let res = chain.handle(request("BREW")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.body(), b"Method Not Allowed");
    }

    #[tokio::test]
    async fn missing_verb_calls_next_exactly_once() {
        let failures = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&failures);
        let after = Arc::new(AtomicUsize::new(0));
        let reached = Arc::clone(&after);

        let chain = Chain::new()
            .with(Empty::handler_default())
            .with(from_fn(move |_req, _next| {
                reached.fetch_add(1, Ordering::SeqCst);
                async { Response::text("unreachable") }
            }))
            .catch(catch_fn(move |err: Error| {
                seen.fetch_add(1, Ordering::SeqCst);
                async move { Err::<Response, _>(err) }
            }));

        let res = chain.handle(request("DELETE")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(failures.load(Ordering::SeqCst), 1);
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn default_options_lists_allowed_verbs() {
        let chain = Chain::new().with(Shuffled::handler_default());
        let res = chain.handle(request("OPTIONS")).await;
        assert_eq!(res.status_code(), 204);
        assert_eq!(res.header("Allowed"), Some("DELETE,GET,OPTIONS,PUT"));
        assert!(res.body().is_empty());
    }

    #[test]
    fn panic_messages() {
        assert_eq!(panic_message(Box::new("static")), "static");
        assert_eq!(panic_message(Box::new(String::from("owned"))), "owned");
        assert_eq!(panic_message(Box::new(42)), "unknown panic payload");
    }
}
