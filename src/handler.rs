//! Verb handler slots and type erasure.
//!
//! # How verb handlers are stored
//!
//! A view keeps one handler per HTTP verb in a `HashMap<Method, Slot<V>>`.
//! Every handler has a different concrete type (each `async fn` has its own
//! anonymous future), so we use **trait objects** (`dyn ErasedSlot<V>`) to
//! hide the concrete type and store them uniformly.
//!
//! The chain from user code to vtable call is:
//!
//! ```text
//! async fn get(self: Arc<Self>, req, next) -> Result<…> { … }   ← user writes this
//!        ↓ fn verb(Method::Get) -> Some(Slot::new(Self::get))
//! Arc::new(FnSlot(Self::get))                                   ← heap-allocated wrapper
//!        ↓  stored as Slot<V> = Arc<dyn ErasedSlot<V>>
//! slot.call(view, req, next)  at request time                   ← one vtable dispatch
//!        ↓
//! Box::pin(async { get(view, req, next).await.map(into_response) })  ← BoxFuture
//! ```
//!
//! Handlers receive the view as `Arc<Self>`: one instance serves every
//! concurrent request routed through its middleware, so it is shared and
//! read-only. Whatever a handler needs per request travels in the
//! [`Request`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::Error;
use crate::middleware::Next;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future.
///
/// `Pin<Box<…>>` is required because the async runtime must be able to poll
/// the future in-place — it cannot move it in memory after the first poll.
/// `Send + 'static` let tokio move the future across threads safely.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// What a verb handler resolves to: a response, or an error for the chain's
/// catchers.
pub type HandlerResult = Result<Response, Error>;

/// Internal dispatch interface.
trait ErasedSlot<V>: Send + Sync {
    fn call(&self, view: Arc<V>, req: Request, next: Next) -> BoxFuture<HandlerResult>;
}

/// One verb handler of a view of type `V`.
///
/// Build with [`Slot::new`] from any function shaped like
///
/// ```text
/// async fn name(self: Arc<Self>, req: Request, next: Next) -> Result<impl IntoResponse, impl Into<Error>>
/// ```
///
/// Cloning is one atomic increment.
pub struct Slot<V> {
    inner: Arc<dyn ErasedSlot<V>>,
}

impl<V> Slot<V>
where
    V: Send + Sync + 'static,
{
    pub fn new<F, Fut, R, E>(f: F) -> Self
    where
        F: Fn(Arc<V>, Request, Next) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        R: IntoResponse,
        E: Into<Error>,
    {
        Self { inner: Arc::new(FnSlot(f)) }
    }

    pub(crate) fn call(&self, view: Arc<V>, req: Request, next: Next) -> BoxFuture<HandlerResult> {
        self.inner.call(view, req, next)
    }
}

impl<V> Clone for Slot<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype wrapper that holds a concrete handler `F` and implements
/// [`ErasedSlot`], bridging the typed world to the trait-object world.
struct FnSlot<F>(F);

impl<V, F, Fut, R, E> ErasedSlot<V> for FnSlot<F>
where
    F: Fn(Arc<V>, Request, Next) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: IntoResponse,
    E: Into<Error>,
{
    fn call(&self, view: Arc<V>, req: Request, next: Next) -> BoxFuture<HandlerResult> {
        let fut = (self.0)(view, req, next);
        Box::pin(async move {
            fut.await
                .map(IntoResponse::into_response)
                .map_err(Into::into)
        })
    }
}
