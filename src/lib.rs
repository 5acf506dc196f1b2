//! # tsu-view
//!
//! Class-style views for a small middleware-chain HTTP server.
//!
//! Write one type with a handler per HTTP verb. Mount it as one middleware.
//! The view takes care of the rest:
//!
//! - **Dispatch** — each request goes to the handler for its verb.
//! - **`OPTIONS`** — answered automatically with `204` and an `Allowed`
//!   header listing the supported verbs, unless the view handles it itself.
//! - **`405`** — a verb with no handler becomes a `Method Not Allowed` error,
//!   built by a pluggable error generator ([`Options::errors`] >
//!   [`View::errors`] > [`Error::from_code`]).
//! - **Failures** — an `Err` returned by a handler and a panic inside one
//!   take the same path: the chain's catchers.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tsu_view::middleware::{Chain, Next, catch_fn};
//! use tsu_view::{Error, Method, Options, Request, Response, Router, Server, Slot, Status, View};
//!
//! #[derive(Default)]
//! struct Users;
//!
//! impl Users {
//!     async fn get(self: Arc<Self>, req: Request, _next: Next) -> Result<Response, Error> {
//!         let id = req.param("id").unwrap_or("unknown");
//!         Ok(Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes()))
//!     }
//!
//!     async fn delete(self: Arc<Self>, _req: Request, _next: Next) -> Result<Status, Error> {
//!         Ok(Status::NoContent)
//!     }
//! }
//!
//! impl View for Users {
//!     fn verb(method: Method) -> Option<Slot<Self>> {
//!         match method {
//!             Method::Get => Some(Slot::new(Self::get)),
//!             Method::Delete => Some(Slot::new(Self::delete)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let users = Chain::new()
//!         .with(Users::handler(Options::new()))
//!         .catch(catch_fn(|err: Error| async move {
//!             Ok::<_, Error>(Response::text(format!("sorry: {err}")))
//!         }));
//!
//!     let app = Router::new().mount("/users/{id}", users);
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;
mod view;

pub mod middleware;

pub use error::{Error, ErrorFactory};
pub use handler::{BoxFuture, HandlerResult, Slot};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::{InvalidStatus, Status};
pub use view::{Options, View, ViewHandler};
