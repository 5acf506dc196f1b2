//! Radix-tree request router.
//!
//! One tree of paths. O(path-length) lookup. Verbs are not part of the
//! route: every request on a path goes to that path's [`Chain`], and a
//! [`ViewHandler`](crate::ViewHandler) inside the chain picks the verb.

use std::collections::HashMap;

use matchit::Router as MatchitRouter;

use crate::handler::BoxFuture;
use crate::middleware::Chain;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::mount`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: MatchitRouter<Chain>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Mounts a middleware chain on a path. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// mounted.
    pub fn mount(mut self, path: &str, chain: Chain) -> Self {
        self.routes
            .insert(path, chain)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes `req` by path and runs it through the mounted chain.
    ///
    /// Unknown paths are answered `404 Not Found`.
    pub fn handle(&self, req: Request) -> BoxFuture<Response> {
        match self.lookup(req.path()) {
            Some((chain, params)) => chain.handle(req.with_params(params)),
            None => Box::pin(async { Response::status(Status::NotFound) }),
        }
    }

    fn lookup(&self, path: &str) -> Option<(Chain, HashMap<String, String>)> {
        let matched = self.routes.at(path).ok()?;
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((matched.value.clone(), params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::middleware::{Next, from_fn};

    fn get(path: &str) -> Request {
        Request::from(http::Request::builder().uri(path).body(Bytes::new()).unwrap())
    }

    #[tokio::test]
    async fn passes_path_params_to_the_chain() {
        let router = Router::new().mount(
            "/users/{id}",
            Chain::new().with(from_fn(|req: Request, _next: Next| async move {
                Response::text(req.param("id").unwrap_or("none").to_owned())
            })),
        );

        let res = router.handle(get("/users/42")).await;
        assert_eq!(res.body(), b"42");
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let res = Router::new().handle(get("/nowhere")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::new()
            .mount("/users/{id}", Chain::new())
            .mount("/users/{name}", Chain::new());
    }
}
