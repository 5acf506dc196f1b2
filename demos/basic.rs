//! Minimal tsu-view example — one view per resource, one chain per path.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Try:
//!   curl -i http://localhost:3000/users/42
//!   curl -i -X OPTIONS http://localhost:3000/users/42
//!   curl -i -X DELETE http://localhost:3000/users/42
//!   curl -i -X PUT http://localhost:3000/users/42      # 405, rendered by the catcher
//!   curl -i -X POST http://localhost:3000/users -d '{"name":"alice"}'

use std::sync::Arc;

use tsu_view::middleware::{Chain, Next, catch_fn};
use tsu_view::{Error, Method, Options, Request, Response, Router, Server, Slot, Status, View};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .mount("/users", Chain::new().with(Users::handler(Options::new())).catch(catch_fn(render)))
        .mount("/users/{id}", Chain::new().with(User::handler_default()).catch(catch_fn(render)));

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// /users
#[derive(Default)]
struct Users;

impl Users {
    async fn post(self: Arc<Self>, req: Request, _next: Next) -> Result<Response, Error> {
        if req.body().is_empty() {
            return Err(Status::BadRequest.into());
        }

        Ok(Response::builder()
            .status(Status::Created)
            .header("location", "/users/99")
            .json(br#"{"id":"99","name":"new_user"}"#.to_vec()))
    }
}

impl View for Users {
    fn verb(method: Method) -> Option<Slot<Self>> {
        (method == Method::Post).then(|| Slot::new(Self::post))
    }
}

// /users/{id}
#[derive(Default)]
struct User;

impl User {
    async fn get(self: Arc<Self>, req: Request, _next: Next) -> Result<Response, Error> {
        let id = req.param("id").unwrap_or("unknown");
        Ok(Response::json(format!(r#"{{"id":"{id}","name":"alice"}}"#).into_bytes()))
    }

    async fn delete(self: Arc<Self>, _req: Request, _next: Next) -> Result<Status, Error> {
        Ok(Status::NoContent)
    }
}

impl View for User {
    fn verb(method: Method) -> Option<Slot<Self>> {
        match method {
            Method::Get => Some(Slot::new(Self::get)),
            Method::Delete => Some(Slot::new(Self::delete)),
            _ => None,
        }
    }
}

// Errors as JSON, keeping the status the view asked for.
async fn render(err: Error) -> Result<Response, Error> {
    let status = err
        .status()
        .and_then(|code| Status::try_from(code).ok())
        .unwrap_or(Status::InternalServerError);

    Ok(Response::builder()
        .status(status)
        .json(format!(r#"{{"error":"{err}"}}"#).into_bytes()))
}
