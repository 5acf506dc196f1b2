//! Unified error type.

use std::fmt;
use std::sync::Arc;

use crate::status::Status;

/// A status-code-to-error policy.
///
/// Views use one to build the error they forward when a request's verb has
/// no handler. See [`Options::errors`](crate::Options::errors) and
/// [`View::errors`](crate::View::errors).
pub type ErrorFactory = Arc<dyn Fn(u16) -> Error + Send + Sync + 'static>;

/// The error type carried through the middleware chain.
///
/// A middleware that cannot finish a request hands one of these to
/// [`Next::fail`](crate::middleware::Next::fail). Catchers decide how to
/// render it; the chain's fallback honours [`Error::status`].
///
/// The same type surfaces infrastructure failures from [`Server::serve`](crate::Server::serve):
/// binding to a port or accepting a connection.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    Http { status: u16, message: String },
    Handler(Box<dyn std::error::Error + Send + Sync + 'static>),
    Panic(String),
    Io(std::io::Error),
}

impl Error {
    /// An error carrying an explicit status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self { kind: Kind::Http { status, message: message.into() } }
    }

    /// The default error generator: `status` = `code`, message = the
    /// registry's reason phrase.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not a registered status. Codes reach this
    /// function from configuration, never from request data, so a bad one
    /// is a programming error.
    pub fn from_code(code: u16) -> Self {
        match Status::try_from(code) {
            Ok(status) => status.into(),
            Err(e) => panic!("{e}"),
        }
    }

    /// Wraps an arbitrary failure raised by application code.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self { kind: Kind::Handler(err.into()) }
    }

    pub(crate) fn panic(message: String) -> Self {
        Self { kind: Kind::Panic(message) }
    }

    /// The HTTP status this error asks downstream handlers to respond with.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            Kind::Http { status, .. } => Some(*status),
            Kind::Panic(_) => Some(Status::InternalServerError.code()),
            Kind::Handler(_) | Kind::Io(_) => None,
        }
    }

    /// `true` when the error was captured from a panicking handler.
    pub fn is_panic(&self) -> bool {
        matches!(self.kind, Kind::Panic(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Http { message, .. } => f.write_str(message),
            Kind::Handler(e) => write!(f, "handler: {e}"),
            Kind::Panic(msg) => write!(f, "handler panicked: {msg}"),
            Kind::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Kind::Handler(e) => Some(e.as_ref()),
            Kind::Io(e) => Some(e),
            Kind::Http { .. } | Kind::Panic(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self { kind: Kind::Io(e) }
    }
}

impl From<Status> for Error {
    fn from(s: Status) -> Self {
        Self::new(s.code(), s.reason())
    }
}

/// Resolves the error generator a view handler will use.
///
/// First match wins: call-site override, then type-level override, then
/// [`Error::from_code`].
pub(crate) fn resolve_factory(
    call_site: Option<ErrorFactory>,
    type_level: Option<ErrorFactory>,
) -> ErrorFactory {
    call_site.or(type_level).unwrap_or_else(default_factory)
}

fn default_factory() -> ErrorFactory {
    Arc::new(Error::from_code)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn from_code_uses_reason_phrase() {
        let err = Error::from_code(405);
        assert_eq!(err.status(), Some(405));
        assert_eq!(err.to_string(), "Method Not Allowed");
    }

    #[test]
    #[should_panic(expected = "invalid status code: 499")]
    fn from_code_fails_fast_on_unregistered_code() {
        let _ = Error::from_code(499);
    }

    #[test]
    fn other_errors_keep_their_source_and_carry_no_status() {
        let err = Error::other("database went away");
        assert_eq!(err.status(), None);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "handler: database went away");
    }

    #[test]
    fn panics_map_to_500() {
        let err = Error::panic("boom".to_owned());
        assert!(err.is_panic());
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn factory_precedence() {
        let call_site: ErrorFactory = Arc::new(|_| Error::new(401, "call site"));
        let type_level: ErrorFactory = Arc::new(|_| Error::new(418, "type level"));

        let f = resolve_factory(Some(call_site.clone()), Some(type_level.clone()));
        assert_eq!(f(405).status(), Some(401));

        let f = resolve_factory(None, Some(type_level));
        assert_eq!(f(405).status(), Some(418));

        let f = resolve_factory(None, None);
        assert_eq!(f(405).to_string(), "Method Not Allowed");
    }
}
