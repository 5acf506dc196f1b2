//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted — `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! The enum doubles as the status registry behind the default error
//! generator: [`Status::try_from`] rejects any code that is not listed here,
//! and [`Status::reason`] supplies the message of a generated error.
//!
//! ```rust
//! use tsu_view::{Response, Status};
//!
//! Response::status(Status::NoContent);
//!
//! assert_eq!(Status::try_from(405).unwrap().reason(), "Method Not Allowed");
//! assert!(Status::try_from(499).is_err());
//! ```

use std::fmt;

/// All IANA-registered HTTP status codes.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    // ── 1xx Informational ─────────────────────────────────────────────────────
    Continue,                      // 100
    SwitchingProtocols,            // 101
    Processing,                    // 102
    EarlyHints,                    // 103

    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                            // 200
    Created,                       // 201
    Accepted,                      // 202
    NonAuthoritativeInformation,   // 203
    NoContent,                     // 204
    ResetContent,                  // 205
    PartialContent,                // 206
    MultiStatus,                   // 207
    AlreadyReported,               // 208
    ImUsed,                        // 226

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    MultipleChoices,               // 300
    MovedPermanently,              // 301
    Found,                         // 302
    SeeOther,                      // 303
    NotModified,                   // 304
    TemporaryRedirect,             // 307
    PermanentRedirect,             // 308

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,                    // 400
    Unauthorized,                  // 401
    PaymentRequired,               // 402
    Forbidden,                     // 403
    NotFound,                      // 404
    MethodNotAllowed,              // 405
    NotAcceptable,                 // 406
    ProxyAuthenticationRequired,   // 407
    RequestTimeout,                // 408
    Conflict,                      // 409
    Gone,                          // 410
    LengthRequired,                // 411
    PreconditionFailed,            // 412
    ContentTooLarge,               // 413
    UriTooLong,                    // 414
    UnsupportedMediaType,          // 415
    RangeNotSatisfiable,           // 416
    ExpectationFailed,             // 417
    ImATeapot,                     // 418
    MisdirectedRequest,            // 421
    UnprocessableContent,          // 422
    Locked,                        // 423
    FailedDependency,              // 424
    TooEarly,                      // 425
    UpgradeRequired,               // 426
    PreconditionRequired,          // 428
    TooManyRequests,               // 429
    RequestHeaderFieldsTooLarge,   // 431
    UnavailableForLegalReasons,    // 451

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,           // 500
    NotImplemented,                // 501
    BadGateway,                    // 502
    ServiceUnavailable,            // 503
    GatewayTimeout,                // 504
    HttpVersionNotSupported,       // 505
    VariantAlsoNegotiates,         // 506
    InsufficientStorage,           // 507
    LoopDetected,                  // 508
    NotExtended,                   // 510
    NetworkAuthenticationRequired, // 511
}

impl Status {
    /// Every registered status, in ascending code order.
    pub const ALL: [Status; 61] = [
        Self::Continue,
        Self::SwitchingProtocols,
        Self::Processing,
        Self::EarlyHints,
        Self::Ok,
        Self::Created,
        Self::Accepted,
        Self::NonAuthoritativeInformation,
        Self::NoContent,
        Self::ResetContent,
        Self::PartialContent,
        Self::MultiStatus,
        Self::AlreadyReported,
        Self::ImUsed,
        Self::MultipleChoices,
        Self::MovedPermanently,
        Self::Found,
        Self::SeeOther,
        Self::NotModified,
        Self::TemporaryRedirect,
        Self::PermanentRedirect,
        Self::BadRequest,
        Self::Unauthorized,
        Self::PaymentRequired,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotAcceptable,
        Self::ProxyAuthenticationRequired,
        Self::RequestTimeout,
        Self::Conflict,
        Self::Gone,
        Self::LengthRequired,
        Self::PreconditionFailed,
        Self::ContentTooLarge,
        Self::UriTooLong,
        Self::UnsupportedMediaType,
        Self::RangeNotSatisfiable,
        Self::ExpectationFailed,
        Self::ImATeapot,
        Self::MisdirectedRequest,
        Self::UnprocessableContent,
        Self::Locked,
        Self::FailedDependency,
        Self::TooEarly,
        Self::UpgradeRequired,
        Self::PreconditionRequired,
        Self::TooManyRequests,
        Self::RequestHeaderFieldsTooLarge,
        Self::UnavailableForLegalReasons,
        Self::InternalServerError,
        Self::NotImplemented,
        Self::BadGateway,
        Self::ServiceUnavailable,
        Self::GatewayTimeout,
        Self::HttpVersionNotSupported,
        Self::VariantAlsoNegotiates,
        Self::InsufficientStorage,
        Self::LoopDetected,
        Self::NotExtended,
        Self::NetworkAuthenticationRequired,
    ];

    /// Numeric code (e.g. `405`).
    pub fn code(self) -> u16 {
        match self {
            Self::Continue                      => 100,
            Self::SwitchingProtocols            => 101,
            Self::Processing                    => 102,
            Self::EarlyHints                    => 103,
            Self::Ok                            => 200,
            Self::Created                       => 201,
            Self::Accepted                      => 202,
            Self::NonAuthoritativeInformation   => 203,
            Self::NoContent                     => 204,
            Self::ResetContent                  => 205,
            Self::PartialContent                => 206,
            Self::MultiStatus                   => 207,
            Self::AlreadyReported               => 208,
            Self::ImUsed                        => 226,
            Self::MultipleChoices               => 300,
            Self::MovedPermanently              => 301,
            Self::Found                         => 302,
            Self::SeeOther                      => 303,
            Self::NotModified                   => 304,
            Self::TemporaryRedirect             => 307,
            Self::PermanentRedirect             => 308,
            Self::BadRequest                    => 400,
            Self::Unauthorized                  => 401,
            Self::PaymentRequired               => 402,
            Self::Forbidden                     => 403,
            Self::NotFound                      => 404,
            Self::MethodNotAllowed              => 405,
            Self::NotAcceptable                 => 406,
            Self::ProxyAuthenticationRequired   => 407,
            Self::RequestTimeout                => 408,
            Self::Conflict                      => 409,
            Self::Gone                          => 410,
            Self::LengthRequired                => 411,
            Self::PreconditionFailed            => 412,
            Self::ContentTooLarge               => 413,
            Self::UriTooLong                    => 414,
            Self::UnsupportedMediaType          => 415,
            Self::RangeNotSatisfiable           => 416,
            Self::ExpectationFailed             => 417,
            Self::ImATeapot                     => 418,
            Self::MisdirectedRequest            => 421,
            Self::UnprocessableContent          => 422,
            Self::Locked                        => 423,
            Self::FailedDependency              => 424,
            Self::TooEarly                      => 425,
            Self::UpgradeRequired               => 426,
            Self::PreconditionRequired          => 428,
            Self::TooManyRequests               => 429,
            Self::RequestHeaderFieldsTooLarge   => 431,
            Self::UnavailableForLegalReasons    => 451,
            Self::InternalServerError           => 500,
            Self::NotImplemented                => 501,
            Self::BadGateway                    => 502,
            Self::ServiceUnavailable            => 503,
            Self::GatewayTimeout                => 504,
            Self::HttpVersionNotSupported       => 505,
            Self::VariantAlsoNegotiates         => 506,
            Self::InsufficientStorage           => 507,
            Self::LoopDetected                  => 508,
            Self::NotExtended                   => 510,
            Self::NetworkAuthenticationRequired => 511,
        }
    }

    /// Canonical reason phrase (e.g. `"Method Not Allowed"`).
    pub fn reason(self) -> &'static str {
        match self {
            Self::Continue                      => "Continue",
            Self::SwitchingProtocols            => "Switching Protocols",
            Self::Processing                    => "Processing",
            Self::EarlyHints                    => "Early Hints",
            Self::Ok                            => "OK",
            Self::Created                       => "Created",
            Self::Accepted                      => "Accepted",
            Self::NonAuthoritativeInformation   => "Non-Authoritative Information",
            Self::NoContent                     => "No Content",
            Self::ResetContent                  => "Reset Content",
            Self::PartialContent                => "Partial Content",
            Self::MultiStatus                   => "Multi-Status",
            Self::AlreadyReported               => "Already Reported",
            Self::ImUsed                        => "IM Used",
            Self::MultipleChoices               => "Multiple Choices",
            Self::MovedPermanently              => "Moved Permanently",
            Self::Found                         => "Found",
            Self::SeeOther                      => "See Other",
            Self::NotModified                   => "Not Modified",
            Self::TemporaryRedirect             => "Temporary Redirect",
            Self::PermanentRedirect             => "Permanent Redirect",
            Self::BadRequest                    => "Bad Request",
            Self::Unauthorized                  => "Unauthorized",
            Self::PaymentRequired               => "Payment Required",
            Self::Forbidden                     => "Forbidden",
            Self::NotFound                      => "Not Found",
            Self::MethodNotAllowed              => "Method Not Allowed",
            Self::NotAcceptable                 => "Not Acceptable",
            Self::ProxyAuthenticationRequired   => "Proxy Authentication Required",
            Self::RequestTimeout                => "Request Timeout",
            Self::Conflict                      => "Conflict",
            Self::Gone                          => "Gone",
            Self::LengthRequired                => "Length Required",
            Self::PreconditionFailed            => "Precondition Failed",
            Self::ContentTooLarge               => "Content Too Large",
            Self::UriTooLong                    => "URI Too Long",
            Self::UnsupportedMediaType          => "Unsupported Media Type",
            Self::RangeNotSatisfiable           => "Range Not Satisfiable",
            Self::ExpectationFailed             => "Expectation Failed",
            Self::ImATeapot                     => "I'm a Teapot",
            Self::MisdirectedRequest            => "Misdirected Request",
            Self::UnprocessableContent          => "Unprocessable Content",
            Self::Locked                        => "Locked",
            Self::FailedDependency              => "Failed Dependency",
            Self::TooEarly                      => "Too Early",
            Self::UpgradeRequired               => "Upgrade Required",
            Self::PreconditionRequired          => "Precondition Required",
            Self::TooManyRequests               => "Too Many Requests",
            Self::RequestHeaderFieldsTooLarge   => "Request Header Fields Too Large",
            Self::UnavailableForLegalReasons    => "Unavailable For Legal Reasons",
            Self::InternalServerError           => "Internal Server Error",
            Self::NotImplemented                => "Not Implemented",
            Self::BadGateway                    => "Bad Gateway",
            Self::ServiceUnavailable            => "Service Unavailable",
            Self::GatewayTimeout                => "Gateway Timeout",
            Self::HttpVersionNotSupported       => "HTTP Version Not Supported",
            Self::VariantAlsoNegotiates         => "Variant Also Negotiates",
            Self::InsufficientStorage           => "Insufficient Storage",
            Self::LoopDetected                  => "Loop Detected",
            Self::NotExtended                   => "Not Extended",
            Self::NetworkAuthenticationRequired => "Network Authentication Required",
        }
    }

    /// `true` for 4xx and 5xx codes.
    pub fn is_error(self) -> bool {
        self.code() >= 400
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        s.code()
    }
}

/// Looks a numeric code up in the registry.
impl TryFrom<u16> for Status {
    type Error = InvalidStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(InvalidStatus(code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A numeric code with no entry in the status registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidStatus(pub u16);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status code: {}", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_code_round_trips() {
        for s in Status::ALL {
            assert_eq!(Status::try_from(s.code()), Ok(s));
        }
    }

    #[test]
    fn unregistered_codes_are_rejected() {
        assert_eq!(Status::try_from(0), Err(InvalidStatus(0)));
        assert_eq!(Status::try_from(299), Err(InvalidStatus(299)));
        assert_eq!(Status::try_from(999), Err(InvalidStatus(999)));
    }

    #[test]
    fn reason_phrases() {
        assert_eq!(Status::MethodNotAllowed.reason(), "Method Not Allowed");
        assert_eq!(Status::ServiceUnavailable.reason(), "Service Unavailable");
        assert_eq!(Status::NoContent.to_string(), "204 No Content");
    }

    #[test]
    fn error_classes() {
        assert!(!Status::NoContent.is_error());
        assert!(Status::Unauthorized.is_error());
        assert!(Status::InternalServerError.is_error());
    }
}
