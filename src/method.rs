//! HTTP method as a typed enum.
//!
//! Covers RFC 9110 standard methods, `QUERY`, the WebDAV family
//! (RFC 4918 / 3253 / 3744 / 4791 / 5323 / 5842), UPnP event verbs, and
//! `PURGE` used by nginx and Varnish for cache invalidation.
//!
//! [`Method::ALL`] is the canonical verb registry. View discovery walks it in
//! order, which is why the `Allowed` header always lists verbs alphabetically
//! no matter how a view declares its handlers.

use std::fmt;

/// A known HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    // RFC 9110 ─────────────────────────────────────────────────────────────────
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
    // Safe method with a body (draft-ietf-httpbis-safe-method-w-body) ─────────
    Query,
    // WebDAV RFC 4918 ──────────────────────────────────────────────────────────
    Copy,
    Lock,
    Mkcol,
    Move,
    Propfind,
    Proppatch,
    Unlock,
    // WebDAV extensions ────────────────────────────────────────────────────────
    Acl,        // RFC 3744
    Bind,       // RFC 5842
    Rebind,     // RFC 5842
    Unbind,     // RFC 5842
    Checkout,   // RFC 3253 — DeltaV
    Merge,      // RFC 3253
    Mkactivity, // RFC 3253
    Report,     // RFC 3253
    Mkcalendar, // RFC 4791 — CalDAV
    Search,     // RFC 5323
    // Link relations (RFC 2068) ────────────────────────────────────────────────
    Link,
    Unlink,
    // Event notification (UPnP / GENA) ─────────────────────────────────────────
    MSearch,
    Notify,
    Subscribe,
    Unsubscribe,
    // Icecast source streaming ─────────────────────────────────────────────────
    Source,
    // Cache invalidation ───────────────────────────────────────────────────────
    Purge, // nginx / Varnish
}

impl Method {
    /// Every known method, sorted by wire token.
    pub const ALL: [Method; 35] = [
        Self::Acl,
        Self::Bind,
        Self::Checkout,
        Self::Connect,
        Self::Copy,
        Self::Delete,
        Self::Get,
        Self::Head,
        Self::Link,
        Self::Lock,
        Self::MSearch,
        Self::Merge,
        Self::Mkactivity,
        Self::Mkcalendar,
        Self::Mkcol,
        Self::Move,
        Self::Notify,
        Self::Options,
        Self::Patch,
        Self::Post,
        Self::Propfind,
        Self::Proppatch,
        Self::Purge,
        Self::Put,
        Self::Query,
        Self::Rebind,
        Self::Report,
        Self::Search,
        Self::Source,
        Self::Subscribe,
        Self::Trace,
        Self::Unbind,
        Self::Unlink,
        Self::Unlock,
        Self::Unsubscribe,
    ];

    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acl         => "ACL",
            Self::Bind        => "BIND",
            Self::Checkout    => "CHECKOUT",
            Self::Connect     => "CONNECT",
            Self::Copy        => "COPY",
            Self::Delete      => "DELETE",
            Self::Get         => "GET",
            Self::Head        => "HEAD",
            Self::Link        => "LINK",
            Self::Lock        => "LOCK",
            Self::MSearch     => "M-SEARCH",
            Self::Merge       => "MERGE",
            Self::Mkactivity  => "MKACTIVITY",
            Self::Mkcalendar  => "MKCALENDAR",
            Self::Mkcol       => "MKCOL",
            Self::Move        => "MOVE",
            Self::Notify      => "NOTIFY",
            Self::Options     => "OPTIONS",
            Self::Patch       => "PATCH",
            Self::Post        => "POST",
            Self::Propfind    => "PROPFIND",
            Self::Proppatch   => "PROPPATCH",
            Self::Purge       => "PURGE",
            Self::Put         => "PUT",
            Self::Query       => "QUERY",
            Self::Rebind      => "REBIND",
            Self::Report      => "REPORT",
            Self::Search      => "SEARCH",
            Self::Source      => "SOURCE",
            Self::Subscribe   => "SUBSCRIBE",
            Self::Trace       => "TRACE",
            Self::Unbind      => "UNBIND",
            Self::Unlink      => "UNLINK",
            Self::Unlock      => "UNLOCK",
            Self::Unsubscribe => "UNSUBSCRIBE",
        }
    }

    /// Returns the lowercase handler-slot name (e.g. `"get"`, `"m-search"`).
    pub fn slot_name(self) -> &'static str {
        match self {
            Self::Acl         => "acl",
            Self::Bind        => "bind",
            Self::Checkout    => "checkout",
            Self::Connect     => "connect",
            Self::Copy        => "copy",
            Self::Delete      => "delete",
            Self::Get         => "get",
            Self::Head        => "head",
            Self::Link        => "link",
            Self::Lock        => "lock",
            Self::MSearch     => "m-search",
            Self::Merge       => "merge",
            Self::Mkactivity  => "mkactivity",
            Self::Mkcalendar  => "mkcalendar",
            Self::Mkcol       => "mkcol",
            Self::Move        => "move",
            Self::Notify      => "notify",
            Self::Options     => "options",
            Self::Patch       => "patch",
            Self::Post        => "post",
            Self::Propfind    => "propfind",
            Self::Proppatch   => "proppatch",
            Self::Purge       => "purge",
            Self::Put         => "put",
            Self::Query       => "query",
            Self::Rebind      => "rebind",
            Self::Report      => "report",
            Self::Search      => "search",
            Self::Source      => "source",
            Self::Subscribe   => "subscribe",
            Self::Trace       => "trace",
            Self::Unbind      => "unbind",
            Self::Unlink      => "unlink",
            Self::Unlock      => "unlock",
            Self::Unsubscribe => "unsubscribe",
        }
    }

    /// Resolves an inbound verb token in any case (`"get"`, `"Get"`, `"GET"`).
    ///
    /// Empty and unregistered tokens resolve to `None`.
    pub fn from_verb(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_wire_token() {
        let tokens: Vec<_> = Method::ALL.iter().map(|m| m.as_str()).collect();
        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        assert_eq!(tokens, sorted);
    }

    #[test]
    fn slot_names_are_lowercased_wire_tokens() {
        for m in Method::ALL {
            assert_eq!(m.slot_name(), m.as_str().to_ascii_lowercase());
        }
    }

    #[test]
    fn from_verb_ignores_case() {
        assert_eq!(Method::from_verb("get"), Some(Method::Get));
        assert_eq!(Method::from_verb("Options"), Some(Method::Options));
        assert_eq!(Method::from_verb("PROPPATCH"), Some(Method::Proppatch));
        assert_eq!(Method::from_verb("m-search"), Some(Method::MSearch));
        assert_eq!(Method::from_verb("Query"), Some(Method::Query));
    }

    #[test]
    fn every_registered_token_resolves() {
        let verbs = [
            "acl", "bind", "checkout", "connect", "copy", "delete", "get", "head", "link",
            "lock", "m-search", "merge", "mkactivity", "mkcalendar", "mkcol", "move", "notify",
            "options", "patch", "post", "propfind", "proppatch", "purge", "put", "query",
            "rebind", "report", "search", "source", "subscribe", "trace", "unbind", "unlink",
            "unlock", "unsubscribe",
        ];
        let unregistered: Vec<_> = verbs
            .into_iter()
            .filter(|v| Method::from_verb(v).is_none())
            .collect();
        assert!(unregistered.is_empty(), "unregistered verbs: {unregistered:?}");
        assert_eq!(Method::ALL.len(), verbs.len());
    }

    #[test]
    fn from_verb_rejects_unknown_and_empty() {
        assert_eq!(Method::from_verb(""), None);
        assert_eq!(Method::from_verb("brew"), None);
        assert_eq!(Method::from_verb("msearch"), None);
    }
}
