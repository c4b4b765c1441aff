//
//  eloqua-rs
//  api/common/mod.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Common API Types for the Eloqua Client
//!
//! This module provides the types shared by the request engine and every
//! resource service: the error taxonomy, the augmented response wrapper,
//! listing options, and the entity fragments that recur across Eloqua's
//! asset schemas.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`StatusKind`] - The closed HTTP status → failure-kind table
//! - [`Response`] - HTTP response augmented with paging and error details
//! - [`ListOptions`] / [`Depth`] - Listing query configuration
//!   (re-exported from the [`listing`] submodule)
//! - Entity fragments such as [`FieldValue`] and [`Hyperlink`]
//!   (re-exported from the [`fields`] submodule)
//!
//! # Example
//!
//! ```rust
//! use eloqua::api::common::{ApiError, StatusKind};
//!
//! fn describe<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Status { kind: StatusKind::NotFound, .. }) => {
//!             println!("No such resource")
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - All types implement `Debug` for easy inspection
//! - Status-mapped errors carry the full [`Response`], so the raw server
//!   body stays reachable for debugging

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::value::RawValue;
use thiserror::Error;

mod fields;
mod listing;
pub(crate) mod ser;

pub use fields::*;
pub use listing::{Depth, ListOptions};

pub(crate) use listing::ListEnvelope;

/// The closed set of failure kinds derived from HTTP status codes.
///
/// Every non-2xx response maps to exactly one kind. The mapping is the fixed
/// table below; any status not listed falls through to
/// [`GenericFailure`](Self::GenericFailure).
///
/// | Status | Kind |
/// |--------|------|
/// | 301 | `LoginRequired` |
/// | 304 | `NotModified` |
/// | 400 | `BadRequest` |
/// | 401 | `Unauthorized` |
/// | 403 | `Forbidden` |
/// | 404 | `NotFound` |
/// | 409 | `Conflict` |
/// | 412 | `HasDependencies` |
/// | 413 | `StorageExceeded` |
/// | 429 | `TooManyRequests` |
/// | 500 | `ServerError` |
/// | 502 | `BadGateway` |
/// | 503 | `ServiceUnavailable` |
/// | other non-2xx | `GenericFailure` |
///
/// # Example
///
/// ```rust
/// use eloqua::StatusKind;
///
/// assert_eq!(StatusKind::from_status(401), StatusKind::Unauthorized);
/// assert_eq!(StatusKind::from_status(608), StatusKind::GenericFailure);
/// assert_eq!(
///     StatusKind::Unauthorized.to_string(),
///     "You are not authorized to make this request",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// 301 - the session is no longer valid.
    LoginRequired,
    /// 304 - the resource has not changed.
    NotModified,
    /// 400 - missing reference, parsing, serialization or validation error.
    BadRequest,
    /// 401 - the credentials were rejected.
    Unauthorized,
    /// 403 - the service is not enabled for the site, or XSRF failure.
    Forbidden,
    /// 404 - no resource at the requested endpoint.
    NotFound,
    /// 409 - the request conflicts with existing data.
    Conflict,
    /// 412 - the resource has dependencies and cannot be deleted.
    HasDependencies,
    /// 413 - the instance's storage space is exhausted.
    StorageExceeded,
    /// 429 - the request was rate limited.
    TooManyRequests,
    /// 500 - the service encountered an internal error.
    ServerError,
    /// 502 - a gateway in front of the service failed.
    BadGateway,
    /// 503 - the service is unavailable or timed out.
    ServiceUnavailable,
    /// Any other non-2xx status.
    GenericFailure,
}

impl StatusKind {
    /// Maps an HTTP status code onto the table above.
    ///
    /// Callers are expected to have already excluded 2xx statuses; a 2xx
    /// passed here falls through to `GenericFailure` like any other
    /// unlisted code.
    pub fn from_status(status: u16) -> StatusKind {
        match status {
            301 => StatusKind::LoginRequired,
            304 => StatusKind::NotModified,
            400 => StatusKind::BadRequest,
            401 => StatusKind::Unauthorized,
            403 => StatusKind::Forbidden,
            404 => StatusKind::NotFound,
            409 => StatusKind::Conflict,
            412 => StatusKind::HasDependencies,
            413 => StatusKind::StorageExceeded,
            429 => StatusKind::TooManyRequests,
            500 => StatusKind::ServerError,
            502 => StatusKind::BadGateway,
            503 => StatusKind::ServiceUnavailable,
            _ => StatusKind::GenericFailure,
        }
    }

    /// The human-readable message for this kind.
    ///
    /// These are the common meanings for each status code, taken from the
    /// Eloqua documentation.
    pub fn message(self) -> &'static str {
        match self {
            StatusKind::LoginRequired => "Login required",
            StatusKind::NotModified => "Not Modified",
            StatusKind::BadRequest => "Bad Request",
            StatusKind::Unauthorized => "You are not authorized to make this request",
            StatusKind::Forbidden => "Forbidden",
            StatusKind::NotFound => "The requested resource was not found",
            StatusKind::Conflict => "There was a conflict",
            StatusKind::HasDependencies => {
                "The resource you are attempting to delete has dependencies, and cannot be deleted"
            }
            StatusKind::StorageExceeded => "Storage space exceeded",
            StatusKind::TooManyRequests => "Too Many Requests",
            StatusKind::ServerError => "The service has encountered an error",
            StatusKind::BadGateway => "Bad Gateway",
            StatusKind::ServiceUnavailable => "Service Unavailable",
            StatusKind::GenericFailure => "There was an issue performing your request",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Unified error type for all Eloqua API operations.
///
/// `ApiError` covers the full failure surface of the client: transport
/// problems, codec problems, and server-reported statuses. It implements the
/// standard `Error` trait via `thiserror` for ergonomic error handling.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Status` | The server answered with a non-2xx status; carries the mapped [`StatusKind`] and the full [`Response`] |
/// | `Transport` | Network-level failure (DNS, connect, TLS, I/O) |
/// | `Serialization` | The request value could not be serialized to JSON; reported before any network I/O |
/// | `Decode` | The response body is not valid JSON or does not match the target shape |
/// | `InvalidMethod` | The supplied HTTP verb is not a valid method token |
///
/// # Example
///
/// ```rust
/// use eloqua::{ApiError, StatusKind};
///
/// fn report(err: &ApiError) {
///     if let ApiError::Status { kind, response } = err {
///         eprintln!("{} ({})", kind, response.status);
///         eprintln!("server said: {}", response.error_content);
///     } else {
///         eprintln!("{}", err);
///     }
/// }
/// ```
///
/// # Notes
///
/// - The `Transport` variant converts automatically from `reqwest::Error`
/// - An empty body on a 2xx response is *not* a `Decode` error; decode
///   targets are simply left untouched
/// - The client never retries; surfacing every failure is deliberate
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status code.
    ///
    /// The display message is the fixed text for the mapped kind; the raw
    /// server body is on `response.error_content`.
    #[error("{kind}")]
    Status {
        /// The failure kind looked up from the status table.
        kind: StatusKind,
        /// The full response, including status, headers and captured body.
        response: Box<Response>,
    },

    /// A network-level error occurred before or during the exchange.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's value could not be serialized to JSON.
    ///
    /// Reported synchronously, before any network I/O occurs.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be decoded into the target value.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The supplied HTTP verb is not a valid method token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}

impl ApiError {
    /// The mapped [`StatusKind`], if this is a status error.
    pub fn status_kind(&self) -> Option<StatusKind> {
        match self {
            ApiError::Status { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The [`Response`] attached to this error, if one exists.
    ///
    /// Only status-mapped errors carry a response; transport and codec
    /// failures occur without a usable one.
    pub fn response(&self) -> Option<&Response> {
        match self {
            ApiError::Status { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// An HTTP response augmented with Eloqua-specific details.
///
/// Beyond the status, headers and buffered body, a `Response` carries the
/// paging fields of Eloqua's listing envelope and, for failed requests, the
/// verbatim error body.
///
/// # Fields
///
/// | Field | Populated when |
/// |-------|----------------|
/// | `status`, `headers`, `body` | Always |
/// | `page`, `page_size`, `total`, `elements` | Listing operations only; zero/empty otherwise |
/// | `error_content` | Non-2xx statuses only |
///
/// # Ownership
///
/// The body is fully buffered into the `Response` when the request
/// completes, so the underlying connection is released exactly once and the
/// returned value is owned by the caller outright.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body.
    pub body: Vec<u8>,

    /// The current page of a listing response.
    pub page: i32,

    /// The page size of a listing response.
    pub page_size: i32,

    /// The total entities found by a listing query.
    pub total: i32,

    /// The raw `elements` array of a listing response, decoded in a second
    /// pass into the caller's typed sequence.
    pub elements: Option<Box<RawValue>>,

    /// The returned response body in the event of an error.
    /// Use this to help debug unknown failures.
    pub error_content: String,
}

impl Response {
    /// Wraps the parts of a completed HTTP exchange.
    ///
    /// Listing and error fields start zero-valued; the decode operations
    /// fill them in as appropriate.
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Response {
        Response {
            status,
            headers,
            body,
            page: 0,
            page_size: 0,
            total: 0,
            elements: None,
            error_content: String::new(),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The buffered body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        let table = [
            (301, StatusKind::LoginRequired),
            (304, StatusKind::NotModified),
            (400, StatusKind::BadRequest),
            (401, StatusKind::Unauthorized),
            (403, StatusKind::Forbidden),
            (404, StatusKind::NotFound),
            (409, StatusKind::Conflict),
            (412, StatusKind::HasDependencies),
            (413, StatusKind::StorageExceeded),
            (429, StatusKind::TooManyRequests),
            (500, StatusKind::ServerError),
            (502, StatusKind::BadGateway),
            (503, StatusKind::ServiceUnavailable),
        ];
        for (status, kind) in table {
            assert_eq!(StatusKind::from_status(status), kind);
        }
    }

    #[test]
    fn test_unlisted_statuses_are_generic() {
        for status in [300u16, 402, 410, 418, 501, 504, 608] {
            assert_eq!(StatusKind::from_status(status), StatusKind::GenericFailure);
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            StatusKind::Unauthorized.to_string(),
            "You are not authorized to make this request"
        );
        assert_eq!(
            StatusKind::GenericFailure.to_string(),
            "There was an issue performing your request"
        );
        assert_eq!(StatusKind::LoginRequired.to_string(), "Login required");
    }

    #[test]
    fn test_response_starts_zero_valued() {
        let resp = Response::new(StatusCode::OK, HeaderMap::new(), b"{}".to_vec());
        assert!(resp.is_success());
        assert_eq!(resp.page, 0);
        assert_eq!(resp.page_size, 0);
        assert_eq!(resp.total, 0);
        assert!(resp.elements.is_none());
        assert!(resp.error_content.is_empty());
    }
}
