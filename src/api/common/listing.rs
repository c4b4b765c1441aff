//
//  eloqua-rs
//  api/common/listing.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Listing Options and the Eloqua Paging Envelope
//!
//! Every listing endpoint accepts the same query parameters and answers with
//! the same JSON envelope. This module provides both halves: [`ListOptions`]
//! encodes the caller's paging/search configuration into a query string, and
//! [`ListEnvelope`] decodes the `elements`/`page`/`pageSize`/`total` object
//! the server returns.
//!
//! # Query Encoding Rules
//!
//! - `depth` always appears; it defaults to `minimal` when unset
//! - Every other option is omitted while it holds its zero value
//! - Keys are emitted in stable alphabetical order, so request lines are
//!   deterministic and easy to assert against
//!
//! # Example
//!
//! ```rust
//! use eloqua::{Depth, ListOptions};
//!
//! let options = ListOptions {
//!     depth: Depth::Partial,
//!     count: 200,
//!     page: 3,
//!     search: "name=Test*".to_string(),
//!     ..Default::default()
//! };
//! // Encodes as: count=200&depth=partial&page=3&search=name%3DTest*
//! ```

use serde::Deserialize;
use serde_json::value::RawValue;
use url::form_urlencoded;

/// Level of detail Eloqua includes in a response.
///
/// Deeper levels return more of each entity's fields at the cost of larger
/// payloads. Listing operations default to [`Minimal`](Self::Minimal); the
/// typed `get` operations request `complete` since a single entity is cheap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    /// Only the core identifying fields.
    #[default]
    Minimal,
    /// Core fields plus most scalar properties.
    Partial,
    /// Every field, including nested objects.
    Complete,
}

impl Depth {
    /// The query-parameter value for this depth.
    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Minimal => "minimal",
            Depth::Partial => "partial",
            Depth::Complete => "complete",
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The options available when making listing requests.
///
/// Zero-valued options are left out of the encoded query entirely, matching
/// what the API expects. Construct with struct-update syntax from
/// `Default::default()` and set only what you need.
///
/// # Example
///
/// ```rust
/// use eloqua::ListOptions;
///
/// let options = ListOptions {
///     count: 50,
///     page: 1,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Level of detail returned from the request.
    pub depth: Depth,
    /// Number of entities to return per page.
    pub count: u32,
    /// The page of entities to return, starting at 1.
    pub page: u32,
    /// A term for searching through entities.
    pub search: String,
    /// The property on which to sort the returned data.
    pub sort: String,
    /// The direction of the applied sort (`asc` or `desc`).
    pub sort_dir: String,
    /// The field on which to order results.
    pub order_by: String,
    /// A minimum last-updated unix timestamp, in seconds.
    pub last_updated_at: i64,
}

impl ListOptions {
    /// Encodes the options as a URL query string.
    ///
    /// Keys appear in alphabetical order; zero-valued options are omitted.
    /// `depth` is always present.
    pub(crate) fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if self.count > 0 {
            query.append_pair("count", &self.count.to_string());
        }
        query.append_pair("depth", self.depth.as_str());
        if !self.sort_dir.is_empty() {
            query.append_pair("dir", &self.sort_dir);
        }
        if self.last_updated_at > 0 {
            query.append_pair("lastUpdatedAt", &self.last_updated_at.to_string());
        }
        if !self.order_by.is_empty() {
            query.append_pair("orderBy", &self.order_by);
        }
        if self.page > 0 {
            query.append_pair("page", &self.page.to_string());
        }
        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }
        if !self.sort.is_empty() {
            query.append_pair("sort", &self.sort);
        }
        query.finish()
    }
}

/// The JSON envelope Eloqua returns for listing endpoints.
///
/// The `elements` array is held as raw JSON so the paging metadata can be
/// decoded without knowing the element type; the engine unpacks it into the
/// caller's typed sequence in a second pass. Missing fields default to zero.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    /// The entities of the current page, deferred for a second decode pass.
    #[serde(default)]
    pub elements: Option<Box<RawValue>>,
    /// The current page of the response.
    #[serde(default)]
    pub page: i32,
    /// The page size of the response.
    #[serde(default, rename = "pageSize")]
    pub page_size: i32,
    /// The total entities found by the query.
    #[serde(default)]
    pub total: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_encode_depth_only() {
        let options = ListOptions::default();
        assert_eq!(options.to_query(), "depth=minimal");
    }

    #[test]
    fn test_options_encode_in_alphabetical_order() {
        let options = ListOptions {
            depth: Depth::Complete,
            count: 200,
            page: 1,
            search: "name=Test*".to_string(),
            sort: "name".to_string(),
            sort_dir: "desc".to_string(),
            order_by: "id".to_string(),
            last_updated_at: 1467042903,
        };
        assert_eq!(
            options.to_query(),
            "count=200&depth=complete&dir=desc&lastUpdatedAt=1467042903\
             &orderBy=id&page=1&search=name%3DTest*&sort=name"
        );
    }

    #[test]
    fn test_zero_values_are_omitted() {
        let options = ListOptions {
            count: 200,
            page: 1,
            ..Default::default()
        };
        assert_eq!(options.to_query(), "count=200&depth=minimal&page=1");
    }

    #[test]
    fn test_envelope_defaults_missing_fields() {
        let envelope: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.elements.is_none());
        assert_eq!(envelope.page, 0);
        assert_eq!(envelope.page_size, 0);
        assert_eq!(envelope.total, 0);
    }

    #[test]
    fn test_envelope_keeps_elements_raw() {
        let body = r#"{"elements":[{"id":"100"}],"page":1,"pageSize":200,"total":2}"#;
        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.page, 1);
        assert_eq!(envelope.page_size, 200);
        assert_eq!(envelope.total, 2);
        assert_eq!(envelope.elements.unwrap().get(), r#"[{"id":"100"}]"#);
    }
}
