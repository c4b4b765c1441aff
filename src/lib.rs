//
//  eloqua-rs
//  lib.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! # Eloqua REST API Client Library
//!
//! A typed Rust client for the Oracle Eloqua marketing automation REST API.
//!
//! ## Overview
//!
//! This library wraps Eloqua's REST 2.0 resource collections (and a few legacy
//! 1.0 endpoints) behind a single [`Client`] carrying uniformly-shaped
//! Create / Get / List / Update / Delete operations. Every resource service is
//! a thin typed layer over one shared request/response engine which handles
//! authentication, URL construction, JSON codec work, paginated list
//! envelopes, and a stable mapping from HTTP status codes to error kinds.
//!
//! ## Features
//!
//! - **HTTP Basic Authentication**: The Eloqua `company\user:password` scheme,
//!   encoded once at client construction
//! - **Typed Entities**: Eloqua assets and data records as plain serde structs,
//!   including the API's string-encoded numbers and booleans
//! - **Uniform Paging**: Listing operations decode Eloqua's
//!   `elements`/`page`/`pageSize`/`total` envelope onto every [`Response`]
//! - **Stable Error Taxonomy**: Non-2xx statuses map to a closed
//!   [`StatusKind`] table with the raw server body preserved for debugging
//! - **Raw Escape Hatch**: [`Client::rest_request`] reaches any endpoint the
//!   typed services do not cover
//!
//! ## Module Structure
//!
//! - [`api`]: The request/response engine and all resource services
//!   - [`api::client`]: Core HTTP client (auth, URLs, codec, status mapping)
//!   - [`api::common`]: Shared types (errors, responses, listing options,
//!     entity fragments)
//!   - [`api::assets`]: Asset endpoints (emails, campaigns, forms, ...)
//!   - [`api::data`]: Data endpoints (contacts, accounts, custom objects, ...)
//!   - [`api::system`]: System endpoints (users)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use eloqua::{Client, ListOptions};
//!
//! # async fn example() -> Result<(), eloqua::ApiError> {
//! let client = Client::new(
//!     "https://secure.p01.eloqua.com",
//!     "MyCompany",
//!     "John.Smith",
//!     "mysecret",
//! );
//!
//! // Fetch a single email asset
//! let (email, _resp) = client.emails().get(52).await?;
//! println!("Email: {}", email.name);
//!
//! // List contacts, 50 per page
//! let options = ListOptions { count: 50, page: 1, ..Default::default() };
//! let (contacts, resp) = client.contacts().list(Some(&options)).await?;
//! println!("Fetched {} of {} contacts", contacts.len(), resp.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security
//!
//! Credentials travel base64-encoded, not encrypted. Always point the client
//! at an `https://` base URL.

/// The Eloqua API layer.
///
/// Contains the core HTTP client plus the typed resource services grouped the
/// way Eloqua groups its endpoints (`assets`, `data`, `system`).
pub mod api;

pub use api::client::Client;
pub use api::common::{ApiError, Depth, ListOptions, Response, StatusKind};
