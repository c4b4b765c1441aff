//
//  eloqua-rs
//  api/mod.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP engine and the typed resource services for
//! the Eloqua REST API.
//!
//! ## Supported API Versions
//!
//! - **REST 2.0**: the default; endpoints are routed under `api/rest/2.0/`
//! - **Legacy REST 1.0**: reached by passing an endpoint that already carries
//!   its own `api/...` prefix, which the URL builder passes through untouched
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with authentication, URL construction,
//!   JSON codec operations and status-code mapping
//! - [`common`]: Shared types (errors, the augmented [`common::Response`],
//!   listing options, entity fragments)
//! - [`assets`]: Asset endpoints (emails, email folders/groups, campaigns,
//!   forms, landing pages, microsites, option lists)
//! - [`data`]: Data endpoints (contacts, accounts, contact fields/lists/
//!   segments, custom objects and their records, activities, visitors)
//! - [`system`]: System endpoints (users)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eloqua::Client;
//!
//! # async fn example() -> Result<(), eloqua::ApiError> {
//! let client = Client::new(
//!     "https://secure.p01.eloqua.com",
//!     "MyCompany",
//!     "John.Smith",
//!     "mysecret",
//! );
//!
//! let (campaigns, _resp) = client.campaigns().list(None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`common::ApiError`] on failure. Non-2xx statuses
//! map through the closed [`common::StatusKind`] table, with the verbatim
//! server body kept on [`common::Response::error_content`] for debugging.

/// Core HTTP client for the Eloqua REST API.
///
/// Provides the [`client::Client`] struct which handles:
/// - Basic-auth header derivation from Eloqua credentials
/// - Version-prefix routing between REST 2.0 and legacy endpoints
/// - JSON request/response codec work
/// - Status-code mapping into the error taxonomy
pub mod client;

/// Shared API types.
///
/// Contains the error taxonomy, the augmented [`common::Response`], listing
/// options, and the entity fragments reused across resource schemas.
pub mod common;

/// Eloqua asset endpoints (`/assets/...`).
pub mod assets;

/// Eloqua data endpoints (`/data/...`).
pub mod data;

/// Eloqua system endpoints (`/system/...`).
pub mod system;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared helpers for the HTTP mock tests.

    use crate::api::client::Client;

    /// Spins up a mock server and a client pointed at it, using the same
    /// credentials across every suite.
    pub(crate) async fn server_and_client() -> (mockito::ServerGuard, Client) {
        let server = mockito::Server::new_async().await;
        let client = Client::new(&server.url(), "TestCompany", "John.Smith", "mysecret");
        (server, client)
    }
}
