//
//  eloqua-rs
//  api/client.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! # HTTP Client for the Eloqua REST API
//!
//! This module provides the core request/response engine that every resource
//! service reuses. It handles authentication, URL construction, JSON
//! serialization, paginated list envelopes, and the mapping of HTTP status
//! codes onto the stable error taxonomy.
//!
//! ## Features
//!
//! - Basic-auth header derivation from Eloqua credentials, computed once
//! - Version-prefix routing between REST 2.0 and legacy `api/...` endpoints
//! - Four operation flavors: typed GET, paginated list GET, body-bearing
//!   POST/PUT, and DELETE with an optional body
//! - A raw entry point for endpoints the typed services do not cover
//!
//! ## Concurrency
//!
//! [`Client`] owns no mutable state after construction, so one instance can
//! be shared freely across tasks. Each call produces a fresh [`Response`];
//! the underlying `reqwest` connection pool handles multiplexing.

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::common::{ApiError, ListEnvelope, ListOptions, Response, StatusKind};

/// The version prefix inserted ahead of endpoints that do not carry their
/// own `api/...` routing.
const REST_PREFIX: &str = "api/rest/2.0";

/// The main HTTP client for the Eloqua REST API.
///
/// A `Client` holds the instance base URL, the precomputed Basic-auth
/// header, and the underlying HTTP client. All resource services are reached
/// through accessor methods (`client.emails()`, `client.contacts()`, ...) and
/// funnel their requests through the operations defined here.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use eloqua::Client;
///
/// let client = Client::new(
///     "https://secure.p01.eloqua.com",
///     "MyCompany",
///     "John.Smith",
///     "mysecret",
/// );
/// ```
///
/// # Timeouts
///
/// The engine sets no timeouts of its own. Configure them on a
/// `reqwest::Client` and pass it in via [`Client::with_http_client`]:
///
/// ```rust,no_run
/// use std::time::Duration;
/// use eloqua::Client;
///
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(30))
///     .build()
///     .expect("failed to build HTTP client");
///
/// let client = Client::with_http_client(
///     http,
///     "https://secure.p01.eloqua.com",
///     "MyCompany",
///     "John.Smith",
///     "mysecret",
/// );
/// ```
///
/// # Security
///
/// Credentials are transmitted base64-encoded, not encrypted; always use an
/// `https://` base URL. The client never logs credential material.
pub struct Client {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// The base URL for the Eloqua instance, trimmed of trailing slashes.
    base_url: String,
    /// The precomputed Basic-auth header value.
    auth_header: String,
}

impl Client {
    /// Creates a new Eloqua client.
    ///
    /// The authorization header is derived once here as
    /// `Basic base64(company\user:password)` and reused verbatim for every
    /// request. The base URL is trimmed of surrounding spaces and slashes.
    ///
    /// # Parameters
    ///
    /// * `base_url` - The Eloqua instance URL (e.g. `https://secure.p01.eloqua.com`)
    /// * `company_name` - The Eloqua login company name
    /// * `user_name` - The Eloqua login user name
    /// * `password` - The Eloqua login password
    pub fn new(base_url: &str, company_name: &str, user_name: &str, password: &str) -> Client {
        Client::with_http_client(
            reqwest::Client::new(),
            base_url,
            company_name,
            user_name,
            password,
        )
    }

    /// Creates a new Eloqua client over a caller-configured HTTP client.
    ///
    /// Use this to layer in timeouts, proxies or pool settings; the engine
    /// itself imposes none.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        company_name: &str,
        user_name: &str,
        password: &str,
    ) -> Client {
        let credentials = format!("{}\\{}:{}", company_name, user_name, password);
        Client {
            http,
            base_url: base_url
                .trim_matches(|c| c == ' ' || c == '/')
                .to_string(),
            auth_header: format!("Basic {}", STANDARD.encode(credentials)),
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full request URL for an endpoint.
    ///
    /// The endpoint is trimmed of surrounding spaces and slashes. Endpoints
    /// containing the substring `api/` are treated as fully version-qualified
    /// and appended to the base URL as-is; anything else goes under the
    /// default `api/rest/2.0/` prefix. The substring match (rather than a
    /// prefix match) is what lets legacy `api/rest/1.0/...` paths flow
    /// through the same entry point.
    fn rest_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_matches(|c| c == ' ' || c == '/');
        if endpoint.contains("api/") {
            format!("{}/{}", self.base_url, endpoint)
        } else {
            format!("{}/{}/{}", self.base_url, REST_PREFIX, endpoint)
        }
    }

    /// Performs a request against the Eloqua API.
    ///
    /// This is the raw entry point underneath the typed operations. It is
    /// flexible enough to reach any endpoint, but performs no status
    /// interpretation and no body decoding; the returned [`Response`] holds
    /// the status, headers and buffered body as the server sent them.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - The endpoint path, with or without an `api/...` prefix
    /// * `method` - The HTTP verb, case-insensitive
    /// * `json_data` - The request body; pass `""` for none
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidMethod`] for an unusable verb and
    /// [`ApiError::Transport`] for network-level failures.
    pub async fn rest_request(
        &self,
        endpoint: &str,
        method: &str,
        json_data: &str,
    ) -> Result<Response, ApiError> {
        let method = Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|_| ApiError::InvalidMethod(method.to_string()))?;
        let url = self.rest_url(endpoint);
        debug!("{} {}", method, url);

        let result = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, self.auth_header.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(json_data.to_string())
            .send()
            .await?;

        let status = result.status();
        let headers = result.headers().clone();
        let body = match result.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            // A failed body read on an error status still surfaces the
            // status-mapped error; error_content just stays empty.
            Err(_) if !status.is_success() => Vec::new(),
            Err(err) => return Err(ApiError::Transport(err)),
        };

        Ok(Response::new(status, headers, body))
    }

    /// Performs a GET request and decodes the response into `target`.
    ///
    /// An empty body on a 2xx response is treated as success and leaves
    /// `target` unmodified; any other undecodable body is an
    /// [`ApiError::Decode`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use eloqua::Client;
    /// use eloqua::api::assets::emails::Email;
    ///
    /// # async fn example(client: &Client) -> Result<(), eloqua::ApiError> {
    /// let mut email = Email::default();
    /// client.get_decode("/assets/email/52?depth=complete", &mut email).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_decode<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        target: &mut T,
    ) -> Result<Response, ApiError> {
        let response = self.rest_request(endpoint, "GET", "").await?;
        let response = check_response(response)?;
        decode_body(&response.body, target)?;
        Ok(response)
    }

    /// Performs a GET request against a listing endpoint.
    ///
    /// The encoded `options` (with `depth` defaulting to `minimal`) are
    /// appended to the endpoint. On a 2xx response the paging metadata is
    /// decoded onto the returned [`Response`] and the raw `elements` array
    /// is decoded into `target`. A missing `elements` field leaves `target`
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use eloqua::{Client, ListOptions};
    /// use eloqua::api::data::contacts::Contact;
    ///
    /// # async fn example(client: &Client) -> Result<(), eloqua::ApiError> {
    /// let options = ListOptions { count: 50, ..Default::default() };
    /// let mut contacts: Vec<Contact> = Vec::new();
    /// let resp = client.list_decode("/data/contacts", &mut contacts, Some(&options)).await?;
    /// println!("page {} of {} contacts", resp.page, resp.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_decode<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        target: &mut Vec<T>,
        options: Option<&ListOptions>,
    ) -> Result<Response, ApiError> {
        let default_options = ListOptions::default();
        let options = options.unwrap_or(&default_options);
        let endpoint = format!("{}?{}", endpoint, options.to_query());

        let response = self.rest_request(&endpoint, "GET", "").await?;
        let mut response = check_response(response)?;

        if is_blank(&response.body) {
            return Ok(response);
        }

        let envelope: ListEnvelope =
            serde_json::from_slice(&response.body).map_err(ApiError::Decode)?;
        response.page = envelope.page;
        response.page_size = envelope.page_size;
        response.total = envelope.total;

        if let Some(elements) = envelope.elements {
            *target = serde_json::from_str(elements.get()).map_err(ApiError::Decode)?;
            response.elements = Some(elements);
        }

        Ok(response)
    }

    /// Performs a body-bearing request (POST, PUT, ...) and decodes the
    /// response back into `target`.
    ///
    /// With `Some(target)`, the target is serialized as the request body and
    /// then — on a 2xx response with a non-empty body — overwritten in place
    /// with the server's echo, picking up server-assigned fields such as IDs.
    /// With `None`, the request body is empty and no decoding occurs.
    ///
    /// A serialization failure is reported before any network I/O.
    pub async fn body_decode<T: Serialize + DeserializeOwned>(
        &self,
        endpoint: &str,
        method: &str,
        target: Option<&mut T>,
    ) -> Result<Response, ApiError> {
        let body = match &target {
            Some(value) => serde_json::to_string(value).map_err(ApiError::Serialization)?,
            None => String::new(),
        };

        let response = self.rest_request(endpoint, method, &body).await?;
        let response = check_response(response)?;

        if let Some(target) = target {
            decode_body(&response.body, target)?;
        }

        Ok(response)
    }

    /// Performs a POST request and decodes the response into `target`.
    pub async fn post_decode<T: Serialize + DeserializeOwned>(
        &self,
        endpoint: &str,
        target: Option<&mut T>,
    ) -> Result<Response, ApiError> {
        self.body_decode(endpoint, "POST", target).await
    }

    /// Performs a PUT request and decodes the response into `target`.
    pub async fn put_decode<T: Serialize + DeserializeOwned>(
        &self,
        endpoint: &str,
        target: Option<&mut T>,
    ) -> Result<Response, ApiError> {
        self.body_decode(endpoint, "PUT", target).await
    }

    /// Performs a DELETE request, sending the given value as the body.
    ///
    /// The status is interpreted but no response decoding is performed.
    /// A serialization failure is reported before any network I/O.
    pub async fn delete_request<B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let payload = match body {
            Some(value) => serde_json::to_string(value).map_err(ApiError::Serialization)?,
            None => String::new(),
        };

        let response = self.rest_request(endpoint, "DELETE", &payload).await?;
        let response = check_response(response)?;
        Ok(response)
    }
}

/// Checks a response for a non-2xx status.
///
/// On failure the buffered body is captured verbatim into `error_content`
/// and the status is looked up in the [`StatusKind`] table. The response
/// travels inside the returned error so callers keep access to it.
fn check_response(mut response: Response) -> Result<Response, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    response.error_content = response.body_text().into_owned();
    let kind = StatusKind::from_status(response.status.as_u16());
    warn!("{} mapped to {:?}", response.status, kind);

    Err(ApiError::Status {
        kind,
        response: Box::new(response),
    })
}

/// Decodes a response body into `target`, treating a blank body as success.
fn decode_body<T: DeserializeOwned>(body: &[u8], target: &mut T) -> Result<(), ApiError> {
    if is_blank(body) {
        return Ok(());
    }
    *target = serde_json::from_slice(body).map_err(ApiError::Decode)?;
    Ok(())
}

/// True for an empty or all-whitespace body.
fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
