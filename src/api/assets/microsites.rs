//
//  eloqua-rs
//  api/assets/microsites.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Microsite endpoints.
//!
//! Microsites are the domains Eloqua serves landing pages from.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the microsite endpoints.
///
/// Obtained via [`Client::microsites`].
pub struct MicrositeService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering microsites.
    pub fn microsites(&self) -> MicrositeService<'_> {
        MicrositeService { client: self }
    }
}

/// An Eloqua microsite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Microsite {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The microsite's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The ID of the creating user.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_by: i32,
    /// The depth the object was requested at.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub depth: String,
    /// The microsite's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The domains the microsite answers on.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub domains: Vec<String>,
    /// Whether visitors are asked to opt in to web tracking.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub enable_web_tracking_opt_in: String,
    /// Whether the microsite requires visitor authentication.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_authenticated: bool,
    /// Whether the microsite is served over HTTPS.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_secure: bool,
}

impl MicrositeService<'_> {
    /// Creates a new microsite in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        microsite: Option<Microsite>,
    ) -> Result<(Microsite, Response), ApiError> {
        let mut microsite = microsite.unwrap_or_default();
        microsite.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/microsite", Some(&mut microsite))
            .await?;
        Ok((microsite, response))
    }

    /// Retrieves a microsite via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Microsite, Response), ApiError> {
        let endpoint = format!("/assets/microsite/{}?depth=complete", id);
        let mut microsite = Microsite::default();
        let response = self.client.get_decode(&endpoint, &mut microsite).await?;
        Ok((microsite, response))
    }

    /// Lists microsites.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Microsite>, Response), ApiError> {
        let mut microsites = Vec::new();
        let response = self
            .client
            .list_decode("/assets/microsites", &mut microsites, options)
            .await?;
        Ok((microsites, response))
    }

    /// Updates an existing microsite in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        microsite: Option<Microsite>,
    ) -> Result<(Microsite, Response), ApiError> {
        let mut microsite = microsite.unwrap_or_default();
        microsite.id = id;
        microsite.name = name.to_string();
        let endpoint = format!("/assets/microsite/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut microsite)).await?;
        Ok((microsite, response))
    }

    /// Deletes an existing microsite from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let microsite = Microsite {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/microsite/{}", id);
        self.client.delete_request(&endpoint, Some(&microsite)).await
    }
}
