//
//  eloqua-rs
//  api/assets/landing_pages.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Landing page endpoints.

use serde::{Deserialize, Serialize};

use crate::api::assets::forms::Form;
use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{
    ApiError, ContentSection, DynamicContent, HtmlContent, Hyperlink, Image, ListOptions, Response,
};

/// Access to the landing page endpoints.
///
/// Obtained via [`Client::landing_pages`].
pub struct LandingPageService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering landing pages.
    pub fn landing_pages(&self) -> LandingPageService<'_> {
        LandingPageService { client: self }
    }
}

/// An Eloqua landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The page's draft/active status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The page's ID.
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
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The page's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the page.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The URL visitors are redirected to after the wait period.
    #[serde(default, rename = "autoRedirectURL", skip_serializing_if = "is_empty")]
    pub auto_redirect_url: String,
    /// Seconds to wait before auto-redirecting.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub auto_redirect_wait_for: i32,
    /// Content sections placed on the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub content_sections: Vec<ContentSection>,
    /// Unix timestamp of the last deployment.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub deployed_at: i64,
    /// Dynamic content blocks placed on the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub dynamic_contents: Vec<DynamicContent>,
    /// Forms embedded in the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub forms: Vec<Form>,
    /// The page's HTML body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html_content: HtmlContent,
    /// Hyperlinks referenced by the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub hyperlinks: Vec<Hyperlink>,
    /// Images referenced by the page.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub images: Vec<Image>,
    /// The layout the page was built with.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub layout: String,
    /// The microsite serving the page.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub microsite_id: i32,
    /// The page's style block.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub style: String,
    /// Unix timestamp of the last refresh.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub refreshed_at: i64,
    /// The page's path under its microsite domain.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub relative_path: String,
    /// Whether the page content is protected.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_content_protected: bool,
    /// Whether the page skips microsite authentication.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub exclude_from_authentication: bool,
}

impl LandingPageService<'_> {
    /// Creates a new landing page in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        page: Option<LandingPage>,
    ) -> Result<(LandingPage, Response), ApiError> {
        let mut page = page.unwrap_or_default();
        page.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/landingPage", Some(&mut page))
            .await?;
        Ok((page, response))
    }

    /// Retrieves a landing page via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(LandingPage, Response), ApiError> {
        let endpoint = format!("/assets/landingPage/{}?depth=complete", id);
        let mut page = LandingPage::default();
        let response = self.client.get_decode(&endpoint, &mut page).await?;
        Ok((page, response))
    }

    /// Lists landing pages.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<LandingPage>, Response), ApiError> {
        let mut pages = Vec::new();
        let response = self
            .client
            .list_decode("/assets/landingPages", &mut pages, options)
            .await?;
        Ok((pages, response))
    }

    /// Updates an existing landing page in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        page: Option<LandingPage>,
    ) -> Result<(LandingPage, Response), ApiError> {
        let mut page = page.unwrap_or_default();
        page.id = id;
        page.name = name.to_string();
        let endpoint = format!("/assets/landingPage/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut page)).await?;
        Ok((page, response))
    }

    /// Deletes an existing landing page from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let page = LandingPage {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/landingPage/{}", id);
        self.client.delete_request(&endpoint, Some(&page)).await
    }
}
