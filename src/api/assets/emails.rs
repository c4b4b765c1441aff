//
//  eloqua-rs
//  api/assets/emails.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Email asset endpoints.
//!
//! Provides access to all the endpoints related to email assets within
//! Eloqua: creating, fetching, listing, updating and deleting emails.
//!
//! # Example
//!
//! ```rust,no_run
//! use eloqua::Client;
//! use eloqua::api::assets::emails::Email;
//!
//! # async fn example(client: &Client) -> Result<(), eloqua::ApiError> {
//! let draft = Email {
//!     subject: "Welcome aboard".to_string(),
//!     ..Default::default()
//! };
//! let (email, _resp) = client.emails().create("Welcome email", Some(draft)).await?;
//! println!("created email {}", email.id);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{
    ApiError, FieldMerge, HtmlContent, Hyperlink, Image, ListOptions, Response,
};

/// Access to the email asset endpoints.
///
/// Obtained via [`Client::emails`].
pub struct EmailService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering email assets.
    pub fn emails(&self) -> EmailService<'_> {
        EmailService { client: self }
    }
}

/// An Eloqua email asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// The Eloqua asset type, `Email`.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub asset_type: String,
    /// The asset's draft/active status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The email's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The ID of the creating user.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_by: i32,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The email's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the email.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the email.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The address bounce-backs are delivered to.
    ///
    /// The field name follows the API's own (misspelled) wire format.
    #[serde(default, rename = "bouceBackEmail", skip_serializing_if = "is_empty")]
    pub bounce_back_email: String,
    /// The ID of the footer applied to the email.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_footer_id: i32,
    /// The ID of the header applied to the email.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_header_id: i32,
    /// The subscription group the email belongs to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_group_id: i32,
    /// The text encoding used for the email.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub encoding_id: i32,
    /// Field merges referenced by the email body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub field_merges: Vec<FieldMerge>,
    /// The email's HTML body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html_content: HtmlContent,
    /// Hyperlinks referenced by the email body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub hyperlinks: Vec<Hyperlink>,
    /// Images referenced by the email body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub images: Vec<Image>,
    /// Whether the plain-text body may be edited independently.
    #[serde(
        default,
        rename = "isPlainTextEditable",
        with = "quoted",
        skip_serializing_if = "is_empty"
    )]
    pub plain_text_editable: bool,
    /// Whether opens and clickthroughs are tracked.
    #[serde(default, rename = "isTracked", with = "quoted", skip_serializing_if = "is_empty")]
    pub tracked: bool,
    /// The email's subject line.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub subject: String,
    /// The layout the email was built with.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub layout: String,
    /// The email's plain-text body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub plain_text: String,
    /// The reply-to address.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub reply_to_email: String,
    /// The reply-to display name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub reply_to_name: String,
    /// Whether only the plain-text body is sent.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub send_plain_text_only: bool,
    /// The sender address.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub sender_email: String,
    /// The sender display name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub sender_name: String,
    /// The email's style block.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub style: String,
}

impl EmailService<'_> {
    /// Creates a new email in Eloqua.
    ///
    /// The given name overrides any name on `email`. On success the returned
    /// entity carries the server-assigned fields, such as its ID.
    pub async fn create(
        &self,
        name: &str,
        email: Option<Email>,
    ) -> Result<(Email, Response), ApiError> {
        let mut email = email.unwrap_or_default();
        email.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/email", Some(&mut email))
            .await?;
        Ok((email, response))
    }

    /// Retrieves an email via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Email, Response), ApiError> {
        let endpoint = format!("/assets/email/{}?depth=complete", id);
        let mut email = Email::default();
        let response = self.client.get_decode(&endpoint, &mut email).await?;
        Ok((email, response))
    }

    /// Lists email assets.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Email>, Response), ApiError> {
        let mut emails = Vec::new();
        let response = self
            .client
            .list_decode("/assets/emails", &mut emails, options)
            .await?;
        Ok((emails, response))
    }

    /// Updates an existing email in Eloqua.
    ///
    /// The given ID and name override whatever is on `email`.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        email: Option<Email>,
    ) -> Result<(Email, Response), ApiError> {
        let mut email = email.unwrap_or_default();
        email.id = id;
        email.name = name.to_string();
        let endpoint = format!("/assets/email/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut email)).await?;
        Ok((email, response))
    }

    /// Deletes an existing email from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let email = Email {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/email/{}", id);
        self.client.delete_request(&endpoint, Some(&email)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_email_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/email")
            .match_body(Matcher::Exact(
                r#"{"name":"Test Email 2","subject":"A test email"}"#.to_string(),
            ))
            .with_body(r#"{"assetType":"Email","id":"2","name":"Test Email 2","subject":"A test email"}"#)
            .create_async()
            .await;

        let input = Email {
            subject: "A test email".to_string(),
            ..Default::default()
        };
        let (email, _resp) = client.emails().create("Test Email 2", Some(input)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(email.id, 2);
        assert_eq!(email.asset_type, "Email");
        assert_eq!(email.name, "Test Email 2");
        assert_eq!(email.subject, "A test email");
    }

    #[tokio::test]
    async fn test_email_create_without_model() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/email")
            .match_body(Matcher::Exact(r#"{"name":"Test Email 2"}"#.to_string()))
            .with_body(r#"{"assetType":"Email","id":"2","name":"Test Email 2","subject":"A test email"}"#)
            .create_async()
            .await;

        let (email, _resp) = client.emails().create("Test Email 2", None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(
            email,
            Email {
                asset_type: "Email".to_string(),
                id: 2,
                name: "Test Email 2".to_string(),
                subject: "A test email".to_string(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_email_get() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/email/1")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(r#"{"assetType":"Email","id":"1","name":"Test Email 1"}"#)
            .create_async()
            .await;

        let (email, _resp) = client.emails().get(1).await.unwrap();
        mock.assert_async().await;
        assert_eq!(email.id, 1);
        assert_eq!(email.name, "Test Email 1");
    }

    #[tokio::test]
    async fn test_email_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/emails")
            .match_query(Matcher::Exact("count=200&depth=minimal&page=1".to_string()))
            .with_body(
                r#"{"elements":[{"id":"100","name":"Test email 100","assetType":"Email"}],"page":1,"pageSize":200,"total":2}"#,
            )
            .create_async()
            .await;

        let options = ListOptions {
            count: 200,
            page: 1,
            ..Default::default()
        };
        let (emails, resp) = client.emails().list(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].id, 100);
        assert_eq!(resp.page, 1);
        assert_eq!(resp.page_size, 200);
        assert_eq!(resp.total, 2);
    }

    #[tokio::test]
    async fn test_email_update() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("PUT", "/api/rest/2.0/assets/email/8")
            .match_body(Matcher::Exact(
                r#"{"id":"8","name":"Test Email Updated"}"#.to_string(),
            ))
            .with_body(
                r#"{"assetType":"Email","id":"8","name":"Test Email Updated","htmlContent":{"type":"RawHtmlContent","html":"Hello"}}"#,
            )
            .create_async()
            .await;

        let (email, _resp) = client.emails().update(8, "Test Email Updated", None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(email.id, 8);
        assert_eq!(email.html_content.content_type, "RawHtmlContent");
        assert_eq!(email.html_content.html, "Hello");
    }

    #[tokio::test]
    async fn test_email_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/assets/email/2")
            .match_body(Matcher::Exact(r#"{"id":"2"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.emails().delete(2).await.unwrap();
        mock.assert_async().await;
        assert_eq!(resp.status.as_u16(), 200);
    }
}
