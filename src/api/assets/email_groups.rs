//
//  eloqua-rs
//  api/assets/email_groups.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Email group endpoints.
//!
//! Email groups drive subscription management: each group carries its own
//! header/footer defaults and subscription landing pages.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the email group endpoints.
///
/// Obtained via [`Client::email_groups`].
pub struct EmailGroupService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering email groups.
    pub fn email_groups(&self) -> EmailGroupService<'_> {
        EmailGroupService { client: self }
    }
}

/// An Eloqua email group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroup {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The group's ID.
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
    /// The group's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the group.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// A description of the group's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the group.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The default header applied to member emails.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_header_id: i32,
    /// The default footer applied to member emails.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_footer_id: i32,
    /// The IDs of the emails belonging to the group.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub email_ids: Vec<i32>,
    /// Whether the group shows in the Outlook plugin.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_visible_in_outlook_plugin: bool,
    /// Whether the group shows on the public subscription list.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_visible_in_public_subscription_list: bool,
    /// The data lookup backing the subscription list.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub subscription_list_data_lookup_id: String,
    /// The contact list tracking subscriptions.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub subscription_list_id: i32,
    /// The landing page shown on subscribe.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub subscription_landing_page_id: i32,
    /// The data lookup backing the unsubscription list.
    #[serde(
        default,
        rename = "unSubscriptionListDataLookupId",
        skip_serializing_if = "is_empty"
    )]
    pub unsubscription_list_data_lookup_id: String,
    /// The contact list tracking unsubscriptions.
    #[serde(default, rename = "unSubscriptionListId", with = "quoted", skip_serializing_if = "is_empty")]
    pub unsubscription_list_id: i32,
    /// The landing page shown on unsubscribe.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub unsubscription_landing_page_id: i32,
}

impl EmailGroupService<'_> {
    /// Creates a new email group in Eloqua.
    ///
    /// The subscription/unsubscription landing page IDs are not required
    /// here, but the API has been observed to reject groups without them
    /// (`ObjectValidationError`); set them on the passed model if that
    /// happens.
    pub async fn create(
        &self,
        name: &str,
        group: Option<EmailGroup>,
    ) -> Result<(EmailGroup, Response), ApiError> {
        let mut group = group.unwrap_or_default();
        group.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/email/group", Some(&mut group))
            .await?;
        Ok((group, response))
    }

    /// Retrieves an email group via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(EmailGroup, Response), ApiError> {
        let endpoint = format!("/assets/email/group/{}?depth=complete", id);
        let mut group = EmailGroup::default();
        let response = self.client.get_decode(&endpoint, &mut group).await?;
        Ok((group, response))
    }

    /// Lists email groups.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<EmailGroup>, Response), ApiError> {
        let mut groups = Vec::new();
        let response = self
            .client
            .list_decode("/assets/email/groups", &mut groups, options)
            .await?;
        Ok((groups, response))
    }

    /// Updates an existing email group in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        group: Option<EmailGroup>,
    ) -> Result<(EmailGroup, Response), ApiError> {
        let mut group = group.unwrap_or_default();
        group.id = id;
        group.name = name.to_string();
        let endpoint = format!("/assets/email/group/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut group)).await?;
        Ok((group, response))
    }

    /// Deletes an existing email group from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let group = EmailGroup {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/email/group/{}", id);
        self.client.delete_request(&endpoint, Some(&group)).await
    }
}
