//
//  eloqua-rs
//  api/data/contact_lists.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Contact list endpoints.
//!
//! Static lists of contacts. Membership is edited through the write-only
//! `membership_additions` / `membership_deletions` collections, which are
//! not part of the official endpoint documentation but are accepted by the
//! API.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the contact list endpoints.
///
/// Obtained via [`Client::contact_lists`].
pub struct ContactListService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering contact lists.
    pub fn contact_lists(&self) -> ContactListService<'_> {
        ContactListService { client: self }
    }
}

/// An Eloqua contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The list's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The list's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the list's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The permissions the current user holds on the list.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// The number of contacts on the list.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub count: i32,
    /// The data lookup tied to the list.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub data_lookup_id: String,
    /// The list's sharing scope.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub scope: String,
    /// Contact IDs to add to the list on the next write.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub membership_additions: Vec<i32>,
    /// Contact IDs to remove from the list on the next write.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub membership_deletions: Vec<i32>,
}

impl ContactListService<'_> {
    /// Creates a new contact list in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        list: Option<ContactList>,
    ) -> Result<(ContactList, Response), ApiError> {
        let mut list = list.unwrap_or_default();
        list.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/contact/list", Some(&mut list))
            .await?;
        Ok((list, response))
    }

    /// Retrieves a contact list via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(ContactList, Response), ApiError> {
        let endpoint = format!("/assets/contact/list/{}?depth=complete", id);
        let mut list = ContactList::default();
        let response = self.client.get_decode(&endpoint, &mut list).await?;
        Ok((list, response))
    }

    /// Lists contact lists.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ContactList>, Response), ApiError> {
        let mut lists = Vec::new();
        let response = self
            .client
            .list_decode("/assets/contact/lists", &mut lists, options)
            .await?;
        Ok((lists, response))
    }

    /// Updates an existing contact list in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        list: Option<ContactList>,
    ) -> Result<(ContactList, Response), ApiError> {
        let mut list = list.unwrap_or_default();
        list.id = id;
        list.name = name.to_string();
        let endpoint = format!("/assets/contact/list/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut list)).await?;
        Ok((list, response))
    }

    /// Deletes an existing contact list from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let list = ContactList {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/contact/list/{}", id);
        self.client.delete_request(&endpoint, Some(&list)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_contact_list_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/contact/list")
            .match_body(Matcher::Exact(r#"{"name":"Newsletter readers"}"#.to_string()))
            .with_body(r#"{"type":"ContactList","id":"77","name":"Newsletter readers","count":"0"}"#)
            .create_async()
            .await;

        let (list, _resp) = client
            .contact_lists()
            .create("Newsletter readers", None)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(list.id, 77);
    }

    #[tokio::test]
    async fn test_contact_list_update_membership() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("PUT", "/api/rest/2.0/assets/contact/list/77")
            .match_body(Matcher::Exact(
                r#"{"id":"77","name":"Newsletter readers","membershipAdditions":[150,151]}"#
                    .to_string(),
            ))
            .with_body(r#"{"type":"ContactList","id":"77","name":"Newsletter readers","count":"2"}"#)
            .create_async()
            .await;

        let input = ContactList {
            membership_additions: vec![150, 151],
            ..Default::default()
        };
        let (list, _resp) = client
            .contact_lists()
            .update(77, "Newsletter readers", Some(input))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(list.count, 2);
    }

    #[tokio::test]
    async fn test_contact_list_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/contact/lists")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"ContactList","id":"77","name":"Newsletter readers"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (lists, _resp) = client.contact_lists().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(lists.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_list_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/assets/contact/list/77")
            .match_body(Matcher::Exact(r#"{"id":"77"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.contact_lists().delete(77).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
