//
//  eloqua-rs
//  api/data/contact_segments.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Contact segment endpoints.
//!
//! Segments are rule-driven contact collections. Their filter elements are
//! not modeled here; only the segment shell is typed.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the contact segment endpoints.
///
/// Obtained via [`Client::contact_segments`].
pub struct ContactSegmentService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering contact segments.
    pub fn contact_segments(&self) -> ContactSegmentService<'_> {
        ContactSegmentService { client: self }
    }
}

/// An Eloqua contact segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSegment {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The segment's status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The segment's ID.
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
    /// The segment's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the segment's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the segment.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The permissions the current user holds on the segment.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// The number of contacts matched at the last evaluation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub count: i32,
}

impl ContactSegmentService<'_> {
    /// Creates a new contact segment in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        segment: Option<ContactSegment>,
    ) -> Result<(ContactSegment, Response), ApiError> {
        let mut segment = segment.unwrap_or_default();
        segment.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/contact/segment", Some(&mut segment))
            .await?;
        Ok((segment, response))
    }

    /// Retrieves a contact segment via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(ContactSegment, Response), ApiError> {
        let endpoint = format!("/assets/contact/segment/{}?depth=complete", id);
        let mut segment = ContactSegment::default();
        let response = self.client.get_decode(&endpoint, &mut segment).await?;
        Ok((segment, response))
    }

    /// Lists contact segments.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ContactSegment>, Response), ApiError> {
        let mut segments = Vec::new();
        let response = self
            .client
            .list_decode("/assets/contact/segments", &mut segments, options)
            .await?;
        Ok((segments, response))
    }

    /// Updates an existing contact segment in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        segment: Option<ContactSegment>,
    ) -> Result<(ContactSegment, Response), ApiError> {
        let mut segment = segment.unwrap_or_default();
        segment.id = id;
        segment.name = name.to_string();
        let endpoint = format!("/assets/contact/segment/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut segment)).await?;
        Ok((segment, response))
    }

    /// Deletes an existing contact segment from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let segment = ContactSegment {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/contact/segment/{}", id);
        self.client.delete_request(&endpoint, Some(&segment)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_contact_segment_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/contact/segment")
            .match_body(Matcher::Exact(r#"{"name":"Active readers"}"#.to_string()))
            .with_body(r#"{"type":"ContactSegment","id":"31","name":"Active readers"}"#)
            .create_async()
            .await;

        let (segment, _resp) = client
            .contact_segments()
            .create("Active readers", None)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(segment.id, 31);
    }

    #[tokio::test]
    async fn test_contact_segment_get() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/contact/segment/31")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(r#"{"type":"ContactSegment","id":"31","name":"Active readers","count":"1040"}"#)
            .create_async()
            .await;

        let (segment, _resp) = client.contact_segments().get(31).await.unwrap();
        mock.assert_async().await;
        assert_eq!(segment.count, 1040);
    }

    #[tokio::test]
    async fn test_contact_segment_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/contact/segments")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"ContactSegment","id":"31","name":"Active readers"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (segments, _resp) = client.contact_segments().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(segments.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_segment_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/assets/contact/segment/31")
            .match_body(Matcher::Exact(r#"{"id":"31"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.contact_segments().delete(31).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
