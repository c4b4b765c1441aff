//
//  eloqua-rs
//  api/data/custom_object_data.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Custom object data endpoints.
//!
//! The records held inside a custom object. Every operation is scoped to the
//! parent object's ID, under `/data/customObject/{parentId}/instance...`.
//! Record fields are untyped by nature and travel entirely through
//! `field_values`, keyed by the parent object's field IDs.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, FieldValue, ListOptions, Response};

/// Access to the custom object data endpoints.
///
/// Obtained via [`Client::custom_object_data`].
pub struct CustomObjectDataService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering the records held by custom objects.
    pub fn custom_object_data(&self) -> CustomObjectDataService<'_> {
        CustomObjectDataService { client: self }
    }
}

/// A record held by an Eloqua custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectData {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The record's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The record's field values, keyed by the parent object's field IDs.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub field_values: Vec<FieldValue>,
}

impl CustomObjectDataService<'_> {
    /// Creates a new record inside the given custom object.
    pub async fn create(
        &self,
        parent_id: i32,
        data: Option<CustomObjectData>,
    ) -> Result<(CustomObjectData, Response), ApiError> {
        let mut data = data.unwrap_or_default();
        let endpoint = format!("/data/customObject/{}/instance", parent_id);
        let response = self.client.post_decode(&endpoint, Some(&mut data)).await?;
        Ok((data, response))
    }

    /// Retrieves a record via its ID, at complete depth.
    pub async fn get(
        &self,
        parent_id: i32,
        id: i32,
    ) -> Result<(CustomObjectData, Response), ApiError> {
        let endpoint = format!(
            "/data/customObject/{}/instance/{}?depth=complete",
            parent_id, id
        );
        let mut data = CustomObjectData::default();
        let response = self.client.get_decode(&endpoint, &mut data).await?;
        Ok((data, response))
    }

    /// Lists the records held by the given custom object.
    pub async fn list(
        &self,
        parent_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<CustomObjectData>, Response), ApiError> {
        let endpoint = format!("/data/customObject/{}/instances", parent_id);
        let mut records = Vec::new();
        let response = self
            .client
            .list_decode(&endpoint, &mut records, options)
            .await?;
        Ok((records, response))
    }

    /// Updates an existing record inside the given custom object.
    pub async fn update(
        &self,
        parent_id: i32,
        id: i32,
        data: Option<CustomObjectData>,
    ) -> Result<(CustomObjectData, Response), ApiError> {
        let mut data = data.unwrap_or_default();
        data.id = id;
        let endpoint = format!("/data/customObject/{}/instance/{}", parent_id, id);
        let response = self.client.put_decode(&endpoint, Some(&mut data)).await?;
        Ok((data, response))
    }

    /// Deletes a record from the given custom object.
    pub async fn delete(&self, parent_id: i32, id: i32) -> Result<Response, ApiError> {
        let data = CustomObjectData {
            id,
            ..Default::default()
        };
        let endpoint = format!("/data/customObject/{}/instance/{}", parent_id, id);
        self.client.delete_request(&endpoint, Some(&data)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_custom_object_data_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/data/customObject/6/instance")
            .match_body(Matcher::Exact(
                r#"{"fieldValues":[{"id":"41","value":"SKU-100"}]}"#.to_string(),
            ))
            .with_body(
                r#"{"type":"CustomObjectData","id":"900","fieldValues":[{"id":"41","value":"SKU-100"}]}"#,
            )
            .create_async()
            .await;

        let input = CustomObjectData {
            field_values: vec![FieldValue {
                id: 41,
                value: "SKU-100".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let (record, _resp) = client
            .custom_object_data()
            .create(6, Some(input))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(record.id, 900);
    }

    #[tokio::test]
    async fn test_custom_object_data_get() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/data/customObject/6/instance/900")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(r#"{"type":"CustomObjectData","id":"900"}"#)
            .create_async()
            .await;

        let (record, _resp) = client.custom_object_data().get(6, 900).await.unwrap();
        mock.assert_async().await;
        assert_eq!(record.id, 900);
    }

    #[tokio::test]
    async fn test_custom_object_data_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/data/customObject/6/instances")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"CustomObjectData","id":"900"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (records, resp) = client.custom_object_data().list(6, None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(resp.total, 1);
    }

    #[tokio::test]
    async fn test_custom_object_data_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/data/customObject/6/instance/900")
            .match_body(Matcher::Exact(r#"{"id":"900"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.custom_object_data().delete(6, 900).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
