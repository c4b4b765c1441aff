//
//  eloqua-rs
//  api/data/custom_objects.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Custom object endpoints.
//!
//! Custom objects are user-defined tables. This service manages the
//! definitions; the records inside an object are handled by
//! [`custom_object_data`](super::custom_object_data).
//!
//! The field set here was taken from live API responses, as the upstream
//! documentation for this resource does not match what the API returns.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the custom object endpoints.
///
/// Obtained via [`Client::custom_objects`].
pub struct CustomObjectService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering custom object definitions.
    pub fn custom_objects(&self) -> CustomObjectService<'_> {
        CustomObjectService { client: self }
    }
}

/// An Eloqua custom object definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObject {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The custom object's ID.
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
    /// The custom object's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the object's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the object.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The field whose value names each record.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub display_name_field_id: String,
    /// The object's plain-text description as shown in the UI.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub content_text: String,
    /// The number of records held by the object.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub record_count: i32,
    /// The fields defined on the object.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub fields: Vec<CustomObjectField>,
}

/// A database field within an Eloqua custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectField {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The field's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The depth the object was requested at.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub depth: String,
    /// The field's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The field's data type.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub data_type: String,
    /// The value used when a record leaves the field blank.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub default_value: String,
    /// How the field renders in the UI.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub display_type: String,
    /// The internal name used in lookups.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub internal_name: String,
}

impl CustomObjectService<'_> {
    /// Creates a new custom object in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        custom_object: Option<CustomObject>,
    ) -> Result<(CustomObject, Response), ApiError> {
        let mut custom_object = custom_object.unwrap_or_default();
        custom_object.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/customObject", Some(&mut custom_object))
            .await?;
        Ok((custom_object, response))
    }

    /// Retrieves a custom object via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(CustomObject, Response), ApiError> {
        let endpoint = format!("/assets/customObject/{}?depth=complete", id);
        let mut custom_object = CustomObject::default();
        let response = self.client.get_decode(&endpoint, &mut custom_object).await?;
        Ok((custom_object, response))
    }

    /// Lists custom object definitions.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<CustomObject>, Response), ApiError> {
        let mut custom_objects = Vec::new();
        let response = self
            .client
            .list_decode("/assets/customObjects", &mut custom_objects, options)
            .await?;
        Ok((custom_objects, response))
    }

    /// Updates an existing custom object in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        custom_object: Option<CustomObject>,
    ) -> Result<(CustomObject, Response), ApiError> {
        let mut custom_object = custom_object.unwrap_or_default();
        custom_object.id = id;
        custom_object.name = name.to_string();
        let endpoint = format!("/assets/customObject/{}", id);
        let response = self
            .client
            .put_decode(&endpoint, Some(&mut custom_object))
            .await?;
        Ok((custom_object, response))
    }

    /// Deletes an existing custom object from Eloqua.
    ///
    /// Objects still holding records answer 412 (`HasDependencies`).
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let custom_object = CustomObject {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/customObject/{}", id);
        self.client
            .delete_request(&endpoint, Some(&custom_object))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use crate::StatusKind;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_custom_object_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/customObject")
            .match_body(Matcher::Exact(r#"{"name":"Purchases"}"#.to_string()))
            .with_body(r#"{"type":"CustomObject","id":"6","name":"Purchases"}"#)
            .create_async()
            .await;

        let (custom_object, _resp) = client.custom_objects().create("Purchases", None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(custom_object.id, 6);
    }

    #[tokio::test]
    async fn test_custom_object_get_decodes_fields() {
        let (mut server, client) = server_and_client().await;
        let body = r#"{
            "type": "CustomObject",
            "id": "6",
            "name": "Purchases",
            "recordCount": 250,
            "fields": [{"type":"CustomObjectField","id":"41","name":"SKU","dataType":"text","internalName":"SKU1"}]
        }"#;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/customObject/6")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(body)
            .create_async()
            .await;

        let (custom_object, _resp) = client.custom_objects().get(6).await.unwrap();
        mock.assert_async().await;
        assert_eq!(custom_object.record_count, 250);
        assert_eq!(custom_object.fields[0].internal_name, "SKU1");
    }

    #[tokio::test]
    async fn test_custom_object_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/customObjects")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"CustomObject","id":"6","name":"Purchases"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (custom_objects, _resp) = client.custom_objects().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(custom_objects.len(), 1);
    }

    #[tokio::test]
    async fn test_custom_object_delete_with_dependencies() {
        let (mut server, client) = server_and_client().await;
        let _mock = server
            .mock("DELETE", "/api/rest/2.0/assets/customObject/6")
            .with_status(412)
            .with_body("Object has dependencies")
            .create_async()
            .await;

        let err = client.custom_objects().delete(6).await.unwrap_err();
        assert_eq!(err.status_kind(), Some(StatusKind::HasDependencies));
        assert_eq!(err.response().unwrap().error_content, "Object has dependencies");
    }
}
