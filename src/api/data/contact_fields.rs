//
//  eloqua-rs
//  api/data/contact_fields.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Contact field endpoints.
//!
//! Contact fields define the columns available on every contact record.
//! Unlike most entities, the API serializes this one's boolean flags even
//! when false, so they are not skipped on write.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the contact field endpoints.
///
/// Obtained via [`Client::contact_fields`].
pub struct ContactFieldService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering contact field definitions.
    pub fn contact_fields(&self) -> ContactFieldService<'_> {
        ContactFieldService { client: self }
    }
}

/// An Eloqua contact field definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactField {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The field's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The field's display name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The field's data type (`text`, `date`, `number`, ...).
    #[serde(default, skip_serializing_if = "is_empty")]
    pub data_type: String,
    /// How the field renders in the UI.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub display_type: String,
    /// The internal name used in lookups and merges.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub internal_name: String,
    /// Whether the field is read-only.
    #[serde(default, with = "quoted")]
    pub is_read_only: bool,
    /// Whether the field is required.
    #[serde(default, with = "quoted")]
    pub is_required: bool,
    /// Whether the field is one of Eloqua's standard fields.
    #[serde(default, with = "quoted")]
    pub is_standard: bool,
    /// Whether the field is protected.
    #[serde(default, with = "quoted")]
    pub is_protected: bool,
    /// Whether the field is populated by the Outlook plugin.
    #[serde(default, with = "quoted")]
    pub is_populated_in_outlook_plugin: bool,
    /// When the field updates (`always`, `onlyIfBlank`, ...).
    #[serde(default, skip_serializing_if = "is_empty")]
    pub update_type: String,
}

impl ContactFieldService<'_> {
    /// Creates a new contact field in Eloqua.
    ///
    /// `is_protected` is forced to `false`; while undocumented, the API has
    /// been observed to require it on creation.
    pub async fn create(
        &self,
        name: &str,
        data_type: &str,
        display_type: &str,
        update_type: &str,
        field: Option<ContactField>,
    ) -> Result<(ContactField, Response), ApiError> {
        let mut field = field.unwrap_or_default();
        field.name = name.to_string();
        field.data_type = data_type.to_string();
        field.display_type = display_type.to_string();
        field.update_type = update_type.to_string();
        field.is_protected = false;
        let response = self
            .client
            .post_decode("/assets/contact/field", Some(&mut field))
            .await?;
        Ok((field, response))
    }

    /// Retrieves a contact field via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(ContactField, Response), ApiError> {
        let endpoint = format!("/assets/contact/field/{}?depth=complete", id);
        let mut field = ContactField::default();
        let response = self.client.get_decode(&endpoint, &mut field).await?;
        Ok((field, response))
    }

    /// Lists contact field definitions.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ContactField>, Response), ApiError> {
        let mut fields = Vec::new();
        let response = self
            .client
            .list_decode("/assets/contact/fields", &mut fields, options)
            .await?;
        Ok((fields, response))
    }

    /// Updates an existing contact field in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        data_type: &str,
        display_type: &str,
        update_type: &str,
        field: Option<ContactField>,
    ) -> Result<(ContactField, Response), ApiError> {
        let mut field = field.unwrap_or_default();
        field.id = id;
        field.name = name.to_string();
        field.data_type = data_type.to_string();
        field.display_type = display_type.to_string();
        field.update_type = update_type.to_string();
        let endpoint = format!("/assets/contact/field/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut field)).await?;
        Ok((field, response))
    }

    /// Deletes an existing contact field from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let field = ContactField {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/contact/field/{}", id);
        self.client.delete_request(&endpoint, Some(&field)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_contact_field_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/contact/field")
            .match_body(Matcher::Exact(
                r#"{"name":"Job Role","dataType":"text","displayType":"text","isReadOnly":"false","isRequired":"false","isStandard":"false","isProtected":"false","isPopulatedInOutlookPlugin":"false","updateType":"always"}"#
                    .to_string(),
            ))
            .with_body(r#"{"type":"ContactField","id":"100167","name":"Job Role","dataType":"text"}"#)
            .create_async()
            .await;

        let (field, _resp) = client
            .contact_fields()
            .create("Job Role", "text", "text", "always", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(field.id, 100167);
        assert_eq!(field.data_type, "text");
    }

    #[tokio::test]
    async fn test_contact_field_get() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/contact/field/100167")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(
                r#"{"type":"ContactField","id":"100167","name":"Job Role","isStandard":"true","internalName":"C_JobRole"}"#,
            )
            .create_async()
            .await;

        let (field, _resp) = client.contact_fields().get(100167).await.unwrap();
        mock.assert_async().await;
        assert!(field.is_standard);
        assert_eq!(field.internal_name, "C_JobRole");
    }

    #[tokio::test]
    async fn test_contact_field_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/contact/fields")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"ContactField","id":"100167","name":"Job Role"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (fields, _resp) = client.contact_fields().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(fields.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_field_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/assets/contact/field/100167")
            .match_body(Matcher::Exact(
                r#"{"id":"100167","isReadOnly":"false","isRequired":"false","isStandard":"false","isProtected":"false","isPopulatedInOutlookPlugin":"false"}"#
                    .to_string(),
            ))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.contact_fields().delete(100167).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
