//
//  eloqua-rs
//  api/data/contacts.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Contact endpoints.
//!
//! Contacts are keyed by email address. Fields not present on the typed
//! [`Contact`] model can still be read and written through its
//! `field_values` collection.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, FieldValue, ListOptions, Response};

/// Access to the contact endpoints.
///
/// Obtained via [`Client::contacts`].
pub struct ContactService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering contact records.
    pub fn contacts(&self) -> ContactService<'_> {
        ContactService { client: self }
    }
}

/// An Eloqua contact record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The contact's status, e.g. `Awaiting action`.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The contact's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The contact's name. This relates to the contact's email address
    /// rather than a personal name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The name of the account the contact belongs to.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub account_name: String,
    /// The contact's business phone number.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub business_phone: String,
    /// The contact's country.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub country: String,
    /// The contact's email address; the record key.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub email_address: String,
    /// The contact's preferred email format.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub email_format_preference: String,
    /// The contact's first name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub first_name: String,
    /// The contact's last name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub last_name: String,
    /// The contact's postal code.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub postal_code: String,
    /// The contact's province or state.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub province: String,
    /// The sales person assigned to the contact.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub sales_person: String,
    /// The contact's job title (not a name title).
    #[serde(default, skip_serializing_if = "is_empty")]
    pub title: String,
    /// Unix timestamp of the contact's subscription.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub subscription_date: i64,
    /// Whether the contact's address has bounced back.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_bounce_back: bool,
    /// Whether the contact is subscribed.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_subscribed: bool,
    /// Custom field values on the contact.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub field_values: Vec<FieldValue>,
}

impl ContactService<'_> {
    /// Creates a new contact in Eloqua.
    ///
    /// The email address must not already exist, otherwise the API returns
    /// an error.
    pub async fn create(
        &self,
        email_address: &str,
        contact: Option<Contact>,
    ) -> Result<(Contact, Response), ApiError> {
        let mut contact = contact.unwrap_or_default();
        contact.email_address = email_address.to_string();
        let response = self
            .client
            .post_decode("/data/contact", Some(&mut contact))
            .await?;
        Ok((contact, response))
    }

    /// Retrieves a contact via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Contact, Response), ApiError> {
        let endpoint = format!("/data/contact/{}?depth=complete", id);
        let mut contact = Contact::default();
        let response = self.client.get_decode(&endpoint, &mut contact).await?;
        Ok((contact, response))
    }

    /// Lists contact records.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Contact>, Response), ApiError> {
        let mut contacts = Vec::new();
        let response = self
            .client
            .list_decode("/data/contacts", &mut contacts, options)
            .await?;
        Ok((contacts, response))
    }

    /// Updates an existing contact in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        email_address: &str,
        contact: Option<Contact>,
    ) -> Result<(Contact, Response), ApiError> {
        let mut contact = contact.unwrap_or_default();
        contact.id = id;
        contact.email_address = email_address.to_string();
        let endpoint = format!("/data/contact/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut contact)).await?;
        Ok((contact, response))
    }

    /// Deletes an existing contact from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let contact = Contact {
            id,
            ..Default::default()
        };
        let endpoint = format!("/data/contact/{}", id);
        self.client.delete_request(&endpoint, Some(&contact)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_contact_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/data/contact")
            .match_body(Matcher::Exact(
                r#"{"emailAddress":"test@example.com","firstName":"Test"}"#.to_string(),
            ))
            .with_body(
                r#"{"type":"Contact","id":"150","emailAddress":"test@example.com","firstName":"Test"}"#,
            )
            .create_async()
            .await;

        let input = Contact {
            first_name: "Test".to_string(),
            ..Default::default()
        };
        let (contact, _resp) = client
            .contacts()
            .create("test@example.com", Some(input))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(contact.id, 150);
        assert_eq!(contact.email_address, "test@example.com");
    }

    #[tokio::test]
    async fn test_contact_get() {
        let (mut server, client) = server_and_client().await;
        let body = r#"{
            "type": "Contact",
            "id": "150",
            "emailAddress": "test@example.com",
            "isSubscribed": "true",
            "fieldValues": [{"type":"FieldValue","id":"100009","value":"Head of Testing"}]
        }"#;
        let mock = server
            .mock("GET", "/api/rest/2.0/data/contact/150")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(body)
            .create_async()
            .await;

        let (contact, _resp) = client.contacts().get(150).await.unwrap();
        mock.assert_async().await;
        assert!(contact.is_subscribed);
        assert_eq!(contact.field_values[0].id, 100009);
        assert_eq!(contact.field_values[0].value, "Head of Testing");
    }

    #[tokio::test]
    async fn test_contact_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/data/contacts")
            .match_query(Matcher::Exact("count=200&depth=minimal&page=1".to_string()))
            .with_body(
                r#"{"elements":[{"id":"100","name":"c100","type":"Contact"}],"page":1,"pageSize":200,"total":2}"#,
            )
            .create_async()
            .await;

        let options = ListOptions {
            count: 200,
            page: 1,
            ..Default::default()
        };
        let (contacts, resp) = client.contacts().list(Some(&options)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, 100);
        assert_eq!(contacts[0].name, "c100");
        assert_eq!(resp.page, 1);
        assert_eq!(resp.page_size, 200);
        assert_eq!(resp.total, 2);
    }

    #[tokio::test]
    async fn test_contact_update() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("PUT", "/api/rest/2.0/data/contact/150")
            .match_body(Matcher::Exact(
                r#"{"id":"150","emailAddress":"renamed@example.com"}"#.to_string(),
            ))
            .with_body(r#"{"type":"Contact","id":"150","emailAddress":"renamed@example.com"}"#)
            .create_async()
            .await;

        let (contact, _resp) = client
            .contacts()
            .update(150, "renamed@example.com", None)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(contact.email_address, "renamed@example.com");
    }

    #[tokio::test]
    async fn test_contact_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/data/contact/150")
            .match_body(Matcher::Exact(r#"{"id":"150"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.contacts().delete(150).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
