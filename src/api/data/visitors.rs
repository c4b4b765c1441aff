//
//  eloqua-rs
//  api/data/visitors.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Visitor endpoints.
//!
//! Website visitor profiles, linkable to contacts once identified. This is
//! a read-only resource; only listing is exposed.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the visitor endpoints.
///
/// Obtained via [`Client::visitors`].
pub struct VisitorService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering visitor profiles.
    pub fn visitors(&self) -> VisitorService<'_> {
        VisitorService { client: self }
    }
}

/// An Eloqua visitor profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The visitor's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub visitor_id: i32,
    /// Unix timestamp the profile was created at.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The visitor's last-seen IP address.
    #[serde(default, rename = "V_IPAddress", skip_serializing_if = "is_empty")]
    pub ip_address: String,
    /// Unix timestamp of the visitor's last visit.
    #[serde(
        default,
        rename = "V_LastVisitDateAndTime",
        with = "quoted",
        skip_serializing_if = "is_empty"
    )]
    pub last_visit_date_and_time: i64,
    /// The external tracking ID for the visitor.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub external_id: String,
    /// The contact the visitor has been linked to, if identified.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub contact_id: i32,
    /// The visitor's status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
}

impl VisitorService<'_> {
    /// Lists visitor profiles.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Visitor>, Response), ApiError> {
        let mut visitors = Vec::new();
        let response = self
            .client
            .list_decode("/data/visitors", &mut visitors, options)
            .await?;
        Ok((visitors, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_visitor_list() {
        let (mut server, client) = server_and_client().await;
        let body = r#"{
            "elements": [{
                "type": "Visitor",
                "visitorId": "2000",
                "V_IPAddress": "198.51.100.7",
                "V_LastVisitDateAndTime": "1467042903",
                "externalId": "f9fc5fad-d089-44f0-be2c-ec3a0a9f266c",
                "contactId": "150"
            }],
            "page": 1,
            "pageSize": 1000,
            "total": 1
        }"#;
        let mock = server
            .mock("GET", "/api/rest/2.0/data/visitors")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(body)
            .create_async()
            .await;

        let (visitors, resp) = client.visitors().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(visitors.len(), 1);
        assert_eq!(visitors[0].visitor_id, 2000);
        assert_eq!(visitors[0].ip_address, "198.51.100.7");
        assert_eq!(visitors[0].contact_id, 150);
        assert_eq!(resp.total, 1);
    }
}
