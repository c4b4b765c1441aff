//
//  eloqua-rs
//  api/data/activities.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Contact activity endpoints.
//!
//! Activity history lives on a legacy REST 1.0 endpoint, so the service
//! passes a fully version-qualified path through the client's URL builder
//! and receives a bare JSON array rather than the usual listing envelope.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, Response};

/// Access to the contact activity endpoints.
///
/// Obtained via [`Client::activities`].
pub struct ActivityService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering contact activity history.
    pub fn activities(&self) -> ActivityService<'_> {
        ActivityService { client: self }
    }
}

/// An Eloqua contact activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// Unix timestamp the activity occurred at.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub activity_date: i64,
    /// The activity type, e.g. `emailOpen` or `formSubmit`.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub activity_type: String,
    /// The ID of the asset involved.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub asset: i32,
    /// The type of the asset involved.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub asset_type: String,
    /// The ID of the contact the activity belongs to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub contact: i32,
    /// The activity's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Key-value details specific to the activity instance.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub details: Vec<ActivityDetail>,
}

/// A key-value detail item provided with an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    /// The detail's name. Capitalized on the wire, unlike every other field.
    #[serde(default, rename = "Key", skip_serializing_if = "is_empty")]
    pub key: String,
    /// The detail's value.
    #[serde(default, rename = "Value", skip_serializing_if = "is_empty")]
    pub value: String,
}

impl ActivityService<'_> {
    /// Lists activities of one type for a contact within a time window.
    ///
    /// `start_date` and `end_date` are unix timestamps in seconds. Being a
    /// 1.0 endpoint, this does not return the usual listing envelope; only
    /// a plain array of activities arrives.
    pub async fn list(
        &self,
        contact_id: i32,
        activity_type: &str,
        start_date: i64,
        end_date: i64,
        count: u32,
    ) -> Result<(Vec<Activity>, Response), ApiError> {
        let endpoint = format!(
            "/api/rest/1.0/data/activities/contact/{}?type={}&startDate={}&endDate={}&count={}",
            contact_id, activity_type, start_date, end_date, count
        );
        let mut activities = Vec::new();
        let response = self.client.get_decode(&endpoint, &mut activities).await?;
        Ok((activities, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_activity_list_uses_legacy_route() {
        let (mut server, client) = server_and_client().await;
        let body = r#"[{
            "type": "Activity",
            "activityDate": "1467042903",
            "activityType": "formSubmit",
            "asset": "20",
            "assetType": "Form",
            "contact": "1005",
            "id": "300",
            "details": [{"Key": "Collection", "Value": "Signup"}]
        }]"#;
        let mock = server
            .mock("GET", "/api/rest/1.0/data/activities/contact/1005")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".to_string(), "formSubmit".to_string()),
                Matcher::UrlEncoded("startDate".to_string(), "0".to_string()),
                Matcher::UrlEncoded("endDate".to_string(), "1467051883".to_string()),
                Matcher::UrlEncoded("count".to_string(), "500".to_string()),
            ]))
            .with_body(body)
            .create_async()
            .await;

        let (activities, resp) = client
            .activities()
            .list(1005, "formSubmit", 0, 1467051883, 500)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, "formSubmit");
        assert_eq!(activities[0].contact, 1005);
        assert_eq!(activities[0].details[0].key, "Collection");
        // No envelope on 1.0 endpoints; paging fields stay zero.
        assert_eq!(resp.page, 0);
        assert_eq!(resp.total, 0);
    }
}
