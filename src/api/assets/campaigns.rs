//
//  eloqua-rs
//  api/assets/campaigns.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Campaign endpoints.
//!
//! Campaigns are the canvas assets tying emails, forms and landing pages
//! together. The element model here is generic: every step type shares the
//! common fields exposed on [`CampaignElement`], and action-specific
//! properties are not modeled.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, FieldValue, ListOptions, Position, Response};

/// Access to the campaign endpoints.
///
/// Obtained via [`Client::campaigns`].
pub struct CampaignService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering campaigns.
    pub fn campaigns(&self) -> CampaignService<'_> {
        CampaignService { client: self }
    }
}

/// An Eloqua campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The campaign's draft/active status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The campaign's ID.
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
    /// A description of the campaign.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The campaign's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the campaign.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the campaign.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The steps on the campaign canvas.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub elements: Vec<CampaignElement>,
    /// The money spent on the campaign so far.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub actual_cost: f32,
    /// The money budgeted for the campaign.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub budgeted_cost: f32,
    /// The campaign type label.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub campaign_type: String,
    /// Custom field values on the campaign.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub field_values: Vec<FieldValue>,
    /// Whether this is an email marketing campaign.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_email_marketing_campaign: bool,
    /// Whether members may re-enter the campaign.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_member_allowed_re_entry: bool,
    /// Whether the campaign is read-only.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_read_only: bool,
    /// Whether the campaign is included in ROI reporting.
    #[serde(default, rename = "isIncludedInROI", with = "quoted", skip_serializing_if = "is_empty")]
    pub is_included_in_roi: bool,
    /// Whether the campaign is synced with the CRM.
    #[serde(default, rename = "isSyncedWithCRM", with = "quoted", skip_serializing_if = "is_empty")]
    pub is_synced_with_crm: bool,
    /// The user the campaign runs as.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub run_as_user_id: i32,
    /// Unix timestamp the campaign ends at.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub end_at: i64,
    /// The number of members currently in the campaign.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub member_count: i32,
    /// The campaign's ID in the linked CRM.
    #[serde(default, rename = "crmId", skip_serializing_if = "is_empty")]
    pub crm_id: String,
    /// The product the campaign promotes.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub product: String,
    /// The region the campaign targets.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub region: String,
    /// The reporting category the campaign falls under.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub campaign_category: String,
}

/// A generic Eloqua campaign step.
///
/// Steps do have action-specific properties, but only the common fields are
/// modeled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignElement {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The element's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The element's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The number of members currently at this step.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub member_count: i32,
    /// The outgoing flows of the element.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub output_terminals: Vec<CampaignOutputTerminal>,
    /// The element's position on the canvas.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub position: Position,
}

/// An output flow of an element on a campaign canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOutputTerminal {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The terminal's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The ID of the element the terminal connects to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub connected_id: i32,
    /// The type of the connected element.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub connected_type: String,
    /// The terminal type, e.g. `out` or `qualified`.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub terminal_type: String,
}

impl CampaignService<'_> {
    /// Creates a new campaign in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        campaign: Option<Campaign>,
    ) -> Result<(Campaign, Response), ApiError> {
        let mut campaign = campaign.unwrap_or_default();
        campaign.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/campaign", Some(&mut campaign))
            .await?;
        Ok((campaign, response))
    }

    /// Retrieves a campaign via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Campaign, Response), ApiError> {
        let endpoint = format!("/assets/campaign/{}?depth=complete", id);
        let mut campaign = Campaign::default();
        let response = self.client.get_decode(&endpoint, &mut campaign).await?;
        Ok((campaign, response))
    }

    /// Lists campaigns.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Campaign>, Response), ApiError> {
        let mut campaigns = Vec::new();
        let response = self
            .client
            .list_decode("/assets/campaigns", &mut campaigns, options)
            .await?;
        Ok((campaigns, response))
    }

    /// Updates an existing campaign in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        campaign: Option<Campaign>,
    ) -> Result<(Campaign, Response), ApiError> {
        let mut campaign = campaign.unwrap_or_default();
        campaign.id = id;
        campaign.name = name.to_string();
        let endpoint = format!("/assets/campaign/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut campaign)).await?;
        Ok((campaign, response))
    }

    /// Deletes an existing campaign from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let campaign = Campaign {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/campaign/{}", id);
        self.client.delete_request(&endpoint, Some(&campaign)).await
    }
}
