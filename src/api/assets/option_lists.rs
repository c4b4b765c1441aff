//
//  eloqua-rs
//  api/assets/option_lists.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Option list endpoints.
//!
//! Option lists (also known as picklists or select lists) back the choice
//! fields used on forms and contact fields.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the option list endpoints.
///
/// Obtained via [`Client::option_lists`].
pub struct OptionListService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering option lists.
    pub fn option_lists(&self) -> OptionListService<'_> {
        OptionListService { client: self }
    }
}

/// An Eloqua option list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionList {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The option list's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The depth the object was requested at.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub depth: String,
    /// The option list's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the list.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// The options making up the list.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub elements: Vec<OptionItem>,
}

/// A single select/picklist option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The text shown for the option.
    ///
    /// The all-lowercase field name follows the API's wire format.
    #[serde(default, rename = "displayname", skip_serializing_if = "is_empty")]
    pub display_name: String,
    /// The value submitted for the option.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub value: String,
}

impl OptionListService<'_> {
    /// Creates a new option list in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        option_list: Option<OptionList>,
    ) -> Result<(OptionList, Response), ApiError> {
        let mut option_list = option_list.unwrap_or_default();
        option_list.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/optionList", Some(&mut option_list))
            .await?;
        Ok((option_list, response))
    }

    /// Retrieves an option list via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(OptionList, Response), ApiError> {
        let endpoint = format!("/assets/optionList/{}?depth=complete", id);
        let mut option_list = OptionList::default();
        let response = self.client.get_decode(&endpoint, &mut option_list).await?;
        Ok((option_list, response))
    }

    /// Lists option lists.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<OptionList>, Response), ApiError> {
        let mut option_lists = Vec::new();
        let response = self
            .client
            .list_decode("/assets/optionLists", &mut option_lists, options)
            .await?;
        Ok((option_lists, response))
    }

    /// Updates an existing option list in Eloqua.
    ///
    /// Updating replaces the full option set; any option not present on the
    /// passed model is dropped.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        option_list: Option<OptionList>,
    ) -> Result<(OptionList, Response), ApiError> {
        let mut option_list = option_list.unwrap_or_default();
        option_list.id = id;
        option_list.name = name.to_string();
        let endpoint = format!("/assets/optionList/{}", id);
        let response = self
            .client
            .put_decode(&endpoint, Some(&mut option_list))
            .await?;
        Ok((option_list, response))
    }

    /// Deletes an existing option list from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let option_list = OptionList {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/optionList/{}", id);
        self.client.delete_request(&endpoint, Some(&option_list)).await
    }
}
