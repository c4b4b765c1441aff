//
//  eloqua-rs
//  api/data/accounts.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Account endpoints.
//!
//! Accounts are the company records contacts roll up to. Fields not present
//! on the typed [`Account`] model can still be read and written through its
//! `field_values` collection.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, FieldValue, ListOptions, Response};

/// Access to the account endpoints.
///
/// Obtained via [`Client::accounts`].
pub struct AccountService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering account records.
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService { client: self }
    }
}

/// An Eloqua account record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The account's status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The account's ID.
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
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the account.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The account's company name; the record key.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// First address line.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub address1: String,
    /// Second address line.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub address2: String,
    /// Third address line.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub address3: String,
    /// The account's business phone number.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub business_phone: String,
    /// The account's city.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub city: String,
    /// The account's country.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub country: String,
    /// The account's postal code.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub postal_code: String,
    /// The account's province or state.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub province: String,
    /// Custom field values on the account.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub field_values: Vec<FieldValue>,
}

impl AccountService<'_> {
    /// Creates a new account in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        account: Option<Account>,
    ) -> Result<(Account, Response), ApiError> {
        let mut account = account.unwrap_or_default();
        account.name = name.to_string();
        let response = self
            .client
            .post_decode("/data/account", Some(&mut account))
            .await?;
        Ok((account, response))
    }

    /// Retrieves an account via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Account, Response), ApiError> {
        let endpoint = format!("/data/account/{}?depth=complete", id);
        let mut account = Account::default();
        let response = self.client.get_decode(&endpoint, &mut account).await?;
        Ok((account, response))
    }

    /// Lists account records.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Account>, Response), ApiError> {
        let mut accounts = Vec::new();
        let response = self
            .client
            .list_decode("/data/accounts", &mut accounts, options)
            .await?;
        Ok((accounts, response))
    }

    /// Updates an existing account in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        account: Option<Account>,
    ) -> Result<(Account, Response), ApiError> {
        let mut account = account.unwrap_or_default();
        account.id = id;
        account.name = name.to_string();
        let endpoint = format!("/data/account/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut account)).await?;
        Ok((account, response))
    }

    /// Deletes an existing account from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let account = Account {
            id,
            ..Default::default()
        };
        let endpoint = format!("/data/account/{}", id);
        self.client.delete_request(&endpoint, Some(&account)).await
    }
}
