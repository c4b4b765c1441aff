//
//  eloqua-rs
//  api/system/users.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! User endpoints.
//!
//! Eloqua system users. Users are managed through the instance itself, so
//! the API surface is read-heavy: fetch, list and a (not entirely reliable)
//! update. The interface/product/type permission sub-objects are not
//! modeled.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the user endpoints.
///
/// Obtained via [`Client::users`].
pub struct UserService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering system users.
    pub fn users(&self) -> UserService<'_> {
        UserService { client: self }
    }
}

/// An Eloqua system user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// Unix timestamp of the user's last access.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub accessed_at: i64,
    /// The user's status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The user's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The ID of the creating user.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_by: i32,
    /// A description of the user.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// The depth the object was requested at.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub depth: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The user's display name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on this user.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated this user.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// Unix timestamp the user is scheduled for.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub scheduled_for: i64,
    /// The template the user was created from.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub source_template_id: String,
    /// Beta programmes the user is enrolled in.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub beta_access: Vec<String>,
    /// The capabilities granted to the user.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub capabilities: Vec<String>,
    /// The company the user belongs to.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub company: String,
    /// The account view the user defaults to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub default_account_view_id: i32,
    /// The contact view the user defaults to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub default_contact_view_id: i32,
    /// The user's email address.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub email_address: String,
    /// The user's last login time, as reported by the API.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub logged_in_at: String,
    /// The name the user logs in with.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub login_name: String,
}

impl UserService<'_> {
    /// Retrieves a user via their ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(User, Response), ApiError> {
        let endpoint = format!("/system/user/{}?depth=complete", id);
        let mut user = User::default();
        let response = self.client.get_decode(&endpoint, &mut user).await?;
        Ok((user, response))
    }

    /// Lists system users.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<User>, Response), ApiError> {
        let mut users = Vec::new();
        let response = self
            .client
            .list_decode("/system/users", &mut users, options)
            .await?;
        Ok((users, response))
    }

    /// Updates an existing user in Eloqua.
    ///
    /// This endpoint has not proven fully stable upstream; expect validation
    /// surprises.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        user: Option<User>,
    ) -> Result<(User, Response), ApiError> {
        let mut user = user.unwrap_or_default();
        user.id = id;
        user.name = name.to_string();
        let endpoint = format!("/system/user/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut user)).await?;
        Ok((user, response))
    }
}
