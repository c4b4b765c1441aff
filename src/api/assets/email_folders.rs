//
//  eloqua-rs
//  api/assets/email_folders.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Email folder endpoints.
//!
//! Folders organize email assets inside an Eloqua instance.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response};

/// Access to the email folder endpoints.
///
/// Obtained via [`Client::email_folders`].
pub struct EmailFolderService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering email folders.
    pub fn email_folders(&self) -> EmailFolderService<'_> {
        EmailFolderService { client: self }
    }
}

/// An Eloqua email folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailFolder {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The folder's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The folder's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the folder's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// The ID of the parent folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// Whether the folder is a built-in system folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_system: bool,
    /// Whether the folder has been archived.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub archive: bool,
}

impl EmailFolderService<'_> {
    /// Creates a new email folder in Eloqua.
    pub async fn create(
        &self,
        name: &str,
        folder: Option<EmailFolder>,
    ) -> Result<(EmailFolder, Response), ApiError> {
        let mut folder = folder.unwrap_or_default();
        folder.name = name.to_string();
        let response = self
            .client
            .post_decode("/assets/email/folder", Some(&mut folder))
            .await?;
        Ok((folder, response))
    }

    /// Retrieves an email folder via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(EmailFolder, Response), ApiError> {
        let endpoint = format!("/assets/email/folder/{}?depth=complete", id);
        let mut folder = EmailFolder::default();
        let response = self.client.get_decode(&endpoint, &mut folder).await?;
        Ok((folder, response))
    }

    /// Lists email folders.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<EmailFolder>, Response), ApiError> {
        let mut folders = Vec::new();
        let response = self
            .client
            .list_decode("/assets/email/folders", &mut folders, options)
            .await?;
        Ok((folders, response))
    }

    /// Updates an existing email folder in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        folder: Option<EmailFolder>,
    ) -> Result<(EmailFolder, Response), ApiError> {
        let mut folder = folder.unwrap_or_default();
        folder.id = id;
        folder.name = name.to_string();
        let endpoint = format!("/assets/email/folder/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut folder)).await?;
        Ok((folder, response))
    }

    /// Deletes an existing email folder from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let folder = EmailFolder {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/email/folder/{}", id);
        self.client.delete_request(&endpoint, Some(&folder)).await
    }
}
