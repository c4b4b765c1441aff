//
//  eloqua-rs
//  api/assets/forms.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Form asset endpoints.
//!
//! Forms collect submissions on landing pages. A form's fields arrive on the
//! wire under `elements`, and its processing steps describe what happens to
//! each submission. Eloqua has a range of `FormStep*` types; [`FormStep`]
//! models only the fields they share.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::ser::{is_empty, quoted};
use crate::api::common::{ApiError, ListOptions, Response, Size, TypeObject};

/// Access to the form asset endpoints.
///
/// Obtained via [`Client::forms`].
pub struct FormService<'a> {
    client: &'a Client,
}

impl Client {
    /// The service covering form assets.
    pub fn forms(&self) -> FormService<'_> {
        FormService { client: self }
    }
}

/// An Eloqua form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The form's draft/active status.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub current_status: String,
    /// The form's ID.
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
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The form's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The permissions the current user holds on the form.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the form.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The form's fields, carried under `elements` on the wire.
    #[serde(default, rename = "elements", skip_serializing_if = "is_empty")]
    pub form_fields: Vec<FormField>,
    /// The field holding the submitter's email address.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub email_address_form_field_id: i32,
    /// The form's rendered HTML.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html: String,
    /// The name the form posts under.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html_name: String,
    /// How submissions are processed (`integrated` or `externalEmail`).
    #[serde(default, skip_serializing_if = "is_empty")]
    pub processing_type: String,
    /// The steps run against each submission.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub processing_steps: Vec<FormStep>,
    /// The form's dimensions.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub size: Size,
    /// The form's style block.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub style: String,
}

/// A single field and its settings on a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The field's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The field's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// Help text shown with the field.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub instructions: String,
    /// The field's style block.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub style: String,
    /// The field's data type.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub data_type: String,
    /// How the field renders (`text`, `checkbox`, ...).
    #[serde(default, skip_serializing_if = "is_empty")]
    pub display_type: String,
    /// The field merge populating the field.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub field_merge_id: i32,
    /// The name the field posts under.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html_name: String,
    /// Validation rules applied to the field.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub validations: Vec<FieldValidation>,
    /// The contact field this form field was created from.
    #[serde(
        default,
        rename = "createdFromContactFieldID",
        with = "quoted",
        skip_serializing_if = "is_empty"
    )]
    pub created_from_contact_field_id: i32,
}

/// A validation rule, typically found on a form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The validation's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The depth the object was requested at.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub depth: String,
    /// The validation's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the rule.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// The condition the field value must satisfy.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub condition: TypeObject,
    /// Whether the rule is enforced.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub is_enabled: bool,
    /// The message shown when validation fails.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub message: String,
}

/// A generic Eloqua form processing step, holding the fields common to the
/// various `FormStep*` types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormStep {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The step's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The step's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// When the step executes.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub execute: String,
}

impl FormService<'_> {
    /// Creates a new form in Eloqua.
    pub async fn create(&self, name: &str, form: Option<Form>) -> Result<(Form, Response), ApiError> {
        let mut form = form.unwrap_or_default();
        form.name = name.to_string();
        let response = self.client.post_decode("/assets/form", Some(&mut form)).await?;
        Ok((form, response))
    }

    /// Retrieves a form via its ID, at complete depth.
    pub async fn get(&self, id: i32) -> Result<(Form, Response), ApiError> {
        let endpoint = format!("/assets/form/{}?depth=complete", id);
        let mut form = Form::default();
        let response = self.client.get_decode(&endpoint, &mut form).await?;
        Ok((form, response))
    }

    /// Lists form assets.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Form>, Response), ApiError> {
        let mut forms = Vec::new();
        let response = self
            .client
            .list_decode("/assets/forms", &mut forms, options)
            .await?;
        Ok((forms, response))
    }

    /// Updates an existing form in Eloqua.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        form: Option<Form>,
    ) -> Result<(Form, Response), ApiError> {
        let mut form = form.unwrap_or_default();
        form.id = id;
        form.name = name.to_string();
        let endpoint = format!("/assets/form/{}", id);
        let response = self.client.put_decode(&endpoint, Some(&mut form)).await?;
        Ok((form, response))
    }

    /// Deletes an existing form from Eloqua.
    pub async fn delete(&self, id: i32) -> Result<Response, ApiError> {
        let form = Form {
            id,
            ..Default::default()
        };
        let endpoint = format!("/assets/form/{}", id);
        self.client.delete_request(&endpoint, Some(&form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::server_and_client;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_form_create() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("POST", "/api/rest/2.0/assets/form")
            .match_body(Matcher::Exact(r#"{"name":"Test form"}"#.to_string()))
            .with_body(r#"{"type":"Form","id":"20","name":"Test form","htmlName":"testForm"}"#)
            .create_async()
            .await;

        let (form, _resp) = client.forms().create("Test form", None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(form.id, 20);
        assert_eq!(form.html_name, "testForm");
    }

    #[tokio::test]
    async fn test_form_get_decodes_fields_and_validations() {
        let (mut server, client) = server_and_client().await;
        let body = r#"{
            "type": "Form",
            "id": "20",
            "name": "Test form",
            "elements": [{
                "type": "FormField",
                "id": "7",
                "name": "Email Address",
                "dataType": "text",
                "displayType": "text",
                "htmlName": "emailAddress",
                "validations": [{
                    "type": "FieldValidation",
                    "id": "17",
                    "name": "required",
                    "condition": {"type": "IsRequiredCondition"},
                    "isEnabled": "true",
                    "message": "This field is required"
                }]
            }],
            "processingSteps": [{"type": "FormStepCreateUpdateContact", "id": "31", "execute": "always"}]
        }"#;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/form/20")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "complete".to_string()))
            .with_body(body)
            .create_async()
            .await;

        let (form, _resp) = client.forms().get(20).await.unwrap();
        mock.assert_async().await;
        assert_eq!(form.form_fields.len(), 1);
        let field = &form.form_fields[0];
        assert_eq!(field.html_name, "emailAddress");
        assert_eq!(field.validations[0].condition.kind, "IsRequiredCondition");
        assert!(field.validations[0].is_enabled);
        assert_eq!(form.processing_steps[0].execute, "always");
    }

    #[tokio::test]
    async fn test_form_list() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("GET", "/api/rest/2.0/assets/forms")
            .match_query(Matcher::UrlEncoded("depth".to_string(), "minimal".to_string()))
            .with_body(
                r#"{"elements":[{"type":"Form","id":"20","name":"Test form"}],"page":1,"pageSize":1000,"total":1}"#,
            )
            .create_async()
            .await;

        let (forms, _resp) = client.forms().list(None).await.unwrap();
        mock.assert_async().await;
        assert_eq!(forms.len(), 1);
    }

    #[tokio::test]
    async fn test_form_delete() {
        let (mut server, client) = server_and_client().await;
        let mock = server
            .mock("DELETE", "/api/rest/2.0/assets/form/20")
            .match_body(Matcher::Exact(r#"{"id":"20"}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let resp = client.forms().delete(20).await.unwrap();
        mock.assert_async().await;
        assert!(resp.is_success());
    }
}
