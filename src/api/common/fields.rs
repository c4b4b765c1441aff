//
//  eloqua-rs
//  api/common/fields.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Shared Entity Fragments
//!
//! Small Eloqua objects that recur across asset and data schemas: custom
//! field values, hyperlinks, field merges, images and similar. Resource
//! modules compose these into their entity structs rather than redefining
//! them per endpoint.
//!
//! All fragments follow the API's write conventions: zero-valued fields are
//! omitted and numeric identifiers travel as JSON strings (see
//! [`ser`](super::ser) for the adapters).

use serde::{Deserialize, Serialize};

use crate::api::common::ser::{is_empty, quoted};

/// The structure in which custom field values are passed via the API.
///
/// Entity fields that are not part of a typed model can still be read and
/// written through an entity's `field_values` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The ID of the field the value belongs to.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The raw field value.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub value: String,
}

/// An Eloqua hyperlink object, commonly contained in assets such as emails
/// and landing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The hyperlink's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The hyperlink's display name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The target URL.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub href: String,
}

/// An Eloqua field merge object.
///
/// The fields that carry meaning depend on the merge source (or type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMerge {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The field merge's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The field merge's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// The merge syntax as it appears in asset bodies.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub syntax: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the merge.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The contact field the merge draws from.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub contact_field_id: i32,
    /// The value used when the source field is empty.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub default_value: String,
    /// The merge source type.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub merge_type: String,
}

/// An Eloqua image file, commonly found in assets such as emails and
/// landing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The image's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The depth the object was requested at.
    #[serde(default, rename = "depth", skip_serializing_if = "is_empty")]
    pub request_depth: String,
    /// The image's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// The ID of the containing folder.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub folder_id: i32,
    /// Unix timestamp of creation.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_at: i64,
    /// The ID of the creating user.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub created_by: i32,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the image.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The permissions the current user holds on the image.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub permissions: Vec<String>,
    /// The URL of the full-size image.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub full_image_url: String,
    /// The image's dimensions.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub size: Size,
    /// The URL of the image's thumbnail.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub thumbnail_url: String,
}

/// A universal Eloqua object tracking the width and height of other assets
/// such as images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// Width in pixels.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub width: i32,
    /// Height in pixels.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub height: i32,
}

/// The HTML content model carried by emails and landing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlContent {
    /// The content type, e.g. `RawHtmlContent`.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub content_type: String,
    /// The raw HTML.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub html: String,
}

/// A reusable block of content shared between assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The content section's ID.
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
    /// The content section's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    /// A description of the section's purpose.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    /// Unix timestamp of the last update.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_at: i64,
    /// The ID of the user who last updated the section.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub updated_by: i32,
    /// The section's HTML body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub content_html: String,
    /// The section's plain-text body.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub content_text: String,
    /// The section's sharing scope.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub scope: String,
    /// Hyperlinks referenced by the section.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub hyperlinks: Vec<Hyperlink>,
    /// Images referenced by the section.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub images: Vec<Image>,
    /// The section's dimensions.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub size: Size,
}

/// A dynamic content block referenced from assets such as landing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicContent {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// The dynamic content's ID.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub id: i32,
    /// The dynamic content's name.
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
}

/// The canvas position of a campaign element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
    /// Horizontal canvas coordinate.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub x: i32,
    /// Vertical canvas coordinate.
    #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
    pub y: i32,
}

/// A bare type reference, used where Eloqua nests an object carrying only
/// its type discriminator (for example a validation condition).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeObject {
    /// The Eloqua object type.
    #[serde(default, rename = "type", skip_serializing_if = "is_empty")]
    pub kind: String,
}
