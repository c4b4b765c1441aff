//
//  eloqua-rs
//  api/data/mod.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Eloqua data endpoints.
//!
//! Typed bindings for the `/data/...` resource collections: the records an
//! Eloqua instance accumulates, as opposed to the marketing material under
//! [`assets`](super::assets). A few contact-adjacent configuration resources
//! (fields, lists, segments) live under `/assets/contact/...` upstream but
//! are grouped here with the data they describe.
//!
//! # Module Organization
//!
//! - [`contacts`] - Contact records
//! - [`accounts`] - Account (company) records
//! - [`contact_fields`] - Contact field definitions
//! - [`contact_lists`] - Static contact lists
//! - [`contact_segments`] - Dynamic contact segments
//! - [`custom_objects`] - Custom object definitions
//! - [`custom_object_data`] - Records held by a custom object
//! - [`activities`] - Contact activity history (legacy 1.0 endpoint)
//! - [`visitors`] - Website visitor profiles

pub mod accounts;
pub mod activities;
pub mod contact_fields;
pub mod contact_lists;
pub mod contact_segments;
pub mod contacts;
pub mod custom_object_data;
pub mod custom_objects;
pub mod visitors;
