//
//  eloqua-rs
//  api/assets/mod.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Eloqua asset endpoints.
//!
//! Typed bindings for the `/assets/...` resource collections: the marketing
//! material an Eloqua instance holds, as opposed to the records under
//! [`data`](super::data).
//!
//! # Module Organization
//!
//! - [`emails`] - Email assets
//! - [`email_folders`] - Folders organizing email assets
//! - [`email_groups`] - Email subscription groups
//! - [`campaigns`] - Campaigns and their canvas elements
//! - [`forms`] - Forms, their fields and processing steps
//! - [`landing_pages`] - Landing pages
//! - [`microsites`] - Microsites serving landing pages
//! - [`option_lists`] - Select/picklist option lists
//!
//! # Example
//!
//! ```rust,no_run
//! use eloqua::Client;
//!
//! # async fn example(client: &Client) -> Result<(), eloqua::ApiError> {
//! let (email, _resp) = client.emails().create("Welcome email", None).await?;
//! println!("created email {}", email.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Every service is a borrow of the [`Client`](crate::Client) and is
//!   reached through its accessor method
//! - `get` operations request `depth=complete`; listings default to `minimal`

pub mod campaigns;
pub mod email_folders;
pub mod email_groups;
pub mod emails;
pub mod forms;
pub mod landing_pages;
pub mod microsites;
pub mod option_lists;
