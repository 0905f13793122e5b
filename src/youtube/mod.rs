//! YouTube API interaction module
//!
//! This module provides the HTTP transport and the generic request engine
//! every resource-specific client is built on.
//!
//! # Module Structure
//!
//! - [`http`] - HTTP transport seam and its reqwest implementation
//! - [`client`] - request validation, quota estimation and dispatch
//!
//! # Example
//!
//! ```ignore
//! use ytapi::resource::get_policy;
//! use ytapi::youtube::client::{params, ResourceClient};
//!
//! async fn example() -> ytapi::Result<()> {
//!     let policy = get_policy("videos").unwrap().clone();
//!     let client = ResourceClient::new("API_KEY", policy)?;
//!     let response = client
//!         .get_resource(&params([("id", "dQw4w9WgXcQ")]), &["snippet"], &Default::default())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;

pub use client::{params, ResourceClient, ENDPOINT};
pub use http::{HttpResponse, HttpTransport, Params, YouTubeHttpClient, YouTubeHttpClientBuilder};
