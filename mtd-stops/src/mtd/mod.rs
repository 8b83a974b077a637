//! CUMTD developer API client.
//!
//! Every endpoint this crate uses follows the same envelope: an HTTP 200
//! carrying a JSON object with a nested `status` (`code`, `msg`) and a
//! named array of results. The nested code is the authoritative
//! success signal; a 200 response can still carry an API-level failure
//! such as an invalid key.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, MtdClient, MtdConfig, PLACEHOLDER_API_KEY, PREVIEW_MINUTES};
pub use error::MtdError;
pub use types::{Departure, Stop};
