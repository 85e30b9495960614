//! HTTP client for the Places business directory API.
//!
//! Wraps `reqwest` with typed responses for the text-search and details
//! endpoints, API-status envelope checking, and API key management. The
//! directory is the source of candidate businesses and their public
//! profiles (rating, review count, review text, website URL).

pub mod client;
pub mod error;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{PlaceDetails, PlaceSummary, Review, SearchPage};
