//! Core types and configuration for LeadScout.
//!
//! Holds the domain model (`Candidate`, `FeatureBundle`, `LeadResult`),
//! the lead scorer, and env-var configuration loading shared by the
//! other crates.

pub mod app_config;
pub mod config;
pub mod lead;
pub mod score;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use lead::{Candidate, FeatureBundle, LeadResult};
pub use score::score_features;
