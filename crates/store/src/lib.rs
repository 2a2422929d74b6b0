//! Meerkat Store - data-access layer for the meerkat-on-air aggregator
//!
//! This library provides MongoDB persistence for the live-streaming
//! aggregation system: crawl targets (channels to monitor), live-status
//! records, and user accounts.
//!
//! # Modules
//!
//! - `client` - Connection management
//! - `config` - Credential file loading
//! - `errors` - Error types
//! - `models` - Data models
//! - `repositories` - Database access layer

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
