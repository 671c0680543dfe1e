//! # Storefront Client
//!
//! Sends storefront requests to the Storefront API over HTTPS.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of `storefront`.**
//! Depend on the main crate instead.

#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod transport;

pub use client::StorefrontClient;
pub use config::{StorefrontConfig, DEFAULT_API_VERSION};
pub use transport::{HttpTransport, Transport, ACCESS_TOKEN_HEADER};
