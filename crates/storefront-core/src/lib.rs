//! # Storefront Core
//!
//! Core types shared by the storefront crates: the GraphQL document model,
//! the request/response envelopes and the error type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
#[allow(missing_docs)]
pub mod request;

pub use error::{Error, Result};
pub use request::{ErrorLocation, GraphQlRequest, GraphQlResponse, ResponseError};
