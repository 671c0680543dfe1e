//! # Storefront Queries
//!
//! The catalog of Storefront API queries used by the shop, and typed models
//! of their responses.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of `storefront`.**
//! Depend on the main crate instead; this crate's API may change without
//! notice between minor versions.
//!
//! Each builder returns a [`GraphQlRequest`] whose `query` holds the
//! rendered document. Parameters are embedded as escaped string literals,
//! so a plain slug such as `chocolate-cake` appears verbatim:
//!
//! ```rust
//! let request = storefront_queries::product_by_handle("chocolate-cake");
//! assert!(request.query.contains(r#"productByHandle(handle: "chocolate-cake")"#));
//! ```
//!
//! [`Operation::build_with`] with [`ArgumentStyle::Variables`] produces the
//! same selection with typed `$variables` instead.

#![warn(clippy::all)]

mod binder;
mod cart;
mod catalog;
mod collection;
mod fragments;
pub mod model;
mod options;
mod product;
mod shop;

pub use binder::ArgumentStyle;
pub use catalog::Operation;
pub use options::SelectedOption;
pub use storefront_core::GraphQlRequest;

/// `shop { name }`
pub fn shop_title() -> GraphQlRequest {
    Operation::ShopTitle.build()
}

/// First 100 collections with title, description and handle
pub fn collections() -> GraphQlRequest {
    Operation::Collections.build()
}

/// Entries of the `portfolio_images` metaobject type
pub fn portfolio_images() -> GraphQlRequest {
    Operation::PortfolioImages.build()
}

/// Full product page data, every variant included
pub fn product_variants(handle: &str) -> GraphQlRequest {
    Operation::ProductVariants {
        handle: handle.to_string(),
    }
    .build()
}

pub fn product_by_handle(handle: &str) -> GraphQlRequest {
    Operation::ProductByHandle {
        handle: handle.to_string(),
    }
    .build()
}

/// Variant matching `options`, falling back to the first available one
pub fn product_with_options(handle: &str, options: &[SelectedOption]) -> GraphQlRequest {
    Operation::ProductWithOptions {
        handle: handle.to_string(),
        options: options.to_vec(),
    }
    .build()
}

pub fn recommended_products(product_id: &str) -> GraphQlRequest {
    Operation::RecommendedProducts {
        product_id: product_id.to_string(),
    }
    .build()
}

/// Every collection handle with the handles of its products
pub fn product_and_collection_handles() -> GraphQlRequest {
    Operation::ProductAndCollectionHandles.build()
}

pub fn slugs_by_collection(handle: &str) -> GraphQlRequest {
    Operation::SlugsByCollection {
        handle: handle.to_string(),
    }
    .build()
}

pub fn products_by_collection(handle: &str) -> GraphQlRequest {
    Operation::ProductsByCollection {
        handle: handle.to_string(),
    }
    .build()
}

pub fn cart(cart_id: &str) -> GraphQlRequest {
    Operation::Cart {
        cart_id: cart_id.to_string(),
    }
    .build()
}

pub fn checkout_url(cart_id: &str) -> GraphQlRequest {
    Operation::CheckoutUrl {
        cart_id: cart_id.to_string(),
    }
    .build()
}
