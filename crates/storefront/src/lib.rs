//! # Storefront
//!
//! Typed access to the Storefront API behind the Grantham Cakes shop:
//! query builders for every page of the site, a client that sends them, and
//! the navigation menu state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::{Storefront, StorefrontConfig};
//!
//! # async fn run() -> Result<(), storefront::Error> {
//! let config = StorefrontConfig::new("grantham-cakes.myshopify.com")
//!     .with_access_token("public-storefront-token");
//! let shop = Storefront::connect(&config)?;
//!
//! println!("{}", shop.shop_title().await?);
//! if let Some(product) = shop.product("chocolate-cake").await? {
//!     println!("{} from {}", product.title, product.price_range.min_variant_price.amount);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building requests only
//!
//! The builders work without a client:
//!
//! ```rust
//! let request = storefront::queries::cart("gid://shopify/Cart/123");
//! assert!(request.query.contains(r#"cart(id: "gid://shopify/Cart/123")"#));
//! ```

#![warn(clippy::all)]

pub mod logging;
pub mod nav;
pub mod security;

pub use storefront_client::{
    HttpTransport, StorefrontClient, StorefrontConfig, Transport, ACCESS_TOKEN_HEADER,
};
pub use storefront_core::{Error, GraphQlRequest, GraphQlResponse, ResponseError, Result};
pub use storefront_queries::model;
pub use storefront_queries::{ArgumentStyle, Operation, SelectedOption};

/// The query builders, one function per operation
pub mod queries {
    pub use storefront_queries::{
        cart, checkout_url, collections, portfolio_images, product_and_collection_handles,
        product_by_handle, product_variants, product_with_options, products_by_collection,
        recommended_products, shop_title, slugs_by_collection,
    };
}

use model::*;
use serde::de::DeserializeOwned;
use tracing::debug;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle to one shop.
///
/// Builds each operation, validates the document and returns the typed
/// payload. Clones share the underlying client.
pub struct Storefront<T: Transport = HttpTransport> {
    client: StorefrontClient<T>,
    style: ArgumentStyle,
}

impl<T: Transport> Clone for Storefront<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            style: self.style,
        }
    }
}

impl Storefront<HttpTransport> {
    /// Connect over HTTPS using `config`
    pub fn connect(config: &StorefrontConfig) -> Result<Self> {
        Ok(Self {
            client: StorefrontClient::connect(config)?,
            style: config.argument_style,
        })
    }

    /// Connect using `STOREFRONT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::connect(&StorefrontConfig::from_env()?)
    }
}

impl<T: Transport> Storefront<T> {
    pub fn with_client(client: StorefrontClient<T>, style: ArgumentStyle) -> Self {
        Self { client, style }
    }

    pub fn client(&self) -> &StorefrontClient<T> {
        &self.client
    }

    /// The request that would be sent for `operation`
    pub fn request(&self, operation: &Operation) -> Result<GraphQlRequest> {
        let request = operation.build_with(self.style);
        security::validate_query(&request.query)?;
        Ok(request)
    }

    async fn run<D: DeserializeOwned>(&self, operation: Operation) -> Result<D> {
        let request = self.request(&operation)?;
        debug!(operation = operation.name(), "running storefront operation");
        self.client.query(&request).await
    }

    /// The shop's display name
    pub async fn shop_title(&self) -> Result<String> {
        let data: ShopTitleData = self.run(Operation::ShopTitle).await?;
        Ok(data.shop.name)
    }

    pub async fn collections(&self) -> Result<Vec<CollectionSummary>> {
        let data: CollectionsData = self.run(Operation::Collections).await?;
        Ok(data.collections.into_items())
    }

    pub async fn portfolio_images(&self) -> Result<Vec<Metaobject>> {
        let data: PortfolioImagesData = self.run(Operation::PortfolioImages).await?;
        Ok(data.metaobjects.into_items())
    }

    /// Product with all variants and metafields; `None` for unknown handles
    pub async fn product_variants(&self, handle: &str) -> Result<Option<Product>> {
        let data: ProductData = self
            .run(Operation::ProductVariants {
                handle: handle.to_string(),
            })
            .await?;
        Ok(data.product)
    }

    /// Product page data; `None` for unknown handles
    pub async fn product(&self, handle: &str) -> Result<Option<Product>> {
        let data: ProductData = self
            .run(Operation::ProductByHandle {
                handle: handle.to_string(),
            })
            .await?;
        Ok(data.product)
    }

    /// The variant matching `options`, or the first available one
    pub async fn variant_for_options(
        &self,
        handle: &str,
        options: &[SelectedOption],
    ) -> Result<Option<VariantRef>> {
        let data: ProductWithOptionsData = self
            .run(Operation::ProductWithOptions {
                handle: handle.to_string(),
                options: options.to_vec(),
            })
            .await?;
        Ok(data
            .product
            .and_then(|p| p.selected_or_first_available_variant))
    }

    pub async fn recommended_products(&self, product_id: &str) -> Result<Vec<ProductSummary>> {
        let data: RecommendationsData = self
            .run(Operation::RecommendedProducts {
                product_id: product_id.to_string(),
            })
            .await?;
        Ok(data.product_recommendations.unwrap_or_default())
    }

    /// `(collection, product)` handle pairs across the catalogue
    pub async fn product_and_collection_handles(&self) -> Result<Vec<(String, String)>> {
        let data: HandlesData = self.run(Operation::ProductAndCollectionHandles).await?;
        Ok(data.pairs())
    }

    pub async fn slugs_by_collection(&self, handle: &str) -> Result<Vec<ProductSlug>> {
        let data: SlugsData = self
            .run(Operation::SlugsByCollection {
                handle: handle.to_string(),
            })
            .await?;
        Ok(data
            .collection_by_handle
            .map(|c| c.products.into_items())
            .unwrap_or_default())
    }

    pub async fn products_by_collection(&self, handle: &str) -> Result<Option<CollectionProducts>> {
        let data: ProductsByCollectionData = self
            .run(Operation::ProductsByCollection {
                handle: handle.to_string(),
            })
            .await?;
        Ok(data.collection_by_handle)
    }

    /// `None` when the cart has expired or never existed
    pub async fn cart(&self, cart_id: &str) -> Result<Option<Cart>> {
        let data: CartData = self
            .run(Operation::Cart {
                cart_id: cart_id.to_string(),
            })
            .await?;
        Ok(data.cart)
    }

    pub async fn checkout_url(&self, cart_id: &str) -> Result<Option<String>> {
        let data: CheckoutUrlData = self
            .run(Operation::CheckoutUrl {
                cart_id: cart_id.to_string(),
            })
            .await?;
        Ok(data.cart.map(|c| c.checkout_url))
    }
}
