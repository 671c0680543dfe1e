//! The fixed set of storefront operations.

use crate::binder::{ArgumentStyle, Binder};
use crate::options::SelectedOption;
use crate::{cart, collection, product, shop};
use storefront_core::GraphQlRequest;

/// Every query the storefront sends, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ShopTitle,
    Collections,
    PortfolioImages,
    ProductVariants { handle: String },
    ProductByHandle { handle: String },
    ProductWithOptions {
        handle: String,
        options: Vec<SelectedOption>,
    },
    RecommendedProducts { product_id: String },
    ProductAndCollectionHandles,
    SlugsByCollection { handle: String },
    ProductsByCollection { handle: String },
    Cart { cart_id: String },
    CheckoutUrl { cart_id: String },
}

impl Operation {
    /// Operation name sent with the document
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ShopTitle => "ShopTitle",
            Operation::Collections => "Collections",
            Operation::PortfolioImages => "PortfolioImages",
            Operation::ProductVariants { .. } => "ProductVariants",
            Operation::ProductByHandle { .. } => "ProductByHandle",
            Operation::ProductWithOptions { .. } => "ProductWithOptions",
            Operation::RecommendedProducts { .. } => "RecommendedProducts",
            Operation::ProductAndCollectionHandles => "ProductAndCollectionHandles",
            Operation::SlugsByCollection { .. } => "SlugsByCollection",
            Operation::ProductsByCollection { .. } => "ProductsByCollection",
            Operation::Cart { .. } => "Cart",
            Operation::CheckoutUrl { .. } => "CheckoutUrl",
        }
    }

    /// Build the request with parameters inlined as escaped literals
    pub fn build(&self) -> GraphQlRequest {
        self.build_with(ArgumentStyle::Inline)
    }

    /// Build the request with the given parameter style
    pub fn build_with(&self, style: ArgumentStyle) -> GraphQlRequest {
        let mut binder = Binder::new(style);
        let b = &mut binder;
        let document = match self {
            Operation::ShopTitle => shop::shop_title(b),
            Operation::Collections => shop::collections(b),
            Operation::PortfolioImages => shop::portfolio_images(b),
            Operation::ProductVariants { handle } => product::product_variants(b, handle),
            Operation::ProductByHandle { handle } => product::product_by_handle(b, handle),
            Operation::ProductWithOptions { handle, options } => {
                product::product_with_options(b, handle, options)
            }
            Operation::RecommendedProducts { product_id } => {
                product::recommended_products(b, product_id)
            }
            Operation::ProductAndCollectionHandles => shop::product_and_collection_handles(b),
            Operation::SlugsByCollection { handle } => collection::slugs_by_collection(b, handle),
            Operation::ProductsByCollection { handle } => {
                collection::products_by_collection(b, handle)
            }
            Operation::Cart { cart_id } => cart::cart(b, cart_id),
            Operation::CheckoutUrl { cart_id } => cart::checkout_url(b, cart_id),
        };
        binder.finish(document.named(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_documents() {
        let op = Operation::Cart {
            cart_id: "gid://shopify/Cart/9".to_string(),
        };
        let request = op.build();
        assert!(request.query.starts_with("query Cart {"));
        assert_eq!(request.operation_name.as_deref(), Some("Cart"));
    }

    #[test]
    fn test_parameterless_operations_declare_no_variables() {
        for op in [
            Operation::ShopTitle,
            Operation::Collections,
            Operation::PortfolioImages,
            Operation::ProductAndCollectionHandles,
        ] {
            let request = op.build_with(ArgumentStyle::Variables);
            assert!(request.variables.is_none(), "{}", op.name());
            assert!(!request.query.contains('$'), "{}", op.name());
        }
    }
}
