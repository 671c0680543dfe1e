//! Typed views of the `data` payloads returned for each operation.
//!
//! Field names mirror the selections in this crate; only what the documents
//! ask for is modelled.

use crate::options::SelectedOption;
use serde::Deserialize;

/// A paginated list, selected either as `nodes` or as `edges { node }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Items in backend order, whichever form was selected
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().chain(self.edges.iter().map(|e| &e.node))
    }

    pub fn into_items(self) -> Vec<T> {
        let mut items = self.nodes;
        items.extend(self.edges.into_iter().map(|e| e.node));
        items
    }

    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Decimal amounts arrive as strings, e.g. `"12.5"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: Money,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub src: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metafield {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// `shop { name }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopTitleData {
    pub shop: Shop,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shop {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionsData {
    pub collections: Connection<CollectionSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionSummary {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioImagesData {
    pub metaobjects: Connection<Metaobject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metaobject {
    pub id: String,
    pub fields: Vec<MetaobjectField>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaobjectField {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Metaobject {
    /// Value of the field named `key`
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.value.as_deref())
    }
}

/// Payload of both product-by-handle and product-variants
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductData {
    #[serde(rename = "productByHandle")]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub images: Connection<Image>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub variants: Connection<ProductVariant>,
    #[serde(default)]
    pub collections: Connection<CollectionRef>,
    #[serde(rename = "DeliveryCollection", default)]
    pub delivery_collection: Option<Metafield>,
    #[serde(rename = "IngredientsAllergens", default)]
    pub ingredients_allergens: Option<Metafield>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionRef {
    pub handle: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductWithOptionsData {
    #[serde(rename = "productByHandle")]
    pub product: Option<ProductSelection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    pub id: String,
    pub selected_or_first_available_variant: Option<VariantRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsData {
    #[serde(default)]
    pub product_recommendations: Option<Vec<ProductSummary>>,
}

/// Card-sized product used by recommendations and collection listings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub product_type: String,
    pub price_range: PriceRange,
    #[serde(default)]
    pub images: Connection<Image>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandlesData {
    pub collections: Connection<CollectionHandles>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionHandles {
    pub handle: String,
    #[serde(default)]
    pub products: Connection<Handle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Handle {
    pub handle: String,
}

impl HandlesData {
    /// `(collection, product)` pairs, e.g. for static path generation
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.collections
            .iter()
            .flat_map(|c| {
                c.products
                    .iter()
                    .map(move |p| (c.handle.clone(), p.handle.clone()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugsData {
    pub collection_by_handle: Option<CollectionSlugs>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionSlugs {
    pub products: Connection<ProductSlug>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSlug {
    pub title: String,
    #[serde(default)]
    pub product_type: String,
    pub handle: String,
    #[serde(default)]
    pub collections: Connection<Handle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsByCollectionData {
    pub collection_by_handle: Option<CollectionProducts>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionProducts {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: Connection<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartData {
    pub cart: Option<Cart>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub lines: Connection<CartLine>,
    pub estimated_cost: CartCost,
}

impl Cart {
    /// Sum of line quantities
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub quantity: u32,
    pub merchandise: Merchandise,
}

/// The `... on ProductVariant` branch of a cart line's merchandise
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchandise {
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: Money,
    pub title: String,
    #[serde(default)]
    pub image: Option<Image>,
    pub product: MerchandiseProduct,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiseProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub price_range: PriceRange,
    #[serde(default)]
    pub product_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    pub subtotal_amount: Money,
    pub total_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutUrlData {
    pub cart: Option<CheckoutCart>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCart {
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_accepts_both_forms() {
        let nodes: Connection<Handle> =
            serde_json::from_str(r#"{"nodes":[{"handle":"a"},{"handle":"b"}]}"#).unwrap();
        let edges: Connection<Handle> =
            serde_json::from_str(r#"{"edges":[{"node":{"handle":"a"}},{"node":{"handle":"b"}}]}"#)
                .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes.iter().map(|h| h.handle.as_str()).collect::<Vec<_>>(),
            edges.iter().map(|h| h.handle.as_str()).collect::<Vec<_>>()
        );
        assert_eq!(edges.into_items()[1].handle, "b");
    }

    #[test]
    fn test_product_with_metafield_aliases() {
        let json = r#"{
            "productByHandle": {
                "id": "gid://shopify/Product/1",
                "title": "Chocolate Cake",
                "descriptionHtml": "<p>Rich</p>",
                "description": "Rich",
                "productType": "Cake",
                "images": {"edges": [{"node": {"id": "i1", "src": "https://cdn/x.jpg", "altText": null}}]},
                "priceRange": {"minVariantPrice": {"amount": "24.0"}},
                "DeliveryCollection": {"type": "single_line_text_field", "value": "Collection only"},
                "IngredientsAllergens": null,
                "variants": {"nodes": [{
                    "id": "gid://shopify/ProductVariant/7",
                    "title": "8 inch",
                    "sku": "CC-8",
                    "price": {"amount": "24.0"},
                    "selectedOptions": [{"name": "Size", "value": "8 inch"}]
                }]},
                "collections": {"nodes": [{"handle": "cakes", "title": "Cakes"}]}
            }
        }"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        let product = data.product.unwrap();
        assert_eq!(product.price_range.min_variant_price.amount, "24.0");
        assert_eq!(product.delivery_collection.unwrap().value, "Collection only");
        assert!(product.ingredients_allergens.is_none());
        let variant = product.variants.iter().next().unwrap();
        assert_eq!(variant.selected_options[0], SelectedOption::new("Size", "8 inch"));
        assert_eq!(product.images.iter().next().unwrap().alt_text, None);
    }

    #[test]
    fn test_cart_item_count() {
        let json = r#"{"cart": {
            "id": "gid://shopify/Cart/123",
            "lines": {"edges": [
                {"node": {"id": "l1", "quantity": 2, "merchandise": {
                    "id": "v1", "sku": null, "price": {"amount": "3.5"}, "title": "Single",
                    "image": {"id": "img", "src": "https://cdn/bun.jpg"},
                    "product": {"id": "p1", "handle": "iced-bun", "title": "Iced Bun",
                        "priceRange": {"minVariantPrice": {"amount": "3.5"}}, "productType": "Bun"}
                }}},
                {"node": {"id": "l2", "quantity": 1, "merchandise": {
                    "id": "v2", "price": {"amount": "24.0"}, "title": "8 inch",
                    "product": {"id": "p2", "handle": "chocolate-cake", "title": "Chocolate Cake",
                        "priceRange": {"minVariantPrice": {"amount": "24.0"}}, "productType": "Cake"}
                }}}
            ]},
            "estimatedCost": {"subtotalAmount": {"amount": "31.0"}, "totalAmount": {"amount": "31.0"}}
        }}"#;
        let data: CartData = serde_json::from_str(json).unwrap();
        let cart = data.cart.unwrap();
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.estimated_cost.total_amount.amount, "31.0");
        assert_eq!(cart.lines.iter().nth(1).unwrap().merchandise.product.handle, "chocolate-cake");
    }

    #[test]
    fn test_handle_pairs() {
        let json = r#"{"collections": {"nodes": [
            {"handle": "cakes", "products": {"nodes": [{"handle": "chocolate-cake"}, {"handle": "lemon-drizzle"}]}},
            {"handle": "buns", "products": {"nodes": [{"handle": "iced-bun"}]}}
        ]}}"#;
        let data: HandlesData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.pairs(),
            vec![
                ("cakes".to_string(), "chocolate-cake".to_string()),
                ("cakes".to_string(), "lemon-drizzle".to_string()),
                ("buns".to_string(), "iced-bun".to_string()),
            ]
        );
    }

    #[test]
    fn test_metaobject_field_lookup() {
        let json = r#"{"metaobjects": {"nodes": [{"id": "m1", "fields": [
            {"key": "image", "value": "gid://shopify/MediaImage/5"},
            {"key": "caption", "value": null}
        ]}]}}"#;
        let data: PortfolioImagesData = serde_json::from_str(json).unwrap();
        let object = data.metaobjects.iter().next().unwrap();
        assert_eq!(object.field("image"), Some("gid://shopify/MediaImage/5"));
        assert_eq!(object.field("caption"), None);
        assert_eq!(object.field("missing"), None);
    }

    #[test]
    fn test_missing_cart_is_none() {
        let data: CheckoutUrlData = serde_json::from_str(r#"{"cart": null}"#).unwrap();
        assert!(data.cart.is_none());
    }
}
