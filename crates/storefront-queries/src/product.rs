//! Product operations.

use crate::binder::Binder;
use crate::fragments::{
    collection_refs, custom_metafield, edges, image_edges, min_variant_price, nodes,
    selected_options,
};
use crate::options::SelectedOption;
use storefront_core::query::{Document, Field, SelectionSet};

fn product_header() -> SelectionSet {
    SelectionSet::new()
        .leaves(["id", "title", "descriptionHtml", "description", "productType"])
        .field(image_edges(10))
        .field(min_variant_price(["amount"]))
}

/// Full product with every variant and the delivery/allergen metafields.
pub(crate) fn product_variants(binder: &mut Binder, handle: &str) -> Document {
    let handle = binder.string("handle", handle);
    let variants = nodes(
        "variants",
        250,
        SelectionSet::new()
            .leaves(["id", "title", "sku"])
            .field(Field::new("price").leaves(["amount"]))
            .field(selected_options()),
    );
    let product = Field::new("productByHandle")
        .arg("handle", handle)
        .select(product_header())
        .field(custom_metafield("DeliveryCollection", "delivery_collection"))
        .field(custom_metafield("IngredientsAllergens", "ingredients_allergens"))
        .field(variants)
        .field(collection_refs(10));
    Document::query(SelectionSet::new().field(product))
}

pub(crate) fn product_by_handle(binder: &mut Binder, handle: &str) -> Document {
    let handle = binder.string("handle", handle);
    let variants = edges(
        "variants",
        20,
        SelectionSet::new()
            .leaves(["id", "title"])
            .field(Field::new("image").leaves(["src", "id"]))
            .leaves(["sku"])
            .field(selected_options()),
    );
    let product = Field::new("productByHandle")
        .arg("handle", handle)
        .select(product_header())
        .field(variants)
        .field(collection_refs(10));
    Document::query(SelectionSet::new().field(product))
}

/// Resolves the variant matching `options`, or the first available one.
pub(crate) fn product_with_options(
    binder: &mut Binder,
    handle: &str,
    options: &[SelectedOption],
) -> Document {
    let handle = binder.string("handle", handle);
    let options = binder.options("selectedOptions", options);
    let product = Field::new("productByHandle")
        .arg("handle", handle)
        .field(
            Field::new("selectedOrFirstAvailableVariant")
                .arg("selectedOptions", options)
                .leaves(["id", "title"]),
        )
        .leaves(["id"]);
    Document::query(SelectionSet::new().field(product))
}

pub(crate) fn recommended_products(binder: &mut Binder, product_id: &str) -> Document {
    let product_id = binder.id("productId", product_id);
    let recommendations = Field::new("productRecommendations")
        .arg("productId", product_id)
        .leaves(["id"])
        .field(min_variant_price(["amount"]))
        .leaves(["title", "handle", "productType"])
        .field(image_edges(1));
    Document::query(SelectionSet::new().field(recommendations))
}
