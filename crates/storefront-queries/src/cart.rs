//! Cart operations.

use crate::binder::Binder;
use crate::fragments::{edges, min_variant_price};
use storefront_core::query::{Document, Field, SelectionSet};

pub(crate) fn cart(binder: &mut Binder, cart_id: &str) -> Document {
    let cart_id = binder.id("cartId", cart_id);

    let variant = SelectionSet::new()
        .leaves(["id", "sku"])
        .field(Field::new("price").leaves(["amount"]))
        .leaves(["title"])
        .field(Field::new("image").leaves(["id", "src"]))
        .field(
            Field::new("product")
                .leaves(["id", "handle", "title"])
                .field(min_variant_price(["amount"]))
                .leaves(["productType"]),
        );
    let lines = edges(
        "lines",
        100,
        SelectionSet::new()
            .leaves(["id", "quantity"])
            .field(Field::new("merchandise").on("ProductVariant", variant)),
    );
    let estimated_cost = Field::new("estimatedCost")
        .field(Field::new("subtotalAmount").leaves(["amount"]))
        .field(Field::new("totalAmount").leaves(["amount"]));

    Document::query(
        SelectionSet::new().field(
            Field::new("cart")
                .arg("id", cart_id)
                .field(lines)
                .field(estimated_cost)
                .leaves(["id"]),
        ),
    )
}

pub(crate) fn checkout_url(binder: &mut Binder, cart_id: &str) -> Document {
    let cart_id = binder.id("cartId", cart_id);
    Document::query(
        SelectionSet::new().field(Field::new("cart").arg("id", cart_id).leaves(["checkoutUrl"])),
    )
}
