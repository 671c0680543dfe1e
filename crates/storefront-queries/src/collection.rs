//! Collection operations.

use crate::binder::Binder;
use crate::fragments::{edges, min_variant_price, nodes};
use storefront_core::query::{Document, Field, SelectionSet};

/// Product slugs of a collection, with the collections each product is in.
pub(crate) fn slugs_by_collection(binder: &mut Binder, handle: &str) -> Document {
    let handle = binder.string("handle", handle);
    let products = edges(
        "products",
        10,
        SelectionSet::new()
            .leaves(["title", "productType", "handle"])
            .field(edges("collections", 100, SelectionSet::new().leaves(["handle"]))),
    );
    Document::query(
        SelectionSet::new().field(
            Field::new("collectionByHandle")
                .arg("handle", handle)
                .field(products),
        ),
    )
}

pub(crate) fn products_by_collection(binder: &mut Binder, handle: &str) -> Document {
    let handle = binder.string("handle", handle);
    let products = nodes(
        "products",
        10,
        SelectionSet::new()
            .leaves(["title", "id"])
            .field(nodes("images", 1, SelectionSet::new().leaves(["id", "src"])))
            .leaves(["handle", "productType"])
            .field(min_variant_price(["amount", "currencyCode"])),
    );
    Document::query(
        SelectionSet::new().field(
            Field::new("collectionByHandle")
                .arg("handle", handle)
                .leaves(["id", "handle", "title", "description"])
                .field(products),
        ),
    )
}
