//! Shop-wide operations: shop title, collections, portfolio images and the
//! collection/product handle listing.

use crate::binder::Binder;
use crate::fragments::nodes;
use storefront_core::query::{Document, Field, SelectionSet, Value};

pub(crate) fn shop_title(_: &mut Binder) -> Document {
    Document::query(SelectionSet::new().field(Field::new("shop").leaves(["name"])))
}

pub(crate) fn collections(_: &mut Binder) -> Document {
    Document::query(SelectionSet::new().field(nodes(
        "collections",
        100,
        SelectionSet::new().leaves(["title", "description", "handle"]),
    )))
}

pub(crate) fn portfolio_images(_: &mut Binder) -> Document {
    let metaobjects = Field::new("metaobjects")
        .arg("type", Value::string("portfolio_images"))
        .arg("first", Value::Int(250))
        .field(
            Field::new("nodes")
                .leaves(["id"])
                .field(Field::new("fields").leaves(["value", "key"])),
        );
    Document::query(SelectionSet::new().field(metaobjects))
}

pub(crate) fn product_and_collection_handles(_: &mut Binder) -> Document {
    Document::query(SelectionSet::new().field(nodes(
        "collections",
        100,
        SelectionSet::new()
            .leaves(["handle"])
            .field(nodes("products", 100, SelectionSet::new().leaves(["handle"]))),
    )))
}
