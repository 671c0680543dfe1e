// Selection shapes shared by several operations.

use storefront_core::query::{Field, SelectionSet, Value};

/// `name(first: n) { nodes { ... } }`
pub(crate) fn nodes(name: &str, first: i64, selection: SelectionSet) -> Field {
    Field::new(name)
        .arg("first", Value::Int(first))
        .field(Field::new("nodes").select(selection))
}

/// `name(first: n) { edges { node { ... } } }`
pub(crate) fn edges(name: &str, first: i64, selection: SelectionSet) -> Field {
    Field::new(name)
        .arg("first", Value::Int(first))
        .field(Field::new("edges").field(Field::new("node").select(selection)))
}

/// `priceRange { minVariantPrice { ... } }`
pub(crate) fn min_variant_price<const N: usize>(money: [&str; N]) -> Field {
    Field::new("priceRange").field(Field::new("minVariantPrice").leaves(money))
}

/// `images(first: n) { edges { node { id src altText } } }`
pub(crate) fn image_edges(first: i64) -> Field {
    edges("images", first, SelectionSet::new().leaves(["id", "src", "altText"]))
}

/// `selectedOptions { name value }`
pub(crate) fn selected_options() -> Field {
    Field::new("selectedOptions").leaves(["name", "value"])
}

/// `collections(first: n) { nodes { handle title } }`
pub(crate) fn collection_refs(first: i64) -> Field {
    nodes("collections", first, SelectionSet::new().leaves(["handle", "title"]))
}

/// `alias: metafield(key: .., namespace: "custom") { type value }`
pub(crate) fn custom_metafield(alias: &str, key: &str) -> Field {
    Field::new("metafield")
        .alias(alias)
        .arg("key", Value::string(key))
        .arg("namespace", Value::string("custom"))
        .leaves(["type", "value"])
}
