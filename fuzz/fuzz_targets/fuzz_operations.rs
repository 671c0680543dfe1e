#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use storefront::security::validate_query;
use storefront::{ArgumentStyle, Operation, SelectedOption};

#[derive(Debug, Arbitrary)]
enum Input {
    ProductVariants(String),
    ProductByHandle(String),
    ProductWithOptions(String, Vec<(String, String)>),
    RecommendedProducts(String),
    SlugsByCollection(String),
    ProductsByCollection(String),
    Cart(String),
    CheckoutUrl(String),
}

impl Input {
    fn into_operation(self) -> Operation {
        match self {
            Input::ProductVariants(handle) => Operation::ProductVariants { handle },
            Input::ProductByHandle(handle) => Operation::ProductByHandle { handle },
            Input::ProductWithOptions(handle, options) => Operation::ProductWithOptions {
                handle,
                options: options.into_iter().map(SelectedOption::from).collect(),
            },
            Input::RecommendedProducts(product_id) => Operation::RecommendedProducts { product_id },
            Input::SlugsByCollection(handle) => Operation::SlugsByCollection { handle },
            Input::ProductsByCollection(handle) => Operation::ProductsByCollection { handle },
            Input::Cart(cart_id) => Operation::Cart { cart_id },
            Input::CheckoutUrl(cart_id) => Operation::CheckoutUrl { cart_id },
        }
    }
}

fuzz_target!(|input: Input| {
    let operation = input.into_operation();

    // Whatever the parameters, both styles produce a well-formed document
    for style in [ArgumentStyle::Inline, ArgumentStyle::Variables] {
        let request = operation.build_with(style);
        validate_query(&request.query).expect("builder produced an invalid document");
    }
});
