use storefront_core::query::{Lexer, Token};
use storefront_queries::{ArgumentStyle, GraphQlRequest, Operation, SelectedOption};

const HANDLES: &[&str] = &[
    "chocolate-cake",
    "lemon-drizzle-loaf",
    "victoria_sponge",
    "gid://shopify/Product/8812345",
    "bridal-henna-2024",
];

fn tokens(request: &GraphQlRequest) -> Vec<Token> {
    Lexer::new(&request.query).tokenize().unwrap()
}

fn string_literals(request: &GraphQlRequest) -> Vec<String> {
    tokens(request)
        .into_iter()
        .filter_map(|t| match t {
            Token::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// `(name, value)` pairs inside the `selectedOptions: [...]` argument
fn selected_option_pairs(request: &GraphQlRequest) -> Vec<(String, String)> {
    let tokens = tokens(request);
    let start = tokens
        .windows(3)
        .position(|w| {
            w[0] == Token::Name("selectedOptions".to_string())
                && w[1] == Token::Colon
                && w[2] == Token::LeftBracket
        })
        .expect("selectedOptions argument");

    let mut strings = Vec::new();
    for token in &tokens[start + 3..] {
        match token {
            Token::RightBracket => break,
            Token::String(s) => strings.push(s.clone()),
            _ => {}
        }
    }
    strings
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

fn handle_operations(handle: &str) -> Vec<GraphQlRequest> {
    vec![
        storefront_queries::product_by_handle(handle),
        storefront_queries::product_variants(handle),
        storefront_queries::product_with_options(handle, &[SelectedOption::new("Size", "Large")]),
        storefront_queries::recommended_products(handle),
        storefront_queries::slugs_by_collection(handle),
        storefront_queries::products_by_collection(handle),
        storefront_queries::cart(handle),
        storefront_queries::checkout_url(handle),
    ]
}

#[test]
fn test_product_by_handle_example() {
    let request = storefront_queries::product_by_handle("chocolate-cake");
    assert!(request
        .query
        .contains(r#"productByHandle(handle: "chocolate-cake")"#));
}

#[test]
fn test_cart_example() {
    let request = storefront_queries::cart("gid://shopify/Cart/123");
    assert!(request.query.contains(r#"cart(id: "gid://shopify/Cart/123")"#));
}

#[test]
fn test_handle_appears_exactly_once() {
    for handle in HANDLES {
        for request in handle_operations(handle) {
            assert_eq!(
                request.query.matches(handle).count(),
                1,
                "{:?} in {}",
                handle,
                request.query
            );
        }
    }
}

#[test]
fn test_selected_options_keep_count_and_order() {
    let pool = [
        ("Size", "6 inch"),
        ("Flavour", "Lemon"),
        ("Tier", "2"),
        ("Message", "Happy Birthday"),
        ("Candles", "Yes"),
    ];
    for n in 0..=pool.len() {
        let options: Vec<SelectedOption> = pool[..n].iter().map(|&p| p.into()).collect();
        let request = storefront_queries::product_with_options("celebration-cake", &options);

        let pairs = selected_option_pairs(&request);
        assert_eq!(pairs.len(), n);
        for (pair, option) in pairs.iter().zip(&options) {
            assert_eq!(pair.0, option.name);
            assert_eq!(pair.1, option.value);
        }
    }
}

#[test]
fn test_selected_options_literal_shape() {
    let request = storefront_queries::product_with_options(
        "celebration-cake",
        &[
            SelectedOption::new("Size", "8 inch"),
            SelectedOption::new("Flavour", "Vanilla"),
        ],
    );
    assert!(request.query.contains(
        r#"selectedOrFirstAvailableVariant(selectedOptions: [{name: "Size", value: "8 inch"}, {name: "Flavour", value: "Vanilla"}])"#
    ));
}

#[test]
fn test_empty_options_render_empty_list() {
    let request = storefront_queries::product_with_options("celebration-cake", &[]);
    assert!(request.query.contains("selectedOptions: []"));
}

#[test]
fn test_parameterless_operations_are_fixed() {
    let builders: [fn() -> GraphQlRequest; 4] = [
        storefront_queries::shop_title,
        storefront_queries::collections,
        storefront_queries::portfolio_images,
        storefront_queries::product_and_collection_handles,
    ];
    for build in builders {
        assert_eq!(build(), build());
    }
}

#[test]
fn test_shop_title_document() {
    let request = storefront_queries::shop_title();
    assert_eq!(request.query, "query ShopTitle {\n  shop {\n    name\n  }\n}");
    assert_eq!(request.operation_name.as_deref(), Some("ShopTitle"));
    assert!(request.variables.is_none());
}

#[test]
fn test_checkout_url_document() {
    let request = storefront_queries::checkout_url("gid://shopify/Cart/abc?key=1");
    assert_eq!(
        request.query,
        "query CheckoutUrl {\n  cart(id: \"gid://shopify/Cart/abc?key=1\") {\n    checkoutUrl\n  }\n}"
    );
}

#[test]
fn test_quotes_cannot_escape_literal() {
    let hostile = r#"cake") { id } evil: shop(x: "\"#;
    let benign = storefront_queries::product_by_handle("cake");
    let request = storefront_queries::product_by_handle(hostile);

    assert_eq!(string_literals(&request), vec![hostile.to_string()]);
    let braces = |r: &GraphQlRequest| {
        tokens(r)
            .iter()
            .filter(|t| **t == Token::LeftBrace)
            .count()
    };
    assert_eq!(braces(&request), braces(&benign));
}

#[test]
fn test_hostile_option_values_stay_literal() {
    let options = [SelectedOption::new("Size\"", "}\n{ x")];
    let request = storefront_queries::product_with_options("cake", &options);
    assert_eq!(
        selected_option_pairs(&request),
        vec![("Size\"".to_string(), "}\n{ x".to_string())]
    );
}

#[test]
fn test_every_document_tokenizes() {
    let mut requests = vec![
        storefront_queries::shop_title(),
        storefront_queries::collections(),
        storefront_queries::portfolio_images(),
        storefront_queries::product_and_collection_handles(),
    ];
    requests.extend(handle_operations("chocolate-cake"));
    for request in requests {
        let tokens = tokens(&request);
        assert_eq!(tokens.first(), Some(&Token::Name("query".to_string())));
        assert_eq!(tokens.last(), Some(&Token::Eof));
    }
}

#[test]
fn test_variables_style_moves_values_out_of_text() {
    let op = Operation::ProductWithOptions {
        handle: "chocolate-cake".to_string(),
        options: vec![SelectedOption::new("Size", "Large")],
    };
    let request = op.build_with(ArgumentStyle::Variables);

    assert!(request.query.starts_with(
        "query ProductWithOptions($handle: String!, $selectedOptions: [SelectedOptionInput!]!) {"
    ));
    assert!(request.query.contains("productByHandle(handle: $handle)"));
    assert!(request
        .query
        .contains("selectedOrFirstAvailableVariant(selectedOptions: $selectedOptions)"));
    assert!(!request.query.contains("chocolate-cake"));

    let vars = request.variables.unwrap();
    assert_eq!(vars["handle"], "chocolate-cake");
    assert_eq!(vars["selectedOptions"][0]["name"], "Size");
    assert_eq!(vars["selectedOptions"][0]["value"], "Large");
}

#[test]
fn test_variables_style_uses_id_type_for_ids() {
    let request = Operation::RecommendedProducts {
        product_id: "gid://shopify/Product/1".to_string(),
    }
    .build_with(ArgumentStyle::Variables);
    assert!(request
        .query
        .starts_with("query RecommendedProducts($productId: ID!) {"));

    let request = Operation::Cart {
        cart_id: "gid://shopify/Cart/1".to_string(),
    }
    .build_with(ArgumentStyle::Variables);
    assert!(request.query.starts_with("query Cart($cartId: ID!) {"));
}

#[test]
fn test_selection_shapes() {
    let variants = storefront_queries::product_variants("chocolate-cake").query;
    assert!(variants.contains(
        r#"DeliveryCollection: metafield(key: "delivery_collection", namespace: "custom")"#
    ));
    assert!(variants.contains(
        r#"IngredientsAllergens: metafield(key: "ingredients_allergens", namespace: "custom")"#
    ));
    assert!(variants.contains("variants(first: 250)"));

    let product = storefront_queries::product_by_handle("chocolate-cake").query;
    assert!(product.contains("variants(first: 20)"));
    assert!(product.contains("images(first: 10)"));

    let portfolio = storefront_queries::portfolio_images().query;
    assert!(portfolio.contains(r#"metaobjects(type: "portfolio_images", first: 250)"#));

    let cart = storefront_queries::cart("gid://shopify/Cart/1").query;
    assert!(cart.contains("lines(first: 100)"));
    assert!(cart.contains("... on ProductVariant {"));
    assert!(cart.contains("subtotalAmount"));

    let listing = storefront_queries::products_by_collection("cakes").query;
    assert!(listing.contains("currencyCode"));
    assert!(listing.contains("images(first: 1)"));
}
