/// Prints the document behind every page of the shop, in both argument styles
use storefront::queries;
use storefront::{ArgumentStyle, Operation, SelectedOption};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Storefront Query Demo");
    println!("=====================\n");

    println!("1. Layout chrome:\n");
    println!("{}\n", queries::shop_title().query);
    println!("{}\n", queries::collections().query);

    println!("2. Product page for 'chocolate-cake':\n");
    println!("{}\n", queries::product_by_handle("chocolate-cake").query);

    println!("3. Variant lookup with selected options:\n");
    let options = [
        SelectedOption::new("Size", "8 inch"),
        SelectedOption::new("Flavour", "Lemon"),
    ];
    println!(
        "{}\n",
        queries::product_with_options("celebration-cake", &options).query
    );

    println!("4. The same lookup with typed variables:\n");
    let request = Operation::ProductWithOptions {
        handle: "celebration-cake".to_string(),
        options: options.to_vec(),
    }
    .build_with(ArgumentStyle::Variables);
    println!("{}\n", request.query);
    println!("Request body: {}\n", request.to_json()?);

    println!("5. Checkout:\n");
    println!("{}", queries::checkout_url("gid://shopify/Cart/123").query);

    Ok(())
}
