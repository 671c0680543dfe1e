/// Fetches the shop title and a product page from a live store.
///
/// Set `STOREFRONT_SHOP_DOMAIN` (and usually `STOREFRONT_ACCESS_TOKEN`)
/// before running; `RUST_LOG=debug` shows each request.
use storefront::logging::LogConfig;
use storefront::nav::{Layout, NavAction, NavLink, NavState};
use storefront::Storefront;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::debug().init()?;

    let shop = Storefront::from_env()?;
    let handle = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chocolate-cake".to_string());

    println!("=== {} ===\n", shop.shop_title().await?);

    let mut nav = NavState::for_layout(Layout::for_width(390));
    nav = nav.reduce(NavAction::MenuOn);
    for link in NavLink::ALL {
        println!("  {:<16} {}", link.label(), link.href());
    }
    nav = nav.reduce(NavAction::LinkActivated(NavLink::Shop));
    println!("\nmenu open after navigating: {}\n", nav.menu_open);

    match shop.product(&handle).await? {
        Some(product) => {
            println!(
                "{} from {}",
                product.title, product.price_range.min_variant_price.amount
            );
            for variant in product.variants.iter() {
                println!("  - {}", variant.title);
            }
            for item in shop.recommended_products(&product.id).await? {
                println!("  you may also like: {}", item.title);
            }
        }
        None => println!("no product with handle '{}'", handle),
    }

    Ok(())
}
