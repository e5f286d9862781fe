use dotenv::dotenv;
use restaurant::config::RestaurantConfig;
use restaurant::error::AppResult;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Main entry point for the restaurant tool.
///
/// This function:
/// 1. Loads environment variables from .env file
/// 2. Loads the restaurant definition
/// 3. Prints its details and whether it is open right now
/// 4. Prices any item names passed on the command line
fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    FmtSubscriber::builder()
        .with_target(false)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    if let Err(err) = run(std::env::args().skip(1).collect()) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(order: Vec<String>) -> AppResult<()> {
    let restaurant = RestaurantConfig::load()?.into_restaurant();

    restaurant.display_details();

    if restaurant.is_open() {
        info!("{} is open ({})", restaurant.name(), restaurant.hours());
    } else {
        info!("{} is closed ({})", restaurant.name(), restaurant.hours());
    }

    if !order.is_empty() {
        let total = restaurant.order_value(&order);
        info!(items = order.len(), "Order value: {}", total);
        println!("Order value: {}", total);
    }

    Ok(())
}
