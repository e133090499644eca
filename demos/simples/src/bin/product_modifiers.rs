use bigcommerce_client::prelude::*;
use serde_json::{Value, json};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Credentials come from BC_STORE_HASH, BC_OAUTH_TOKEN and BC_CLIENT_ID
    let connector = Connector::new(Config::new())?;
    info!("Connected to {}", connector.base_url());

    let product_id = env::args().nth(1).unwrap_or_else(|| "111".to_string());

    let modifiers: Value = connector
        .fetch(&format!("products/{product_id}/modifiers"))
        .await?;
    let complex_rules: Value = connector
        .fetch(&format!("products/{product_id}/complex-rules"))
        .await?;

    let product_data = json!({
        "product": modifiers,
        "productRules": complex_rules,
    });

    info!("Product data: {:#}", product_data);

    Ok(())
}
