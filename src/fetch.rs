use crate::error::Result;

pub const INVENTORY_URL: &str = "https://nattobot.com/inventory/";

/// Downloads the inventory page of `user_id`; `url` ends with a slash.
pub async fn inventory_page(url: &str, user_id: &str) -> Result<String> {
    let url = format!("{}{}", url, user_id.trim());

    log::info!("fetching inventory: {}", url);
    let page = reqwest::Client::new()
        .get(&url)
        .send()
        .await?
        .text()
        .await?;

    Ok(page)
}
