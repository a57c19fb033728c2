use blizzard_api::{BlizzardApi, QueryParams, Region};
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    simple_logging::log_to_stderr(LevelFilter::Debug);
    
    let api = BlizzardApi::from_env()?;
    let card = api.hearthstone.game_data
        .get_card(Region::Us, "en_US", "52119-arch-villain-rafaam", None)
        .await?;
    
    println!("{}", card["name"]);
    
    let query = QueryParams::new()
        .with("class", "mage")
        .with("manaCost", 10);
    let cards = api.hearthstone.game_data
        .search_cards(Region::Eu, "en_GB", query)
        .await?;
    
    println!("{} ten mana mage cards", cards["cardCount"]);
    
    Ok(())
}
