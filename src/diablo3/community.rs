use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::RequestSpec;
use std::sync::Arc;
use serde_json::Value;

/// Diablo III community methods.
///
/// Account profile methods take a BattleTag with the `#` replaced by `-`, e.g. `"Name-1234"`.
#[derive(Debug, Clone)]
pub struct Diablo3CommunityApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl Diablo3CommunityApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    async fn get(
        &self,
        region: Region,
        locale: &str,
        resource: String,
    ) -> Result<Value, Error> {
        self.dispatcher.send(RequestSpec::new(region, resource, locale)).await
    }
    
    // Act
    
    pub async fn get_act_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, "/d3/data/act".into()).await
    }
    
    pub async fn get_act(
        &self,
        region: Region,
        locale: &str,
        act_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/d3/data/act/{act_id}")).await
    }
    
    // Artisan and recipe
    
    pub async fn get_artisan(
        &self,
        region: Region,
        locale: &str,
        artisan_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/data/artisan/{}", encode_path_segment(artisan_slug));
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_recipe(
        &self,
        region: Region,
        locale: &str,
        artisan_slug: &str,
        recipe_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/d3/data/artisan/{}/recipe/{}",
            encode_path_segment(artisan_slug),
            encode_path_segment(recipe_slug),
        );
        
        self.get(region, locale, resource).await
    }
    
    // Follower
    
    pub async fn get_follower(
        &self,
        region: Region,
        locale: &str,
        follower_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/data/follower/{}", encode_path_segment(follower_slug));
        
        self.get(region, locale, resource).await
    }
    
    // Character class and skill
    
    pub async fn get_character_class(
        &self,
        region: Region,
        locale: &str,
        class_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/data/hero/{}", encode_path_segment(class_slug));
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_api_skill(
        &self,
        region: Region,
        locale: &str,
        class_slug: &str,
        skill_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/d3/data/hero/{}/skill/{}",
            encode_path_segment(class_slug),
            encode_path_segment(skill_slug),
        );
        
        self.get(region, locale, resource).await
    }
    
    // Item type
    
    pub async fn get_item_type_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, "/d3/data/item-type".into()).await
    }
    
    pub async fn get_item_type(
        &self,
        region: Region,
        locale: &str,
        item_type_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/data/item-type/{}", encode_path_segment(item_type_slug));
        
        self.get(region, locale, resource).await
    }
    
    // Item
    
    /// Gets an item by its slug and ID, e.g. `"corrupted-ashbringer-Unique_Sword_2H_104_x1"`.
    pub async fn get_item(
        &self,
        region: Region,
        locale: &str,
        item_slug_and_id: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/data/item/{}", encode_path_segment(item_slug_and_id));
        
        self.get(region, locale, resource).await
    }
    
    // Profile
    
    pub async fn get_api_account(
        &self,
        region: Region,
        locale: &str,
        account_id: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/profile/{}/", encode_path_segment(account_id));
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_api_hero(
        &self,
        region: Region,
        locale: &str,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/d3/profile/{}/hero/{hero_id}", encode_path_segment(account_id));
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_api_detailed_hero_items(
        &self,
        region: Region,
        locale: &str,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/d3/profile/{}/hero/{hero_id}/items",
            encode_path_segment(account_id),
        );
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_api_detailed_follower_items(
        &self,
        region: Region,
        locale: &str,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/d3/profile/{}/hero/{hero_id}/follower-items",
            encode_path_segment(account_id),
        );
        
        self.get(region, locale, resource).await
    }
}
