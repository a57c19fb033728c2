use super::Namespace;
use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::{QueryParams, RequestSpec};
use std::sync::Arc;
use serde_json::Value;

/// World of Warcraft game data methods.
///
/// Search methods take their criteria in `query` using Blizzard's search syntax, e.g.
/// `name.en_US=Turtle`, `orderby=id` and `_page=1`.
#[derive(Debug, Clone)]
pub struct WowGameDataApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl WowGameDataApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    async fn get<R>(
        &self,
        region: Region,
        locale: &str,
        namespace: Namespace,
        resource: R,
    ) -> Result<Value, Error>
    where
        R: Into<String>,
    {
        let spec = RequestSpec::new(region, resource, locale)
            .param("namespace", namespace.for_region(region));
        
        self.dispatcher.send(spec).await
    }
    
    async fn search(
        &self,
        region: Region,
        locale: &str,
        namespace: Namespace,
        resource: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, resource, locale)
            .param("namespace", namespace.for_region(region))
            .extend(query);
        
        self.dispatcher.send(spec).await
    }
    
    // Achievement
    
    pub async fn get_achievement_categories_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/achievement-category/index").await
    }
    
    pub async fn get_achievement_category(
        &self,
        region: Region,
        locale: &str,
        achievement_category_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/achievement-category/{achievement_category_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_achievements_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/achievement/index").await
    }
    
    pub async fn get_achievement(
        &self,
        region: Region,
        locale: &str,
        achievement_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/achievement/{achievement_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_achievement_media(
        &self,
        region: Region,
        locale: &str,
        achievement_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/achievement/{achievement_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Auction house
    
    /// Gets all active auctions for a connected realm, refreshed once an hour.
    pub async fn get_auctions(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/connected-realm/{connected_realm_id}/auctions");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    /// Gets region-wide commodity auctions.
    pub async fn get_commodities(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/auctions/commodities").await
    }
    
    // Azerite essence
    
    pub async fn get_azerite_essences_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/azerite-essence/index").await
    }
    
    pub async fn get_azerite_essence(
        &self,
        region: Region,
        locale: &str,
        azerite_essence_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/azerite-essence/{azerite_essence_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    /// Searches azerite essences, e.g. with `allowed_specializations.id` and `orderby` in `query`.
    pub async fn search_azerite_essence(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/azerite-essence", query).await
    }
    
    pub async fn get_azerite_essence_media(
        &self,
        region: Region,
        locale: &str,
        azerite_essence_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/azerite-essence/{azerite_essence_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Connected realm
    
    pub async fn get_connected_realms_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/connected-realm/index").await
    }
    
    pub async fn get_connected_realm(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/connected-realm/{connected_realm_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    /// Searches connected realms, e.g. with `status.type` and `realms.timezone` in `query`.
    pub async fn search_connected_realm(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Dynamic, "/data/wow/search/connected-realm", query).await
    }
    
    // Covenant
    
    pub async fn get_covenant_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/covenant/index").await
    }
    
    pub async fn get_covenant(
        &self,
        region: Region,
        locale: &str,
        covenant_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/covenant/{covenant_id}")).await
    }
    
    pub async fn get_covenant_media(
        &self,
        region: Region,
        locale: &str,
        covenant_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/covenant/{covenant_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_soulbind_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/covenant/soulbind/index").await
    }
    
    pub async fn get_soulbind(
        &self,
        region: Region,
        locale: &str,
        soulbind_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/covenant/soulbind/{soulbind_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_conduit_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/covenant/conduit/index").await
    }
    
    pub async fn get_conduit(
        &self,
        region: Region,
        locale: &str,
        conduit_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/covenant/conduit/{conduit_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Creature
    
    pub async fn get_creature_families_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/creature-family/index").await
    }
    
    pub async fn get_creature_family(
        &self,
        region: Region,
        locale: &str,
        creature_family_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/creature-family/{creature_family_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature_types_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/creature-type/index").await
    }
    
    pub async fn get_creature_type(
        &self,
        region: Region,
        locale: &str,
        creature_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/creature-type/{creature_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature(
        &self,
        region: Region,
        locale: &str,
        creature_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/creature/{creature_id}")).await
    }
    
    /// Searches creatures. Blizzard requires a localized `name.{locale}` field in `query`.
    pub async fn search_creature(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/creature", query).await
    }
    
    pub async fn get_creature_display_media(
        &self,
        region: Region,
        locale: &str,
        creature_display_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/creature-display/{creature_display_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature_family_media(
        &self,
        region: Region,
        locale: &str,
        creature_family_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/creature-family/{creature_family_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Guild crest
    
    pub async fn get_guild_crest_components_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/guild-crest/index").await
    }
    
    pub async fn get_guild_crest_border_media(
        &self,
        region: Region,
        locale: &str,
        border_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/guild-crest/border/{border_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_guild_crest_emblem_media(
        &self,
        region: Region,
        locale: &str,
        emblem_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/guild-crest/emblem/{emblem_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Heirloom
    
    pub async fn get_heirloom_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/heirloom/index").await
    }
    
    pub async fn get_heirloom(
        &self,
        region: Region,
        locale: &str,
        heirloom_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/heirloom/{heirloom_id}")).await
    }
    
    // Item
    
    pub async fn get_item_classes_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/item-class/index").await
    }
    
    pub async fn get_item_class(
        &self,
        region: Region,
        locale: &str,
        item_class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/item-class/{item_class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_item_sets_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/item-set/index").await
    }
    
    pub async fn get_item_set(
        &self,
        region: Region,
        locale: &str,
        item_set_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/item-set/{item_set_id}")).await
    }
    
    pub async fn get_item_subclass(
        &self,
        region: Region,
        locale: &str,
        item_class_id: u64,
        item_subclass_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/item-class/{item_class_id}/item-subclass/{item_subclass_id}",
        );
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_item(
        &self,
        region: Region,
        locale: &str,
        item_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/item/{item_id}")).await
    }
    
    pub async fn get_item_media(
        &self,
        region: Region,
        locale: &str,
        item_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/media/item/{item_id}")).await
    }
    
    pub async fn search_item(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/item", query).await
    }
    
    // Journal
    
    pub async fn get_journal_expansions_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/journal-expansion/index").await
    }
    
    pub async fn get_journal_expansion(
        &self,
        region: Region,
        locale: &str,
        journal_expansion_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/journal-expansion/{journal_expansion_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_journal_encounters_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/journal-encounter/index").await
    }
    
    pub async fn get_journal_encounter(
        &self,
        region: Region,
        locale: &str,
        journal_encounter_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/journal-encounter/{journal_encounter_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn search_journal_encounter(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/journal-encounter", query).await
    }
    
    pub async fn get_journal_instances_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/journal-instance/index").await
    }
    
    pub async fn get_journal_instance(
        &self,
        region: Region,
        locale: &str,
        journal_instance_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/journal-instance/{journal_instance_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_journal_instance_media(
        &self,
        region: Region,
        locale: &str,
        journal_instance_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/journal-instance/{journal_instance_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Media search
    
    /// Searches media assets, e.g. with `tags` set to `"item"` in `query`.
    pub async fn search_media(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/media", query).await
    }
    
    // Modified crafting
    
    pub async fn get_modified_crafting_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/modified-crafting/index").await
    }
    
    pub async fn get_modified_crafting_category_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/modified-crafting/category/index").await
    }
    
    pub async fn get_modified_crafting_category(
        &self,
        region: Region,
        locale: &str,
        category_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/modified-crafting/category/{category_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_modified_crafting_reagent_slot_type_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        let resource = "/data/wow/modified-crafting/reagent-slot-type/index";
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_modified_crafting_reagent_slot_type(
        &self,
        region: Region,
        locale: &str,
        slot_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/modified-crafting/reagent-slot-type/{slot_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Mount
    
    pub async fn get_mounts_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/mount/index").await
    }
    
    pub async fn get_mount(
        &self,
        region: Region,
        locale: &str,
        mount_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/mount/{mount_id}")).await
    }
    
    pub async fn search_mount(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/mount", query).await
    }
    
    // Mythic keystone affix
    
    pub async fn get_mythic_keystone_affixes_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/keystone-affix/index").await
    }
    
    pub async fn get_mythic_keystone_affix(
        &self,
        region: Region,
        locale: &str,
        keystone_affix_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/keystone-affix/{keystone_affix_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_mythic_keystone_affix_media(
        &self,
        region: Region,
        locale: &str,
        keystone_affix_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/keystone-affix/{keystone_affix_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Mythic keystone dungeon
    
    pub async fn get_mythic_keystone_dungeons_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/mythic-keystone/dungeon/index").await
    }
    
    pub async fn get_mythic_keystone_dungeon(
        &self,
        region: Region,
        locale: &str,
        dungeon_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/mythic-keystone/dungeon/{dungeon_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_mythic_keystone_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/mythic-keystone/index").await
    }
    
    pub async fn get_mythic_keystone_periods_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/mythic-keystone/period/index").await
    }
    
    pub async fn get_mythic_keystone_period(
        &self,
        region: Region,
        locale: &str,
        period_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/mythic-keystone/period/{period_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_mythic_keystone_seasons_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/mythic-keystone/season/index").await
    }
    
    pub async fn get_mythic_keystone_season(
        &self,
        region: Region,
        locale: &str,
        season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/mythic-keystone/season/{season_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // Mythic keystone leaderboard
    
    pub async fn get_mythic_keystone_leaderboards_index(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/connected-realm/{connected_realm_id}/mythic-leaderboard/index",
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    /// Gets a weekly mythic keystone leaderboard for a dungeon on a connected realm.
    pub async fn get_mythic_keystone_leaderboard(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
        dungeon_id: u64,
        period: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/connected-realm/{}/mythic-leaderboard/{}/period/{}",
            connected_realm_id,
            dungeon_id,
            period,
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // Mythic raid leaderboard
    
    /// Gets the hall of fame for a raid, e.g. `"uldir"`, and a faction, `"alliance"` or `"horde"`.
    pub async fn get_mythic_raid_leaderboard(
        &self,
        region: Region,
        locale: &str,
        raid: &str,
        faction: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/leaderboard/hall-of-fame/{}/{}",
            encode_path_segment(raid),
            encode_path_segment(faction),
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // Pet
    
    pub async fn get_pets_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/pet/index").await
    }
    
    pub async fn get_pet(&self, region: Region, locale: &str, pet_id: u64) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/pet/{pet_id}")).await
    }
    
    pub async fn get_pet_media(
        &self,
        region: Region,
        locale: &str,
        pet_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/media/pet/{pet_id}")).await
    }
    
    pub async fn get_pet_abilities_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/pet-ability/index").await
    }
    
    pub async fn get_pet_ability(
        &self,
        region: Region,
        locale: &str,
        pet_ability_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pet-ability/{pet_ability_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_pet_ability_media(
        &self,
        region: Region,
        locale: &str,
        pet_ability_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/pet-ability/{pet_ability_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Playable class
    
    pub async fn get_playable_classes_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/playable-class/index").await
    }
    
    pub async fn get_playable_class(
        &self,
        region: Region,
        locale: &str,
        class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-class/{class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_playable_class_media(
        &self,
        region: Region,
        locale: &str,
        class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/playable-class/{class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_pvp_talent_slots(
        &self,
        region: Region,
        locale: &str,
        class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-class/{class_id}/pvp-talent-slots");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Playable race
    
    pub async fn get_playable_races_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/playable-race/index").await
    }
    
    pub async fn get_playable_race(
        &self,
        region: Region,
        locale: &str,
        playable_race_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-race/{playable_race_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Playable specialization
    
    pub async fn get_playable_specializations_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/playable-specialization/index").await
    }
    
    pub async fn get_playable_specialization(
        &self,
        region: Region,
        locale: &str,
        spec_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-specialization/{spec_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_playable_specialization_media(
        &self,
        region: Region,
        locale: &str,
        spec_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/playable-specialization/{spec_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Power type
    
    pub async fn get_power_types_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/power-type/index").await
    }
    
    pub async fn get_power_type(
        &self,
        region: Region,
        locale: &str,
        power_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/power-type/{power_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Profession
    
    pub async fn get_professions_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/profession/index").await
    }
    
    pub async fn get_profession(
        &self,
        region: Region,
        locale: &str,
        profession_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/profession/{profession_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_profession_media(
        &self,
        region: Region,
        locale: &str,
        profession_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/profession/{profession_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_profession_skill_tier(
        &self,
        region: Region,
        locale: &str,
        profession_id: u64,
        skill_tier_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/profession/{profession_id}/skill-tier/{skill_tier_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_recipe(
        &self,
        region: Region,
        locale: &str,
        recipe_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/recipe/{recipe_id}")).await
    }
    
    pub async fn get_recipe_media(
        &self,
        region: Region,
        locale: &str,
        recipe_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/media/recipe/{recipe_id}")).await
    }
    
    // PvP season
    
    pub async fn get_pvp_seasons_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/pvp-season/index").await
    }
    
    pub async fn get_pvp_season(
        &self,
        region: Region,
        locale: &str,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-season/{pvp_season_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_leaderboards_index(
        &self,
        region: Region,
        locale: &str,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/index");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    /// Gets a PvP leaderboard for a bracket, e.g. `"3v3"`.
    pub async fn get_pvp_leaderboard(
        &self,
        region: Region,
        locale: &str,
        pvp_season_id: u64,
        pvp_bracket: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/{}",
            encode_path_segment(pvp_bracket),
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_rewards_index(
        &self,
        region: Region,
        locale: &str,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-season/{pvp_season_id}/pvp-reward/index");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // PvP tier
    
    pub async fn get_pvp_tiers_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/pvp-tier/index").await
    }
    
    pub async fn get_pvp_tier(
        &self,
        region: Region,
        locale: &str,
        pvp_tier_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/pvp-tier/{pvp_tier_id}")).await
    }
    
    pub async fn get_pvp_tier_media(
        &self,
        region: Region,
        locale: &str,
        pvp_tier_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/pvp-tier/{pvp_tier_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Quest
    
    pub async fn get_quests_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/quest/index").await
    }
    
    pub async fn get_quest(
        &self,
        region: Region,
        locale: &str,
        quest_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/quest/{quest_id}")).await
    }
    
    pub async fn get_quest_categories_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/quest/category/index").await
    }
    
    pub async fn get_quest_category(
        &self,
        region: Region,
        locale: &str,
        quest_category_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/quest/category/{quest_category_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_quest_areas_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/quest/area/index").await
    }
    
    pub async fn get_quest_area(
        &self,
        region: Region,
        locale: &str,
        quest_area_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/quest/area/{quest_area_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_quest_types_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/quest/type/index").await
    }
    
    pub async fn get_quest_type(
        &self,
        region: Region,
        locale: &str,
        quest_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/quest/type/{quest_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Realm
    
    pub async fn get_realms_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/realm/index").await
    }
    
    pub async fn get_realm(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/realm/{}", encode_path_segment(realm_slug));
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn search_realm(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Dynamic, "/data/wow/search/realm", query).await
    }
    
    // Region
    
    pub async fn get_regions_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/region/index").await
    }
    
    pub async fn get_region(
        &self,
        region: Region,
        locale: &str,
        region_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, format!("/data/wow/region/{region_id}")).await
    }
    
    // Reputations
    
    pub async fn get_reputation_factions_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/reputation-faction/index").await
    }
    
    pub async fn get_reputation_faction(
        &self,
        region: Region,
        locale: &str,
        reputation_faction_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/reputation-faction/{reputation_faction_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_reputation_tiers_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/reputation-tiers/index").await
    }
    
    pub async fn get_reputation_tiers(
        &self,
        region: Region,
        locale: &str,
        reputation_tiers_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/reputation-tiers/{reputation_tiers_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Spell
    
    pub async fn get_spell(
        &self,
        region: Region,
        locale: &str,
        spell_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/spell/{spell_id}")).await
    }
    
    pub async fn get_spell_media(
        &self,
        region: Region,
        locale: &str,
        spell_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/media/spell/{spell_id}")).await
    }
    
    pub async fn search_spell(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/spell", query).await
    }
    
    // Talent
    
    pub async fn get_talent_tree_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/talent-tree/index").await
    }
    
    pub async fn get_talents_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/talent/index").await
    }
    
    pub async fn get_talent(
        &self,
        region: Region,
        locale: &str,
        talent_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/talent/{talent_id}")).await
    }
    
    pub async fn get_pvp_talents_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/pvp-talent/index").await
    }
    
    pub async fn get_pvp_talent(
        &self,
        region: Region,
        locale: &str,
        pvp_talent_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-talent/{pvp_talent_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Tech talent
    
    pub async fn get_tech_talent_tree_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/tech-talent-tree/index").await
    }
    
    pub async fn get_tech_talent_tree(
        &self,
        region: Region,
        locale: &str,
        tech_talent_tree_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/tech-talent-tree/{tech_talent_tree_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_tech_talent_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/tech-talent/index").await
    }
    
    pub async fn get_tech_talent(
        &self,
        region: Region,
        locale: &str,
        tech_talent_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/tech-talent/{tech_talent_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_tech_talent_media(
        &self,
        region: Region,
        locale: &str,
        tech_talent_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/tech-talent/{tech_talent_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Title
    
    pub async fn get_titles_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/title/index").await
    }
    
    pub async fn get_title(
        &self,
        region: Region,
        locale: &str,
        title_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/title/{title_id}")).await
    }
    
    // Toy
    
    pub async fn get_toy_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/toy/index").await
    }
    
    pub async fn get_toy(&self, region: Region, locale: &str, toy_id: u64) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/toy/{toy_id}")).await
    }
    
    // WoW token
    
    /// Gets the current WoW token price.
    pub async fn get_token_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/token/index").await
    }
}
