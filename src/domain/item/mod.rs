//! Item domain.

pub mod client;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub language: Option<ItemLanguage>,
    #[serde(default)]
    pub stat: Option<ItemStat>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_in_neural_network: bool,
    #[serde(default)]
    pub is_full_item_hero_purchase_item: bool,
    #[serde(default)]
    pub components: Option<Vec<ItemComponent>>,
    #[serde(default)]
    pub is_support_full_item: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemComponent {
    pub item_index: u32,
    pub component_id: ItemId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemLanguage {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub description: Vec<String>,
    pub notes: Vec<String>,
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    Component,
    SecretShop,
    Consumable,
    Common,
    Rare,
    Epic,
    Artifact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemStat {
    pub behavior: Option<i64>,
    pub unit_target_type: Option<i64>,
    pub unit_target_team: Option<i64>,
    pub unit_target_flags: Option<i64>,
    pub fight_recap_level: Option<i64>,
    pub cast_range: Option<Vec<f64>>,
    pub cast_point: Option<Vec<f64>>,
    pub cooldown: Option<Vec<f64>>,
    pub mana_cost: Option<Vec<f64>>,
    pub channel_time: Option<Vec<f64>>,
    /// Cooldown group name (`"blink"`, `"teleport"`, ...). Empty when none.
    pub shared_cooldown: Option<String>,
    pub cost: Option<u32>,
    pub shop_tags: Option<String>,
    pub aliases: Option<String>,
    pub quality: Option<ItemQuality>,
    pub is_sellable: Option<bool>,
    pub is_droppable: Option<bool>,
    pub is_purchaseable: Option<bool>,
    pub is_secret_shop: Option<bool>,
    pub is_side_shop: Option<bool>,
    pub is_stackable: Option<bool>,
    pub is_permanent: Option<bool>,
    pub is_support: Option<bool>,
    pub stock_max: Option<u32>,
    pub initial_charges: Option<u32>,
    pub initial_stock: Option<u32>,
    pub stock_time: Option<f64>,
    pub is_recipe: Option<bool>,
    pub needs_components: Option<bool>,
    #[serde(rename = "ItemResult")]
    pub item_result: Option<ItemId>,
    #[serde(rename = "UpgradeItem")]
    pub upgrade_item: Option<ItemId>,
    #[serde(rename = "UpgradeRecipe")]
    pub upgrade_recipe: Option<ItemId>,
    pub neutral_item_tier: Option<u8>,
    pub neutral_item_drop_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "item_blink",
            "displayName": "Blink Dagger",
            "shortName": "blink",
            "isInNeuralNetwork": true,
            "stat": {"cost": 2250, "quality": "component", "sharedCooldown": "blink", "ItemResult": 0}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.display_name.as_deref(), Some("Blink Dagger"));
        let stat = item.stat.unwrap();
        assert_eq!(stat.cost, Some(2250));
        assert_eq!(stat.quality, Some(ItemQuality::Component));
        assert_eq!(stat.item_result, Some(0));
    }

    #[test]
    fn test_secret_shop_quality() {
        let q: ItemQuality = serde_json::from_str(r#""secret_shop""#).unwrap();
        assert_eq!(q, ItemQuality::SecretShop);
    }
}
