//! Hero domain — heroes, their base stats and the Dota Plus leaderboard.

pub mod client;

use crate::shared::{AbilityId, GameVersionId, HeroId, SteamAccountId};
use crate::shared::serde_util::null_default;
use serde::{Deserialize, Serialize};

/// A hero as found in the Dota 2 client, with base stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub stat: Option<HeroStat>,
    #[serde(default)]
    pub abilities: Option<Vec<HeroAbility>>,
    #[serde(default)]
    pub roles: Option<Vec<HeroRole>>,
    #[serde(default)]
    pub talents: Option<Vec<Talent>>,
    #[serde(default)]
    pub language: Option<HeroLanguage>,
}

impl Hero {
    /// Display name when localised, internal name otherwise.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroAbility {
    pub slot: u8,
    pub ability_id: AbilityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroLanguage {
    pub hero_id: HeroId,
    pub game_version_id: GameVersionId,
    pub language_id: u32,
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub hype: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRole {
    pub role_id: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    pub slot: u8,
    #[serde(default)]
    pub game_version_id: Option<GameVersionId>,
    pub ability_id: AbilityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryAttribute {
    Agi,
    Str,
    Int,
    All,
}

/// Base stats of a hero for one game version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroStat {
    pub game_version_id: Option<GameVersionId>,
    pub enabled: Option<bool>,
    pub hero_unlock_order: Option<f64>,
    pub team: Option<bool>,
    pub cm_enabled: Option<bool>,
    pub new_player_enabled: Option<bool>,
    pub attack_type: Option<AttackType>,
    pub starting_armor: Option<f64>,
    pub starting_magic_armor: Option<f64>,
    pub starting_damage_min: Option<f64>,
    pub starting_damage_max: Option<f64>,
    pub attack_rate: Option<f64>,
    pub attack_animation_point: Option<f64>,
    pub attack_acquisition_range: Option<f64>,
    pub attack_range: Option<f64>,
    #[serde(rename = "AttributePrimary")]
    pub attribute_primary: Option<PrimaryAttribute>,
    pub hero_primary_attribute: Option<u8>,
    pub strength_base: Option<f64>,
    pub strength_gain: Option<f64>,
    pub intelligence_base: Option<f64>,
    pub intelligence_gain: Option<f64>,
    pub agility_base: Option<f64>,
    pub agility_gain: Option<f64>,
    pub hp_regen: Option<f64>,
    pub mp_regen: Option<f64>,
    pub move_speed: Option<f64>,
    pub move_turn_rate: Option<f64>,
    pub hp_bar_offset: Option<f64>,
    pub vision_daytime_range: Option<f64>,
    pub vision_nighttime_range: Option<f64>,
    pub complexity: Option<u8>,
    pub primary_attribute_enum: Option<u8>,
}

/// Reduced `(id, name)` projection returned by [`Heroes::list`](client::Heroes::list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub id: HeroId,
    pub name: String,
}

impl From<&Hero> for HeroSummary {
    fn from(hero: &Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotaPlusLeaderboard {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub players: Vec<DotaPlusPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotaPlusPlayer {
    pub hero_id: HeroId,
    pub steam_account_id: SteamAccountId,
    pub level: u32,
    pub total_actions: u64,
    pub awarded_date_time: i64,
}
