use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use strum::EnumIter;

/// The six fixed stat keys, in upstream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    /// The JSON key used by `baseStats` mappings.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
        }
    }

    /// Display label, matching the site's stat bars.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Attack",
            Stat::Def => "Defense",
            Stat::Spa => "Sp. Atk.",
            Stat::Spd => "Sp. Def.",
            Stat::Spe => "Speed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn total(&self) -> u32 {
        self.hp as u32
            + self.atk as u32
            + self.def as u32
            + self.spa as u32
            + self.spd as u32
            + self.spe as u32
    }
}

/// A JSON field that is either a single name or a list of names
/// (`battleOnly` in the upstream pokedex uses both shapes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// One species or form, as keyed in the base pokedex table.
///
/// Only the fields consulted by resolution and the pure presentation
/// transforms are modeled; anything else in the upstream JSON is ignored.
/// Absent fields mean "unknown", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub num: Option<i32>,
    pub name: String,
    pub base_species: Option<String>,
    pub forme: Option<String>,
    pub types: Vec<String>,
    pub base_stats: Option<BaseStats>,
    /// Canonical ordered ability names. The upstream JSON carries either an
    /// array or a slot object (`{"0": .., "1": .., "H": ..}`); both shapes
    /// are folded into this list once, at ingestion.
    #[serde(deserialize_with = "ability_list")]
    pub abilities: Vec<String>,
    pub tags: Vec<String>,
    pub prevo: Option<String>,
    pub evos: Vec<String>,
    pub required_item: Option<String>,
    pub required_ability: Option<String>,
    pub required_move: Option<String>,
    pub battle_only: Option<OneOrMany>,
}

/// A partial species record from a mod override layer.
///
/// Every overlayable field is optional: a field present here replaces the
/// corresponding base field entirely (shallow merge), a field absent here
/// leaves the base value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverrideRecord {
    pub num: Option<i32>,
    pub name: Option<String>,
    pub base_species: Option<String>,
    pub forme: Option<String>,
    pub types: Option<Vec<String>>,
    pub base_stats: Option<BaseStats>,
    #[serde(deserialize_with = "optional_ability_list")]
    pub abilities: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub prevo: Option<String>,
    pub evos: Option<Vec<String>>,
    pub required_item: Option<String>,
    pub required_ability: Option<String>,
    pub required_move: Option<String>,
    pub battle_only: Option<OneOrMany>,
}

impl SpeciesRecord {
    /// Shallow merge: every field present on the override supersedes the
    /// corresponding field here; fields absent from the override pass
    /// through untouched. Nested structures are replaced, never merged.
    pub fn merged_with(&self, over: &OverrideRecord) -> SpeciesRecord {
        SpeciesRecord {
            num: over.num.or(self.num),
            name: over.name.clone().unwrap_or_else(|| self.name.clone()),
            base_species: over
                .base_species
                .clone()
                .or_else(|| self.base_species.clone()),
            forme: over.forme.clone().or_else(|| self.forme.clone()),
            types: over.types.clone().unwrap_or_else(|| self.types.clone()),
            base_stats: over.base_stats.or(self.base_stats),
            abilities: over
                .abilities
                .clone()
                .unwrap_or_else(|| self.abilities.clone()),
            tags: over.tags.clone().unwrap_or_else(|| self.tags.clone()),
            prevo: over.prevo.clone().or_else(|| self.prevo.clone()),
            evos: over.evos.clone().unwrap_or_else(|| self.evos.clone()),
            required_item: over
                .required_item
                .clone()
                .or_else(|| self.required_item.clone()),
            required_ability: over
                .required_ability
                .clone()
                .or_else(|| self.required_ability.clone()),
            required_move: over
                .required_move
                .clone()
                .or_else(|| self.required_move.clone()),
            battle_only: over
                .battle_only
                .clone()
                .or_else(|| self.battle_only.clone()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AbilityField {
    Ordered(Vec<String>),
    // Slot keys sort "0" < "1" < "H" < "S", which is the display order.
    Slots(BTreeMap<String, String>),
}

impl AbilityField {
    fn into_ordered(self) -> Vec<String> {
        match self {
            AbilityField::Ordered(list) => list,
            AbilityField::Slots(slots) => slots.into_values().collect(),
        }
    }
}

fn ability_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AbilityField::deserialize(deserializer)?.into_ordered())
}

fn optional_ability_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<AbilityField>::deserialize(deserializer)?;
    Ok(field.map(AbilityField::into_ordered))
}
