use crate::learnsets::Learnset;
use crate::species::OverrideRecord;
use serde::Deserialize;
use std::collections::HashMap;

/// The chaos-mod overlay tables, all keyed by identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChaosTables {
    /// Partial species records layered over the base pokedex.
    pub override_species_data: HashMap<String, OverrideRecord>,
    /// Base tier labels for the mod format.
    pub tiers: HashMap<String, String>,
    /// Tier labels that beat `tiers` when both are present.
    pub override_tier: HashMap<String, String>,
    /// Mod learnsets.
    pub learnsets: HashMap<String, Learnset>,
    /// Learnsets that beat `learnsets` when both are present.
    pub override_learnsets: HashMap<String, Learnset>,
}

/// The upstream teambuilder-tables file. Only the chaos layer is consumed;
/// the file may legitimately not carry one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeambuilderTables {
    pub gen9chaos: Option<ChaosTables>,
}
