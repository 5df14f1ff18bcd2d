//! The session-scoped dex: owned tables plus lazy read-through caches.
//!
//! All resolution methods are synchronous pure lookups over data that was
//! fetched up front. The caches are populated at most once per identifier
//! and never invalidated within a session; every writer computes the same
//! value for a given key, so last-writer-wins is acceptable.

use crate::learnset::{resolve_learnset, LearnsetSources};
use crate::overlay::{resolve_effective, resolve_tier, EffectiveRecord};
use crate::resolver::resolve_with_fallback;
use crate::sprites::{fangame_id_from_sprite_url, sprite_url, SpriteFacing};
use schema::{
    to_id, AbilityInfo, ChaosTables, ItemInfo, Learnset, LearnsetFileEntry, MoveInfo,
    OverrideRecord, SpeciesRecord,
};
use std::collections::HashMap;

/// The fangame-cache value for entries that are not fangame-exclusive.
pub const NO_FANGAME: &str = "all";

pub struct Dex {
    pokedex: HashMap<String, SpeciesRecord>,
    chaos: Option<ChaosTables>,
    learnsets: Option<HashMap<String, LearnsetFileEntry>>,
    moves: Option<HashMap<String, MoveInfo>>,
    abilities: Option<HashMap<String, AbilityInfo>>,
    items: Option<HashMap<String, ItemInfo>>,
    type_cache: HashMap<String, Vec<String>>,
    fangame_cache: HashMap<String, Vec<String>>,
}

impl Dex {
    /// Build a dex over a base pokedex table. Overlay and metadata tables
    /// are optional; resolution degrades to base-only behavior without them.
    pub fn new(pokedex: HashMap<String, SpeciesRecord>) -> Self {
        Dex {
            pokedex,
            chaos: None,
            learnsets: None,
            moves: None,
            abilities: None,
            items: None,
            type_cache: HashMap::new(),
            fangame_cache: HashMap::new(),
        }
    }

    pub fn with_chaos(mut self, chaos: ChaosTables) -> Self {
        self.chaos = Some(chaos);
        self
    }

    pub fn with_learnsets(mut self, learnsets: HashMap<String, LearnsetFileEntry>) -> Self {
        self.learnsets = Some(learnsets);
        self
    }

    pub fn with_moves(mut self, moves: HashMap<String, MoveInfo>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_abilities(mut self, abilities: HashMap<String, AbilityInfo>) -> Self {
        self.abilities = Some(abilities);
        self
    }

    pub fn with_items(mut self, items: HashMap<String, ItemInfo>) -> Self {
        self.items = Some(items);
        self
    }

    /// Exact-identifier lookup in the base pokedex.
    pub fn species(&self, name: &str) -> Option<&SpeciesRecord> {
        self.pokedex.get(&to_id(name))
    }

    /// Exact-identifier lookup in the chaos override layer.
    pub fn override_species(&self, name: &str) -> Option<&OverrideRecord> {
        self.chaos
            .as_ref()?
            .override_species_data
            .get(&to_id(name))
    }

    /// Resolve a query name against both layers, with suffix fallback, and
    /// merge the result. `None` means unresolved, not an error.
    pub fn effective(&self, name: &str) -> Option<EffectiveRecord> {
        let overrides = self
            .chaos
            .as_ref()
            .map(|chaos| &chaos.override_species_data);
        resolve_effective(
            name,
            |id| self.pokedex.get(id).cloned(),
            |id| overrides.and_then(|table| table.get(id).cloned()),
        )
    }

    /// The override record for a name, with suffix fallback. Used when
    /// overlaying sibling forms that may only be keyed by their root.
    pub fn override_for(&self, name: &str) -> Option<&OverrideRecord> {
        let table = &self.chaos.as_ref()?.override_species_data;
        resolve_with_fallback(name, |id| table.get(id))
    }

    /// Tier label for a name: override tier beats base tier, exact ids only.
    pub fn tier(&self, name: &str) -> Option<&str> {
        let chaos = self.chaos.as_ref()?;
        resolve_tier(name, &chaos.override_tier, &chaos.tiers)
    }

    /// Select the learnset for a name from the configured sources, in
    /// priority order, without merging.
    pub fn learnset(&self, name: &str) -> Option<&Learnset> {
        resolve_learnset(
            name,
            LearnsetSources {
                override_learnsets: self.chaos.as_ref().map(|c| &c.override_learnsets),
                mod_learnsets: self.chaos.as_ref().map(|c| &c.learnsets),
                general: self.learnsets.as_ref(),
            },
        )
    }

    pub fn move_info(&self, name: &str) -> Option<&MoveInfo> {
        self.moves.as_ref()?.get(&to_id(name))
    }

    pub fn ability_info(&self, name: &str) -> Option<&AbilityInfo> {
        self.abilities.as_ref()?.get(&to_id(name))
    }

    pub fn item_info(&self, name: &str) -> Option<&ItemInfo> {
        self.items.as_ref()?.get(&to_id(name))
    }

    /// Sibling forms of a record that only exist with a required item or
    /// ability (megas, primals, and the like), each overlaid with its own
    /// override data. Sorted by name; the record's own form is excluded.
    pub fn special_forms(&self, record: &SpeciesRecord) -> Vec<SpeciesRecord> {
        let current_base = to_id(record.base_species.as_deref().unwrap_or(&record.name));
        let current_id = to_id(&record.name);
        let mut forms: Vec<SpeciesRecord> = self
            .pokedex
            .values()
            .filter(|entry| {
                entry.base_species.is_some()
                    && entry.forme.is_some()
                    && (entry.required_item.is_some() || entry.required_ability.is_some())
                    && to_id(entry.base_species.as_deref().unwrap_or_default()) == current_base
                    && to_id(&entry.name) != current_id
            })
            .map(|entry| match self.override_for(&entry.name) {
                Some(over) => entry.merged_with(over),
                None => entry.clone(),
            })
            .collect();
        forms.sort_by(|a, b| a.name.cmp(&b.name));
        forms
    }

    /// All identifiers in the base pokedex, sorted.
    pub fn entry_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.pokedex.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Lowercase type tags for an identifier, computed once and cached.
    /// Unknown entries (and entries without type data) classify as normal.
    pub fn types_for(&mut self, name: &str) -> &[String] {
        let id = to_id(name);
        if !self.type_cache.contains_key(&id) {
            let types = match self.pokedex.get(&id) {
                Some(record) if !record.types.is_empty() => record
                    .types
                    .iter()
                    .map(|t| t.to_lowercase())
                    .collect(),
                _ => vec!["normal".to_string()],
            };
            self.type_cache.insert(id.clone(), types);
        }
        &self.type_cache[&id]
    }

    /// Fangame classification for an identifier, derived from where its
    /// sprite is hosted; computed once and cached. Entries that are not
    /// fangame-exclusive classify as [`NO_FANGAME`].
    pub fn fangames_for(&mut self, name: &str) -> &[String] {
        let id = to_id(name);
        if !self.fangame_cache.contains_key(&id) {
            let fangames = self
                .pokedex
                .get(&id)
                .and_then(|record| {
                    let url = sprite_url(record, SpriteFacing::Front, false);
                    fangame_id_from_sprite_url(&url)
                })
                .map(|fangame| vec![fangame.to_string()])
                .unwrap_or_else(|| vec![NO_FANGAME.to_string()]);
            self.fangame_cache.insert(id.clone(), fangames);
        }
        &self.fangame_cache[&id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::BaseStats;

    fn species(name: &str, types: &[&str]) -> SpeciesRecord {
        SpeciesRecord {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn pokedex_with(records: Vec<SpeciesRecord>) -> HashMap<String, SpeciesRecord> {
        records
            .into_iter()
            .map(|record| (to_id(&record.name), record))
            .collect()
    }

    fn chaos_with_override(id: &str, over: OverrideRecord) -> ChaosTables {
        let mut tables = ChaosTables::default();
        tables.override_species_data.insert(id.to_string(), over);
        tables
    }

    #[test]
    fn giratina_origin_falls_back_but_keeps_the_query_name() {
        let dex = Dex::new(pokedex_with(vec![species("Giratina", &["Ghost", "Dragon"])]));
        let effective = dex.effective("Giratina-Origin").unwrap();
        assert_eq!(effective.species.name, "Giratina");
        assert_eq!(effective.species.types, vec!["Ghost", "Dragon"]);
        // "Giratina-Origin" is longer than "Giratina": the query name wins.
        assert_eq!(effective.effective_name, "Giratina-Origin");
    }

    #[test]
    fn alola_cap_walks_candidates_down_to_pikachu() {
        let dex = Dex::new(pokedex_with(vec![species("Pikachu", &["Electric"])]));
        let effective = dex.effective("pikachu-alola-cap").unwrap();
        assert_eq!(effective.species.name, "Pikachu");
        assert_eq!(effective.effective_name, "pikachu-alola-cap");
    }

    #[test]
    fn chaos_override_layers_onto_the_base_record() {
        let mut base = species("Pikachu", &["Electric"]);
        base.base_stats = Some(BaseStats {
            hp: 35,
            atk: 55,
            def: 40,
            spa: 50,
            spd: 50,
            spe: 90,
        });
        let chaos = chaos_with_override(
            "pikachu",
            OverrideRecord {
                types: Some(vec!["Electric".to_string(), "Steel".to_string()]),
                ..Default::default()
            },
        );
        let dex = Dex::new(pokedex_with(vec![base.clone()])).with_chaos(chaos);
        let effective = dex.effective("Pikachu").unwrap();
        assert_eq!(effective.species.types, vec!["Electric", "Steel"]);
        assert_eq!(effective.species.base_stats, base.base_stats);
    }

    #[test]
    fn tier_goes_through_the_chaos_tables() {
        let mut chaos = ChaosTables::default();
        chaos.tiers.insert("pikachu".to_string(), "NU".to_string());
        chaos
            .override_tier
            .insert("pikachu".to_string(), "Uber".to_string());
        let dex = Dex::new(pokedex_with(vec![species("Pikachu", &["Electric"])])).with_chaos(chaos);
        assert_eq!(dex.tier("Pikachu"), Some("Uber"));
        assert_eq!(dex.tier("Pikachu-Alola-Cap"), None);
    }

    #[test]
    fn learnset_prefers_override_then_mod_then_general_file() {
        let mut chaos = ChaosTables::default();
        chaos.learnsets.insert(
            "pikachu".to_string(),
            [("nuzzle".to_string(), vec!["9L1".to_string()])]
                .into_iter()
                .collect(),
        );
        let mut general = HashMap::new();
        general.insert(
            "pikachu".to_string(),
            LearnsetFileEntry {
                learnset: Some(
                    [("thundershock".to_string(), vec!["9L1".to_string()])]
                        .into_iter()
                        .collect(),
                ),
            },
        );
        let dex = Dex::new(pokedex_with(vec![species("Pikachu", &["Electric"])]))
            .with_chaos(chaos)
            .with_learnsets(general);
        assert!(dex.learnset("Pikachu").unwrap().contains("nuzzle"));
        // Compound form misses the mod table (exact ids only) and reaches
        // the general file through candidate fallback.
        assert!(dex
            .learnset("Pikachu-Alola-Cap")
            .unwrap()
            .contains("thundershock"));
    }

    #[test]
    fn no_learnset_source_is_none() {
        let dex = Dex::new(pokedex_with(vec![species("Pikachu", &["Electric"])]));
        assert_eq!(dex.learnset("Pikachu"), None);
    }

    #[test]
    fn special_forms_are_item_gated_siblings() {
        let mut mega = species("Charizard-Mega-X", &["Fire", "Dragon"]);
        mega.base_species = Some("Charizard".to_string());
        mega.forme = Some("Mega-X".to_string());
        mega.required_item = Some("Charizardite X".to_string());
        let mut gmax = species("Charizard-Gmax", &["Fire", "Flying"]);
        gmax.base_species = Some("Charizard".to_string());
        gmax.forme = Some("Gmax".to_string());
        // No required item or ability: not a special form.
        let base = species("Charizard", &["Fire", "Flying"]);
        let dex = Dex::new(pokedex_with(vec![base.clone(), mega, gmax]));

        let forms = dex.special_forms(&base);
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].name, "Charizard-Mega-X");
    }

    #[test]
    fn special_forms_pick_up_overrides_by_root_fallback() {
        let mut mega = species("Charizard-Mega-X", &["Fire", "Dragon"]);
        mega.base_species = Some("Charizard".to_string());
        mega.forme = Some("Mega-X".to_string());
        mega.required_item = Some("Charizardite X".to_string());
        let base = species("Charizard", &["Fire", "Flying"]);
        // Override keyed only by the root species still applies to the form.
        let chaos = chaos_with_override(
            "charizard",
            OverrideRecord {
                types: Some(vec!["Dragon".to_string()]),
                ..Default::default()
            },
        );
        let dex = Dex::new(pokedex_with(vec![base.clone(), mega])).with_chaos(chaos);
        let forms = dex.special_forms(&base);
        assert_eq!(forms[0].types, vec!["Dragon"]);
    }

    #[test]
    fn type_cache_computes_once_and_defaults_to_normal() {
        let mut dex = Dex::new(pokedex_with(vec![species("Pikachu", &["Electric"])]));
        assert_eq!(dex.types_for("Pikachu"), ["electric"]);
        assert_eq!(dex.types_for("PIKACHU"), ["electric"]);
        assert_eq!(dex.types_for("missingno"), ["normal"]);
    }

    #[test]
    fn end_to_end_from_raw_json_tables() {
        // The shapes the upstream files actually use: slot-object abilities
        // in the pokedex, a partial override keyed by the root species, and
        // a wrapped general learnset entry.
        let pokedex: HashMap<String, SpeciesRecord> = serde_json::from_str(
            r#"{
                "giratina": {
                    "num": 487,
                    "name": "Giratina",
                    "types": ["Ghost", "Dragon"],
                    "baseStats": {"hp": 150, "atk": 100, "def": 120, "spa": 100, "spd": 120, "spe": 90},
                    "abilities": {"0": "Pressure", "H": "Telepathy"},
                    "evos": []
                }
            }"#,
        )
        .unwrap();
        let tables: schema::TeambuilderTables = serde_json::from_str(
            r#"{
                "gen9chaos": {
                    "overrideSpeciesData": {"giratina": {"abilities": {"0": "Levitate"}}},
                    "overrideTier": {"giratina": "Uber"}
                }
            }"#,
        )
        .unwrap();
        let general: HashMap<String, LearnsetFileEntry> = serde_json::from_str(
            r#"{"giratina": {"learnset": {"shadowball": ["9M"], "dracometeor": ["9T"]}}}"#,
        )
        .unwrap();

        let dex = Dex::new(pokedex)
            .with_chaos(tables.gen9chaos.unwrap())
            .with_learnsets(general);

        let effective = dex.effective("Giratina-Origin").unwrap();
        assert_eq!(effective.effective_name, "Giratina-Origin");
        assert_eq!(effective.species.abilities, vec!["Levitate"]);
        assert_eq!(effective.species.types, vec!["Ghost", "Dragon"]);
        assert_eq!(dex.tier("Giratina"), Some("Uber"));
        // The compound name reaches the general file through fallback.
        let learnset = dex.learnset("Giratina-Origin").unwrap();
        assert!(learnset.contains("shadowball"));
        assert_eq!(learnset.len(), 2);
    }

    #[test]
    fn fangame_cache_classifies_by_sprite_host() {
        let mut nucleon = species("Nucleon", &["Nuclear"]);
        nucleon.tags = vec!["Uranium".to_string()];
        let mut dex = Dex::new(pokedex_with(vec![nucleon, species("Pikachu", &["Electric"])]));
        assert_eq!(dex.fangames_for("Nucleon"), ["uranium"]);
        assert_eq!(dex.fangames_for("Pikachu"), [NO_FANGAME]);
        assert_eq!(dex.fangames_for("missingno"), [NO_FANGAME]);
    }
}
