//! Overlaying mod override records onto base species records.

use crate::resolver::resolve_with_fallback;
use schema::{to_id, OverrideRecord, SpeciesRecord};
use std::collections::HashMap;

/// The merged result of resolving a query name against the base and
/// override layers.
///
/// `species` carries the shallow-merged record; `effective_name` is computed
/// separately and is what downstream learnset and tier resolution should key
/// on.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveRecord {
    pub effective_name: String,
    pub species: SpeciesRecord,
}

/// Pick the display name downstream resolution keys on.
///
/// The longest of (override name, base name, original query name) wins,
/// with strictly-greater comparisons so ties keep the query name. Upstream
/// sources disagree on capitalization and truncation; the longest string is
/// the most specific/complete one. Do not replace this with a
/// prefer-override rule.
pub fn effective_name(query: &str, base_name: Option<&str>, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        if name.len() > query.len() {
            return name.to_string();
        }
    }
    if let Some(name) = base_name {
        if name.len() > query.len() {
            return name.to_string();
        }
    }
    query.to_string()
}

/// Resolve a query name against both layers and merge the results.
///
/// Base and override are resolved independently, so the override may match
/// at a different fallback depth than the base (the base matching the full
/// compound name while the override only knows the root species is legal).
/// Absence of data is `None`, never an error.
pub fn resolve_effective(
    name: &str,
    mut base_lookup: impl FnMut(&str) -> Option<SpeciesRecord>,
    mut override_lookup: impl FnMut(&str) -> Option<OverrideRecord>,
) -> Option<EffectiveRecord> {
    let base = resolve_with_fallback(name, &mut base_lookup);
    let over = resolve_with_fallback(name, &mut override_lookup);

    let species = match (&base, &over) {
        (None, None) => return None,
        (Some(base), None) => base.clone(),
        (None, Some(over)) => SpeciesRecord::default().merged_with(over),
        (Some(base), Some(over)) => base.merged_with(over),
    };
    let effective_name = effective_name(
        name,
        base.as_ref().map(|record| record.name.as_str()),
        over.as_ref().and_then(|record| record.name.as_deref()),
    );
    Some(EffectiveRecord {
        effective_name,
        species,
    })
}

/// Tier precedence: the override tier table beats the base tier table.
///
/// Tiers are exact-identifier lookups only; unlike species and learnsets
/// they get no suffix fallback. Preserve this asymmetry.
pub fn resolve_tier<'a>(
    name: &str,
    override_tiers: &'a HashMap<String, String>,
    tiers: &'a HashMap<String, String>,
) -> Option<&'a str> {
    let id = to_id(name);
    override_tiers
        .get(&id)
        .or_else(|| tiers.get(&id))
        .map(String::as_str)
}
