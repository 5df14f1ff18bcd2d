//! Listing filters for the searchable index: validity, prefix, type and
//! fangame filters, plus fixed-size pagination. Pure data transforms; the
//! UI wiring on top is someone else's problem.

use crate::dex::Dex;
use schema::to_id;

/// Entries per listing page.
pub const PAGE_SIZE: usize = 28;

/// Filters applied to the dex listing. `None` (or the `"all"` sentinel)
/// disables a filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter<'a> {
    /// Identifier prefix the entry must start with.
    pub term: &'a str,
    pub poke_type: Option<&'a str>,
    pub fangame: Option<&'a str>,
}

/// Whether an entry belongs in the listing at all: battle-only and
/// item/ability/move-gated forms, g-max and totem forms, and the Pokestar
/// studio props are hidden.
pub fn is_valid_dex_entry(dex: &Dex, name: &str) -> bool {
    let record = match dex.species(name) {
        Some(record) => record,
        None => return false,
    };
    if record.name.to_lowercase().starts_with("pokestar") {
        return false;
    }
    if record.required_item.is_some()
        || record.required_ability.is_some()
        || record.required_move.is_some()
        || record.battle_only.is_some()
    {
        return false;
    }
    let id = to_id(name);
    !(id.contains("gmax") || id.contains("totem"))
}

/// Filter the dex listing. Returns matching identifiers in sorted order.
pub fn search(dex: &mut Dex, filter: SearchFilter<'_>) -> Vec<String> {
    let term = to_id(filter.term);
    let poke_type = filter.poke_type.filter(|t| *t != "all").map(to_id);
    let fangame = filter.fangame.filter(|f| *f != "all").map(to_id);

    let mut results: Vec<String> = dex
        .entry_ids()
        .into_iter()
        .map(str::to_string)
        .collect();
    results.retain(|id| is_valid_dex_entry(dex, id));
    if !term.is_empty() {
        results.retain(|id| id.starts_with(&term));
    }
    if let Some(wanted) = poke_type {
        results.retain(|id| dex.types_for(id).iter().any(|t| *t == wanted));
    }
    if let Some(wanted) = fangame {
        results.retain(|id| dex.fangames_for(id).iter().any(|f| *f == wanted));
    }
    results
}

/// One page of results plus the page count, with the page index clamped
/// into range. Pages are 1-based.
pub fn paginate<T>(results: &[T], page: usize) -> (&[T], usize) {
    let total_pages = results.len().div_ceil(PAGE_SIZE).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(results.len());
    (&results[start..end], total_pages)
}
