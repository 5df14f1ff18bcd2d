//! Suffix-stripping name resolution.
//!
//! Form names are built by suffixing a base species name with modifiers
//! (`Pikachu-Alola-Cap`). When the full name misses, progressively dropping
//! trailing hyphenated segments lets an unrecognized compound form fall back
//! to a recognized ancestor form or base species. The loop runs from the
//! most specific candidate to the least, so the longest matching prefix
//! always wins.

use schema::to_id;
use std::collections::HashSet;

/// How fallback candidates are generated from a compound name.
///
/// Some data sources key alternate forms without hyphens, so one resolution
/// path also tries the separator-free join at every truncation level. The
/// two styles are a configuration flag on a single implementation, not
/// separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStyle {
    /// Exact id, then dash-joined truncations only.
    Hyphenated,
    /// Additionally try the collapsed (separator-free) join at each level.
    Collapsed,
}

fn push_id(ids: &mut Vec<String>, tried: &mut HashSet<String>, candidate: &str) {
    let id = to_id(candidate);
    if tried.insert(id.clone()) {
        ids.push(id);
    }
}

/// The ordered, deduplicated identifier candidates for a query name.
///
/// The exact identifier comes first. A name with no hyphen has nothing to
/// strip and yields only that. Otherwise trailing segments are dropped one
/// at a time, never reducing to zero segments; candidates already tried
/// (after normalization) are skipped.
pub fn candidate_ids(name: &str, style: CandidateStyle) -> Vec<String> {
    let mut tried = HashSet::new();
    let mut ids = Vec::new();
    push_id(&mut ids, &mut tried, name);
    if !name.contains('-') {
        return ids;
    }
    if style == CandidateStyle::Collapsed {
        push_id(&mut ids, &mut tried, &name.replace('-', ""));
    }
    let parts: Vec<&str> = name.split('-').collect();
    for i in (1..parts.len()).rev() {
        push_id(&mut ids, &mut tried, &parts[..i].join("-"));
        if style == CandidateStyle::Collapsed {
            push_id(&mut ids, &mut tried, &parts[..i].concat());
        }
    }
    ids
}

/// Resolve a name against a lookup, trying dash-joined truncations on a
/// miss. Returns the first hit, or `None` once every candidate is exhausted.
pub fn resolve_with_fallback<T>(name: &str, lookup: impl FnMut(&str) -> Option<T>) -> Option<T> {
    resolve_with_fallback_styled(name, CandidateStyle::Hyphenated, lookup)
}

/// As [`resolve_with_fallback`], with an explicit candidate style.
pub fn resolve_with_fallback_styled<T>(
    name: &str,
    style: CandidateStyle,
    mut lookup: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    candidate_ids(name, style)
        .into_iter()
        .find_map(|id| lookup(&id))
}
