//! Learnset selection across data sources.
//!
//! Learnsets from different sources can describe different move-learning
//! methods for the same species; merging them could fabricate a moveset no
//! source actually defines. Exactly one source is selected per resolution.

use crate::resolver::{resolve_with_fallback_styled, CandidateStyle};
use schema::{to_id, Learnset, LearnsetFileEntry};
use std::collections::HashMap;

/// The candidate learnset sources, in priority order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnsetSources<'a> {
    /// Mod override learnsets (highest priority, exact id only).
    pub override_learnsets: Option<&'a HashMap<String, Learnset>>,
    /// Mod learnsets (exact id only).
    pub mod_learnsets: Option<&'a HashMap<String, Learnset>>,
    /// The general learnsets file, searched with full candidate generation
    /// (hyphenated and collapsed truncations).
    pub general: Option<&'a HashMap<String, LearnsetFileEntry>>,
}

/// Select the learnset for a name, first match wins, no merging.
///
/// `None` means the caller renders an explicit "no movepool data available"
/// state; it is a defined terminal state, not an error.
pub fn resolve_learnset<'a>(name: &str, sources: LearnsetSources<'a>) -> Option<&'a Learnset> {
    let id = to_id(name);
    if let Some(found) = sources.override_learnsets.and_then(|table| table.get(&id)) {
        return Some(found);
    }
    if let Some(found) = sources.mod_learnsets.and_then(|table| table.get(&id)) {
        return Some(found);
    }
    if let Some(general) = sources.general {
        // Entries without a learnset field exist in the general file and do
        // not stop the candidate walk.
        return resolve_with_fallback_styled(name, CandidateStyle::Collapsed, |candidate| {
            general
                .get(candidate)
                .and_then(|entry| entry.learnset.as_ref())
        });
    }
    None
}
