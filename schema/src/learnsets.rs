use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The moves a species can learn, keyed by move identifier.
///
/// Each entry maps to the acquisition codes the upstream data uses
/// (e.g. `"9L36"` for level-up, `"8M"` for machine). The codes are carried
/// opaquely; resolution never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Learnset(pub BTreeMap<String, Vec<String>>);

impl Learnset {
    pub fn move_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn sources(&self, move_id: &str) -> Option<&[String]> {
        self.0.get(move_id).map(Vec::as_slice)
    }

    pub fn contains(&self, move_id: &str) -> bool {
        self.0.contains_key(move_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Learnset {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Learnset(iter.into_iter().collect())
    }
}

/// One entry of the general learnsets file, which wraps the move table in a
/// `learnset` field. Entries without that field exist and must be skipped
/// during fallback resolution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LearnsetFileEntry {
    pub learnset: Option<Learnset>,
}
