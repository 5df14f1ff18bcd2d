use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const NO_DESCRIPTION: &str = "No description.";

/// Move accuracy: either a percentage or "always hits" (the upstream JSON
/// stores the latter as literal `true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    Percent(u16),
    AlwaysHits(bool),
}

impl Default for Accuracy {
    fn default() -> Self {
        Accuracy::AlwaysHits(true)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accuracy::Percent(value) => write!(f, "{}", value),
            Accuracy::AlwaysHits(_) => write!(f, "—"),
        }
    }
}

/// Display metadata for one move. Presentation only; resolution never
/// consults this table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoveInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: String,
    pub base_power: Option<u16>,
    pub accuracy: Accuracy,
    pub pp: Option<u16>,
    pub priority: i8,
    pub flags: BTreeMap<String, u8>,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
}

impl MoveInfo {
    pub fn description(&self) -> &str {
        self.short_desc
            .as_deref()
            .or(self.desc.as_deref())
            .unwrap_or(NO_DESCRIPTION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AbilityInfo {
    pub name: String,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
}

impl AbilityInfo {
    pub fn description(&self) -> &str {
        self.desc
            .as_deref()
            .or(self.short_desc.as_deref())
            .unwrap_or(NO_DESCRIPTION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemInfo {
    pub name: String,
    pub desc: Option<String>,
    pub short_desc: Option<String>,
}

impl ItemInfo {
    pub fn description(&self) -> &str {
        self.desc
            .as_deref()
            .or(self.short_desc.as_deref())
            .unwrap_or(NO_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_accuracy_parses_both_shapes() {
        let swift: MoveInfo =
            serde_json::from_str(r#"{"name": "Swift", "accuracy": true}"#).unwrap();
        let thunder: MoveInfo =
            serde_json::from_str(r#"{"name": "Thunder", "accuracy": 70}"#).unwrap();
        assert_eq!(swift.accuracy, Accuracy::AlwaysHits(true));
        assert_eq!(swift.accuracy.to_string(), "—");
        assert_eq!(thunder.accuracy, Accuracy::Percent(70));
        assert_eq!(thunder.accuracy.to_string(), "70");
    }

    #[test]
    fn move_info_parses_upstream_fields() {
        let json = r#"{
            "name": "Flamethrower",
            "type": "Fire",
            "category": "Special",
            "basePower": 90,
            "accuracy": 100,
            "pp": 15,
            "flags": {"protect": 1, "mirror": 1},
            "shortDesc": "10% chance to burn the target."
        }"#;
        let info: MoveInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.move_type, "Fire");
        assert_eq!(info.base_power, Some(90));
        assert_eq!(info.priority, 0);
        assert!(info.flags.contains_key("protect"));
        assert_eq!(info.description(), "10% chance to burn the target.");
    }

    #[test]
    fn description_falls_back_when_absent() {
        let info = AbilityInfo {
            name: "Mystery".to_string(),
            ..Default::default()
        };
        assert_eq!(info.description(), "No description.");
    }
}
