// In: src/lib.rs

//! Chaosdex Name Resolution & Overlay Engine
//!
//! Resolves Pokémon species and form names against a base pokedex and a
//! chaos-mod override layer: identifier normalization, suffix-stripping
//! fallback, shallow overlay merging, and single-source learnset and tier
//! selection, plus the pure presentation transforms the dex site needs
//! (sprite URLs, stat ranges, listing filters).

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod dex;
pub mod errors;
pub mod fetch;
pub mod learnset;
pub mod overlay;
pub mod report;
pub mod resolver;
pub mod search;
pub mod sprites;
pub mod stats;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `chaosdex` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions.
pub use schema::{
    capitalize,
    to_id,
    AbilityInfo,
    Accuracy,
    BaseStats,
    ChaosTables,
    ItemInfo,
    Learnset,
    LearnsetFileEntry,
    MoveInfo,
    OneOrMany,
    OverrideRecord,
    SpeciesRecord,
    Stat,
    TeambuilderTables,
};

// --- From this crate's modules (`src/`) ---

// The resolution engine.
pub use dex::Dex;
pub use learnset::{resolve_learnset, LearnsetSources};
pub use overlay::{effective_name, resolve_effective, resolve_tier, EffectiveRecord};
pub use resolver::{candidate_ids, resolve_with_fallback, resolve_with_fallback_styled, CandidateStyle};

// Data acquisition.
pub use fetch::{load_dex, DataSources};

// Presentation-support transforms.
pub use search::{is_valid_dex_entry, paginate, search, SearchFilter, PAGE_SIZE};
pub use sprites::{fangame_tag, sprite_url, SpriteFacing};
pub use stats::{boosted, calc_stat, stat_color, Nature, StatRange};

// Crate-specific error and result types.
pub use errors::{DexError, DexResult, FetchError, FetchResult};
