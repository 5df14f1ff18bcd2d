// Chaosdex Schema - shared data definitions
// This crate contains the plain-data types ingested from the upstream dex
// JSON (pokedex, teambuilder tables, learnsets, move/ability/item metadata)
// together with the identifier helpers every table is keyed by.

// Re-export the main types
pub use ident::*;
pub use learnsets::*;
pub use metadata::*;
pub use species::*;
pub use tables::*;

pub mod ident;
pub mod learnsets;
pub mod metadata;
pub mod species;
pub mod tables;
