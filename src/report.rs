//! Plain-text species report, the demo binary's rendering of an analysis
//! page: effective record, tier, stats with ranges, movepool, sibling
//! forms, and evolution links.

use crate::dex::Dex;
use crate::sprites::{fangame_tag, sprite_url, SpriteFacing};
use crate::stats::{stat_color, StatRange};
use schema::{capitalize, BaseStats, Stat};
use std::fmt::Write;
use strum::IntoEnumIterator;

/// How many movepool entries the report prints before truncating.
const MOVEPOOL_PREVIEW: usize = 12;

/// Render the full report for a query name, or `None` when the name does
/// not resolve anywhere.
pub fn species_report(dex: &Dex, query: &str) -> Option<String> {
    let effective = dex.effective(query)?;
    let record = &effective.species;
    let mut out = String::new();

    let _ = writeln!(out, "{}", capitalize(&effective.effective_name));
    let _ = writeln!(out, "--------------------");
    if let Some(tier) = dex.tier(&effective.effective_name) {
        let _ = writeln!(out, "Tier: {}", tier);
    }
    let types: Vec<String> = record.types.iter().map(|t| capitalize(t)).collect();
    let _ = writeln!(out, "Type(s): {}", types.join(" / "));
    if record.abilities.is_empty() {
        let _ = writeln!(out, "Abilities: No Ability");
    } else {
        let _ = writeln!(out, "Abilities: {}", record.abilities.join(", "));
    }
    if let Some(fangame) = fangame_tag(record) {
        let _ = writeln!(out, "From: {}", fangame);
    }
    let _ = writeln!(out, "Sprite: {}", sprite_url(record, SpriteFacing::Front, false));

    if let Some(base_stats) = &record.base_stats {
        let _ = writeln!(out, "--------------------");
        let _ = writeln!(out, "Base Stats:");
        for stat in Stat::iter() {
            write_stat_line(&mut out, stat, base_stats);
        }
        let _ = writeln!(out, "{:<12} : {}", "Total", base_stats.total());
    }

    let _ = writeln!(out, "--------------------");
    match dex.learnset(&effective.effective_name) {
        Some(learnset) => {
            let _ = writeln!(out, "Movepool ({} moves):", learnset.len());
            for move_id in learnset.move_ids().take(MOVEPOOL_PREVIEW) {
                match dex.move_info(move_id) {
                    Some(info) => {
                        let power = info
                            .base_power
                            .map(|p| p.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        let _ = writeln!(
                            out,
                            "  {} [{}] Power: {} Accuracy: {} PP: {}",
                            info.name,
                            info.move_type,
                            power,
                            info.accuracy,
                            info.pp.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
                        );
                    }
                    None => {
                        let _ = writeln!(out, "  {}", capitalize(&move_id.replace('-', " ")));
                    }
                }
            }
            if learnset.len() > MOVEPOOL_PREVIEW {
                let _ = writeln!(out, "  ... and {} more", learnset.len() - MOVEPOOL_PREVIEW);
            }
        }
        None => {
            let _ = writeln!(out, "No movepool data available.");
        }
    }

    let forms = dex.special_forms(record);
    if !forms.is_empty() {
        let _ = writeln!(out, "--------------------");
        let _ = writeln!(out, "Special forms:");
        for form in &forms {
            match &form.required_item {
                Some(item) => {
                    let _ = writeln!(out, "  {} (requires {})", form.name, item);
                }
                None => {
                    let _ = writeln!(out, "  {}", form.name);
                }
            }
        }
    }

    if record.prevo.is_some() || !record.evos.is_empty() {
        let _ = writeln!(out, "--------------------");
        if let Some(prevo) = &record.prevo {
            let _ = writeln!(out, "Evolves from: {}", capitalize(prevo));
        }
        for evo in &record.evos {
            let _ = writeln!(out, "Evolves into: {}", capitalize(evo));
        }
    }

    Some(out)
}

fn write_stat_line(out: &mut String, stat: Stat, base_stats: &BaseStats) {
    let value = base_stats.get(stat);
    let (r, g, b) = stat_color(value);
    let range = match StatRange::for_base(stat, value) {
        StatRange::Hp { min, neutral, max } => {
            format!("min {} / neutral {} / max {}", min, neutral, max)
        }
        StatRange::Battle {
            min,
            neutral,
            max_neutral,
            max_plus,
        } => format!(
            "min {} / neutral {} / max {} (+{})",
            min, neutral, max_neutral, max_plus
        ),
    };
    let _ = writeln!(
        out,
        "{:<12} : {:>3}  rgb({},{},{})  {}",
        stat.label(),
        value,
        r,
        g,
        b,
        range
    );
}
