//! Level-100 stat computation and stat bar support.

use schema::Stat;

const MAX_IV: u16 = 31;
const MAX_EV: u16 = 252;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nature {
    Minus,
    Neutral,
    Plus,
}

/// Compute a level-100 stat from its base value.
///
/// HP uses the flat formula (with the base-1 rule: a 1-HP base always yields
/// 1, as for Shedinja); other stats apply the nature multiplier with floor
/// arithmetic.
pub fn calc_stat(stat: Stat, base: u16, iv: u16, ev: u16, nature: Nature) -> u16 {
    let core = 2 * base + iv + ev / 4;
    if stat == Stat::Hp {
        if base == 1 {
            return 1;
        }
        core + 110
    } else {
        let multiplier = match nature {
            Nature::Plus => 1.1,
            Nature::Neutral => 1.0,
            Nature::Minus => 0.9,
        };
        ((core + 5) as f64 * multiplier).floor() as u16
    }
}

/// The stat spreads shown in the stat bar tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRange {
    /// HP has no nature or boost variants.
    Hp { min: u16, neutral: u16, max: u16 },
    Battle {
        /// 0 IV, 0 EV, hindering nature.
        min: u16,
        /// 31 IV, 0 EV, neutral nature.
        neutral: u16,
        /// 31 IV, 252 EV, neutral nature.
        max_neutral: u16,
        /// 31 IV, 252 EV, boosting nature.
        max_plus: u16,
    },
}

impl StatRange {
    pub fn for_base(stat: Stat, base: u16) -> StatRange {
        if stat == Stat::Hp {
            StatRange::Hp {
                min: calc_stat(stat, base, 0, 0, Nature::Neutral),
                neutral: calc_stat(stat, base, MAX_IV, 0, Nature::Neutral),
                max: calc_stat(stat, base, MAX_IV, MAX_EV, Nature::Neutral),
            }
        } else {
            StatRange::Battle {
                min: calc_stat(stat, base, 0, 0, Nature::Minus),
                neutral: calc_stat(stat, base, MAX_IV, 0, Nature::Neutral),
                max_neutral: calc_stat(stat, base, MAX_IV, MAX_EV, Nature::Neutral),
                max_plus: calc_stat(stat, base, MAX_IV, MAX_EV, Nature::Plus),
            }
        }
    }
}

/// In-battle stage modifier applied to a computed stat, floor arithmetic.
/// Only the stages the tooltips show are supported.
pub fn boosted(value: u16, stage: i8) -> u16 {
    match stage {
        -1 => value * 2 / 3,
        1 => value * 3 / 2,
        2 => value * 2,
        _ => value,
    }
}

/// The stat bar color gradient: red through green up to 100, green through
/// light blue up to 200, then toward purple.
pub fn stat_color(stat: u16) -> (u8, u8, u8) {
    if stat <= 100 {
        let g = (stat as f64 / 100.0 * 255.0).floor();
        (255, g as u8, 0)
    } else if stat <= 200 {
        let b = ((stat as f64 - 100.0) / 100.0 * 255.0).floor();
        ((255.0 - b) as u8, 255, b as u8)
    } else {
        let purple = (((stat as f64 - 200.0) / 55.0) * 255.0).floor().min(255.0);
        let r = (200.0 - purple / 3.0).clamp(0.0, 255.0);
        let g = (100.0 - purple / 2.0).clamp(0.0, 255.0);
        (r as u8, g as u8, 200)
    }
}
