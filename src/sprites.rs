//! Sprite URL construction across sprite sets and fangame overlays.

use schema::{to_id, SpeciesRecord};

pub const FANGAME_SPRITE_HOST: &str = "https://play.pokeathlon.com/sprites/fangame-sprites/";
pub const SHOWDOWN_SPRITE_HOST: &str = "https://play.pokemonshowdown.com/sprites/";

/// Fangames whose species are hosted on the overlay sprite server, in the
/// order their tags are checked.
pub const FANGAMES: [&str; 6] = [
    "Insurgence",
    "Uranium",
    "Infinity",
    "Mariomon",
    "Pokeathlon",
    "Infinite Fusion",
];

/// The same list in identifier form, as it appears in sprite URL paths.
pub const FANGAME_IDS: [&str; 6] = [
    "insurgence",
    "uranium",
    "infinity",
    "mariomon",
    "pokeathlon",
    "infinitefusion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFacing {
    Front,
    Back,
}

/// The fangame a record belongs to, detected from its tags.
pub fn fangame_tag(record: &SpeciesRecord) -> Option<&'static str> {
    FANGAMES
        .iter()
        .copied()
        .find(|fangame| record.tags.iter().any(|tag| tag == fangame))
}

/// Build the sprite URL for a species entry.
///
/// Precedence: fangame overlay hosting (tag-driven) beats the
/// base-species+forme path, which beats the plain name path. Infinite
/// Fusion sprites have no facing directory, and Pokeathlon/Uranium serve
/// gifs instead of pngs.
pub fn sprite_url(record: &SpeciesRecord, facing: SpriteFacing, shiny: bool) -> String {
    let mut sprite_type = match facing {
        SpriteFacing::Front => "front".to_string(),
        SpriteFacing::Back => "back".to_string(),
    };
    if shiny {
        sprite_type.push_str("-shiny");
    }

    if let Some(fangame) = fangame_tag(record) {
        let facing_dir = if fangame == "Infinite Fusion" {
            String::new()
        } else {
            format!("/{}", sprite_type)
        };
        let ext = if fangame == "Pokeathlon" || fangame == "Uranium" {
            ".gif"
        } else {
            ".png"
        };
        return format!(
            "{}{}{}/{}{}",
            FANGAME_SPRITE_HOST,
            to_id(fangame),
            facing_dir,
            to_id(&record.name),
            ext
        );
    }

    let dir = match (facing, shiny) {
        (SpriteFacing::Front, false) => "gen5",
        (SpriteFacing::Front, true) => "gen5-shiny",
        (SpriteFacing::Back, false) => "gen5-back",
        (SpriteFacing::Back, true) => "gen5-back-shiny",
    };
    if let (Some(base), Some(forme)) = (&record.base_species, &record.forme) {
        return format!(
            "{}{}/{}-{}.png",
            SHOWDOWN_SPRITE_HOST,
            dir,
            to_id(base),
            to_id(forme)
        );
    }
    format!("{}{}/{}.png", SHOWDOWN_SPRITE_HOST, dir, to_id(&record.name))
}

/// Extract the fangame identifier from a sprite URL, if it points at the
/// overlay host. This is how the fangame cache classifies entries.
pub fn fangame_id_from_sprite_url(url: &str) -> Option<&'static str> {
    let url = url.to_lowercase();
    let rest = url.split("fangame-sprites/").nth(1)?;
    let id = rest.split('/').next()?;
    FANGAME_IDS.iter().copied().find(|known| *known == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str) -> SpeciesRecord {
        SpeciesRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn plain_name_path() {
        assert_eq!(
            sprite_url(&record("Pikachu"), SpriteFacing::Front, false),
            "https://play.pokemonshowdown.com/sprites/gen5/pikachu.png"
        );
        assert_eq!(
            sprite_url(&record("Pikachu"), SpriteFacing::Back, true),
            "https://play.pokemonshowdown.com/sprites/gen5-back-shiny/pikachu.png"
        );
    }

    #[test]
    fn forme_path_joins_base_species_and_forme() {
        let mut giratina = record("Giratina-Origin");
        giratina.base_species = Some("Giratina".to_string());
        giratina.forme = Some("Origin".to_string());
        assert_eq!(
            sprite_url(&giratina, SpriteFacing::Front, true),
            "https://play.pokemonshowdown.com/sprites/gen5-shiny/giratina-origin.png"
        );
    }

    #[test]
    fn fangame_tag_beats_forme_path() {
        let mut nucleon = record("Nucleon");
        nucleon.base_species = Some("Eevee".to_string());
        nucleon.forme = Some("Nuclear".to_string());
        nucleon.tags = vec!["Uranium".to_string()];
        assert_eq!(
            sprite_url(&nucleon, SpriteFacing::Front, false),
            "https://play.pokeathlon.com/sprites/fangame-sprites/uranium/front/nucleon.gif"
        );
    }

    #[test]
    fn pokeathlon_serves_gifs_insurgence_pngs() {
        let mut entry = record("Delta Charizard");
        entry.tags = vec!["Insurgence".to_string()];
        assert_eq!(
            sprite_url(&entry, SpriteFacing::Back, false),
            "https://play.pokeathlon.com/sprites/fangame-sprites/insurgence/back/deltacharizard.png"
        );
        entry.tags = vec!["Pokeathlon".to_string()];
        assert_eq!(
            sprite_url(&entry, SpriteFacing::Back, false),
            "https://play.pokeathlon.com/sprites/fangame-sprites/pokeathlon/back/deltacharizard.gif"
        );
    }

    #[test]
    fn infinite_fusion_has_no_facing_directory() {
        let mut entry = record("Charmeleon Fusion");
        entry.tags = vec!["Infinite Fusion".to_string()];
        assert_eq!(
            sprite_url(&entry, SpriteFacing::Front, false),
            "https://play.pokeathlon.com/sprites/fangame-sprites/infinitefusion/charmeleonfusion.png"
        );
    }

    #[test]
    fn fangame_id_extraction() {
        assert_eq!(
            fangame_id_from_sprite_url(
                "https://play.pokeathlon.com/sprites/fangame-sprites/uranium/front/nucleon.gif"
            ),
            Some("uranium")
        );
        assert_eq!(
            fangame_id_from_sprite_url("https://play.pokemonshowdown.com/sprites/gen5/pikachu.png"),
            None
        );
    }
}
