//! Identifier normalization.
//!
//! Every upstream table is keyed by a lowercase alphanumeric identifier
//! derived from a display name. `to_id` is total and idempotent: display
//! names that differ only in case, punctuation, or separators collapse to
//! the same identifier.

/// Canonicalize a display name into a lookup identifier.
///
/// Lowercases the input, then strips every character outside `[a-z0-9]`.
/// Hyphens, spaces, apostrophes, and accented characters are removed, not
/// replaced, so `"Mega Charizard-X"` becomes `"megacharizardx"`.
pub fn to_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Uppercase the first letter of each word for display.
///
/// Word boundaries are the start of the string, whitespace, `-`, and `_`,
/// matching how the site renders raw identifiers and dex names.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if at_boundary && c.is_ascii_alphabetic() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = c.is_whitespace() || c == '-' || c == '_';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mega Charizard-X", "megacharizardx")]
    #[case("Giratina-Origin", "giratinaorigin")]
    #[case("Farfetch'd", "farfetchd")]
    #[case("Flabébé", "flabb")]
    #[case("MR. MIME", "mrmime")]
    #[case("", "")]
    #[case("pikachu", "pikachu")]
    fn normalizes_display_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_id(input), expected);
    }

    #[rstest]
    #[case("Mega Charizard-X")]
    #[case("Type: Null")]
    #[case("porygon2")]
    #[case("")]
    fn to_id_is_idempotent(#[case] input: &str) {
        let once = to_id(input);
        assert_eq!(to_id(&once), once);
    }

    #[rstest]
    #[case("giratina-origin", "Giratina-Origin")]
    #[case("mr mime", "Mr Mime")]
    #[case("tapu_koko", "Tapu_Koko")]
    #[case("already Capitalized", "Already Capitalized")]
    #[case("", "")]
    fn capitalizes_each_word(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
