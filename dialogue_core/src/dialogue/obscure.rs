//! Partial legibility: replacing words a listener cannot follow with
//! foreign-script lookalikes.

use language_rules::{clamp_level, Language, CONNECTOR_GLYPHS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Function words that stay legible at any comprehension.
const FUNCTION_WORDS: [&str; 9] = ["the", "and", "or", "but", "in", "on", "at", "to", "from"];

/// Whether a token is always kept legible.
///
/// Anchors are proper-noun-like (uppercase first character), numeric or
/// otherwise letter-free (`300`, `2,000`, `12:30`), short (three characters
/// or fewer), or common function words.
pub fn is_anchor(token: &str) -> bool {
    let Some(first) = token.chars().next() else {
        return true;
    };

    if first.is_uppercase() {
        return true;
    }
    if !token.chars().any(char::is_alphabetic) {
        return true;
    }
    if token.chars().count() <= 3 {
        return true;
    }

    let bare = token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    FUNCTION_WORDS.contains(&bare.as_str())
}

/// Render `text` as an agent with the given comprehension would read it.
///
/// At or above `legible_threshold` the text is returned unchanged. Otherwise
/// `floor(tokens * comprehension)` tokens stay legible: every anchor, topped
/// up with randomly chosen ordinary tokens if the budget allows. The rest are
/// rewritten by [`foreign_word`]. Tokens are re-joined with single spaces.
pub fn obscure_text(
    text: &str,
    comprehension: f32,
    language: Language,
    legible_threshold: f32,
    connector_chance: f64,
    rng: &mut impl Rng,
) -> String {
    let comprehension = clamp_level(comprehension);
    if comprehension >= legible_threshold {
        return text.to_string();
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let target_legible = (tokens.len() as f32 * comprehension).floor() as usize;

    let mut legible: Vec<bool> = tokens.iter().map(|t| is_anchor(t)).collect();
    let mut ordinary: Vec<usize> = legible
        .iter()
        .enumerate()
        .filter(|(_, keep)| !**keep)
        .map(|(i, _)| i)
        .collect();

    let anchors = tokens.len() - ordinary.len();
    let promote = target_legible.saturating_sub(anchors);
    if promote > 0 {
        ordinary.shuffle(rng);
        for &idx in ordinary.iter().take(promote) {
            legible[idx] = true;
        }
    }

    tokens
        .iter()
        .zip(legible)
        .map(|(token, keep)| {
            if keep {
                (*token).to_string()
            } else {
                foreign_word(token, language, connector_chance, rng)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite a token in the script of `language`.
///
/// The alphabetic character at position `i` becomes
/// `glyphs[(letter_index + i) mod glyphs.len()]`, where `letter_index` is the
/// lowercase character's offset from `'a'`. Anything else (punctuation,
/// digits) passes through in place. With probability `connector_chance` a
/// connector glyph is spliced between two characters of words longer than two.
pub fn foreign_word(
    token: &str,
    language: Language,
    connector_chance: f64,
    rng: &mut impl Rng,
) -> String {
    let glyphs = language.script_style().glyphs();
    let modulus = glyphs.len() as i64;

    let mut pieces: Vec<String> = token
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_alphabetic() {
                let lower = c.to_lowercase().next().unwrap_or(c);
                let index = (lower as i64 - 'a' as i64 + i as i64).rem_euclid(modulus);
                glyphs[index as usize].to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    if connector_chance.is_finite()
        && pieces.len() > 2
        && rng.random_bool(connector_chance.clamp(0.0, 1.0))
    {
        let connector = CONNECTOR_GLYPHS[rng.random_range(0..CONNECTOR_GLYPHS.len())];
        let position = rng.random_range(1..pieces.len());
        pieces.insert(position, connector.to_string());
    }

    pieces.concat()
}
