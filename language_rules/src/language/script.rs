//! Fictional script styles used to render words a listener cannot read.

use serde::{Deserialize, Serialize};

/// Glyph families for unreadable text.
///
/// | style      | look                          | languages                                   |
/// |------------|-------------------------------|---------------------------------------------|
/// | `Elvish`   | flowing, Tibetan-derived      | elvish, sylvan, gnomish, halfling           |
/// | `Draconic` | angular runes                 | draconic, abyssal, infernal, goblin, orcish |
/// | `Ancient`  | cuneiform wedges              | the ancients, giant, dwarven                |
/// | `Mystic`   | geometric shapes              | everything else                             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStyle {
    Elvish,
    Draconic,
    Ancient,
    Mystic,
}

impl ScriptStyle {
    /// The glyph table for this style. Every table is non-empty.
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            ScriptStyle::Elvish => ELVISH_GLYPHS,
            ScriptStyle::Draconic => DRACONIC_GLYPHS,
            ScriptStyle::Ancient => ANCIENT_GLYPHS,
            ScriptStyle::Mystic => MYSTIC_GLYPHS,
        }
    }
}

/// Separators occasionally spliced into foreign words.
pub const CONNECTOR_GLYPHS: &[&str] = &["·", "‧", "⁞", "᭟", "᭞"];

const ELVISH_GLYPHS: &[&str] = &[
    "ཀ", "ཁ", "ག", "གྷ", "ང", "ཅ", "ཆ", "ཇ", "ཉ", "ཏ", "ཐ", "ད", "དྷ", "ན", "པ", "ཕ", "བ", "བྷ", "མ", "ཙ",
    "ཚ", "ཛ", "ཛྷ", "ཝ", "ཞ", "ཟ", "འ", "ཡ", "ར", "ལ", "ཤ", "ས", "ཧ", "ཨ", "ི", "ུ", "ེ", "ོ", "ྭ", "ྱ",
];

const DRACONIC_GLYPHS: &[&str] = &[
    "ᚠ", "ᚢ", "ᚦ", "ᚨ", "ᚱ", "ᚲ", "ᚷ", "ᚹ", "ᚺ", "ᚾ", "ᛁ", "ᛃ", "ᛇ", "ᛈ", "ᛉ", "ᛊ", "ᛏ", "ᛒ", "ᛖ", "ᛗ",
    "ᛚ", "ᛜ", "ᛝ", "ᛟ", "ᛞ", "ᚤ", "ᚣ", "ᚧ", "ᚥ", "ᚦ", "ᚩ", "ᚪ", "ᚫ", "ᚬ", "ᚭ", "ᚮ", "ᚯ", "ᚰ", "ᚱ", "ᚲ",
];

const ANCIENT_GLYPHS: &[&str] = &[
    "𒀀", "𒀁", "𒀂", "𒀃", "𒀄", "𒀅", "𒀆", "𒀇", "𒀈", "𒀉", "𒀊", "𒀋", "𒀌", "𒀍", "𒀎", "𒀏", "𒀐", "𒀑", "𒀒", "𒀓",
    "𒀔", "𒀕", "𒀖", "𒀗", "𒀘", "𒀙", "𒀚", "𒀛", "𒀜", "𒀝", "𒀞", "𒀟", "𒀠", "𒀡", "𒀢", "𒀣", "𒀤", "𒀥", "𒀦", "𒀧",
];

const MYSTIC_GLYPHS: &[&str] = &[
    "◊", "◈", "◉", "◎", "○", "◐", "◑", "◒", "◓", "◔", "◕", "◖", "◗", "◘", "◙", "◚", "◛", "◜", "◝", "◞",
    "◟", "◠", "◡", "◢", "◣", "◤", "◥", "◦", "◧", "◨", "◩", "◪", "◫", "◬", "◭", "◮", "◯", "◰", "◱", "◲",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_tables_have_forty_entries() {
        for style in [
            ScriptStyle::Elvish,
            ScriptStyle::Draconic,
            ScriptStyle::Ancient,
            ScriptStyle::Mystic,
        ] {
            assert_eq!(style.glyphs().len(), 40, "{style:?}");
        }
    }

    #[test]
    fn test_glyphs_are_not_latin() {
        for glyph in ScriptStyle::Mystic.glyphs() {
            assert!(!glyph.chars().any(|c| c.is_ascii_alphanumeric()));
        }
    }
}
