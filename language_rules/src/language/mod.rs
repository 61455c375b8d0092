//! The language catalog: languages, families and relationship kinds.

mod script;

pub use script::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RulesError;

/// Language family classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFamily {
    /// Root languages that modern tongues descend from.
    Ancient,
    CommonFamily,
    ElderFamily,
    EasternFamily,
    /// Unrelated languages with no family bonus.
    ExoticFamily,
    Planar,
    /// Shallow mixed languages used between strangers.
    TradePidgin,
}

/// Every language known to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    // Ancient roots
    AncientImperial,
    OldCelestial,
    Primordial,

    // Common family
    Common,
    Elvish,
    Halfling,
    Gnomish,

    // Elder family
    Dwarven,
    Orcish,
    Giant,

    // Eastern family
    Draconic,
    Goblin,

    // Exotic
    Sylvan,
    Druidic,

    // Planar
    Celestial,
    Abyssal,
    Infernal,

    // Trade pidgins
    TradeCommon,
    SeaCant,
}

impl Language {
    /// The full catalog in declaration order.
    pub const ALL: [Language; 19] = [
        Language::AncientImperial,
        Language::OldCelestial,
        Language::Primordial,
        Language::Common,
        Language::Elvish,
        Language::Halfling,
        Language::Gnomish,
        Language::Dwarven,
        Language::Orcish,
        Language::Giant,
        Language::Draconic,
        Language::Goblin,
        Language::Sylvan,
        Language::Druidic,
        Language::Celestial,
        Language::Abyssal,
        Language::Infernal,
        Language::TradeCommon,
        Language::SeaCant,
    ];

    /// The family this language belongs to.
    pub fn family(self) -> LanguageFamily {
        match self {
            Language::AncientImperial | Language::OldCelestial | Language::Primordial => {
                LanguageFamily::Ancient
            }
            Language::Common | Language::Elvish | Language::Halfling | Language::Gnomish => {
                LanguageFamily::CommonFamily
            }
            Language::Dwarven | Language::Orcish | Language::Giant => LanguageFamily::ElderFamily,
            Language::Draconic | Language::Goblin => LanguageFamily::EasternFamily,
            Language::Sylvan | Language::Druidic => LanguageFamily::ExoticFamily,
            Language::Celestial | Language::Abyssal | Language::Infernal => LanguageFamily::Planar,
            Language::TradeCommon | Language::SeaCant => LanguageFamily::TradePidgin,
        }
    }

    /// Any language that is not an ancient root.
    pub fn is_modern(self) -> bool {
        self.family() != LanguageFamily::Ancient
    }

    pub fn is_trade_pidgin(self) -> bool {
        self.family() == LanguageFamily::TradePidgin
    }

    /// Snake-case catalog name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::AncientImperial => "ancient_imperial",
            Language::OldCelestial => "old_celestial",
            Language::Primordial => "primordial",
            Language::Common => "common",
            Language::Elvish => "elvish",
            Language::Halfling => "halfling",
            Language::Gnomish => "gnomish",
            Language::Dwarven => "dwarven",
            Language::Orcish => "orcish",
            Language::Giant => "giant",
            Language::Draconic => "draconic",
            Language::Goblin => "goblin",
            Language::Sylvan => "sylvan",
            Language::Druidic => "druidic",
            Language::Celestial => "celestial",
            Language::Abyssal => "abyssal",
            Language::Infernal => "infernal",
            Language::TradeCommon => "trade_common",
            Language::SeaCant => "sea_cant",
        }
    }

    /// The glyph set used when this language is rendered as unreadable text.
    pub fn script_style(self) -> ScriptStyle {
        match self {
            Language::Elvish | Language::Sylvan | Language::Gnomish | Language::Halfling => {
                ScriptStyle::Elvish
            }
            Language::Draconic
            | Language::Abyssal
            | Language::Infernal
            | Language::Goblin
            | Language::Orcish => ScriptStyle::Draconic,
            Language::AncientImperial
            | Language::OldCelestial
            | Language::Primordial
            | Language::Giant
            | Language::Dwarven => ScriptStyle::Ancient,
            Language::Celestial
            | Language::Druidic
            | Language::Common
            | Language::TradeCommon
            | Language::SeaCant => ScriptStyle::Mystic,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == needle)
            .ok_or_else(|| RulesError::UnknownLanguage(s.to_string()))
    }
}

/// How two languages in the relationship graph are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Siblings within one family.
    Family,
    /// An ancient root feeding a modern descendant.
    Derived,
    /// Historical contact across families.
    Influenced,
    /// A trade pidgin borrowing from a full language.
    Pidgin,
}

impl RelationshipType {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::Family => "family",
            RelationshipType::Derived => "derived",
            RelationshipType::Influenced => "influenced",
            RelationshipType::Pidgin => "pidgin",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
