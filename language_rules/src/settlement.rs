//! Settlement language profiles.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::entities::{clamp_level, SettlementId};
use crate::error::RulesError;
use crate::language::Language;
use crate::world_time::WorldTime;

/// How exposed a settlement is to outside speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CulturalBackground {
    Isolated,
    Crossroads,
    #[default]
    Mixed,
}

impl CulturalBackground {
    /// Shift applied to the size-derived language diversity.
    pub fn diversity_modifier(self) -> f32 {
        match self {
            CulturalBackground::Isolated => -0.3,
            CulturalBackground::Crossroads => 0.4,
            CulturalBackground::Mixed => 0.0,
        }
    }
}

impl FromStr for CulturalBackground {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isolated" => Ok(CulturalBackground::Isolated),
            "crossroads" => Ok(CulturalBackground::Crossroads),
            "mixed" => Ok(CulturalBackground::Mixed),
            _ => Err(RulesError::UnknownCulturalBackground(s.to_string())),
        }
    }
}

/// A noteworthy shift in how a settlement speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticChange {
    pub language: Language,
    pub description: String,
    pub recorded_at: WorldTime,

    /// Free-form payload for the systems that raised the change.
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
}

impl LinguisticChange {
    pub fn new(language: Language, description: impl Into<String>, recorded_at: WorldTime) -> Self {
        Self {
            language,
            description: description.into(),
            recorded_at,
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }
}

/// How a settlement's population speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementLanguageProfile {
    pub settlement_id: SettlementId,
    pub primary_language: Language,

    /// Ordered by prevalence, most common first.
    #[serde(default)]
    pub secondary_languages: Vec<Language>,
    #[serde(default)]
    pub trade_languages: Vec<Language>,

    /// 0.0 = homogeneous, 1.0 = very mixed.
    pub language_diversity: f32,
    /// 0.0 = standard speech, 1.0 = thick local dialect.
    pub dialect_strength: f32,
    /// Fraction of residents who can read and write.
    pub literacy_rate: f32,

    /// Dead or ancient languages still in ceremonial use.
    #[serde(default)]
    pub historical_languages: Vec<Language>,
    #[serde(default)]
    pub recent_linguistic_changes: Vec<LinguisticChange>,
}

impl SettlementLanguageProfile {
    /// A small homogeneous settlement speaking only `primary_language`.
    pub fn new(settlement_id: SettlementId, primary_language: Language) -> Self {
        Self {
            settlement_id,
            primary_language,
            secondary_languages: Vec::new(),
            trade_languages: Vec::new(),
            language_diversity: 0.2,
            dialect_strength: 0.5,
            literacy_rate: 0.4,
            historical_languages: Vec::new(),
            recent_linguistic_changes: Vec::new(),
        }
    }

    pub fn with_secondary_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        let primary = self.primary_language;
        self.secondary_languages = languages.into_iter().filter(|l| *l != primary).collect();
        self
    }

    pub fn with_trade_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.trade_languages = languages.into_iter().collect();
        self
    }

    pub fn with_diversity(mut self, diversity: f32) -> Self {
        self.language_diversity = clamp_level(diversity);
        self
    }

    pub fn with_dialect_strength(mut self, strength: f32) -> Self {
        self.dialect_strength = clamp_level(strength);
        self
    }

    pub fn with_literacy_rate(mut self, rate: f32) -> Self {
        self.literacy_rate = clamp_level(rate);
        self
    }

    pub fn with_historical_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.historical_languages = languages.into_iter().collect();
        self
    }

    /// Whether the language is heard in this settlement in any role.
    pub fn speaks(&self, language: Language) -> bool {
        self.primary_language == language
            || self.secondary_languages.contains(&language)
            || self.trade_languages.contains(&language)
    }

    /// Append a change to the settlement's linguistic history.
    pub fn record_change(&mut self, change: LinguisticChange) {
        self.recent_linguistic_changes.push(change);
    }

    /// Pick the language a newly generated resident grows up speaking.
    ///
    /// The primary language wins with probability `1 - language_diversity`;
    /// otherwise a secondary language is drawn uniformly.
    pub fn resident_language(&self, rng: &mut impl Rng) -> Language {
        if self.secondary_languages.is_empty() {
            return self.primary_language;
        }

        let roll: f32 = rng.random();
        if roll >= self.language_diversity {
            return self.primary_language;
        }

        let idx = rng.random_range(0..self.secondary_languages.len());
        self.secondary_languages[idx]
    }
}
