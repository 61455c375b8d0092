//! Tuning constants for comprehension, dialogue, resolution and learning.
//!
//! Every field has a default, so a TOML file only needs to name the values it
//! overrides:
//!
//! ```toml
//! [dialogue]
//! context_clue_bonus = 0.1
//!
//! [learning]
//! natural_comprehension_cap = 0.75
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RulesError, RulesResult};

/// Top-level configuration for the language engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub comprehension: ComprehensionConfig,

    #[serde(default)]
    pub dialogue: DialogueConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub learning: LearningConfig,
}

impl LanguageConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> RulesResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject non-finite values, levels and probabilities outside
    /// `[0.0, 1.0]`, and negative rates or penalties.
    pub fn validate(&self) -> RulesResult<()> {
        let c = &self.comprehension;
        non_negative("comprehension.direct_complexity_penalty", c.direct_complexity_penalty)?;
        non_negative("comprehension.bridged_complexity_penalty", c.bridged_complexity_penalty)?;

        let d = &self.dialogue;
        unit("dialogue.context_clue_bonus", d.context_clue_bonus)?;
        unit("dialogue.emotional_bonus", d.emotional_bonus)?;
        unit("dialogue.response_threshold", d.response_threshold)?;
        unit("dialogue.fluency_threshold", d.fluency_threshold)?;
        unit("dialogue.legible_threshold", d.legible_threshold)?;
        unit_f64("dialogue.connector_chance", d.connector_chance)?;
        unit("dialogue.text_complexity", d.text_complexity)?;

        let r = &self.resolver;
        unit("resolver.min_comprehension", r.min_comprehension)?;
        unit("resolver.trade_bonus", r.trade_bonus)?;
        unit("resolver.preferred_trade_bonus", r.preferred_trade_bonus)?;
        unit("resolver.common_fallback_score", r.common_fallback_score)?;
        unit("resolver.pidgin_fallback_score", r.pidgin_fallback_score)?;
        unit("resolver.bridge_text_complexity", r.bridge_text_complexity)?;

        let l = &self.learning;
        non_negative("learning.base_learning_rate", l.base_learning_rate)?;
        non_negative("learning.related_bonus_factor", l.related_bonus_factor)?;
        unit("learning.natural_comprehension_cap", l.natural_comprehension_cap)?;
        unit("learning.natural_speaking_cap", l.natural_speaking_cap)?;
        non_negative("learning.speaking_ratio", l.speaking_ratio)?;

        Ok(())
    }
}

fn unit(field: &'static str, value: f32) -> RulesResult<()> {
    unit_f64(field, value as f64)
}

fn unit_f64(field: &'static str, value: f64) -> RulesResult<()> {
    if !value.is_finite() {
        return Err(RulesError::InvalidConfig { field, value, reason: "must be finite" });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(RulesError::InvalidConfig { field, value, reason: "must be within [0, 1]" });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> RulesResult<()> {
    let value = value as f64;
    if !value.is_finite() {
        return Err(RulesError::InvalidConfig { field, value, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(RulesError::InvalidConfig { field, value, reason: "must not be negative" });
    }
    Ok(())
}

/// Comprehension scoring penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComprehensionConfig {
    /// Complexity penalty factor for a language the agent knows directly.
    pub direct_complexity_penalty: f32,
    /// Steeper penalty factor when understanding comes through a related language.
    pub bridged_complexity_penalty: f32,
}

impl Default for ComprehensionConfig {
    fn default() -> Self {
        Self {
            direct_complexity_penalty: 0.3,
            bridged_complexity_penalty: 0.5,
        }
    }
}

/// Dialogue processing thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Added when gestures and expressions are visible.
    pub context_clue_bonus: f32,
    /// Tone is easier to read than words by this much.
    pub emotional_bonus: f32,
    /// Minimum comprehension needed to attempt a reply.
    pub response_threshold: f32,
    /// Below this the listener can still learn from the exchange.
    pub fluency_threshold: f32,
    /// At or above this the text is shown untouched.
    pub legible_threshold: f32,
    /// Chance of splicing a connector glyph into a foreign word.
    pub connector_chance: f64,
    /// Complexity assumed for conversational dialogue.
    pub text_complexity: f32,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            context_clue_bonus: 0.15,
            emotional_bonus: 0.3,
            response_threshold: 0.3,
            fluency_threshold: 0.9,
            legible_threshold: 0.95,
            connector_chance: 0.2,
            text_complexity: 0.5,
        }
    }
}

/// Common-language resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub min_comprehension: f32,
    pub prefer_trade_languages: bool,
    /// Bonus for a shared trade pidgin.
    pub trade_bonus: f32,
    /// Extra bonus for a shared trade pidgin when trade languages are preferred.
    pub preferred_trade_bonus: f32,
    /// Comprehension assumed for the universal Common fallback.
    pub common_fallback_score: f32,
    /// Comprehension assumed for the Trade-Common last resort.
    pub pidgin_fallback_score: f32,
    /// Complexity used when testing bridged pairs.
    pub bridge_text_complexity: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_comprehension: 0.3,
            prefer_trade_languages: true,
            trade_bonus: 0.1,
            preferred_trade_bonus: 0.2,
            common_fallback_score: 0.6,
            pidgin_fallback_score: 0.4,
            bridge_text_complexity: 0.0,
        }
    }
}

/// Natural learning through exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Comprehension gained per hour of perfect-quality exposure.
    pub base_learning_rate: f32,
    /// Weight applied to related-language bonuses when speeding up learning.
    pub related_bonus_factor: f32,
    pub natural_comprehension_cap: f32,
    pub natural_speaking_cap: f32,
    /// Speaking improves at this fraction of the comprehension rate.
    pub speaking_ratio: f32,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            base_learning_rate: 0.001,
            related_bonus_factor: 0.5,
            natural_comprehension_cap: 0.8,
            natural_speaking_cap: 0.6,
            speaking_ratio: 0.7,
        }
    }
}
