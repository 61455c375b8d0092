//! Exposure Simulator - slow natural learning from contact hours.
//!
//! Related languages an agent already understands speed learning up. Natural
//! learning is capped (comprehension 0.8, speaking 0.6); only formal training
//! goes further, and exposure never lowers a level that training raised.

use language_rules::{clamp_level, AgentId, Language, LanguageProficiency, LearningConfig, WorldTime};
use serde::{Deserialize, Serialize};

use crate::proficiency_store::ProficiencyStore;
use crate::relationship_graph::RelationshipGraph;

/// What a block of exposure changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureOutcome {
    pub language: Language,
    pub hours_added: u32,
    pub total_exposure_hours: u32,
    /// Actual change after caps, never negative.
    pub comprehension_gain: f32,
    pub speaking_gain: f32,
    pub new_comprehension_level: f32,
    /// `1 + relatedness bonus`.
    pub learning_rate_modifier: f32,
}

/// Applies exposure hours to the proficiency store.
#[derive(Debug, Clone, Copy)]
pub struct ExposureSimulator<'a> {
    graph: &'a RelationshipGraph,
    config: &'a LearningConfig,
}

impl<'a> ExposureSimulator<'a> {
    pub fn new(graph: &'a RelationshipGraph, config: &'a LearningConfig) -> Self {
        Self { graph, config }
    }

    /// Sum of `level(L) * bonus(L -> language) * related_bonus_factor` over
    /// every other language the agent knows, counting every edge.
    pub fn relatedness_bonus(&self, store: &ProficiencyStore, agent: AgentId, language: Language) -> f32 {
        store
            .proficiencies(agent)
            .filter(|known| known.language != language)
            .flat_map(|known| {
                self.graph
                    .edges_between(known.language, language)
                    .map(move |edge| known.comprehension_level * edge.comprehension_bonus)
            })
            .sum::<f32>()
            * self.config.related_bonus_factor
    }

    /// Apply `hours` of exposure at `quality` (clamped to `[0.0, 1.0]`).
    ///
    /// Creates the record on first exposure. Zero hours change nothing and
    /// create nothing.
    pub fn simulate(
        &self,
        store: &mut ProficiencyStore,
        agent: AgentId,
        language: Language,
        hours: u32,
        quality: f32,
        now: WorldTime,
    ) -> ExposureOutcome {
        let related = self.relatedness_bonus(store, agent, language);
        let modifier = 1.0 + related;

        let existing = store.get(agent, language).cloned();
        if hours == 0 {
            let (level, total) = existing
                .map(|p| (p.comprehension_level, p.exposure_hours))
                .unwrap_or((0.0, 0));
            return ExposureOutcome {
                language,
                hours_added: 0,
                total_exposure_hours: total,
                comprehension_gain: 0.0,
                speaking_gain: 0.0,
                new_comprehension_level: level,
                learning_rate_modifier: modifier,
            };
        }

        let mut record =
            existing.unwrap_or_else(|| LanguageProficiency::untrained(language).with_acquired_at(now));

        let rate = self.config.base_learning_rate * modifier * clamp_level(quality);
        let comprehension_gain = hours as f32 * rate;
        let speaking_gain = comprehension_gain * self.config.speaking_ratio;

        let old_comprehension = record.comprehension_level;
        let old_speaking = record.speaking_level;

        record.comprehension_level =
            raise_towards_cap(old_comprehension, comprehension_gain, self.config.natural_comprehension_cap);
        record.speaking_level = raise_towards_cap(old_speaking, speaking_gain, self.config.natural_speaking_cap);
        record.exposure_hours = record.exposure_hours.saturating_add(hours);

        let outcome = ExposureOutcome {
            language,
            hours_added: hours,
            total_exposure_hours: record.exposure_hours,
            comprehension_gain: record.comprehension_level - old_comprehension,
            speaking_gain: record.speaking_level - old_speaking,
            new_comprehension_level: record.comprehension_level,
            learning_rate_modifier: modifier,
        };

        tracing::debug!(
            agent = %agent,
            language = %language,
            hours,
            comprehension = outcome.new_comprehension_level,
            modifier,
            "exposure applied"
        );

        store.upsert(agent, language, record);
        outcome
    }
}

/// `min(cap, current + gain)`, but a level already at or past the cap stays put.
fn raise_towards_cap(current: f32, gain: f32, cap: f32) -> f32 {
    if current >= cap {
        current
    } else {
        (current + gain).min(cap)
    }
}
