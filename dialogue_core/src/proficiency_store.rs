//! Proficiency Store - per-agent language records.
//!
//! Each agent owns an independent map `language -> proficiency`. Records are
//! never removed, only upserted, and `upsert` is the single place where
//! out-of-range levels are corrected.

use language_rules::{clamp_level, AgentId, Language, LanguageProficiency, WorldTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Languages handed out to fill starting slots not covered by a background.
pub const DEFAULT_LANGUAGE_POOL: [Language; 4] = [
    Language::Elvish,
    Language::Dwarven,
    Language::Halfling,
    Language::TradeCommon,
];

/// Score at which characters start earning bonus languages.
const BONUS_LANGUAGE_BASELINE: i32 = 12;

/// All agents' language records.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProficiencyStore {
    agents: HashMap<AgentId, BTreeMap<Language, LanguageProficiency>>,
}

impl ProficiencyStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an agent's record for one language.
    pub fn get(&self, agent: AgentId, language: Language) -> Option<&LanguageProficiency> {
        self.agents.get(&agent).and_then(|langs| langs.get(&language))
    }

    /// Insert or replace an agent's record for `language`.
    ///
    /// The stored record is keyed by `language` regardless of the record's own
    /// `language` field, and every level is clamped into `[0.0, 1.0]`.
    pub fn upsert(&mut self, agent: AgentId, language: Language, proficiency: LanguageProficiency) {
        let mut proficiency = proficiency.clamped();
        proficiency.language = language;
        self.agents
            .entry(agent)
            .or_default()
            .insert(language, proficiency);
    }

    /// An agent's records in catalog order, or `None` for an unknown agent.
    pub fn languages_of(
        &self,
        agent: AgentId,
    ) -> Option<&BTreeMap<Language, LanguageProficiency>> {
        self.agents.get(&agent)
    }

    /// Iterate over an agent's records; empty for an unknown agent.
    pub fn proficiencies(&self, agent: AgentId) -> impl Iterator<Item = &LanguageProficiency> {
        self.agents.get(&agent).into_iter().flat_map(|langs| langs.values())
    }

    /// Whether the agent has at least one record.
    pub fn has_agent(&self, agent: AgentId) -> bool {
        self.agents.get(&agent).is_some_and(|langs| !langs.is_empty())
    }

    /// Comprehension level, or 0.0 if the agent has no record.
    pub fn comprehension(&self, agent: AgentId, language: Language) -> f32 {
        self.get(agent, language)
            .map(|p| p.comprehension_level)
            .unwrap_or(0.0)
    }

    /// Number of agents with records.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Grant the languages a new character starts with.
    ///
    /// Everyone speaks Common natively. A determiner score (usually
    /// intelligence) above 12 earns one bonus language per two points. Bonus
    /// slots go to `background_languages` first, then to
    /// [`DEFAULT_LANGUAGE_POOL`]. Languages already held are skipped without
    /// spending a slot.
    pub fn initialize_starting_languages(
        &mut self,
        agent: AgentId,
        determiner_score: i32,
        background_languages: &[Language],
        now: WorldTime,
    ) -> Vec<LanguageProficiency> {
        let mut granted = vec![LanguageProficiency::native(Language::Common).with_acquired_at(now)];

        let mut remaining = bonus_language_count(determiner_score);

        for language in background_languages {
            if remaining == 0 {
                break;
            }
            if granted.iter().any(|p| p.language == *language) {
                continue;
            }
            granted.push(
                LanguageProficiency::new(*language, 0.8, 0.8, 0.5)
                    .with_formal_training(true)
                    .with_acquired_at(now),
            );
            remaining -= 1;
        }

        for language in DEFAULT_LANGUAGE_POOL {
            if remaining == 0 {
                break;
            }
            if granted.iter().any(|p| p.language == language) {
                continue;
            }
            granted.push(LanguageProficiency::new(language, 0.6, 0.6, 0.3).with_acquired_at(now));
            remaining -= 1;
        }

        for proficiency in &granted {
            self.upsert(agent, proficiency.language, proficiency.clone());
        }

        tracing::info!(
            agent = %agent,
            determiner_score,
            languages = ?granted.iter().map(|p| p.language.as_str()).collect::<Vec<_>>(),
            "granted starting languages"
        );

        granted
    }

    /// Apply a formal training grant.
    ///
    /// Each level is raised to at least the granted value; formal training is
    /// the only way past the natural learning caps and may reach 1.0.
    pub fn grant_formal_training(
        &mut self,
        agent: AgentId,
        language: Language,
        comprehension: f32,
        speaking: f32,
        literacy: f32,
        now: WorldTime,
    ) -> LanguageProficiency {
        let mut record = self
            .get(agent, language)
            .cloned()
            .unwrap_or_else(|| LanguageProficiency::untrained(language).with_acquired_at(now));

        record.comprehension_level = record.comprehension_level.max(clamp_level(comprehension));
        record.speaking_level = record.speaking_level.max(clamp_level(speaking));
        record.literacy_level = record.literacy_level.max(clamp_level(literacy));
        record.formal_training = true;

        self.upsert(agent, language, record.clone());
        record
    }
}

/// Bonus language slots for a determiner score: `max(0, floor((score - 12) / 2))`.
pub fn bonus_language_count(determiner_score: i32) -> usize {
    let above = determiner_score.saturating_sub(BONUS_LANGUAGE_BASELINE);
    if above <= 0 {
        0
    } else {
        (above / 2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_language_count() {
        assert_eq!(bonus_language_count(8), 0);
        assert_eq!(bonus_language_count(12), 0);
        assert_eq!(bonus_language_count(13), 0);
        assert_eq!(bonus_language_count(14), 1);
        assert_eq!(bonus_language_count(17), 2);
        assert_eq!(bonus_language_count(20), 4);
        assert_eq!(bonus_language_count(i32::MIN), 0);
    }

    #[test]
    fn test_upsert_clamps() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        let mut wild = LanguageProficiency::new(Language::Orcish, 0.5, 0.5, 0.5);
        wild.comprehension_level = 2.5;
        wild.speaking_level = -3.0;
        store.upsert(agent, Language::Orcish, wild);

        let stored = store.get(agent, Language::Orcish).unwrap();
        assert_eq!(stored.comprehension_level, 1.0);
        assert_eq!(stored.speaking_level, 0.0);
    }

    #[test]
    fn test_upsert_keys_by_language_argument() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        store.upsert(agent, Language::Giant, LanguageProficiency::new(Language::Orcish, 0.4, 0.2, 0.0));

        assert!(store.get(agent, Language::Orcish).is_none());
        assert_eq!(store.get(agent, Language::Giant).unwrap().language, Language::Giant);
    }

    #[test]
    fn test_agents_are_independent() {
        let mut store = ProficiencyStore::new();
        let a = AgentId::new();
        let b = AgentId::new();

        store.upsert(a, Language::Elvish, LanguageProficiency::new(Language::Elvish, 0.9, 0.9, 0.9));

        assert!(store.has_agent(a));
        assert!(!store.has_agent(b));
        assert!(store.get(b, Language::Elvish).is_none());
        assert_eq!(store.proficiencies(b).count(), 0);
        assert_eq!(store.comprehension(b, Language::Elvish), 0.0);
        assert_eq!(store.agent_count(), 1);
    }

    #[test]
    fn test_average_character_only_speaks_common() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        let granted = store.initialize_starting_languages(agent, 10, &[Language::Elvish], WorldTime::default());

        assert_eq!(granted.len(), 1);
        let common = store.get(agent, Language::Common).unwrap();
        assert_eq!(common.comprehension_level, 1.0);
        assert_eq!(common.speaking_level, 1.0);
        assert!((common.literacy_level - 0.8).abs() < f32::EPSILON);
        assert!(common.formal_training);
    }

    #[test]
    fn test_background_languages_fill_first() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        // 16 -> two bonus slots, both used by the background.
        let granted = store.initialize_starting_languages(
            agent,
            16,
            &[Language::Draconic, Language::Celestial, Language::Infernal],
            WorldTime::default(),
        );

        let langs: Vec<_> = granted.iter().map(|p| p.language).collect();
        assert_eq!(langs, vec![Language::Common, Language::Draconic, Language::Celestial]);

        let draconic = store.get(agent, Language::Draconic).unwrap();
        assert!((draconic.comprehension_level - 0.8).abs() < f32::EPSILON);
        assert!((draconic.literacy_level - 0.5).abs() < f32::EPSILON);
        assert!(draconic.formal_training);
        assert!(store.get(agent, Language::Infernal).is_none());
    }

    #[test]
    fn test_default_pool_fills_remaining_slots() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        // 18 -> three slots: one background, two from the pool (elvish is skipped
        // because the background already granted it).
        let granted = store.initialize_starting_languages(
            agent,
            18,
            &[Language::Elvish],
            WorldTime::default(),
        );

        let langs: Vec<_> = granted.iter().map(|p| p.language).collect();
        assert_eq!(
            langs,
            vec![Language::Common, Language::Elvish, Language::Dwarven, Language::Halfling]
        );

        let dwarven = store.get(agent, Language::Dwarven).unwrap();
        assert!((dwarven.comprehension_level - 0.6).abs() < f32::EPSILON);
        assert!((dwarven.literacy_level - 0.3).abs() < f32::EPSILON);
        assert!(!dwarven.formal_training);
    }

    #[test]
    fn test_pool_exhaustion_stops_granting() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        let granted = store.initialize_starting_languages(agent, 30, &[], WorldTime::default());

        assert_eq!(granted.len(), 1 + DEFAULT_LANGUAGE_POOL.len());
    }

    #[test]
    fn test_common_in_background_does_not_downgrade_native_common() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();

        store.initialize_starting_languages(agent, 14, &[Language::Common, Language::Goblin], WorldTime::default());

        assert_eq!(store.comprehension(agent, Language::Common), 1.0);
        assert!(store.get(agent, Language::Goblin).is_some());
    }

    #[test]
    fn test_starting_languages_are_stamped() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();
        let now = WorldTime::new(12, 8, 0);

        store.initialize_starting_languages(agent, 14, &[], now);

        assert!(store.proficiencies(agent).all(|p| p.acquired_at == now));
    }

    #[test]
    fn test_formal_training_can_reach_fluency() {
        let mut store = ProficiencyStore::new();
        let agent = AgentId::new();
        store.upsert(
            agent,
            Language::Dwarven,
            LanguageProficiency::new(Language::Dwarven, 0.8, 0.6, 0.1),
        );

        let record = store.grant_formal_training(agent, Language::Dwarven, 1.0, 0.9, 0.05, WorldTime::default());

        assert_eq!(record.comprehension_level, 1.0);
        assert!((record.speaking_level - 0.9).abs() < f32::EPSILON);
        // Never lowered by a weaker grant.
        assert!((record.literacy_level - 0.1).abs() < f32::EPSILON);
        assert!(record.formal_training);
        assert_eq!(store.get(agent, Language::Dwarven), Some(&record));
    }
}
