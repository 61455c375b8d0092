//! The language engine: one object owning the graph, the proficiency store,
//! settlement profiles, the clock and the random source.
//!
//! Construct it once and pass it to whatever needs language services.

use language_rules::{
    AgentId, CulturalBackground, Language, LanguageConfig, LanguageProficiency, SettlementId,
    SettlementLanguageProfile, WorldTime,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::advisor::{recommend_languages, LanguageRecommendation};
use crate::comprehension::{Comprehension, ComprehensionCalculator};
use crate::dialogue::{DialogueOptions, DialogueProcessor, EmotionalCue, ProcessedDialogue};
use crate::exposure::{ExposureOutcome, ExposureSimulator};
use crate::proficiency_store::ProficiencyStore;
use crate::relationship_graph::RelationshipGraph;
use crate::resolver::{LanguageResolution, LanguageResolver, ResolveOptions};
use crate::settlement::generate_settlement_profile;

/// A conversation turn as heard by the listener, with the language it was
/// spoken in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueContext {
    pub speaker: AgentId,
    pub listener: AgentId,
    pub selected_language: Language,
    pub mutual_comprehension_score: f32,
    pub language_explanation: String,
    pub original_text: String,
    pub processed_text: String,
    pub comprehension_level: f32,
    pub emotional_context: Vec<EmotionalCue>,
    pub can_respond: bool,
    pub learning_opportunity: bool,
    /// False when the caller forced the language.
    pub auto_resolved: bool,
}

/// Language services for a single world.
pub struct LanguageEngine<R: Rng = StdRng> {
    config: LanguageConfig,
    graph: RelationshipGraph,
    store: ProficiencyStore,
    settlements: HashMap<SettlementId, SettlementLanguageProfile>,
    dialogue: DialogueProcessor,
    now: WorldTime,
    rng: R,
}

impl LanguageEngine<StdRng> {
    /// Create an engine seeded from OS entropy.
    pub fn new(config: LanguageConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LanguageConfig::default())
    }
}

impl<R: Rng> LanguageEngine<R> {
    /// Create an engine driven by the given random source.
    pub fn with_rng(config: LanguageConfig, rng: R) -> Self {
        let graph = RelationshipGraph::standard();
        tracing::info!(
            languages = Language::ALL.len(),
            relationships = graph.edge_count(),
            "language engine ready"
        );

        Self {
            dialogue: DialogueProcessor::new(config.dialogue.clone()),
            config,
            graph,
            store: ProficiencyStore::new(),
            settlements: HashMap::new(),
            now: WorldTime::default(),
            rng,
        }
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    pub fn store(&self) -> &ProficiencyStore {
        &self.store
    }

    pub fn world_time(&self) -> WorldTime {
        self.now
    }

    /// Set the clock used to stamp new records.
    pub fn set_world_time(&mut self, now: WorldTime) {
        self.now = now;
    }

    pub fn advance_clock(&mut self, minutes: u64) {
        self.now = self.now.advanced_by_minutes(minutes);
    }

    // ========================================================================
    // Proficiency
    // ========================================================================

    pub fn initialize_starting_languages(
        &mut self,
        agent: AgentId,
        determiner_score: i32,
        background_languages: &[Language],
    ) -> Vec<LanguageProficiency> {
        self.store
            .initialize_starting_languages(agent, determiner_score, background_languages, self.now)
    }

    /// Store a record, for example one loaded from persistence. Levels are re-clamped.
    pub fn upsert_proficiency(&mut self, agent: AgentId, language: Language, proficiency: LanguageProficiency) {
        self.store.upsert(agent, language, proficiency);
    }

    pub fn grant_formal_training(
        &mut self,
        agent: AgentId,
        language: Language,
        comprehension: f32,
        speaking: f32,
        literacy: f32,
    ) -> LanguageProficiency {
        self.store
            .grant_formal_training(agent, language, comprehension, speaking, literacy, self.now)
    }

    pub fn simulate_exposure(
        &mut self,
        agent: AgentId,
        language: Language,
        hours: u32,
        interaction_quality: f32,
    ) -> ExposureOutcome {
        ExposureSimulator::new(&self.graph, &self.config.learning).simulate(
            &mut self.store,
            agent,
            language,
            hours,
            interaction_quality,
            self.now,
        )
    }

    pub fn recommend_languages(&self, agent: AgentId) -> Vec<LanguageRecommendation> {
        recommend_languages(&self.graph, &self.store, agent)
    }

    // ========================================================================
    // Comprehension and dialogue
    // ========================================================================

    pub fn calculate_comprehension(&self, agent: AgentId, target: Language, text_complexity: f32) -> Comprehension {
        ComprehensionCalculator::new(&self.graph, &self.store, &self.config.comprehension)
            .compute(agent, target, text_complexity)
    }

    pub fn process_dialogue(
        &mut self,
        listener: AgentId,
        text: &str,
        speaker_language: Language,
        text_complexity: f32,
        context_clues: bool,
    ) -> ProcessedDialogue {
        let calculator = ComprehensionCalculator::new(&self.graph, &self.store, &self.config.comprehension);
        self.dialogue.process(
            &calculator,
            listener,
            text,
            speaker_language,
            DialogueOptions::new(text_complexity, context_clues),
            &mut self.rng,
        )
    }

    pub fn obscure_text(&mut self, text: &str, comprehension: f32, language: Language) -> String {
        self.dialogue.obscure(text, comprehension, language, &mut self.rng)
    }

    /// Best language for two agents, using the configured resolver settings.
    pub fn find_best_common_language(&mut self, a: AgentId, b: AgentId) -> LanguageResolution {
        let options = ResolveOptions::from_config(&self.config.resolver);
        self.find_best_common_language_with(a, b, options)
    }

    pub fn find_best_common_language_with(
        &mut self,
        a: AgentId,
        b: AgentId,
        options: ResolveOptions,
    ) -> LanguageResolution {
        let calculator = ComprehensionCalculator::new(&self.graph, &self.store, &self.config.comprehension);
        LanguageResolver::new(calculator, &self.config.resolver).find_best(a, b, options, &mut self.rng)
    }

    /// Resolve a language automatically and process `text` for the listener.
    pub fn create_dialogue_context(&mut self, speaker: AgentId, listener: AgentId, text: &str) -> DialogueContext {
        self.create_dialogue_context_in(speaker, listener, text, None)
    }

    /// Like [`create_dialogue_context`](Self::create_dialogue_context), but
    /// `force_language` overrides resolution. A forced language reports a
    /// mutual score of 1.0.
    pub fn create_dialogue_context_in(
        &mut self,
        speaker: AgentId,
        listener: AgentId,
        text: &str,
        force_language: Option<Language>,
    ) -> DialogueContext {
        let (language, mutual_score, explanation) = match force_language {
            Some(language) => (language, 1.0, format!("Forced to use {}", language)),
            None => {
                let resolution = self.find_best_common_language(speaker, listener);
                (resolution.language, resolution.mutual_score, resolution.explanation)
            }
        };

        let calculator = ComprehensionCalculator::new(&self.graph, &self.store, &self.config.comprehension);
        let options = DialogueOptions::from_config(&self.config.dialogue);
        let heard = self
            .dialogue
            .process(&calculator, listener, text, language, options, &mut self.rng);

        DialogueContext {
            speaker,
            listener,
            selected_language: language,
            mutual_comprehension_score: mutual_score,
            language_explanation: explanation,
            original_text: heard.original_text,
            processed_text: heard.processed_text,
            comprehension_level: heard.comprehension_level,
            emotional_context: heard.emotional_context,
            can_respond: heard.can_respond,
            learning_opportunity: heard.learning_opportunity,
            auto_resolved: force_language.is_none(),
        }
    }

    // ========================================================================
    // Settlements
    // ========================================================================

    /// Generate and store the profile for a new settlement, replacing any
    /// previous profile with the same id.
    pub fn create_settlement_language_profile(
        &mut self,
        settlement_id: SettlementId,
        primary_language: Language,
        population_size: u32,
        background: CulturalBackground,
    ) -> &SettlementLanguageProfile {
        let profile =
            generate_settlement_profile(settlement_id, primary_language, population_size, background, &mut self.rng);
        self.settlements.insert(settlement_id, profile);
        &self.settlements[&settlement_id]
    }

    pub fn settlement_profile(&self, settlement_id: SettlementId) -> Option<&SettlementLanguageProfile> {
        self.settlements.get(&settlement_id)
    }

    pub fn settlement_profile_mut(&mut self, settlement_id: SettlementId) -> Option<&mut SettlementLanguageProfile> {
        self.settlements.get_mut(&settlement_id)
    }

    /// Draw a resident's native language from a stored settlement profile.
    pub fn resident_language(&mut self, settlement_id: SettlementId) -> Option<Language> {
        let profile = self.settlements.get(&settlement_id)?;
        Some(profile.resident_language(&mut self.rng))
    }
}

impl<R: Rng + SeedableRng> LanguageEngine<R> {
    /// Create an engine with a reproducible random source.
    pub fn seeded(config: LanguageConfig, seed: u64) -> Self {
        Self::with_rng(config, R::seed_from_u64(seed))
    }
}
