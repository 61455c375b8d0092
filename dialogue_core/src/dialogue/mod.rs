//! Dialogue Processor - turns spoken text into what a listener actually gets.
//!
//! Processing works as follows:
//! 1. **Score**: Compute the listener's comprehension of the speaker's language
//! 2. **Context**: Visible gestures and expressions add a flat bonus
//! 3. **Tone**: Read emotional cues at a more generous tone score
//! 4. **Render**: Obscure the words the listener cannot follow

mod emotion;
mod obscure;

pub use emotion::*;
pub use obscure::*;

use language_rules::{AgentId, DialogueConfig, Language};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::comprehension::{ComprehensionCalculator, ComprehensionSource};

/// Dialogue as perceived by one listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDialogue {
    pub original_text: String,
    /// The text with unintelligible words replaced by foreign script.
    pub processed_text: String,
    pub comprehension_level: f32,
    pub comprehension_sources: Vec<ComprehensionSource>,
    pub speaker_language: Language,
    pub emotional_context: Vec<EmotionalCue>,
    /// Enough understanding to attempt a reply.
    pub can_respond: bool,
    /// Not yet fluent, so the exchange can teach something.
    pub learning_opportunity: bool,
}

/// How a line is delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogueOptions {
    /// `0.0` trivial, `1.0` dense.
    pub text_complexity: f32,
    /// Gestures and expressions are visible.
    pub context_clues: bool,
}

impl DialogueOptions {
    pub fn new(text_complexity: f32, context_clues: bool) -> Self {
        Self {
            text_complexity,
            context_clues,
        }
    }

    /// Conversational complexity from the config, face to face.
    pub fn from_config(config: &DialogueConfig) -> Self {
        Self::new(config.text_complexity, true)
    }
}

/// Applies comprehension to dialogue.
#[derive(Debug, Clone)]
pub struct DialogueProcessor {
    config: DialogueConfig,
}

impl DialogueProcessor {
    /// Create a new dialogue processor with the given configuration.
    pub fn new(config: DialogueConfig) -> Self {
        Self { config }
    }

    /// Create a dialogue processor with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DialogueConfig::default())
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Process `text` spoken in `speaker_language` for `listener`.
    pub fn process(
        &self,
        calculator: &ComprehensionCalculator<'_>,
        listener: AgentId,
        text: &str,
        speaker_language: Language,
        options: DialogueOptions,
        rng: &mut impl Rng,
    ) -> ProcessedDialogue {
        let comprehension = calculator.compute(listener, speaker_language, options.text_complexity);

        let mut level = comprehension.score;
        if options.context_clues {
            level = (level + self.config.context_clue_bonus).min(1.0);
        }

        let tone_score = (level + self.config.emotional_bonus).min(1.0);
        let emotional_context = read_emotional_context(text, tone_score);
        let processed_text = self.obscure(text, level, speaker_language, rng);

        ProcessedDialogue {
            original_text: text.to_string(),
            processed_text,
            comprehension_level: level,
            comprehension_sources: comprehension.sources,
            speaker_language,
            emotional_context,
            can_respond: level >= self.config.response_threshold,
            learning_opportunity: level < self.config.fluency_threshold,
        }
    }

    /// Obscure `text` for a reader at the given comprehension.
    pub fn obscure(
        &self,
        text: &str,
        comprehension: f32,
        language: Language,
        rng: &mut impl Rng,
    ) -> String {
        obscure_text(
            text,
            comprehension,
            language,
            self.config.legible_threshold,
            self.config.connector_chance,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proficiency_store::ProficiencyStore;
    use crate::relationship_graph::RelationshipGraph;
    use language_rules::{ComprehensionConfig, LanguageProficiency};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Fixture {
        graph: RelationshipGraph,
        store: ProficiencyStore,
        config: ComprehensionConfig,
        listener: AgentId,
    }

    impl Fixture {
        fn new(language: Language, level: f32) -> Self {
            let mut store = ProficiencyStore::new();
            let listener = AgentId::new();
            store.upsert(listener, language, LanguageProficiency::new(language, level, level, level));
            Self {
                graph: RelationshipGraph::standard(),
                store,
                config: ComprehensionConfig::default(),
                listener,
            }
        }

        fn calculator(&self) -> ComprehensionCalculator<'_> {
            ComprehensionCalculator::new(&self.graph, &self.store, &self.config)
        }
    }

    #[test]
    fn test_fluent_listener_reads_everything() {
        let fixture = Fixture::new(Language::Dwarven, 1.0);
        let processor = DialogueProcessor::with_defaults();
        let text = "Mind the forge, apprentice, the iron is hot!";

        let result = processor.process(
            &fixture.calculator(),
            fixture.listener,
            text,
            Language::Dwarven,
            DialogueOptions::new(0.0, false),
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(result.processed_text, text);
        assert_eq!(result.comprehension_level, 1.0);
        assert!(result.can_respond);
        assert!(!result.learning_opportunity);
        assert_eq!(result.emotional_context, vec![EmotionalCue::Excited]);
    }

    #[test]
    fn test_context_clues_add_bonus_capped_at_one() {
        let fixture = Fixture::new(Language::Elvish, 0.5);
        let processor = DialogueProcessor::with_defaults();
        let calc = fixture.calculator();
        let mut rng = StdRng::seed_from_u64(2);

        let quiet = DialogueOptions::new(0.0, false);
        let face_to_face = DialogueOptions::new(0.0, true);

        let without = processor.process(&calc, fixture.listener, "hello there", Language::Elvish, quiet, &mut rng);
        let with = processor.process(&calc, fixture.listener, "hello there", Language::Elvish, face_to_face, &mut rng);
        assert!((with.comprehension_level - without.comprehension_level - 0.15).abs() < 1e-6);

        let fluent = Fixture::new(Language::Elvish, 0.95);
        let capped = processor.process(
            &fluent.calculator(),
            fluent.listener,
            "hello there",
            Language::Elvish,
            DialogueOptions::new(0.0, true),
            &mut rng,
        );
        assert_eq!(capped.comprehension_level, 1.0);
    }

    #[test]
    fn test_stranger_sees_foreign_script_but_reads_tone() {
        let fixture = Fixture::new(Language::Common, 1.0);
        let processor = DialogueProcessor::with_defaults();

        let result = processor.process(
            &fixture.calculator(),
            fixture.listener,
            "surrender immediately or perish!",
            Language::Infernal,
            DialogueOptions::new(0.5, true),
            &mut StdRng::seed_from_u64(3),
        );

        // Only the context clue bonus remains.
        assert!((result.comprehension_level - 0.15).abs() < 1e-6);
        assert!(!result.can_respond);
        assert!(result.learning_opportunity);
        assert_eq!(result.emotional_context, vec![EmotionalCue::Intense]);
        assert!(result.comprehension_sources.is_empty());
        assert!(!result.processed_text.contains("surrender"));
        assert!(result.processed_text.contains(" or "));
        assert!(result.processed_text.ends_with('!'));
    }

    #[test]
    fn test_options_from_config() {
        let options = DialogueOptions::from_config(&DialogueConfig::default());
        assert_eq!(options, DialogueOptions::new(0.5, true));
    }

    #[test]
    fn test_partial_listener_can_respond() {
        // Elvish 0.9 -> Common 0.36 bridged, +0.15 context
        let fixture = Fixture::new(Language::Elvish, 0.9);
        let processor = DialogueProcessor::with_defaults();

        let result = processor.process(
            &fixture.calculator(),
            fixture.listener,
            "Where can travellers find lodging tonight?",
            Language::Common,
            DialogueOptions::new(0.0, true),
            &mut StdRng::seed_from_u64(4),
        );

        assert!((result.comprehension_level - 0.51).abs() < 1e-5);
        assert!(result.can_respond);
        assert_eq!(
            result.emotional_context,
            vec![EmotionalCue::Questioning]
        );
        assert!(result.processed_text.starts_with("Where"));
    }
}
