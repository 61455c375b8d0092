//! End-to-end scenarios through the `LanguageEngine`.

use dialogue_core::{LanguageEngine, ResolutionTier};
use language_rules::{
    AgentId, CulturalBackground, Language, LanguageConfig, LanguageProficiency, LinguisticChange,
    SettlementId, WorldTime,
};

fn engine(seed: u64) -> LanguageEngine {
    LanguageEngine::seeded(LanguageConfig::default(), seed)
}

fn speaker_of(engine: &mut LanguageEngine, languages: &[(Language, f32)]) -> AgentId {
    let agent = AgentId::new();
    for (language, level) in languages {
        engine.upsert_proficiency(agent, *language, LanguageProficiency::new(*language, *level, *level, 0.5));
    }
    agent
}

#[test]
fn dragon_and_goblin_fall_back_to_common() {
    let mut engine = engine(1);
    let dragon = speaker_of(&mut engine, &[(Language::Draconic, 0.8)]);
    let goblin = speaker_of(&mut engine, &[(Language::Goblin, 0.7)]);

    let resolution = engine.find_best_common_language(dragon, goblin);
    assert_eq!(resolution.language, Language::Common);
    assert_eq!(resolution.tier, ResolutionTier::CommonFallback);

    let context = engine.create_dialogue_context(dragon, goblin, "Kneel before the Great Wyrm!");
    assert_eq!(context.selected_language, Language::Common);
    assert!((context.mutual_comprehension_score - 0.6).abs() < f32::EPSILON);
    assert!(context.auto_resolved);
    // The goblin has no way into Common beyond gestures.
    assert!((context.comprehension_level - 0.15).abs() < 1e-6);
    assert!(context.learning_opportunity);
}

#[test]
fn elves_and_halflings_meet_halfway() {
    let mut engine = engine(2);
    let elf = speaker_of(&mut engine, &[(Language::Elvish, 1.0)]);
    let halfling = speaker_of(&mut engine, &[(Language::Halfling, 1.0), (Language::TradeCommon, 0.2)]);

    let resolution = engine.find_best_common_language(elf, halfling);
    assert_eq!(resolution.tier, ResolutionTier::BridgedPair);
    assert!((resolution.mutual_score - 0.4).abs() < 1e-6);
}

#[test]
fn exposure_lets_a_traveller_follow_conversation() {
    let mut engine = engine(3);
    let traveller = AgentId::new();
    engine.initialize_starting_languages(traveller, 10, &[]);

    let before = engine.calculate_comprehension(traveller, Language::Dwarven, 0.0).score;
    // Common -> Dwarven carries a 0.2 influence edge.
    assert!((before - 0.2).abs() < 1e-6);

    let mut last = 0.0;
    for _ in 0..20 {
        let outcome = engine.simulate_exposure(traveller, Language::Dwarven, 40, 0.8);
        assert!(outcome.new_comprehension_level >= last);
        assert!((outcome.learning_rate_modifier - 1.1).abs() < 1e-6);
        last = outcome.new_comprehension_level;
    }

    let record = engine.store().get(traveller, Language::Dwarven).unwrap();
    assert_eq!(record.exposure_hours, 800);
    assert!(record.comprehension_level <= 0.8);
    assert!(!record.formal_training);

    // A direct record now replaces the bridged estimate.
    let after = engine.calculate_comprehension(traveller, Language::Dwarven, 0.0).score;
    assert_eq!(after, record.comprehension_level);
    assert!(after > before);
}

#[test]
fn formal_training_passes_the_natural_cap() {
    let mut engine = engine(4);
    let scholar = AgentId::new();
    engine.initialize_starting_languages(scholar, 10, &[]);

    engine.simulate_exposure(scholar, Language::Celestial, 100_000, 1.0);
    assert!((engine.store().comprehension(scholar, Language::Celestial) - 0.8).abs() < f32::EPSILON);

    engine.grant_formal_training(scholar, Language::Celestial, 1.0, 0.9, 0.9);
    engine.simulate_exposure(scholar, Language::Celestial, 100, 1.0);

    let record = engine.store().get(scholar, Language::Celestial).unwrap();
    assert_eq!(record.comprehension_level, 1.0);
    assert!(record.formal_training);
}

#[test]
fn partial_listener_sees_mixed_script() {
    let mut engine = engine(5);
    let listener = speaker_of(&mut engine, &[(Language::Halfling, 1.0)]);
    let text = "Our caravan leaves Stonebridge before the second bell tomorrow";

    let heard = engine.process_dialogue(listener, text, Language::Elvish, 0.0, false);

    assert!((heard.comprehension_level - 0.4).abs() < 1e-6);
    assert!(heard.can_respond);
    assert_eq!(heard.processed_text.split(' ').count(), text.split_whitespace().count());
    assert!(heard.processed_text.contains("Stonebridge"));
    assert!(heard.processed_text.contains(" the "));
    assert_ne!(heard.processed_text, text);
}

#[test]
fn persisted_records_are_reclamped_on_load() {
    let mut engine = engine(6);
    let agent = AgentId::new();

    let json = r#"{
        "language": "orcish",
        "comprehension_level": 1.4,
        "speaking_level": -0.2,
        "literacy_level": 0.5,
        "exposure_hours": 30,
        "formal_training": false,
        "acquired_at": { "day": 2, "hour": 6, "minute": 0 }
    }"#;
    let loaded: LanguageProficiency = serde_json::from_str(json).unwrap();
    engine.upsert_proficiency(agent, Language::Orcish, loaded);

    let stored = engine.store().get(agent, Language::Orcish).unwrap();
    assert_eq!(stored.comprehension_level, 1.0);
    assert_eq!(stored.speaking_level, 0.0);
    assert_eq!(stored.acquired_at, WorldTime::new(2, 6, 0));
}

#[test]
fn settlement_profiles_feed_population_generation() {
    let mut engine = engine(7);
    let port = SettlementId::new();

    let profile = engine
        .create_settlement_language_profile(port, Language::Common, 1500, CulturalBackground::Crossroads)
        .clone();
    assert_eq!(profile.secondary_languages, vec![Language::Elvish, Language::Dwarven]);
    assert!(profile.trade_languages.contains(&Language::SeaCant));

    for _ in 0..50 {
        let native = engine.resident_language(port).unwrap();
        assert!(native == Language::Common || profile.secondary_languages.contains(&native));
    }

    let change = LinguisticChange::new(Language::SeaCant, "Sailors' cant spreading in the docks", engine.world_time())
        .with_detail("district", serde_json::json!("harbour"));
    engine.settlement_profile_mut(port).unwrap().record_change(change);

    let stored = engine.settlement_profile(port).unwrap();
    assert_eq!(stored.recent_linguistic_changes.len(), 1);

    let round_trip: serde_json::Value = serde_json::to_value(stored).unwrap();
    assert_eq!(round_trip["primary_language"], "common");
}

#[test]
fn recommendations_follow_what_the_agent_knows() {
    let mut engine = engine(8);
    let dwarf = AgentId::new();
    engine.initialize_starting_languages(dwarf, 14, &[Language::Dwarven]);

    let recs = engine.recommend_languages(dwarf);
    assert_eq!(recs.len(), 5);
    assert!(recs.iter().all(|r| r.language != Language::Dwarven && r.language != Language::Common));
    assert!(recs.windows(2).all(|w| w[0].total_benefit >= w[1].total_benefit));

    assert!(engine.recommend_languages(AgentId::new()).is_empty());
}

#[test]
fn config_file_changes_behaviour() {
    let config = LanguageConfig::from_toml_str(
        r#"
        [dialogue]
        context_clue_bonus = 0.0

        [resolver]
        common_fallback_score = 0.5
        "#,
    )
    .unwrap();
    let mut engine: LanguageEngine = LanguageEngine::seeded(config, 9);

    let a = speaker_of(&mut engine, &[(Language::Infernal, 1.0)]);
    let b = speaker_of(&mut engine, &[(Language::Druidic, 1.0)]);

    let context = engine.create_dialogue_context(a, b, "Who goes there?");
    assert!((context.mutual_comprehension_score - 0.5).abs() < f32::EPSILON);
    assert_eq!(context.comprehension_level, 0.0);
    assert!(!context.can_respond);
}
