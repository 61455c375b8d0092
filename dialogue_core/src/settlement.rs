//! Settlement profile generation.

use language_rules::{CulturalBackground, Language, SettlementId, SettlementLanguageProfile};
use rand::Rng;

/// Above this population a settlement hosts the major languages.
const LARGE_SETTLEMENT: u32 = 1000;
const MEDIUM_SETTLEMENT: u32 = 500;

/// Build the language profile for a newly generated settlement.
///
/// Larger settlements are more diverse and more literate; the cultural
/// background shifts diversity, and dialect strength varies randomly around 0.5.
pub fn generate_settlement_profile(
    settlement_id: SettlementId,
    primary_language: Language,
    population_size: u32,
    background: CulturalBackground,
    rng: &mut impl Rng,
) -> SettlementLanguageProfile {
    let mut secondary = Vec::new();
    let mut trade = vec![Language::TradeCommon];

    if population_size > LARGE_SETTLEMENT {
        secondary.extend([Language::Common, Language::Elvish, Language::Dwarven]);
        trade.push(Language::SeaCant);
    } else if population_size > MEDIUM_SETTLEMENT {
        secondary.push(if primary_language == Language::Common {
            Language::Elvish
        } else {
            Language::Common
        });
    }

    let population = population_size as f32;
    let base_diversity = (population / 5000.0).min(0.8);
    let diversity = (base_diversity + background.diversity_modifier()).clamp(0.1, 0.9);
    let dialect_strength = (0.5 + rng.random_range(-0.2..=0.2_f32)).clamp(0.1, 0.9);
    let literacy_rate = (0.3 + population / 10_000.0).min(0.9);

    let profile = SettlementLanguageProfile::new(settlement_id, primary_language)
        .with_secondary_languages(secondary)
        .with_trade_languages(trade)
        .with_diversity(diversity)
        .with_dialect_strength(dialect_strength)
        .with_literacy_rate(literacy_rate);

    tracing::info!(
        settlement = %settlement_id,
        primary = %primary_language,
        secondary = profile.secondary_languages.len(),
        diversity,
        "created settlement language profile"
    );

    profile
}
