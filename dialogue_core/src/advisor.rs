//! Learning recommendations: which language an agent should study next.

use language_rules::{AgentId, Language};
use serde::{Deserialize, Serialize};

use crate::proficiency_store::ProficiencyStore;
use crate::relationship_graph::RelationshipGraph;

/// Comprehension at which a language counts as already known.
const KNOWN_THRESHOLD: f32 = 0.3;

const MAX_RECOMMENDATIONS: usize = 5;

/// A language worth learning, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRecommendation {
    pub language: Language,
    /// Practical value of the language in the world.
    pub utility_score: f32,
    /// Sum of relationship bonuses from languages the agent knows.
    pub learning_ease: f32,
    pub total_benefit: f32,
    /// Known relatives make this noticeably easier.
    pub family_synergy: bool,
    pub reason: String,
}

fn utility(language: Language) -> f32 {
    match language {
        Language::TradeCommon => 0.9,
        Language::Elvish | Language::Dwarven => 0.7,
        Language::AncientImperial => 0.6,
        Language::Draconic => 0.5,
        Language::Celestial => 0.4,
        _ => 0.3,
    }
}

fn utility_reason(language: Language) -> Option<&'static str> {
    match language {
        Language::TradeCommon => Some("essential for commerce and trade"),
        Language::Elvish => Some("widely spoken and culturally significant"),
        Language::Dwarven => Some("useful for trade and crafting knowledge"),
        Language::AncientImperial => Some("unlocks historical texts and scholarly works"),
        Language::Celestial => Some("grants access to divine knowledge"),
        Language::Draconic => Some("provides access to magical lore"),
        Language::Abyssal => Some("useful for dealing with dark entities"),
        Language::Sylvan => Some("helpful for nature-based interactions"),
        _ => None,
    }
}

fn reason(language: Language, synergy: f32) -> String {
    let mut reasons = Vec::new();
    if synergy > 0.3 {
        reasons.push("easy to learn due to related languages you know");
    }
    reasons.extend(utility_reason(language));

    if reasons.is_empty() {
        "expands communication options".to_string()
    } else {
        reasons.join("; ")
    }
}

/// The five most beneficial languages `agent` does not yet know.
///
/// Ranked by `utility + learning_ease`; ties keep catalog order. An unknown
/// agent gets no recommendations.
pub fn recommend_languages(
    graph: &RelationshipGraph,
    store: &ProficiencyStore,
    agent: AgentId,
) -> Vec<LanguageRecommendation> {
    if !store.has_agent(agent) {
        return Vec::new();
    }

    let known: Vec<Language> = store
        .proficiencies(agent)
        .filter(|p| p.comprehension_level >= KNOWN_THRESHOLD)
        .map(|p| p.language)
        .collect();

    let mut recommendations: Vec<_> = Language::ALL
        .into_iter()
        .filter(|target| !known.contains(target))
        .map(|target| {
            let synergy: f32 = known
                .iter()
                .flat_map(|from| graph.edges_between(*from, target))
                .map(|edge| edge.comprehension_bonus)
                .sum();
            let utility_score = utility(target);

            LanguageRecommendation {
                language: target,
                utility_score,
                learning_ease: synergy,
                total_benefit: utility_score + synergy,
                family_synergy: synergy > 0.2,
                reason: reason(target, synergy),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.total_benefit.total_cmp(&a.total_benefit));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
