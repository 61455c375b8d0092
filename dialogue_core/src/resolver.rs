//! Language Resolver - picks the language two agents should talk in.
//!
//! Resolution runs in tiers; the first tier with a candidate at or above the
//! minimum comprehension wins:
//! 1. **Shared**: a language both agents know, scored by average comprehension
//! 2. **Bridged**: a pair of related languages each side can follow
//! 3. **Common**: assumed basic Common between strangers
//! 4. **Pidgin**: Trade-Common as the unconditional last resort
//!
//! The resolver never comes back empty-handed.

use language_rules::{AgentId, Language, ResolverConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::comprehension::ComprehensionCalculator;

/// Which tier produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    SharedLanguage,
    BridgedPair,
    CommonFallback,
    PidginFallback,
}

/// The language chosen for a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageResolution {
    pub language: Language,
    /// Expected mutual comprehension (0.0 - 1.0).
    pub mutual_score: f32,
    pub tier: ResolutionTier,
    pub explanation: String,
}

/// Resolution parameters for a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    pub min_comprehension: f32,
    pub prefer_trade_languages: bool,
}

impl ResolveOptions {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            min_comprehension: config.min_comprehension,
            prefer_trade_languages: config.prefer_trade_languages,
        }
    }
}

/// Finds the best common language for two agents.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    calculator: ComprehensionCalculator<'a>,
    config: &'a ResolverConfig,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(calculator: ComprehensionCalculator<'a>, config: &'a ResolverConfig) -> Self {
        Self { calculator, config }
    }

    /// Resolve with the configured minimum comprehension and trade preference.
    pub fn find_best_default(&self, a: AgentId, b: AgentId, rng: &mut impl Rng) -> LanguageResolution {
        self.find_best(a, b, ResolveOptions::from_config(self.config), rng)
    }

    /// Resolve the best language for `a` and `b`.
    ///
    /// Candidates tied for the best score within a tier are broken with `rng`.
    pub fn find_best(
        &self,
        a: AgentId,
        b: AgentId,
        options: ResolveOptions,
        rng: &mut impl Rng,
    ) -> LanguageResolution {
        let shared = self.shared_candidates(a, b, options);
        if let Some(best) = pick_best(shared, rng) {
            tracing::debug!(agent_a = %a, agent_b = %b, language = %best.language, score = best.mutual_score, "shared language");
            return best;
        }

        let bridged = self.bridged_candidates(a, b, options);
        if let Some(best) = pick_best(bridged, rng) {
            tracing::debug!(agent_a = %a, agent_b = %b, language = %best.language, score = best.mutual_score, "bridged language");
            return best;
        }

        if self.config.common_fallback_score >= options.min_comprehension {
            tracing::info!(agent_a = %a, agent_b = %b, "no shared language, falling back to Common");
            return LanguageResolution {
                language: Language::Common,
                mutual_score: self.config.common_fallback_score,
                tier: ResolutionTier::CommonFallback,
                explanation: "Fallback to Common with basic comprehension".to_string(),
            };
        }

        tracing::info!(agent_a = %a, agent_b = %b, "no qualifying language, using trade pidgin");
        LanguageResolution {
            language: Language::TradeCommon,
            mutual_score: self.config.pidgin_fallback_score,
            tier: ResolutionTier::PidginFallback,
            explanation: "Using trade pidgin as last resort".to_string(),
        }
    }

    /// Tier 1: languages both agents hold a record for.
    fn shared_candidates(&self, a: AgentId, b: AgentId, options: ResolveOptions) -> Vec<LanguageResolution> {
        let store = self.calculator.store();

        store
            .proficiencies(a)
            .filter_map(|prof_a| {
                let prof_b = store.get(b, prof_a.language)?;
                let average = (prof_a.comprehension_level + prof_b.comprehension_level) / 2.0;
                if average < options.min_comprehension {
                    return None;
                }

                let mut bonus = 0.0;
                if prof_a.language.is_trade_pidgin() {
                    bonus += self.config.trade_bonus;
                    if options.prefer_trade_languages {
                        bonus += self.config.preferred_trade_bonus;
                    }
                }

                Some(LanguageResolution {
                    language: prof_a.language,
                    mutual_score: (average + bonus).min(1.0),
                    tier: ResolutionTier::SharedLanguage,
                    explanation: format!("Both characters know {}", prof_a.language),
                })
            })
            .collect()
    }

    /// Tier 2: a language of each agent that the other can follow.
    fn bridged_candidates(&self, a: AgentId, b: AgentId, options: ResolveOptions) -> Vec<LanguageResolution> {
        let store = self.calculator.store();
        let complexity = self.config.bridge_text_complexity;
        let mut candidates = Vec::new();

        for prof_a in store.proficiencies(a) {
            for prof_b in store.proficiencies(b) {
                if prof_a.language == prof_b.language {
                    continue;
                }

                let a_understands = self.calculator.compute(a, prof_b.language, complexity).score;
                let b_understands = self.calculator.compute(b, prof_a.language, complexity).score;
                if a_understands < options.min_comprehension || b_understands < options.min_comprehension {
                    continue;
                }

                let language = if prof_a.comprehension_level > prof_b.comprehension_level {
                    prof_a.language
                } else {
                    prof_b.language
                };

                candidates.push(LanguageResolution {
                    language,
                    mutual_score: (a_understands + b_understands) / 2.0,
                    tier: ResolutionTier::BridgedPair,
                    explanation: format!(
                        "Related languages: {} <-> {}",
                        prof_a.language, prof_b.language
                    ),
                });
            }
        }

        candidates
    }
}

/// The highest-scoring candidate, with ties broken at random.
fn pick_best(candidates: Vec<LanguageResolution>, rng: &mut impl Rng) -> Option<LanguageResolution> {
    let top = candidates
        .iter()
        .map(|c| c.mutual_score)
        .fold(f32::NEG_INFINITY, f32::max);

    let mut tied: Vec<_> = candidates
        .into_iter()
        .filter(|c| (top - c.mutual_score).abs() <= f32::EPSILON)
        .collect();

    match tied.len() {
        0 => None,
        1 => tied.pop(),
        n => Some(tied.swap_remove(rng.random_range(0..n))),
    }
}
