//! Comprehension Calculator - how well an agent understands a language.
//!
//! Scoring works in two steps:
//! 1. **Direct**: the agent has a record for the language; a mild complexity
//!    penalty applies.
//! 2. **Bridged**: otherwise, the best single edge from a language the agent
//!    knows into the target; a steeper complexity penalty applies.
//!
//! Bridging never chains: two unknown intermediates give nothing. Indirect
//! effects such as ancient-root influence are modelled as explicit edges.

use language_rules::{clamp_level, AgentId, ComprehensionConfig, Language, RelationshipType};
use serde::{Deserialize, Serialize};

use crate::proficiency_store::ProficiencyStore;
use crate::relationship_graph::RelationshipGraph;

/// Why an agent understands (or fails to understand) a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComprehensionSource {
    /// The agent has a record for the language itself.
    Direct { language: Language },

    /// Understanding carried over a single relationship edge.
    Bridge {
        known: Language,
        target: Language,
        relationship: RelationshipType,
    },

    /// The agent has no language records at all.
    NoProficiencyData,
}

impl std::fmt::Display for ComprehensionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComprehensionSource::Direct { language } => {
                write!(f, "Direct knowledge of {}", language)
            }
            ComprehensionSource::Bridge {
                known,
                target,
                relationship,
            } => write!(f, "{} -> {} ({})", known, target, relationship),
            ComprehensionSource::NoProficiencyData => {
                write!(f, "Agent language proficiencies not found")
            }
        }
    }
}

/// A comprehension score in `[0.0, 1.0]` with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comprehension {
    pub score: f32,
    /// Every source that produced the score. Ties are all listed.
    pub sources: Vec<ComprehensionSource>,
}

impl Comprehension {
    fn none(sources: Vec<ComprehensionSource>) -> Self {
        Self {
            score: 0.0,
            sources,
        }
    }
}

/// Scores comprehension against a proficiency store and relationship graph.
#[derive(Debug, Clone, Copy)]
pub struct ComprehensionCalculator<'a> {
    graph: &'a RelationshipGraph,
    store: &'a ProficiencyStore,
    config: &'a ComprehensionConfig,
}

impl<'a> ComprehensionCalculator<'a> {
    pub fn new(
        graph: &'a RelationshipGraph,
        store: &'a ProficiencyStore,
        config: &'a ComprehensionConfig,
    ) -> Self {
        Self {
            graph,
            store,
            config,
        }
    }

    pub fn graph(&self) -> &'a RelationshipGraph {
        self.graph
    }

    pub fn store(&self) -> &'a ProficiencyStore {
        self.store
    }

    /// Score how well `agent` understands `target` text of the given
    /// complexity (`0.0` trivial, `1.0` dense).
    ///
    /// Never fails: an agent with no records scores 0.0 with a
    /// [`ComprehensionSource::NoProficiencyData`] note.
    pub fn compute(&self, agent: AgentId, target: Language, text_complexity: f32) -> Comprehension {
        let complexity = clamp_level(text_complexity);

        let Some(known) = self.store.languages_of(agent).filter(|langs| !langs.is_empty()) else {
            tracing::debug!(agent = %agent, target = %target, "no proficiency data");
            return Comprehension::none(vec![ComprehensionSource::NoProficiencyData]);
        };

        if let Some(direct) = known.get(&target) {
            let score = clamp_level(
                direct.comprehension_level - complexity * self.config.direct_complexity_penalty,
            );
            return Comprehension {
                score,
                sources: vec![ComprehensionSource::Direct { language: target }],
            };
        }

        let mut best = 0.0_f32;
        let mut sources = Vec::new();

        for (language, proficiency) in known {
            for edge in self.graph.edges_between(*language, target) {
                let candidate = proficiency.comprehension_level * edge.comprehension_bonus;
                let source = ComprehensionSource::Bridge {
                    known: *language,
                    target,
                    relationship: edge.relationship_type,
                };

                if candidate > best {
                    best = candidate;
                    sources = vec![source];
                } else if candidate == best && candidate > 0.0 {
                    sources.push(source);
                }
            }
        }

        let score = clamp_level(best - complexity * self.config.bridged_complexity_penalty);

        tracing::debug!(
            agent = %agent,
            target = %target,
            best_bridge = best,
            score,
            "bridged comprehension"
        );

        Comprehension { score, sources }
    }
}
