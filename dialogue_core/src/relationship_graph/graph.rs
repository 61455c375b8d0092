//! The relationship graph and the standard world catalog.

use language_rules::{Language, LanguageFamily, RelationshipType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::LanguageRelationship;

/// Ancient roots that feed every modern language. Primordial stands apart.
const ROOT_LANGUAGES: [Language; 2] = [Language::AncientImperial, Language::OldCelestial];

/// Pairs with historical contact across family lines.
const CROSS_FAMILY_PAIRS: [(Language, Language, f32); 5] = [
    (Language::Common, Language::Dwarven, 0.2),
    (Language::Elvish, Language::Sylvan, 0.3),
    (Language::Draconic, Language::AncientImperial, 0.4),
    (Language::Celestial, Language::OldCelestial, 0.6),
    (Language::Abyssal, Language::Infernal, 0.5),
];

/// Directed relationship graph between languages.
///
/// Edges are stored as an adjacency list keyed by base language, so
/// `edges_from` is a single lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelationshipGraph {
    edges: HashMap<Language, Vec<LanguageRelationship>>,
}

impl RelationshipGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard world graph.
    ///
    /// - Family siblings understand each other in both directions.
    /// - Ancient roots give one-way `derived` bonuses into every modern language.
    /// - Trade pidgins share shallow `pidgin` edges with every modern language,
    ///   both ways.
    /// - A handful of cross-family pairs carry `influenced` edges both ways.
    pub fn standard() -> Self {
        let mut graph = Self::new();

        for (family, bonus) in [
            (LanguageFamily::CommonFamily, 0.4),
            (LanguageFamily::ElderFamily, 0.3),
            (LanguageFamily::EasternFamily, 0.25),
        ] {
            let members: Vec<_> = Language::ALL
                .into_iter()
                .filter(|l| l.family() == family)
                .collect();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    graph.add_bidirectional(*a, *b, bonus, RelationshipType::Family);
                }
            }
        }

        for root in ROOT_LANGUAGES {
            for modern in Language::ALL.into_iter().filter(|l| l.is_modern()) {
                let bonus = if modern.family() == LanguageFamily::CommonFamily {
                    0.2
                } else {
                    0.1
                };
                graph.add_relationship(LanguageRelationship::new(
                    root,
                    modern,
                    bonus,
                    RelationshipType::Derived,
                ));
            }
        }

        for pidgin in Language::ALL.into_iter().filter(|l| l.is_trade_pidgin()) {
            for modern in Language::ALL
                .into_iter()
                .filter(|l| l.is_modern() && !l.is_trade_pidgin())
            {
                graph.add_bidirectional(pidgin, modern, 0.15, RelationshipType::Pidgin);
            }
        }

        for (a, b, bonus) in CROSS_FAMILY_PAIRS {
            graph.add_bidirectional(a, b, bonus, RelationshipType::Influenced);
        }

        graph
    }

    /// Add a directed edge.
    pub fn add_relationship(&mut self, relationship: LanguageRelationship) {
        self.edges
            .entry(relationship.base_language)
            .or_default()
            .push(relationship);
    }

    /// Add an edge in each direction with the same bonus and type.
    pub fn add_bidirectional(
        &mut self,
        a: Language,
        b: Language,
        bonus: f32,
        relationship_type: RelationshipType,
    ) {
        let forward = LanguageRelationship::new(a, b, bonus, relationship_type);
        self.add_relationship(forward.reversed());
        self.add_relationship(forward);
    }

    /// The family a language belongs to.
    pub fn family_of(&self, language: Language) -> LanguageFamily {
        language.family()
    }

    /// All edges whose base is `language`.
    pub fn edges_from(&self, language: Language) -> &[LanguageRelationship] {
        self.edges.get(&language).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All edges `from -> to`. A pair can be linked by more than one edge,
    /// e.g. a root that is also a historical contact.
    pub fn edges_between(
        &self,
        from: Language,
        to: Language,
    ) -> impl Iterator<Item = &LanguageRelationship> {
        self.edges_from(from)
            .iter()
            .filter(move |rel| rel.related_language == to)
    }

    /// The strongest bonus `from -> to`, or 0.0 if unrelated.
    pub fn bonus(&self, from: Language, to: Language) -> f32 {
        self.edges_between(from, to)
            .map(|rel| rel.comprehension_bonus)
            .fold(0.0, f32::max)
    }

    /// Every edge in the graph.
    pub fn all_relationships(&self) -> impl Iterator<Item = &LanguageRelationship> {
        self.edges.values().flatten()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
