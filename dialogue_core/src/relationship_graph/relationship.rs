//! Relationship edges.

use language_rules::{clamp_level, Language, RelationshipType};
use serde::{Deserialize, Serialize};

/// A directed edge: speakers of `base_language` partly understand
/// `related_language`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRelationship {
    pub base_language: Language,
    pub related_language: Language,

    /// Fraction of `base_language` comprehension that carries over (0.0 - 1.0).
    pub comprehension_bonus: f32,

    pub relationship_type: RelationshipType,

    /// Multiplier on learning effort; 1.0 is neutral.
    pub difficulty_modifier: f32,
}

impl LanguageRelationship {
    /// Create an edge with a neutral difficulty modifier.
    pub fn new(
        base_language: Language,
        related_language: Language,
        comprehension_bonus: f32,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            base_language,
            related_language,
            comprehension_bonus: clamp_level(comprehension_bonus),
            relationship_type,
            difficulty_modifier: 1.0,
        }
    }

    /// Set the learning difficulty modifier.
    pub fn with_difficulty(mut self, modifier: f32) -> Self {
        self.difficulty_modifier = modifier.max(0.0);
        self
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            base_language: self.related_language,
            related_language: self.base_language,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for LanguageRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.base_language, self.related_language, self.relationship_type
        )
    }
}
