//! # Dialogue Core
//!
//! The language comprehension and dialogue engine. This crate builds on
//! `language_rules` and decides how much of a conversation each agent
//! understands.
//!
//! ## Core Components
//!
//! - **relationship_graph**: Directed intelligibility edges between languages
//! - **proficiency_store**: Per-agent language records
//! - **comprehension**: Scores an agent's understanding of a language
//! - **dialogue**: Renders partially legible text and reads emotional tone
//! - **resolver**: Picks the best shared language for two agents
//! - **exposure**: Natural learning from contact hours
//! - **settlement**: Generates settlement language profiles
//! - **advisor**: Recommends languages worth learning
//! - **engine**: The `LanguageEngine` that owns all of the above
//!
//! ## Design Philosophy
//!
//! - **Never blocking**: Every pair of agents can always talk in *some* language
//! - **Single hop**: Related-language understanding never chains through intermediates
//! - **Reproducible**: All randomness flows through an injected `rand::Rng`

pub mod advisor;
pub mod comprehension;
pub mod dialogue;
pub mod engine;
pub mod exposure;
pub mod proficiency_store;
pub mod relationship_graph;
pub mod resolver;
pub mod settlement;

pub use advisor::*;
pub use comprehension::*;
pub use dialogue::*;
pub use engine::*;
pub use exposure::*;
pub use proficiency_store::*;
pub use relationship_graph::*;
pub use resolver::*;
pub use settlement::*;

pub use language_rules::RulesError;
