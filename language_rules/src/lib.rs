//! # Language Rules
//!
//! The data vocabulary of the language system: the language catalog and its
//! families, per-agent proficiency records, settlement language profiles and
//! the tuning configuration. This crate holds no comprehension logic.

pub mod config;
pub mod entities;
pub mod error;
pub mod language;
pub mod settlement;
pub mod world_time;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use language::*;
pub use settlement::*;
pub use world_time::*;
