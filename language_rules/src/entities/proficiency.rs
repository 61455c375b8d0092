//! Proficiency records held by agents.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::world_time::WorldTime;

/// An agent's proficiency in one language.
///
/// All three levels live in `[0.0, 1.0]`. Records built through [`Self::new`]
/// are clamped immediately; records arriving from persistence are clamped again
/// when they are written into a proficiency store via [`Self::clamped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProficiency {
    pub language: Language,
    pub comprehension_level: f32,
    pub speaking_level: f32,
    pub literacy_level: f32,

    /// Accumulated contact hours driving natural learning.
    #[serde(default)]
    pub exposure_hours: u32,

    /// Formal study is the only way past the natural learning caps.
    #[serde(default)]
    pub formal_training: bool,

    /// Game time at which the record was first granted.
    #[serde(default)]
    pub acquired_at: WorldTime,
}

impl LanguageProficiency {
    /// Create a proficiency with the given levels, clamped into `[0.0, 1.0]`.
    pub fn new(language: Language, comprehension: f32, speaking: f32, literacy: f32) -> Self {
        Self {
            language,
            comprehension_level: comprehension,
            speaking_level: speaking,
            literacy_level: literacy,
            exposure_hours: 0,
            formal_training: false,
            acquired_at: WorldTime::default(),
        }
        .clamped()
    }

    /// A blank record, as created by first exposure to an unknown language.
    pub fn untrained(language: Language) -> Self {
        Self::new(language, 0.0, 0.0, 0.0)
    }

    /// Native fluency: full comprehension and speech, mostly literate.
    pub fn native(language: Language) -> Self {
        Self::new(language, 1.0, 1.0, 0.8).with_formal_training(true)
    }

    pub fn with_formal_training(mut self, formal: bool) -> Self {
        self.formal_training = formal;
        self
    }

    pub fn with_acquired_at(mut self, time: WorldTime) -> Self {
        self.acquired_at = time;
        self
    }

    pub fn with_exposure_hours(mut self, hours: u32) -> Self {
        self.exposure_hours = hours;
        self
    }

    /// Return a copy with every level forced into `[0.0, 1.0]`. NaN becomes 0.
    pub fn clamped(mut self) -> Self {
        self.comprehension_level = clamp_level(self.comprehension_level);
        self.speaking_level = clamp_level(self.speaking_level);
        self.literacy_level = clamp_level(self.literacy_level);
        self
    }
}

/// Clamp a level into `[0.0, 1.0]`, mapping NaN to zero.
pub fn clamp_level(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
