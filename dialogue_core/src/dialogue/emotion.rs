//! Tone reading: what a listener picks up from punctuation and volume even
//! when the words are lost.

use serde::{Deserialize, Serialize};

/// An emotional cue inferred from how something was said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalCue {
    // Fine-grained, needs a good ear
    Excited,
    VeryExcited,
    Questioning,
    Shouting,
    Hesitant,

    // Coarse
    Emotional,
    AskingSomething,

    // Barely more than volume
    Intense,
    Calm,

    Neutral,
}

impl EmotionalCue {
    pub fn label(self) -> &'static str {
        match self {
            EmotionalCue::Excited => "excited",
            EmotionalCue::VeryExcited => "very excited",
            EmotionalCue::Questioning => "questioning",
            EmotionalCue::Shouting => "shouting",
            EmotionalCue::Hesitant => "hesitant",
            EmotionalCue::Emotional => "emotional",
            EmotionalCue::AskingSomething => "asking something",
            EmotionalCue::Intense => "intense",
            EmotionalCue::Calm => "calm",
            EmotionalCue::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for EmotionalCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Infer emotional cues from `text` given a tone score in `[0.0, 1.0]`.
///
/// | tone score | cues available                                   |
/// |------------|--------------------------------------------------|
/// | >= 0.8     | excited / very excited, questioning, shouting, hesitant |
/// | >= 0.5     | emotional, asking something                      |
/// | >= 0.2     | intense or calm                                  |
///
/// Always returns at least one cue; [`EmotionalCue::Neutral`] when nothing matches.
pub fn read_emotional_context(text: &str, tone_score: f32) -> Vec<EmotionalCue> {
    let exclamations = text.matches('!').count();
    let questioning = text.contains('?');
    let shouting = is_shouted(text);

    let mut cues = Vec::new();

    if tone_score >= 0.8 {
        match exclamations {
            0 => {}
            1 => cues.push(EmotionalCue::Excited),
            _ => cues.push(EmotionalCue::VeryExcited),
        }
        if questioning {
            cues.push(EmotionalCue::Questioning);
        }
        if shouting {
            cues.push(EmotionalCue::Shouting);
        }
        if text.contains("...") {
            cues.push(EmotionalCue::Hesitant);
        }
    } else if tone_score >= 0.5 {
        if exclamations > 0 || shouting {
            cues.push(EmotionalCue::Emotional);
        }
        if questioning {
            cues.push(EmotionalCue::AskingSomething);
        }
    } else if tone_score >= 0.2 {
        if exclamations > 0 || shouting {
            cues.push(EmotionalCue::Intense);
        } else {
            cues.push(EmotionalCue::Calm);
        }
    }

    if cues.is_empty() {
        cues.push(EmotionalCue::Neutral);
    }
    cues
}

/// All cased letters are uppercase, and there is at least one.
fn is_shouted(text: &str) -> bool {
    let mut cased = text.chars().filter(|c| c.is_uppercase() || c.is_lowercase()).peekable();
    cased.peek().is_some() && cased.all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fine_cues() {
        assert_eq!(read_emotional_context("Run!", 0.9), vec![EmotionalCue::Excited]);
        assert_eq!(
            read_emotional_context("RUN!! NOW!", 1.0),
            vec![EmotionalCue::VeryExcited, EmotionalCue::Shouting]
        );
        assert_eq!(
            read_emotional_context("Are you... sure?", 0.8),
            vec![EmotionalCue::Questioning, EmotionalCue::Hesitant]
        );
    }

    #[test]
    fn test_coarse_cues() {
        assert_eq!(
            read_emotional_context("Where is it?!", 0.6),
            vec![EmotionalCue::Emotional, EmotionalCue::AskingSomething]
        );
        assert_eq!(read_emotional_context("HALT", 0.5), vec![EmotionalCue::Emotional]);
    }

    #[test]
    fn test_volume_only() {
        assert_eq!(read_emotional_context("Stop!", 0.3), vec![EmotionalCue::Intense]);
        assert_eq!(read_emotional_context("Is it far?", 0.3), vec![EmotionalCue::Calm]);
    }

    #[test]
    fn test_neutral_default() {
        assert_eq!(read_emotional_context("A quiet remark.", 0.95), vec![EmotionalCue::Neutral]);
        assert_eq!(read_emotional_context("Stop!", 0.1), vec![EmotionalCue::Neutral]);
        assert_eq!(read_emotional_context("", 1.0), vec![EmotionalCue::Neutral]);
    }

    #[test]
    fn test_shouting_needs_letters() {
        assert!(is_shouted("GET DOWN"));
        assert!(!is_shouted("Get down"));
        assert!(!is_shouted("!!! 42"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(EmotionalCue::AskingSomething.to_string(), "asking something");
        assert_eq!(EmotionalCue::VeryExcited.label(), "very excited");
    }
}
