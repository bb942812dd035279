//! Tone classification: maps punctuation and connective words to one of four voices.
//!
//! The rules form a strict priority chain. A text that is both exclamatory and formal
//! is enthusiastic; the later rules never override an earlier match.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{contains_any, FORMAL_WORDS, THOUGHTFUL_WORDS};

/// More than this many `!` characters makes a text enthusiastic.
const ENTHUSIASTIC_EXCLAMATIONS: usize = 5;
/// More than this many `?` characters makes a text thoughtful.
const THOUGHTFUL_QUESTIONS: usize = 3;

/// Detected writing voice of a profile. Drives note openings and closings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    Formal,
    #[default]
    Casual,
    Enthusiastic,
    Thoughtful,
}

impl ToneStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneStyle::Formal => "formal",
            ToneStyle::Casual => "casual",
            ToneStyle::Enthusiastic => "enthusiastic",
            ToneStyle::Thoughtful => "thoughtful",
        }
    }

    /// Short style guidance handed to the generative writer alongside the tone label.
    pub fn guidance(&self) -> &'static str {
        match self {
            ToneStyle::Formal => "polished and respectful, with complete sentences",
            ToneStyle::Casual => "relaxed and friendly, like a message from a good friend",
            ToneStyle::Enthusiastic => "high-energy and celebratory",
            ToneStyle::Thoughtful => "calm and reflective, acknowledging their ideas",
        }
    }
}

/// Classifies lowercased profile text (tweets plus bio) into a tone.
///
/// Priority:
/// 1. more than 5 `!` → enthusiastic
/// 2. more than 3 `?`, or "think" / "believe" → thoughtful
/// 3. "moreover" / "therefore" / "furthermore" → formal
/// 4. otherwise casual
pub fn classify_tone(all_text: &str) -> ToneStyle {
    let exclamations = all_text.matches('!').count();
    let questions = all_text.matches('?').count();

    if exclamations > ENTHUSIASTIC_EXCLAMATIONS {
        ToneStyle::Enthusiastic
    } else if questions > THOUGHTFUL_QUESTIONS || contains_any(all_text, THOUGHTFUL_WORDS) {
        ToneStyle::Thoughtful
    } else if contains_any(all_text, FORMAL_WORDS) {
        ToneStyle::Formal
    } else {
        ToneStyle::Casual
    }
}
