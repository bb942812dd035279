//! Deterministic note composer: opening, one or two body messages, closing.
//!
//! No randomness and no I/O: the same `(profile, traits)` always yields the same note.
//! This is the required fallback whenever the generative writer is unavailable.

use crate::analysis::{PersonalityTraits, ToneStyle, Topic};
use crate::models::profile::ProfileData;

/// Maximum number of body messages in a composed note.
const MAX_BODY_MESSAGES: usize = 2;

const GENERIC_WITH_BIO: &str = "Everything about your profile shows someone who brings genuine care and curiosity to what they do.";
const GENERIC_WITHOUT_BIO: &str =
    "Your voice online is a reminder that showing up and sharing who you are really matters.";

/// A body rule: when the predicate holds, its message is a candidate for the note.
struct BodyRule {
    applies: fn(&PersonalityTraits) -> bool,
    message: &'static str,
}

/// Ordered body rules. Candidates are taken in this order, never shuffled.
const BODY_RULES: &[BodyRule] = &[
    BodyRule {
        applies: |t| t.is_technical && t.has_topic(Topic::Tech),
        message: "Your passion for building things with code is genuinely inspiring, and the care you put into hard technical problems shows.",
    },
    BodyRule {
        applies: |t| t.is_creative && t.has_topic(Topic::Design),
        message: "You have a rare eye for design, and the things you create bring beauty and thoughtfulness into the world.",
    },
    BodyRule {
        applies: |t| t.is_helpful,
        message: "The way you share what you know and lift up the people around you makes your community better for everyone.",
    },
    BodyRule {
        applies: |t| t.is_positive,
        message: "Your positivity is contagious, and your enthusiasm brightens the day of everyone who reads your posts.",
    },
    BodyRule {
        applies: |t| t.is_humorous,
        message: "Your sense of humor is a gift, and you make people laugh on the days they need it most.",
    },
    BodyRule {
        applies: |t| t.has_topic(Topic::Business),
        message: "Building something of your own takes courage, and your entrepreneurial drive is truly admirable.",
    },
    BodyRule {
        applies: |t| t.has_topic(Topic::Writing) || t.has_topic(Topic::Education),
        message: "Your words teach and inspire, and the knowledge you put into the world keeps making a difference.",
    },
];

fn opening(tone: ToneStyle, name: &str) -> String {
    match tone {
        ToneStyle::Enthusiastic => format!("Wow {name}, "),
        ToneStyle::Thoughtful => format!("Dear {name}, "),
        ToneStyle::Formal => format!("Hello {name}, "),
        ToneStyle::Casual => format!("Hey {name}, "),
    }
}

fn closing(tone: ToneStyle) -> &'static str {
    match tone {
        ToneStyle::Enthusiastic => "Keep being amazing! \u{1F680}",
        ToneStyle::Thoughtful => "Keep reflecting, keep growing. \u{1F331}",
        ToneStyle::Formal => "With sincere appreciation and best wishes.",
        ToneStyle::Casual => "Keep shining! \u{2728}",
    }
}

/// Messages of every matching body rule, in rule-table order.
fn body_candidates(traits: &PersonalityTraits) -> Vec<&'static str> {
    BODY_RULES
        .iter()
        .filter(|rule| (rule.applies)(traits))
        .map(|rule| rule.message)
        .collect()
}

fn body(profile: &ProfileData, traits: &PersonalityTraits) -> String {
    let candidates = body_candidates(traits);
    if candidates.is_empty() {
        let generic = if profile.bio.trim().is_empty() {
            GENERIC_WITHOUT_BIO
        } else {
            GENERIC_WITH_BIO
        };
        return generic.to_string();
    }

    candidates
        .into_iter()
        .take(MAX_BODY_MESSAGES)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Composes a note for the profile. Total: always returns a non-empty string.
pub fn compose(profile: &ProfileData, traits: &PersonalityTraits) -> String {
    let tone = traits.tone_style;
    format!(
        "{}{} {}",
        opening(tone, profile.display_name()),
        body(profile, traits),
        closing(tone)
    )
}
