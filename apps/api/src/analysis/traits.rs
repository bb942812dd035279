//! Trait extraction: boolean personality signals derived from profile text.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{
    contains_any, count_distinct, CREATIVE_WORDS, HELPFUL_MIN_MATCHES, HELPFUL_WORDS,
    HUMOR_INDICATORS, MAX_TOPICS, POSITIVE_WORDS, TECH_MIN_MATCHES, TECH_WORDS,
};
use crate::analysis::tone::{classify_tone, ToneStyle};
use crate::analysis::topics::{extract_topics, Topic};
use crate::models::profile::ProfileData;

/// Shallow personality signals for one profile.
///
/// `top_topics` holds at most three topics, in topic-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    pub is_positive: bool,
    pub is_humorous: bool,
    pub is_technical: bool,
    pub is_creative: bool,
    pub is_helpful: bool,
    pub top_topics: Vec<Topic>,
    pub tone_style: ToneStyle,
}

impl PersonalityTraits {
    pub fn has_topic(&self, topic: Topic) -> bool {
        self.top_topics.contains(&topic)
    }

    /// Checks traits supplied from outside the extractor: at most `MAX_TOPICS`
    /// topics, none repeated.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_topics.len() > MAX_TOPICS {
            return Err(format!(
                "topTopics may list at most {MAX_TOPICS} topics, got {}",
                self.top_topics.len()
            ));
        }
        for (i, topic) in self.top_topics.iter().enumerate() {
            if self.top_topics[..i].contains(topic) {
                return Err(format!("topTopics lists \"{}\" more than once", topic.as_str()));
            }
        }
        Ok(())
    }
}

/// The five boolean trait flags, computed from lowercased tweets-plus-bio text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraitFlags {
    pub is_positive: bool,
    pub is_humorous: bool,
    pub is_technical: bool,
    pub is_creative: bool,
    pub is_helpful: bool,
}

/// Evaluates every trait lexicon against `all_text`.
///
/// Positive, humorous, and creative need a single hit. Technical and helpful need
/// at least two distinct keyword hits each.
pub fn extract_traits(all_text: &str) -> TraitFlags {
    TraitFlags {
        is_positive: contains_any(all_text, POSITIVE_WORDS),
        is_humorous: contains_any(all_text, HUMOR_INDICATORS),
        is_technical: count_distinct(all_text, TECH_WORDS) >= TECH_MIN_MATCHES,
        is_creative: contains_any(all_text, CREATIVE_WORDS),
        is_helpful: count_distinct(all_text, HELPFUL_WORDS) >= HELPFUL_MIN_MATCHES,
    }
}

/// Derives the full trait set for a profile. Pure: same profile, same traits.
pub fn analyze_personality(profile: &ProfileData) -> PersonalityTraits {
    let all_text = profile.all_text();
    let flags = extract_traits(&all_text);

    PersonalityTraits {
        is_positive: flags.is_positive,
        is_humorous: flags.is_humorous,
        is_technical: flags.is_technical,
        is_creative: flags.is_creative,
        is_helpful: flags.is_helpful,
        top_topics: extract_topics(&profile.tweets),
        tone_style: classify_tone(&all_text),
    }
}
