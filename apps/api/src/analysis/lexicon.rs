//! Keyword tables driving trait, topic, and tone detection.
//!
//! Every table is matched as a lowercase substring against lowercased text.
//! Order matters for `TOPIC_TABLE`: topics are reported in table order, not by relevance.

use crate::analysis::topics::Topic;

/// Any hit marks a profile as positive.
pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "awesome",
    "amazing",
    "wonderful",
    "fantastic",
    "happy",
    "excited",
    "grateful",
    "thank",
];

/// Laughter tokens, laughing emoji, and humor vocabulary. Any hit marks a profile as humorous.
pub const HUMOR_INDICATORS: &[&str] = &[
    "lol",
    "haha",
    "\u{1F602}", // face with tears of joy
    "\u{1F605}", // grinning face with sweat
    "\u{1F923}", // rolling on the floor laughing
    "\u{1F604}", // grinning face with smiling eyes
    "funny",
    "joke",
    "ironic",
];

/// At least `TECH_MIN_MATCHES` distinct hits mark a profile as technical.
pub const TECH_WORDS: &[&str] = &[
    "code",
    "dev",
    "api",
    "programming",
    "software",
    "tech",
    "javascript",
    "python",
    "build",
    "deploy",
    "database",
];

pub const TECH_MIN_MATCHES: usize = 2;

/// Any hit marks a profile as creative.
pub const CREATIVE_WORDS: &[&str] = &[
    "design",
    "create",
    "art",
    "creative",
    "writing",
    "story",
    "music",
    "photo",
    "visual",
    "aesthetic",
];

/// At least `HELPFUL_MIN_MATCHES` distinct hits mark a profile as helpful.
pub const HELPFUL_WORDS: &[&str] = &[
    "help",
    "share",
    "support",
    "community",
    "learn",
    "teach",
    "guide",
    "tip",
    "advice",
];

pub const HELPFUL_MIN_MATCHES: usize = 2;

/// Ordered topic table. A topic is reported when any of its keywords appears in the tweets.
pub const TOPIC_TABLE: &[(Topic, &[&str])] = &[
    (
        Topic::Tech,
        &["code", "dev", "programming", "software", "tech", "ai", "ml"],
    ),
    (Topic::Design, &["design", "ui", "ux", "creative", "art"]),
    (
        Topic::Business,
        &["startup", "business", "entrepreneur", "founder", "company"],
    ),
    (
        Topic::Writing,
        &["writing", "blog", "story", "article", "content"],
    ),
    (
        Topic::Education,
        &["learn", "teach", "education", "student", "course"],
    ),
    (
        Topic::Community,
        &["community", "people", "together", "support", "help"],
    ),
    (
        Topic::Life,
        &["life", "journey", "growth", "mindset", "motivation"],
    ),
];

/// Maximum number of topics reported for a profile.
pub const MAX_TOPICS: usize = 3;

/// Words that signal a reflective voice.
pub const THOUGHTFUL_WORDS: &[&str] = &["think", "believe"];

/// Connectives that signal a formal voice.
pub const FORMAL_WORDS: &[&str] = &["moreover", "therefore", "furthermore"];

/// Returns true if any keyword appears in `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Counts how many distinct keywords from the list appear in `text`.
/// Repeated occurrences of the same keyword count once.
pub fn count_distinct(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}
