//! Topic extraction: maps tweet text to at most three coarse subject labels.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{MAX_TOPICS, TOPIC_TABLE};

/// Coarse subject-matter label assigned from keyword presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Tech,
    Design,
    Business,
    Writing,
    Education,
    Community,
    Life,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Tech => "tech",
            Topic::Design => "design",
            Topic::Business => "business",
            Topic::Writing => "writing",
            Topic::Education => "education",
            Topic::Community => "community",
            Topic::Life => "life",
        }
    }
}

/// Returns the topics whose keywords appear in the tweets, in topic-table order,
/// truncated to `MAX_TOPICS`. The bio is deliberately not consulted.
pub fn extract_topics<S: AsRef<str>>(tweets: &[S]) -> Vec<Topic> {
    let text = tweets
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    TOPIC_TABLE
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(topic, _)| *topic)
        .take(MAX_TOPICS)
        .collect()
}
