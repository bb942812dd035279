use serde::{Deserialize, Serialize};

/// Upper bound on tweets kept per profile.
pub const MAX_TWEETS: usize = 10;

/// Public profile data fed into the personality engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tweets: Vec<String>,
}

impl ProfileData {
    /// Builds a profile from raw collaborator output.
    ///
    /// Cleans the username, falls back to it when the name is blank, trims text,
    /// drops empty tweets, and keeps at most `MAX_TWEETS`.
    pub fn normalized(username: &str, name: &str, bio: &str, tweets: Vec<String>) -> Self {
        let username = clean_username(username).to_string();
        let name = match name.trim() {
            "" => username.clone(),
            n => n.to_string(),
        };
        let tweets = tweets
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .take(MAX_TWEETS)
            .collect();

        Self {
            username,
            name,
            bio: bio.trim().to_string(),
            tweets,
        }
    }

    /// Re-applies `normalized` to a deserialized profile.
    pub fn into_normalized(self) -> Self {
        Self::normalized(&self.username, &self.name, &self.bio, self.tweets)
    }

    /// Name shown in greetings: the name if non-empty, otherwise the username.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }

    /// Tweets followed by the bio, joined with single spaces and lowercased.
    pub fn all_text(&self) -> String {
        self.tweets
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.bio.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// A profile with neither a name nor tweets is indistinguishable from a missing one.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.tweets.is_empty()
    }
}

/// Strips surrounding whitespace and one leading `@`.
pub fn clean_username(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_username() {
        assert_eq!(clean_username("alice"), "alice");
        assert_eq!(clean_username("@alice"), "alice");
        assert_eq!(clean_username("  @alice  "), "alice");
        assert_eq!(clean_username("@"), "");
        assert_eq!(clean_username("   "), "");
    }

    #[test]
    fn test_normalized_falls_back_to_username_for_name() {
        let p = ProfileData::normalized("@bob", "  ", "", vec![]);
        assert_eq!(p.username, "bob");
        assert_eq!(p.name, "bob");
    }

    #[test]
    fn test_normalized_drops_empty_tweets_and_caps_count() {
        let mut tweets: Vec<String> = (0..15).map(|i| format!(" tweet {i} ")).collect();
        tweets.insert(0, "   ".to_string());
        let p = ProfileData::normalized("carol", "Carol", " bio ", tweets);
        assert_eq!(p.tweets.len(), MAX_TWEETS);
        assert_eq!(p.tweets[0], "tweet 0");
        assert_eq!(p.bio, "bio");
    }

    #[test]
    fn test_all_text_joins_tweets_then_bio_lowercased() {
        let p = ProfileData {
            username: "dan".to_string(),
            name: "Dan".to_string(),
            bio: "Bio Text".to_string(),
            tweets: vec!["One".to_string(), "Two".to_string()],
        };
        assert_eq!(p.all_text(), "one two bio text");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let mut p = ProfileData {
            username: "erin".to_string(),
            name: "Erin E.".to_string(),
            ..Default::default()
        };
        assert_eq!(p.display_name(), "Erin E.");
        p.name.clear();
        assert_eq!(p.display_name(), "erin");
    }

    #[test]
    fn test_display_name_keeps_whitespace_name_until_normalized() {
        let p = ProfileData {
            username: "bob".to_string(),
            name: "  ".to_string(),
            tweets: vec!["hi".to_string()],
            ..Default::default()
        };
        assert_eq!(p.display_name(), "  ");
        assert_eq!(p.into_normalized().display_name(), "bob");
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let p: ProfileData = serde_json::from_str(r#"{"username": "frank"}"#).unwrap();
        assert_eq!(p.username, "frank");
        assert!(p.tweets.is_empty());
        assert!(p.is_empty());
    }
}
