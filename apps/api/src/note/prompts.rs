// Prompt constants for the generative note writer.

/// System instruction for note generation.
pub const NOTE_SYSTEM: &str = "You are a thoughtful friend writing personalized encouragement notes. \
    Your notes are warm, genuine, and make people feel seen and appreciated. \
    Write ONLY the note itself. No meta-commentary, no greeting card headers, no signatures. \
    Never mention that the note was generated or that you are an AI.";

/// Note prompt template.
/// Replace: {display_name}, {tone}, {tone_guidance}, {positive}, {humorous}, {technical},
///          {creative}, {helpful}, {topics}, {username}, {bio}, {tweets}
pub const NOTE_PROMPT_TEMPLATE: &str = r#"Write a heartfelt, personalized encouragement note for a social media user.

Personality analysis:
- Positive sentiment: {positive}
- Humorous: {humorous}
- Technical/Developer: {technical}
- Creative: {creative}
- Helpful/Supportive: {helpful}
- Main topics: {topics}
- Tone style: {tone} ({tone_guidance})

Write a unique, genuine note of 3-5 sentences that:
1. Addresses them by their name ({display_name})
2. References specific aspects of their personality or content from the analysis
3. Feels warm, authentic, and uplifting
4. Matches their tone style ({tone})
5. Is NOT generic and avoids cliches and overused phrases

User information:
- Username: @{username}
- Bio: {bio}
- Recent posts sample: {tweets}"#;

/// How many tweets are quoted in the prompt.
pub const PROMPT_TWEET_SAMPLE: usize = 5;
