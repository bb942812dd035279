//! Fallback note selection for profiles we could not read.
//!
//! The template index is a stable function of the username: a 32-bit string hash
//! (`h = h * 31 + unit`, wrapping, over UTF-16 code units). Changing the recurrence or
//! the template order reassigns notes for every existing username.

use crate::models::profile::clean_username;

/// Returned when the username is empty after cleaning.
pub const DEFAULT_FALLBACK_NOTE: &str = "You're doing amazing things, and the world is better with you in it. Keep shining! \u{2728}";

/// Ordered fallback templates. `{user}` is replaced with the cleaned username.
pub const FALLBACK_TEMPLATES: &[&str] = &[
    "Hey @{user}, every post you share adds a little more light to the internet. Keep being you! \u{2728}",
    "Dear @{user}, your curiosity and kindness leave a mark on everyone you meet online. Keep going! \u{1F31F}",
    "@{user}, the world needs more people who show up the way you do. Never stop sharing your voice! \u{1F4AB}",
    "Hi @{user}! Your journey is inspiring, and the best chapters are still ahead of you. Keep shining! \u{2600}\u{FE0F}",
    "@{user}, thank you for making your corner of the internet a warmer place. You matter more than you know! \u{1F49B}",
    "Hey @{user}, your ideas and energy are a gift to the people around you. Keep building, keep dreaming! \u{1F680}",
    "To @{user}: small acts of showing up add up to something remarkable, and you're proof of that. Cheers to you! \u{1F389}",
];

/// Java-style string hash over UTF-16 code units, wrapping at 32 bits.
pub fn username_hash(username: &str) -> i32 {
    username
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Index into `FALLBACK_TEMPLATES` for an already-cleaned username.
pub fn template_index(username: &str) -> usize {
    username_hash(username).unsigned_abs() as usize % FALLBACK_TEMPLATES.len()
}

/// Picks the fallback note for a username. Deterministic and total.
pub fn select_fallback(username: &str) -> String {
    let user = clean_username(username);
    if user.is_empty() {
        return DEFAULT_FALLBACK_NOTE.to_string();
    }
    FALLBACK_TEMPLATES[template_index(user)].replace("{user}", user)
}
