// Personality analysis: trait flags, topic extraction, tone classification.
// Everything here is pure and synchronous. Handlers call it inline, no spawn_blocking needed.

pub mod lexicon;
pub mod tone;
pub mod topics;
pub mod traits;

pub use tone::ToneStyle;
pub use topics::Topic;
pub use traits::{analyze_personality, PersonalityTraits};
