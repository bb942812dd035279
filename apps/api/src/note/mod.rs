// Note engine: deterministic composer, fallback templates, pluggable writers, pipeline.
// All generative calls go through llm_client via LlmNoteWriter; nothing here calls Gemini directly.

pub mod composer;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod writer;
