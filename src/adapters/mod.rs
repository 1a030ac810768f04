// Adapters layer: concrete implementations of the domain ports.

pub mod clipboard;
pub mod gemini;
pub mod prompts;
pub mod schema;
pub mod storage;
