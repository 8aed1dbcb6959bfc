// Interview question generation.
// Implements: category selection, prompt building, the generation loop, rendering.
// All LLM calls go through llm_client via the TextGenerator trait.

pub mod category;
pub mod driver;
pub mod prompt_builder;
pub mod prompts;
pub mod render;
