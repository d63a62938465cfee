// ATS matching pipeline.
// Prompt building → reasoning gateway → interpretation → compliance override.
// All reasoning calls go through llm_client::ReasoningGateway.

pub mod handlers;
pub mod interpreter;
pub mod orchestrator;
pub mod prompt_builder;
pub mod prompts;
