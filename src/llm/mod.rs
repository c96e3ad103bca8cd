//! Text-generation service integration

pub mod client;
pub mod prompts;
pub mod scorer;

pub use client::{GenerationClient, HttpGenerationClient};
pub use scorer::CandidateScorer;
