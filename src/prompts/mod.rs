// Thin typed wrappers over the prompt-generation service: each flow is a
// template constant plus serde input/output structs.
pub mod client;
pub mod crops;
pub mod discover;
pub mod geocode;
pub mod notify;
pub mod recipes;

pub use client::{PromptClient, PromptError};
