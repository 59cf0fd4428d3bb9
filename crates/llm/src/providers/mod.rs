//! Concrete chat-completion providers.

pub mod openai;

pub use openai::OpenAiCompatibleClient;
