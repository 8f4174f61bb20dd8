// Prompt structuring engine.
// analyzer + assembler + form + variables are pure and never log or do I/O;
// only handlers reach for the completion provider.

pub mod analyzer;
pub mod assembler;
pub mod form;
pub mod handlers;
pub mod prompts;
pub mod variables;
pub mod vocabulary;
