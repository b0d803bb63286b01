//! Triage core: shapes the exact text handed to a completion model and
//! parses the text that comes back.
//!
//! Three stateless pieces cooperate:
//! - `prompt` renders an immutable [`PromptSpec`] plus a user message into
//!   the final prompt string;
//! - `extract` isolates the generated continuation from echo-back output and
//!   parses the embedded category payload;
//! - `budget` keeps messages inside a token budget via a pluggable tokenizer.
//!
//! The model call itself lives behind `triage_abi::CompletionBackend`; the
//! `run` module wires all of it into one synchronous classification step.

pub mod budget;
pub mod errors;
pub mod extract;
pub mod prompt;
pub mod run;

pub use errors::{BudgetError, ClassifyError, ExtractError, TemplateError};
pub use extract::{extract, AnswerPayload, ParsedResponse};
pub use prompt::{
    classification_spec, ExampleTurn, PromptSpec, RenderRequest, RenderedPrompt, SpecPreset,
};
pub use run::Classifier;

#[cfg(test)]
pub(crate) mod testutil;
