//! Prompt specs, presets and rendering.
//!
//! Design:
//! - `spec.rs` holds the immutable `PromptSpec` record and its
//!   construction-time placeholder validation.
//! - `presets.rs` turns the known model families into ready-made specs
//!   (data, not subclasses).
//! - `render.rs` substitutes runtime values into the template.

mod presets;
mod render;
mod spec;

pub use presets::{classification_spec, SpecPreset, CLASSIFICATION_SYSTEM};
pub use render::{RenderRequest, RenderedPrompt};
pub use spec::{ExampleTurn, PromptSpec};
