use serde::{Deserialize, Serialize};

/// Token accounting reported by a backend for one completion call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UsageCounters {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl UsageCounters {
    #[inline]
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Knobs for one synchronous completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Textual stop sentinels the backend should halt generation on.
    pub stop: Vec<String>,
    /// Whether the backend echoes the full prompt back before the answer.
    pub echo: bool,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 100,
            stop: Vec::new(),
            echo: true,
        }
    }
}

/// Raw result of a completion call: model text plus usage accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    pub text: String,
    pub usage: UsageCounters,
}

/// Backend-agnostic interface for synchronous completion engines.
///
/// The core only shapes the string it sends and parses the string it gets
/// back; loading, sampling and stop enforcement are the backend's business.
pub trait CompletionBackend {
    fn complete(&mut self, prompt: &str, params: &CompletionParams)
        -> Result<ModelOutput, String>;
}
