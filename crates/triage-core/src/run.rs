//! One synchronous classification step: render, complete, extract.

use std::time::Instant;

use triage_abi::{CompletionBackend, CompletionParams, Tokenizer};

use crate::errors::ClassifyError;
use crate::extract::ParsedResponse;
use crate::prompt::{PromptSpec, RenderRequest};

/// Ties one spec and one set of completion knobs to whatever backend the
/// caller supplies. Holds no call state; safe to reuse across a batch.
pub struct Classifier {
    spec: PromptSpec,
    params: CompletionParams,
}

impl Classifier {
    /// Defaults match the batch scripts this grew out of: temperature 0,
    /// 100 completion tokens, echo on, the spec's stop sentinels.
    pub fn new(spec: PromptSpec) -> Self {
        let params = CompletionParams {
            stop: spec.stops().to_vec(),
            ..CompletionParams::default()
        };
        Self { spec, params }
    }

    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    pub fn spec(&self) -> &PromptSpec {
        &self.spec
    }

    /// Classify a single message.
    ///
    /// The backend call is the only blocking step; its wall-clock time and
    /// usage counters land in the result unchanged. Extraction failures are
    /// recoverable; callers should log and skip the record.
    pub fn classify(
        &self,
        backend: &mut dyn CompletionBackend,
        tokenizer: &dyn Tokenizer,
        message: &str,
        token_budget: Option<usize>,
    ) -> Result<ParsedResponse, ClassifyError> {
        let req = RenderRequest {
            message,
            token_budget,
        };
        let rendered = self.spec.render(&req, tokenizer)?;

        let started = Instant::now();
        let output = backend
            .complete(&rendered.text, &self.params)
            .map_err(ClassifyError::Backend)?;
        let duration = started.elapsed();
        tracing::debug!(
            spec_id = self.spec.id(),
            raw = output.text.as_str(),
            "raw response"
        );

        let payload = self.spec.extract(&output.text)?;
        Ok(ParsedResponse::from_parts(
            message,
            payload,
            output.usage,
            duration,
        ))
    }
}
