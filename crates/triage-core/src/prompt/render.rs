use std::borrow::Cow;

use triage_abi::Tokenizer;

use crate::budget;
use crate::errors::BudgetError;
use crate::prompt::spec::{PromptSpec, PLACEHOLDER};

/// One render call: the user message plus an optional token budget.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub message: &'a str,
    /// Maximum tokens the message may occupy before substitution; `None`
    /// renders the message untouched.
    pub token_budget: Option<usize>,
}

impl<'a> RenderRequest<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            token_budget: None,
        }
    }

    pub fn with_budget(message: &'a str, token_budget: usize) -> Self {
        Self {
            message,
            token_budget: Some(token_budget),
        }
    }
}

/// Fully substituted prompt text, ready for the model boundary, together
/// with the spec's stop sentinels for backends that want them.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    pub text: String,
    pub stop_sequences: Vec<String>,
}

impl PromptSpec {
    /// Fill the template with this spec's fields and the request's message.
    ///
    /// Pure: the same spec, request and tokenizer always produce the same
    /// output. Substitution is a single pass over the template, so values
    /// (which may themselves contain braces) are never re-scanned.
    pub fn render(
        &self,
        req: &RenderRequest<'_>,
        tokenizer: &dyn Tokenizer,
    ) -> Result<RenderedPrompt, BudgetError> {
        let message: Cow<'_, str> = match req.token_budget {
            Some(limit) if budget::count_tokens(tokenizer, req.message) > limit => {
                Cow::Owned(budget::truncate_to(tokenizer, req.message, limit)?)
            }
            _ => Cow::Borrowed(req.message),
        };

        let template = self.template();
        let mut text = String::with_capacity(template.len() + message.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(template) {
            let whole = caps.get(0).expect("group 0 always present");
            text.push_str(&template[last..whole.start()]);
            match self.field(&caps[1], &message) {
                Some(value) => text.push_str(value),
                // Unknown names are rejected at construction; anything that
                // still lands here is literal text and stays as-is.
                None => text.push_str(whole.as_str()),
            }
            last = whole.end();
        }
        text.push_str(&template[last..]);

        Ok(RenderedPrompt {
            text,
            stop_sequences: self.stops().to_vec(),
        })
    }
}
