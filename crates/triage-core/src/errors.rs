use thiserror::Error;

/// Spec construction failures. Fatal: the spec itself is wrong and the
/// caller has to fix it, so these never show up at render time.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{name}}}` in template for `{spec_id}`")]
    UnknownPlaceholder { spec_id: String, name: String },

    #[error("spec `{spec_id}` needs at least one example pair")]
    MissingExamples { spec_id: String },
}

/// Extraction failures. Recoverable: log the record and skip it rather than
/// crashing the batch. Both variants keep the offending text around for
/// offline diagnosis.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The cutoff marker was found fewer than two times, so there is no way
    /// to tell where the echoed prompt ends and the answer begins.
    #[error("cutoff `{cutoff}` occurs {found} time(s) in output of `{spec_id}`; need 2 to locate the answer")]
    MalformedEcho {
        spec_id: String,
        cutoff: String,
        found: usize,
        raw: String,
    },

    /// The answer span is not the expected CATEGORY/SUB-CATEGORY object.
    /// Never mapped to empty defaults; that would mask model or template
    /// drift.
    #[error("answer span from `{spec_id}` is not a valid CATEGORY/SUB-CATEGORY payload: {source}")]
    UnparsablePayload {
        spec_id: String,
        span: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Token budgeting failures (a token prefix that does not decode cleanly).
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("detokenize failed for `{model_id}`: {reason}")]
    Detokenize { model_id: String, reason: String },
}

/// One classification step end to end.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("backend completion failed: {0}")]
    Backend(String),

    #[error(transparent)]
    Budget(#[from] BudgetError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
