/// Wrapper for a tokenizer unit (ID). Using a newtype avoids accidental
/// mixing with unrelated `u32`s and keeps conversions explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Token(pub u32);

// Using u32 matches tiktoken's rank type. If a backend uses i32, convert
// at the glue layer and keep this type consistent everywhere else.

impl From<u32> for Token {
    #[inline]
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    #[inline]
    fn from(token: Token) -> u32 {
        token.0
    }
}

/// Pluggable tokenizer used for token budgeting.
///
/// Implementations must be deterministic for a given `model_id`: the same
/// text always encodes to the same token sequence.
pub trait Tokenizer: Send + Sync {
    /// Stable identifier for the tokenizer/model pair (diagnostics, log rows).
    fn model_id(&self) -> &str;

    /// Split `text` into token IDs.
    fn encode(&self, text: &str) -> Vec<Token>;

    /// Rebuild text from token IDs. May fail if a token slice does not decode
    /// to valid UTF-8 on its own.
    fn decode(&self, tokens: &[Token]) -> Result<String, String>;

    /// Token count of `text`.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}
