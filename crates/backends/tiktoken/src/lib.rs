//! BPE tokenizer backend over tiktoken.
//!
//! Token counts only need to be deterministic and token-aligned for
//! budgeting, so any fixed vocabulary works; cl100k is a reasonable stand-in
//! when the target model has no tiktoken name.

use tiktoken_rs::{cl100k_base, get_bpe_from_model, CoreBPE};
use triage_abi::{Token, Tokenizer};

pub struct BpeTokenizer {
    bpe: CoreBPE,
    model_id: String,
}

impl BpeTokenizer {
    /// Look the vocabulary up by model name (e.g. `gpt-4`).
    pub fn for_model(model: &str) -> Result<Self, String> {
        let bpe = get_bpe_from_model(model).map_err(|e| e.to_string())?;
        Ok(Self {
            bpe,
            model_id: model.to_string(),
        })
    }

    /// The cl100k_base vocabulary.
    pub fn cl100k() -> Result<Self, String> {
        let bpe = cl100k_base().map_err(|e| e.to_string())?;
        Ok(Self {
            bpe,
            model_id: "cl100k_base".to_string(),
        })
    }
}

impl Tokenizer for BpeTokenizer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn encode(&self, text: &str) -> Vec<Token> {
        self.bpe.encode_ordinary(text).into_iter().map(Token).collect()
    }

    fn decode(&self, tokens: &[Token]) -> Result<String, String> {
        let ids = tokens.iter().map(|t| t.0).collect::<Vec<_>>();
        self.bpe.decode(ids).map_err(|e| e.to_string())
    }
}
