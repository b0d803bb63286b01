//! Test fixtures.

use std::sync::Mutex;

use triage_abi::{Token, Tokenizer};

/// Whitespace tokenizer with an interned vocab, so tests get deterministic
/// word-level token boundaries without dragging a real BPE in.
pub(crate) struct WordTokenizer {
    vocab: Mutex<Vec<String>>,
}

impl WordTokenizer {
    pub(crate) fn new() -> Self {
        Self {
            vocab: Mutex::new(Vec::new()),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn model_id(&self) -> &str {
        "word-test"
    }

    fn encode(&self, text: &str) -> Vec<Token> {
        let mut vocab = self.vocab.lock().unwrap();
        text.split_whitespace()
            .map(|word| {
                let id = match vocab.iter().position(|v| v == word) {
                    Some(i) => i,
                    None => {
                        vocab.push(word.to_string());
                        vocab.len() - 1
                    }
                };
                Token(id as u32)
            })
            .collect()
    }

    fn decode(&self, tokens: &[Token]) -> Result<String, String> {
        let vocab = self.vocab.lock().unwrap();
        let words = tokens
            .iter()
            .map(|t| {
                vocab
                    .get(t.0 as usize)
                    .cloned()
                    .ok_or_else(|| format!("unknown token id {}", t.0))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words.join(" "))
    }
}
