//! Token budgeting over a pluggable tokenizer.
//!
//! Truncation is token-aligned: encode, cut the token sequence, decode.
//! A message never loses part of a token, and a message already inside the
//! budget comes back byte-identical.

use triage_abi::Tokenizer;

use crate::errors::BudgetError;

/// Token count of `text` under `tokenizer`.
pub fn count_tokens(tokenizer: &dyn Tokenizer, text: &str) -> usize {
    tokenizer.count(text)
}

/// Cut `text` down to at most `budget` tokens.
///
/// Returns the input unchanged when it already fits. Deterministic for a
/// given tokenizer/model id, and idempotent: truncating an already-truncated
/// text at the same budget is a no-op.
pub fn truncate_to(
    tokenizer: &dyn Tokenizer,
    text: &str,
    budget: usize,
) -> Result<String, BudgetError> {
    let tokens = tokenizer.encode(text);
    if tokens.len() <= budget {
        return Ok(text.to_string());
    }
    tokenizer
        .decode(&tokens[..budget])
        .map_err(|reason| BudgetError::Detokenize {
            model_id: tokenizer.model_id().to_string(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testutil::WordTokenizer;

    #[test]
    fn counts_tokens() {
        let tok = WordTokenizer::new();
        assert_eq!(count_tokens(&tok, "one two three"), 3);
        assert_eq!(count_tokens(&tok, ""), 0);
    }

    #[test]
    fn text_within_budget_is_returned_unchanged() {
        let tok = WordTokenizer::new();
        assert_eq!(truncate_to(&tok, "a b c", 3).unwrap(), "a b c");
        assert_eq!(truncate_to(&tok, "a b c", 10).unwrap(), "a b c");
    }

    #[test]
    fn truncation_cuts_to_exactly_budget_tokens() {
        let tok = WordTokenizer::new();
        let out = truncate_to(&tok, "a b c d e", 2).unwrap();
        assert_eq!(out, "a b");
        assert_eq!(count_tokens(&tok, &out), 2);
    }

    #[test]
    fn truncation_is_idempotent() {
        let tok = WordTokenizer::new();
        let once = truncate_to(&tok, "w x y z", 3).unwrap();
        let twice = truncate_to(&tok, &once, 3).unwrap();
        assert_eq!(once, twice);
    }
}
