//! End-to-end round trip against a fake echo-back backend.

use pretty_assertions::assert_eq;
use tiktoken_tokenizer::BpeTokenizer;
use triage_abi::{CompletionBackend, CompletionParams, ModelOutput, UsageCounters};
use triage_core::{classification_spec, Classifier, ClassifyError, ExtractError, SpecPreset};

/// Behaves like a local completion call with echo enabled: returns the whole
/// prompt back, then the canned continuation, then EOS.
struct EchoBackend {
    answer: &'static str,
}

impl CompletionBackend for EchoBackend {
    fn complete(
        &mut self,
        prompt: &str,
        _params: &CompletionParams,
    ) -> Result<ModelOutput, String> {
        Ok(ModelOutput {
            text: format!("{prompt} \n{} </s>", self.answer),
            usage: UsageCounters {
                prompt_tokens: 321,
                completion_tokens: 19,
            },
        })
    }
}

/// A model that ignores the echo contract entirely.
struct NoEchoBackend;

impl CompletionBackend for NoEchoBackend {
    fn complete(
        &mut self,
        _prompt: &str,
        _params: &CompletionParams,
    ) -> Result<ModelOutput, String> {
        Ok(ModelOutput {
            text: r#"{ "CATEGORY": "Review", "SUB-CATEGORY": [] }"#.to_string(),
            usage: UsageCounters::default(),
        })
    }
}

#[test]
fn classifies_through_synthetic_echo() {
    let tokenizer = BpeTokenizer::cl100k().unwrap();
    let classifier = Classifier::new(classification_spec(SpecPreset::Llama2Chat));
    let mut backend = EchoBackend {
        answer: r#"{ "CATEGORY": "Complaint", "SUB-CATEGORY": ["Pricing"] }"#,
    };

    let parsed = classifier
        .classify(
            &mut backend,
            &tokenizer,
            "a great product, and convenient shipment",
            Some(200),
        )
        .unwrap();

    assert_eq!(parsed.category, "Complaint");
    assert_eq!(parsed.subcategories, vec!["Pricing".to_string()]);
    assert_eq!(parsed.message, "a great product, and convenient shipment");
    assert_eq!(parsed.usage.prompt_tokens, 321);
    assert_eq!(parsed.usage.completion_tokens, 19);
}

#[test]
fn missing_echo_surfaces_as_malformed() {
    let tokenizer = BpeTokenizer::cl100k().unwrap();
    let classifier = Classifier::new(classification_spec(SpecPreset::Llama2Chat));

    let err = classifier
        .classify(&mut NoEchoBackend, &tokenizer, "whatever", None)
        .unwrap_err();

    match err {
        ClassifyError::Extract(ExtractError::MalformedEcho { found, .. }) => {
            assert!(found < 2);
        }
        other => panic!("expected MalformedEcho, got {other:?}"),
    }
}

#[test]
fn backend_failures_are_not_extraction_failures() {
    struct FailingBackend;
    impl CompletionBackend for FailingBackend {
        fn complete(
            &mut self,
            _prompt: &str,
            _params: &CompletionParams,
        ) -> Result<ModelOutput, String> {
            Err("model not loaded".to_string())
        }
    }

    let tokenizer = BpeTokenizer::cl100k().unwrap();
    let classifier = Classifier::new(classification_spec(SpecPreset::WizardMega));
    let err = classifier
        .classify(&mut FailingBackend, &tokenizer, "hi", None)
        .unwrap_err();
    assert!(matches!(err, ClassifyError::Backend(msg) if msg == "model not loaded"));
}
