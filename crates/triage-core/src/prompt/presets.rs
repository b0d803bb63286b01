//! Ready-made classification specs for the supported local model families.
//!
//! One `PromptSpec` record per family, selected by tag. The skeletons differ
//! (Llama 2 chat wants `[INST]` blocks, Wizard Mega wants `###` headers) but
//! they share the system instructions and the one-shot example.

use crate::prompt::spec::{ExampleTurn, PromptSpec};

/// System instructions for the e-commerce message classification task.
pub const CLASSIFICATION_SYSTEM: &str = r#"You are an expert in going through customer messages and categorize them for an ecommerce website.
Your responsibility is to follow the steps provided without any preamble or further questions and provide the best categories you can come up with.
You must only output in JSON format with the keys CATEGORY and SUB-CATEGORY and nothing more.
DO NOT include CLUES and REASONING in your response.
Steps to follow:
1. Read the Message delimited with ```
2. List CLUES that will help you understand the sentiment of the INPUT message (i.e., keywords, phrases, contextual information, semantic relations, semantic meaning, tones, references) that support the intent of the INPUT.
3. Deduce the diagnostic REASONING process from premises (i.e., CLUES, INPUTS) to determine what the user is actually asking.
4. Decide which CATEGORY best fit the message from the following list [Review,Inquiry,Feedback,Cancellation,Complaint,Exchange,Return,Request,Notification].
5. Come up with a generic set of SUB-CATEGORY that best fit the INPUT message.
"#;

const EXAMPLE_INPUT: &str =
    "I subscribe to this monthly but just got an email stating that it's changing from 17 oz. to 16.9 oz. - ";
const EXAMPLE_OUTPUT: &str = r#"{ "CATEGORY": "Complaint", "SUB-CATEGORY": ["Pricing"]}"#;

// Llama 2 chat GGUF skeleton. `[/INST]` shows up twice, once after the
// example block and once after the real user block; the answer starts after
// the second occurrence in the echo.
const LLAMA2_TEMPLATE: &str = r#"
<s>[INST] <<SYS>>
{system}
<</SYS>>

```
{example_input_1}
``` [/INST]
{example_output_1} </s>

<s>[INST]
```
{message}
``` [/INST]"#;

// Wizard Mega GGUF skeleton.
const WIZARD_TEMPLATE: &str = r#"
### Instruction:
{system}

```
{example_input_1}
```

### Assistant:
{example_output_1}

```
{message}
``` "#;

/// Generic, model-agnostic spec families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecPreset {
    Llama2Chat,
    WizardMega,
}

/// Factory: build the classification spec for a model family.
pub fn classification_spec(preset: SpecPreset) -> PromptSpec {
    let example = vec![ExampleTurn::new(EXAMPLE_INPUT, EXAMPLE_OUTPUT)];
    match preset {
        SpecPreset::Llama2Chat => PromptSpec::new(
            "llama2-chat-classification",
            CLASSIFICATION_SYSTEM,
            example,
            LLAMA2_TEMPLATE,
            "[/INST]",
            ["```", "</s>", "<s>", "[INST]", "[/INST]"],
        ),
        SpecPreset::WizardMega => PromptSpec::new(
            "wizard-mega-classification",
            CLASSIFICATION_SYSTEM,
            example,
            WIZARD_TEMPLATE,
            "### Assistant:",
            ["```", "###"],
        ),
    }
    .expect("preset templates are well-formed")
}
