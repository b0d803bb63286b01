use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TemplateError;

/// `{identifier}` tokens only. Literal braces that don't wrap a bare
/// identifier (e.g. JSON in an example output) never match and pass through.
pub(super) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap());

/// One worked (input, expected-output) pair embedded in the prompt to steer
/// the model's output format.
#[derive(Debug, Clone)]
pub struct ExampleTurn {
    pub input: String,
    pub output: String,
}

impl ExampleTurn {
    pub fn new<I: Into<String>, O: Into<String>>(input: I, output: O) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Immutable description of a prompt family for one model/task combination.
///
/// Built once, never mutated. Placeholders are resolved against a fixed
/// field set: `{system}`, `{message}`, and `{example_input_i}` /
/// `{example_output_i}` for each example pair (1-based). Anything else is
/// rejected here, at construction, instead of surfacing mid-batch.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    id: String,
    system: String,
    examples: Vec<ExampleTurn>,
    template: String,
    cutoff: String,
    stops: Vec<String>,
}

impl PromptSpec {
    pub fn new<S, T, C>(
        id: S,
        system: T,
        examples: Vec<ExampleTurn>,
        template: C,
        cutoff: impl Into<String>,
        stops: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, TemplateError>
    where
        S: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        let spec = Self {
            id: id.into(),
            system: system.into(),
            examples,
            template: template.into(),
            cutoff: cutoff.into(),
            stops: stops.into_iter().map(Into::into).collect(),
        };

        if spec.examples.is_empty() {
            return Err(TemplateError::MissingExamples {
                spec_id: spec.id.clone(),
            });
        }
        for caps in PLACEHOLDER.captures_iter(&spec.template) {
            let name = &caps[1];
            if spec.field(name, "").is_none() {
                return Err(TemplateError::UnknownPlaceholder {
                    spec_id: spec.id.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(spec)
    }

    /// Resolve a placeholder name against the spec's fields plus the
    /// per-call user message. `None` means the name is unknown.
    pub(super) fn field<'a>(&'a self, name: &str, message: &'a str) -> Option<&'a str> {
        match name {
            "system" => Some(&self.system),
            "message" => Some(message),
            _ => {
                let (kind, index) = name
                    .rsplit_once('_')
                    .and_then(|(k, i)| Some((k, i.parse::<usize>().ok()?)))?;
                let turn = (index >= 1).then(|| self.examples.get(index - 1))??;
                match kind {
                    "example_input" => Some(&turn.input),
                    "example_output" => Some(&turn.output),
                    _ => None,
                }
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn examples(&self) -> &[ExampleTurn] {
        &self.examples
    }

    pub(super) fn template(&self) -> &str {
        &self.template
    }

    /// Sentinel substring marking the prompt/answer boundary in echo-back
    /// output. Appears once after the example block and once after the real
    /// user block.
    pub fn cutoff(&self) -> &str {
        &self.cutoff
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_example() -> Vec<ExampleTurn> {
        vec![ExampleTurn::new("sample in", "sample out")]
    }

    #[test]
    fn accepts_known_placeholders() {
        let spec = PromptSpec::new(
            "t",
            "sys",
            one_example(),
            "{system}|{example_input_1}|{example_output_1}|{message}",
            "[/INST]",
            ["</s>"],
        );
        assert!(spec.is_ok());
    }

    #[test]
    fn rejects_unknown_placeholder_at_construction() {
        let err = PromptSpec::new("t", "sys", one_example(), "{mesage}", "[/INST]", ["</s>"])
            .unwrap_err();
        match err {
            TemplateError::UnknownPlaceholder { spec_id, name } => {
                assert_eq!(spec_id, "t");
                assert_eq!(name, "mesage");
            }
            other => panic!("expected UnknownPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn rejects_example_index_out_of_range() {
        let err = PromptSpec::new("t", "sys", one_example(), "{example_input_2}", "x", ["</s>"])
            .unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPlaceholder { .. }));
    }

    #[test]
    fn rejects_empty_example_list() {
        let err = PromptSpec::new("t", "sys", Vec::new(), "{message}", "x", ["</s>"]).unwrap_err();
        assert!(matches!(err, TemplateError::MissingExamples { .. }));
    }

    #[test]
    fn literal_braces_are_not_placeholders() {
        // JSON-looking text inside the template must pass through untouched.
        let spec = PromptSpec::new(
            "t",
            "sys",
            one_example(),
            r#"{ "CATEGORY": "x" } {message}"#,
            "x",
            ["</s>"],
        );
        assert!(spec.is_ok());
    }
}
