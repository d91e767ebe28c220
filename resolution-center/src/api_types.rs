//! Public API types re-used by external crates (e.g., the HTTP API layer).

use serde::{Deserialize, Serialize};

/// One inbound question, tied to a marketplace account.
///
/// Constructed per call, discarded after use.
#[derive(Clone, Debug, Deserialize)]
pub struct AskRequest {
    /// Id of the user asking the question.
    pub user_id: i64,
    /// Natural language question for the resolution center.
    pub question: String,
}

/// Final answer returned to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolutionAnswer {
    /// The model's answer, plain text.
    pub text: String,
    /// Structured hint describing a UI form to render alongside the text.
    pub visual_form: VisualForm,
}

/// Descriptor of a UI form shown next to the answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub fields: Vec<String>,
}

impl VisualForm {
    /// The fixed placeholder attached to every answer today.
    ///
    /// Real form derivation from the answer content is not wired in yet; the
    /// value is static regardless of question or answer.
    pub fn placeholder() -> Self {
        Self {
            kind: "dummy_form".into(),
            fields: vec!["example_field1".into(), "example_field2".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_serializes_with_type_key() {
        let answer = ResolutionAnswer {
            text: "Contact support.".into(),
            visual_form: VisualForm::placeholder(),
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Contact support.",
                "visual_form": {
                    "type": "dummy_form",
                    "fields": ["example_field1", "example_field2"]
                }
            })
        );
    }
}
