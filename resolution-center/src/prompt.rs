//! Prompt builder: fixed system persona + user/policy context block.

use dataset_store::models::{Policy, User};

/// System persona sent with every completion request.
///
/// Keep this short: it consistently improves steering without wasting tokens.
pub const DEFAULT_SYSTEM: &str = "You are a helpful resolution-center assistant.";

/// Build the prompt context from a resolved user and the policy document.
///
/// Pure and deterministic: user line first, then the policy document rendered
/// as compact JSON. No truncation, no escaping; the output is best-effort
/// natural-language context, not a syntactically constrained payload.
pub fn build_context(user: &User, policies: &Policy) -> String {
    format!("User: {}\nPolicies: {}", user.name, policies)
}

/// Compose the final user-level prompt: context, separator, question, and a
/// fixed instruction suffix.
pub fn compose_prompt(question: &str, context: &str) -> String {
    format!("{context}\n\nUser Question: {question}\nAnswer with instructions and visual guidance.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            user_id: 1,
            name: "Alice".into(),
            tickets: vec![],
            balance: 0.0,
        }
    }

    fn sample_policy() -> Policy {
        Policy {
            ticket_rules: vec!["No resale above face value.".into()],
            refund_policy: vec!["Refunds within 14 days.".into()],
            escrow_rules: vec![],
            account_help: vec![],
            visual_forms: serde_json::Map::new(),
        }
    }

    #[test]
    fn context_orders_user_line_before_policies() {
        let ctx = build_context(&sample_user(), &sample_policy());
        assert!(ctx.starts_with("User: Alice\nPolicies: {"));
        assert!(ctx.contains("Refunds within 14 days."));
    }

    #[test]
    fn context_is_byte_deterministic() {
        let user = sample_user();
        let policy = sample_policy();
        assert_eq!(build_context(&user, &policy), build_context(&user, &policy));
    }

    #[test]
    fn prompt_carries_separator_and_instruction_suffix() {
        let prompt = compose_prompt("How do I get a refund?", "User: Alice\nPolicies: {}");
        assert_eq!(
            prompt,
            "User: Alice\nPolicies: {}\n\nUser Question: How do I get a refund?\nAnswer with instructions and visual guidance."
        );
    }
}
