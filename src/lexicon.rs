use serde::Deserialize;

use crate::error::GenerationError;

/// One dictionary entry describing a logistics concept.
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    pub term: String,
    pub definition: String,
}

/// Build the generation prompt for a task.
pub fn build_prompt(task_name: &str, task_description: &str) -> String {
    format!(
        "Generate a logistics/business dictionary for the following task:\n\n\
         Task Name: {task_name}\n\
         Task Description: {task_description}\n\n\
         Include terms related to logistics, international deliveries, and cross-border \
         shipping solutions for e-commerce businesses.\n\n\
         Return in the array only concepts that appear in the task.\n\n\
         Provide the output in the following format:\n\
         [{{\"term\": \"Term1\", \"definition\": \"Definition1\"}}, \
         {{\"term\": \"Term2\", \"definition\": \"Definition2\"}}]"
    )
}

/// Strip an optional markdown code fence from generated text.
///
/// Models frequently wrap the requested JSON in ```json ... ``` even when
/// asked not to. Text without a closing fence is returned unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// Parse generated text into an ordered term list.
pub fn parse_terms(text: &str) -> Result<Vec<Term>, GenerationError> {
    let terms = serde_json::from_str(strip_code_fence(text))?;
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[{"term":"Incoterms","definition":"Trade terms..."}]"#;

    #[test]
    fn test_prompt_embeds_task_fields() {
        let prompt = build_prompt("Customs clearance", "Ship goods from EU to UK");
        assert!(prompt.contains("Task Name: Customs clearance"));
        assert!(prompt.contains("Task Description: Ship goods from EU to UK"));
        assert!(prompt.contains("\"term\": \"Term1\""));
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let fenced = format!("```json\n{}\n```", PAYLOAD);
        let plain = parse_terms(PAYLOAD).unwrap();
        let stripped = parse_terms(&fenced).unwrap();
        assert_eq!(plain.len(), stripped.len());
        assert_eq!(plain[0].term, stripped[0].term);
        assert_eq!(plain[0].definition, stripped[0].definition);
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        let fenced = format!("```\n{}\n```", PAYLOAD);
        assert_eq!(strip_code_fence(&fenced), PAYLOAD);
    }

    #[test]
    fn test_unclosed_fence_left_alone() {
        let text = "```json\n[{\"term\":\"X\"}";
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_terms("this is not json").unwrap_err();
        assert!(err.to_string().contains("not a valid term list"));
    }

    #[test]
    fn test_missing_definition_key_is_an_error() {
        assert!(parse_terms(r#"[{"term":"Incoterms"}]"#).is_err());
    }

    #[test]
    fn test_order_is_preserved() {
        let terms = parse_terms(
            r#"[{"term":"B","definition":"second"},{"term":"A","definition":"first"}]"#,
        )
        .unwrap();
        assert_eq!(terms[0].term, "B");
        assert_eq!(terms[1].term, "A");
    }
}
