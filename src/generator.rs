use log::info;

use crate::error::GenerationError;
use crate::gemini::GenerationBackend;
use crate::input::TaskInput;
use crate::{lexicon, report};

/// Produces the HTML dictionary report for a task.
pub struct DictionaryGenerator {
    backend: Box<dyn GenerationBackend>,
}

impl DictionaryGenerator {
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Build the prompt, call the backend once, parse the returned term
    /// list and render it.
    pub async fn generate(&self, task: &TaskInput) -> Result<String, GenerationError> {
        let prompt = lexicon::build_prompt(&task.name, &task.description);
        info!("Requesting term list from {}", self.backend.name());
        let generated = self.backend.send_prompt(&prompt).await?;
        let terms = lexicon::parse_terms(&generated)?;
        info!("Parsed {} terms", terms.len());
        Ok(report::render(&task.name, &task.description, &terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::error::ConfigError;
    use crate::gemini::GeminiClient;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CannedBackend {
        calls: Arc<AtomicUsize>,
        response: String,
    }

    #[async_trait]
    impl GenerationBackend for CannedBackend {
        fn name(&self) -> &str {
            "canned"
        }

        async fn send_prompt(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn task() -> TaskInput {
        TaskInput {
            name: "Cross-border returns".to_string(),
            description: "Handle returns from UK customers".to_string(),
            recipient: "ops@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_calls_backend_once_and_renders() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = DictionaryGenerator::new(Box::new(CannedBackend {
            calls: calls.clone(),
            response: r#"[{"term":"RMA","definition":"Return merchandise authorization"}]"#
                .to_string(),
        }));

        let html = generator.generate(&task()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(html.contains("Cross-border returns"));
        assert!(html.contains("Handle returns from UK customers"));
        assert!(html.contains("<strong>RMA:</strong> Return merchandise authorization"));
    }

    #[tokio::test]
    async fn test_fenced_backend_output_is_accepted() {
        let generator = DictionaryGenerator::new(Box::new(CannedBackend {
            calls: Arc::new(AtomicUsize::new(0)),
            response: "```json\n[{\"term\":\"Duty\",\"definition\":\"Import tax\"}]\n```"
                .to_string(),
        }));

        let html = generator.generate(&task()).await.unwrap();
        assert!(html.contains("<strong>Duty:</strong> Import tax"));
    }

    #[tokio::test]
    async fn test_unparseable_backend_output_is_a_generation_error() {
        let generator = DictionaryGenerator::new(Box::new(CannedBackend {
            calls: Arc::new(AtomicUsize::new(0)),
            response: "Sorry, I cannot help with that.".to_string(),
        }));

        assert!(generator.generate(&task()).await.is_err());
    }

    #[test]
    fn test_missing_credential_fails_before_any_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        // Stand-in for the network layer: nothing below the config check
        // may run when the credential is absent.
        let _watchdog = CannedBackend {
            calls: calls.clone(),
            response: String::new(),
        };

        let config = GenerationConfig {
            api_key: None,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            GeminiClient::new(config),
            Err(ConfigError::MissingApiKey)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
