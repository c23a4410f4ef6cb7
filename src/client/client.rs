//! Main client implementation.

use serde_json::Value;
use std::sync::Arc;

use crate::config::GrokVideoConfig;
use crate::error::{GrokVideoError, GrokVideoResult, PromptError};
use crate::interceptor::{InterceptRule, InterceptingTransport, StreamMonitor};
use crate::notify::{BellNotifier, GatedNotifier, Notifier};
use crate::observability::create_logger;
use crate::render::{render_json, render_plain_text};
use crate::state::{CompletionDispatcher, PromptState};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{parse_prompt, VideoPrompt};

/// Owns the intercepting transport and the prompt it keeps current.
///
/// # Example
///
/// ```no_run
/// use integrations_grok_video::transport::{HttpMethod, HttpRequest};
/// use integrations_grok_video::{create_client, GrokVideoConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = create_client(GrokVideoConfig::default())?;
///
/// let request = HttpRequest::new(HttpMethod::Post, "https://grok.com/rest/app-chat/conversations/new")
///     .with_json_body(&serde_json::json!({"message": "a kite over the sea"}));
/// let _body = client.transport().send_streaming(request).await?;
///
/// println!("{}", client.plain_text()?);
/// # Ok(())
/// # }
/// ```
pub struct GrokVideoClient {
    config: GrokVideoConfig,
    transport: Arc<InterceptingTransport>,
    state: PromptState,
}

impl GrokVideoClient {
    /// Assemble a client around `inner`, signalling completions on `notifier`.
    pub fn new(
        config: GrokVideoConfig,
        inner: Arc<dyn HttpTransport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = PromptState::new();
        let notifier: Arc<dyn Notifier> = Arc::new(GatedNotifier::new(notifier, config.sound_enabled));
        let dispatcher = CompletionDispatcher::new(state.clone(), notifier);
        let monitor = StreamMonitor::new(Arc::new(dispatcher));

        let transport = InterceptingTransport::new(
            inner,
            InterceptRule::from_config(&config),
            monitor,
            create_logger("grok_video.interceptor", config.log_level),
        );

        Self {
            config,
            transport: Arc::new(transport),
            state,
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GrokVideoConfig {
        &self.config
    }

    /// Transport to send requests through.
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }

    /// Shared handle to the current prompt.
    pub fn prompt_state(&self) -> &PromptState {
        &self.state
    }

    /// Snapshot of the current prompt.
    pub fn current_prompt(&self) -> Value {
        self.state.current()
    }

    /// Current prompt as descriptive text.
    pub fn plain_text(&self) -> Result<String, PromptError> {
        let prompt = VideoPrompt::from_value(&self.state.current())?;
        Ok(render_plain_text(&prompt))
    }

    /// Current prompt as pretty JSON.
    pub fn export_json(&self) -> Result<String, PromptError> {
        render_json(&self.state.current())
    }

    /// Replace the current prompt with JSON text merged over the empty template.
    pub fn load_prompt(&self, text: &str) -> Result<u64, PromptError> {
        let prompt = parse_prompt(text)?;
        Ok(self.state.replace(prompt))
    }

    /// Reset the current prompt to the empty template.
    pub fn reset_prompt(&self) -> u64 {
        self.state.clear()
    }
}

/// Create a client over `reqwest` that rings the terminal bell on completion.
pub fn create_client(config: GrokVideoConfig) -> GrokVideoResult<GrokVideoClient> {
    let transport = ReqwestTransport::new(config.timeout, config.connect_timeout)?;
    Ok(GrokVideoClient::new(
        config,
        Arc::new(transport),
        Arc::new(BellNotifier::stderr()),
    ))
}

/// Create a client configured from environment variables.
pub fn create_client_from_env() -> Result<GrokVideoClient, GrokVideoError> {
    create_client(GrokVideoConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockHttpTransport, MockNotifier};
    use crate::types::empty_template;

    fn client(sound_enabled: bool) -> (GrokVideoClient, Arc<MockNotifier>) {
        let config = GrokVideoConfig::builder()
            .sound_enabled(sound_enabled)
            .build()
            .unwrap();
        let notifier = Arc::new(MockNotifier::new());
        let client = GrokVideoClient::new(config, Arc::new(MockHttpTransport::new()), notifier.clone());
        (client, notifier)
    }

    #[test]
    fn test_starts_with_empty_template() {
        let (client, _) = client(true);
        assert_eq!(client.current_prompt(), empty_template());
        assert_eq!(client.prompt_state().version(), 0);
    }

    #[test]
    fn test_load_and_reset_prompt() {
        let (client, _) = client(true);

        let version = client.load_prompt(r#"{"motion":"drift","tags":["sea"]}"#).unwrap();
        assert_eq!(version, 1);
        assert_eq!(client.current_prompt()["motion"], "drift");
        assert_eq!(client.current_prompt()["shot"], empty_template()["shot"]);
        assert!(client.plain_text().unwrap().contains("Tags: sea"));

        client.reset_prompt();
        assert_eq!(client.current_prompt(), empty_template());
    }

    #[test]
    fn test_load_rejects_bad_input() {
        let (client, _) = client(true);
        assert!(matches!(client.load_prompt("{nope"), Err(PromptError::InvalidJson { .. })));
        assert_eq!(client.load_prompt("[1]"), Err(PromptError::NotAnObject));
        assert_eq!(client.prompt_state().version(), 0);
    }

    #[test]
    fn test_export_json_is_pretty() {
        let (client, _) = client(false);
        assert!(!client.config().sound_enabled);
        let text = client.export_json().unwrap();
        assert!(text.starts_with("{\n"));
    }
}
