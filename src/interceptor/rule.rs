//! Which requests get observed.

use crate::config::GrokVideoConfig;
use crate::transport::{HttpMethod, HttpRequest};

/// Matches requests by method and URL substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptRule {
    /// Case-sensitive substring the URL must contain.
    pub url_pattern: String,
    /// Method the request must use.
    pub method: HttpMethod,
}

impl InterceptRule {
    /// Create a rule.
    pub fn new(url_pattern: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url_pattern: url_pattern.into(),
            method,
        }
    }

    /// Rule described by `config`.
    pub fn from_config(config: &GrokVideoConfig) -> Self {
        Self::new(config.endpoint_pattern.clone(), config.intercept_method)
    }

    /// Whether `request` should be observed.
    pub fn matches(&self, request: &HttpRequest) -> bool {
        request.method == self.method && request.url.contains(&self.url_pattern)
    }
}

impl Default for InterceptRule {
    fn default() -> Self {
        Self::from_config(&GrokVideoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_post_to_conversation_endpoint() {
        let rule = InterceptRule::default();
        let request = HttpRequest::new(
            HttpMethod::Post,
            "https://grok.com/rest/app-chat/conversations/new?mode=video",
        );
        assert!(rule.matches(&request));
    }

    #[test]
    fn test_rejects_other_methods() {
        let rule = InterceptRule::default();
        let request = HttpRequest::new(HttpMethod::Get, "https://grok.com/rest/app-chat/conversations/new");
        assert!(!rule.matches(&request));
    }

    #[test]
    fn test_rejects_other_endpoints() {
        let rule = InterceptRule::default();
        let request = HttpRequest::new(HttpMethod::Post, "https://grok.com/rest/app-chat/conversations/123/responses");
        assert!(!rule.matches(&request));

        let request = HttpRequest::new(HttpMethod::Post, "https://grok.com/REST/APP-CHAT/CONVERSATIONS/NEW");
        assert!(!rule.matches(&request));
    }
}
