//! Natural-language explanations of query results.
//!
//! After a query succeeds, the session can ask a language model to summarise
//! the result in a sentence or two. Any OpenAI-compatible chat completions
//! endpoint works; the default is a local Ollama server.
//!
//! Explanations are optional. [`from_config`] returns `None` when they are
//! turned off, the prompt builders return `None` when there is nothing to
//! explain, and a failing explainer never aborts a session.

use crate::config::ExplainConfig;
use crate::domain::Overview;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source of explanations.
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Answer `prompt`.
    async fn explain(&self, prompt: &str) -> Result<String>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatExplainer {
    client: Client,
    config: ExplainConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl ChatExplainer {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Explain`] if the HTTP client cannot be built.
    pub fn new(config: ExplainConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::debug!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized chat explainer"
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Explainer for ChatExplainer {
    async fn explain(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Explain(format!("HTTP {status}: {body}")));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Explain("response contained no choices".to_string()))
    }
}

/// Build the explainer described by `config`, or `None` when disabled.
///
/// # Errors
///
/// Returns an error if an enabled client cannot be constructed.
pub fn from_config(config: &ExplainConfig) -> Result<Option<Box<dyn Explainer>>> {
    if !config.enabled {
        tracing::debug!("Explanations disabled");
        return Ok(None);
    }
    Ok(Some(Box::new(ChatExplainer::new(config.clone())?)))
}

/// Prompt explaining the direct dependencies of `name`.
pub fn direct_prompt(name: &str, dependencies: &[String]) -> Option<String> {
    if dependencies.is_empty() {
        return None;
    }
    Some(format!(
        "Explain in one sentence the direct dependencies of '{name}': {}",
        dependencies.join(", ")
    ))
}

/// Prompt summarising the indirect dependencies of `name`.
pub fn indirect_prompt(name: &str, dependencies: &[String]) -> Option<String> {
    if dependencies.is_empty() {
        return None;
    }
    Some(format!(
        "Summarise in one sentence the indirect dependencies of '{name}': {}",
        dependencies.join(", ")
    ))
}

/// Prompt explaining what uses `name`.
pub fn users_prompt(name: &str, users: &[String]) -> Option<String> {
    if users.is_empty() {
        return None;
    }
    Some(format!(
        "Explain in one sentence what uses '{name}': {}",
        users.join(", ")
    ))
}

/// Prompt summarising both directions around a name.
pub fn overview_prompt(overview: &Overview) -> Option<String> {
    if overview.is_isolated() {
        return None;
    }

    let mut prompt = format!(
        "Summarise in at most 2 sentences the relations of '{}'",
        overview.name
    );
    if !overview.dependencies.is_empty() {
        prompt.push_str(&format!(
            " with its dependencies ({})",
            overview.dependencies.join(", ")
        ));
    }
    if !overview.users.is_empty() {
        prompt.push_str(&format!(" and its users ({})", overview.users.join(", ")));
    }
    prompt.push('.');
    Some(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn no_prompt_for_empty_results() {
        assert!(direct_prompt("A.B", &[]).is_none());
        assert!(indirect_prompt("A.B", &[]).is_none());
        assert!(users_prompt("A.B", &[]).is_none());
        assert!(overview_prompt(&Overview {
            name: "A.B".to_string(),
            ..Overview::default()
        })
        .is_none());
    }

    #[test]
    fn direct_prompt_lists_dependencies() {
        let prompt =
            direct_prompt("SALES.ORDERS", &names(&["REF.CLIENTS", "REF.PRODUCTS"])).unwrap();
        assert_eq!(
            prompt,
            "Explain in one sentence the direct dependencies of 'SALES.ORDERS': \
             REF.CLIENTS, REF.PRODUCTS"
        );
    }

    #[test]
    fn users_prompt_lists_users() {
        let prompt = users_prompt("REF.CLIENTS", &names(&["SALES.ORDERS"])).unwrap();
        assert!(prompt.contains("'REF.CLIENTS'"));
        assert!(prompt.ends_with("SALES.ORDERS"));
    }

    #[test]
    fn overview_prompt_mentions_only_present_sides() {
        let only_users = Overview {
            name: "REF.CLIENTS".to_string(),
            dependencies: vec![],
            users: names(&["SALES.ORDERS"]),
        };
        let prompt = overview_prompt(&only_users).unwrap();
        assert!(!prompt.contains("dependencies"));
        assert!(prompt.ends_with("and its users (SALES.ORDERS)."));

        let both = Overview {
            name: "SALES.ORDERS".to_string(),
            dependencies: names(&["REF.CLIENTS"]),
            users: names(&["BI.REVENUE"]),
        };
        assert_eq!(
            overview_prompt(&both).unwrap(),
            "Summarise in at most 2 sentences the relations of 'SALES.ORDERS' \
             with its dependencies (REF.CLIENTS) and its users (BI.REVENUE)."
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let explainer = ChatExplainer::new(ExplainConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..ExplainConfig::default()
        })
        .unwrap();
        assert_eq!(
            explainer.endpoint(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_an_explain_error() {
        let explainer = ChatExplainer::new(ExplainConfig {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            timeout_secs: 2,
            ..ExplainConfig::default()
        })
        .unwrap();

        let err = explainer.explain("hello").await.unwrap_err();
        assert!(matches!(err, Error::Explain(_)));
    }

    #[test]
    fn from_config_respects_enabled_flag() {
        let disabled = ExplainConfig {
            enabled: false,
            ..ExplainConfig::default()
        };
        assert!(from_config(&disabled).unwrap().is_none());
        assert!(from_config(&ExplainConfig::default()).unwrap().is_some());
    }

    #[test]
    fn request_body_shape() {
        let request = ChatRequest {
            model: "mistral",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
            max_tokens: 10,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["max_tokens"], 10);
    }
}
