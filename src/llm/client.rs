use anyhow::{Context, Result};
use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use super::handle::{ContextMessage, Role, SessionHandle};
use super::sse_parser::sse_to_fragment_stream;

/// A lazy, finite, non-restartable sequence of response fragments.
///
/// Each item is one fragment in arrival order; an `Err` item means the
/// exchange failed and the sequence is over.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// The streaming dispatcher contract.
///
/// `open_session` configures a fresh conversational context; `stream`
/// opens one remote exchange against it. The dispatcher keeps no state
/// between calls and never retries — retry policy belongs to the caller.
pub trait Dispatcher {
    /// Creates a new conversational context with the fixed model and
    /// system instruction. Local and infallible; no network involved.
    fn open_session(&self) -> SessionHandle;

    /// Opens a fresh streamed exchange: the accumulated context plus the
    /// new utterance go out, fragments come back one at a time.
    fn stream(
        &self,
        session: &SessionHandle,
        utterance: &str,
    ) -> impl Future<Output = Result<FragmentStream>> + Send;
}

// Borrowed serialization: the request only needs to outlive the POST.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

impl<'a> From<&'a ContextMessage> for WireMessage<'a> {
    fn from(message: &'a ContextMessage) -> Self {
        Self {
            role: message.role,
            content: &message.content,
        }
    }
}

/// Streaming client for OpenAI-compatible chat-completions endpoints.
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    system_instruction: String,
}

impl LlmClient {
    /// Creates a client bound to a fixed endpoint, model, and persona.
    ///
    /// Model and system instruction are immutable for the lifetime of the
    /// client; sessions it opens inherit both.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        model: String,
        system_instruction: String,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
            system_instruction,
        }
    }
}

impl Dispatcher for LlmClient {
    fn open_session(&self) -> SessionHandle {
        SessionHandle::new(&self.model, &self.system_instruction)
    }

    async fn stream(&self, session: &SessionHandle, utterance: &str) -> Result<FragmentStream> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let messages = session
            .history()
            .iter()
            .map(WireMessage::from)
            .chain(std::iter::once(WireMessage {
                role: Role::User,
                content: utterance,
            }))
            .collect();

        let chat_request = ChatCompletionRequest {
            model: session.model(),
            messages,
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        Ok(Box::pin(sse_to_fragment_stream(response.bytes_stream())))
    }
}
