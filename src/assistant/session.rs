use anyhow::Result;
use futures_util::StreamExt;

use super::transcript::{Transcript, Turn};
use crate::llm::{Dispatcher, SessionHandle};

/// Fallback reply appended when an exchange fails for any reason.
pub const CONNECTION_ERROR_REPLY: &str =
    "Sorry, I lost my connection to the server. Try again?";

/// What a `send` call did. Failures are absorbed into the transcript as an
/// error turn; the caller never sees a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The full response arrived and was appended.
    Completed,
    /// The exchange failed; a fallback error turn was appended.
    Failed,
    /// The utterance was empty or whitespace-only; nothing changed.
    IgnoredEmpty,
    /// A previous send is still in flight; nothing changed.
    IgnoredBusy,
}

/// Owns the conversation: the transcript, the lazily-created remote
/// context, and the one-request-at-a-time guard.
///
/// Single-writer by construction — nothing else mutates the transcript or
/// the handle.
pub struct SessionManager<D: Dispatcher> {
    dispatcher: D,
    transcript: Transcript,
    handle: Option<SessionHandle>,
    in_flight: bool,
}

impl<D: Dispatcher> SessionManager<D> {
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            transcript: Transcript::new(),
            handle: None,
            in_flight: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Discards the conversation.
    ///
    /// Remote context and transcript are conceptually paired, so both are
    /// reset together; the next send creates a fresh handle.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.handle = None;
    }

    /// Sends a user utterance and streams the reply into the transcript.
    ///
    /// The user turn is appended synchronously before any network
    /// activity, followed by an initially-empty assistant turn, so the
    /// transcript shows the assistant as responding before the first
    /// fragment lands. `on_fragment` runs after each fragment has been
    /// applied — the view's cue to repaint.
    ///
    /// Empty input and reentrant calls are silent no-ops. Any transport or
    /// remote failure leaves the partial assistant turn as-is and appends
    /// [`CONNECTION_ERROR_REPLY`] as a separate turn; the guard is cleared
    /// on every exit path so the user can retry.
    pub async fn send<F>(&mut self, utterance: &str, mut on_fragment: F) -> SendOutcome
    where
        F: FnMut(&str),
    {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return SendOutcome::IgnoredEmpty;
        }
        if self.in_flight {
            return SendOutcome::IgnoredBusy;
        }
        self.in_flight = true;

        self.transcript.push(Turn::user(utterance));
        self.handle
            .get_or_insert_with(|| self.dispatcher.open_session());
        self.transcript.push(Turn::assistant(""));

        let outcome = match self.run_exchange(utterance, &mut on_fragment).await {
            Ok(reply) => {
                if let Some(handle) = self.handle.as_mut() {
                    handle.record_exchange(utterance, &reply);
                }
                SendOutcome::Completed
            }
            Err(_) => {
                // Whatever arrived before the failure stays visible; the
                // apology goes in as its own turn.
                self.transcript.push(Turn::assistant(CONNECTION_ERROR_REPLY));
                SendOutcome::Failed
            }
        };

        self.in_flight = false;
        outcome
    }

    async fn run_exchange<F>(&mut self, utterance: &str, on_fragment: &mut F) -> Result<String>
    where
        F: FnMut(&str),
    {
        let Some(handle) = self.handle.as_ref() else {
            anyhow::bail!("session handle missing");
        };

        let mut stream = self.dispatcher.stream(handle, utterance).await?;
        let mut reply = String::new();

        // Strictly incremental: each fragment extends the visible turn
        // before the next one is awaited.
        while let Some(fragment) = stream.next().await {
            let fragment = fragment?;
            reply.push_str(&fragment);
            self.transcript.extend_last(&fragment);
            on_fragment(&fragment);
        }

        Ok(reply)
    }
}
