use chrono::{DateTime, Utc};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation.
///
/// An in-progress assistant turn grows monotonically as fragments arrive;
/// once the exchange completes the text never changes again.
#[derive(Debug, Clone)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered, append-only log of turns; insertion order is display order.
///
/// The only in-place mutation allowed is growing the text of the last
/// turn while a response streams in.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Appends a fragment to the in-progress (last) turn.
    pub fn extend_last(&mut self, fragment: &str) {
        if let Some(turn) = self.turns.last_mut() {
            turn.text.push_str(fragment);
        }
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hi"));
        transcript.push(Turn::assistant("hello"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].speaker, Speaker::User);
        assert_eq!(transcript.turns()[1].speaker, Speaker::Assistant);
    }

    #[test]
    fn test_extend_last_grows_only_the_last_turn() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("question"));
        transcript.push(Turn::assistant(""));

        transcript.extend_last("Hel");
        transcript.extend_last("lo");

        assert_eq!(transcript.turns()[0].text, "question");
        assert_eq!(transcript.turns()[1].text, "Hello");
    }

    #[test]
    fn test_extend_last_on_empty_transcript_is_a_no_op() {
        let mut transcript = Transcript::new();
        transcript.extend_last("orphan");
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_turns_are_timestamped_in_creation_order() {
        let first = Turn::user("a");
        let second = Turn::assistant("b");
        assert!(first.created_at <= second.created_at);
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hi"));
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }
}
