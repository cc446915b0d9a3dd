//! The conversational assistant core.
//!
//! [`SessionManager`] owns the conversation: an append-only [`Transcript`]
//! of turns and a lazily-created remote session handle, with at most one
//! request in flight at a time.

mod persona;
mod session;
mod transcript;

pub use persona::{SYSTEM_INSTRUCTION_TEMPLATE, WELCOME_MESSAGE, build_system_instruction};
pub use session::{CONNECTION_ERROR_REPLY, SendOutcome, SessionManager};
pub use transcript::{Speaker, Transcript, Turn};
