mod client;
mod handle;
mod sse_parser;

pub use client::{Dispatcher, FragmentStream, LlmClient};
pub use handle::{ContextMessage, Role, SessionHandle};
