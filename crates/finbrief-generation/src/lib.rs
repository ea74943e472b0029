//! # finbrief-generation
//!
//! Turns the selected passages into an executive summary with a chat model.
//!
//! ## Architecture
//!
//! ```text
//! ChatSummaryGenerator (ISummaryGenerator)
//! ├── prompt     (CFO system instruction + context message)
//! └── ChatTransport
//!     └── HttpChatTransport (reqwest blocking, OpenAI-compatible)
//! ```
//!
//! The primary model is asked first; a configured fallback model is tried
//! once if the primary is reported unavailable.

pub mod generator;
pub mod prompt;
pub mod transport;

pub use generator::ChatSummaryGenerator;
pub use prompt::{build_messages, render_context, ChatMessage, SYSTEM_INSTRUCTION};
pub use transport::{ChatRequest, ChatTransport, HttpChatTransport};
