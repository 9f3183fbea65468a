// ABOUTME: Chat conversation for the COI agent
// ABOUTME: Message types, remote model traits, tool declarations and the session loop

/// Remote text and speech model traits
pub mod client;
/// Conversation and request message definitions
pub mod messages;
/// Chat session driving the text model
pub mod session;
/// Function declarations attached to text requests
pub mod tools;

pub use client::{SpeechSynthesizer, TextGenerator};
pub use messages::{ChatMessage, ChatMode, GenerationRequest, Role, SpeechRequest};
pub use session::ChatSession;
pub use tools::{player_tools, FunctionDeclaration};
