// ABOUTME: Conversation and request message definitions
// ABOUTME: Chat history entries plus the request shapes sent to the text and speech models

use crate::chat::tools::FunctionDeclaration;
use crate::config::ModelConfig;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Reply style requested from the text model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Low-latency model, no reasoning budget
    #[default]
    Fast,
    /// Reasoning model with a thinking budget
    Think,
}

/// One entry in the chat history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ChatMode>,
    pub timestamp: SystemTime,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, mode: ChatMode) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            mode: Some(mode),
            timestamp: SystemTime::now(),
        }
    }

    pub fn assistant(content: impl Into<String>, mode: Option<ChatMode>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            mode,
            timestamp: SystemTime::now(),
        }
    }
}

/// Text generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<FunctionDeclaration>,
}

impl GenerationRequest {
    /// Pick model and thinking budget for `mode`
    pub fn for_mode(mode: ChatMode, prompt: String, models: &ModelConfig) -> Self {
        let (model, thinking_budget) = match mode {
            ChatMode::Fast => (models.fast.clone(), None),
            ChatMode::Think => (models.think.clone(), Some(models.thinking_budget)),
        };
        Self {
            model,
            prompt,
            thinking_budget,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<FunctionDeclaration>) -> Self {
        self.tools = tools;
        self
    }
}

/// Speech synthesis request
///
/// The reply is base64 PCM at the speech model's fixed format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub text: String,
    pub voice: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, models: &ModelConfig) -> Self {
        Self {
            model: models.speech.clone(),
            text: text.into(),
            voice: models.voice.clone(),
        }
    }
}
