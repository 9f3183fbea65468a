// ABOUTME: Chat session for the COI agent
// ABOUTME: Keeps history, builds the agent prompt and records model replies

use crate::chat::client::TextGenerator;
use crate::chat::messages::{ChatMessage, ChatMode, GenerationRequest, Role};
use crate::chat::tools::{player_tools, FunctionDeclaration};
use crate::config::{Config, ModelConfig};
use crate::error::Error;

/// Reply recorded when the model answers with no or empty text
pub const FALLBACK_REPLY: &str = "I'm having connectivity issues with the data core.";

/// Conversation between one player and the agent
pub struct ChatSession<G> {
    player_name: String,
    generator: G,
    models: ModelConfig,
    tools: Vec<FunctionDeclaration>,
    mode: ChatMode,
    history: Vec<ChatMessage>,
}

impl<G: TextGenerator> ChatSession<G> {
    /// Start a session; history opens with the agent's greeting
    pub fn new(player_name: impl Into<String>, generator: G, config: &Config) -> Self {
        let player_name = player_name.into();
        let greeting = ChatMessage::assistant(
            format!(
                "Hello {}, I've synchronized your career history. I'm here to help optimize your path. What can I analyze for you?",
                player_name
            ),
            None,
        );

        Self {
            player_name,
            generator,
            models: config.models.clone(),
            tools: player_tools(),
            mode: ChatMode::default(),
            history: vec![greeting],
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Most recent assistant reply, if any
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.history
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
    }

    /// Agent prompt wrapping a user query
    pub fn build_prompt(&self, query: &str) -> String {
        format!(
            "Act as COI (Career Optimization Interface), a high-level elite professional athlete agent.\n\
             Active Player Profile: {}.\n\n\
             User Query: {}.\n\n\
             Provide highly accurate simulated data-driven insights based on real NBA history and projections.\n\
             Keep responses concise but expert.",
            self.player_name, query
        )
    }

    /// Send a user message and record the agent's reply
    ///
    /// Blank input is ignored and yields `Ok(None)`. On a model error the
    /// user message stays in history and the error is returned.
    pub async fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>, Error> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let mode = self.mode;
        self.history.push(ChatMessage::user(input, mode));

        let request = GenerationRequest::for_mode(mode, self.build_prompt(input), &self.models)
            .with_tools(self.tools.clone());

        log::debug!("Requesting {:?} reply from {}", mode, request.model);

        let reply = match self.generator.generate(&request).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                log::warn!("Text model returned no content");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => {
                log::error!("Text generation failed: {}", e);
                return Err(e);
            }
        };

        self.history.push(ChatMessage::assistant(reply, Some(mode)));
        Ok(self.history.last())
    }
}
