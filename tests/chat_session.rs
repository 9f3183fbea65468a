use async_trait::async_trait;
use coi_voice::chat::messages::GenerationRequest;
use coi_voice::chat::session::FALLBACK_REPLY;
use coi_voice::chat::{ChatMode, ChatSession, Role, TextGenerator};
use coi_voice::config::Config;
use coi_voice::error::Error;
use std::sync::{Arc, Mutex};

/// Text model stand-in that records every request
struct ScriptedGenerator {
    reply: Result<Option<String>, String>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedGenerator {
    fn new(reply: Result<Option<String>, String>) -> (Self, Arc<Mutex<Vec<GenerationRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let generator = Self {
            reply,
            requests: Arc::clone(&requests),
        };
        (generator, requests)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, Error> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(Error::Collaborator)
    }
}

#[test]
fn test_session_opens_with_greeting() {
    let (generator, _) = ScriptedGenerator::new(Ok(None));
    let session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    assert_eq!(session.history().len(), 1);
    let greeting = &session.history()[0];
    assert_eq!(greeting.role, Role::Assistant);
    assert!(greeting.content.starts_with("Hello Jalen Brunson,"));
    assert_eq!(session.mode(), ChatMode::Fast);
}

#[tokio::test]
async fn test_send_records_reply() {
    let (generator, requests) =
        ScriptedGenerator::new(Ok(Some("Your usage rate is trending up.".to_string())));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    let reply = session.send("How am I shooting?").await.unwrap().unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "Your usage rate is trending up.");
    assert_eq!(reply.mode, Some(ChatMode::Fast));

    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history()[1].role, Role::User);
    assert_eq!(session.history()[1].content, "How am I shooting?");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "gemini-3-flash-preview");
    assert!(requests[0].prompt.contains("Active Player Profile: Jalen Brunson."));
    assert!(requests[0].prompt.contains("User Query: How am I shooting?."));
    assert_eq!(requests[0].tools.len(), 3);
}

#[tokio::test]
async fn test_think_mode_switches_model() {
    let (generator, requests) = ScriptedGenerator::new(Ok(Some("Deep analysis.".to_string())));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());
    session.set_mode(ChatMode::Think);

    session.send("Project my next contract").await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].model, "gemini-3-pro-preview");
    assert_eq!(requests[0].thinking_budget, Some(32_768));
    assert_eq!(session.last_reply().unwrap().mode, Some(ChatMode::Think));
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let (generator, requests) = ScriptedGenerator::new(Ok(Some("unused".to_string())));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    assert!(session.send("   \n").await.unwrap().is_none());
    assert_eq!(session.history().len(), 1);
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_reply_uses_fallback() {
    let (generator, _) = ScriptedGenerator::new(Ok(None));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    let reply = session.send("Anything?").await.unwrap().unwrap();
    assert_eq!(reply.content, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_generator_error_is_surfaced() {
    let (generator, _) = ScriptedGenerator::new(Err("quota exceeded".to_string()));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    let result = session.send("Compare me to Curry").await;
    assert!(matches!(result, Err(Error::Collaborator(_))));

    // User message is kept, no assistant reply added
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].role, Role::User);
}

#[tokio::test]
async fn test_empty_text_reply_uses_fallback() {
    let (generator, _) = ScriptedGenerator::new(Ok(Some(String::new())));
    let mut session = ChatSession::new("Jalen Brunson", generator, &Config::default());

    let reply = session.send("Anything?").await.unwrap().unwrap();
    assert_eq!(reply.content, FALLBACK_REPLY);
    assert_eq!(reply.role, Role::Assistant);
}
