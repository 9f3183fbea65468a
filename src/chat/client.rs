// ABOUTME: Remote model boundary for the COI agent
// ABOUTME: Narrow async traits for text generation and speech synthesis collaborators

use crate::chat::messages::{GenerationRequest, SpeechRequest};
use crate::error::Error;
use async_trait::async_trait;

/// Hosted text model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `request`
    ///
    /// `Ok(None)` means the model answered without any text.
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, Error>;
}

/// Hosted speech model
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `request.text`, returning base64 16-bit little-endian PCM
    ///
    /// `Ok(None)` means the model returned no audio part.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Option<String>, Error>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, Error> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for std::sync::Arc<T> {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Option<String>, Error> {
        (**self).synthesize(request).await
    }
}
