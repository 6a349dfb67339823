use crate::audio::domain::audio_segment::AudioSegment;
use crate::transcription::error::TranscriptionError;

use super::transcript::EngineTranscript;

/// Domain interface for speech-to-text transcription.
///
/// Implementations produce full text plus segment- and word-level timing.
pub trait TranscriptionEngine: Send {
    /// `language` is a hint forwarded to the engine; None lets it
    /// auto-detect.
    fn transcribe(
        &self,
        audio: &AudioSegment,
        language: Option<&str>,
    ) -> Result<EngineTranscript, TranscriptionError>;
}
