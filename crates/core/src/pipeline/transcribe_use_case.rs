use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::report::transcription_report::TranscriptionReport;
use crate::shared::constants::ENGINE_SAMPLE_RATE;
use crate::transcription::domain::transcription_engine::TranscriptionEngine;
use crate::transcription::error::TranscriptionError;

/// Transcription adapter flow: validate, decode, invoke, shape.
pub struct TranscribeUseCase {
    reader: Box<dyn AudioReader>,
    engine: Box<dyn TranscriptionEngine>,
}

impl TranscribeUseCase {
    pub fn new(reader: Box<dyn AudioReader>, engine: Box<dyn TranscriptionEngine>) -> Self {
        Self { reader, engine }
    }

    /// A `language` of None or "auto" leaves detection to the engine.
    pub fn run(
        &self,
        audio_path: &Path,
        language: Option<&str>,
    ) -> Result<TranscriptionReport, TranscriptionError> {
        if !audio_path.exists() {
            return Err(TranscriptionError::AudioNotFound(audio_path.to_path_buf()));
        }

        let audio = self
            .reader
            .read_audio(audio_path, ENGINE_SAMPLE_RATE)
            .map_err(|e| TranscriptionError::AudioDecode(e.to_string()))?
            .ok_or_else(|| TranscriptionError::NoAudioStream(audio_path.to_path_buf()))?;

        let hint = language.filter(|l| *l != "auto");
        let transcript = self.engine.transcribe(&audio, hint)?;

        Ok(TranscriptionReport::from_transcript(&transcript))
    }
}
