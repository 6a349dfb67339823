use std::path::PathBuf;

use thiserror::Error;

use crate::shared::model_resolver::ModelResolveError;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("Audio file not found: {}", .0.display())]
    AudioNotFound(PathBuf),
    #[error("no audio stream in {}", .0.display())]
    NoAudioStream(PathBuf),
    #[error("failed to decode audio: {0}")]
    AudioDecode(String),
    #[error(transparent)]
    ModelResolve(#[from] ModelResolveError),
    #[error("failed to load Whisper model: {0}")]
    ModelLoad(String),
    #[error("transcription failed: {0}")]
    Engine(String),
}
