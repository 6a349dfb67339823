use std::path::PathBuf;

use thiserror::Error;

use crate::shared::model_resolver::ModelResolveError;

#[derive(Error, Debug)]
pub enum DiarizationError {
    #[error("Audio file not found: {}", .0.display())]
    AudioNotFound(PathBuf),
    #[error("no audio stream in {}", .0.display())]
    NoAudioStream(PathBuf),
    #[error("failed to decode audio: {0}")]
    AudioDecode(String),
    #[error("{0}")]
    EngineUnavailable(String),
    #[error("HuggingFace token required. Set HUGGINGFACE_TOKEN environment variable or pass --token.")]
    MissingToken,
    #[error(transparent)]
    ModelResolve(#[from] ModelResolveError),
    #[error("diarization failed: {0}")]
    Engine(String),
}
