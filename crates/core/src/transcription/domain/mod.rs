pub mod model_size;
pub mod transcript;
pub mod transcription_engine;
