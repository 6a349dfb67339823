pub mod diarization_engine;
pub mod speaker_turn;
