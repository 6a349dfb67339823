pub mod diarize_use_case;
pub mod transcribe_use_case;
