pub mod diarization_report;
pub mod transcription_report;
