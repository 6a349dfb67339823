use serde::{Deserialize, Serialize};

use crate::transcription::domain::transcript::EngineTranscript;

/// JSON document emitted by the transcription adapter.
///
/// On failure only `success` and `error` are populated; on success `error`
/// is absent. Either way stdout carries one well-formed JSON document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranscriptionReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<ReportSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<ReportWord>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl TranscriptionReport {
    /// Flatten the engine transcript: per-segment timing plus one top-level
    /// word sequence in segment-then-word order. Per-word confidence is
    /// dropped; a missing language code becomes "unknown".
    pub fn from_transcript(transcript: &EngineTranscript) -> Self {
        let segments: Vec<ReportSegment> = transcript
            .segments
            .iter()
            .map(|s| ReportSegment {
                start: s.start,
                end: s.end,
                text: s.text.clone(),
            })
            .collect();

        let words: Vec<ReportWord> = transcript
            .segments
            .iter()
            .flat_map(|s| s.words.iter())
            .map(|w| ReportWord {
                word: w.word.clone(),
                start: w.start,
                end: w.end,
            })
            .collect();

        Self {
            success: true,
            error: None,
            text: Some(transcript.text.clone()),
            language: Some(
                transcript
                    .language
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
            segments: Some(segments),
            words: Some(words),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            text: None,
            language: None,
            segments: None,
            words: None,
        }
    }
}
