use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diarization::domain::speaker_turn::SpeakerTurn;

/// JSON document emitted by the diarization adapter.
///
/// Same failure contract as the transcription report: only `success` and
/// `error` on failure, no `error` key on success.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiarizationReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SpeakerSegmentEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<SpeakerSummary>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegmentEntry {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    #[serde(rename = "speakerId")]
    pub speaker_id: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub id: usize,
    pub name: String,
    pub total_duration: f64,
}

impl DiarizationReport {
    /// Shape engine turns: each distinct label gets a dense 1-based id in
    /// order of first appearance; talk time accumulates per speaker.
    /// Turn bounds round to 3 decimals, totals to 2, speakers sort by id.
    pub fn from_turns(turns: &[SpeakerTurn]) -> Self {
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<f64> = Vec::new();
        let mut segments = Vec::with_capacity(turns.len());

        for turn in turns {
            let next_id = totals.len() + 1;
            let id = *ids.entry(turn.label.as_str()).or_insert(next_id);
            if id == next_id {
                totals.push(0.0);
            }
            totals[id - 1] += turn.duration();

            segments.push(SpeakerSegmentEntry {
                start: round3(turn.start),
                end: round3(turn.end),
                speaker: format!("Speaker {id}"),
                speaker_id: id,
            });
        }

        let speakers: Vec<SpeakerSummary> = totals
            .iter()
            .enumerate()
            .map(|(i, total)| SpeakerSummary {
                id: i + 1,
                name: format!("Speaker {}", i + 1),
                total_duration: round2(*total),
            })
            .collect();

        Self {
            success: true,
            error: None,
            method: Some("pyannote".to_string()),
            speaker_count: Some(speakers.len()),
            segments: Some(segments),
            speakers: Some(speakers),
        }
    }

    /// Single-speaker placeholder result; no audio is inspected.
    pub fn fallback() -> Self {
        Self {
            success: true,
            error: None,
            method: Some("fallback".to_string()),
            speaker_count: Some(1),
            segments: Some(Vec::new()),
            speakers: Some(vec![SpeakerSummary {
                id: 1,
                name: "Speaker 1".to_string(),
                total_duration: 0.0,
            }]),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            method: None,
            speaker_count: None,
            segments: None,
            speakers: None,
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
