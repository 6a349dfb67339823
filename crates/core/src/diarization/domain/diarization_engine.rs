use crate::audio::domain::audio_segment::AudioSegment;
use crate::diarization::error::DiarizationError;

use super::speaker_turn::SpeakerTurn;

/// Domain interface for speaker diarization.
pub trait DiarizationEngine: Send {
    /// Partition audio into ordered speaker-attributed turns.
    fn diarize(&self, audio: &AudioSegment) -> Result<Vec<SpeakerTurn>, DiarizationError>;
}

/// Whether the diarization engine can run in this build.
///
/// Probed once at startup rather than discovered through deferred failure
/// at first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineAvailability {
    Available,
    Unavailable { reason: String },
}

impl EngineAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, EngineAvailability::Available)
    }
}
