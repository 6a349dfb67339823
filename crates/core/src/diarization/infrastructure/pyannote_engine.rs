use pyannote_rs::{get_segments, EmbeddingExtractor, EmbeddingManager};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::diarization::domain::diarization_engine::DiarizationEngine;
use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::diarization::error::DiarizationError;
use crate::shared::constants::{
    EMBEDDING_MODEL_NAME, EMBEDDING_MODEL_URL, MAX_SPEAKERS, SEGMENTATION_MODEL_NAME,
    SEGMENTATION_MODEL_URL, SPEAKER_SIMILARITY_THRESHOLD,
};
use crate::shared::model_resolver;

/// Diarization engine using the pyannote segmentation + speaker embedding
/// ONNX pipeline via pyannote-rs.
///
/// The pretrained weights are resolved on first use; the token authorizes
/// their download. Compute device selection is left to the ONNX runtime.
pub struct PyannoteEngine {
    token: String,
}

impl PyannoteEngine {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl DiarizationEngine for PyannoteEngine {
    fn diarize(&self, audio: &AudioSegment) -> Result<Vec<SpeakerTurn>, DiarizationError> {
        let segmentation_model = model_resolver::resolve_with_auth(
            SEGMENTATION_MODEL_NAME,
            SEGMENTATION_MODEL_URL,
            Some(&self.token),
            None,
            None,
        )?;
        let embedding_model = model_resolver::resolve_with_auth(
            EMBEDDING_MODEL_NAME,
            EMBEDDING_MODEL_URL,
            Some(&self.token),
            None,
            None,
        )?;

        let mut extractor = EmbeddingExtractor::new(&embedding_model).map_err(|e| {
            DiarizationError::Engine(format!("failed to load speaker embedding model: {e}"))
        })?;
        let mut clusters = EmbeddingManager::new(MAX_SPEAKERS);

        // pyannote-rs consumes 16-bit PCM
        let samples = audio.to_i16();

        log::info!("Diarizing {:.1}s of audio", audio.duration());
        let segments = get_segments(&samples, audio.sample_rate(), &segmentation_model)
            .map_err(|e| DiarizationError::Engine(format!("segmentation failed: {e}")))?;

        let mut turns = Vec::new();
        for segment in segments {
            let segment = match segment {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("skipping segment: {e}");
                    continue;
                }
            };

            let embedding: Vec<f32> = match extractor.compute(&segment.samples) {
                Ok(values) => values.collect(),
                Err(e) => {
                    log::warn!("skipping segment, embedding failed: {e}");
                    continue;
                }
            };

            // Cluster capacity exhausted leaves the turn unattributed
            let label = match clusters.search_speaker(embedding, SPEAKER_SIMILARITY_THRESHOLD) {
                Some(idx) => format!("speaker_{idx}"),
                None => "unknown".to_string(),
            };

            turns.push(SpeakerTurn {
                start: segment.start,
                end: segment.end,
                label,
            });
        }

        Ok(turns)
    }
}
