use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::diarization::domain::diarization_engine::DiarizationEngine;
use crate::diarization::error::DiarizationError;
use crate::report::diarization_report::DiarizationReport;
use crate::shared::constants::ENGINE_SAMPLE_RATE;

/// Diarization adapter flow: validate, decode, invoke, shape.
pub struct DiarizeUseCase {
    reader: Box<dyn AudioReader>,
    engine: Box<dyn DiarizationEngine>,
}

impl DiarizeUseCase {
    pub fn new(reader: Box<dyn AudioReader>, engine: Box<dyn DiarizationEngine>) -> Self {
        Self { reader, engine }
    }

    pub fn run(&self, audio_path: &Path) -> Result<DiarizationReport, DiarizationError> {
        if !audio_path.exists() {
            return Err(DiarizationError::AudioNotFound(audio_path.to_path_buf()));
        }

        let audio = self
            .reader
            .read_audio(audio_path, ENGINE_SAMPLE_RATE)
            .map_err(|e| DiarizationError::AudioDecode(e.to_string()))?
            .ok_or_else(|| DiarizationError::NoAudioStream(audio_path.to_path_buf()))?;

        let turns = self.engine.diarize(&audio)?;

        Ok(DiarizationReport::from_turns(&turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::diarization::domain::speaker_turn::SpeakerTurn;
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    // ─── Stubs ───

    struct StubAudioReader {
        segment: Option<AudioSegment>,
    }

    impl AudioReader for StubAudioReader {
        fn read_audio(
            &self,
            _: &Path,
            _: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            Ok(self.segment.clone())
        }
    }

    struct StubEngine {
        turns: Vec<SpeakerTurn>,
        invoked: Arc<Mutex<bool>>,
    }

    impl StubEngine {
        fn new(turns: Vec<SpeakerTurn>) -> Self {
            Self {
                turns,
                invoked: Arc::new(Mutex::new(false)),
            }
        }
    }

    impl DiarizationEngine for StubEngine {
        fn diarize(&self, _: &AudioSegment) -> Result<Vec<SpeakerTurn>, DiarizationError> {
            *self.invoked.lock().unwrap() = true;
            Ok(self.turns.clone())
        }
    }

    struct FailingEngine;

    impl DiarizationEngine for FailingEngine {
        fn diarize(&self, _: &AudioSegment) -> Result<Vec<SpeakerTurn>, DiarizationError> {
            Err(DiarizationError::Engine("pipeline exploded".to_string()))
        }
    }

    fn silent_audio() -> AudioSegment {
        AudioSegment::new(vec![0.0; 16000], 16000)
    }

    #[test]
    fn test_missing_file_fails_without_invoking_engine() {
        let engine = StubEngine::new(vec![]);
        let invoked = engine.invoked.clone();
        let uc = DiarizeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(engine),
        );

        let err = uc.run(Path::new("/nonexistent/audio.wav")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Audio file not found: /nonexistent/audio.wav"
        );
        assert!(!*invoked.lock().unwrap());
    }

    #[test]
    fn test_success_shapes_turns_into_report() {
        let file = NamedTempFile::new().unwrap();
        let turns = vec![
            SpeakerTurn::new(0.0, 2.0, "SPEAKER_A"),
            SpeakerTurn::new(2.0, 3.5, "SPEAKER_B"),
            SpeakerTurn::new(4.0, 7.0, "SPEAKER_A"),
        ];
        let uc = DiarizeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(StubEngine::new(turns)),
        );

        let report = uc.run(file.path()).unwrap();
        assert!(report.success);
        assert_eq!(report.method.as_deref(), Some("pyannote"));
        assert_eq!(report.speaker_count, Some(2));
        assert_eq!(report.segments.unwrap().len(), 3);
    }

    #[test]
    fn test_no_audio_stream_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let uc = DiarizeUseCase::new(
            Box::new(StubAudioReader { segment: None }),
            Box::new(StubEngine::new(vec![])),
        );

        let err = uc.run(file.path()).unwrap_err();
        assert!(matches!(err, DiarizationError::NoAudioStream(_)));
    }

    #[test]
    fn test_engine_error_propagates() {
        let file = NamedTempFile::new().unwrap();
        let uc = DiarizeUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(FailingEngine),
        );

        let err = uc.run(file.path()).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(err.to_string().contains("pipeline exploded"));
    }
}
