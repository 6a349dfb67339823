use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::transcription::domain::transcript::{
    EngineTranscript, TranscriptSegment, TranscriptWord,
};
use crate::transcription::domain::transcription_engine::TranscriptionEngine;
use crate::transcription::error::TranscriptionError;

/// Transcription engine using whisper.cpp via whisper-rs.
///
/// Holds only the weight path; the context is loaded per call, so every
/// invocation pays the full cold-start cost.
#[derive(Debug)]
pub struct WhisperEngine {
    model_path: PathBuf,
}

impl WhisperEngine {
    pub fn new(model_path: &Path) -> Result<Self, TranscriptionError> {
        if !model_path.exists() {
            return Err(TranscriptionError::ModelLoad(format!(
                "model file not found at {}",
                model_path.display()
            )));
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl TranscriptionEngine for WhisperEngine {
    fn transcribe(
        &self,
        audio: &AudioSegment,
        language: Option<&str>,
    ) -> Result<EngineTranscript, TranscriptionError> {
        let model_path = self
            .model_path
            .to_str()
            .ok_or_else(|| TranscriptionError::ModelLoad("invalid model path".to_string()))?;

        log::info!("Loading Whisper model from {model_path}");
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .map_err(|e| TranscriptionError::ModelLoad(e.to_string()))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| TranscriptionError::ModelLoad(e.to_string()))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        // None leaves language detection to the model
        params.set_language(language);
        params.set_translate(false);
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        log::info!("Transcribing {:.1}s of audio", audio.duration());
        state
            .full(params, audio.samples())
            .map_err(|e| TranscriptionError::Engine(e.to_string()))?;

        let language = match language {
            Some(lang) => Some(lang.to_string()),
            None => whisper_rs::get_lang_str(state.full_lang_id()).map(str::to_string),
        };

        let mut segments: Vec<TranscriptSegment> = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let mut seg_text = String::new();
            let mut words: Vec<TranscriptWord> = Vec::new();
            let mut seg_start: Option<f64> = None;
            let mut seg_end: f64 = 0.0;

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };

                let text = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens (like [_BEG_], [_SOT_], <|endoftext|>)
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                seg_text.push_str(text);

                let token_data = token.token_data();

                // Token timestamps are in centiseconds (10ms units)
                let start = token_data.t0 as f64 / 100.0;
                let end = token_data.t1 as f64 / 100.0;

                // Skip tokens with invalid timestamps
                if end <= start {
                    continue;
                }

                if seg_start.is_none() {
                    seg_start = Some(start);
                }
                seg_end = seg_end.max(end);

                words.push(TranscriptWord {
                    word: trimmed.to_string(),
                    start,
                    end,
                    confidence: token.token_probability(),
                });
            }

            if words.is_empty() {
                continue;
            }

            segments.push(TranscriptSegment {
                start: seg_start.unwrap_or(0.0),
                end: seg_end,
                text: seg_text,
                words,
            });
        }

        let text = segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(EngineTranscript {
            text,
            language,
            segments,
        })
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nonexistent_path_returns_error() {
        let result = WhisperEngine::new(Path::new("/nonexistent/model.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_nonexistent_path_error_message() {
        let result = WhisperEngine::new(Path::new("/nonexistent/model.bin"));
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("not found"),
            "Expected 'not found' in error, got: {err}"
        );
    }
}
