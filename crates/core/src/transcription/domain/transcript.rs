/// Raw engine output, before report shaping.
#[derive(Clone, Debug)]
pub struct EngineTranscript {
    pub text: String,
    /// Detected or caller-supplied language code; None when the engine
    /// reports nothing.
    pub language: Option<String>,
    pub segments: Vec<TranscriptSegment>,
}

/// A contiguous transcribed interval with its word-level timing.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub words: Vec<TranscriptWord>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f32,
}

impl TranscriptWord {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transcript_word_duration() {
        let w = TranscriptWord {
            word: "test".to_string(),
            start: 2.0,
            end: 2.8,
            confidence: 0.9,
        };
        assert_relative_eq!(w.duration(), 0.8, epsilon = 0.001);
    }
}
