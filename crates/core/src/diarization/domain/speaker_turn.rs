/// A contiguous speech interval attributed to one speaker.
///
/// Labels are opaque engine identifiers; report shaping maps them to dense
/// 1-based ids in order of first appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

impl SpeakerTurn {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration() {
        let turn = SpeakerTurn::new(1.25, 3.75, "speaker_0");
        assert_relative_eq!(turn.duration(), 2.5, epsilon = 0.001);
    }
}
