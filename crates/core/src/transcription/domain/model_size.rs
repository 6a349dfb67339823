use std::fmt;
use std::str::FromStr;

use crate::shared::constants::WHISPER_MODEL_BASE_URL;

/// Whisper model size classes, smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }

    /// ggml weight file name as published in the whisper.cpp model repo.
    pub fn file_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }

    pub fn url(&self) -> String {
        format!("{}/ggml-{}.bin", WHISPER_MODEL_BASE_URL, self.as_str())
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            other => Err(format!(
                "unknown model size '{other}' (expected tiny, base, small, medium or large)"
            )),
        }
    }
}
