#[cfg(feature = "pyannote")]
pub mod pyannote_engine;

use crate::diarization::domain::diarization_engine::{DiarizationEngine, EngineAvailability};
use crate::diarization::error::DiarizationError;
#[cfg(feature = "pyannote")]
use crate::shared::credential::resolve_credential;

/// Installation hint reported when the engine is compiled out.
pub const UNAVAILABLE_REASON: &str =
    "pyannote diarization not built into this binary. Rebuild with: cargo build --features pyannote";

/// Probe whether the diarization engine is usable in this build.
pub fn availability() -> EngineAvailability {
    #[cfg(feature = "pyannote")]
    {
        EngineAvailability::Available
    }
    #[cfg(not(feature = "pyannote"))]
    {
        EngineAvailability::Unavailable {
            reason: UNAVAILABLE_REASON.to_string(),
        }
    }
}

/// Build the engine for this build: availability first, then the token
/// authorizing the pretrained pipeline weights. An unavailable engine is
/// reported regardless of credential presence.
pub fn create_engine<F>(
    explicit_token: Option<&str>,
    env_lookup: F,
) -> Result<Box<dyn DiarizationEngine>, DiarizationError>
where
    F: Fn(&str) -> Option<String>,
{
    #[cfg(not(feature = "pyannote"))]
    {
        let _ = (explicit_token, env_lookup);
        Err(DiarizationError::EngineUnavailable(
            UNAVAILABLE_REASON.to_string(),
        ))
    }

    #[cfg(feature = "pyannote")]
    {
        let token = resolve_credential(explicit_token, env_lookup)
            .ok_or(DiarizationError::MissingToken)?;
        Ok(Box::new(pyannote_engine::PyannoteEngine::new(token)))
    }
}
