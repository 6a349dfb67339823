use std::process;

use audioscribe_core::diarization::domain::diarization_engine::EngineAvailability;
use audioscribe_core::diarization::infrastructure::availability;

/// One-shot capability probe for the diarization engine.
/// Exit code 0 when usable, 1 when not; one status line on stdout.
fn main() {
    match availability() {
        EngineAvailability::Available => println!("pyannote available"),
        EngineAvailability::Unavailable { reason } => {
            println!("pyannote not available: {reason}");
            process::exit(1);
        }
    }
}
