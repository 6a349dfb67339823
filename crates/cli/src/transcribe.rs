use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscribe_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audioscribe_core::pipeline::transcribe_use_case::TranscribeUseCase;
use audioscribe_core::report::transcription_report::TranscriptionReport;
use audioscribe_core::shared::model_resolver;
use audioscribe_core::transcription::domain::model_size::ModelSize;
use audioscribe_core::transcription::error::TranscriptionError;
use audioscribe_core::transcription::infrastructure::whisper_engine::WhisperEngine;

/// Transcribe an audio file with word-level timestamps, emitting JSON.
#[derive(Parser)]
#[command(name = "audioscribe-transcribe")]
struct Cli {
    /// Input audio file.
    audio_path: PathBuf,

    /// Whisper model size (tiny, base, small, medium, large).
    #[arg(long, default_value = "small")]
    model: ModelSize,

    /// Language code; omit or pass "auto" to let the engine detect.
    #[arg(long)]
    language: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let report = execute(&cli);
    let success = report.success;

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(_) => println!(r#"{{"success": false, "error": "failed to encode report"}}"#),
    }

    process::exit(if success { 0 } else { 1 });
}

fn execute(cli: &Cli) -> TranscriptionReport {
    // Checked before model resolution so a bad path never costs a download.
    if !cli.audio_path.exists() {
        return TranscriptionReport::failure(format!(
            "Audio file not found: {}",
            cli.audio_path.display()
        ));
    }

    match transcribe(cli) {
        Ok(report) => report,
        Err(e) => TranscriptionReport::failure(e.to_string()),
    }
}

fn transcribe(cli: &Cli) -> Result<TranscriptionReport, TranscriptionError> {
    log::info!("Resolving model: {}", cli.model.file_name());
    let model_path = model_resolver::resolve(
        &cli.model.file_name(),
        &cli.model.url(),
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    let engine = WhisperEngine::new(&model_path)?;
    let use_case = TranscribeUseCase::new(Box::new(FfmpegAudioReader), Box::new(engine));
    use_case.run(&cli.audio_path, cli.language.as_deref())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading Whisper model... {pct}%");
    } else {
        eprint!("\rDownloading Whisper model... {downloaded} bytes");
    }
}
