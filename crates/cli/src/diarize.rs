use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscribe_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audioscribe_core::diarization::infrastructure::create_engine;
use audioscribe_core::pipeline::diarize_use_case::DiarizeUseCase;
use audioscribe_core::report::diarization_report::DiarizationReport;

/// Partition an audio file into speaker turns, emitting JSON.
#[derive(Parser)]
#[command(name = "audioscribe-diarize")]
struct Cli {
    /// Input audio file.
    audio_path: PathBuf,

    /// HuggingFace token authorizing the pretrained pipeline download.
    #[arg(long)]
    token: Option<String>,

    /// Skip the engine and emit the single-speaker fallback result.
    #[arg(long)]
    simple: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let report = execute(&cli);
    let success = report.success;

    match serde_json::to_string(&report) {
        Ok(json) => println!("{json}"),
        Err(_) => println!(r#"{{"success":false,"error":"failed to encode report"}}"#),
    }

    process::exit(if success { 0 } else { 1 });
}

fn execute(cli: &Cli) -> DiarizationReport {
    if !cli.audio_path.exists() {
        return DiarizationReport::failure(format!(
            "Audio file not found: {}",
            cli.audio_path.display()
        ));
    }

    if cli.simple {
        return DiarizationReport::fallback();
    }

    let result = create_engine(cli.token.as_deref(), |name| std::env::var(name).ok())
        .and_then(|engine| {
            DiarizeUseCase::new(Box::new(FfmpegAudioReader), engine).run(&cli.audio_path)
        });

    match result {
        Ok(report) => report,
        Err(e) => DiarizationReport::failure(e.to_string()),
    }
}
