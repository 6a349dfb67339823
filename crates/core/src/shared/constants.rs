/// Sample rate both engines expect; decoded audio is resampled to this.
pub const ENGINE_SAMPLE_RATE: u32 = 16000;

/// Whisper ggml weights are published per size class under this repo.
pub const WHISPER_MODEL_BASE_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

pub const SEGMENTATION_MODEL_NAME: &str = "segmentation-3.0.onnx";
pub const SEGMENTATION_MODEL_URL: &str =
    "https://huggingface.co/thewh1teagle/segmentation-3.0/resolve/main/segmentation-3.0.onnx";

pub const EMBEDDING_MODEL_NAME: &str = "wespeaker_en_voxceleb_CAM++.onnx";
pub const EMBEDDING_MODEL_URL: &str =
    "https://huggingface.co/thewh1teagle/wespeaker-en-voxceleb-CAM/resolve/main/wespeaker_en_voxceleb_CAM++.onnx";

/// Speaker-cluster capacity for a single diarization run.
pub const MAX_SPEAKERS: usize = 10;

/// Cosine similarity above which an embedding joins an existing cluster.
pub const SPEAKER_SIMILARITY_THRESHOLD: f32 = 0.5;

/// Environment variables consulted for the HuggingFace token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["HUGGINGFACE_TOKEN", "HF_TOKEN"];
