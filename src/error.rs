use thiserror::Error;

/// Falhas possíveis do track picker.
///
/// O texto de cada variante é exatamente a mensagem devolvida ao chamador.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("yt-dlp failed: {stderr}")]
    ToolFailed { stderr: String },

    #[error("No entries found in playlist")]
    NoEntries,

    #[error("playlist entry is missing field `{0}`")]
    MissingField(&'static str),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("No input provided")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
