use thiserror::Error;


#[derive(Error, Debug)]
pub enum AppError {
    #[error("No active text editor found. Please open a file.")]
    EditorUnavailable,

    #[error("Connectivity check failed: {0}")]
    ConnectivityProbeFailed(String),

    #[error("Failed to get response from Gemini: {0}")]
    InferenceTransport(String),

    #[error("Failed to get response from Gemini: {0}")]
    InferenceMalformed(String),

    #[error("Error: {0}")]
    InferenceShape(String),

    #[error("Please open a workspace folder to create the file.")]
    WorkspaceUnresolved,

    #[error("Failed to create or open file: {0}")]
    OutputWrite(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization/Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit status: 2 when the model answered without usable text,
    /// 1 for every other failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InferenceShape(_) => 2,
            _ => 1,
        }
    }
}
