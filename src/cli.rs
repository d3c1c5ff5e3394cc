use crate::connectivity::DEFAULT_PROBE_URL;
use crate::llm::api::{DEFAULT_API_BASE_URL, DEFAULT_MODEL_NAME};
use clap::Parser;
use std::path::PathBuf;

/// Generate a unit test file for a source file with Gemini.
///
/// The generated tests are written next to the source file as
/// `<name>.test.<ext>` and opened in $VISUAL / $EDITOR.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "unit-test-gen", version)]
pub struct CliArgs {
    /// Source file to generate tests for (reads stdin as an untitled document when omitted)
    pub file: Option<PathBuf>,

    /// Workspace root; repeatable, the first one receives output for untitled documents
    #[arg(short, long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    pub model: String,

    /// Base URL of the generative-language API
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// File containing the API key (otherwise GEMINI_API_KEY, then agent-config/gemini-key.txt)
    #[arg(long, value_name = "PATH")]
    pub api_key_file: Option<PathBuf>,

    /// URL fetched once as a connectivity check before calling Gemini
    #[arg(long, default_value = DEFAULT_PROBE_URL)]
    pub probe_url: String,

    /// Skip the connectivity check
    #[arg(long)]
    pub skip_probe: bool,

    /// Do not open the generated file in an editor
    #[arg(long)]
    pub no_open: bool,

    /// Directory that receives per-run log folders
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
