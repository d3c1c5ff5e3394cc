//! The host editor surface the command runs against.
//!
//! [`EditorBridge`] is the set of capabilities the pipeline needs from its host.
//! [`TerminalEditor`] provides them from a command line: the active document
//! is a file argument or piped stdin, and opening a file launches `$VISUAL` /
//! `$EDITOR`.

use crate::app_error::AppError;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
pub(crate) mod recording;

#[cfg(test)]
mod editor_test;

pub const UNTITLED_FILE_NAME: &str = "untitled_file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// `None` for an untitled document that has never been saved.
    pub path: Option<PathBuf>,
    pub text: String,
}

impl SourceDocument {
    pub fn saved(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            text: text.into(),
        }
    }

    pub fn untitled(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_FILE_NAME.to_string())
    }
}

pub trait EditorBridge {
    fn active_document(&self) -> Option<SourceDocument>;
    fn workspace_roots(&self) -> Vec<PathBuf>;
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError>;
    fn open_path(&self, path: &Path) -> Result<(), AppError>;
    fn show_info(&self, message: &str);
    fn show_warning(&self, message: &str);
    fn show_error(&self, message: &str);
}

pub struct TerminalEditor {
    document: Option<SourceDocument>,
    workspace_roots: Vec<PathBuf>,
    /// Program used to display written files. `None` only reports the path.
    viewer: Option<String>,
}

impl TerminalEditor {
    pub fn new(
        document: Option<SourceDocument>,
        workspace_roots: Vec<PathBuf>,
        viewer: Option<String>,
    ) -> Self {
        Self {
            document,
            workspace_roots,
            viewer,
        }
    }

    /// Picks the viewer the same way git and friends do.
    pub fn viewer_from_env(lookup: impl Fn(&str) -> Option<String>) -> String {
        ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "vi".to_string())
    }
}

/// Loads the active document: the named file when one is given, otherwise
/// whatever is piped on stdin as an untitled document. An interactive stdin
/// with no file means there is nothing open.
pub fn load_document(
    file: Option<&Path>,
    mut stdin: impl Read,
    stdin_is_terminal: bool,
) -> Result<Option<SourceDocument>, AppError> {
    if let Some(path) = file {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        return Ok(Some(SourceDocument::saved(path, text)));
    }

    if stdin_is_terminal {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(Some(SourceDocument::untitled(text)))
}

pub fn load_document_from_process(file: Option<&Path>) -> Result<Option<SourceDocument>, AppError> {
    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    load_document(file, stdin.lock(), is_terminal)
}

impl EditorBridge for TerminalEditor {
    fn active_document(&self) -> Option<SourceDocument> {
        self.document.clone()
    }

    fn workspace_roots(&self) -> Vec<PathBuf> {
        self.workspace_roots.clone()
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::OutputWrite(format!(
                        "Failed to create parent directory for {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            }
        }
        fs::write(path, contents).map_err(|e| {
            AppError::OutputWrite(format!("Failed to write to file {}: {}", path.display(), e))
        })
    }

    fn open_path(&self, path: &Path) -> Result<(), AppError> {
        let Some(viewer) = &self.viewer else {
            println!("Output written to {}", path.display());
            return Ok(());
        };

        // `$EDITOR` values such as "code --wait" carry their own arguments.
        let mut words = viewer.split_whitespace();
        let program = words.next().unwrap_or("vi");
        let status = Command::new(program).args(words).arg(path).status().map_err(|e| {
            AppError::OutputWrite(format!("Failed to launch editor '{viewer}': {e}"))
        })?;

        if !status.success() {
            return Err(AppError::OutputWrite(format!(
                "Editor '{viewer}' exited with non-zero status while opening {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn show_info(&self, message: &str) {
        println!("[info] {message}");
    }

    fn show_warning(&self, message: &str) {
        eprintln!("[warning] {message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("[error] {message}");
    }
}
