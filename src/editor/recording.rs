use super::{EditorBridge, SourceDocument};
use crate::app_error::AppError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shown {
    Info(String),
    Warning(String),
    Error(String),
}

/// In-memory host that records everything the pipeline asks of it.
#[derive(Default)]
pub(crate) struct RecordingEditor {
    pub document: Option<SourceDocument>,
    pub roots: Vec<PathBuf>,
    pub fail_writes: bool,
    pub written: RefCell<HashMap<PathBuf, Vec<u8>>>,
    pub opened: RefCell<Vec<PathBuf>>,
    pub messages: RefCell<Vec<Shown>>,
}

impl RecordingEditor {
    pub fn with_document(document: SourceDocument) -> Self {
        Self {
            document: Some(document),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter_map(|m| match m {
                Shown::Error(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter_map(|m| match m {
                Shown::Warning(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter_map(|m| match m {
                Shown::Info(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EditorBridge for RecordingEditor {
    fn active_document(&self) -> Option<SourceDocument> {
        self.document.clone()
    }

    fn workspace_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::OutputWrite("disk full".to_string()));
        }
        self.written
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn open_path(&self, path: &Path) -> Result<(), AppError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn show_info(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(Shown::Info(message.to_string()));
    }

    fn show_warning(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(Shown::Warning(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(Shown::Error(message.to_string()));
    }
}
